// Windows builds of the mpsver binary get an application manifest so the
// console tool runs without elevation prompts and with long path support.
#[cfg(windows)]
use embed_manifest::{embed_manifest, new_manifest};

#[cfg(windows)]
fn main() {
    embed_manifest(new_manifest("Mpsver.Mpsver")).expect("unable to embed manifest file");
}

#[cfg(not(windows))]
fn main() {}
