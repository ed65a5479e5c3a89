/// Host architecture as the JVM reports it in `os.arch`.
///
/// MPS ships its JNA libraries under `lib/jna/<os.arch>`, so `x86_64` maps to `amd64`.
#[must_use]
pub fn host_os_arch() -> &'static str {
    jvm_os_arch(std::env::consts::ARCH)
}

#[must_use]
pub fn jvm_os_arch(rust_arch: &'static str) -> &'static str {
    match rust_arch {
        "x86_64" => "amd64",
        _ => rust_arch,
    }
}
