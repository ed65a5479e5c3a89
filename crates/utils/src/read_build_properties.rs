use mpsver_core::{BuildProperties, ResolveError};
use std::io::ErrorKind;
use std::path::Path;

/// Read a Latin-1 properties file in one call.
///
/// The file handle is released before this returns, on success or failure.
///
/// # Errors
/// Returns [`ResolveError::FileMissing`] if the file does not exist,
/// [`ResolveError::Unreadable`] for any other I/O failure and
/// [`ResolveError::Malformed`] if the content has a broken escape.
pub fn read_build_properties(path: &Path) -> Result<BuildProperties, ResolveError> {
    log::debug!("reading build properties from {}", path.display());
    let bytes = std::fs::read(path).map_err(|source| match source.kind() {
        ErrorKind::NotFound => ResolveError::FileMissing {
            path: path.to_path_buf(),
        },
        _ => ResolveError::Unreadable {
            path: path.to_path_buf(),
            source,
        },
    })?;
    BuildProperties::from_latin1(&bytes).map_err(|source| ResolveError::Malformed {
        path: path.to_path_buf(),
        source,
    })
}
