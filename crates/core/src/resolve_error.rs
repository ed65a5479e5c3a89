use std::path::PathBuf;
use thiserror::Error;

/// Why a build.properties file could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PropertiesError {
    #[error("malformed \\uXXXX escape on line {line}")]
    MalformedUnicodeEscape { line: usize },
}

/// Why an MPS version could not be determined.
///
/// `resolve_version` collapses all of these into `None`; `resolve` keeps them apart.
#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("build properties not found at {}", .path.display())]
    FileMissing { path: PathBuf },

    #[error("could not read {}", .path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed build properties in {}", .path.display())]
    Malformed {
        path: PathBuf,
        #[source]
        source: PropertiesError,
    },

    #[error("property {key} not found in {}", .path.display())]
    KeyMissing { path: PathBuf, key: String },

    #[error("build number {value:?} does not match <prefix>-<major>.<build>")]
    Unparseable { value: String },

    #[error("no MPS release known for major version {major}")]
    UnknownVersion { major: u32 },

    #[error("unknown MPS release label {label:?}")]
    UnknownLabel { label: String },
}
