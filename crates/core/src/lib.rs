//! # mpsver-core
//!
//! Core types for detecting the version of a JetBrains MPS installation.
//!
//! A `build.properties` file carries `mps.build.number=MPS-213.7172.1079`; the
//! major token (`213`) is looked up in the [`MpsVersion`] table to get the public
//! release label (`2021.3`).

pub mod build_number;
pub mod build_properties;
pub mod config;
pub mod mps_version;
pub mod resolve_error;

pub use build_number::{BuildNumber, platform_version};
pub use build_properties::{BuildProperties, decode_latin1};
pub use config::Config;
pub use mps_version::MpsVersion;
pub use resolve_error::{PropertiesError, ResolveError};

/// Default location of build.properties relative to the root directory
pub const BUILD_PROPERTIES_PATH: &str = "build/mps/build.properties";

/// File name of build.properties inside an MPS home
pub const BUILD_PROPERTIES_FILE: &str = "build.properties";

/// Property holding the MPS build number
pub const BUILD_NUMBER_KEY: &str = "mps.build.number";
