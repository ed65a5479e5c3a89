//! # mpsver-launcher
//!
//! MPS version detection and backend launch settings.
//!
//! Reads the build number out of an MPS `build.properties` file, maps it to a release
//! label, and computes the Java toolchain and JVM arguments an MPS backend of that
//! release needs. Nothing here spawns a process.

pub mod launch_config;
pub mod version_resolver;

pub use launch_config::{
    ADD_OPENS_MODULES, JavaLaunchConfig, java_language_version, needs_jna_boot_path,
};
pub use version_resolver::{
    VersionResolver, mps_version_from_mps_home, platform_version_from_mps_home, resolve,
    resolve_version,
};
