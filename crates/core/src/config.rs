use serde::{Deserialize, Serialize};

use crate::{BUILD_NUMBER_KEY, BUILD_PROPERTIES_PATH};

/// Loaded from `.mpsver/config.json`, controls where build metadata is read from and how the backend is launched.
///
/// Every field has a default, so an empty object (or no file at all) gives the standard MPS layout.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Path of build.properties relative to the root directory (default: "build/mps/build.properties")
    #[serde(default = "default_properties_path")]
    pub properties_path: String,

    /// Property holding the build number (default: "mps.build.number")
    #[serde(default = "default_build_number_key")]
    pub build_number_key: String,

    /// Vendor of the Java toolchain used to run MPS (default: "JetBrains")
    #[serde(default = "default_java_vendor")]
    pub java_vendor: String,

    /// Architecture directory under `lib/jna`; the host architecture when unset
    #[serde(default)]
    pub os_arch: Option<String>,
}

fn default_properties_path() -> String {
    BUILD_PROPERTIES_PATH.to_string()
}

fn default_build_number_key() -> String {
    BUILD_NUMBER_KEY.to_string()
}

fn default_java_vendor() -> String {
    "JetBrains".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            properties_path: default_properties_path(),
            build_number_key: default_build_number_key(),
            java_vendor: default_java_vendor(),
            os_arch: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_object_uses_defaults() {
        let config: Config = serde_json::from_str("{}").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.properties_path, "build/mps/build.properties");
        assert_eq!(config.build_number_key, "mps.build.number");
        assert_eq!(config.java_vendor, "JetBrains");
        assert_eq!(config.os_arch, None);
    }

    #[test]
    fn test_camel_case_fields() {
        let config: Config = serde_json::from_str(
            r#"{"propertiesPath": "mps/build.properties", "buildNumberKey": "build.number", "osArch": "aarch64"}"#,
        )
        .unwrap();
        assert_eq!(config.properties_path, "mps/build.properties");
        assert_eq!(config.build_number_key, "build.number");
        assert_eq!(config.java_vendor, "JetBrains");
        assert_eq!(config.os_arch.as_deref(), Some("aarch64"));
    }

    #[test]
    fn test_serialize_round_trips_through_json() {
        let json = serde_json::to_string(&Config::default()).unwrap();
        assert!(json.contains(r#""propertiesPath":"build/mps/build.properties""#));
        assert!(json.contains(r#""osArch":null"#));
    }
}
