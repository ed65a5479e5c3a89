use mpsver_core::{Config, MpsVersion};
use mpsver_utils::host_os_arch;
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Packages MPS reaches into reflectively; each is opened to the unnamed module.
pub const ADD_OPENS_MODULES: &[&str] = &[
    "java.base/java.io",
    "java.base/java.lang",
    "java.base/java.lang.reflect",
    "java.base/java.net",
    "java.base/java.nio",
    "java.base/java.nio.charset",
    "java.base/java.text",
    "java.base/java.time",
    "java.base/java.util",
    "java.base/java.util.concurrent",
    "java.base/java.util.concurrent.atomic",
    "java.base/jdk.internal.vm",
    "java.base/sun.nio.ch",
    "java.base/sun.nio.fs",
    "java.base/sun.security.ssl",
    "java.base/sun.security.util",
    "java.desktop/java.awt",
    "java.desktop/java.awt.dnd.peer",
    "java.desktop/java.awt.event",
    "java.desktop/java.awt.image",
    "java.desktop/java.awt.peer",
    "java.desktop/javax.swing",
    "java.desktop/javax.swing.plaf.basic",
    "java.desktop/javax.swing.text.html",
    "java.desktop/sun.awt.datatransfer",
    "java.desktop/sun.awt.image",
    "java.desktop/sun.awt",
    "java.desktop/sun.font",
    "java.desktop/sun.java2d",
    "java.desktop/sun.swing",
    "jdk.attach/sun.tools.attach",
    "jdk.compiler/com.sun.tools.javac.api",
    "jdk.internal.jvmstat/sun.jvmstat.monitor",
    "jdk.jdi/com.sun.tools.jdi",
    "java.desktop/sun.lwawt",
    "java.desktop/sun.lwawt.macosx",
    "java.desktop/com.apple.laf",
    "java.desktop/com.apple.eawt",
    "java.desktop/com.apple.eawt.event",
];

/// How a JVM running an MPS backend has to be configured.
///
/// This only describes the launch; starting the process is up to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JavaLaunchConfig {
    pub mps_version: MpsVersion,
    pub java_vendor: String,
    pub java_language_version: u32,
    pub jvm_args: Vec<String>,
    pub working_dir: PathBuf,
    pub system_properties: BTreeMap<String, String>,
}

impl JavaLaunchConfig {
    #[must_use]
    pub fn for_mps(
        mps_home: &Path,
        mps_version: MpsVersion,
        temp_dir: &Path,
        os_arch: &str,
    ) -> Self {
        let mut jvm_args = Vec::with_capacity(ADD_OPENS_MODULES.len() + 1);
        if needs_jna_boot_path(mps_version) {
            jvm_args.push(format!(
                "-Djna.boot.library.path={}",
                mps_home.join("lib").join("jna").join(os_arch).display()
            ));
        }
        jvm_args.extend(
            ADD_OPENS_MODULES
                .iter()
                .map(|module| format!("--add-opens={module}=ALL-UNNAMED")),
        );

        // MPS up to 2021.x writes logs into its working directory
        let system_properties = BTreeMap::from([
            (
                "idea.config.path".to_string(),
                temp_dir.join("config").display().to_string(),
            ),
            (
                "idea.system.path".to_string(),
                temp_dir.join("system").display().to_string(),
            ),
        ]);

        Self {
            mps_version,
            java_vendor: "JetBrains".to_string(),
            java_language_version: java_language_version(mps_version),
            jvm_args,
            working_dir: temp_dir.to_path_buf(),
            system_properties,
        }
    }

    /// Same as [`Self::for_mps`], taking the vendor and architecture from `config`
    #[must_use]
    pub fn from_config(
        mps_home: &Path,
        mps_version: MpsVersion,
        temp_dir: &Path,
        config: &Config,
    ) -> Self {
        let os_arch = match config.os_arch.as_deref() {
            Some(os_arch) => os_arch,
            None => host_os_arch(),
        };
        Self::for_mps(mps_home, mps_version, temp_dir, os_arch)
            .with_java_vendor(&config.java_vendor)
    }

    #[must_use]
    pub fn with_java_vendor(mut self, java_vendor: &str) -> Self {
        self.java_vendor = java_vendor.to_string();
        self
    }
}

/// Java release the MPS backend runs on: 11 before 2022, 17 from then on
#[must_use]
pub const fn java_language_version(mps_version: MpsVersion) -> u32 {
    if mps_version.year() < 2022 { 11 } else { 17 }
}

/// MPS 2022.3 and later load JNA from the distribution instead of extracting it
#[must_use]
pub fn needs_jna_boot_path(mps_version: MpsVersion) -> bool {
    mps_version >= MpsVersion::Mps2022_3
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(MpsVersion::Mps2017_1, 11)]
    #[case(MpsVersion::Mps2020_3, 11)]
    #[case(MpsVersion::Mps2021_3, 11)]
    #[case(MpsVersion::Mps2022_2, 17)]
    #[case(MpsVersion::Mps2022_3, 17)]
    #[case(MpsVersion::Mps2025_1, 17)]
    fn test_java_language_version(#[case] version: MpsVersion, #[case] expected: u32) {
        assert_eq!(java_language_version(version), expected);
    }

    #[rstest]
    #[case(MpsVersion::Mps2021_3, false)]
    #[case(MpsVersion::Mps2022_2, false)]
    #[case(MpsVersion::Mps2022_3, true)]
    #[case(MpsVersion::Mps2024_1, true)]
    fn test_needs_jna_boot_path(#[case] version: MpsVersion, #[case] expected: bool) {
        assert_eq!(needs_jna_boot_path(version), expected);
    }

    #[test]
    fn test_for_mps_2021_3() {
        let config = JavaLaunchConfig::for_mps(
            Path::new("/opt/mps"),
            MpsVersion::Mps2021_3,
            Path::new("/tmp/mps-backend"),
            "amd64",
        );

        assert_eq!(config.java_vendor, "JetBrains");
        assert_eq!(config.java_language_version, 11);
        assert_eq!(config.jvm_args.len(), ADD_OPENS_MODULES.len());
        assert_eq!(config.jvm_args[0], "--add-opens=java.base/java.io=ALL-UNNAMED");
        assert!(
            !config
                .jvm_args
                .iter()
                .any(|arg| arg.starts_with("-Djna.boot.library.path"))
        );
        assert_eq!(config.working_dir, PathBuf::from("/tmp/mps-backend"));
    }

    #[test]
    fn test_for_mps_2022_3_adds_jna_path_first() {
        let config = JavaLaunchConfig::for_mps(
            Path::new("/opt/mps"),
            MpsVersion::Mps2022_3,
            Path::new("/tmp/mps-backend"),
            "aarch64",
        );

        assert_eq!(config.java_language_version, 17);
        assert_eq!(config.jvm_args.len(), ADD_OPENS_MODULES.len() + 1);
        let expected = format!(
            "-Djna.boot.library.path={}",
            Path::new("/opt/mps/lib/jna/aarch64").display()
        );
        assert_eq!(config.jvm_args[0], expected);
    }

    #[test]
    fn test_system_properties_point_into_temp_dir() {
        let temp_dir = Path::new("/tmp/mps-backend");
        let config =
            JavaLaunchConfig::for_mps(Path::new("/opt/mps"), MpsVersion::Mps2023_2, temp_dir, "amd64");

        assert_eq!(config.system_properties.len(), 2);
        assert_eq!(
            config.system_properties["idea.config.path"],
            temp_dir.join("config").display().to_string()
        );
        assert_eq!(
            config.system_properties["idea.system.path"],
            temp_dir.join("system").display().to_string()
        );
    }

    #[test]
    fn test_from_config_overrides_vendor_and_arch() {
        let config = Config {
            java_vendor: "Azul".to_string(),
            os_arch: Some("riscv64".to_string()),
            ..Config::default()
        };
        let launch = JavaLaunchConfig::from_config(
            Path::new("/opt/mps"),
            MpsVersion::Mps2024_1,
            Path::new("/tmp/x"),
            &config,
        );

        assert_eq!(launch.java_vendor, "Azul");
        assert!(launch.jvm_args[0].ends_with("riscv64"));
    }

    #[test]
    fn test_from_config_defaults_to_host_arch() {
        let launch = JavaLaunchConfig::from_config(
            Path::new("/opt/mps"),
            MpsVersion::Mps2022_3,
            Path::new("/tmp/x"),
            &Config::default(),
        );

        assert_eq!(launch.java_vendor, "JetBrains");
        assert!(launch.jvm_args[0].ends_with(host_os_arch()));
    }

    #[test]
    fn test_serializes_camel_case() {
        let launch = JavaLaunchConfig::for_mps(
            Path::new("/opt/mps"),
            MpsVersion::Mps2021_3,
            Path::new("/tmp/x"),
            "amd64",
        );
        let json = serde_json::to_value(&launch).unwrap();

        assert_eq!(json["mpsVersion"], "2021.3");
        assert_eq!(json["javaLanguageVersion"], 11);
        assert_eq!(json["javaVendor"], "JetBrains");
        assert!(json["jvmArgs"].is_array());
        assert!(json["systemProperties"]["idea.config.path"].is_string());
    }
}
