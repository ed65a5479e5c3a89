use mpsver_core::{
    BUILD_NUMBER_KEY, BUILD_PROPERTIES_FILE, BUILD_PROPERTIES_PATH, BuildNumber, Config,
    MpsVersion, ResolveError, platform_version,
};
use mpsver_utils::read_build_properties;
use std::path::{Path, PathBuf};

/// Resolves the MPS release of a directory from its build.properties file.
///
/// Holds no state beyond where to look: every call reads the file again.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionResolver {
    properties_path: PathBuf,
    build_number_key: String,
}

impl Default for VersionResolver {
    fn default() -> Self {
        Self::new(BUILD_PROPERTIES_PATH, BUILD_NUMBER_KEY)
    }
}

impl VersionResolver {
    pub fn new(properties_path: impl Into<PathBuf>, build_number_key: impl Into<String>) -> Self {
        Self {
            properties_path: properties_path.into(),
            build_number_key: build_number_key.into(),
        }
    }

    /// Resolver for an MPS distribution root, which keeps build.properties at its top level
    #[must_use]
    pub fn for_mps_home() -> Self {
        Self::new(BUILD_PROPERTIES_FILE, BUILD_NUMBER_KEY)
    }

    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self::new(&config.properties_path, &config.build_number_key)
    }

    /// Expected location of build.properties under `root_dir`
    #[must_use]
    pub fn properties_file(&self, root_dir: &Path) -> PathBuf {
        root_dir.join(&self.properties_path)
    }

    /// Read and parse the build number without consulting the version table.
    ///
    /// # Errors
    /// Returns error if the file is missing, unreadable or malformed, the key is absent,
    /// or the value is not `<prefix>-<major>.<rest>`.
    pub fn resolve_build_number(&self, root_dir: &Path) -> Result<BuildNumber, ResolveError> {
        self.read_build_number(root_dir)?.parse()
    }

    /// Raw build-number property value, not yet parsed.
    ///
    /// # Errors
    /// Returns error if the file is missing, unreadable or malformed, or the key is absent.
    pub fn read_build_number(&self, root_dir: &Path) -> Result<String, ResolveError> {
        let path = self.properties_file(root_dir);
        let properties = read_build_properties(&path)?;
        properties
            .get(&self.build_number_key)
            .map(str::to_string)
            .ok_or_else(|| ResolveError::KeyMissing {
                path,
                key: self.build_number_key.clone(),
            })
    }

    /// Resolve the MPS release, keeping the reason when it cannot be determined.
    ///
    /// # Errors
    /// Returns the same errors as [`Self::resolve_build_number`], plus
    /// [`ResolveError::UnknownVersion`] when the major token is not in the table.
    pub fn resolve(&self, root_dir: &Path) -> Result<MpsVersion, ResolveError> {
        self.resolve_build_number(root_dir)?.mps_version()
    }

    /// Resolve the release label, e.g. `"2021.3"`; `None` for every failure.
    #[must_use]
    pub fn resolve_version(&self, root_dir: &Path) -> Option<String> {
        match self.resolve(root_dir) {
            Ok(version) => Some(version.label().to_string()),
            Err(e) => {
                log::debug!(
                    "could not determine MPS version under {}: {e}",
                    root_dir.display()
                );
                None
            }
        }
    }
}

/// Release label for `root_dir/build/mps/build.properties`, or `None` if it cannot be determined
#[must_use]
pub fn resolve_version(root_dir: &Path) -> Option<String> {
    VersionResolver::default().resolve_version(root_dir)
}

/// # Errors
/// Returns why `root_dir/build/mps/build.properties` does not name a known release.
pub fn resolve(root_dir: &Path) -> Result<MpsVersion, ResolveError> {
    VersionResolver::default().resolve(root_dir)
}

/// Retrieves the MPS release from `$mps_home/build.properties`, property `mps.build.number`.
///
/// # Errors
/// Returns why the MPS home does not name a known release.
pub fn mps_version_from_mps_home(mps_home: &Path) -> Result<MpsVersion, ResolveError> {
    VersionResolver::for_mps_home().resolve(mps_home)
}

/// Platform version of an MPS home: the build number after its first `-` (`213.7172.1079`).
///
/// The value is not parsed further, so releases missing from the table and
/// non-numeric builds such as `MPS-SNAPSHOT` still have one.
///
/// # Errors
/// Returns error if the build number property cannot be read.
pub fn platform_version_from_mps_home(mps_home: &Path) -> Result<String, ResolveError> {
    let value = VersionResolver::for_mps_home().read_build_number(mps_home)?;
    Ok(platform_version(&value).to_string())
}
