use regex::Regex;
use serde::Serialize;
use std::fmt::Display;
use std::str::FromStr;
use std::sync::LazyLock;

use crate::{MpsVersion, ResolveError};

// prefix up to the first '-', then the digits up to the first '.' after it
static BUILD_NUMBER_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)^([^-]*)-([0-9]+)\.(.*)$").expect("hardcoded regex must compile")
});

/// Parsed `mps.build.number` value, e.g. `MPS-213.7172.1079`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildNumber {
    #[serde(skip)]
    raw: String,
    prefix: String,
    major: u32,
    rest: String,
}

/// Everything after the first `-` of a build number, or the whole value if it has none.
///
/// Unlike [`BuildNumber`] this does not require a numeric major token, so
/// `MPS-SNAPSHOT` gives `SNAPSHOT`.
#[must_use]
pub fn platform_version(value: &str) -> &str {
    value.split_once('-').map_or(value, |(_, rest)| rest)
}

impl BuildNumber {
    /// Product prefix before the first `-` (`MPS`)
    #[must_use]
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Major token that selects the release (`213`)
    #[must_use]
    pub const fn major(&self) -> u32 {
        self.major
    }

    /// Everything after the major token's `.` (`7172.1079`)
    #[must_use]
    pub fn rest(&self) -> &str {
        &self.rest
    }

    /// Build number without its product prefix (`213.7172.1079`), exactly as written
    #[must_use]
    pub fn platform_version(&self) -> &str {
        platform_version(&self.raw)
    }

    /// Map the major token through the version table.
    ///
    /// # Errors
    /// Returns [`ResolveError::UnknownVersion`] if the token has no table entry.
    pub fn mps_version(&self) -> Result<MpsVersion, ResolveError> {
        MpsVersion::from_major(self.major)
            .ok_or(ResolveError::UnknownVersion { major: self.major })
    }
}

impl FromStr for BuildNumber {
    type Err = ResolveError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let unparseable = || ResolveError::Unparseable {
            value: value.to_string(),
        };
        let caps = BUILD_NUMBER_PATTERN.captures(value).ok_or_else(unparseable)?;
        let major = caps[2].parse::<u32>().map_err(|_| unparseable())?;
        Ok(Self {
            raw: value.to_string(),
            prefix: caps[1].to_string(),
            major,
            rest: caps[3].to_string(),
        })
    }
}

impl Display for BuildNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.raw)
    }
}
