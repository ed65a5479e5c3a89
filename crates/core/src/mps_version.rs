use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::str::FromStr;

use crate::ResolveError;

/// Known MPS releases, keyed by the major token of their build number.
///
/// Variants are declared in release order so `Ord` compares releases. New
/// releases are appended; existing entries never change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum MpsVersion {
    Mps2017_1,
    Mps2017_2,
    Mps2017_3,
    Mps2018_1,
    Mps2018_2,
    Mps2018_3,
    Mps2019_1,
    Mps2019_2,
    Mps2019_3,
    Mps2020_1,
    Mps2020_2,
    Mps2020_3,
    Mps2021_1,
    Mps2021_2,
    Mps2021_3,
    Mps2022_2,
    Mps2022_3,
    Mps2023_2,
    Mps2023_3,
    Mps2024_1,
    Mps2024_3,
    Mps2025_1,
}

impl MpsVersion {
    /// Every known release, oldest first.
    pub const ALL: [Self; 22] = [
        Self::Mps2017_1,
        Self::Mps2017_2,
        Self::Mps2017_3,
        Self::Mps2018_1,
        Self::Mps2018_2,
        Self::Mps2018_3,
        Self::Mps2019_1,
        Self::Mps2019_2,
        Self::Mps2019_3,
        Self::Mps2020_1,
        Self::Mps2020_2,
        Self::Mps2020_3,
        Self::Mps2021_1,
        Self::Mps2021_2,
        Self::Mps2021_3,
        Self::Mps2022_2,
        Self::Mps2022_3,
        Self::Mps2023_2,
        Self::Mps2023_3,
        Self::Mps2024_1,
        Self::Mps2024_3,
        Self::Mps2025_1,
    ];

    /// Major token of the build number, e.g. `213` for 2021.3
    #[must_use]
    pub const fn major(&self) -> u32 {
        match self {
            Self::Mps2017_1 => 171,
            Self::Mps2017_2 => 172,
            Self::Mps2017_3 => 173,
            Self::Mps2018_1 => 181,
            Self::Mps2018_2 => 182,
            Self::Mps2018_3 => 183,
            Self::Mps2019_1 => 191,
            Self::Mps2019_2 => 192,
            Self::Mps2019_3 => 193,
            Self::Mps2020_1 => 201,
            Self::Mps2020_2 => 202,
            Self::Mps2020_3 => 203,
            Self::Mps2021_1 => 211,
            Self::Mps2021_2 => 212,
            Self::Mps2021_3 => 213,
            Self::Mps2022_2 => 222,
            Self::Mps2022_3 => 223,
            Self::Mps2023_2 => 232,
            Self::Mps2023_3 => 233,
            Self::Mps2024_1 => 241,
            Self::Mps2024_3 => 243,
            Self::Mps2025_1 => 251,
        }
    }

    /// Public release label, e.g. `"2021.3"`
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Mps2017_1 => "2017.1",
            Self::Mps2017_2 => "2017.2",
            Self::Mps2017_3 => "2017.3",
            Self::Mps2018_1 => "2018.1",
            Self::Mps2018_2 => "2018.2",
            Self::Mps2018_3 => "2018.3",
            Self::Mps2019_1 => "2019.1",
            Self::Mps2019_2 => "2019.2",
            Self::Mps2019_3 => "2019.3",
            Self::Mps2020_1 => "2020.1",
            Self::Mps2020_2 => "2020.2",
            Self::Mps2020_3 => "2020.3",
            Self::Mps2021_1 => "2021.1",
            Self::Mps2021_2 => "2021.2",
            Self::Mps2021_3 => "2021.3",
            Self::Mps2022_2 => "2022.2",
            Self::Mps2022_3 => "2022.3",
            Self::Mps2023_2 => "2023.2",
            Self::Mps2023_3 => "2023.3",
            Self::Mps2024_1 => "2024.1",
            Self::Mps2024_3 => "2024.3",
            Self::Mps2025_1 => "2025.1",
        }
    }

    /// Release year, e.g. `2021` for 2021.3
    #[must_use]
    pub const fn year(&self) -> u32 {
        2000 + self.major() / 10
    }

    /// Release number within the year, e.g. `3` for 2021.3
    #[must_use]
    pub const fn release(&self) -> u32 {
        self.major() % 10
    }

    /// Look up the release for a major build-number token.
    #[must_use]
    pub fn from_major(major: u32) -> Option<Self> {
        Self::ALL.into_iter().find(|version| version.major() == major)
    }

    /// Look up the release for a label such as `"2021.3"`.
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|version| version.label() == label.trim())
    }
}

impl Display for MpsVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for MpsVersion {
    type Err = ResolveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_label(s).ok_or_else(|| ResolveError::UnknownLabel {
            label: s.to_string(),
        })
    }
}

impl TryFrom<String> for MpsVersion {
    type Error = ResolveError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<MpsVersion> for String {
    fn from(value: MpsVersion) -> Self {
        value.label().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(171, Some("2017.1"))]
    #[case(183, Some("2018.3"))]
    #[case(203, Some("2020.3"))]
    #[case(213, Some("2021.3"))]
    #[case(222, Some("2022.2"))]
    #[case(223, Some("2022.3"))]
    #[case(241, Some("2024.1"))]
    #[case(251, Some("2025.1"))]
    #[case(221, None)]
    #[case(999, None)]
    #[case(0, None)]
    fn test_from_major(#[case] major: u32, #[case] expected: Option<&str>) {
        assert_eq!(MpsVersion::from_major(major).map(|v| v.label()), expected);
    }

    #[test]
    fn test_table_is_consistent() {
        for version in MpsVersion::ALL {
            assert_eq!(MpsVersion::from_major(version.major()), Some(version));
            assert_eq!(MpsVersion::from_label(version.label()), Some(version));
            assert_eq!(
                version.label(),
                format!("{}.{}", version.year(), version.release())
            );
        }
    }

    #[test]
    fn test_table_is_in_release_order() {
        assert!(MpsVersion::ALL.windows(2).all(|pair| pair[0] < pair[1]));
        assert!(
            MpsVersion::ALL
                .windows(2)
                .all(|pair| pair[0].major() < pair[1].major())
        );
    }

    #[rstest]
    #[case("2021.3", Some(MpsVersion::Mps2021_3))]
    #[case(" 2022.3 ", Some(MpsVersion::Mps2022_3))]
    #[case("2022.1", None)]
    #[case("213", None)]
    #[case("", None)]
    fn test_parse_label(#[case] label: &str, #[case] expected: Option<MpsVersion>) {
        assert_eq!(label.parse::<MpsVersion>().ok(), expected);
    }

    #[test]
    fn test_unknown_label_error() {
        let err = "1999.9".parse::<MpsVersion>().unwrap_err();
        assert!(matches!(err, ResolveError::UnknownLabel { ref label } if label == "1999.9"));
    }

    #[test]
    fn test_display() {
        assert_eq!(MpsVersion::Mps2021_3.to_string(), "2021.3");
    }

    #[test]
    fn test_serde_uses_label() {
        let json = serde_json::to_string(&MpsVersion::Mps2023_2).unwrap();
        assert_eq!(json, r#""2023.2""#);
        let version: MpsVersion = serde_json::from_str(r#""2020.1""#).unwrap();
        assert_eq!(version, MpsVersion::Mps2020_1);
        assert!(serde_json::from_str::<MpsVersion>(r#""2022.1""#).is_err());
    }
}
