use clap::ValueEnum;

/// How `resolve`, `launch-config` and `versions` report their result.
///
/// `stdout` prints the release label for a person at a terminal; `json` prints
/// the version, build number and JVM settings for Gradle or CI scripts to parse.
#[derive(Debug, Clone, Default, ValueEnum)]
pub enum FormatOptions {
    /// Machine-readable object, e.g. `{"version": "2021.3", ...}`
    #[value(name = "json")]
    Json,
    /// Colored release label and launch settings
    #[default]
    #[value(name = "stdout")]
    Stdout,
}

impl FormatOptions {
    /// Print whichever rendering of a command result this format selects
    pub fn print(&self, stdout_msg: &str, json_msg: &str) {
        match self {
            Self::Stdout => println!("{stdout_msg}"),
            Self::Json => println!("{json_msg}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("json", FormatOptions::Json)]
    #[case("stdout", FormatOptions::Stdout)]
    fn test_format_options_from_str(#[case] input: &str, #[case] expected: FormatOptions) {
        let parsed = FormatOptions::from_str(input, false).unwrap();
        assert!(std::mem::discriminant(&parsed) == std::mem::discriminant(&expected));
    }

    #[test]
    fn test_format_options_default_is_stdout() {
        assert!(matches!(FormatOptions::default(), FormatOptions::Stdout));
    }

    #[test]
    fn test_format_options_rejects_unknown() {
        assert!(FormatOptions::from_str("yaml", false).is_err());
    }
}
