use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use mpsver_core::{BuildNumber, MpsVersion, ResolveError};
use mpsver_launcher::VersionResolver;
use mpsver_utils::get_mpsver_config;
use serde_json::{Value, json};
use std::path::PathBuf;

use crate::options::FormatOptions;

#[derive(Args, Debug)]
#[command(about = "Print the MPS release found in a directory")]
pub struct ResolveArgs {
    /// Root directory (default: current directory)
    pub path: Option<PathBuf>,

    /// Treat the directory as an MPS distribution and read its top-level build.properties
    #[arg(long, default_value = "false")]
    pub mps_home: bool,

    /// Fail instead of printing "unknown" when the release cannot be determined
    #[arg(long, default_value = "false")]
    pub strict: bool,
}

/// Resolve and print the MPS release of a directory
///
/// # Errors
/// Returns error if the config is invalid, or with `--strict` if the release cannot be determined.
pub async fn handle_resolve(args: &ResolveArgs, format: &FormatOptions) -> Result<()> {
    let root_dir = match &args.path {
        Some(path) => path.clone(),
        None => std::env::current_dir()?,
    };
    let resolver = if args.mps_home {
        VersionResolver::for_mps_home()
    } else {
        VersionResolver::from_config(&get_mpsver_config(&root_dir).await?)
    };

    let resolved = resolver
        .resolve_build_number(&root_dir)
        .and_then(|build_number| Ok((build_number.mps_version()?, build_number)));

    match resolved {
        Ok((version, build_number)) => {
            let (stdout_msg, json_msg) = resolved_output(version, &build_number);
            format.print(&stdout_msg, &serde_json::to_string_pretty(&json_msg)?);
            Ok(())
        }
        Err(e) if args.strict => Err(e).with_context(|| {
            format!(
                "Could not determine MPS version of {}",
                root_dir.display()
            )
        }),
        Err(e) => {
            log::warn!("{e}");
            let (stdout_msg, json_msg) = unknown_output(&e);
            format.print(&stdout_msg, &serde_json::to_string_pretty(&json_msg)?);
            Ok(())
        }
    }
}

/// Terminal and JSON output for a resolved release
fn resolved_output(version: MpsVersion, build_number: &BuildNumber) -> (String, Value) {
    (
        format!("MPS {} ({build_number})", version.label().green().bold()),
        json!({
            "version": version,
            "buildNumber": build_number.to_string(),
            "platformVersion": build_number.platform_version(),
        }),
    )
}

/// Terminal and JSON output when the release could not be determined
fn unknown_output(error: &ResolveError) -> (String, Value) {
    (
        "unknown".yellow().to_string(),
        json!({
            "version": null,
            "error": error.to_string(),
        }),
    )
}
