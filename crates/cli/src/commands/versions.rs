use anyhow::Result;
use clap::Args;
use colored::Colorize;
use mpsver_core::MpsVersion;
use serde_json::{Value, json};

use crate::options::FormatOptions;

#[derive(Args, Debug)]
#[command(about = "List the MPS releases mpsver can recognise")]
pub struct VersionsArgs {}

/// Print the version table, oldest release first
///
/// # Errors
/// Returns error if serializing the JSON output fails.
pub async fn handle_versions(_args: &VersionsArgs, format: &FormatOptions) -> Result<()> {
    format.print(
        &display_versions(),
        &serde_json::to_string_pretty(&versions_json())?,
    );
    Ok(())
}

fn display_versions() -> String {
    MpsVersion::ALL
        .iter()
        .map(|version| format!("{:>4}  {}", version.major(), version.label().bold()))
        .collect::<Vec<_>>()
        .join("\n")
}

fn versions_json() -> Value {
    MpsVersion::ALL
        .iter()
        .map(|version| json!({ "major": version.major(), "label": version.label() }))
        .collect()
}
