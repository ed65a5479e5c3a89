use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use mpsver_core::MpsVersion;
use mpsver_launcher::{JavaLaunchConfig, mps_version_from_mps_home};
use mpsver_utils::get_mpsver_config;
use serde_json::Value;
use std::path::PathBuf;

use crate::options::FormatOptions;

#[derive(Args, Debug)]
#[command(about = "Print the JVM settings needed to run an MPS backend")]
pub struct LaunchConfigArgs {
    /// MPS distribution directory (default: current directory)
    pub mps_home: Option<PathBuf>,

    /// Scratch directory used as working directory and for IDEA config/system paths
    #[arg(long)]
    pub temp_dir: PathBuf,

    /// Release label such as 2021.3; read from the MPS home when omitted
    #[arg(long)]
    pub mps_version: Option<String>,

    /// Architecture directory under lib/jna (default: from config, then the host)
    #[arg(long)]
    pub os_arch: Option<String>,

    /// Project directory whose .mpsver/config.json supplies the Java vendor and architecture
    /// (default: current directory, not the MPS home)
    #[arg(long)]
    pub config_dir: Option<PathBuf>,
}

/// Compute and print the launch settings of an MPS backend
///
/// # Errors
/// Returns error if the release is unknown or cannot be read from the MPS home.
pub async fn handle_launch_config(args: &LaunchConfigArgs, format: &FormatOptions) -> Result<()> {
    let current_dir = std::env::current_dir()?;
    let mps_home = args.mps_home.clone().unwrap_or_else(|| current_dir.clone());
    let config_dir = args.config_dir.clone().unwrap_or(current_dir);

    let mps_version = match &args.mps_version {
        Some(label) => label.parse::<MpsVersion>()?,
        None => mps_version_from_mps_home(&mps_home).with_context(|| {
            format!(
                "Could not read mps.build.number from {}",
                mps_home.join("build.properties").display()
            )
        })?,
    };

    let mut config = get_mpsver_config(&config_dir).await?;
    if let Some(os_arch) = &args.os_arch {
        config.os_arch = Some(os_arch.clone());
    }
    let launch = JavaLaunchConfig::from_config(&mps_home, mps_version, &args.temp_dir, &config);

    format.print(
        &display_launch_config(&launch),
        &serde_json::to_string_pretty(&launch_config_json(&launch)?)?,
    );
    Ok(())
}

fn launch_config_json(launch: &JavaLaunchConfig) -> Result<Value> {
    Ok(serde_json::to_value(launch)?)
}

fn display_launch_config(launch: &JavaLaunchConfig) -> String {
    let mut lines = vec![
        format!("MPS {}", launch.mps_version.label().green().bold()),
        format!(
            "Java {} ({})",
            launch.java_language_version.to_string().bold(),
            launch.java_vendor
        ),
        format!("Working directory: {}", launch.working_dir.display()),
    ];
    lines.extend(
        launch
            .system_properties
            .iter()
            .map(|(key, value)| format!("  -D{key}={value}")),
    );
    lines.extend(launch.jvm_args.iter().map(|arg| format!("  {arg}")));
    lines.join("\n")
}
