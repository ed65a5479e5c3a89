use anyhow::Result;
use clap::Args;
use mpsver_utils::get_mpsver_config;
use std::path::PathBuf;

#[derive(Args, Debug)]
#[command(about = "Show the effective mpsver configuration")]
pub struct ConfigArgs {
    /// Root directory holding `.mpsver/config.json` (default: current directory)
    pub path: Option<PathBuf>,
}

/// Display mpsver configuration
///
/// # Errors
/// Returns error if reading the configuration fails.
pub async fn handle_config(args: &ConfigArgs) -> Result<()> {
    let root_dir = match &args.path {
        Some(path) => path.clone(),
        None => std::env::current_dir()?,
    };
    let config = get_mpsver_config(&root_dir).await?;
    println!("{}", serde_json::to_string_pretty(&config)?);
    Ok(())
}
