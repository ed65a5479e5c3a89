use anyhow::Result;

use clap::{Parser, Subcommand};

use crate::{
    commands::{
        ConfigArgs, LaunchConfigArgs, ResolveArgs, VersionsArgs, handle_config,
        handle_launch_config, handle_resolve, handle_versions,
    },
    options::FormatOptions,
};
pub mod commands;
mod logger;
pub mod options;

pub use logger::init_logger;

#[derive(Parser, Debug)]
#[command(
    name = "mpsver",
    author,
    version,
    about = "Detect the JetBrains MPS release of a build and the JVM settings it needs",
    help_template = "{name} {version}\n{about}\n\n{usage-heading} {usage}\n\n{all-args}"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(short, long, global = true, value_enum, default_value = "stdout")]
    format: FormatOptions,

    /// Log why a version could not be determined
    #[arg(short, long, global = true, default_value = "false")]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    Resolve(ResolveArgs),
    LaunchConfig(LaunchConfigArgs),
    Versions(VersionsArgs),
    Config(ConfigArgs),
}

/// # Errors
/// Returns error if the selected command fails.
pub async fn main(args: &[String]) -> Result<()> {
    let cli = Cli::parse_from(args);
    init_logger(cli.verbose);
    match cli.command {
        Commands::Resolve(args) => handle_resolve(&args, &cli.format).await?,
        Commands::LaunchConfig(args) => handle_launch_config(&args, &cli.format).await?,
        Commands::Versions(args) => handle_versions(&args, &cli.format).await?,
        Commands::Config(args) => handle_config(&args).await?,
    }
    Ok(())
}
