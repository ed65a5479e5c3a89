//! `mpsver` command line entry point.
//!
//! Argument parsing and the subcommands live in `mpsver-cli`; this binary only
//! turns a failed command into a message on stderr and exit code 1.

use std::process;

#[tokio::main]
async fn main() {
    if let Err(e) =
        mpsver_cli::main(std::env::args().collect::<Vec<String>>().as_slice()).await
    {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
