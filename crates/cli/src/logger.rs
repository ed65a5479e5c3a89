use env_logger::Env;

/// Install the process-wide logger; `RUST_LOG` wins over the default level.
///
/// Safe to call more than once, later calls are ignored.
pub fn init_logger(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let _ = env_logger::Builder::from_env(Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .try_init();
}
