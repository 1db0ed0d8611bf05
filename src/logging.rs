use tracing_subscriber::EnvFilter;

/// Initialize logging to stderr so stdout only carries command output.
///
/// `RUST_LOG` takes precedence; otherwise the level follows the number of
/// `-v` flags, starting at `warn`.
pub fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let default_filter = format!("projectfin={level}");
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
