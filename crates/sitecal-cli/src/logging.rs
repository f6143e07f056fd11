use crate::args::LogLevel;
use tracing_subscriber::EnvFilter;

/// Environment variable that overrides `--log-level` (full `EnvFilter` syntax)
pub const LOG_ENV: &str = "SITECAL_LOG";

/// Install the stderr subscriber; stdout stays reserved for command output.
pub fn init_logging(level: LogLevel) {
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(level.to_string()));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
