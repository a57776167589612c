use std::io::IsTerminal;

use tracing_subscriber::{EnvFilter, fmt};

/// Environment variable holding the log filter, e.g. `MONTY_HALL_LOG=debug`.
pub const LOG_ENV_VAR: &str = "MONTY_HALL_LOG";

/// Installs a stdout `fmt` subscriber. Falls back to `info` when the variable is unset or invalid.
pub fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new("info"));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(std::io::stdout().is_terminal())
        .with_writer(std::io::stdout)
        .init();
}
