// Logging module - Logging infrastructure
use crate::domain::config::GlobalConfig;
use crate::domain::error::{BoardComError, BoardComResult};
use tracing_subscriber::EnvFilter;

/// Initialize the tracing subscriber from configuration. `RUST_LOG`
/// wins over the configured level; `verbose` forces debug.
pub fn setup_logging(config: &GlobalConfig, verbose: bool) -> BoardComResult<()> {
    let default_level = if verbose {
        "debug"
    } else {
        match config.log_level.as_str() {
            "error" | "warn" | "info" | "debug" | "trace" => config.log_level.as_str(),
            _ => "info",
        }
    };

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("boardcom={default_level},warn")));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| BoardComError::Configuration(format!("Failed to initialize logging: {}", e)))?;

    Ok(())
}
