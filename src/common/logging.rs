use tracing_subscriber::EnvFilter;

use super::ConfigError;

/// Installs the global subscriber. `log` records (ours and Actix's) are
/// bridged into it.
pub fn init_logging(filter: &str) -> Result<(), ConfigError> {
    let env_filter = EnvFilter::try_new(filter)
        .map_err(|_| ConfigError::InvalidLogFilter(filter.to_string()))?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(true)
        .try_init()
        .map_err(|e| ConfigError::Logger(e.to_string()))
}
