use std::net::SocketAddr;
use std::path::PathBuf;

use super::ConfigError;

pub const DEFAULT_STATIC_DIR: &str = "./static";
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Runtime settings read from the environment (and `.env`, if present).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SiteConfig {
    /// Overrides the `site-addr` from the Leptos metadata when set.
    pub bind_addr: Option<SocketAddr>,
    /// Directory holding `img/` and `svgs/`.
    pub static_dir: PathBuf,
    pub log_filter: String,
}

impl SiteConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |key: &str| {
            lookup(key)
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
        };

        let bind_addr = read("BIND_ADDR")
            .map(|value| {
                value
                    .parse::<SocketAddr>()
                    .map_err(|source| ConfigError::InvalidBindAddr { value, source })
            })
            .transpose()?;

        Ok(Self {
            bind_addr,
            static_dir: read("STATIC_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_STATIC_DIR)),
            log_filter: read("SITEFRONT_LOG").unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string()),
        })
    }
}
