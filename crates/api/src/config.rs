//! Process configuration, read once from the environment at startup.

use std::net::SocketAddr;

use thiserror::Error;

use catalogo_auth::DEFAULT_TOKEN;
use catalogo_infra::DatabaseConfig;

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:5000";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("BIND_ADDR is not a socket address ({value:?}): {source}")]
    InvalidBindAddr {
        value: String,
        source: std::net::AddrParseError,
    },

    #[error("{var} must be `true` or `false`, got {value:?}")]
    InvalidBool { var: &'static str, value: String },
}

/// Everything the API process needs to start.
///
/// | Variable | Default |
/// |---|---|
/// | `BIND_ADDR` | `0.0.0.0:5000` |
/// | `API_TOKEN` | `token-secreto` |
/// | `USE_IN_MEMORY_STORE` | `false` |
/// | `POSTGRES_*` | see [`DatabaseConfig`] |
#[derive(Clone)]
pub struct ApiConfig {
    pub bind_addr: SocketAddr,
    pub token: String,
    pub use_in_memory_store: bool,
    pub database: DatabaseConfig,
}

impl ApiConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let bind = lookup("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = bind
            .parse()
            .map_err(|source| ConfigError::InvalidBindAddr { value: bind.clone(), source })?;

        let use_in_memory_store = match lookup("USE_IN_MEMORY_STORE") {
            None => false,
            Some(value) => value.parse::<bool>().map_err(|_| ConfigError::InvalidBool {
                var: "USE_IN_MEMORY_STORE",
                value,
            })?,
        };

        Ok(Self {
            bind_addr,
            token: lookup("API_TOKEN").unwrap_or_else(|| DEFAULT_TOKEN.to_string()),
            use_in_memory_store,
            database: DatabaseConfig::from_lookup(&lookup),
        })
    }
}

impl std::fmt::Debug for ApiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiConfig")
            .field("bind_addr", &self.bind_addr)
            .field("token", &"***")
            .field("use_in_memory_store", &self.use_in_memory_store)
            .field("database", &self.database)
            .finish()
    }
}
