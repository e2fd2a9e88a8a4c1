//! Process configuration read from the environment (and `.env` when present).

use crate::error::ConfigError;
use std::fmt;

/// Address the HTTP server binds to.
pub const BIND_ADDR: &str = "0.0.0.0:8000";
/// Used when `RUST_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str = "users_api=info,tower_http=info";

const DATABASE_URL: &str = "DATABASE_URL";

/// The connection string is the only database setting.
#[derive(Clone)]
pub struct Config {
    pub database_url: String,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("database_url", &"[REDACTED]")
            .finish()
    }
}

impl Config {
    /// Load `.env` if present, then read the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from an arbitrary key lookup. An empty value counts as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup(DATABASE_URL)
            .filter(|v| !v.trim().is_empty())
            .ok_or(ConfigError::Missing(DATABASE_URL))?;
        Ok(Config { database_url })
    }
}
