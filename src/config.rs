// src/config.rs
use crate::cli::Cli;

/// Address of the Wekan database host when nothing else is configured.
pub const DEFAULT_HOST: &str = "172.16.2.2";
pub const DEFAULT_DB: &str = "wekan";
pub const DEFAULT_COLLECTION: &str = "boards";
/// Environment variable consulted when no host flag is given.
pub const HOST_ENV: &str = "MONGOHOST";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectionConfig {
    pub host: String,
    pub database: String,
    pub collection: String,
}

impl Default for ConnectionConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            database: DEFAULT_DB.to_string(),
            collection: DEFAULT_COLLECTION.to_string(),
        }
    }
}

impl From<&Cli> for ConnectionConfig {
    fn from(cli: &Cli) -> Self {
        Self {
            host: cli.host.clone(),
            database: cli.db.clone(),
            collection: cli.collection.clone(),
        }
    }
}

/// Rejects blank hosts instead of letting them fall back to the default.
pub fn parse_host(value: &str) -> Result<String, String> {
    if value.trim().is_empty() {
        return Err("host must not be blank".to_string());
    }
    Ok(value.to_string())
}
