use std::path::PathBuf;

use crate::error::{Result, ShelfError};

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_ROOT: &str = "/srv/media";

/// Runtime configuration sourced from the environment
///
/// `BUNNY_API_KEY` and `BUNNY_LIBRARY_ID` are required; host, port and the
/// listing root fall back to defaults.
#[derive(Debug, Clone)]
pub struct ShelfConfig {
    pub api_key: String,
    pub library_id: String,
    pub host: String,
    pub port: u16,
    pub root: PathBuf,
}

impl ShelfConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from an arbitrary key lookup (unit-testable)
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let api_key = require(&lookup, "BUNNY_API_KEY")?;
        let library_id = require(&lookup, "BUNNY_LIBRARY_ID")?;

        let host = lookup("SHELF_HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());
        let port = match lookup("SHELF_PORT") {
            Some(raw) => raw.parse::<u16>().map_err(|_| ShelfError::InvalidConfig {
                message: format!("SHELF_PORT is not a valid port: {raw}"),
            })?,
            None => DEFAULT_PORT,
        };
        let root = lookup("SHELF_ROOT")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_ROOT));

        Ok(Self {
            api_key,
            library_id,
            host,
            port,
            root,
        })
    }
}

fn require(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Result<String> {
    match lookup(key) {
        Some(value) if !value.is_empty() => Ok(value),
        _ => Err(ShelfError::InvalidConfig {
            message: format!("{key} is not set"),
        }),
    }
}
