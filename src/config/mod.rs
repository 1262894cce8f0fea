//! Configuration loading for the service.
//!
//! Settings come from an optional `config.toml` in the working directory,
//! with environment variables taking precedence over file values. A missing
//! file just means defaults; a present but malformed file is an error.

/// Database connection and schema management
pub mod database;

use crate::errors::{Error, Result};
use serde::Deserialize;
use std::path::Path;

/// Top-level application configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Connection URL for the relational store
    #[serde(default = "default_database_url")]
    pub database_url: String,
    /// Address and port the HTTP server binds to
    #[serde(default = "default_bind_address")]
    pub bind_address: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            database_url: default_database_url(),
            bind_address: default_bind_address(),
        }
    }
}

fn default_database_url() -> String {
    "sqlite://data/products.sqlite?mode=rwc".to_string()
}

fn default_bind_address() -> String {
    "0.0.0.0:8080".to_string()
}

/// Loads configuration from a TOML file.
///
/// # Errors
/// Returns an error if the file cannot be read or the TOML is invalid.
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<AppConfig> {
    let contents = std::fs::read_to_string(path.as_ref()).map_err(|e| Error::Config {
        message: format!("Failed to read config file: {e}"),
    })?;

    toml::from_str(&contents).map_err(|e| Error::Config {
        message: format!("Failed to parse config.toml: {e}"),
    })
}

/// Loads the application configuration.
///
/// Reads `./config.toml` when present, then applies `DATABASE_URL` and
/// `BIND_ADDRESS` environment overrides on top.
pub fn load_app_configuration() -> Result<AppConfig> {
    let mut config = if Path::new("config.toml").exists() {
        load_config("config.toml")?
    } else {
        AppConfig::default()
    };

    if let Ok(url) = std::env::var("DATABASE_URL") {
        config.database_url = url;
    }
    if let Ok(address) = std::env::var("BIND_ADDRESS") {
        config.bind_address = address;
    }

    Ok(config)
}
