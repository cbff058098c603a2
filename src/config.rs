//! Process configuration read from the environment
//!
//! `DATABASE_URL` and `DB_NAME` are mandatory: the server refuses to start
//! without them. `PORT` and `HOST` fall back to defaults.

use std::env;

use tracing::info;

use crate::error::ConfigError;

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_HOST: &str = "0.0.0.0";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Path of the redb file backing the document store
    pub database_url: String,

    /// Logical database name, used to namespace the collections
    pub db_name: String,

    pub host: String,
    pub port: u16,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        let database_url = required("DATABASE_URL")?;
        let db_name = required("DB_NAME")?;

        let host = optional("HOST").unwrap_or_else(|| {
            info!("HOST not set, using default: {DEFAULT_HOST}");
            DEFAULT_HOST.to_string()
        });

        let port = match optional("PORT") {
            Some(value) => value.parse().map_err(|_| ConfigError::Invalid {
                name: "PORT",
                value,
            })?,
            None => {
                info!("PORT not set, using default: {DEFAULT_PORT}");
                DEFAULT_PORT
            }
        };

        Ok(Self {
            database_url,
            db_name,
            host,
            port,
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn optional(key: &str) -> Option<String> {
    env::var(key)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn required(key: &'static str) -> Result<String, ConfigError> {
    optional(key).ok_or(ConfigError::Missing(key))
}
