use std::fmt;

use serde::Deserialize;
use sqlx::postgres::PgConnectOptions;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("missing environment variable {0}")]
    Missing(&'static str),
    #[error("invalid DB_PORT value {0:?}")]
    InvalidPort(String),
}

/// Connection parameters for the users database.
#[derive(Clone, Deserialize, PartialEq, Eq)]
pub struct DbConfig {
    pub database: String,
    pub user: String,
    pub password: String,
    pub host: String,
    pub port: u16,
}

impl DbConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database = lookup("DATABASE").ok_or(ConfigError::Missing("DATABASE"))?;
        let user = lookup("DB_USER").ok_or(ConfigError::Missing("DB_USER"))?;
        let password = lookup("DB_PASSWORD").unwrap_or_default();
        let host = lookup("DB_HOST").unwrap_or_else(|| "localhost".into());
        let port = match lookup("DB_PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort(raw))?,
            None => 5432,
        };
        Ok(Self {
            database,
            user,
            password,
            host,
            port,
        })
    }

    pub fn connect_options(&self) -> PgConnectOptions {
        PgConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .username(&self.user)
            .password(&self.password)
            .database(&self.database)
    }
}

/// Fixed local settings, for deployments without a `.env` file.
impl Default for DbConfig {
    fn default() -> Self {
        Self {
            database: "postgres".into(),
            user: "postgres".into(),
            password: "postgres".into(),
            host: "localhost".into(),
            port: 5432,
        }
    }
}

impl fmt::Debug for DbConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DbConfig")
            .field("database", &self.database)
            .field("user", &self.user)
            .field("password", &"***")
            .field("host", &self.host)
            .field("port", &self.port)
            .finish()
    }
}
