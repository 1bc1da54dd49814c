//! Connection and run configuration.
//!
//! Every value has a development default and can be overridden through the
//! environment:
//!
//! | variable          | default            |
//! |-------------------|--------------------|
//! | `DB_NAME`         | `postgres`         |
//! | `DB_USER`         | `postgres`         |
//! | `DB_PASSWORD`     | `mysecretpassword` |
//! | `DB_HOST`         | `db`               |
//! | `DB_PORT`         | `5432`             |
//! | `EMPLOYEES_TABLE` | `employees`        |
//! | `SEED_COUNT`      | `10`               |

use std::fmt;

use serde::{Deserialize, Serialize};
use sqlx::postgres::PgConnectOptions;

use crate::errors::AppError;
use crate::models::TableName;

/// Number of employees generated per run.
pub const DEFAULT_SEED_COUNT: usize = 10;

/// Parameters for the single database connection.
#[derive(Clone, Serialize, Deserialize)]
pub struct DbConfig {
    pub dbname: String,
    pub user: String,
    pub password: String,
    pub host: String,
    pub port: u16,
}

impl Default for DbConfig {
    fn default() -> Self {
        Self {
            dbname: "postgres".to_string(),
            user: "postgres".to_string(),
            password: "mysecretpassword".to_string(),
            host: "db".to_string(),
            port: 5432,
        }
    }
}

impl DbConfig {
    pub fn connect_options(&self) -> PgConnectOptions {
        PgConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .username(&self.user)
            .password(&self.password)
            .database(&self.dbname)
    }
}

// Keeps the password out of log lines.
impl fmt::Debug for DbConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DbConfig")
            .field("dbname", &self.dbname)
            .field("user", &self.user)
            .field("password", &"***")
            .field("host", &self.host)
            .field("port", &self.port)
            .finish()
    }
}

/// Everything a run needs: where to connect, which table, how many rows.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub db: DbConfig,
    pub table: TableName,
    pub seed_count: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            db: DbConfig::default(),
            table: TableName::default(),
            seed_count: DEFAULT_SEED_COUNT,
        }
    }
}

impl AppConfig {
    /// Reads the configuration from process environment variables.
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup, falling back to
    /// defaults for missing keys.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = DbConfig::default();

        let port = match lookup("DB_PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|e| AppError::Config(format!("DB_PORT={raw:?}: {e}")))?,
            None => defaults.port,
        };

        let seed_count = match lookup("SEED_COUNT") {
            Some(raw) => raw
                .trim()
                .parse::<usize>()
                .map_err(|e| AppError::Config(format!("SEED_COUNT={raw:?}: {e}")))?,
            None => DEFAULT_SEED_COUNT,
        };

        let table = match lookup("EMPLOYEES_TABLE") {
            Some(raw) => TableName::new(raw)?,
            None => TableName::default(),
        };

        let db = DbConfig {
            dbname: lookup("DB_NAME").unwrap_or(defaults.dbname),
            user: lookup("DB_USER").unwrap_or(defaults.user),
            password: lookup("DB_PASSWORD").unwrap_or(defaults.password),
            host: lookup("DB_HOST").unwrap_or(defaults.host),
            port,
        };

        Ok(Self {
            db,
            table,
            seed_count,
        })
    }
}
