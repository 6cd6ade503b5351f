//! Connection configuration.

use std::str::FromStr;

use oxide_rel_core::Result;
use serde::{Deserialize, Serialize};
use sqlx::sqlite::SqliteConnectOptions;

use crate::error::from_sqlx;

/// Environment variable naming the database to open.
pub const DATABASE_ENV: &str = "SQLITE3_DATABASE";

/// How to open a SQLite database.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SqliteConfig {
    /// Database URL or path, e.g. `sqlite::memory:` or `sqlite://app.db`.
    pub database: String,
    /// Enforce foreign keys.
    pub foreign_keys: bool,
    /// Create the database file if it does not exist.
    pub create_if_missing: bool,
    /// Pool size. An in-memory database is private to its connection, so
    /// it needs a pool of one.
    pub max_connections: u32,
}

impl Default for SqliteConfig {
    fn default() -> Self {
        Self {
            database: "sqlite::memory:".to_string(),
            foreign_keys: true,
            create_if_missing: true,
            max_connections: 1,
        }
    }
}

impl SqliteConfig {
    /// Creates the default configuration with `database` overridden by
    /// `SQLITE3_DATABASE` when it is set.
    #[must_use]
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Some(database) = std::env::var(DATABASE_ENV).ok().filter(|db| !db.is_empty()) {
            config.database = database;
        }
        config
    }

    /// Builds `sqlx` connect options.
    ///
    /// # Errors
    ///
    /// Returns a driver error if `database` is not a valid SQLite URL.
    pub fn connect_options(&self) -> Result<SqliteConnectOptions> {
        let options = SqliteConnectOptions::from_str(&self.database).map_err(from_sqlx)?;
        Ok(options
            .foreign_keys(self.foreign_keys)
            .create_if_missing(self.create_if_missing))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SqliteConfig::default();
        assert_eq!(config.database, "sqlite::memory:");
        assert!(config.foreign_keys);
        assert!(config.create_if_missing);
        assert_eq!(config.max_connections, 1);
    }

    #[test]
    fn test_connect_options() {
        let options = SqliteConfig::default().connect_options().unwrap();
        assert!(options.get_filename().to_string_lossy().contains("memory"));
    }

    #[test]
    fn test_invalid_database_url() {
        let config = SqliteConfig {
            database: "sqlite://app.db?mode=bogus".to_string(),
            ..SqliteConfig::default()
        };
        assert!(config.connect_options().is_err());
    }
}
