use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{CoreError, Result};

/// Environment variable that replaces the structured connection settings.
pub const DATABASE_URL_ENV: &str = "DATABASE_URL";

/// Top-level configuration, read from `~/.lightbnb/config.toml`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LightbnbConfig {
    /// Log filter used when `RUST_LOG` is unset (e.g. "info", "lightbnb_db=debug")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_level: Option<String>,

    pub database: DatabaseConfig,

    /// Full connection URL taken from the environment; never written to disk
    #[serde(skip)]
    database_url: Option<String>,
}

/// Connection settings for the relational store
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    pub user: String,
    pub password: String,
    pub host: String,
    pub database: String,
    pub port: u16,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            user: "vagrant".to_string(),
            password: "123".to_string(),
            host: "localhost".to_string(),
            database: "lightbnb".to_string(),
            port: 5432,
        }
    }
}

impl DatabaseConfig {
    /// Connection string with the password masked, for logs and `config show`
    pub fn redacted(&self) -> String {
        format!(
            "postgres://{}:***@{}:{}/{}",
            self.user, self.host, self.port, self.database
        )
    }
}

impl LightbnbConfig {
    /// Load config from `~/.lightbnb/config.toml`, applying environment overrides.
    ///
    /// A missing file is not an error: the defaults match a local
    /// development database.
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        let config = if path.exists() {
            Self::load_from(&path)?
        } else {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            Self::default()
        };

        Ok(config.with_env_overrides())
    }

    /// Load config from an explicit path. The file must exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content).map_err(|e| CoreError::toml(path, e))?;

        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Get config file path: ~/.lightbnb/config.toml
    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| CoreError::config("could not determine home directory"))?;
        Ok(home.join(".lightbnb").join("config.toml"))
    }

    /// Apply overrides from the process environment
    pub fn with_env_overrides(mut self) -> Self {
        self.apply_overrides(|key| env::var(key).ok());
        self
    }

    /// Apply overrides from an arbitrary variable source.
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup(DATABASE_URL_ENV).filter(|url| !url.trim().is_empty()) {
            self.database_url = Some(url);
        }
    }

    /// Replace the connection URL, e.g. from a `--database-url` flag
    pub fn set_database_url(&mut self, url: impl Into<String>) {
        self.database_url = Some(url.into());
    }

    /// Connection URL override, if one was supplied.
    ///
    /// When `None`, callers connect with [`DatabaseConfig`] fields.
    pub fn database_url(&self) -> Option<&str> {
        self.database_url.as_deref()
    }

    /// Save config to the default path
    pub fn save(&self) -> Result<PathBuf> {
        let path = Self::config_path()?;
        self.save_to(&path)?;
        Ok(path)
    }

    /// Save config to a specific path, creating parent directories
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let toml_str = toml::to_string_pretty(self)?;
        fs::write(path, toml_str)?;

        Ok(())
    }
}
