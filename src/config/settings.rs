//! Application settings loaded from `config.toml` and the environment.
//!
//! Every field has a default, so the file is optional. Environment variables
//! (also picked up from `.env` by `dotenvy` in `main`) override the file.

use crate::config::database::DEFAULT_DATABASE_URL;
use crate::errors::{Error, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Default name of the optional configuration file.
pub const CONFIG_FILE: &str = "config.toml";

/// Shape of `config.toml`
#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    inventory: AppConfig,
}

/// Resolved runtime configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// `SeaORM` connection string for the store
    pub database_url: String,
    /// File imported once at startup
    pub inventory_csv: PathBuf,
    /// File written by the backup action
    pub backup_csv: PathBuf,
    /// Emit ANSI clear-screen codes between screens
    pub clear_screen: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            database_url: DEFAULT_DATABASE_URL.to_string(),
            inventory_csv: PathBuf::from("inventory.csv"),
            backup_csv: PathBuf::from("inventory_backup.csv"),
            clear_screen: true,
        }
    }
}

impl AppConfig {
    /// Parses configuration from TOML text.
    ///
    /// # Errors
    /// Returns [`Error::Config`] when the text is not valid TOML or a field has
    /// the wrong type.
    pub fn from_toml(contents: &str) -> Result<Self> {
        let file: ConfigFile = toml::from_str(contents).map_err(|e| Error::Config {
            message: format!("Failed to parse config.toml: {e}"),
        })?;
        Ok(file.inventory)
    }

    /// Applies overrides from a variable lookup.
    #[must_use]
    pub fn with_overrides<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup("DATABASE_URL") {
            self.database_url = url;
        }
        if let Some(path) = lookup("INVENTORY_CSV") {
            self.inventory_csv = PathBuf::from(path);
        }
        if let Some(path) = lookup("INVENTORY_BACKUP_CSV") {
            self.backup_csv = PathBuf::from(path);
        }
        self
    }
}

/// Loads configuration from `path` if it exists, falling back to defaults.
///
/// # Errors
/// Returns [`Error::Config`] if the file exists but cannot be read or parsed.
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<AppConfig> {
    let path_ref = path.as_ref();
    if !path_ref.exists() {
        debug!("No configuration file at {:?}, using defaults", path_ref);
        return Ok(AppConfig::default());
    }

    debug!("Loading configuration from {:?}", path_ref);
    let contents = std::fs::read_to_string(path_ref).map_err(|e| Error::Config {
        message: format!("Failed to read config file {}: {e}", path_ref.display()),
    })?;
    AppConfig::from_toml(&contents)
}

/// Loads `config.toml` from the working directory and applies environment overrides.
///
/// # Errors
/// See [`load_config`].
pub fn load_app_configuration() -> Result<AppConfig> {
    Ok(load_config(CONFIG_FILE)?.with_overrides(|key| std::env::var(key).ok()))
}
