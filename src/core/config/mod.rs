//! core::config
//!
//! Configuration schema and loading.
//!
//! # Locations
//!
//! The first file found wins:
//! 1. The path given with `--config` (must exist)
//! 2. `$ADAPMAN_CONFIG` if set
//! 3. `$XDG_CONFIG_HOME/adapman/config.toml`
//! 4. `~/.adapman/config.toml`
//!
//! A missing file is not an error; defaults are used.
//!
//! # Precedence
//!
//! CLI flags override file values. That merge happens in the CLI layer.

pub mod schema;

pub use schema::{AdapterSettings, ConfigFile, WifiSettings};

use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV: &str = "ADAPMAN_CONFIG";

/// Errors from configuration operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file '{path}': {message}")]
    ParseError { path: PathBuf, message: String },

    #[error("invalid config value: {0}")]
    InvalidValue(String),
}

/// Loaded configuration with defaults applied through accessors.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Parsed file contents (default if no file was found)
    pub file: ConfigFile,
    /// Path the configuration was loaded from
    path: Option<PathBuf>,
}

impl Config {
    /// Load configuration.
    ///
    /// If `explicit` is given, that file must exist. Otherwise the standard
    /// locations are searched.
    ///
    /// # Errors
    ///
    /// Returns an error if a config file exists but cannot be read, parsed,
    /// or validated.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            return Self::load_from(path);
        }

        match Self::find() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load and validate a specific config file.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let file: ConfigFile = toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        file.validate()?;

        Ok(Self {
            file,
            path: Some(path.to_path_buf()),
        })
    }

    /// Search the standard locations for a config file.
    fn find() -> Option<PathBuf> {
        if let Ok(path) = std::env::var(CONFIG_ENV) {
            let path = PathBuf::from(path);
            if path.exists() {
                return Some(path);
            }
        }

        if let Ok(xdg_home) = std::env::var("XDG_CONFIG_HOME") {
            let path = PathBuf::from(xdg_home).join("adapman/config.toml");
            if path.exists() {
                return Some(path);
            }
        }

        dirs::home_dir()
            .map(|home| home.join(".adapman/config.toml"))
            .filter(|path| path.exists())
    }

    /// Path the configuration came from, if any.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Whether debug output is on by default.
    ///
    /// Defaults to `false`.
    pub fn debug(&self) -> bool {
        self.file.debug.unwrap_or(false)
    }

    /// Adapter exclusion patterns.
    ///
    /// Defaults to excluding loopback adapters.
    pub fn adapter_exclusions(&self) -> Vec<String> {
        self.file
            .adapters
            .as_ref()
            .and_then(|a| a.exclude.clone())
            .unwrap_or_else(default_exclusions)
    }

    /// WiFi interface to use, if configured.
    pub fn wifi_interface(&self) -> Option<&str> {
        self.file.wifi.as_ref().and_then(|w| w.interface.as_deref())
    }
}

fn default_exclusions() -> Vec<String> {
    vec!["loopback".to_string()]
}
