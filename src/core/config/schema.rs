//! core::config::schema
//!
//! Configuration file schema.
//!
//! # Validation
//!
//! Values are validated after parsing: exclusion patterns and the WiFi
//! interface name must not be blank.

use serde::{Deserialize, Serialize};

use super::ConfigError;
use crate::core::strings::is_blank;

/// Contents of an adapman configuration file.
///
/// # Example
///
/// ```toml
/// debug = false
///
/// [adapters]
/// exclude = ["loopback", "docker", "Hyper-V"]
///
/// [wifi]
/// interface = "wlan0"
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct ConfigFile {
    /// Enable debug output by default
    pub debug: Option<bool>,

    /// Adapter selection settings
    pub adapters: Option<AdapterSettings>,

    /// WiFi settings
    pub wifi: Option<WifiSettings>,
}

impl ConfigFile {
    /// Validate the configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if any value is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(adapters) = &self.adapters {
            adapters.validate()?;
        }
        if let Some(wifi) = &self.wifi {
            wifi.validate()?;
        }
        Ok(())
    }
}

/// Which adapters the enable/disable actions touch.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct AdapterSettings {
    /// Adapters whose name or description contains any of these
    /// (case-insensitive) are left alone. Replaces the platform default.
    pub exclude: Option<Vec<String>>,
}

impl AdapterSettings {
    fn validate(&self) -> Result<(), ConfigError> {
        if let Some(exclude) = &self.exclude {
            if exclude.iter().any(|e| is_blank(e)) {
                return Err(ConfigError::InvalidValue(
                    "adapters.exclude entries cannot be blank".to_string(),
                ));
            }
        }
        Ok(())
    }
}

/// WiFi connection settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct WifiSettings {
    /// Interface to use; the system picks one when unset
    pub interface: Option<String>,
}

impl WifiSettings {
    fn validate(&self) -> Result<(), ConfigError> {
        if let Some(interface) = &self.interface {
            if is_blank(interface) {
                return Err(ConfigError::InvalidValue(
                    "wifi.interface cannot be blank".to_string(),
                ));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = ConfigFile::default();
        assert!(config.debug.is_none());
        assert!(config.adapters.is_none());
        assert!(config.wifi.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn parses_full_file() {
        let config: ConfigFile = toml::from_str(
            r#"
            debug = true

            [adapters]
            exclude = ["lo", "docker"]

            [wifi]
            interface = "wlan0"
            "#,
        )
        .unwrap();

        assert_eq!(config.debug, Some(true));
        assert_eq!(
            config.adapters.unwrap().exclude,
            Some(vec!["lo".to_string(), "docker".to_string()])
        );
        assert_eq!(config.wifi.unwrap().interface.as_deref(), Some("wlan0"));
    }

    #[test]
    fn rejects_unknown_fields() {
        let result: Result<ConfigFile, _> = toml::from_str("trunk = \"main\"");
        assert!(result.is_err());
    }

    #[test]
    fn blank_exclusion_is_invalid() {
        let config = ConfigFile {
            adapters: Some(AdapterSettings {
                exclude: Some(vec!["lo".to_string(), "  ".to_string()]),
            }),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn blank_interface_is_invalid() {
        let config = ConfigFile {
            wifi: Some(WifiSettings {
                interface: Some(String::new()),
            }),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
