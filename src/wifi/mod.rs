//! wifi
//!
//! Connecting to and disconnecting from WiFi networks.
//!
//! # Architecture
//!
//! WiFi operations go through the [`WifiManager`] trait:
//!
//! - [`NetshWifi`]: Windows, installs a WPA2-PSK profile and connects with it
//! - [`NmcliWifi`]: Unix, drives NetworkManager through `nmcli`
//!
//! Use [`system_wifi`] to get the implementation for the current platform.
//!
//! # Security
//!
//! Network keys are never logged or included in error messages.

mod netsh;
mod nmcli;
pub mod profile;

pub use netsh::NetshWifi;
pub use nmcli::NmcliWifi;

use std::path::PathBuf;
use thiserror::Error;

use crate::core::strings::is_blank;
use crate::runner::{CommandRunner, Platform, RunError};

/// Errors from WiFi operations.
#[derive(Debug, Error)]
pub enum WifiError {
    /// The SSID was empty or whitespace.
    #[error("an SSID is required to {0}")]
    MissingSsid(&'static str),

    /// The external tool could not be run or reported failure.
    #[error(transparent)]
    Command(#[from] RunError),

    /// The temporary WLAN profile could not be written.
    #[error("failed to write WLAN profile '{path}': {source}")]
    Profile {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Connects to and disconnects from WiFi networks.
pub trait WifiManager {
    /// Connect to the network `ssid` using the network key `password`.
    ///
    /// An empty password is passed through as-is.
    fn connect(&self, ssid: &str, password: &str) -> Result<(), WifiError>;

    /// Disconnect from the network `ssid` and forget it.
    fn disconnect(&self, ssid: &str) -> Result<(), WifiError>;
}

/// Reject a blank SSID before anything touches the system.
fn require_ssid(ssid: &str, operation: &'static str) -> Result<(), WifiError> {
    if is_blank(ssid) {
        Err(WifiError::MissingSsid(operation))
    } else {
        Ok(())
    }
}

/// Create the WiFi manager for `platform`.
///
/// `interface` restricts operations to one wireless interface.
pub fn system_wifi<R: CommandRunner + 'static>(
    runner: R,
    platform: Platform,
    interface: Option<String>,
) -> Box<dyn WifiManager> {
    match platform {
        Platform::Unix => Box::new(NmcliWifi::new(runner, interface)),
        Platform::Windows => Box::new(NetshWifi::new(runner, interface)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runner::mock::MockRunner;

    #[test]
    fn require_ssid_rejects_blank() {
        assert!(require_ssid("home", "connect").is_ok());

        let err = require_ssid("  ", "connect").unwrap_err();
        assert_eq!(err.to_string(), "an SSID is required to connect");
    }

    #[test]
    fn system_wifi_dispatches_by_platform() {
        let runner = MockRunner::new();
        let wifi = system_wifi(runner.clone(), Platform::Unix, None);
        wifi.disconnect("home").unwrap();
        assert_eq!(runner.calls()[0].program, "nmcli");

        let runner = MockRunner::new();
        let wifi = system_wifi(runner.clone(), Platform::Windows, None);
        wifi.disconnect("home").unwrap();
        assert_eq!(runner.calls()[0].program, "netsh");
    }
}
