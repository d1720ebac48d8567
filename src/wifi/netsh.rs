//! wifi::netsh
//!
//! WiFi management through `netsh wlan` (Windows).
//!
//! Connecting installs a WPA2-PSK profile for the network, then connects
//! with that profile. Disconnecting deletes the profile, which also drops
//! the connection.

use std::io::Write;

use super::profile::WlanProfile;
use super::{require_ssid, WifiError, WifiManager};
use crate::runner::{run_checked, CommandRunner};

/// WiFi manager backed by `netsh wlan`.
#[derive(Debug, Clone)]
pub struct NetshWifi<R> {
    runner: R,
    interface: Option<String>,
}

impl<R: CommandRunner> NetshWifi<R> {
    /// Create a manager; `interface` limits operations to one interface.
    pub fn new(runner: R, interface: Option<String>) -> Self {
        Self { runner, interface }
    }

    fn interface_arg(&self) -> Option<String> {
        self.interface.as_ref().map(|i| format!("interface={}", i))
    }

    fn netsh<'a>(&self, mut args: Vec<&'a str>, interface: Option<&'a str>) -> Result<(), WifiError> {
        if let Some(arg) = interface {
            args.push(arg);
        }
        run_checked(&self.runner, "netsh", &args)?;
        Ok(())
    }
}

impl<R: CommandRunner> WifiManager for NetshWifi<R> {
    fn connect(&self, ssid: &str, password: &str) -> Result<(), WifiError> {
        require_ssid(ssid, "connect")?;
        let profile = WlanProfile::new(ssid, password)?;

        // Removed when dropped, so the key does not linger on disk.
        let mut file = tempfile::Builder::new()
            .prefix("adapman-")
            .suffix(".xml")
            .tempfile()
            .map_err(|e| WifiError::Profile {
                path: std::env::temp_dir(),
                source: e,
            })?;
        file.write_all(profile.to_xml().as_bytes())
            .and_then(|_| file.flush())
            .map_err(|e| WifiError::Profile {
                path: file.path().to_path_buf(),
                source: e,
            })?;

        let interface = self.interface_arg();
        let filename = format!("filename={}", file.path().display());
        self.netsh(
            vec!["wlan", "add", "profile", filename.as_str(), "user=all"],
            interface.as_deref(),
        )?;

        let name = format!("name={}", profile.ssid());
        let ssid_arg = format!("ssid={}", profile.ssid());
        self.netsh(
            vec!["wlan", "connect", name.as_str(), ssid_arg.as_str()],
            interface.as_deref(),
        )
    }

    fn disconnect(&self, ssid: &str) -> Result<(), WifiError> {
        require_ssid(ssid, "disconnect")?;

        let interface = self.interface_arg();
        let name = format!("name={}", ssid);
        self.netsh(
            vec!["wlan", "delete", "profile", name.as_str()],
            interface.as_deref(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runner::mock::MockRunner;
    use crate::runner::ProgramOutput;

    #[test]
    fn connect_adds_profile_then_connects() {
        let runner = MockRunner::new();
        let wifi = NetshWifi::new(runner.clone(), None);

        wifi.connect("home", "secret").unwrap();

        let calls = runner.calls();
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[0].program, "netsh");
        assert_eq!(&calls[0].args[..3], &["wlan", "add", "profile"]);
        assert!(calls[0].args[3].starts_with("filename="));
        assert!(calls[0].args[3].ends_with(".xml"));
        assert_eq!(calls[0].args[4], "user=all");
        assert_eq!(calls[1].args, vec!["wlan", "connect", "name=home", "ssid=home"]);
    }

    #[test]
    fn profile_file_is_removed_after_connect() {
        let runner = MockRunner::new();
        let wifi = NetshWifi::new(runner.clone(), None);
        wifi.connect("home", "secret").unwrap();

        let arg = &runner.calls()[0].args[3];
        let path = arg.trim_start_matches("filename=");
        assert!(!std::path::Path::new(path).exists());
    }

    #[test]
    fn connect_passes_interface() {
        let runner = MockRunner::new();
        let wifi = NetshWifi::new(runner.clone(), Some("Wi-Fi 2".to_string()));
        wifi.connect("home", "").unwrap();

        for call in runner.calls() {
            assert_eq!(call.args.last().map(String::as_str), Some("interface=Wi-Fi 2"));
        }
    }

    #[test]
    fn connect_stops_when_profile_rejected() {
        let runner = MockRunner::new().respond(ProgramOutput::failed(1, "The profile is invalid"));
        let wifi = NetshWifi::new(runner.clone(), None);

        let err = wifi.connect("home", "secret").unwrap_err();
        assert!(matches!(err, WifiError::Command(_)));
        assert!(!err.to_string().contains("secret"));
        assert_eq!(runner.calls().len(), 1);
    }

    #[test]
    fn disconnect_deletes_profile() {
        let runner = MockRunner::new();
        let wifi = NetshWifi::new(runner.clone(), None);
        wifi.disconnect("The Worst Astronomer").unwrap();

        assert_eq!(
            runner.command_lines(),
            vec!["netsh wlan delete profile name=The Worst Astronomer"]
        );
    }

    #[test]
    fn blank_ssid_never_runs_netsh() {
        let runner = MockRunner::new();
        let wifi = NetshWifi::new(runner.clone(), None);

        assert!(matches!(
            wifi.connect(" ", "secret"),
            Err(WifiError::MissingSsid("connect"))
        ));
        assert!(matches!(
            wifi.disconnect(""),
            Err(WifiError::MissingSsid("disconnect"))
        ));
        assert!(runner.calls().is_empty());
    }
}
