//! wifi::nmcli
//!
//! WiFi management through NetworkManager's `nmcli` (Unix).

use super::{require_ssid, WifiError, WifiManager};
use crate::runner::{run_checked, run_checked_redacting, CommandRunner};

/// WiFi manager backed by `nmcli`.
///
/// Disconnecting deletes the saved connection named after the SSID.
#[derive(Debug, Clone)]
pub struct NmcliWifi<R> {
    runner: R,
    interface: Option<String>,
}

impl<R: CommandRunner> NmcliWifi<R> {
    /// Create a manager; `interface` limits connections to one device.
    pub fn new(runner: R, interface: Option<String>) -> Self {
        Self { runner, interface }
    }
}

impl<R: CommandRunner> WifiManager for NmcliWifi<R> {
    fn connect(&self, ssid: &str, password: &str) -> Result<(), WifiError> {
        require_ssid(ssid, "connect")?;

        let mut args = vec!["device", "wifi", "connect", ssid];
        if !password.is_empty() {
            args.extend(["password", password]);
        }
        if let Some(interface) = &self.interface {
            args.extend(["ifname", interface.as_str()]);
        }

        run_checked_redacting(&self.runner, "nmcli", &args, password)?;
        Ok(())
    }

    fn disconnect(&self, ssid: &str) -> Result<(), WifiError> {
        require_ssid(ssid, "disconnect")?;
        run_checked(&self.runner, "nmcli", &["connection", "delete", "id", ssid])?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runner::mock::MockRunner;
    use crate::runner::ProgramOutput;

    #[test]
    fn connect_with_password() {
        let runner = MockRunner::new();
        let wifi = NmcliWifi::new(runner.clone(), None);
        wifi.connect("home", "secret").unwrap();

        assert_eq!(
            runner.calls()[0].args,
            vec!["device", "wifi", "connect", "home", "password", "secret"]
        );
    }

    #[test]
    fn connect_open_network_omits_password() {
        let runner = MockRunner::new();
        let wifi = NmcliWifi::new(runner.clone(), Some("wlan0".to_string()));
        wifi.connect("cafe", "").unwrap();

        assert_eq!(
            runner.command_lines(),
            vec!["nmcli device wifi connect cafe ifname wlan0"]
        );
    }

    #[test]
    fn connect_failure_hides_password() {
        let runner = MockRunner::new().respond(ProgramOutput::failed(
            10,
            "Error: No network with SSID 'home' found.",
        ));
        let wifi = NmcliWifi::new(runner, None);

        let err = wifi.connect("home", "hunter2").unwrap_err();
        let message = err.to_string();
        assert!(message.contains("No network with SSID"));
        assert!(!message.contains("hunter2"));
    }

    #[test]
    fn disconnect_deletes_connection() {
        let runner = MockRunner::new();
        let wifi = NmcliWifi::new(runner.clone(), None);
        wifi.disconnect("home").unwrap();

        assert_eq!(
            runner.command_lines(),
            vec!["nmcli connection delete id home"]
        );
    }

    #[test]
    fn blank_ssid_is_rejected() {
        let runner = MockRunner::new();
        let wifi = NmcliWifi::new(runner.clone(), None);

        assert!(matches!(
            wifi.disconnect("\t"),
            Err(WifiError::MissingSsid(_))
        ));
        assert!(runner.calls().is_empty());
    }
}
