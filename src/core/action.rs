//! core::action
//!
//! The action requested on the command line.

use std::fmt;

/// Describes what the user wants adapman to do, based on which switches
/// were passed on the command line.
///
/// Exactly one action is carried by every parsed command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Action {
    /// Disable every network adapter, cutting off connectivity entirely.
    DisableAllAdapters,
    /// Enable every network adapter so the machine can reach a network again.
    EnableAllAdapters,
    /// Connect the WiFi interface to a network with the given SSID and key.
    ConnectWifi,
    /// Disconnect the WiFi interface from the network with the given SSID.
    DisconnectWifi,
    /// No action. Dispatching it does nothing.
    #[default]
    Unknown,
}

impl Action {
    /// Whether this action operates on the WiFi interface (and so carries an SSID).
    pub fn requires_wifi(self) -> bool {
        matches!(self, Action::ConnectWifi | Action::DisconnectWifi)
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Action::DisableAllAdapters => "disable all adapters",
            Action::EnableAllAdapters => "enable all adapters",
            Action::ConnectWifi => "connect wifi",
            Action::DisconnectWifi => "disconnect wifi",
            Action::Unknown => "unknown",
        };
        f.write_str(text)
    }
}
