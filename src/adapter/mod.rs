//! adapter
//!
//! Network adapter model and management.
//!
//! # Architecture
//!
//! Adapters are listed and toggled through the [`AdapterManager`] trait.
//! [`SystemAdapterManager`] implements it with the platform's own tools
//! (`ip` on Unix, `netsh` on Windows).
//!
//! Bulk operations ([`AdapterManager::enable_all`] and
//! [`AdapterManager::disable_all`]) skip adapters that are already in the
//! requested state and stop at the first failure.

mod system;

pub use system::{parse_ip_link, parse_netsh_interfaces, SystemAdapterManager};

use std::fmt;
use thiserror::Error;

use crate::runner::RunError;

/// Errors from adapter operations.
#[derive(Debug, Error)]
pub enum AdapterError {
    /// The external tool could not be run or reported failure.
    #[error(transparent)]
    Command(#[from] RunError),

    /// The adapter listing could not be understood.
    #[error("failed to parse adapter list: {0}")]
    Parse(String),
}

/// Connection state of an adapter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConnectionStatus {
    Disconnected,
    Connecting,
    Connected,
    Disconnecting,
    HardwareNotPresent,
    HardwareDisabled,
    MediaDisconnected,
    #[default]
    Unknown,
}

impl ConnectionStatus {
    /// Map a Linux operstate (`UP`, `DOWN`, ...).
    pub fn from_operstate(state: &str) -> Self {
        match state.to_ascii_uppercase().as_str() {
            "UP" => ConnectionStatus::Connected,
            "DORMANT" => ConnectionStatus::Connecting,
            "DOWN" => ConnectionStatus::Disconnected,
            "LOWERLAYERDOWN" => ConnectionStatus::MediaDisconnected,
            "NOTPRESENT" => ConnectionStatus::HardwareNotPresent,
            _ => ConnectionStatus::Unknown,
        }
    }

    /// Map a `netsh interface show interface` state column.
    pub fn from_netsh_state(state: &str) -> Self {
        match state.to_ascii_lowercase().as_str() {
            "connected" => ConnectionStatus::Connected,
            "disconnected" => ConnectionStatus::Disconnected,
            "connecting" => ConnectionStatus::Connecting,
            "disconnecting" => ConnectionStatus::Disconnecting,
            _ => ConnectionStatus::Unknown,
        }
    }
}

impl fmt::Display for ConnectionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            ConnectionStatus::Disconnected => "disconnected",
            ConnectionStatus::Connecting => "connecting",
            ConnectionStatus::Connected => "connected",
            ConnectionStatus::Disconnecting => "disconnecting",
            ConnectionStatus::HardwareNotPresent => "hardware not present",
            ConnectionStatus::HardwareDisabled => "hardware disabled",
            ConnectionStatus::MediaDisconnected => "media disconnected",
            ConnectionStatus::Unknown => "unknown",
        };
        f.write_str(text)
    }
}

/// A network adapter as listed by the system.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetworkAdapter {
    /// System index of the adapter.
    pub device_id: u32,
    /// Name used to address the adapter (`wlp2s0`, `Ethernet 2`).
    pub name: String,
    /// Product name, where the system reports one.
    pub product_name: String,
    /// Link type or description reported by the system.
    pub description: String,
    /// Whether the adapter is administratively enabled.
    pub enabled: bool,
    /// Current connection state.
    pub connection_status: ConnectionStatus,
}

impl fmt::Display for NetworkAdapter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}, {})",
            self.name,
            if self.enabled { "enabled" } else { "disabled" },
            self.connection_status
        )
    }
}

/// Lists network adapters and toggles their enabled state.
pub trait AdapterManager {
    /// List the adapters this manager operates on.
    fn adapters(&self) -> Result<Vec<NetworkAdapter>, AdapterError>;

    /// Enable or disable a single adapter.
    fn set_enabled(&self, adapter: &NetworkAdapter, enabled: bool) -> Result<(), AdapterError>;

    /// Enable every adapter. Returns the names of adapters that changed.
    fn enable_all(&self) -> Result<Vec<String>, AdapterError> {
        set_all(self, true)
    }

    /// Disable every adapter. Returns the names of adapters that changed.
    fn disable_all(&self) -> Result<Vec<String>, AdapterError> {
        set_all(self, false)
    }
}

fn set_all<M: AdapterManager + ?Sized>(
    manager: &M,
    enabled: bool,
) -> Result<Vec<String>, AdapterError> {
    let mut changed = Vec::new();
    for adapter in manager.adapters()? {
        if adapter.enabled == enabled {
            continue;
        }
        manager.set_enabled(&adapter, enabled)?;
        changed.push(adapter.name);
    }
    Ok(changed)
}
