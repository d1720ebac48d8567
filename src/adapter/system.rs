//! adapter::system
//!
//! Adapter management backed by the platform's own tools.
//!
//! | Platform | List                              | Toggle                                                   |
//! |----------|-----------------------------------|----------------------------------------------------------|
//! | Unix     | `ip -o link show`                 | `ip link set dev <name> up\|down`                        |
//! | Windows  | `netsh interface show interface`  | `netsh interface set interface name=<name> admin=...`    |
//!
//! Toggling usually needs elevated privileges; the tool's error output is
//! passed through unchanged when it refuses.

use super::{AdapterError, AdapterManager, ConnectionStatus, NetworkAdapter};
use crate::core::strings::contains_no_case;
use crate::runner::{run_checked, CommandRunner, Platform, SystemRunner};

/// Adapter manager that shells out to `ip` or `netsh`.
///
/// Adapters whose name or description contains any exclusion pattern
/// (ignoring case) are never listed and therefore never toggled.
#[derive(Debug, Clone)]
pub struct SystemAdapterManager<R = SystemRunner> {
    runner: R,
    platform: Platform,
    exclusions: Vec<String>,
}

impl SystemAdapterManager<SystemRunner> {
    /// Create a manager for the current platform.
    pub fn new(exclusions: Vec<String>) -> Self {
        Self::with_runner(SystemRunner, Platform::current(), exclusions)
    }
}

impl<R: CommandRunner> SystemAdapterManager<R> {
    /// Create a manager with an explicit runner and platform.
    ///
    /// This is primarily useful for testing.
    pub fn with_runner(runner: R, platform: Platform, exclusions: Vec<String>) -> Self {
        Self {
            runner,
            platform,
            exclusions,
        }
    }

    fn is_excluded(&self, adapter: &NetworkAdapter) -> bool {
        let fields = [&adapter.name, &adapter.description];
        self.exclusions
            .iter()
            .any(|pattern| contains_no_case(&fields, pattern))
    }
}

impl<R: CommandRunner> AdapterManager for SystemAdapterManager<R> {
    fn adapters(&self) -> Result<Vec<NetworkAdapter>, AdapterError> {
        let listed = match self.platform {
            Platform::Unix => {
                let output = run_checked(&self.runner, "ip", &["-o", "link", "show"])?;
                parse_ip_link(&output)?
            }
            Platform::Windows => {
                let output =
                    run_checked(&self.runner, "netsh", &["interface", "show", "interface"])?;
                parse_netsh_interfaces(&output)?
            }
        };

        Ok(listed
            .into_iter()
            .filter(|adapter| !self.is_excluded(adapter))
            .collect())
    }

    fn set_enabled(&self, adapter: &NetworkAdapter, enabled: bool) -> Result<(), AdapterError> {
        match self.platform {
            Platform::Unix => {
                let state = if enabled { "up" } else { "down" };
                run_checked(
                    &self.runner,
                    "ip",
                    &["link", "set", "dev", adapter.name.as_str(), state],
                )?;
            }
            Platform::Windows => {
                let name = format!("name={}", adapter.name);
                let admin = if enabled {
                    "admin=enabled"
                } else {
                    "admin=disabled"
                };
                run_checked(
                    &self.runner,
                    "netsh",
                    &["interface", "set", "interface", name.as_str(), admin],
                )?;
            }
        }
        Ok(())
    }
}

/// Parse the one-line-per-adapter output of `ip -o link show`.
///
/// ```text
/// 2: wlp2s0: <BROADCAST,MULTICAST,UP,LOWER_UP> mtu 1500 qdisc noqueue state UP mode DORMANT ...\    link/ether 3c:...
/// ```
pub fn parse_ip_link(output: &str) -> Result<Vec<NetworkAdapter>, AdapterError> {
    output
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(parse_ip_link_line)
        .collect()
}

fn parse_ip_link_line(line: &str) -> Result<NetworkAdapter, AdapterError> {
    let malformed = || AdapterError::Parse(format!("unexpected line '{}'", line.trim()));

    let (index, rest) = line.split_once(": ").ok_or_else(malformed)?;
    let device_id: u32 = index.trim().parse().map_err(|_| malformed())?;

    let (name, rest) = rest.split_once(": ").ok_or_else(malformed)?;
    // Stacked devices are listed as `veth1@if3`
    let name = name.split('@').next().unwrap_or(name).trim();
    if name.is_empty() {
        return Err(malformed());
    }

    let flags = rest
        .strip_prefix('<')
        .and_then(|r| r.split_once('>'))
        .map(|(flags, _)| flags)
        .ok_or_else(malformed)?;
    let enabled = flags.split(',').any(|flag| flag == "UP");

    let state = rest
        .split_whitespace()
        .skip_while(|token| *token != "state")
        .nth(1)
        .unwrap_or("UNKNOWN");

    let link_type = rest
        .split_whitespace()
        .find_map(|token| token.strip_prefix("link/"))
        .unwrap_or("unknown");

    let connection_status = if enabled {
        ConnectionStatus::from_operstate(state)
    } else {
        ConnectionStatus::HardwareDisabled
    };

    Ok(NetworkAdapter {
        device_id,
        name: name.to_string(),
        product_name: name.to_string(),
        description: link_type.to_string(),
        enabled,
        connection_status,
    })
}

/// Parse the table printed by `netsh interface show interface`.
///
/// ```text
/// Admin State    State          Type             Interface Name
/// -------------------------------------------------------------------------
/// Enabled        Connected      Dedicated        Wi-Fi
/// Disabled       Disconnected   Dedicated        Ethernet 2
/// ```
pub fn parse_netsh_interfaces(output: &str) -> Result<Vec<NetworkAdapter>, AdapterError> {
    let mut lines = output.lines();
    if !lines.by_ref().any(|line| line.trim_start().starts_with("---")) {
        return Err(AdapterError::Parse(
            "missing interface table header".to_string(),
        ));
    }

    let mut adapters = Vec::new();
    for (index, line) in lines.filter(|l| !l.trim().is_empty()).enumerate() {
        let malformed = || AdapterError::Parse(format!("unexpected line '{}'", line.trim()));

        let (admin, rest) = next_token(line).ok_or_else(malformed)?;
        let (state, rest) = next_token(rest).ok_or_else(malformed)?;
        let (kind, rest) = next_token(rest).ok_or_else(malformed)?;
        let name = rest.trim();
        if name.is_empty() {
            return Err(malformed());
        }

        let enabled = admin.eq_ignore_ascii_case("enabled");
        let connection_status = if enabled {
            ConnectionStatus::from_netsh_state(state)
        } else {
            ConnectionStatus::HardwareDisabled
        };

        adapters.push(NetworkAdapter {
            device_id: index as u32 + 1,
            name: name.to_string(),
            product_name: name.to_string(),
            description: kind.to_string(),
            enabled,
            connection_status,
        });
    }

    Ok(adapters)
}

/// Split off the first whitespace-delimited token.
fn next_token(s: &str) -> Option<(&str, &str)> {
    let s = s.trim_start();
    if s.is_empty() {
        return None;
    }
    Some(s.split_once(char::is_whitespace).unwrap_or((s, "")))
}
