//! core::command_line
//!
//! Turns a raw argument list into a typed [`ParsedCommand`].
//!
//! # Pipeline
//!
//! Parsing runs three total stages with no retained state:
//!
//! 1. **Normalize** - drop a leading executable token, if present
//! 2. **Validate** - classify the list with [`validator::classify`]
//! 3. **Map** - build the command for the classified shape
//!
//! An invalid list yields `None`. The caller decides how to report it
//! (print usage, exit non-zero); this module never prints or exits.
//!
//! # Executable Token
//!
//! Callers may pass the full OS argument vector, whose first element is
//! the program path. That element is dropped when it does not start with
//! `-` and its final path component ends with `.exe` or is the program
//! name (`adapman`, any case). A bare flag such as `-da` is never dropped.

use std::fmt;

use super::action::Action;
use super::validator::{self, Shape, FLAG_PREFIX};

/// Name of the program, as it appears in the executable token.
pub const PROGRAM_NAME: &str = "adapman";

const EXE_SUFFIX: &str = ".exe";

/// A validated request for a single action and its operands.
///
/// Immutable once built. The SSID and password are empty when the action
/// does not use them. For [`Action::ConnectWifi`] the password may be empty.
#[derive(Clone, PartialEq, Eq, Default)]
pub struct ParsedCommand {
    action: Action,
    wifi_ssid: String,
    wifi_password: String,
}

impl ParsedCommand {
    fn new(action: Action, wifi_ssid: String, wifi_password: String) -> Self {
        Self {
            action,
            wifi_ssid,
            wifi_password,
        }
    }

    /// A command that disables every adapter.
    pub fn disable_all_adapters() -> Self {
        Self::new(Action::DisableAllAdapters, String::new(), String::new())
    }

    /// A command that enables every adapter.
    pub fn enable_all_adapters() -> Self {
        Self::new(Action::EnableAllAdapters, String::new(), String::new())
    }

    /// A command that disconnects WiFi from `ssid`.
    pub fn disconnect_wifi(ssid: impl Into<String>) -> Self {
        Self::new(Action::DisconnectWifi, ssid.into(), String::new())
    }

    /// A command that connects WiFi to `ssid` using `password`.
    pub fn connect_wifi(ssid: impl Into<String>, password: impl Into<String>) -> Self {
        Self::new(Action::ConnectWifi, ssid.into(), password.into())
    }

    /// The requested action.
    pub fn action(&self) -> Action {
        self.action
    }

    /// SSID of the WiFi network the action applies to (empty if none).
    pub fn wifi_ssid(&self) -> &str {
        &self.wifi_ssid
    }

    /// Network security key for [`Action::ConnectWifi`] (empty otherwise).
    pub fn wifi_password(&self) -> &str {
        &self.wifi_password
    }

    /// Parse a raw argument list.
    ///
    /// Accepts either the user-supplied flags alone or the full argument
    /// vector including the program path. Returns `None` if the arguments
    /// do not form a valid command line.
    ///
    /// # Example
    ///
    /// ```
    /// use adapman::core::{Action, ParsedCommand};
    ///
    /// let cmd = ParsedCommand::parse(&["path/to/adapman.exe", "-ea"]).unwrap();
    /// assert_eq!(cmd.action(), Action::EnableAllAdapters);
    ///
    /// let cmd = ParsedCommand::parse(&["-cw:ssid", "hello", "-cw:pwd", "world"]).unwrap();
    /// assert_eq!(cmd.wifi_ssid(), "hello");
    /// assert_eq!(cmd.wifi_password(), "world");
    ///
    /// assert!(ParsedCommand::parse(&["-cw:ssid", "hello"]).is_none());
    /// ```
    pub fn parse<S: AsRef<str>>(args: &[S]) -> Option<Self> {
        let args = normalize(args);
        let shape = validator::classify(args)?;

        let operand = |index: usize| {
            args.get(index)
                .map(|s| s.as_ref().to_string())
                .unwrap_or_default()
        };

        let command = match shape {
            Shape::DisableAll => Self::disable_all_adapters(),
            Shape::EnableAll => Self::enable_all_adapters(),
            Shape::DisconnectWifi => Self::disconnect_wifi(operand(1)),
            Shape::ConnectWifi => Self::connect_wifi(operand(1), operand(3)),
        };

        Some(command)
    }
}

impl fmt::Debug for ParsedCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Never expose the network key in logs.
        let password = if self.wifi_password.is_empty() {
            ""
        } else {
            "<redacted>"
        };
        f.debug_struct("ParsedCommand")
            .field("action", &self.action)
            .field("wifi_ssid", &self.wifi_ssid)
            .field("wifi_password", &password)
            .finish()
    }
}

/// Drop the leading executable token, if there is one.
pub fn normalize<S: AsRef<str>>(args: &[S]) -> &[S] {
    match args.split_first() {
        Some((first, rest)) if is_executable_token(first.as_ref()) => rest,
        _ => args,
    }
}

/// Whether `token` names the invoking executable.
fn is_executable_token(token: &str) -> bool {
    if token.starts_with(FLAG_PREFIX) {
        return false;
    }

    let file_name = token
        .rsplit(|c| c == '/' || c == '\\')
        .next()
        .unwrap_or(token)
        .to_lowercase();

    file_name.ends_with(EXE_SUFFIX) || file_name == PROGRAM_NAME
}
