//! core::validator
//!
//! Structural validation of raw command-line arguments.
//!
//! # Accepted Shapes
//!
//! | Count | Shape                                  |
//! |-------|----------------------------------------|
//! | 1     | `-da` or `-ea`                         |
//! | 2     | `-dw:ssid <SSID>`                      |
//! | 4     | `-cw:ssid <SSID> -cw:pwd <PASSWORD>`   |
//!
//! Flags compare case-insensitively. SSID and password values are never
//! case-folded. An SSID must not be blank; a password may be.
//!
//! The [`Shape`] table is the single source of truth for what is accepted:
//! the parser maps a `Shape`, never the raw flag text, so anything that
//! validates also maps to a command.

use super::strings::{eq_ignore_case, is_blank};

/// Prefix that marks a token as a flag.
pub const FLAG_PREFIX: char = '-';

/// Disable all adapters.
pub const DISABLE_ALL_FLAG: &str = "-da";
/// Enable all adapters.
pub const ENABLE_ALL_FLAG: &str = "-ea";
/// Introduces the SSID to disconnect from.
pub const DISCONNECT_SSID_FLAG: &str = "-dw:ssid";
/// Introduces the SSID to connect to.
pub const CONNECT_SSID_FLAG: &str = "-cw:ssid";
/// Introduces the network key for the connection.
pub const CONNECT_PASSWORD_FLAG: &str = "-cw:pwd";

/// One of the accepted argument shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    /// `-da`
    DisableAll,
    /// `-ea`
    EnableAll,
    /// `-dw:ssid <SSID>`
    DisconnectWifi,
    /// `-cw:ssid <SSID> -cw:pwd <PASSWORD>`
    ConnectWifi,
}

/// Classify an argument list into one of the accepted shapes.
///
/// Returns `None` if the arguments match no shape.
pub fn classify<S: AsRef<str>>(args: &[S]) -> Option<Shape> {
    if !args.iter().any(|a| a.as_ref().starts_with(FLAG_PREFIX)) {
        return None;
    }

    match args {
        [only] => {
            let only = only.as_ref();
            if eq_ignore_case(only, DISABLE_ALL_FLAG) {
                Some(Shape::DisableAll)
            } else if eq_ignore_case(only, ENABLE_ALL_FLAG) {
                Some(Shape::EnableAll)
            } else {
                None
            }
        }
        [flag, ssid]
            if eq_ignore_case(flag.as_ref(), DISCONNECT_SSID_FLAG) && !is_blank(ssid.as_ref()) =>
        {
            Some(Shape::DisconnectWifi)
        }
        // The password itself may be blank.
        [ssid_flag, ssid, pwd_flag, _]
            if eq_ignore_case(ssid_flag.as_ref(), CONNECT_SSID_FLAG)
                && !is_blank(ssid.as_ref())
                && eq_ignore_case(pwd_flag.as_ref(), CONNECT_PASSWORD_FLAG) =>
        {
            Some(Shape::ConnectWifi)
        }
        _ => None,
    }
}

/// Validate the arguments passed on the command line.
///
/// Pure: the result depends only on `args`. Returns false for an empty list,
/// a list with no flag at all, or any list that matches none of the accepted
/// shapes.
///
/// # Example
///
/// ```
/// use adapman::core::validator::is_valid;
///
/// assert!(is_valid(&["-da"]));
/// assert!(is_valid(&["-dw:ssid", "home"]));
/// assert!(!is_valid(&["-dw:ssid", "  "]));
/// assert!(!is_valid::<&str>(&[]));
/// ```
pub fn is_valid<S: AsRef<str>>(args: &[S]) -> bool {
    classify(args).is_some()
}
