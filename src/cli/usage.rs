//! cli::usage
//!
//! Usage text shown when the command line is invalid.

/// Invocation shapes, also appended to `--help`.
pub const EXAMPLES: &str = "\
ACTIONS:
    -da                                  Disable all network adapters
    -ea                                  Enable all network adapters
    -dw:ssid <SSID>                      Disconnect from the WiFi network <SSID>
    -cw:ssid <SSID> -cw:pwd <PASSWORD>   Connect to the WiFi network <SSID>

Flags are case-insensitive. SSIDs and passwords are used exactly as given.

EXAMPLES:
    adapman -da
    adapman -cw:ssid \"Home Network\" -cw:pwd \"correct horse\"
    adapman --dry-run -ea";

/// Full usage message.
pub fn usage() -> String {
    format!(
        "Usage: adapman [--config <PATH>] [--debug] [--quiet] [--dry-run] <ACTION>\n\n{}",
        EXAMPLES
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lists_every_action() {
        let text = usage();
        for flag in ["-da", "-ea", "-dw:ssid", "-cw:ssid", "-cw:pwd"] {
            assert!(text.contains(flag), "usage is missing {flag}");
        }
        assert!(text.starts_with("Usage: adapman"));
    }
}
