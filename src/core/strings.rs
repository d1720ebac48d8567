//! core::strings
//!
//! String helpers shared by argument validation and adapter filtering.

/// Returns true if the string is empty or consists only of whitespace.
///
/// # Example
///
/// ```
/// use adapman::core::strings::is_blank;
///
/// assert!(is_blank(""));
/// assert!(is_blank(" \t"));
/// assert!(!is_blank("home"));
/// ```
pub fn is_blank(s: &str) -> bool {
    s.trim().is_empty()
}

/// Compare two strings, ignoring case.
pub fn eq_ignore_case(a: &str, b: &str) -> bool {
    if a.is_ascii() && b.is_ascii() {
        return a.eq_ignore_ascii_case(b);
    }
    a.to_lowercase() == b.to_lowercase()
}

/// Returns true if any element of `items` contains `needle`, ignoring case.
///
/// An empty collection never contains anything.
pub fn contains_no_case<S: AsRef<str>>(items: &[S], needle: &str) -> bool {
    let needle = needle.to_lowercase();
    items
        .iter()
        .any(|item| item.as_ref().to_lowercase().contains(&needle))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_detection() {
        assert!(is_blank(""));
        assert!(is_blank("   "));
        assert!(is_blank("\n\t "));
        assert!(!is_blank(" x "));
    }

    #[test]
    fn eq_ignore_case_ascii_and_unicode() {
        assert!(eq_ignore_case("-DA", "-da"));
        assert!(eq_ignore_case("-Cw:SSID", "-cw:ssid"));
        assert!(eq_ignore_case("ÄRGER", "ärger"));
        assert!(!eq_ignore_case("-da", "-ea"));
    }

    #[test]
    fn contains_no_case_matches_substrings() {
        let items = ["Intel(R) Wi-Fi 6", "Realtek PCIe GbE"];
        assert!(contains_no_case(&items, "wi-fi"));
        assert!(contains_no_case(&items, "REALTEK"));
        assert!(!contains_no_case(&items, "broadcom"));
    }

    #[test]
    fn contains_no_case_empty_collection() {
        let items: [&str; 0] = [];
        assert!(!contains_no_case(&items, ""));
    }
}
