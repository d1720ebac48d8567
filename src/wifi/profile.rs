//! wifi::profile
//!
//! WLAN profile documents for WPA2-PSK networks.
//!
//! The profile is the XML document Windows accepts through
//! `netsh wlan add profile`. It names the network, carries its SSID in both
//! text and hex form, and stores the pre-shared key as an unprotected
//! passphrase (Windows encrypts it on import).

use super::{require_ssid, WifiError};

/// XML namespace of WLAN profile documents.
pub const WLAN_PROFILE_NAMESPACE: &str = "http://www.microsoft.com/networking/WLAN/profile/v1";

/// A WPA2-PSK / AES profile that connects automatically.
#[derive(Clone, PartialEq, Eq)]
pub struct WlanProfile {
    ssid: String,
    ssid_hex: String,
    key: String,
}

impl WlanProfile {
    /// Build a profile for `ssid` with the pre-shared `key`.
    ///
    /// # Errors
    ///
    /// Returns `WifiError::MissingSsid` if `ssid` is blank.
    pub fn new(ssid: &str, key: &str) -> Result<Self, WifiError> {
        Ok(Self {
            ssid: ssid.to_string(),
            ssid_hex: ssid_to_hex(ssid)?,
            key: key.to_string(),
        })
    }

    /// The network name; also the profile name.
    pub fn ssid(&self) -> &str {
        &self.ssid
    }

    /// Render the profile document.
    pub fn to_xml(&self) -> String {
        let name = escape_xml(&self.ssid);
        format!(
            r#"<?xml version="1.0"?>
<WLANProfile xmlns="{namespace}">
  <name>{name}</name>
  <SSIDConfig>
    <SSID>
      <hex>{hex}</hex>
      <name>{name}</name>
    </SSID>
  </SSIDConfig>
  <connectionType>ESS</connectionType>
  <connectionMode>auto</connectionMode>
  <MSM>
    <security>
      <authEncryption>
        <authentication>WPA2PSK</authentication>
        <encryption>AES</encryption>
        <useOneX>false</useOneX>
      </authEncryption>
      <sharedKey>
        <keyType>passPhrase</keyType>
        <protected>false</protected>
        <keyMaterial>{key}</keyMaterial>
      </sharedKey>
    </security>
  </MSM>
</WLANProfile>
"#,
            namespace = WLAN_PROFILE_NAMESPACE,
            name = name,
            hex = self.ssid_hex,
            key = escape_xml(&self.key),
        )
    }
}

impl std::fmt::Debug for WlanProfile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WlanProfile")
            .field("ssid", &self.ssid)
            .field("ssid_hex", &self.ssid_hex)
            .finish_non_exhaustive()
    }
}

/// Encode an SSID as uppercase hex of its UTF-8 bytes.
///
/// # Example
///
/// ```
/// use adapman::wifi::profile::ssid_to_hex;
///
/// assert_eq!(ssid_to_hex("home").unwrap(), "686F6D65");
/// assert!(ssid_to_hex(" ").is_err());
/// ```
pub fn ssid_to_hex(ssid: &str) -> Result<String, WifiError> {
    require_ssid(ssid, "build a WLAN profile")?;
    Ok(ssid.bytes().map(|b| format!("{:02X}", b)).collect())
}

/// Escape text for use inside an XML element.
fn escape_xml(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
