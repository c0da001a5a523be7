//! Network profile payload and the identity-key convention.

use serde::{Deserialize, Serialize};

/// Sentinel for "no associated framework network".
pub const INVALID_NETWORK_ID: i32 = -1;

/// Well-known key under which a network handle reports the profile's
/// identity key in its extras map.
pub const ID_STRING_KEY_CONFIG_KEY: &str = "configKey";

/// IP assignment mode recorded on loaded profiles.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IpAssignment {
    #[default]
    Dhcp,
    Static,
}

/// Proxy configuration recorded on loaded profiles.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProxySettings {
    #[default]
    None,
    Static,
}

/// One network profile as seen by the framework.
///
/// `network_id` is the framework-assigned identifier on connect/roam
/// requests; profiles materialized by [`load`] carry the daemon's remote
/// numeric id in the same field instead.
///
/// [`load`]: crate::network::NetworkProfile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworkProfile {
    pub network_id: i32,
    /// SSID in the daemon's string convention (quoted UTF-8 or hex).
    pub ssid: String,
    /// Target BSSID, set on roam requests.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bssid: Option<String>,
    #[serde(default)]
    pub ip_assignment: IpAssignment,
    #[serde(default)]
    pub proxy_settings: ProxySettings,
}

impl Default for NetworkProfile {
    fn default() -> Self {
        Self {
            network_id: INVALID_NETWORK_ID,
            ssid: String::new(),
            bssid: None,
            ip_assignment: IpAssignment::Dhcp,
            proxy_settings: ProxySettings::None,
        }
    }
}
