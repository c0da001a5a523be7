//! Traits for the remote endpoints this manager drives.
//!
//! Three independently-failing endpoints are involved in a session: the
//! service registry, the daemon root service, and the bound station
//! interface. Each exposes a death watch; the session manager wires all
//! three to a single reducer that collapses any death into a session reset.
//!
//! Calls that the underlying IPC encodes as one-shot callbacks (list, get,
//! add) appear here as plain blocking calls returning `Result`; the
//! transport adapter bridges delivery.

use std::collections::HashMap;
use std::sync::Arc;

use sta_protocol::{AnqpData, DebugLevel, Hs20AnqpData, IfaceInfo, IfaceType, NetworkProfile,
    StaState};

use crate::error::Result;

/// Callback invoked when a watched remote endpoint dies.
pub type DeathRecipient = Box<dyn Fn() + Send + Sync>;

/// Callback invoked when a registered service becomes present, carrying the
/// service name.
pub type PresenceObserver = Box<dyn Fn(&str) + Send + Sync>;

/// The three watched remote endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Registry,
    Supplicant,
    StaIface,
}

/// Locator for the two root endpoints. Implemented by the transport
/// bootstrap; the station interface is obtained through the daemon root.
pub trait EndpointProvider: Send + Sync {
    fn registry(&self) -> Result<Arc<dyn RegistryProxy>>;
    fn supplicant(&self) -> Result<Arc<dyn SupplicantProxy>>;
}

/// The service registry: death watch plus daemon-presence notifications.
pub trait RegistryProxy: Send + Sync {
    fn link_to_death(&self, recipient: DeathRecipient) -> Result<()>;

    /// Registers `observer` to fire whenever `service` (re)registers with
    /// the registry. The observer may fire more than once across daemon
    /// restarts.
    fn register_for_notifications(&self, service: &str, observer: PresenceObserver) -> Result<()>;
}

/// The daemon root service.
pub trait SupplicantProxy: Send + Sync {
    fn link_to_death(&self, recipient: DeathRecipient) -> Result<()>;

    fn list_interfaces(&self) -> Result<Vec<IfaceInfo>>;

    /// Binds the given interface entry as a station interface. `Ok(None)`
    /// means the daemon answered but produced no proxy.
    fn get_sta_interface(&self, info: &IfaceInfo) -> Result<Option<Arc<dyn StaIfaceProxy>>>;

    fn set_debug_params(
        &self,
        level: DebugLevel,
        show_timestamps: bool,
        show_keys: bool,
    ) -> Result<()>;

    fn set_concurrency_priority(&self, kind: IfaceType) -> Result<()>;
}

/// The bound station-mode interface.
pub trait StaIfaceProxy: Send + Sync {
    fn link_to_death(&self, recipient: DeathRecipient) -> Result<()>;

    /// Registers the one notification sink for this interface. Re-registered
    /// on every successful bring-up.
    fn register_callback(&self, sink: Arc<dyn NotificationSink>) -> Result<()>;

    /// Enumerates the daemon's configured network ids.
    fn list_networks(&self) -> Result<Vec<i32>>;

    fn get_network(&self, id: i32) -> Result<Arc<dyn NetworkHandle>>;

    fn add_network(&self) -> Result<Arc<dyn NetworkHandle>>;

    fn remove_network(&self, id: i32) -> Result<()>;

    fn disconnect(&self) -> Result<()>;

    fn reassociate(&self) -> Result<()>;

    fn set_wps_device_type(&self, device_type: [u8; 8]) -> Result<()>;

    fn set_wps_config_methods(&self, methods: u16) -> Result<()>;

    fn start_wps_registrar(&self, bssid: [u8; 6], pin: &str) -> Result<()>;
}

/// One configured network entry on the daemon. Field encoding/decoding is
/// this collaborator's responsibility, including derivation of the identity
/// key reported under [`sta_protocol::ID_STRING_KEY_CONFIG_KEY`].
pub trait NetworkHandle: Send + Sync {
    /// The daemon's numeric id for this network.
    fn id(&self) -> i32;

    /// Materializes the remote entry into a profile and an extras map.
    fn load(&self) -> Result<(NetworkProfile, HashMap<String, String>)>;

    /// Writes the given profile into the remote entry.
    fn save(&self, profile: &NetworkProfile) -> Result<()>;

    /// Enables the network and signals intent to connect.
    fn select(&self) -> Result<()>;

    fn set_bssid(&self, bssid: &str) -> Result<()>;

    fn send_eap_identity_response(&self, identity: &str) -> Result<()>;

    fn send_eap_sim_gsm_auth_response(&self, params: &str) -> Result<()>;

    fn send_eap_sim_umts_auth_response(&self, params: &str) -> Result<()>;

    fn send_eap_sim_umts_auts_response(&self, params: &str) -> Result<()>;

    fn wps_nfc_configuration_token(&self) -> Result<String>;
}

/// Inbound daemon notifications. Delivered on the transport's callback
/// path, which is not serialized against outbound calls; implementations
/// must be safe to invoke concurrently with any controller operation.
pub trait NotificationSink: Send + Sync {
    fn on_state_changed(&self, state: StaState, bssid: [u8; 6], network_id: i32, ssid: &[u8]);

    fn on_disconnected(&self, bssid: [u8; 6], locally_generated: bool, reason_code: i32);

    fn on_association_rejected(&self, bssid: [u8; 6], status_code: i32);

    fn on_authentication_timeout(&self, bssid: [u8; 6]);

    fn on_eap_failure(&self);

    fn on_wps_event_success(&self);

    fn on_wps_event_fail(&self, bssid: [u8; 6], config_error: u16, error_indication: u16);

    fn on_wps_event_pbc_overlap(&self);

    fn on_anqp_query_done(&self, bssid: [u8; 6], anqp: AnqpData, hs20: Hs20AnqpData);

    fn on_hs20_icon_query_done(&self, bssid: [u8; 6], file_name: &str, data: Vec<u8>);

    fn on_hs20_subscription_remediation(&self, bssid: [u8; 6], osu_method: u8, url: &str);

    fn on_hs20_deauth_imminent_notice(
        &self,
        bssid: [u8; 6],
        reason_code: i32,
        reauth_delay_secs: i32,
        url: &str,
    );
}
