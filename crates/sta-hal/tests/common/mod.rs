//! Hand-rolled fakes for the remote endpoints, with scriptable failures
//! and call recording.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::Mutex;

use sta_hal::StaIfaceHal;
use sta_protocol::{DebugLevel, IfaceInfo, IfaceType, NetworkProfile};
use sta_runtime::{
    DeathRecipient, EndpointProvider, Error, NetworkHandle, NotificationSink, PresenceObserver,
    RegistryProxy, RemoteStatus, Result, StaIfaceProxy, StatusCode, SupplicantProxy,
};

pub const IFACE_NAME: &str = "wlan0";
pub const BSSID: &str = "fa:45:23:23:12:12";
pub const BSSID_OCTETS: [u8; 6] = [0xfa, 0x45, 0x23, 0x23, 0x12, 0x12];

/// A completed call whose status reports failure, converted the way a
/// transport adapter would at the boundary.
pub fn remote_failure(op: &'static str) -> Error {
    RemoteStatus::failure(StatusCode::FailureUnknown)
        .into_result(op)
        .unwrap_err()
}

pub fn transport_failure() -> Error {
    Error::Transport("peer went away".to_string())
}

/// Endpoint locator backed by the two fakes below.
pub struct FakeEndpoints {
    pub registry: Arc<FakeRegistry>,
    pub supplicant: Arc<FakeSupplicant>,
    pub registry_error: Mutex<Option<Error>>,
    pub supplicant_error: Mutex<Option<Error>>,
}

impl FakeEndpoints {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            registry: Arc::new(FakeRegistry::default()),
            supplicant: Arc::new(FakeSupplicant::new()),
            registry_error: Mutex::new(None),
            supplicant_error: Mutex::new(None),
        })
    }

    pub fn iface(&self) -> &Arc<FakeStaIface> {
        &self.supplicant.iface
    }
}

impl EndpointProvider for FakeEndpoints {
    fn registry(&self) -> Result<Arc<dyn RegistryProxy>> {
        if let Some(error) = self.registry_error.lock().take() {
            return Err(error);
        }
        Ok(self.registry.clone())
    }

    fn supplicant(&self) -> Result<Arc<dyn SupplicantProxy>> {
        if let Some(error) = self.supplicant_error.lock().take() {
            return Err(error);
        }
        Ok(self.supplicant.clone())
    }
}

#[derive(Default)]
pub struct FakeRegistry {
    death: Mutex<Option<DeathRecipient>>,
    observer: Mutex<Option<(String, PresenceObserver)>>,
    pub link_error: Mutex<Option<Error>>,
    pub register_error: Mutex<Option<Error>>,
}

impl FakeRegistry {
    /// Fires the registered presence observer, as the registry does when
    /// the daemon (re)registers.
    pub fn announce(&self) {
        let observer = self.observer.lock();
        let (service, observer) = observer.as_ref().expect("no presence observer registered");
        observer(service);
    }

    pub fn die(&self) {
        let death = self.death.lock();
        let recipient = death.as_ref().expect("no death recipient linked");
        recipient();
    }
}

impl RegistryProxy for FakeRegistry {
    fn link_to_death(&self, recipient: DeathRecipient) -> Result<()> {
        if let Some(error) = self.link_error.lock().take() {
            return Err(error);
        }
        *self.death.lock() = Some(recipient);
        Ok(())
    }

    fn register_for_notifications(&self, service: &str, observer: PresenceObserver) -> Result<()> {
        if let Some(error) = self.register_error.lock().take() {
            return Err(error);
        }
        *self.observer.lock() = Some((service.to_string(), observer));
        Ok(())
    }
}

pub struct FakeSupplicant {
    death: Mutex<Option<DeathRecipient>>,
    pub iface: Arc<FakeStaIface>,
    pub interfaces: Mutex<Vec<IfaceInfo>>,
    pub link_error: Mutex<Option<Error>>,
    pub list_error: Mutex<Option<Error>>,
    pub get_error: Mutex<Option<Error>>,
    pub get_returns_none: Mutex<bool>,
    pub debug_params: Mutex<Option<(DebugLevel, bool, bool)>>,
    pub concurrency_priority: Mutex<Option<IfaceType>>,
}

impl FakeSupplicant {
    pub fn new() -> Self {
        Self {
            death: Mutex::new(None),
            iface: Arc::new(FakeStaIface::default()),
            interfaces: Mutex::new(vec![IfaceInfo {
                kind: IfaceType::Sta,
                name: IFACE_NAME.to_string(),
            }]),
            link_error: Mutex::new(None),
            list_error: Mutex::new(None),
            get_error: Mutex::new(None),
            get_returns_none: Mutex::new(false),
            debug_params: Mutex::new(None),
            concurrency_priority: Mutex::new(None),
        }
    }

    pub fn die(&self) {
        let death = self.death.lock();
        let recipient = death.as_ref().expect("no death recipient linked");
        recipient();
    }
}

impl SupplicantProxy for FakeSupplicant {
    fn link_to_death(&self, recipient: DeathRecipient) -> Result<()> {
        if let Some(error) = self.link_error.lock().take() {
            return Err(error);
        }
        *self.death.lock() = Some(recipient);
        Ok(())
    }

    fn list_interfaces(&self) -> Result<Vec<IfaceInfo>> {
        if let Some(error) = self.list_error.lock().take() {
            return Err(error);
        }
        Ok(self.interfaces.lock().clone())
    }

    fn get_sta_interface(&self, _info: &IfaceInfo) -> Result<Option<Arc<dyn StaIfaceProxy>>> {
        if let Some(error) = self.get_error.lock().take() {
            return Err(error);
        }
        if *self.get_returns_none.lock() {
            return Ok(None);
        }
        Ok(Some(self.iface.clone()))
    }

    fn set_debug_params(
        &self,
        level: DebugLevel,
        show_timestamps: bool,
        show_keys: bool,
    ) -> Result<()> {
        *self.debug_params.lock() = Some((level, show_timestamps, show_keys));
        Ok(())
    }

    fn set_concurrency_priority(&self, kind: IfaceType) -> Result<()> {
        *self.concurrency_priority.lock() = Some(kind);
        Ok(())
    }
}

#[derive(Default)]
pub struct FakeStaIface {
    death: Mutex<Option<DeathRecipient>>,
    sink: Mutex<Option<Arc<dyn NotificationSink>>>,
    pub register_error: Mutex<Option<Error>>,
    pub networks: Mutex<Vec<Arc<FakeNetworkHandle>>>,
    pub next_id: Mutex<i32>,
    pub removed: Mutex<Vec<i32>>,
    pub remove_error_ids: Mutex<Vec<i32>>,
    pub disconnects: Mutex<u32>,
    pub reassociates: Mutex<u32>,
    pub list_error: Mutex<Option<Error>>,
    pub add_error: Mutex<Option<Error>>,
    pub disconnect_error: Mutex<Option<Error>>,
    /// Injected into the next handle created by `add_network`.
    pub add_save_error: Mutex<Option<Error>>,
    pub wps_device_type: Mutex<Option<[u8; 8]>>,
    pub wps_config_methods: Mutex<Option<u16>>,
    pub wps_registrar: Mutex<Option<([u8; 6], String)>>,
}

impl FakeStaIface {
    /// Seeds a pre-existing daemon-side network entry.
    pub fn seed_network(
        &self,
        id: i32,
        profile: NetworkProfile,
        extras: HashMap<String, String>,
    ) -> Arc<FakeNetworkHandle> {
        let handle = Arc::new(FakeNetworkHandle::new(id, profile, extras));
        self.networks.lock().push(handle.clone());
        handle
    }

    /// Seeds an entry whose handle cannot be materialized.
    pub fn seed_unavailable_network(&self, id: i32) {
        let mut handle = FakeNetworkHandle::new(id, NetworkProfile::default(), HashMap::new());
        handle.unavailable = true;
        self.networks.lock().push(Arc::new(handle));
    }

    pub fn sink(&self) -> Arc<dyn NotificationSink> {
        self.sink.lock().clone().expect("no notification sink registered")
    }

    pub fn die(&self) {
        let death = self.death.lock();
        let recipient = death.as_ref().expect("no death recipient linked");
        recipient();
    }

    /// The handle most recently created through `add_network`.
    pub fn last_added(&self) -> Arc<FakeNetworkHandle> {
        self.networks
            .lock()
            .last()
            .cloned()
            .expect("no network was added")
    }
}

impl StaIfaceProxy for FakeStaIface {
    fn link_to_death(&self, recipient: DeathRecipient) -> Result<()> {
        *self.death.lock() = Some(recipient);
        Ok(())
    }

    fn register_callback(&self, sink: Arc<dyn NotificationSink>) -> Result<()> {
        if let Some(error) = self.register_error.lock().take() {
            return Err(error);
        }
        *self.sink.lock() = Some(sink);
        Ok(())
    }

    fn list_networks(&self) -> Result<Vec<i32>> {
        if let Some(error) = self.list_error.lock().take() {
            return Err(error);
        }
        Ok(self.networks.lock().iter().map(|n| n.id).collect())
    }

    fn get_network(&self, id: i32) -> Result<Arc<dyn NetworkHandle>> {
        let networks = self.networks.lock();
        let handle = networks
            .iter()
            .find(|n| n.id == id)
            .ok_or_else(|| remote_failure("getNetwork"))?;
        if handle.unavailable {
            return Err(remote_failure("getNetwork"));
        }
        Ok(handle.clone())
    }

    fn add_network(&self) -> Result<Arc<dyn NetworkHandle>> {
        if let Some(error) = self.add_error.lock().take() {
            return Err(error);
        }
        let mut next_id = self.next_id.lock();
        let handle = Arc::new(FakeNetworkHandle::new(
            *next_id,
            NetworkProfile::default(),
            HashMap::new(),
        ));
        *next_id += 1;
        *handle.save_error.lock() = self.add_save_error.lock().take();
        self.networks.lock().push(handle.clone());
        Ok(handle)
    }

    fn remove_network(&self, id: i32) -> Result<()> {
        self.removed.lock().push(id);
        if self.remove_error_ids.lock().contains(&id) {
            return Err(remote_failure("removeNetwork"));
        }
        self.networks.lock().retain(|n| n.id != id);
        Ok(())
    }

    fn disconnect(&self) -> Result<()> {
        *self.disconnects.lock() += 1;
        if let Some(error) = self.disconnect_error.lock().take() {
            return Err(error);
        }
        Ok(())
    }

    fn reassociate(&self) -> Result<()> {
        *self.reassociates.lock() += 1;
        Ok(())
    }

    fn set_wps_device_type(&self, device_type: [u8; 8]) -> Result<()> {
        *self.wps_device_type.lock() = Some(device_type);
        Ok(())
    }

    fn set_wps_config_methods(&self, methods: u16) -> Result<()> {
        *self.wps_config_methods.lock() = Some(methods);
        Ok(())
    }

    fn start_wps_registrar(&self, bssid: [u8; 6], pin: &str) -> Result<()> {
        *self.wps_registrar.lock() = Some((bssid, pin.to_string()));
        Ok(())
    }
}

pub struct FakeNetworkHandle {
    pub id: i32,
    pub unavailable: bool,
    pub profile: Mutex<NetworkProfile>,
    pub extras: Mutex<HashMap<String, String>>,
    pub saved: Mutex<Option<NetworkProfile>>,
    pub selects: Mutex<u32>,
    pub bssid_set: Mutex<Option<String>>,
    pub load_error: Mutex<Option<Error>>,
    pub save_error: Mutex<Option<Error>>,
    pub eap_identity: Mutex<Option<String>>,
    pub eap_gsm_auth: Mutex<Option<String>>,
    pub eap_umts_auth: Mutex<Option<String>>,
    pub eap_umts_auts: Mutex<Option<String>>,
    pub nfc_token: Mutex<String>,
}

impl FakeNetworkHandle {
    pub fn new(id: i32, profile: NetworkProfile, extras: HashMap<String, String>) -> Self {
        Self {
            id,
            unavailable: false,
            profile: Mutex::new(profile),
            extras: Mutex::new(extras),
            saved: Mutex::new(None),
            selects: Mutex::new(0),
            bssid_set: Mutex::new(None),
            load_error: Mutex::new(None),
            save_error: Mutex::new(None),
            eap_identity: Mutex::new(None),
            eap_gsm_auth: Mutex::new(None),
            eap_umts_auth: Mutex::new(None),
            eap_umts_auts: Mutex::new(None),
            nfc_token: Mutex::new(String::new()),
        }
    }
}

impl NetworkHandle for FakeNetworkHandle {
    fn id(&self) -> i32 {
        self.id
    }

    fn load(&self) -> Result<(NetworkProfile, HashMap<String, String>)> {
        if let Some(error) = self.load_error.lock().take() {
            return Err(error);
        }
        Ok((self.profile.lock().clone(), self.extras.lock().clone()))
    }

    fn save(&self, profile: &NetworkProfile) -> Result<()> {
        if let Some(error) = self.save_error.lock().take() {
            return Err(error);
        }
        *self.saved.lock() = Some(profile.clone());
        *self.profile.lock() = profile.clone();
        Ok(())
    }

    fn select(&self) -> Result<()> {
        *self.selects.lock() += 1;
        Ok(())
    }

    fn set_bssid(&self, bssid: &str) -> Result<()> {
        *self.bssid_set.lock() = Some(bssid.to_string());
        Ok(())
    }

    fn send_eap_identity_response(&self, identity: &str) -> Result<()> {
        *self.eap_identity.lock() = Some(identity.to_string());
        Ok(())
    }

    fn send_eap_sim_gsm_auth_response(&self, params: &str) -> Result<()> {
        *self.eap_gsm_auth.lock() = Some(params.to_string());
        Ok(())
    }

    fn send_eap_sim_umts_auth_response(&self, params: &str) -> Result<()> {
        *self.eap_umts_auth.lock() = Some(params.to_string());
        Ok(())
    }

    fn send_eap_sim_umts_auts_response(&self, params: &str) -> Result<()> {
        *self.eap_umts_auts.lock() = Some(params.to_string());
        Ok(())
    }

    fn wps_nfc_configuration_token(&self) -> Result<String> {
        Ok(self.nfc_token.lock().clone())
    }
}

/// A manager wired to fresh fakes.
pub struct Harness {
    pub endpoints: Arc<FakeEndpoints>,
    pub hal: StaIfaceHal,
}

impl Harness {
    pub fn new() -> Self {
        let endpoints = FakeEndpoints::new();
        let hal = StaIfaceHal::new(endpoints.clone());
        Self { endpoints, hal }
    }

    /// Runs the full bring-up to the ready state.
    pub fn bring_up(&self) {
        self.hal.initialize().expect("initialize failed");
        self.endpoints.registry.announce();
        assert!(self.hal.is_ready(), "session did not become ready");
    }

    pub fn iface(&self) -> &Arc<FakeStaIface> {
        self.endpoints.iface()
    }

    /// Profile helper in the daemon's SSID convention.
    pub fn profile(ssid: &str) -> NetworkProfile {
        NetworkProfile {
            ssid: format!("\"{ssid}\""),
            ..Default::default()
        }
    }
}
