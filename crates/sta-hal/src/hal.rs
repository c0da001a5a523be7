//! Session lifecycle manager for the station supplicant daemon.
//!
//! Drives the bring-up sequence (locate registry, wait for daemon presence,
//! enumerate interfaces, bind the station interface, register the
//! notification sink) and tears the session down to uninitialized whenever
//! any of the three watched endpoints dies. Re-initialization after a loss
//! is the caller's responsibility.

use std::sync::Arc;

use parking_lot::Mutex;

use sta_protocol::{DebugLevel, IfaceType, StaEvent, mac, ssid, wps, INVALID_NETWORK_ID};
use sta_runtime::{
    Endpoint, EndpointProvider, Error, NotificationSink, Result, StaIfaceProxy, SupplicantProxy,
};

use crate::events::{EventBus, EventStream};
use crate::session::{CurrentNetwork, Session, SessionState};
use crate::translator::EventTranslator;

/// Registry name under which the daemon announces itself.
pub const DAEMON_SERVICE_NAME: &str = "wifi.supplicant";

/// The supplicant session manager.
///
/// Cheap to clone via the shared inner state; all operations take `&self`.
/// At most one controller operation (load/connect/roam/remove) executes at
/// a time; inbound daemon notifications are translated concurrently and
/// synchronize only on the short-lived session lock.
#[derive(Clone)]
pub struct StaIfaceHal {
    pub(crate) inner: Arc<HalInner>,
}

pub(crate) struct HalInner {
    endpoints: Arc<dyn EndpointProvider>,
    pub(crate) bus: EventBus<StaEvent>,
    pub(crate) session: Mutex<Session>,
    /// Single-flight lock for controller operations. Never held while the
    /// session lock is taken by the notification path.
    pub(crate) controller: Mutex<()>,
}

impl StaIfaceHal {
    /// Creates a manager in the uninitialized state.
    pub fn new(endpoints: Arc<dyn EndpointProvider>) -> Self {
        Self {
            inner: Arc::new(HalInner {
                endpoints,
                bus: EventBus::default(),
                session: Mutex::new(Session::new()),
                controller: Mutex::new(()),
            }),
        }
    }

    /// Subscribes to the normalized domain event stream.
    pub fn subscribe(&self) -> EventStream<StaEvent> {
        self.inner.bus.subscribe()
    }

    /// Begins session bring-up: locates the registry, attaches its death
    /// watch, and registers for daemon-presence notifications. The rest of
    /// the sequence runs when the presence notification fires; readiness is
    /// observable through [`is_ready`](Self::is_ready).
    pub fn initialize(&self) -> Result<()> {
        let _op = self.inner.controller.lock();
        {
            let mut session = self.inner.session.lock();
            session.reset();
            session.state = SessionState::Registering;
        }
        let result = self.register_with_registry();
        if result.is_err() {
            self.inner.session.lock().reset();
        }
        result
    }

    fn register_with_registry(&self) -> Result<()> {
        let registry = self.inner.endpoints.registry()?;

        let weak = Arc::downgrade(&self.inner);
        registry.link_to_death(Box::new(move || {
            if let Some(inner) = weak.upgrade() {
                inner.on_endpoint_death(Endpoint::Registry);
            }
        }))?;

        let weak = Arc::downgrade(&self.inner);
        registry.register_for_notifications(
            DAEMON_SERVICE_NAME,
            Box::new(move |service| {
                if let Some(inner) = weak.upgrade() {
                    inner.on_daemon_registration(service);
                }
            }),
        )?;

        self.inner.session.lock().registry = Some(registry);
        Ok(())
    }

    /// True iff the session is fully established.
    pub fn is_ready(&self) -> bool {
        self.inner.session.lock().is_ready()
    }

    /// Current lifecycle state.
    pub fn state(&self) -> SessionState {
        self.inner.session.lock().state
    }

    /// Sets the daemon's debug verbosity. Timestamps and key material
    /// display stay off.
    pub fn set_log_level(&self, level: DebugLevel) -> Result<()> {
        let supplicant = self.inner.supplicant()?;
        supplicant.set_debug_params(level, false, false)
    }

    /// Gives the station or P2P side priority for concurrent operations.
    pub fn set_concurrency_priority(&self, sta_is_priority: bool) -> Result<()> {
        let supplicant = self.inner.supplicant()?;
        let kind = if sta_is_priority {
            IfaceType::Sta
        } else {
            IfaceType::P2p
        };
        supplicant.set_concurrency_priority(kind)
    }

    /// Sets the WPS primary device type from its string form
    /// (`<category>-<OUI hex>-<subcategory>`).
    pub fn set_wps_device_type(&self, type_str: &str) -> Result<()> {
        let iface = self.inner.sta_iface()?;
        let device_type =
            wps::parse_device_type(type_str).map_err(|e| Error::Validation(e.to_string()))?;
        iface.set_wps_device_type(device_type)
    }

    /// Sets the WPS config methods from a space-separated list of method
    /// names.
    pub fn set_wps_config_methods(&self, methods: &str) -> Result<()> {
        let iface = self.inner.sta_iface()?;
        let mask = wps::parse_config_methods(methods).map_err(|e| Error::Validation(e.to_string()))?;
        iface.set_wps_config_methods(mask)
    }

    /// Starts a WPS registrar session for the given BSSID and pin.
    pub fn start_wps_registrar(&self, bssid: &str, pin: &str) -> Result<()> {
        let iface = self.inner.sta_iface()?;
        if pin.is_empty() {
            return Err(Error::Validation("WPS pin must not be empty".to_string()));
        }
        let octets = mac::parse(bssid).map_err(|e| Error::Validation(e.to_string()))?;
        iface.start_wps_registrar(octets, pin)
    }
}

impl HalInner {
    /// Continues bring-up once the registry reports the daemon present.
    /// Runs on the registry's notification path, so it does not take the
    /// controller lock; the session state check keeps stale notifications
    /// harmless.
    pub(crate) fn on_daemon_registration(self: &Arc<Self>, service: &str) {
        tracing::info!(service, "daemon present, binding station interface");
        {
            let mut session = self.session.lock();
            if session.state != SessionState::Registering {
                tracing::warn!(state = ?session.state, "ignoring stale presence notification");
                return;
            }
            session.state = SessionState::Binding;
        }
        if let Err(error) = self.bind_station_interface() {
            tracing::error!(%error, "station interface bring-up failed");
            let iface = {
                let mut session = self.session.lock();
                let name = session.iface_name.clone();
                session.reset();
                name
            };
            self.bus.emit(StaEvent::SupplicantDisconnection { iface });
        }
    }

    fn bind_station_interface(self: &Arc<Self>) -> Result<()> {
        let supplicant = self.endpoints.supplicant()?;

        let weak = Arc::downgrade(self);
        supplicant.link_to_death(Box::new(move || {
            if let Some(inner) = weak.upgrade() {
                inner.on_endpoint_death(Endpoint::Supplicant);
            }
        }))?;

        let interfaces = supplicant.list_interfaces()?;
        if interfaces.is_empty() {
            return Err(Error::NoInterfaces);
        }
        let info = interfaces
            .into_iter()
            .find(|entry| entry.kind == IfaceType::Sta)
            .ok_or(Error::InterfaceUnavailable)?;

        let iface = supplicant
            .get_sta_interface(&info)?
            .ok_or(Error::InterfaceUnavailable)?;

        // Interface identity is known from here on; failures below emit a
        // disconnection event tagged with the name.
        {
            let mut session = self.session.lock();
            session.supplicant = Some(supplicant);
            session.iface_name = Some(info.name.clone());
        }

        let weak = Arc::downgrade(self);
        iface.link_to_death(Box::new(move || {
            if let Some(inner) = weak.upgrade() {
                inner.on_endpoint_death(Endpoint::StaIface);
            }
        }))?;

        let sink: Arc<dyn NotificationSink> =
            Arc::new(EventTranslator::new(Arc::downgrade(self), info.name.clone()));
        match iface.register_callback(sink) {
            Ok(()) => {}
            Err(error @ Error::Transport(_)) => return Err(error),
            Err(_) => return Err(Error::CallbackRegistration),
        }

        {
            let mut session = self.session.lock();
            session.sta_iface = Some(iface);
            session.state = SessionState::Ready;
        }
        tracing::info!(iface = %info.name, "supplicant session ready");
        Ok(())
    }

    /// Reducer for the three endpoint death watches: any death collapses
    /// the session back to uninitialized and emits one disconnection event.
    pub(crate) fn on_endpoint_death(&self, endpoint: Endpoint) {
        tracing::warn!(?endpoint, "remote endpoint died, resetting session");
        let iface = {
            let mut session = self.session.lock();
            let name = session.iface_name.clone();
            session.reset();
            name
        };
        self.bus.emit(StaEvent::SupplicantDisconnection { iface });
    }

    pub(crate) fn supplicant(&self) -> Result<Arc<dyn SupplicantProxy>> {
        let session = self.session.lock();
        if !session.is_ready() {
            return Err(Error::NotReady);
        }
        session.supplicant.clone().ok_or(Error::NotReady)
    }

    pub(crate) fn sta_iface(&self) -> Result<Arc<dyn StaIfaceProxy>> {
        let session = self.session.lock();
        if !session.is_ready() {
            return Err(Error::NotReady);
        }
        session.sta_iface.clone().ok_or(Error::NotReady)
    }

    pub(crate) fn current_network(&self) -> Option<CurrentNetwork> {
        self.session.lock().current.clone()
    }

    /// Translates a raw daemon network id into the framework id, decoding
    /// the notification's SSID only when the id matches the currently-bound
    /// network. Anything else maps to the no-network sentinel and an empty
    /// SSID, even if the raw id is valid elsewhere.
    pub(crate) fn translate_network_id(&self, remote_id: i32, ssid_bytes: &[u8]) -> (i32, String) {
        let session = self.session.lock();
        match &session.current {
            Some(current) if current.remote_id == remote_id => {
                (current.framework_id, ssid::from_bytes(ssid_bytes))
            }
            _ => (INVALID_NETWORK_ID, String::new()),
        }
    }
}
