//! Session state for one IPC session to the daemon.

use std::sync::Arc;

use sta_runtime::{NetworkHandle, RegistryProxy, StaIfaceProxy, SupplicantProxy};

/// Lifecycle states of the IPC session.
///
/// Any state can fall back to `Uninitialized` on endpoint death or a
/// bring-up failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Uninitialized,
    Registering,
    Binding,
    Ready,
}

/// The currently-bound network: the framework id the caller connected with
/// and the daemon-side handle created for it.
#[derive(Clone)]
pub(crate) struct CurrentNetwork {
    pub framework_id: i32,
    pub remote_id: i32,
    pub handle: Arc<dyn NetworkHandle>,
}

/// Mutable session state, owned by the lifecycle manager and guarded by a
/// single mutex. Critical sections stay short: remote calls are never made
/// while this lock is held.
pub(crate) struct Session {
    pub state: SessionState,
    pub registry: Option<Arc<dyn RegistryProxy>>,
    pub supplicant: Option<Arc<dyn SupplicantProxy>>,
    pub sta_iface: Option<Arc<dyn StaIfaceProxy>>,
    pub iface_name: Option<String>,
    pub current: Option<CurrentNetwork>,
}

impl Session {
    pub fn new() -> Self {
        Self {
            state: SessionState::Uninitialized,
            registry: None,
            supplicant: None,
            sta_iface: None,
            iface_name: None,
            current: None,
        }
    }

    /// Drops all endpoint handles and the network binding.
    pub fn reset(&mut self) {
        self.state = SessionState::Uninitialized;
        self.registry = None;
        self.supplicant = None;
        self.sta_iface = None;
        self.iface_name = None;
        self.current = None;
    }

    pub fn is_ready(&self) -> bool {
        self.state == SessionState::Ready
    }
}
