//! Connect and roam control, plus the operations scoped to the
//! currently-bound network.
//!
//! The daemon holds at most one network entry under this manager: every
//! connect replaces whatever entry exists remotely and rebinds the
//! current-network association used for event translation.

use sta_protocol::NetworkProfile;
use sta_runtime::{Error, Result};

use crate::hal::StaIfaceHal;
use crate::session::CurrentNetwork;

impl StaIfaceHal {
    /// Connects to the given network profile under the caller's framework
    /// id. Any previously configured daemon-side entry is removed first;
    /// `disconnect_first` additionally tears down an ongoing connection
    /// before reconfiguring.
    pub fn connect_to_network(
        &self,
        framework_id: i32,
        profile: &NetworkProfile,
        disconnect_first: bool,
    ) -> Result<()> {
        let _op = self.inner.controller.lock();
        self.connect_locked(framework_id, profile, disconnect_first)
    }

    /// Connect body, assuming the controller lock is held.
    fn connect_locked(
        &self,
        framework_id: i32,
        profile: &NetworkProfile,
        disconnect_first: bool,
    ) -> Result<()> {
        let iface = self.inner.sta_iface()?;
        tracing::info!(framework_id, "connecting to network");

        // The old binding is stale as soon as a new connect begins, even if
        // this attempt fails partway.
        self.inner.session.lock().current = None;

        if disconnect_first {
            match iface.disconnect() {
                Ok(()) => {}
                Err(error @ Error::Transport(_)) => return Err(error),
                Err(error) => {
                    tracing::warn!(%error, "disconnect before connect failed, continuing");
                }
            }
        }

        let existing = iface.list_networks().map_err(|error| {
            tracing::error!(%error, "failed to list configured networks");
            Error::Enumeration
        })?;
        if let Some(&stale) = existing.first() {
            if let Err(error) = iface.remove_network(stale) {
                tracing::warn!(%error, id = stale, "failed to remove stale network");
            }
        }

        let handle = iface.add_network().map_err(|error| {
            tracing::error!(%error, "failed to create network entry");
            Error::NetworkCreation
        })?;

        if let Err(error) = handle.save(profile) {
            tracing::error!(%error, "failed to save network profile");
            // Don't leave a half-written entry behind.
            if let Err(cleanup) = iface.remove_network(handle.id()) {
                tracing::warn!(%cleanup, "failed to remove half-written network");
            }
            return Err(error);
        }

        handle.select()?;

        let remote_id = handle.id();
        self.inner.session.lock().current = Some(CurrentNetwork {
            framework_id,
            remote_id,
            handle,
        });
        Ok(())
    }

    /// Roams to the profile's BSSID. When the target is the network we are
    /// already connected to, this is a lightweight BSSID update plus
    /// reassociation; otherwise it degrades to a full connect without a
    /// preceding disconnect.
    pub fn roam_to_network(&self, framework_id: i32, profile: &NetworkProfile) -> Result<()> {
        let _op = self.inner.controller.lock();
        match self.inner.current_network() {
            Some(current) if current.framework_id == framework_id => {
                let iface = self.inner.sta_iface()?;
                let bssid = profile
                    .bssid
                    .as_deref()
                    .ok_or_else(|| Error::Validation("roam target carries no BSSID".to_string()))?;
                tracing::info!(framework_id, bssid, "roaming within current network");
                current.handle.set_bssid(bssid)?;
                iface.reassociate()
            }
            _ => {
                tracing::info!(framework_id, "roam target is a different network, reconnecting");
                self.connect_locked(framework_id, profile, false)
            }
        }
    }

    /// Pins the currently-bound network to a BSSID, or clears the pin with
    /// the wildcard address.
    pub fn set_current_network_bssid(&self, bssid: &str) -> Result<()> {
        let current = self.inner.current_network().ok_or(Error::NoCurrentNetwork)?;
        current.handle.set_bssid(bssid)
    }

    pub fn send_current_network_eap_identity_response(&self, identity: &str) -> Result<()> {
        let current = self.inner.current_network().ok_or(Error::NoCurrentNetwork)?;
        current.handle.send_eap_identity_response(identity)
    }

    pub fn send_current_network_eap_sim_gsm_auth_response(&self, params: &str) -> Result<()> {
        let current = self.inner.current_network().ok_or(Error::NoCurrentNetwork)?;
        current.handle.send_eap_sim_gsm_auth_response(params)
    }

    pub fn send_current_network_eap_sim_umts_auth_response(&self, params: &str) -> Result<()> {
        let current = self.inner.current_network().ok_or(Error::NoCurrentNetwork)?;
        current.handle.send_eap_sim_umts_auth_response(params)
    }

    pub fn send_current_network_eap_sim_umts_auts_response(&self, params: &str) -> Result<()> {
        let current = self.inner.current_network().ok_or(Error::NoCurrentNetwork)?;
        current.handle.send_eap_sim_umts_auts_response(params)
    }

    /// Fetches the WPS NFC configuration token for the currently-bound
    /// network, as a hex string.
    pub fn current_network_wps_nfc_configuration_token(&self) -> Result<String> {
        let current = self.inner.current_network().ok_or(Error::NoCurrentNetwork)?;
        current.handle.wps_nfc_configuration_token()
    }
}
