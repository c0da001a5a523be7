//! Bulk retrieval of the daemon's configured networks.

use std::collections::HashMap;

use sta_protocol::{NetworkProfile, ID_STRING_KEY_CONFIG_KEY};
use sta_runtime::{Error, Result};

use crate::hal::StaIfaceHal;

/// Result of a bulk network load: profiles keyed by identity key, and the
/// per-network extras maps keyed by the daemon's network id.
#[derive(Debug, Default)]
pub struct LoadedNetworks {
    pub configs: HashMap<String, NetworkProfile>,
    pub extras: HashMap<i32, HashMap<String, String>>,
}

impl StaIfaceHal {
    /// Loads every network configured on the daemon.
    ///
    /// Entries that fail to materialize are skipped rather than failing the
    /// whole load. When two entries share an identity key the one with the
    /// higher daemon id wins and the older entry is deleted remotely.
    pub fn load_networks(&self) -> Result<LoadedNetworks> {
        let _op = self.inner.controller.lock();
        let iface = self.inner.sta_iface()?;

        let mut ids = iface.list_networks().map_err(|error| {
            tracing::error!(%error, "failed to list configured networks");
            Error::Enumeration
        })?;
        // Ascending order makes the duplicate rule deterministic: later
        // (higher) ids replace earlier ones.
        ids.sort_unstable();

        let mut loaded = LoadedNetworks::default();
        for id in ids {
            let handle = match iface.get_network(id) {
                Ok(handle) => handle,
                Err(error) => {
                    tracing::warn!(%error, id, "skipping network, handle unavailable");
                    continue;
                }
            };
            let (mut profile, entry_extras) = match handle.load() {
                Ok(loaded) => loaded,
                Err(error) => {
                    tracing::warn!(%error, id, "skipping network, load failed");
                    continue;
                }
            };
            let Some(key) = entry_extras.get(ID_STRING_KEY_CONFIG_KEY).cloned() else {
                tracing::warn!(id, "skipping network, no identity key in extras");
                continue;
            };

            profile.network_id = id;
            if let Some(duplicate) = loaded.configs.insert(key.clone(), profile) {
                tracing::warn!(
                    key,
                    kept = id,
                    dropped = duplicate.network_id,
                    "duplicate network, removing the older entry"
                );
                if let Err(error) = iface.remove_network(duplicate.network_id) {
                    tracing::warn!(%error, id = duplicate.network_id, "failed to remove duplicate");
                }
                loaded.extras.remove(&duplicate.network_id);
            }
            loaded.extras.insert(id, entry_extras);
        }
        Ok(loaded)
    }

    /// Removes every network configured on the daemon. Success reflects the
    /// enumeration only; individual deletions that fail are logged and the
    /// remaining ids are still attempted.
    pub fn remove_all_networks(&self) -> Result<()> {
        let _op = self.inner.controller.lock();
        let iface = self.inner.sta_iface()?;

        let ids = iface.list_networks().map_err(|error| {
            tracing::error!(%error, "failed to list configured networks");
            Error::Enumeration
        })?;
        for id in ids {
            if let Err(error) = iface.remove_network(id) {
                tracing::warn!(%error, id, "failed to remove network");
            }
        }
        // A removal also invalidates the current-network binding.
        self.inner.session.lock().current = None;
        Ok(())
    }
}
