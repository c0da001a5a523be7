//! Wire types for the station supplicant protocol.
//!
//! This crate contains the serde-serializable types exchanged with the
//! station-mode supplicant daemon, plus the byte-level codecs the daemon's
//! conventions require (MAC addresses, SSID encoding, WPS field strings).
//! Types here are pure data - no behavior beyond (de)serialization and
//! codec helpers. The IPC seam and the session manager are built on top of
//! these in `sta-runtime` and `sta-hal`.

pub mod events;
pub mod mac;
pub mod network;
pub mod ssid;
pub mod types;
pub mod wps;

pub use events::*;
pub use network::*;
pub use types::*;

use thiserror::Error;

/// Errors produced by the byte-level codecs in this crate.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodecError {
    /// MAC address string did not parse to six octets.
    #[error("invalid MAC address: {0}")]
    InvalidMac(String),

    /// SSID string was neither quoted UTF-8 nor an even-length hex string.
    #[error("invalid SSID encoding: {0}")]
    InvalidSsid(String),

    /// WPS primary device type string did not match `<cat>-<OUI hex>-<subcat>`.
    #[error("invalid WPS device type: {0}")]
    InvalidWpsDeviceType(String),

    /// Unrecognized WPS config method name.
    #[error("unknown WPS config method: {0}")]
    UnknownWpsConfigMethod(String),
}
