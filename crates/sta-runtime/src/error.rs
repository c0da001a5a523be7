//! Error types for remote supplicant operations.

use thiserror::Error;

use crate::status::StatusCode;

/// Result type alias for remote supplicant operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur talking to the supplicant daemon.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Operation attempted before the session is established or after it
    /// was lost. Recoverable by re-initializing.
    #[error("supplicant session is not ready")]
    NotReady,

    /// The remote call itself failed (dead peer, marshalling failure).
    #[error("transport error: {0}")]
    Transport(String),

    /// The remote call completed but the daemon returned a failure status.
    #[error("{op} failed with status {code:?}")]
    RemoteStatus { op: &'static str, code: StatusCode },

    /// The daemon failed to enumerate its configured networks.
    #[error("network enumeration failed")]
    Enumeration,

    /// The daemon refused to create a new network entry.
    #[error("network creation failed")]
    NetworkCreation,

    /// The daemon rejected registration of the notification sink.
    #[error("callback registration rejected")]
    CallbackRegistration,

    /// The daemon reported no interfaces at all.
    #[error("no interfaces found")]
    NoInterfaces,

    /// No station-mode interface was available or its proxy could not be
    /// obtained.
    #[error("station interface unavailable")]
    InterfaceUnavailable,

    /// A per-connection operation was attempted with no network bound.
    #[error("no current network")]
    NoCurrentNetwork,

    /// Malformed caller input; no remote call was issued.
    #[error("invalid argument: {0}")]
    Validation(String),
}

impl Error {
    /// Returns true for transport-level failures.
    pub fn is_transport(&self) -> bool {
        matches!(self, Error::Transport(_))
    }

    /// Returns true when the operation failed because the session is not
    /// established.
    pub fn is_not_ready(&self) -> bool {
        matches!(self, Error::NotReady)
    }

    /// Returns true for caller-input validation failures.
    pub fn is_validation(&self) -> bool {
        matches!(self, Error::Validation(_))
    }
}
