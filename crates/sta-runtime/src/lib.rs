//! Runtime seam between the session manager and the supplicant daemon.
//!
//! The daemon is reached through a request/response IPC mechanism whose
//! "return a value via one-shot callback" calls are modeled here as
//! ordinary blocking calls returning [`Result`]; the transport adapter is
//! responsible for bridging any underlying asynchronous delivery. This
//! crate defines:
//!
//! - **Errors**: the failure taxonomy shared by every remote operation
//! - **Status**: the daemon's status-code vocabulary
//! - **Endpoints**: traits for the three remote endpoints (registry, daemon
//!   root, station interface), the per-network handle, and the inbound
//!   notification sink
//!
//! No transport lives here; implementations are supplied by the process
//! bootstrap (or by test fakes).

pub mod endpoints;
pub mod error;
pub mod status;

pub use endpoints::{
    DeathRecipient, Endpoint, EndpointProvider, NetworkHandle, NotificationSink, PresenceObserver,
    RegistryProxy, StaIfaceProxy, SupplicantProxy,
};
pub use error::{Error, Result};
pub use status::{RemoteStatus, StatusCode};
