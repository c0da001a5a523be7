//! Session manager for a station-mode WiFi supplicant daemon.
//!
//! Sits between a device connection manager and the remote daemon's
//! callback-driven IPC surface: it owns the bring-up and teardown of the
//! IPC session, loads and replaces the daemon's network configuration,
//! drives connect and roam sequences, and translates raw daemon
//! notifications into normalized domain events.
//!
//! The entry point is [`StaIfaceHal`], constructed over an
//! [`EndpointProvider`](sta_runtime::EndpointProvider) supplied by the
//! transport layer. Consumers observe the daemon through
//! [`subscribe`](StaIfaceHal::subscribe).

mod connect;
pub mod events;
mod hal;
mod loader;
mod session;
mod translator;

pub use events::{EventBus, EventStream};
pub use hal::{DAEMON_SERVICE_NAME, StaIfaceHal};
pub use loader::LoadedNetworks;
pub use session::SessionState;
