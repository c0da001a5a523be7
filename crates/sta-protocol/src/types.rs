//! Core enums shared across the wire.

use serde::{Deserialize, Serialize};

/// Interface operating mode as reported by the daemon root service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IfaceType {
    /// Station (client) mode.
    Sta,
    /// Peer-to-peer mode.
    P2p,
}

/// One entry in the daemon's interface enumeration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IfaceInfo {
    /// Operating mode of the interface.
    pub kind: IfaceType,
    /// Kernel interface name (e.g. "wlan0").
    pub name: String,
}

/// Daemon debug verbosity, passed through to the root service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DebugLevel {
    Excessive,
    MsgDump,
    Debug,
    Info,
    Warning,
    Error,
}

/// Coarse connection state as reported by the daemon in state-changed
/// notifications.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StaState {
    Disconnected,
    IfaceDisabled,
    Inactive,
    Scanning,
    Authenticating,
    Associating,
    Associated,
    FourwayHandshake,
    GroupHandshake,
    Completed,
}

/// Domain connection state carried by normalized state-change events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConnectionState {
    Disconnected,
    InterfaceDisabled,
    Inactive,
    Scanning,
    Authenticating,
    Associating,
    Associated,
    FourWayHandshake,
    GroupHandshake,
    Completed,
}

impl From<StaState> for ConnectionState {
    fn from(state: StaState) -> Self {
        match state {
            StaState::Disconnected => ConnectionState::Disconnected,
            StaState::IfaceDisabled => ConnectionState::InterfaceDisabled,
            StaState::Inactive => ConnectionState::Inactive,
            StaState::Scanning => ConnectionState::Scanning,
            StaState::Authenticating => ConnectionState::Authenticating,
            StaState::Associating => ConnectionState::Associating,
            StaState::Associated => ConnectionState::Associated,
            StaState::FourwayHandshake => ConnectionState::FourWayHandshake,
            StaState::GroupHandshake => ConnectionState::GroupHandshake,
            StaState::Completed => ConnectionState::Completed,
        }
    }
}
