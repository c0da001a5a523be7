//! Normalized domain events and the vendor-payload envelopes they carry.
//!
//! The session manager translates raw daemon notifications into exactly one
//! of these events per notification (state changes additionally fan out an
//! association-success or network-connected event). MAC addresses appear
//! both as colon-delimited strings and, for the ANQP/HS2.0 family, as
//! big-endian integers; the disconnection event carries its
//! locally-generated flag as an integer 1/0 for schema compatibility.

use serde::{Deserialize, Serialize};

use crate::types::ConnectionState;

/// Reason attached to authentication-failure events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuthFailureReason {
    Timeout,
    EapFailure,
}

/// Raw ANQP element payloads, opaque to this crate.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnqpData {
    pub venue_name: Vec<u8>,
    pub roaming_consortium: Vec<u8>,
    pub ip_addr_type_availability: Vec<u8>,
    pub nai_realm: Vec<u8>,
    pub anqp_3gpp_cellular_network: Vec<u8>,
    pub domain_name: Vec<u8>,
}

/// Raw Hotspot 2.0 ANQP element payloads, opaque to this crate.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hs20AnqpData {
    pub operator_friendly_name: Vec<u8>,
    pub wan_metrics: Vec<u8>,
    pub connection_capability: Vec<u8>,
    pub osu_providers_list: Vec<u8>,
}

/// Envelope for a completed ANQP query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnqpBundle {
    /// Responding BSSID as a big-endian integer.
    pub bssid: u64,
    pub anqp: AnqpData,
    pub hs20: Hs20AnqpData,
}

/// Envelope for a completed Hotspot 2.0 icon query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IconEvent {
    /// Responding BSSID as a big-endian integer.
    pub bssid: u64,
    pub file_name: String,
    pub data: Vec<u8>,
}

/// WNM / Hotspot 2.0 management notice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WnmNotice {
    /// Originating BSSID as a big-endian integer.
    pub bssid: u64,
    pub url: String,
    pub kind: WnmKind,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum WnmKind {
    SubscriptionRemediation { osu_method: u8 },
    DeauthImminent { ess: bool, reauth_delay_secs: i32 },
}

/// Normalized domain events emitted by the session manager.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum StaEvent {
    StateChanged {
        iface: String,
        network_id: i32,
        ssid: String,
        bssid: String,
        state: ConnectionState,
    },
    NetworkConnection {
        iface: String,
        network_id: i32,
        bssid: String,
    },
    NetworkDisconnection {
        iface: String,
        /// 1 when the daemon initiated the disconnect locally, 0 otherwise.
        locally_generated: i32,
        reason_code: i32,
        bssid: String,
    },
    AssociationRejection {
        iface: String,
        status_code: i32,
        bssid: String,
    },
    AssociationSuccess {
        iface: String,
        bssid: String,
    },
    AuthenticationFailure {
        iface: String,
        reason: AuthFailureReason,
    },
    WpsSuccess {
        iface: String,
    },
    WpsFail {
        iface: String,
        config_error: i32,
        error_indication: i32,
    },
    WpsTimeout {
        iface: String,
    },
    WpsOverlap {
        iface: String,
    },
    AnqpDone {
        iface: String,
        bundle: AnqpBundle,
    },
    IconDone {
        iface: String,
        icon: IconEvent,
    },
    Wnm {
        iface: String,
        notice: WnmNotice,
    },
    /// The IPC session to the daemon was lost. The interface name is absent
    /// when the session died before the station interface was identified.
    SupplicantDisconnection {
        iface: Option<String>,
    },
}
