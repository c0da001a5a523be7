//! Translation of raw daemon notifications into normalized domain events.
//!
//! One translator instance exists per successful bring-up; the interface
//! name it stamps onto every event is fixed at construction. The translator
//! holds the session manager weakly so a dropped manager silently detaches
//! the daemon's callback path instead of keeping it alive.

use std::sync::Weak;

use sta_protocol::wps::{config_error, error_indication};
use sta_protocol::{
    AnqpBundle, AnqpData, AuthFailureReason, ConnectionState, Hs20AnqpData, IconEvent, StaEvent,
    StaState, WnmKind, WnmNotice, mac,
};
use sta_runtime::NotificationSink;

use crate::hal::HalInner;

/// Deauth-imminent reason code meaning the notice applies to the whole ESS.
const DEAUTH_REASON_ESS: i32 = 1;

pub(crate) struct EventTranslator {
    inner: Weak<HalInner>,
    iface: String,
}

impl EventTranslator {
    pub(crate) fn new(inner: Weak<HalInner>, iface: String) -> Self {
        Self { inner, iface }
    }

    fn iface(&self) -> String {
        self.iface.clone()
    }
}

impl NotificationSink for EventTranslator {
    fn on_state_changed(&self, state: StaState, bssid: [u8; 6], network_id: i32, ssid: &[u8]) {
        let Some(inner) = self.inner.upgrade() else {
            return;
        };
        let (network_id, ssid) = inner.translate_network_id(network_id, ssid);
        let bssid = mac::format(&bssid);
        let state = ConnectionState::from(state);
        tracing::debug!(iface = %self.iface, ?state, network_id, "supplicant state change");
        inner.bus.emit(StaEvent::StateChanged {
            iface: self.iface(),
            network_id,
            ssid,
            bssid: bssid.clone(),
            state,
        });
        match state {
            ConnectionState::Associated => inner.bus.emit(StaEvent::AssociationSuccess {
                iface: self.iface(),
                bssid,
            }),
            ConnectionState::Completed => inner.bus.emit(StaEvent::NetworkConnection {
                iface: self.iface(),
                network_id,
                bssid,
            }),
            _ => {}
        }
    }

    fn on_disconnected(&self, bssid: [u8; 6], locally_generated: bool, reason_code: i32) {
        let Some(inner) = self.inner.upgrade() else {
            return;
        };
        inner.bus.emit(StaEvent::NetworkDisconnection {
            iface: self.iface(),
            locally_generated: i32::from(locally_generated),
            reason_code,
            bssid: mac::format(&bssid),
        });
    }

    fn on_association_rejected(&self, bssid: [u8; 6], status_code: i32) {
        let Some(inner) = self.inner.upgrade() else {
            return;
        };
        inner.bus.emit(StaEvent::AssociationRejection {
            iface: self.iface(),
            status_code,
            bssid: mac::format(&bssid),
        });
    }

    fn on_authentication_timeout(&self, _bssid: [u8; 6]) {
        let Some(inner) = self.inner.upgrade() else {
            return;
        };
        inner.bus.emit(StaEvent::AuthenticationFailure {
            iface: self.iface(),
            reason: AuthFailureReason::Timeout,
        });
    }

    fn on_eap_failure(&self) {
        let Some(inner) = self.inner.upgrade() else {
            return;
        };
        inner.bus.emit(StaEvent::AuthenticationFailure {
            iface: self.iface(),
            reason: AuthFailureReason::EapFailure,
        });
    }

    fn on_wps_event_success(&self) {
        let Some(inner) = self.inner.upgrade() else {
            return;
        };
        inner.bus.emit(StaEvent::WpsSuccess { iface: self.iface() });
    }

    fn on_wps_event_fail(&self, bssid: [u8; 6], config_err: u16, error_ind: u16) {
        let Some(inner) = self.inner.upgrade() else {
            return;
        };
        tracing::debug!(
            iface = %self.iface,
            bssid = %mac::format(&bssid),
            config_err,
            error_ind,
            "WPS failure"
        );
        // A message timeout with no concrete error indication is reported as
        // a timeout, not a failure.
        if config_err == config_error::MSG_TIMEOUT && error_ind == error_indication::NO_ERROR {
            inner.bus.emit(StaEvent::WpsTimeout { iface: self.iface() });
        } else {
            inner.bus.emit(StaEvent::WpsFail {
                iface: self.iface(),
                config_error: i32::from(config_err),
                error_indication: i32::from(error_ind),
            });
        }
    }

    fn on_wps_event_pbc_overlap(&self) {
        let Some(inner) = self.inner.upgrade() else {
            return;
        };
        inner.bus.emit(StaEvent::WpsOverlap { iface: self.iface() });
    }

    fn on_anqp_query_done(&self, bssid: [u8; 6], anqp: AnqpData, hs20: Hs20AnqpData) {
        let Some(inner) = self.inner.upgrade() else {
            return;
        };
        inner.bus.emit(StaEvent::AnqpDone {
            iface: self.iface(),
            bundle: AnqpBundle {
                bssid: mac::to_u64(&bssid),
                anqp,
                hs20,
            },
        });
    }

    fn on_hs20_icon_query_done(&self, bssid: [u8; 6], file_name: &str, data: Vec<u8>) {
        let Some(inner) = self.inner.upgrade() else {
            return;
        };
        inner.bus.emit(StaEvent::IconDone {
            iface: self.iface(),
            icon: IconEvent {
                bssid: mac::to_u64(&bssid),
                file_name: file_name.to_string(),
                data,
            },
        });
    }

    fn on_hs20_subscription_remediation(&self, bssid: [u8; 6], osu_method: u8, url: &str) {
        let Some(inner) = self.inner.upgrade() else {
            return;
        };
        inner.bus.emit(StaEvent::Wnm {
            iface: self.iface(),
            notice: WnmNotice {
                bssid: mac::to_u64(&bssid),
                url: url.to_string(),
                kind: WnmKind::SubscriptionRemediation { osu_method },
            },
        });
    }

    fn on_hs20_deauth_imminent_notice(
        &self,
        bssid: [u8; 6],
        reason_code: i32,
        reauth_delay_secs: i32,
        url: &str,
    ) {
        let Some(inner) = self.inner.upgrade() else {
            return;
        };
        inner.bus.emit(StaEvent::Wnm {
            iface: self.iface(),
            notice: WnmNotice {
                bssid: mac::to_u64(&bssid),
                url: url.to_string(),
                kind: WnmKind::DeauthImminent {
                    ess: reason_code == DEAUTH_REASON_ESS,
                    reauth_delay_secs,
                },
            },
        });
    }
}
