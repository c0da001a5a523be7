//! Daemon status vocabulary.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Status codes returned by daemon calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusCode {
    Success,
    FailureUnknown,
    FailureArgsInvalid,
    FailureIfaceInvalid,
    FailureIfaceUnknown,
    FailureNetworkInvalid,
    FailureNetworkUnknown,
}

/// Status payload attached to every completed daemon call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteStatus {
    pub code: StatusCode,
    #[serde(default)]
    pub debug_message: String,
}

impl RemoteStatus {
    pub fn success() -> Self {
        Self {
            code: StatusCode::Success,
            debug_message: String::new(),
        }
    }

    pub fn failure(code: StatusCode) -> Self {
        Self {
            code,
            debug_message: String::new(),
        }
    }

    pub fn is_success(&self) -> bool {
        self.code == StatusCode::Success
    }

    /// Converts a completed call's status into a `Result`, tagging failures
    /// with the operation name. Transport adapters use this at the boundary
    /// so callers never see raw status codes on the success path.
    pub fn into_result(self, op: &'static str) -> Result<()> {
        if self.is_success() {
            Ok(())
        } else {
            Err(Error::RemoteStatus {
                op,
                code: self.code,
            })
        }
    }
}
