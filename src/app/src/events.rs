use serde::{Deserialize, Serialize};

use crate::commands::permission::PermissionOutput;
use crate::types::ProvisionError;

/// Events that can happen in the app
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub enum Event {
    /// Scanner mounted. Resets all state and starts the permission sequence.
    Initialize { transient_notices: bool },

    // Permission provider responses (internal events, skipped from serialization)
    #[serde(skip)]
    Permission(PermissionEvent),

    Scan(ScanEvent),
}

/// Camera permission sequence, tagged with the mount that asked
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PermissionEvent {
    StatusResponse { mount: u64, output: PermissionOutput },
    RequestResponse { mount: u64, output: PermissionOutput },
}

impl PermissionEvent {
    pub fn mount(&self) -> u64 {
        match self {
            Self::StatusResponse { mount, .. } | Self::RequestResponse { mount, .. } => *mount,
        }
    }
}

/// Credential scanning
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub enum ScanEvent {
    /// Decoded text delivered by the scanner
    Scanned { payload: Option<String> },

    #[serde(skip)]
    SubmissionSettled {
        mount: u64,
        result: Result<(), ProvisionError>,
    },
}
