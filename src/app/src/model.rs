use serde::{Deserialize, Serialize};

use crate::types::*;

/// Application Model - the complete state
/// Also serves as the ViewModel
#[derive(Debug, Default, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Model {
    /// Incremented on every mount, tags responses to asynchronous requests
    pub mount: u64,

    // Permission state
    pub permission: PermissionState,

    // Submission guard
    pub submission: SubmissionState,

    // UI state
    /// Persistent error text, sticky until the next mount
    pub error_message: Option<String>,
    /// Whether the shell can show transient notices (toasts)
    pub transient_notices: bool,
}

impl Model {
    /// Fresh state for a newly mounted scanner
    pub fn mounted(mount: u64, transient_notices: bool) -> Self {
        Self {
            mount,
            transient_notices,
            ..Default::default()
        }
    }

    /// Whether the scanner collaborator may deliver scans
    pub fn scanning_enabled(&self) -> bool {
        matches!(self.permission, PermissionState::Granted)
    }

    /// Set the persistent error message
    pub fn set_error(&mut self, error: impl Into<String>) {
        self.error_message = Some(error.into());
    }

    /// Set an error message and return a render command
    pub fn set_error_and_render(
        &mut self,
        error: impl Into<String>,
    ) -> crux_core::Command<crate::Effect, crate::events::Event> {
        self.set_error(error);
        crux_core::render::render()
    }
}
