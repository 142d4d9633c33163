use serde::{Deserialize, Serialize};

/// Camera permission verdict
///
/// Starts as `Unknown` at mount and converges exactly once on either
/// `Granted` or `Denied`.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum PermissionState {
    #[default]
    Unknown,
    Granted,
    Denied,
}

impl PermissionState {
    /// Whether the permission sequence already produced a verdict
    pub fn is_settled(&self) -> bool {
        !matches!(self, Self::Unknown)
    }
}

/// Current camera permission status as reported by the provider
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PermissionStatus {
    pub granted: bool,
    pub can_ask_again: bool,
}
