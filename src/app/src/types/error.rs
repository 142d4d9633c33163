use thiserror::Error;

use super::credentials::SettingKey;

/// Failures of the provisioning flow
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ProvisionError {
    #[error("camera permission unavailable")]
    PermissionUnavailable,

    #[error("invalid payload: {0}")]
    InvalidPayload(String),

    #[error("failed to store {key}: {message}")]
    PersistenceFailure { key: SettingKey, message: String },
}
