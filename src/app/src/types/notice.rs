pub const PERMISSION_DENIED_MESSAGE: &str = "Please grant camera permission to scan.";
pub const INVALID_CODE_TRANSIENT_MESSAGE: &str = "Invalid QR Code";
pub const INVALID_CODE_PERSISTENT_MESSAGE: &str = "Invalid QR scanned!";
pub const SCAN_COMPLETE_MESSAGE: &str = "Scan complete. Logging in..";
pub const LOGGED_IN_MESSAGE: &str = "Logged in successfully";

/// How a notice is presented to the user
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    /// Short-lived toast, rendered by the shell
    Transient,
    /// On-screen text kept in the view model
    Persistent,
}

/// A user-facing notice
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    pub fn transient(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Transient,
            message: message.into(),
        }
    }

    pub fn persistent(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Persistent,
            message: message.into(),
        }
    }

    /// Notice for a payload that could not be turned into credentials.
    ///
    /// Platforms offering transient notices get a toast, all others get
    /// the persistent error text.
    pub fn invalid_code(transient_available: bool) -> Self {
        if transient_available {
            Self::transient(INVALID_CODE_TRANSIENT_MESSAGE)
        } else {
            Self::persistent(INVALID_CODE_PERSISTENT_MESSAGE)
        }
    }
}
