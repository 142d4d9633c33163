use crate::config::CameraAccess;
use anyhow::{Result, bail};
use log::debug;
#[cfg(feature = "mock")]
use mockall::automock;
use qr_provision_core::PermissionStatus;
use trait_variant::make;

#[make(Send + Sync)]
#[cfg_attr(feature = "mock", automock)]
pub trait CameraPermissionProvider {
    /// Current permission status, without prompting
    async fn status(&self) -> Result<PermissionStatus>;

    /// Prompt for permission, returning whether it was granted
    async fn request(&self) -> Result<bool>;
}

/// Permission provider answering from a fixed platform policy
#[derive(Clone, Copy, Debug)]
pub struct PolicyPermissionProvider {
    access: CameraAccess,
}

impl PolicyPermissionProvider {
    pub fn new(access: CameraAccess) -> Self {
        Self { access }
    }
}

impl CameraPermissionProvider for PolicyPermissionProvider {
    async fn status(&self) -> Result<PermissionStatus> {
        debug!("status() called with policy {:?}", self.access);

        let status = match self.access {
            CameraAccess::Granted => PermissionStatus {
                granted: true,
                can_ask_again: true,
            },
            CameraAccess::Prompt | CameraAccess::PromptDenied => PermissionStatus {
                granted: false,
                can_ask_again: true,
            },
            CameraAccess::Blocked => PermissionStatus {
                granted: false,
                can_ask_again: false,
            },
        };

        Ok(status)
    }

    async fn request(&self) -> Result<bool> {
        debug!("request() called with policy {:?}", self.access);

        match self.access {
            CameraAccess::Granted | CameraAccess::Prompt => Ok(true),
            CameraAccess::PromptDenied => Ok(false),
            CameraAccess::Blocked => bail!("failed to request camera permission: blocked"),
        }
    }
}
