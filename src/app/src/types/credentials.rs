use serde::{Deserialize, Serialize};
use serde_valid::Validate;
use std::fmt;

use super::error::ProvisionError;

/// Separator between the fields of a scanned payload
pub const PAYLOAD_SEPARATOR: &str = ":";

/// Settings entries written for a provisioned client
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum SettingKey {
    ServerAddress,
    ClientId,
    ClientSecret,
}

impl SettingKey {
    pub const ALL: [SettingKey; 3] = [Self::ServerAddress, Self::ClientId, Self::ClientSecret];

    /// Stable name of the setting, used as storage key by shells
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ServerAddress => "server_address",
            Self::ClientId => "client_id",
            Self::ClientSecret => "client_secret",
        }
    }
}

impl fmt::Display for SettingKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Client credentials decoded from a QR payload
///
/// Payload layout is `client_id:client_secret:hostname[:port...]`. The first
/// two fields never contain a separator, everything after the second one
/// belongs to the hostname.
#[derive(Clone, PartialEq, Eq, Validate)]
pub struct ClientCredentials {
    #[validate(min_length = 1)]
    pub client_id: String,
    #[validate(min_length = 1)]
    pub client_secret: String,
    #[validate(min_length = 1)]
    pub hostname: String,
}

impl ClientCredentials {
    /// Split a payload into its fields without validating them.
    ///
    /// An absent payload is treated as empty.
    pub fn split(payload: Option<&str>) -> Self {
        let mut parts = payload.unwrap_or_default().split(PAYLOAD_SEPARATOR);
        let client_id = parts.next().unwrap_or_default().to_string();
        let client_secret = parts.next().unwrap_or_default().to_string();
        let hostname = parts.collect::<Vec<_>>().join(PAYLOAD_SEPARATOR);

        Self {
            client_id,
            client_secret,
            hostname,
        }
    }

    /// Split and validate a payload
    pub fn parse(payload: Option<&str>) -> Result<Self, ProvisionError> {
        let credentials = Self::split(payload);
        credentials
            .validate()
            .map_err(|e| ProvisionError::InvalidPayload(e.to_string()))?;
        Ok(credentials)
    }
}

impl fmt::Debug for ClientCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientCredentials")
            .field("client_id", &self.client_id)
            .field("client_secret", &"<redacted>")
            .field("hostname", &self.hostname)
            .finish()
    }
}
