//! Settings store command definitions.
//!
//! The Shell owns the credential storage. Every setting is written by its own
//! request, there is no transactional write across settings.

use crux_core::{capability::Operation, command, Command};
use serde::{Deserialize, Serialize};
use std::marker::PhantomData;

use crate::types::SettingKey;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum SettingsOperation {
    Set { key: SettingKey, value: String },
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum SettingsOutput {
    Stored,
    Error { message: String },
}

impl Operation for SettingsOperation {
    type Output = SettingsOutput;
}

/// Command-based settings API
pub struct Settings<Effect, Event> {
    _effect: PhantomData<Effect>,
    _event: PhantomData<Event>,
}

impl<Effect, Event> Settings<Effect, Event>
where
    Effect: Send + From<crux_core::Request<SettingsOperation>> + 'static,
    Event: Send + 'static,
{
    /// Store an arbitrary setting
    pub fn set(key: SettingKey, value: impl Into<String>) -> RequestBuilder<Effect, Event> {
        RequestBuilder::new(SettingsOperation::Set {
            key,
            value: value.into(),
        })
    }

    pub fn set_server_address(address: impl Into<String>) -> RequestBuilder<Effect, Event> {
        Self::set(SettingKey::ServerAddress, address)
    }

    pub fn set_client_id(client_id: impl Into<String>) -> RequestBuilder<Effect, Event> {
        Self::set(SettingKey::ClientId, client_id)
    }

    pub fn set_client_secret(client_secret: impl Into<String>) -> RequestBuilder<Effect, Event> {
        Self::set(SettingKey::ClientSecret, client_secret)
    }
}

/// Request builder for settings operations
#[must_use]
pub struct RequestBuilder<Effect, Event> {
    operation: SettingsOperation,
    _effect: PhantomData<Effect>,
    _event: PhantomData<fn() -> Event>,
}

impl<Effect, Event> RequestBuilder<Effect, Event>
where
    Effect: Send + From<crux_core::Request<SettingsOperation>> + 'static,
    Event: Send + 'static,
{
    fn new(operation: SettingsOperation) -> Self {
        Self {
            operation,
            _effect: PhantomData,
            _event: PhantomData,
        }
    }

    /// Build the request into a Command RequestBuilder
    pub fn build(
        self,
    ) -> command::RequestBuilder<Effect, Event, impl std::future::Future<Output = SettingsOutput>>
    {
        command::RequestBuilder::new(move |ctx| async move {
            Command::request_from_shell(self.operation)
                .into_future(ctx)
                .await
        })
    }
}
