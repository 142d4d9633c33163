//! Camera permission command definitions.
//!
//! These types define the interface between the Core and the Shell for
//! querying and requesting camera access.

use crux_core::{capability::Operation, command, Command};
use serde::{Deserialize, Serialize};
use std::marker::PhantomData;

use crate::types::PermissionStatus;

// Operations that the Shell performs against the platform permission provider
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum PermissionOperation {
    Status,
    Request,
}

// What the permission provider answered
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum PermissionOutput {
    Status(PermissionStatus),
    Requested { granted: bool },
    Error { message: String },
}

impl Operation for PermissionOperation {
    type Output = PermissionOutput;
}

/// Command-based camera permission API
pub struct Permission<Effect, Event> {
    _effect: PhantomData<Effect>,
    _event: PhantomData<Event>,
}

impl<Effect, Event> Permission<Effect, Event>
where
    Effect: Send + From<crux_core::Request<PermissionOperation>> + 'static,
    Event: Send + 'static,
{
    /// Query the current camera permission status
    pub fn status() -> RequestBuilder<Effect, Event> {
        RequestBuilder::new(PermissionOperation::Status)
    }

    /// Prompt the user for camera permission
    pub fn request() -> RequestBuilder<Effect, Event> {
        RequestBuilder::new(PermissionOperation::Request)
    }
}

/// Request builder for permission operations
#[must_use]
pub struct RequestBuilder<Effect, Event> {
    operation: PermissionOperation,
    _effect: PhantomData<Effect>,
    _event: PhantomData<fn() -> Event>,
}

impl<Effect, Event> RequestBuilder<Effect, Event>
where
    Effect: Send + From<crux_core::Request<PermissionOperation>> + 'static,
    Event: Send + 'static,
{
    fn new(operation: PermissionOperation) -> Self {
        Self {
            operation,
            _effect: PhantomData,
            _event: PhantomData,
        }
    }

    /// Build the request into a Command RequestBuilder
    pub fn build(
        self,
    ) -> command::RequestBuilder<Effect, Event, impl std::future::Future<Output = PermissionOutput>>
    {
        command::RequestBuilder::new(move |ctx| async move {
            Command::request_from_shell(self.operation)
                .into_future(ctx)
                .await
        })
    }
}
