//! Transient notice command definitions.
//!
//! Toasts are fire-and-forget: the Shell shows them if the platform supports
//! them and never answers.

use crux_core::{capability::Operation, Command};
use serde::{Deserialize, Serialize};
use std::marker::PhantomData;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum ToastOperation {
    Show { message: String },
}

impl Operation for ToastOperation {
    type Output = ();
}

/// Command-based toast API
pub struct Toast<Effect, Event> {
    _effect: PhantomData<Effect>,
    _event: PhantomData<Event>,
}

impl<Effect, Event> Toast<Effect, Event>
where
    Effect: Send + From<crux_core::Request<ToastOperation>> + 'static,
    Event: Send + 'static,
{
    /// Show a short-lived notice
    pub fn show(message: impl Into<String>) -> Command<Effect, Event> {
        Command::notify_shell(ToastOperation::Show {
            message: message.into(),
        })
        .into()
    }
}
