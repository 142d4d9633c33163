use crux_core::Command;
use log::{debug, error, info, warn};

use crate::commands::permission::PermissionOutput;
use crate::events::{Event, PermissionEvent};
use crate::model::Model;
use crate::types::{PermissionState, ProvisionError, PERMISSION_DENIED_MESSAGE};
use crate::update_field;
use crate::{Effect, PermissionCmd};

/// Start the permission sequence of `mount` by querying the current status
pub fn check_and_request(mount: u64) -> Command<Effect, Event> {
    PermissionCmd::status()
        .build()
        .then_send(move |output| {
            Event::Permission(PermissionEvent::StatusResponse { mount, output })
        })
}

/// Handle permission provider responses
pub fn handle(event: PermissionEvent, model: &mut Model) -> Command<Effect, Event> {
    if event.mount() != model.mount {
        debug!(
            "ignoring permission response of mount {}, current mount is {}",
            event.mount(),
            model.mount
        );
        return Command::done();
    }

    if model.permission.is_settled() {
        warn!(
            "ignoring permission response, verdict already {:?}",
            model.permission
        );
        return Command::done();
    }

    match event {
        PermissionEvent::StatusResponse {
            mount,
            output: PermissionOutput::Status(status),
        } => {
            if status.granted {
                grant(model)
            } else if status.can_ask_again {
                debug!("camera permission not granted yet, requesting it");
                PermissionCmd::request()
                    .build()
                    .then_send(move |output| {
                        Event::Permission(PermissionEvent::RequestResponse { mount, output })
                    })
            } else {
                deny(model, "not granted and cannot ask again")
            }
        }

        PermissionEvent::RequestResponse {
            output: PermissionOutput::Requested { granted: true },
            ..
        } => grant(model),

        PermissionEvent::RequestResponse {
            output: PermissionOutput::Requested { granted: false },
            ..
        } => deny(model, "request declined"),

        PermissionEvent::StatusResponse {
            output: PermissionOutput::Error { message },
            ..
        }
        | PermissionEvent::RequestResponse {
            output: PermissionOutput::Error { message },
            ..
        } => deny(model, &message),

        PermissionEvent::StatusResponse { output, .. }
        | PermissionEvent::RequestResponse { output, .. } => {
            deny(model, &format!("unexpected provider answer {output:?}"))
        }
    }
}

fn grant(model: &mut Model) -> Command<Effect, Event> {
    info!("camera permission granted");
    update_field!(model.permission, PermissionState::Granted)
}

fn deny(model: &mut Model, reason: &str) -> Command<Effect, Event> {
    error!("{}: {reason}", ProvisionError::PermissionUnavailable);
    update_field!(
        model.permission, PermissionState::Denied;
        model.error_message, Some(PERMISSION_DENIED_MESSAGE.to_string())
    )
}
