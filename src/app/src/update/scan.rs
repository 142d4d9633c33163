use crux_core::{render::render, Command};
use futures_util::future::join3;
use log::{debug, error, info, warn};

use crate::commands::settings::SettingsOutput;
use crate::events::{Event, ScanEvent};
use crate::model::Model;
use crate::types::{
    ClientCredentials, Notice, ProvisionError, SettingKey, SubmissionState, LOGGED_IN_MESSAGE,
    SCAN_COMPLETE_MESSAGE,
};
use crate::{Effect, SettingsCmd};

use super::notify;

/// Handle scanner events and submission results
pub fn handle(event: ScanEvent, model: &mut Model) -> Command<Effect, Event> {
    match event {
        ScanEvent::Scanned { payload } => handle_scanned(payload, model),
        ScanEvent::SubmissionSettled { mount, result } => {
            handle_submission_settled(mount, result, model)
        }
    }
}

fn handle_scanned(payload: Option<String>, model: &mut Model) -> Command<Effect, Event> {
    if model.submission.is_submitting() {
        debug!("submission in flight, dropping scan");
        return Command::done();
    }

    let credentials = match ClientCredentials::parse(payload.as_deref()) {
        Ok(credentials) => credentials,
        Err(e) => {
            warn!("rejecting scan: {e}");
            return notify(Notice::invalid_code(model.transient_notices), model);
        }
    };

    info!(
        "scanned credentials of client {} for {}",
        credentials.client_id, credentials.hostname
    );

    model.submission = SubmissionState::Submitting;

    Command::all([
        notify(Notice::transient(SCAN_COMPLETE_MESSAGE), model),
        render(),
        submit(model.mount, credentials),
    ])
}

/// Write all three settings concurrently and report the joint outcome.
///
/// Settings that were stored before another one failed stay stored.
fn submit(mount: u64, credentials: ClientCredentials) -> Command<Effect, Event> {
    let ClientCredentials {
        client_id,
        client_secret,
        hostname,
    } = credentials;

    Command::new(|ctx| async move {
        let (address_stored, id_stored, secret_stored) = join3(
            SettingsCmd::set_server_address(hostname)
                .build()
                .into_future(ctx.clone()),
            SettingsCmd::set_client_id(client_id)
                .build()
                .into_future(ctx.clone()),
            SettingsCmd::set_client_secret(client_secret)
                .build()
                .into_future(ctx.clone()),
        )
        .await;

        let result = [
            (SettingKey::ServerAddress, address_stored),
            (SettingKey::ClientId, id_stored),
            (SettingKey::ClientSecret, secret_stored),
        ]
        .into_iter()
        .try_for_each(|(key, output)| match output {
            SettingsOutput::Stored => Ok(()),
            SettingsOutput::Error { message } => {
                Err(ProvisionError::PersistenceFailure { key, message })
            }
        });

        ctx.send_event(Event::Scan(ScanEvent::SubmissionSettled { mount, result }));
    })
}

fn handle_submission_settled(
    mount: u64,
    result: Result<(), ProvisionError>,
    model: &mut Model,
) -> Command<Effect, Event> {
    // A submission of an earlier mount must not release the current guard
    if mount != model.mount {
        debug!(
            "ignoring submission result of mount {mount}, current mount is {}",
            model.mount
        );
        return Command::done();
    }

    model.submission = SubmissionState::Idle;

    match result {
        Ok(()) => {
            info!("client credentials stored");
            Command::all([
                render(),
                notify(Notice::transient(LOGGED_IN_MESSAGE), model),
            ])
        }
        Err(e) => {
            error!("failed to store client credentials: {e}");
            render()
        }
    }
}
