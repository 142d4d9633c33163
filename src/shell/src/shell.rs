//! Headless shell driving the provisioning core
//!
//! Scan payloads are read line by line from an async reader. Effects
//! requested by the core are executed on tokio tasks and resolved back into
//! the core as soon as they finish.

use crate::permission_provider::CameraPermissionProvider;
use crate::settings_store::SettingsStore;
use anyhow::{Context, Result};
use crux_core::Core;
use log::{debug, warn};
use qr_provision_core::{
    App, Effect, Event, Model, PermissionOperation, PermissionOutput, ScanEvent,
    SettingsOperation, SettingsOutput, ToastOperation,
};
use std::sync::Arc;
use tokio::{
    io::{AsyncBufRead, AsyncBufReadExt},
    task::JoinSet,
};

pub struct Shell<P, S> {
    core: Arc<Core<App>>,
    permission: Arc<P>,
    store: Arc<S>,
    transient_notices: bool,
    tasks: JoinSet<Result<Vec<Effect>>>,
    shown_error: Option<String>,
}

impl<P, S> Shell<P, S>
where
    P: CameraPermissionProvider + Send + Sync + 'static,
    S: SettingsStore + Send + Sync + 'static,
{
    pub fn new(permission: P, store: S, transient_notices: bool) -> Self {
        Self {
            core: Arc::new(Core::new()),
            permission: Arc::new(permission),
            store: Arc::new(store),
            transient_notices,
            tasks: JoinSet::new(),
            shown_error: None,
        }
    }

    /// Mount the scanner and feed it every line of `input`.
    ///
    /// Lines are only read while the camera permission is granted. Returns
    /// the final view once the input is exhausted (or the permission was
    /// denied) and all outstanding effects have settled.
    pub async fn run<R>(mut self, input: R) -> Result<Model>
    where
        R: AsyncBufRead + Unpin,
    {
        let mut lines = input.lines();
        let mut input_open = true;

        self.dispatch(Event::Initialize {
            transient_notices: self.transient_notices,
        });

        loop {
            let scanning = input_open && self.core.view().scanning_enabled();

            tokio::select! {
                line = lines.next_line(), if scanning => {
                    match line.context("failed to read scan input")? {
                        Some(payload) => self.dispatch(Event::Scan(ScanEvent::Scanned {
                            payload: Some(payload),
                        })),
                        None => {
                            debug!("scan input closed");
                            input_open = false;
                        }
                    }
                }
                Some(joined) = self.tasks.join_next() => {
                    let effects = joined.context("effect task failed")??;
                    self.process(effects);
                }
                else => break,
            }
        }

        Ok(self.core.view())
    }

    fn dispatch(&mut self, event: Event) {
        let effects = self.core.process_event(event);
        self.process(effects);
    }

    fn process(&mut self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::Render(_) => self.render(),

                Effect::Permission(mut request) => {
                    let core = self.core.clone();
                    let provider = self.permission.clone();

                    self.tasks.spawn(async move {
                        let output = answer_permission(provider.as_ref(), &request.operation).await;
                        core.resolve(&mut request, output)
                            .context("failed to resolve permission request")
                    });
                }

                Effect::Settings(mut request) => {
                    let core = self.core.clone();
                    let store = self.store.clone();

                    self.tasks.spawn(async move {
                        let output = store_setting(store.as_ref(), request.operation.clone()).await;
                        core.resolve(&mut request, output)
                            .context("failed to resolve settings request")
                    });
                }

                Effect::Toast(request) => self.toast(request.operation),
            }
        }
    }

    fn render(&mut self) {
        let view = self.core.view();

        if view.error_message != self.shown_error {
            if let Some(message) = &view.error_message {
                println!("error: {message}");
            }
            self.shown_error = view.error_message;
        }
    }

    fn toast(&self, operation: ToastOperation) {
        let ToastOperation::Show { message } = operation;

        if self.transient_notices {
            println!("{message}");
        } else {
            debug!("transient notices unavailable, dropping '{message}'");
        }
    }
}

async fn answer_permission<P>(provider: &P, operation: &PermissionOperation) -> PermissionOutput
where
    P: CameraPermissionProvider,
{
    let result = match operation {
        PermissionOperation::Status => provider.status().await.map(PermissionOutput::Status),
        PermissionOperation::Request => provider
            .request()
            .await
            .map(|granted| PermissionOutput::Requested { granted }),
    };

    result.unwrap_or_else(|e| {
        warn!("permission provider failed: {e:#}");
        PermissionOutput::Error {
            message: format!("{e:#}"),
        }
    })
}

async fn store_setting<S>(store: &S, operation: SettingsOperation) -> SettingsOutput
where
    S: SettingsStore,
{
    let SettingsOperation::Set { key, value } = operation;

    match store.set(key, value).await {
        Ok(()) => SettingsOutput::Stored,
        Err(e) => SettingsOutput::Error {
            message: format!("{e:#}"),
        },
    }
}
