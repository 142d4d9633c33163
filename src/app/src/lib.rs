pub mod commands;
pub mod events;
pub mod macros;
pub mod model;
pub mod types;
pub mod update;


use crux_core::Command;

// Re-export core types
pub use crate::{
    commands::{
        permission::{PermissionOperation, PermissionOutput},
        settings::{SettingsOperation, SettingsOutput},
        toast::ToastOperation,
    },
    events::{Event, PermissionEvent, ScanEvent},
    model::Model,
    types::*,
};

#[crux_macros::effect(typegen)]
pub enum Effect {
    Render(crux_core::render::RenderOperation),
    Permission(PermissionOperation),
    Settings(SettingsOperation),
    Toast(ToastOperation),
}

pub type PermissionCmd = crate::commands::permission::Permission<Effect, Event>;
pub type SettingsCmd = crate::commands::settings::Settings<Effect, Event>;
pub type ToastCmd = crate::commands::toast::Toast<Effect, Event>;

/// The Core application
#[derive(Default)]
pub struct App;

impl crux_core::App for App {
    type Event = Event;
    type Model = Model;
    type ViewModel = Model;
    type Effect = Effect;

    fn update(&self, event: Self::Event, model: &mut Self::Model) -> Command<Effect, Event> {
        update::update(event, model)
    }

    fn view(&self, model: &Self::Model) -> Self::ViewModel {
        model.clone()
    }
}
