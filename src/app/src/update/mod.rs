mod permission;
mod scan;
mod ui;

use crux_core::{render::render, Command};
use log::debug;

use crate::events::Event;
use crate::model::Model;
use crate::Effect;

pub use ui::notify;

/// Main update dispatcher - routes events to domain-specific handlers
pub fn update(event: Event, model: &mut Model) -> Command<Effect, Event> {
    match event {
        // Mount: previous state, including a sticky error, is discarded.
        // Responses still in flight for the previous mount are ignored.
        Event::Initialize { transient_notices } => {
            let mount = model.mount.wrapping_add(1);
            debug!("scanner mount {mount} (transient notices: {transient_notices})");
            *model = Model::mounted(mount, transient_notices);
            Command::all([render(), permission::check_and_request(mount)])
        }

        Event::Permission(event) => permission::handle(event, model),

        Event::Scan(event) => scan::handle(event, model),
    }
}
