use crux_core::Command;

use crate::events::Event;
use crate::model::Model;
use crate::types::{Notice, NoticeKind};
use crate::{Effect, ToastCmd};

/// Present a notice to the user.
///
/// Transient notices are handed to the shell as toasts, persistent ones
/// become the view model's error text.
pub fn notify(notice: Notice, model: &mut Model) -> Command<Effect, Event> {
    match notice.kind {
        NoticeKind::Transient => ToastCmd::show(notice.message),
        NoticeKind::Persistent => model.set_error_and_render(notice.message),
    }
}
