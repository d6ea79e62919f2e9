use std::sync::Arc;

use vizbench_panes::PaneContainer;

use super::event::InputEvent;

/// Receives routed input. Every method defaults to "not handled".
///
/// Returning `true` from a short-circuiting method stops the event from
/// reaching lower tiers. The return value of `pointer_move`, `enter` and
/// `exit` is ignored since every handler sees those.
pub trait InputHandler: Send + Sync {
    fn pointer_down(&self, _event: &InputEvent) -> bool {
        false
    }

    fn pointer_up(&self, _event: &InputEvent) -> bool {
        false
    }

    /// Pointer moved while a button is held. `event.button` is the button
    /// that started the drag.
    fn drag_move(&self, _event: &InputEvent) -> bool {
        false
    }

    /// Pointer moved with no button held.
    fn pointer_move(&self, _event: &InputEvent) -> bool {
        false
    }

    fn double_click(&self, _event: &InputEvent) -> bool {
        false
    }

    fn wheel(&self, _event: &InputEvent) -> bool {
        false
    }

    fn hover(&self, _event: &InputEvent) -> bool {
        false
    }

    fn key_down(&self, _event: &InputEvent) -> bool {
        false
    }

    fn key_up(&self, _event: &InputEvent) -> bool {
        false
    }

    fn enter(&self, _event: &InputEvent) -> bool {
        false
    }

    fn exit(&self, _event: &InputEvent) -> bool {
        false
    }

    /// Called on registration with the container the dispatcher serves.
    fn attached(&self, _container: &Arc<dyn PaneContainer>) {}
}

pub(super) fn same_handler(a: &Arc<dyn InputHandler>, b: &Arc<dyn InputHandler>) -> bool {
    std::ptr::eq(
        Arc::as_ptr(a) as *const (),
        Arc::as_ptr(b) as *const (),
    )
}
