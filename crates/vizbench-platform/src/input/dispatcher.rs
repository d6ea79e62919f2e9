//! Priority-ordered input routing.

use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::{Arc, Mutex, MutexGuard, Weak};

use tracing::{debug, error, trace};
use vizbench_common::types::PaneId;
use vizbench_config::schema::InputConfig;
use vizbench_panes::PaneContainer;

use super::event::{InputEvent, InputKind};
use super::handler::{same_handler, InputHandler};
use super::priority::InputPriority;
use crate::ui::panic_message;

/// Session state the dispatcher tracks between events.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DispatchState {
    pub pointer_down: bool,
    pub last_button: u32,
    pub pending_menu: bool,
}

#[derive(Clone)]
struct Registration {
    handler: Arc<dyn InputHandler>,
    priority: InputPriority,
}

/// Handler chain, sorted ascending by tier with ties in insertion order.
/// `snapshot` mirrors `chain` and is what dispatch iterates.
#[derive(Default)]
struct Registry {
    chain: Vec<Registration>,
    perspective: Vec<Arc<dyn InputHandler>>,
    snapshot: Arc<Vec<Arc<dyn InputHandler>>>,
}

impl Registry {
    fn contains(&self, handler: &Arc<dyn InputHandler>) -> bool {
        self.chain.iter().any(|r| same_handler(&r.handler, handler))
    }

    fn publish(&mut self) {
        self.chain.sort_by_key(|r| r.priority);
        self.snapshot = Arc::new(self.chain.iter().map(|r| Arc::clone(&r.handler)).collect());
    }
}

#[derive(Clone, Copy)]
enum Order {
    HighToLow,
    LowToHigh,
}

/// Routes input events for one container through its handler chain.
pub struct InputDispatcher {
    container: Weak<dyn PaneContainer>,
    menu_trigger_button: u32,
    synthetic_move_on_up: bool,
    registry: Mutex<Registry>,
    state: Mutex<DispatchState>,
}

impl InputDispatcher {
    pub fn new(container: Weak<dyn PaneContainer>, config: &InputConfig) -> Self {
        Self {
            container,
            menu_trigger_button: config.menu_trigger_button,
            synthetic_move_on_up: config.synthetic_move_on_up,
            registry: Mutex::new(Registry::default()),
            state: Mutex::new(DispatchState::default()),
        }
    }

    pub fn for_container(container: &Arc<dyn PaneContainer>, config: &InputConfig) -> Self {
        Self::new(Arc::downgrade(container), config)
    }

    fn registry(&self) -> MutexGuard<'_, Registry> {
        self.registry.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn lock_state(&self) -> MutexGuard<'_, DispatchState> {
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }

    pub fn state(&self) -> DispatchState {
        *self.lock_state()
    }

    // -- Registration --

    /// Add `handler` at `priority`. Returns `false` if the handler is
    /// already registered at any tier.
    pub fn register(&self, handler: Arc<dyn InputHandler>, priority: InputPriority) -> bool {
        if let Some(container) = self.container.upgrade() {
            handler.attached(&container);
        }

        let mut registry = self.registry();
        if registry.contains(&handler) {
            return false;
        }
        registry.chain.push(Registration { handler, priority });
        registry.publish();
        debug!(?priority, handlers = registry.chain.len(), "input handler registered");
        true
    }

    pub fn register_default(&self, handler: Arc<dyn InputHandler>) -> bool {
        self.register(handler, InputPriority::default())
    }

    pub fn unregister(&self, handler: &Arc<dyn InputHandler>) -> bool {
        let mut registry = self.registry();
        let before = registry.chain.len();
        registry.chain.retain(|r| !same_handler(&r.handler, handler));
        registry.perspective.retain(|h| !same_handler(h, handler));
        let removed = registry.chain.len() != before;
        if removed {
            registry.publish();
        }
        removed
    }

    /// Replace the perspective-scoped handlers in one step.
    ///
    /// The previous perspective set leaves the chain and `handlers` enter
    /// it at [`InputPriority::Perspective`]. Handlers already registered at
    /// another tier keep that registration.
    pub fn fire_perspective_changed(&self, handlers: Vec<Arc<dyn InputHandler>>) {
        if let Some(container) = self.container.upgrade() {
            for handler in &handlers {
                handler.attached(&container);
            }
        }

        let mut registry = self.registry();
        let old = std::mem::take(&mut registry.perspective);
        registry
            .chain
            .retain(|r| !old.iter().any(|h| same_handler(h, &r.handler)));

        for handler in handlers {
            if registry.contains(&handler) {
                continue;
            }
            registry.chain.push(Registration {
                handler: Arc::clone(&handler),
                priority: InputPriority::Perspective,
            });
            registry.perspective.push(handler);
        }
        registry.publish();
        debug!(
            removed = old.len(),
            installed = registry.perspective.len(),
            "perspective handlers swapped"
        );
    }

    /// Handlers at one tier, in chain order.
    pub fn handlers_for_priority(&self, priority: InputPriority) -> Vec<Arc<dyn InputHandler>> {
        self.registry()
            .chain
            .iter()
            .filter(|r| r.priority == priority)
            .map(|r| Arc::clone(&r.handler))
            .collect()
    }

    /// The whole chain, lowest tier first.
    pub fn handlers(&self) -> Vec<Arc<dyn InputHandler>> {
        self.snapshot().as_ref().clone()
    }

    pub fn perspective_handlers(&self) -> Vec<Arc<dyn InputHandler>> {
        self.registry().perspective.clone()
    }

    pub fn handler_count(&self) -> usize {
        self.registry().chain.len()
    }

    fn snapshot(&self) -> Arc<Vec<Arc<dyn InputHandler>>> {
        Arc::clone(&self.registry().snapshot)
    }

    // -- Dispatch --

    fn is_active_surface(&self, surface: PaneId) -> bool {
        let Some(container) = self.container.upgrade() else {
            return false;
        };
        container
            .active_pane()
            .is_some_and(|pane| pane.id == surface)
    }

    /// Route one event. Returns whether a handler consumed it.
    pub fn dispatch(&self, event: &InputEvent) -> bool {
        if !self.is_active_surface(event.surface) {
            trace!(kind = ?event.kind, surface = %event.surface, "event outside the active pane");
            return false;
        }

        match event.kind {
            InputKind::PointerDown => {
                {
                    let mut state = self.lock_state();
                    if state.pending_menu {
                        state.pending_menu = false;
                        if event.button != self.menu_trigger_button {
                            trace!(button = event.button, "pointer down dismissed pending menu");
                            return false;
                        }
                    }
                    state.last_button = event.button;
                    state.pointer_down = true;
                }
                self.first_handled(event, |h, e| h.pointer_down(e))
            }
            InputKind::PointerUp => {
                self.lock_state().pointer_down = false;
                let handled = self.first_handled(event, |h, e| h.pointer_up(e));
                if self.synthetic_move_on_up {
                    self.route_move(&event.as_move(event.button));
                }
                handled
            }
            InputKind::PointerMove => self.route_move(event),
            InputKind::DoubleClick => self.first_handled(event, |h, e| h.double_click(e)),
            InputKind::Wheel => self.first_handled(event, |h, e| h.wheel(e)),
            InputKind::Hover => self.first_handled(event, |h, e| h.hover(e)),
            InputKind::KeyDown => self.first_handled(event, |h, e| h.key_down(e)),
            InputKind::KeyUp => self.first_handled(event, |h, e| h.key_up(e)),
            InputKind::Enter => self.notify_all(event, Order::HighToLow, |h, e| h.enter(e)),
            InputKind::Exit => self.notify_all(event, Order::HighToLow, |h, e| h.exit(e)),
            InputKind::MenuRequested => {
                let mut state = self.lock_state();
                state.pointer_down = false;
                state.pending_menu = true;
                false
            }
        }
    }

    fn route_move(&self, event: &InputEvent) -> bool {
        let state = self.state();
        if state.pointer_down {
            let drag = event.as_move(state.last_button);
            self.first_handled(&drag, |h, e| h.drag_move(e))
        } else {
            self.notify_all(event, Order::LowToHigh, |h, e| h.pointer_move(e))
        }
    }

    /// Offer the event high to low until a handler consumes it.
    fn first_handled<F>(&self, event: &InputEvent, call: F) -> bool
    where
        F: Fn(&dyn InputHandler, &InputEvent) -> bool,
    {
        let chain = self.snapshot();
        for handler in chain.iter().rev() {
            match catch_unwind(AssertUnwindSafe(|| call(handler.as_ref(), event))) {
                Ok(true) => return true,
                Ok(false) => {}
                Err(payload) => {
                    log_handler_panic(event, payload.as_ref());
                    return false;
                }
            }
        }
        false
    }

    /// Deliver the event to every handler. Returns whether any reported it
    /// handled.
    fn notify_all<F>(&self, event: &InputEvent, order: Order, call: F) -> bool
    where
        F: Fn(&dyn InputHandler, &InputEvent) -> bool,
    {
        let chain = self.snapshot();
        let mut any = false;
        let mut deliver = |handler: &Arc<dyn InputHandler>| -> bool {
            match catch_unwind(AssertUnwindSafe(|| call(handler.as_ref(), event))) {
                Ok(handled) => {
                    any |= handled;
                    true
                }
                Err(payload) => {
                    log_handler_panic(event, payload.as_ref());
                    false
                }
            }
        };
        match order {
            Order::HighToLow => {
                for handler in chain.iter().rev() {
                    if !deliver(handler) {
                        break;
                    }
                }
            }
            Order::LowToHigh => {
                for handler in chain.iter() {
                    if !deliver(handler) {
                        break;
                    }
                }
            }
        }
        any
    }
}

fn log_handler_panic(event: &InputEvent, payload: &(dyn std::any::Any + Send)) {
    error!(
        kind = ?event.kind,
        surface = %event.surface,
        error = %panic_message(payload),
        "input handler panicked, rest of chain skipped for this event"
    );
}
