//! Input routing: a priority-sorted handler chain with a swappable
//! perspective-scoped subset.
//!
//! Short-circuiting events run from the highest tier down and stop at the
//! first handler that consumes them. Idle pointer moves and enter/exit
//! reach every handler.

mod dispatcher;
mod event;
mod handler;
mod priority;


pub use dispatcher::{DispatchState, InputDispatcher};
pub use event::{InputEvent, InputKind};
pub use handler::InputHandler;
pub use priority::InputPriority;
