//! Platform glue: UI-thread affinity, input routing, and bundle search
//! roots.

pub mod input;
pub mod paths;
pub mod ui;

pub use input::{DispatchState, InputDispatcher, InputEvent, InputHandler, InputKind, InputPriority};
pub use paths::{bundle_search_roots, data_dir, user_bundle_dir};
pub use ui::{panic_message, run_blocking_with, InlineExecutor, UiExecutor, UiTask, UiThread};
