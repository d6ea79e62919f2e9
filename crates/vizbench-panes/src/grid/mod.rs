//! PaneGrid: the in-memory pane container the loader and dispatcher target.

mod focus;
mod operations;
mod types;

pub use types::*;
