//! Time matching: load ordering and shared playback state for a group of
//! displays.

mod standard;

pub use standard::StandardTimeMatcher;

use std::fmt;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::display::Display;

/// Playback state owned by a time matcher.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchState {
    pub reference_time: Option<DateTime<Utc>>,
    pub frame_count: usize,
    /// Loads accumulated since the last reset.
    pub multiload: u32,
}

pub trait TimeMatcher: Send + Sync + fmt::Debug {
    /// The order in which `displays` must load. Implementations return every
    /// display exactly once.
    fn display_load_order(&self, displays: &[Arc<Display>]) -> Vec<Arc<Display>>;

    fn state(&self) -> MatchState;

    /// Copy `other`'s playback state (reference time, frame count) into self.
    fn copy_from(&self, other: &dyn TimeMatcher);

    /// Count one more display loaded under this matcher. Returns the
    /// count since the last reset.
    fn record_load(&self) -> u32;

    fn reset_multiload(&self);
}

/// Identity comparison for matcher references.
pub fn same_matcher(a: &Arc<dyn TimeMatcher>, b: &Arc<dyn TimeMatcher>) -> bool {
    std::ptr::eq(
        Arc::as_ptr(a) as *const (),
        Arc::as_ptr(b) as *const (),
    )
}
