use std::sync::{Arc, Mutex};

use chrono::{DateTime, Utc};

use super::{MatchState, TimeMatcher};
use crate::display::Display;

/// Matcher keyed on a single reference time.
///
/// Displays carrying data resources establish the time basis, so they load
/// before map-only displays. Relative order is otherwise preserved.
#[derive(Debug, Default)]
pub struct StandardTimeMatcher {
    state: Mutex<MatchState>,
}

impl StandardTimeMatcher {
    pub fn new(reference_time: Option<DateTime<Utc>>, frame_count: usize) -> Self {
        Self {
            state: Mutex::new(MatchState {
                reference_time,
                frame_count,
                multiload: 0,
            }),
        }
    }
}

impl TimeMatcher for StandardTimeMatcher {
    fn display_load_order(&self, displays: &[Arc<Display>]) -> Vec<Arc<Display>> {
        let (data, maps): (Vec<_>, Vec<_>) = displays
            .iter()
            .cloned()
            .partition(|d| d.descriptor().resource_list().has_data_resources());
        data.into_iter().chain(maps).collect()
    }

    fn state(&self) -> MatchState {
        *self.state.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn copy_from(&self, other: &dyn TimeMatcher) {
        let source = other.state();
        let mut state = self.state.lock().unwrap_or_else(|e| e.into_inner());
        state.reference_time = source.reference_time;
        state.frame_count = source.frame_count;
    }

    fn record_load(&self) -> u32 {
        let mut state = self.state.lock().unwrap_or_else(|e| e.into_inner());
        state.multiload += 1;
        state.multiload
    }

    fn reset_multiload(&self) {
        self.state
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .multiload = 0;
    }
}
