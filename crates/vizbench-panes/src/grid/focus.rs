//! Active-pane handling for PaneGrid.

use vizbench_common::types::PaneId;

use super::PaneGrid;

impl PaneGrid {
    /// Set the active pane by ID.
    pub fn focus_pane(&self, id: PaneId) -> bool {
        let mut state = self.lock();
        if state.panes.iter().any(|p| p.id == id) {
            state.active = Some(id);
            true
        } else {
            false
        }
    }
}
