//! The container contract implemented on PaneGrid.

use std::sync::Arc;

use tracing::debug;

use crate::container::{ContainerError, ContainerKind, LoopProperties, PaneContainer};
use crate::display::Display;
use crate::pane::Pane;

use super::PaneGrid;

impl PaneContainer for PaneGrid {
    fn name(&self) -> String {
        self.name.clone()
    }

    fn panes(&self) -> Vec<Arc<Pane>> {
        self.lock().panes.clone()
    }

    fn active_pane(&self) -> Option<Arc<Pane>> {
        let state = self.lock();
        let active = state.active?;
        state.panes.iter().find(|p| p.id == active).cloned()
    }

    fn kind(&self) -> ContainerKind {
        self.options.kind
    }

    fn is_elastic(&self) -> bool {
        self.options.elastic
    }

    /// Append a pane already showing `display`.
    fn add_pane(&self, display: Arc<Display>) -> Result<Arc<Pane>, ContainerError> {
        if !self.options.elastic {
            return Err(ContainerError::FixedSize);
        }
        let mut state = self.lock();
        if state.panes.len() >= self.options.max_panes {
            return Err(ContainerError::Full {
                max: self.options.max_panes,
            });
        }
        let id = state.allocate_id();
        let pane = Arc::new(Pane::with_display(id, display));
        state.panes.push(Arc::clone(&pane));
        if state.active.is_none() {
            state.active = Some(id);
        }
        debug!(grid = %self.name, pane = %id, "pane added");
        Ok(pane)
    }

    /// Remove a pane and dispose whatever it shows.
    fn remove_pane(&self, pane: &Arc<Pane>) -> Result<(), ContainerError> {
        if !self.options.elastic {
            return Err(ContainerError::FixedSize);
        }
        let mut state = self.lock();
        let index = state
            .panes
            .iter()
            .position(|p| Arc::ptr_eq(p, pane))
            .ok_or(ContainerError::UnknownPane(pane.id))?;
        if state.panes.len() <= 1 {
            return Err(ContainerError::LastPane);
        }
        let removed = state.panes.remove(index);
        if state.active == Some(removed.id) {
            let next = index.min(state.panes.len() - 1);
            state.active = Some(state.panes[next].id);
        }
        drop(state);

        if let Some(display) = removed.take_display() {
            display.dispose();
        }
        debug!(grid = %self.name, pane = %removed.id, "pane removed");
        Ok(())
    }

    fn refresh(&self) {
        self.lock().refresh_count += 1;
    }

    fn set_loop_properties(&self, properties: LoopProperties) {
        self.lock().loop_properties = Some(properties);
    }

    fn set_part_name(&self, name: &str) -> bool {
        self.lock().part_name = Some(name.to_string());
        true
    }
}
