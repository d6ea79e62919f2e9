//! Core types and constructors for PaneGrid.

use std::sync::{Arc, Mutex, MutexGuard};

use vizbench_common::types::PaneId;

use crate::container::{ContainerKind, LoopProperties};
use crate::pane::Pane;

/// Construction options for a [`PaneGrid`].
#[derive(Debug, Clone)]
pub struct GridOptions {
    /// Whether panes may be added and removed.
    pub elastic: bool,
    /// Upper bound on panes for an elastic grid.
    pub max_panes: usize,
    /// Empty panes created up front.
    pub initial_panes: usize,
    pub kind: ContainerKind,
}

impl Default for GridOptions {
    fn default() -> Self {
        Self {
            elastic: true,
            max_panes: 9,
            initial_panes: 1,
            kind: ContainerKind::Editor,
        }
    }
}

/// In-memory pane container: an ordered list of panes with an active pane,
/// loop properties, and a refresh counter.
pub struct PaneGrid {
    pub(super) name: String,
    pub(super) options: GridOptions,
    pub(super) state: Mutex<GridState>,
}

pub(super) struct GridState {
    pub(super) panes: Vec<Arc<Pane>>,
    pub(super) active: Option<PaneId>,
    pub(super) next_id: u32,
    pub(super) loop_properties: Option<LoopProperties>,
    pub(super) refresh_count: usize,
    pub(super) part_name: Option<String>,
}

impl GridState {
    pub(super) fn allocate_id(&mut self) -> PaneId {
        let id = PaneId(self.next_id);
        self.next_id += 1;
        id
    }
}

impl PaneGrid {
    /// Create an elastic editor grid with one empty pane.
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_options(name, GridOptions::default())
    }

    /// Create a grid with a fixed number of empty panes.
    pub fn fixed(name: impl Into<String>, panes: usize) -> Self {
        Self::with_options(
            name,
            GridOptions {
                elastic: false,
                max_panes: panes,
                initial_panes: panes,
                ..GridOptions::default()
            },
        )
    }

    pub fn with_options(name: impl Into<String>, options: GridOptions) -> Self {
        let mut state = GridState {
            panes: Vec::with_capacity(options.initial_panes),
            active: None,
            next_id: 1,
            loop_properties: None,
            refresh_count: 0,
            part_name: None,
        };
        for _ in 0..options.initial_panes {
            let id = state.allocate_id();
            state.panes.push(Arc::new(Pane::new(id)));
        }
        state.active = state.panes.first().map(|p| p.id);

        Self {
            name: name.into(),
            options,
            state: Mutex::new(state),
        }
    }

    pub(super) fn lock(&self) -> MutexGuard<'_, GridState> {
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }

    // -- Accessors --

    pub fn options(&self) -> &GridOptions {
        &self.options
    }

    pub fn pane_count(&self) -> usize {
        self.lock().panes.len()
    }

    pub fn pane(&self, id: PaneId) -> Option<Arc<Pane>> {
        self.lock().panes.iter().find(|p| p.id == id).cloned()
    }

    pub fn ordered_pane_ids(&self) -> Vec<PaneId> {
        self.lock().panes.iter().map(|p| p.id).collect()
    }

    pub fn active_id(&self) -> Option<PaneId> {
        self.lock().active
    }

    /// Number of times the grid has been refreshed.
    pub fn refresh_count(&self) -> usize {
        self.lock().refresh_count
    }

    pub fn loop_properties(&self) -> Option<LoopProperties> {
        self.lock().loop_properties.clone()
    }

    pub fn part_name(&self) -> Option<String> {
        self.lock().part_name.clone()
    }
}
