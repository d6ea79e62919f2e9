use std::sync::{Arc, RwLock};

use vizbench_common::types::PaneId;

use crate::descriptor::Descriptor;
use crate::display::Display;

/// A viewport slot. Holds at most one display; its descriptor is that
/// display's descriptor. The pane id doubles as the surface id input events
/// are tagged with.
#[derive(Debug)]
pub struct Pane {
    pub id: PaneId,
    display: RwLock<Option<Arc<Display>>>,
}

impl Pane {
    pub fn new(id: PaneId) -> Self {
        Self {
            id,
            display: RwLock::new(None),
        }
    }

    pub fn with_display(id: PaneId, display: Arc<Display>) -> Self {
        Self {
            id,
            display: RwLock::new(Some(display)),
        }
    }

    pub fn display(&self) -> Option<Arc<Display>> {
        self.display
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    pub fn descriptor(&self) -> Option<Arc<Descriptor>> {
        self.display().map(|d| Arc::clone(d.descriptor()))
    }

    /// Whether the pane currently shows `descriptor`.
    pub fn shows(&self, descriptor: &Arc<Descriptor>) -> bool {
        self.descriptor()
            .is_some_and(|current| Descriptor::same(&current, descriptor))
    }

    /// Replace the display, returning the previous one. Disposal of the
    /// previous display is the caller's decision.
    pub fn set_display(&self, display: Arc<Display>) -> Option<Arc<Display>> {
        self.display
            .write()
            .unwrap_or_else(|e| e.into_inner())
            .replace(display)
    }

    pub fn take_display(&self) -> Option<Arc<Display>> {
        self.display
            .write()
            .unwrap_or_else(|e| e.into_inner())
            .take()
    }
}
