use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

use crate::types::{HistoryEntry, PaneId};

/// Session-level notifications published after loads and perspective swaps.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum Event {
    BundleLoaded {
        container: String,
        bundle: Option<String>,
        panes: usize,
    },
    HistoryRecorded(HistoryEntry),
    UiBindingUpdated { container: String },
    PartRenamed { container: String, name: String },
    PaneOpened(PaneId),
    PaneClosed(PaneId),
    PerspectiveChanged { handlers: usize },
    Shutdown,
    #[serde(other)]
    Unknown,
}

pub struct EventBus {
    sender: broadcast::Sender<Event>,
}

impl EventBus {
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<Event> {
        self.sender.subscribe()
    }

    pub fn publish(&self, event: Event) -> usize {
        self.sender.send(event).unwrap_or(0)
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new(64)
    }
}
