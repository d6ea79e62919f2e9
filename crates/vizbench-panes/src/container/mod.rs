//! The container contract: an ordered set of panes plus the refresh,
//! playback, and naming hooks the loader drives.

mod loop_properties;

pub use loop_properties::{LoopMode, LoopProperties};

use std::sync::Arc;

use vizbench_common::types::PaneId;

use crate::display::Display;
use crate::pane::Pane;

#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum ContainerError {
    #[error("container has a fixed number of panes")]
    FixedSize,

    #[error("container is full ({max} panes)")]
    Full { max: usize },

    #[error("{0} is not part of this container")]
    UnknownPane(PaneId),

    #[error("cannot remove the last pane")]
    LastPane,
}

/// Whether a container behaves like an editor (history and global UI
/// binding follow its loads) or a plain view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ContainerKind {
    #[default]
    Editor,
    View,
}

pub trait PaneContainer: Send + Sync {
    fn name(&self) -> String;

    /// Panes in their stable, externally meaningful order.
    fn panes(&self) -> Vec<Arc<Pane>>;

    fn active_pane(&self) -> Option<Arc<Pane>>;

    fn kind(&self) -> ContainerKind {
        ContainerKind::View
    }

    fn is_editor(&self) -> bool {
        self.kind() == ContainerKind::Editor
    }

    /// Whether `add_pane` / `remove_pane` are supported.
    fn is_elastic(&self) -> bool {
        false
    }

    fn add_pane(&self, _display: Arc<Display>) -> Result<Arc<Pane>, ContainerError> {
        Err(ContainerError::FixedSize)
    }

    fn remove_pane(&self, _pane: &Arc<Pane>) -> Result<(), ContainerError> {
        Err(ContainerError::FixedSize)
    }

    fn refresh(&self);

    fn set_loop_properties(&self, properties: LoopProperties);

    /// Rename the hosting part. Returns `false` when the container cannot
    /// be renamed.
    fn set_part_name(&self, _name: &str) -> bool {
        false
    }
}
