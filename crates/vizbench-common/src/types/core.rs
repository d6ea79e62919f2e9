use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A position in surface coordinates, as delivered by the windowing layer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PaneId(pub u32);

impl fmt::Display for PaneId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "pane-{}", self.0)
    }
}

/// A record of one completed load, pushed to the history collaborator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub container: String,
    pub bundle_name: Option<String>,
    pub display_count: usize,
    pub recorded_at: DateTime<Utc>,
}

impl HistoryEntry {
    pub fn new(
        container: impl Into<String>,
        bundle_name: Option<String>,
        display_count: usize,
    ) -> Self {
        Self {
            container: container.into(),
            bundle_name,
            display_count,
            recorded_at: Utc::now(),
        }
    }
}
