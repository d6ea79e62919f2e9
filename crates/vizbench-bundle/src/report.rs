use serde::Serialize;
use vizbench_common::types::PaneId;
use vizbench_common::DisplayId;

/// What happened to one pairing.
#[derive(Debug, Clone, Serialize)]
pub struct PairingReport {
    pub pane: PaneId,
    pub display: DisplayId,
    pub anchor: bool,
    /// Whether the pane had to switch displays.
    pub swapped: bool,
    /// Resources instantiated for the pane.
    pub resources: usize,
    /// Name of the thread that ran the pairing.
    pub thread: Option<String>,
}

/// Summary of a completed load.
#[derive(Debug, Clone, Serialize)]
pub struct LoadReport {
    pub load_id: String,
    pub container: String,
    pub bundle: Option<String>,
    /// Pairings in load order; the anchor first.
    pub pairings: Vec<PairingReport>,
    /// Worker threads started for non-anchor pairings.
    pub workers: usize,
    pub panes_added: usize,
    pub panes_removed: usize,
    pub map_layers_shared: usize,
    pub elapsed_ms: u64,
}
