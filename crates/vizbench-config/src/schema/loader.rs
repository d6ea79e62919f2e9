//! Bundle loader tuning.

use serde::{Deserialize, Serialize};

/// Bundle loader configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoaderConfig {
    /// Share value-equal map layers between sibling panes.
    pub reuse_map_layers: bool,
    /// Instantiate non-anchor panes on worker threads. When off every pane
    /// loads on the calling thread, in load order.
    pub parallel_instantiation: bool,
    /// Thread name prefix for pane load workers.
    pub worker_name_prefix: String,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            reuse_map_layers: true,
            parallel_instantiation: true,
            worker_name_prefix: "bundle-load".into(),
        }
    }
}
