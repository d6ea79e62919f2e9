//! Input routing configuration.

use serde::{Deserialize, Serialize};

/// Input dispatcher configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    /// Button that opens the context menu (valid range: 1-5).
    pub menu_trigger_button: u32,
    /// Re-dispatch every pointer-up as a move so idle handlers see the
    /// final pointer position.
    pub synthetic_move_on_up: bool,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            menu_trigger_button: 3,
            synthetic_move_on_up: true,
        }
    }
}
