use serde::{Deserialize, Serialize};

/// Handler tiers, lowest first. Higher tiers see short-circuiting events
/// before lower ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputPriority {
    /// Handlers installed by the active perspective.
    Perspective,
    SystemResourceLow,
    Resource,
    SystemResource,
    Part,
    Highest,
}

impl Default for InputPriority {
    fn default() -> Self {
        InputPriority::Resource
    }
}
