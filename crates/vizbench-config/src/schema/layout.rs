//! Pane grid layout configuration.

use serde::{Deserialize, Serialize};

/// Pane grid configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Maximum number of panes an elastic grid may grow to (valid range: 1-16).
    pub max_panes: u32,
    /// Whether grids may add and remove panes to match a bundle.
    pub elastic: bool,
    /// Number of panes a new grid starts with (valid range: 1-16).
    pub initial_panes: u32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            max_panes: 9,
            elastic: true,
            initial_panes: 1,
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_config_defaults() {
        let config = LayoutConfig::default();
        assert_eq!(config.max_panes, 9);
        assert!(config.elastic);
        assert_eq!(config.initial_panes, 1);
    }

    #[test]
    fn layout_config_partial_toml() {
        let toml_str = r#"
max_panes = 4
elastic = false
"#;
        let config: LayoutConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.max_panes, 4);
        assert!(!config.elastic);
        // Defaults preserved
        assert_eq!(config.initial_panes, 1);
    }
}
