//! Bundle file lookup configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Where bundle file locations are resolved.
///
/// Roots are searched in order; the first root containing the relative
/// bundle path wins. List the most specific level (user) first.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BundlesConfig {
    pub search_paths: Vec<PathBuf>,
}
