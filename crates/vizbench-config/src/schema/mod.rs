//! Configuration schema types for vizbench.
//!
//! All structs use `serde(default)` so partial configs work correctly.

mod bundles;
mod input;
mod layout;
mod loader;
mod system;

pub use bundles::*;
pub use input::*;
pub use layout::*;
pub use loader::*;
pub use system::*;

use serde::{Deserialize, Serialize};

/// Current config schema version.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Root configuration for vizbench.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
#[derive(Default)]
pub struct VizbenchConfig {
    pub loader: LoaderConfig,
    pub layout: LayoutConfig,
    pub input: InputConfig,
    pub bundles: BundlesConfig,
    pub logging: LoggingConfig,
}

// =============================================================================
// Tests
// =============================================================================
