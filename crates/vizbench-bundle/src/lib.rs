//! Bundle loading: read a saved bundle, fit the container to it, and load
//! every display into its pane, the independent panes in parallel.

pub mod context;
pub mod execute;
pub mod loader;
pub mod model;
pub mod plan;
pub mod report;
pub mod source;

#[cfg(test)]
mod test_support;

pub use context::LoadContext;
pub use execute::{execute, Execution};
pub use loader::{load_to, BundleLoader, LoadHandle};
pub use model::{Bundle, BundleDoc, DisplayDoc, ResourceDoc, TimeMatcherDoc};
pub use plan::{plan_load, LoadPlan, Pairing, Resize};
pub use report::{LoadReport, PairingReport};
pub use source::{
    read_bundle, substitute_variables, unmarshal_bundle, BundleSource, PathResolver,
    SearchPathResolver,
};
