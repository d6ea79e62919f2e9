//! Turning bundle text into a [`Bundle`].

mod resolver;
mod substitute;

pub use resolver::{PathResolver, SearchPathResolver};
pub use substitute::substitute_variables;

use std::collections::HashMap;

use tracing::debug;
use vizbench_common::LoadError;

use crate::model::{Bundle, BundleDoc};

/// Where bundle text comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BundleSource {
    /// A location resolved through a [`PathResolver`].
    File(String),
    /// The bundle text itself.
    Inline(String),
}

/// Read, substitute, and unmarshal a bundle.
pub fn read_bundle(
    source: &BundleSource,
    variables: &HashMap<String, String>,
    resolver: &dyn PathResolver,
) -> Result<Bundle, LoadError> {
    match source {
        BundleSource::File(location) => {
            let path = resolver
                .resolve(location)
                .ok_or_else(|| LoadError::SourceResolution(location.clone()))?;
            debug!(location = %location, path = %path.display(), "reading bundle file");
            let text = std::fs::read_to_string(&path)?;
            unmarshal_bundle(&text, variables)
        }
        BundleSource::Inline(text) => unmarshal_bundle(text, variables),
    }
}

pub fn unmarshal_bundle(
    text: &str,
    variables: &HashMap<String, String>,
) -> Result<Bundle, LoadError> {
    let text = substitute_variables(text, variables);
    let doc: BundleDoc =
        serde_json::from_str(&text).map_err(|e| LoadError::Unmarshal(e.to_string()))?;
    Ok(Bundle::from(doc))
}
