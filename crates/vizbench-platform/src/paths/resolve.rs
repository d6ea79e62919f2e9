use std::path::PathBuf;

use vizbench_common::PlatformError;
use vizbench_config::schema::BundlesConfig;

pub(super) const APP_NAME: &str = "vizbench";

/// Returns the platform-specific data directory for vizbench.
///
/// - macOS: `~/Library/Application Support/vizbench`
/// - Linux: `$XDG_DATA_HOME/vizbench` (defaults to `~/.local/share/vizbench`)
/// - Windows: `%APPDATA%\vizbench`
pub fn data_dir() -> Result<PathBuf, PlatformError> {
    Ok(dirs::data_dir()
        .ok_or_else(|| PlatformError::PathError("could not determine data directory".into()))?
        .join(APP_NAME))
}

/// Per-user bundle directory, `data_dir()/bundles`.
pub fn user_bundle_dir() -> Result<PathBuf, PlatformError> {
    Ok(data_dir()?.join("bundles"))
}

/// Roots searched for bundle file locations, most specific first.
///
/// Configured search paths win. With none configured the user bundle
/// directory is the only root.
pub fn bundle_search_roots(config: &BundlesConfig) -> Result<Vec<PathBuf>, PlatformError> {
    if !config.search_paths.is_empty() {
        return Ok(config.search_paths.clone());
    }
    Ok(vec![user_bundle_dir()?])
}
