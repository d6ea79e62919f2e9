//! Config path resolution and default file creation.

use std::path::{Path, PathBuf};
use tracing::info;
use vizbench_common::ConfigError;

use super::template::default_config_toml;

/// Environment variable that overrides the config file location.
pub const CONFIG_PATH_ENV: &str = "VIZBENCH_CONFIG";

/// Get the config file path: `$VIZBENCH_CONFIG` if set, otherwise
/// `<os config dir>/vizbench/config.toml`.
pub fn default_config_path() -> Result<PathBuf, ConfigError> {
    if let Some(path) = std::env::var_os(CONFIG_PATH_ENV) {
        return Ok(PathBuf::from(path));
    }
    let config_dir = dirs::config_dir()
        .ok_or_else(|| ConfigError::ParseError("could not determine config directory".into()))?;
    Ok(config_dir.join("vizbench").join("config.toml"))
}

/// Create a default TOML config file with documentation comments.
///
/// An existing file is left alone.
pub fn create_default_config(path: &Path) -> Result<(), ConfigError> {
    if path.exists() {
        return Ok(());
    }
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| {
            ConfigError::ParseError(format!(
                "failed to create config directory {}: {e}",
                parent.display()
            ))
        })?;
    }

    std::fs::write(path, default_config_toml()).map_err(|e| {
        ConfigError::ParseError(format!(
            "failed to write default config to {}: {e}",
            path.display()
        ))
    })?;

    info!("created default config at {}", path.display());
    Ok(())
}
