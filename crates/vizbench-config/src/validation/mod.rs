//! Full configuration validation.
//!
//! Each section has its own submodule; this orchestrator calls them all
//! and collects errors into a single `ConfigError`.

mod helpers;
mod layout;
mod misc;


use crate::schema::VizbenchConfig;
use vizbench_common::ConfigError;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &VizbenchConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    layout::validate_layout(&mut errors, config);
    misc::validate_input(&mut errors, config);
    misc::validate_loader(&mut errors, config);
    misc::validate_bundles(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}
