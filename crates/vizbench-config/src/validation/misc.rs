//! Validation for the input, loader, and bundles sections.

use crate::schema::VizbenchConfig;

use super::helpers::validate_range;

pub(crate) fn validate_input(errors: &mut Vec<String>, config: &VizbenchConfig) {
    validate_range(
        errors,
        "input.menu_trigger_button",
        config.input.menu_trigger_button,
        1,
        5,
    );
}

pub(crate) fn validate_loader(errors: &mut Vec<String>, config: &VizbenchConfig) {
    let prefix = &config.loader.worker_name_prefix;
    if prefix.trim().is_empty() {
        errors.push("loader.worker_name_prefix must not be empty".into());
    }
}

/// Search roots must be absolute; relative roots would resolve against
/// whatever the working directory happens to be.
pub(crate) fn validate_bundles(errors: &mut Vec<String>, config: &VizbenchConfig) {
    for path in &config.bundles.search_paths {
        if !path.is_absolute() {
            errors.push(format!(
                "bundles.search_paths entry '{}' is not absolute",
                path.display()
            ));
        }
    }
}
