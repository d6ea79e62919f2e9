//! Layout configuration validation (pane counts).

use crate::schema::VizbenchConfig;

use super::helpers::validate_range;

/// Validate all layout-related constraints.
pub(crate) fn validate_layout(errors: &mut Vec<String>, config: &VizbenchConfig) {
    validate_range(errors, "layout.max_panes", config.layout.max_panes, 1, 16);
    validate_range(
        errors,
        "layout.initial_panes",
        config.layout.initial_panes,
        1,
        16,
    );
    if config.layout.initial_panes > config.layout.max_panes {
        errors.push(format!(
            "layout.initial_panes = {} exceeds layout.max_panes = {}",
            config.layout.initial_panes, config.layout.max_panes
        ));
    }
}
