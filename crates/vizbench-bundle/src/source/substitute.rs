use std::collections::HashMap;
use std::sync::LazyLock;

use regex::{Captures, Regex};

static VARIABLE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\$\{([A-Za-z0-9_.\-]+)\}").expect("bundle variable pattern must compile")
});

/// Replace `${name}` occurrences with values from `variables`. Unknown
/// names are left as written.
pub fn substitute_variables(text: &str, variables: &HashMap<String, String>) -> String {
    if variables.is_empty() {
        return text.to_string();
    }
    VARIABLE_RE
        .replace_all(text, |caps: &Captures<'_>| {
            variables
                .get(&caps[1])
                .cloned()
                .unwrap_or_else(|| caps[0].to_string())
        })
        .into_owned()
}
