//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> String {
    r##"# vizbench configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

[loader]
# reuse_map_layers = true          # share equal map layers across sibling panes
# parallel_instantiation = true    # one worker thread per non-anchor pane
# worker_name_prefix = "bundle-load"

[layout]
# max_panes = 9          # 1-16
# elastic = true         # grids may grow/shrink to match a bundle
# initial_panes = 1      # 1-16

[input]
# menu_trigger_button = 3      # 1-5
# synthetic_move_on_up = true

[bundles]
# search_paths = ["~/.local/share/vizbench/bundles"]

[logging]
level = "INFO"           # DEBUG, INFO, WARNING, ERROR
"##
    .to_string()
}
