use tracing::debug;

use crate::model::Bundle;

/// Point value-equal map layers of displays 1.. at display 0's pair, so
/// property edits on one pane's map layer show in every pane.
///
/// Returns how many entries now share display 0's pair.
pub(crate) fn share_map_layers(bundle: &Bundle) -> usize {
    let Some((first, rest)) = bundle.displays().split_first() else {
        return 0;
    };
    let originals = first.descriptor().resource_list().map_layers();
    if originals.is_empty() {
        return 0;
    }

    let shared: usize = rest
        .iter()
        .map(|d| {
            d.descriptor()
                .with_resources_mut(|list| list.share_map_layers(&originals))
        })
        .sum();
    if shared > 0 {
        debug!(shared, "map layers shared across panes");
    }
    shared
}
