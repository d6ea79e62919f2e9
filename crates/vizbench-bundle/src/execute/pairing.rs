use std::sync::Arc;
use std::thread;

use tracing::debug;
use vizbench_common::LoadError;
use vizbench_panes::time_matcher::same_matcher;
use vizbench_panes::{Display, Pane};

use crate::context::LoadContext;
use crate::plan::Pairing;
use crate::report::PairingReport;

/// Bring the anchor pane's current time matcher in line with the incoming
/// display before anything is swapped.
pub(super) fn prepare_anchor(anchor: &Pairing) {
    let Some(dest) = anchor.pane.descriptor().and_then(|d| d.time_matcher()) else {
        return;
    };
    if let Some(src) = anchor.display.descriptor().time_matcher() {
        if !same_matcher(&dest, &src) {
            dest.copy_from(src.as_ref());
        }
    }
    dest.reset_multiload();
    debug!(pane = %anchor.pane.id, "anchor time matcher prepared");
}

/// Show the pairing's display in its pane and instantiate every resource
/// of the pane's descriptor, rebuilding ones that already exist. A
/// successful load counts toward the descriptor's time matcher.
pub(super) fn run_pairing(
    pairing: &Pairing,
    ctx: &LoadContext,
    anchor: bool,
) -> Result<PairingReport, LoadError> {
    let pane = &pairing.pane;
    let display = &pairing.display;

    let swapped = !pane.shows(display.descriptor());
    if swapped {
        let target = Arc::clone(pane);
        let incoming = Arc::clone(display);
        ctx.ui
            .run_blocking(Box::new(move || swap(&target, incoming)))?;
    }

    let descriptor = pane
        .descriptor()
        .ok_or_else(|| LoadError::Container(format!("{} shows no display", pane.id)))?;
    let resources = descriptor
        .instantiate_resources(ctx.factory.as_ref(), true)
        .map_err(|e| LoadError::Instantiation {
            pane: pane.id,
            resource: e.resource,
            reason: e.reason,
        })?;
    let multiload = descriptor.time_matcher().map(|m| m.record_load());

    debug!(pane = %pane.id, swapped, resources, ?multiload, "pane loaded");
    Ok(PairingReport {
        pane: pane.id,
        display: display.id().clone(),
        anchor,
        swapped,
        resources,
        thread: thread::current().name().map(str::to_string),
    })
}

/// Runs on the UI thread.
fn swap(pane: &Pane, incoming: Arc<Display>) {
    let previous = pane.set_display(Arc::clone(&incoming));
    if let Some(old) = previous {
        if !Display::same(&old, &incoming) {
            old.dispose();
        }
    }
}
