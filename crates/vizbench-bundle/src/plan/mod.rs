//! Load planning: cardinality, map-layer sharing, temporal order, and the
//! (pane, display) pairing list.

mod cardinality;
mod map_layers;
mod ordering;


pub use cardinality::Resize;

use std::sync::Arc;

use tracing::debug;
use vizbench_common::LoadError;
use vizbench_panes::{Display, Pane, PaneContainer};

use crate::context::LoadContext;
use crate::model::Bundle;

/// One unit of load work: show `display` in `pane`.
#[derive(Debug, Clone)]
pub struct Pairing {
    pub pane: Arc<Pane>,
    pub display: Arc<Display>,
}

/// Pairings in load order. The first is the anchor.
#[derive(Debug, Default)]
pub struct LoadPlan {
    pub pairings: Vec<Pairing>,
    pub resize: Resize,
    pub map_layers_shared: usize,
    /// Bundle index of the display whose time matcher set the order.
    pub authority: Option<usize>,
}

impl LoadPlan {
    pub fn anchor(&self) -> Option<&Pairing> {
        self.pairings.first()
    }
}

/// Plan loading `bundle` into `container`.
///
/// Each display is paired with the pane at the display's bundle position;
/// the list itself follows the load order.
pub fn plan_load(
    container: &Arc<dyn PaneContainer>,
    bundle: &Bundle,
    ctx: &LoadContext,
) -> Result<LoadPlan, LoadError> {
    let initial = container.panes().len();
    let resize = cardinality::reconcile(container, bundle, ctx)?;

    let map_layers_shared = if resize.is_noop() && initial > 1 && ctx.config.reuse_map_layers {
        map_layers::share_map_layers(bundle)
    } else {
        0
    };

    let panes = container.panes();
    let order = ordering::load_order(bundle, panes.len())?;

    let displays = bundle.displays();
    let mut pairings = Vec::with_capacity(order.displays.len());
    for display in order.displays {
        let pane = displays
            .iter()
            .position(|d| Display::same(d, &display))
            .and_then(|index| panes.get(index))
            .ok_or(LoadError::PaneCardinality {
                panes: panes.len(),
                displays: displays.len(),
            })?;
        pairings.push(Pairing {
            pane: Arc::clone(pane),
            display,
        });
    }

    debug!(
        pairings = pairings.len(),
        added = resize.added,
        removed = resize.removed,
        map_layers_shared,
        "load planned"
    );
    Ok(LoadPlan {
        pairings,
        resize,
        map_layers_shared,
        authority: order.authority,
    })
}
