//! Matching the container's pane count to the bundle's display count.

use std::sync::Arc;

use tracing::{debug, info};
use vizbench_common::{Event, EventBus, LoadError};
use vizbench_panes::{ContainerError, Display, Pane, PaneContainer};
use vizbench_platform::run_blocking_with;

use crate::context::LoadContext;
use crate::model::Bundle;

/// Panes added and removed to make the counts agree.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Resize {
    pub added: usize,
    pub removed: usize,
}

impl Resize {
    pub fn is_noop(&self) -> bool {
        self.added == 0 && self.removed == 0
    }
}

/// Grow or shrink an elastic container so it has one pane per display.
///
/// The change runs on the UI thread. A fixed container, a container that
/// refuses the change, or counts that still differ afterwards, fail with
/// [`LoadError::PaneCardinality`].
pub(crate) fn reconcile(
    container: &Arc<dyn PaneContainer>,
    bundle: &Bundle,
    ctx: &LoadContext,
) -> Result<Resize, LoadError> {
    let panes = container.panes();
    let displays = bundle.displays();
    if panes.len() == displays.len() {
        return Ok(Resize::default());
    }

    let mismatch = |panes: usize| LoadError::PaneCardinality {
        panes,
        displays: displays.len(),
    };
    if !container.is_elastic() || displays.is_empty() {
        return Err(mismatch(panes.len()));
    }

    info!(
        panes = panes.len(),
        displays = displays.len(),
        "resizing container to fit bundle"
    );

    let target = Arc::clone(container);
    let events = Arc::clone(&ctx.events);
    let excess: Vec<Arc<Pane>> = panes.iter().skip(displays.len()).cloned().collect();
    let extra: Vec<Arc<Display>> = displays.iter().skip(panes.len()).cloned().collect();

    let applied = run_blocking_with(ctx.ui.as_ref(), move || {
        apply(target.as_ref(), &events, &excess, &extra)
    })?;
    let resize = match applied {
        Ok(resize) => resize,
        Err(e) => {
            debug!(error = %e, "container refused resize");
            return Err(mismatch(container.panes().len()));
        }
    };

    let now = container.panes().len();
    if now != displays.len() {
        return Err(mismatch(now));
    }
    Ok(resize)
}

/// Runs on the UI thread.
fn apply(
    container: &dyn PaneContainer,
    events: &EventBus,
    excess: &[Arc<Pane>],
    extra: &[Arc<Display>],
) -> Result<Resize, ContainerError> {
    let mut resize = Resize::default();

    for pane in excess {
        container.remove_pane(pane)?;
        events.publish(Event::PaneClosed(pane.id));
        resize.removed += 1;
    }

    let mut added: Vec<Arc<Pane>> = Vec::with_capacity(extra.len());
    for display in extra {
        match container.add_pane(Arc::clone(display)) {
            Ok(pane) => added.push(pane),
            Err(e) => {
                // Seeded displays belong to the bundle; detach before undo.
                for pane in added.iter().rev() {
                    pane.take_display();
                    let _ = container.remove_pane(pane);
                }
                debug!(error = %e, rolled_back = added.len(), "pane add failed");
                return Err(e);
            }
        }
    }
    for pane in &added {
        events.publish(Event::PaneOpened(pane.id));
    }
    resize.added = added.len();
    Ok(resize)
}
