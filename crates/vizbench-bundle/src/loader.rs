//! The bundle loader job: plan, execute, then the post-load bookkeeping.

use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Instant;

use tracing::{error, info, info_span, warn};
use vizbench_common::{new_correlation_id, Event, HistoryEntry, LoadError};
use vizbench_panes::PaneContainer;
use vizbench_platform::panic_message;

use crate::context::LoadContext;
use crate::execute::execute;
use crate::model::Bundle;
use crate::plan::plan_load;
use crate::report::LoadReport;

/// Loads one bundle into one container.
///
/// Callers serialize loads per container; an in-flight load is never
/// cancelled.
pub struct BundleLoader {
    container: Arc<dyn PaneContainer>,
    bundle: Arc<Bundle>,
    ctx: LoadContext,
}

impl BundleLoader {
    /// Create a loader. A named bundle renames the container's part through
    /// a deferred UI hand-off.
    pub fn new(container: Arc<dyn PaneContainer>, bundle: Arc<Bundle>, ctx: LoadContext) -> Self {
        if let Some(name) = bundle.name() {
            let target = Arc::clone(&container);
            let events = Arc::clone(&ctx.events);
            let name = name.to_string();
            let queued = ctx.ui.run_deferred(Box::new(move || {
                if target.set_part_name(&name) {
                    events.publish(Event::PartRenamed {
                        container: target.name(),
                        name,
                    });
                }
            }));
            if let Err(e) = queued {
                warn!(error = %e, "could not queue part rename");
            }
        }
        Self {
            container,
            bundle,
            ctx,
        }
    }

    pub fn container(&self) -> &Arc<dyn PaneContainer> {
        &self.container
    }

    pub fn bundle(&self) -> &Arc<Bundle> {
        &self.bundle
    }

    /// Load on the calling thread.
    ///
    /// When some non-anchor panes fail, the panes that loaded keep their
    /// displays, the container is still refreshed, and the failures come
    /// back as [`LoadError::Workers`].
    pub fn run(&self) -> Result<LoadReport, LoadError> {
        let load_id = new_correlation_id();
        let container_name = self.container.name();
        let span = info_span!("bundle_load", load_id = %load_id, container = %container_name);
        let _entered = span.enter();
        let started = Instant::now();

        info!(
            bundle = self.bundle.name().unwrap_or(""),
            displays = self.bundle.len(),
            "loading bundle"
        );

        let plan = plan_load(&self.container, &self.bundle, &self.ctx).inspect_err(|e| {
            error!(error = %e, "bundle load planning failed");
        })?;
        let execution = execute(&plan, &self.ctx).inspect_err(|e| {
            error!(error = %e, "anchor pane load failed");
        })?;

        self.finish();

        let elapsed_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);
        info!(elapsed_ms, "total bundle retrieval");

        if !execution.failures.is_empty() {
            let err = LoadError::Workers {
                total: plan.pairings.len().saturating_sub(1),
                failures: execution.failures,
            };
            error!(error = %err, "bundle loaded with failures");
            return Err(err);
        }

        Ok(LoadReport {
            load_id,
            container: container_name,
            bundle: self.bundle.name().map(str::to_string),
            pairings: execution.pairings,
            workers: execution.workers,
            panes_added: plan.resize.added,
            panes_removed: plan.resize.removed,
            map_layers_shared: plan.map_layers_shared,
            elapsed_ms,
        })
    }

    /// Load on a background thread.
    pub fn schedule(self) -> Result<LoadHandle, LoadError> {
        let handle = thread::Builder::new()
            .name("bundle-loader".into())
            .spawn(move || self.run())?;
        Ok(LoadHandle { handle })
    }

    /// Loop properties, refresh, then history and the global UI binding for
    /// editors.
    fn finish(&self) {
        if let Some(props) = self.bundle.loop_properties() {
            self.container.set_loop_properties(props.clone());
        }
        self.container.refresh();

        let container = self.container.name();
        self.ctx.events.publish(Event::BundleLoaded {
            container: container.clone(),
            bundle: self.bundle.name().map(str::to_string),
            panes: self.bundle.len(),
        });

        if !self.container.is_editor() {
            return;
        }

        let entry = HistoryEntry::new(
            container.clone(),
            self.bundle.name().map(str::to_string),
            self.bundle.len(),
        );
        let events = Arc::clone(&self.ctx.events);
        let history = self.ctx.ui.run_deferred(Box::new(move || {
            events.publish(Event::HistoryRecorded(entry));
        }));

        let events = Arc::clone(&self.ctx.events);
        let binding = self.ctx.ui.run_deferred(Box::new(move || {
            events.publish(Event::UiBindingUpdated { container });
        }));

        for result in [history, binding] {
            if let Err(e) = result {
                warn!(error = %e, "post-load ui hand-off failed");
            }
        }
    }
}

/// Handle to a scheduled load.
pub struct LoadHandle {
    handle: JoinHandle<Result<LoadReport, LoadError>>,
}

impl LoadHandle {
    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    /// Wait for the load to finish.
    pub fn join(self) -> Result<LoadReport, LoadError> {
        self.handle
            .join()
            .map_err(|payload| LoadError::Panicked(panic_message(payload.as_ref())))?
    }
}

/// Schedule `bundle` into `container` in the background.
pub fn load_to(
    container: Arc<dyn PaneContainer>,
    bundle: Arc<Bundle>,
    ctx: LoadContext,
) -> Result<LoadHandle, LoadError> {
    BundleLoader::new(container, bundle, ctx).schedule()
}
