//! Running a load plan: the anchor on the calling thread, every other
//! pairing on its own worker, all joined before returning.

mod pairing;

#[cfg(test)]
mod tests;

use std::panic::{catch_unwind, AssertUnwindSafe};
use std::thread;

use tracing::{warn, Span};
use vizbench_common::LoadError;
use vizbench_platform::panic_message;

use crate::context::LoadContext;
use crate::plan::LoadPlan;
use crate::report::PairingReport;

use pairing::{prepare_anchor, run_pairing};

/// Result of running a plan past its anchor.
#[derive(Debug, Default)]
pub struct Execution {
    /// Successful pairings: the anchor, then the rest in load order.
    pub pairings: Vec<PairingReport>,
    pub workers: usize,
    /// Failures of non-anchor pairings. The panes that did load keep
    /// their new displays.
    pub failures: Vec<LoadError>,
}

/// Execute `plan`. Anchor failures, panics included, return immediately,
/// before any worker starts; the remaining pairings' failures are collected in
/// [`Execution::failures`].
pub fn execute(plan: &LoadPlan, ctx: &LoadContext) -> Result<Execution, LoadError> {
    let Some((anchor, rest)) = plan.pairings.split_first() else {
        return Ok(Execution::default());
    };

    let anchored = catch_unwind(AssertUnwindSafe(|| {
        prepare_anchor(anchor);
        run_pairing(anchor, ctx, true)
    }))
    .map_err(|payload| LoadError::AnchorPanicked {
        pane: anchor.pane.id,
        message: panic_message(payload.as_ref()),
    })?;
    let mut execution = Execution {
        pairings: vec![anchored?],
        ..Execution::default()
    };

    if !ctx.config.parallel_instantiation {
        for pairing in rest {
            match run_pairing(pairing, ctx, false) {
                Ok(report) => execution.pairings.push(report),
                Err(e) => execution.failures.push(e),
            }
        }
        return Ok(execution);
    }

    let span = Span::current();
    thread::scope(|scope| {
        let mut handles = Vec::with_capacity(rest.len());
        for pairing in rest {
            let name = format!("{}-{}", ctx.config.worker_name_prefix, pairing.pane.id);
            let span = span.clone();
            let spawned = thread::Builder::new().name(name).spawn_scoped(scope, move || {
                let _entered = span.enter();
                run_pairing(pairing, ctx, false)
            });
            match spawned {
                Ok(handle) => {
                    execution.workers += 1;
                    handles.push((pairing.pane.id, handle));
                }
                Err(e) => {
                    warn!(pane = %pairing.pane.id, error = %e, "worker spawn failed, loading inline");
                    match run_pairing(pairing, ctx, false) {
                        Ok(report) => execution.pairings.push(report),
                        Err(e) => execution.failures.push(e),
                    }
                }
            }
        }

        for (pane, handle) in handles {
            match handle.join() {
                Ok(Ok(report)) => execution.pairings.push(report),
                Ok(Err(e)) => execution.failures.push(e),
                Err(payload) => execution.failures.push(LoadError::WorkerPanicked {
                    pane,
                    message: panic_message(payload.as_ref()),
                }),
            }
        }
    });

    Ok(execution)
}
