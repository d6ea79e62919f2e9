use std::sync::Arc;
use std::thread;

use vizbench_common::LoadError;
use vizbench_panes::{Display, StandardTimeMatcher, TimeMatcher};

use super::*;
use crate::plan::{plan_load, LoadPlan, Pairing};
use crate::test_support::*;

fn caller_name() -> Option<String> {
    thread::current().name().map(str::to_string)
}

#[test]
fn empty_plan_is_a_noop() {
    let (ctx, ui) = inline_ctx();
    let execution = execute(&LoadPlan::default(), &ctx).unwrap();
    assert!(execution.pairings.is_empty());
    assert_eq!(execution.workers, 0);
    assert_eq!(ui.blocking_count(), 0);
}

#[test]
fn anchor_runs_on_caller_and_the_rest_on_named_workers() {
    let (ctx, _) = inline_ctx();
    let container = fixed("fixed", 3);
    let b = bundle(vec![radar("a"), radar("b"), radar("c")]);
    let plan = plan_load(&container, &b, &ctx).unwrap();

    let execution = execute(&plan, &ctx).unwrap();

    assert_eq!(execution.workers, 2);
    assert!(execution.failures.is_empty());
    assert_eq!(execution.pairings.len(), 3);
    assert!(execution.pairings[0].anchor);
    assert_eq!(execution.pairings[0].thread, caller_name());
    for (report, pane) in execution.pairings[1..].iter().zip(&container.panes()[1..]) {
        assert_eq!(
            report.thread.as_deref(),
            Some(format!("bundle-load-{}", pane.id).as_str())
        );
    }
    for (pane, display) in container.panes().iter().zip(b.displays()) {
        assert!(Display::same(&pane.display().unwrap(), display));
    }
}

#[test]
fn swap_disposes_the_previous_display() {
    let (ctx, _) = inline_ctx();
    let container = fixed("fixed", 1);
    let old = radar("old");
    container.panes()[0].set_display(Arc::clone(&old));
    let b = bundle(vec![radar("new")]);
    let plan = plan_load(&container, &b, &ctx).unwrap();

    let execution = execute(&plan, &ctx).unwrap();

    assert!(execution.pairings[0].swapped);
    assert!(old.is_disposed());
    assert!(!b.displays()[0].is_disposed());
}

#[test]
fn pane_already_showing_the_display_is_not_swapped() {
    let (ctx, ui) = inline_ctx();
    let container = fixed("fixed", 1);
    let shown = radar("a");
    container.panes()[0].set_display(Arc::clone(&shown));
    let plan = LoadPlan {
        pairings: vec![Pairing {
            pane: container.panes()[0].clone(),
            display: Arc::clone(&shown),
        }],
        ..LoadPlan::default()
    };

    let execution = execute(&plan, &ctx).unwrap();

    assert!(!execution.pairings[0].swapped);
    assert!(!shown.is_disposed());
    assert_eq!(ui.blocking_count(), 0);
}

#[test]
fn resources_are_rebuilt_on_every_load() {
    let (ctx, _) = inline_ctx();
    let container = fixed("fixed", 1);
    let pair = data("radar", "a");
    let d = display(vec![Arc::clone(&pair)], None);
    let plan = LoadPlan {
        pairings: vec![Pairing {
            pane: container.panes()[0].clone(),
            display: Arc::clone(&d),
        }],
        ..LoadPlan::default()
    };

    execute(&plan, &ctx).unwrap();
    execute(&plan, &ctx).unwrap();

    assert_eq!(pair.generation(), 2);
    assert!(pair.is_instantiated());
}

#[test]
fn anchor_matcher_takes_incoming_state_and_resets_multiload() {
    let (ctx, _) = inline_ctx();
    let container = fixed("fixed", 1);
    let current = Arc::new(StandardTimeMatcher::new(Some(at_hour(6)), 4));
    current.record_load();
    current.record_load();
    let current_dyn: Arc<dyn TimeMatcher> = current.clone();
    container.panes()[0].set_display(display(vec![], Some(current_dyn)));

    let incoming = display(vec![data("radar", "a")], Some(matcher_at(12)));
    let plan = LoadPlan {
        pairings: vec![Pairing {
            pane: container.panes()[0].clone(),
            display: incoming,
        }],
        ..LoadPlan::default()
    };

    execute(&plan, &ctx).unwrap();

    let state = current.state();
    assert_eq!(state.reference_time, Some(at_hour(12)));
    assert_eq!(state.frame_count, 6);
    assert_eq!(state.multiload, 0);
}

#[test]
fn anchor_failure_stops_before_any_worker() {
    let (mut ctx, _) = inline_ctx();
    ctx.factory = Arc::new(TrapFactory {
        kind: "broken",
        panic: false,
    });
    let container = fixed("fixed", 2);
    let b = bundle(vec![
        display(vec![data("broken", "x")], None),
        radar("b"),
    ]);
    let plan = plan_load(&container, &b, &ctx).unwrap();

    let err = execute(&plan, &ctx).unwrap_err();

    assert!(matches!(
        err,
        LoadError::Instantiation { ref resource, .. } if resource == "broken:x"
    ));
    assert!(container.panes()[1].display().is_none());
}

#[test]
fn worker_failures_are_collected() {
    let (mut ctx, _) = inline_ctx();
    ctx.factory = Arc::new(TrapFactory {
        kind: "broken",
        panic: false,
    });
    let container = fixed("fixed", 3);
    let b = bundle(vec![
        radar("a"),
        display(vec![data("broken", "x")], None),
        radar("c"),
    ]);
    let plan = plan_load(&container, &b, &ctx).unwrap();

    let execution = execute(&plan, &ctx).unwrap();

    assert_eq!(execution.pairings.len(), 2);
    assert_eq!(execution.failures.len(), 1);
    assert!(matches!(
        execution.failures[0],
        LoadError::Instantiation { pane, .. } if pane == container.panes()[1].id
    ));
    // Panes that loaded keep their displays.
    assert!(Display::same(
        &container.panes()[2].display().unwrap(),
        &b.displays()[2]
    ));
}

#[test]
fn worker_panics_are_collected() {
    let (mut ctx, _) = inline_ctx();
    ctx.factory = Arc::new(TrapFactory {
        kind: "volatile",
        panic: true,
    });
    let container = fixed("fixed", 2);
    let b = bundle(vec![radar("a"), display(vec![data("volatile", "x")], None)]);
    let plan = plan_load(&container, &b, &ctx).unwrap();

    let execution = execute(&plan, &ctx).unwrap();

    assert_eq!(execution.failures.len(), 1);
    match &execution.failures[0] {
        LoadError::WorkerPanicked { pane, message } => {
            assert_eq!(*pane, container.panes()[1].id);
            assert!(message.contains("factory exploded on volatile:x"));
        }
        other => panic!("unexpected failure: {other}"),
    }
}

#[test]
fn sequential_mode_runs_everything_on_the_caller() {
    let (mut ctx, _) = inline_ctx();
    ctx.config.parallel_instantiation = false;
    let container = fixed("fixed", 3);
    let b = bundle(vec![radar("a"), radar("b"), radar("c")]);
    let plan = plan_load(&container, &b, &ctx).unwrap();

    let execution = execute(&plan, &ctx).unwrap();

    assert_eq!(execution.workers, 0);
    assert!(execution
        .pairings
        .iter()
        .all(|p| p.thread == caller_name()));
}
