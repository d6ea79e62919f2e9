//! Builders and test doubles shared by the planner, executor, and loader
//! tests.

use std::sync::Arc;

use chrono::{DateTime, TimeZone, Utc};
use vizbench_panes::{
    Descriptor, Display, MatchState, PaneContainer, PaneGrid, Resource, ResourceData,
    ResourceError, ResourceFactory, ResourceList, ResourcePair, ResourceProperties,
    StandardTimeMatcher, StaticResourceFactory, TimeMatcher,
};
use vizbench_platform::InlineExecutor;

use crate::context::LoadContext;
use crate::model::Bundle;

pub fn at_hour(hour: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 5, 1, hour, 0, 0).unwrap()
}

pub fn matcher_at(hour: u32) -> Arc<dyn TimeMatcher> {
    Arc::new(StandardTimeMatcher::new(Some(at_hour(hour)), 6))
}

pub fn data(kind: &str, name: &str) -> Arc<ResourcePair> {
    Arc::new(ResourcePair::new(
        ResourceData::new(kind, name),
        ResourceProperties::default(),
    ))
}

pub fn map(name: &str) -> Arc<ResourcePair> {
    Arc::new(ResourcePair::new(
        ResourceData::new("map", name),
        ResourceProperties::map_layer(),
    ))
}

pub fn display(pairs: Vec<Arc<ResourcePair>>, matcher: Option<Arc<dyn TimeMatcher>>) -> Arc<Display> {
    Display::new(Descriptor::new(ResourceList::new(pairs), matcher))
}

pub fn radar(name: &str) -> Arc<Display> {
    display(vec![data("radar", name)], None)
}

pub fn bundle(displays: Vec<Arc<Display>>) -> Bundle {
    Bundle::new(None, None, displays)
}

pub fn elastic(name: &str, panes: usize) -> Arc<dyn PaneContainer> {
    Arc::new(PaneGrid::with_options(
        name,
        vizbench_panes::GridOptions {
            initial_panes: panes,
            ..vizbench_panes::GridOptions::default()
        },
    ))
}

pub fn fixed(name: &str, panes: usize) -> Arc<dyn PaneContainer> {
    Arc::new(PaneGrid::fixed(name, panes))
}

pub fn inline_ctx() -> (LoadContext, Arc<InlineExecutor>) {
    let ui = Arc::new(InlineExecutor::new());
    let ctx = LoadContext::new(ui.clone(), Arc::new(StaticResourceFactory));
    (ctx, ui)
}

/// Factory that rejects or panics on resources of one kind.
pub struct TrapFactory {
    pub kind: &'static str,
    pub panic: bool,
}

impl ResourceFactory for TrapFactory {
    fn construct(
        &self,
        data: &ResourceData,
        descriptor: &Descriptor,
    ) -> Result<Box<dyn Resource>, ResourceError> {
        if data.kind == self.kind {
            if self.panic {
                panic!("factory exploded on {}", data.label());
            }
            return Err(ResourceError::new(data.label(), "no data available"));
        }
        StaticResourceFactory.construct(data, descriptor)
    }
}

/// Matcher whose load order is supplied by the test.
#[derive(Debug)]
pub struct ScriptedMatcher {
    pub order: fn(&[Arc<Display>]) -> Vec<Arc<Display>>,
}

impl TimeMatcher for ScriptedMatcher {
    fn display_load_order(&self, displays: &[Arc<Display>]) -> Vec<Arc<Display>> {
        (self.order)(displays)
    }

    fn state(&self) -> MatchState {
        MatchState::default()
    }

    fn copy_from(&self, _other: &dyn TimeMatcher) {}

    fn record_load(&self) -> u32 {
        0
    }

    fn reset_multiload(&self) {}
}
