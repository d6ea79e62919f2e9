//! Bundle documents and the immutable runtime bundle built from them.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use vizbench_panes::{
    Descriptor, Display, FrameState, LoopProperties, ResourceData, ResourceList, ResourcePair,
    ResourceProperties, StandardTimeMatcher, TimeMatcher,
};

/// Serialized form of a bundle.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BundleDoc {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub loop_properties: Option<LoopProperties>,
    #[serde(default)]
    pub displays: Vec<DisplayDoc>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DisplayDoc {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_matcher: Option<TimeMatcherDoc>,
    #[serde(default)]
    pub resources: Vec<ResourceDoc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResourceDoc {
    #[serde(flatten)]
    pub data: ResourceData,
    #[serde(default)]
    pub properties: ResourceProperties,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TimeMatcherDoc {
    #[serde(default)]
    pub reference_time: Option<DateTime<Utc>>,
    #[serde(default)]
    pub frame_count: usize,
}

/// An ordered set of displays plus shared playback settings. Never mutated
/// once handed to a loader.
#[derive(Debug)]
pub struct Bundle {
    name: Option<String>,
    loop_properties: Option<LoopProperties>,
    displays: Vec<Arc<Display>>,
}

impl Bundle {
    pub fn new(
        name: Option<String>,
        loop_properties: Option<LoopProperties>,
        displays: Vec<Arc<Display>>,
    ) -> Self {
        Self {
            name,
            loop_properties,
            displays,
        }
    }

    /// The bundle name, if set and non-empty.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref().filter(|n| !n.is_empty())
    }

    pub fn loop_properties(&self) -> Option<&LoopProperties> {
        self.loop_properties.as_ref()
    }

    pub fn displays(&self) -> &[Arc<Display>] {
        &self.displays
    }

    pub fn len(&self) -> usize {
        self.displays.len()
    }

    pub fn is_empty(&self) -> bool {
        self.displays.is_empty()
    }
}

impl From<BundleDoc> for Bundle {
    fn from(doc: BundleDoc) -> Self {
        let displays = doc.displays.into_iter().map(build_display).collect();
        Bundle::new(doc.name, doc.loop_properties, displays)
    }
}

fn build_display(doc: DisplayDoc) -> Arc<Display> {
    let resources: ResourceList = doc
        .resources
        .into_iter()
        .map(|r| Arc::new(ResourcePair::new(r.data, r.properties)))
        .collect();

    let matcher = doc.time_matcher.map(|tm| {
        Arc::new(StandardTimeMatcher::new(tm.reference_time, tm.frame_count)) as Arc<dyn TimeMatcher>
    });
    let frames = matcher
        .as_ref()
        .map(|m| {
            let count = m.state().frame_count;
            FrameState {
                frame_count: count,
                current_frame: count.saturating_sub(1),
            }
        })
        .unwrap_or_default();

    let descriptor = Descriptor::new(resources, matcher);
    descriptor.set_frame_state(frames);
    Display::new(descriptor)
}
