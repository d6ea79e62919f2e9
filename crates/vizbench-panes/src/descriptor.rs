//! Descriptors: the resource list and time-matching state behind a display.

use std::fmt;
use std::sync::{Arc, Mutex, RwLock};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::resource::{ResourceError, ResourceFactory, ResourceList};
use crate::time_matcher::TimeMatcher;

/// Animation frame bookkeeping copied along with the time matcher.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrameState {
    pub frame_count: usize,
    pub current_frame: usize,
}

/// Owns a resource list and an optional time matcher reference.
///
/// Compared by identity (`Arc::ptr_eq`), never by value.
#[derive(Default)]
pub struct Descriptor {
    resources: Mutex<ResourceList>,
    time_matcher: RwLock<Option<Arc<dyn TimeMatcher>>>,
    frames: Mutex<FrameState>,
}

impl Descriptor {
    pub fn new(resources: ResourceList, time_matcher: Option<Arc<dyn TimeMatcher>>) -> Self {
        Self {
            resources: Mutex::new(resources),
            time_matcher: RwLock::new(time_matcher),
            frames: Mutex::new(FrameState::default()),
        }
    }

    pub fn same(a: &Arc<Descriptor>, b: &Arc<Descriptor>) -> bool {
        Arc::ptr_eq(a, b)
    }

    /// Snapshot of the resource list. Pairs are shared, the list is not.
    pub fn resource_list(&self) -> ResourceList {
        self.resources
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    /// Mutate the resource list under its lock.
    pub fn with_resources_mut<R>(&self, f: impl FnOnce(&mut ResourceList) -> R) -> R {
        let mut list = self.resources.lock().unwrap_or_else(|e| e.into_inner());
        f(&mut list)
    }

    pub fn time_matcher(&self) -> Option<Arc<dyn TimeMatcher>> {
        self.time_matcher
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    pub fn set_time_matcher(&self, matcher: Option<Arc<dyn TimeMatcher>>) {
        *self.time_matcher.write().unwrap_or_else(|e| e.into_inner()) = matcher;
    }

    pub fn has_time_matcher(&self) -> bool {
        self.time_matcher
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .is_some()
    }

    pub fn reference_time(&self) -> Option<DateTime<Utc>> {
        self.time_matcher().and_then(|m| m.state().reference_time)
    }

    pub fn frame_state(&self) -> FrameState {
        *self.frames.lock().unwrap_or_else(|e| e.into_inner())
    }

    pub fn set_frame_state(&self, frames: FrameState) {
        *self.frames.lock().unwrap_or_else(|e| e.into_inner()) = frames;
    }

    /// Adopt `authority`'s time matcher and frame state so both descriptors
    /// step through time together.
    pub fn synchronize_time_matching(&self, authority: &Descriptor) {
        if std::ptr::eq(self, authority) {
            return;
        }
        self.set_time_matcher(authority.time_matcher());
        self.set_frame_state(authority.frame_state());
    }

    /// Instantiate every resource in the list against this descriptor.
    ///
    /// The list lock is released before any factory call so a slow resource
    /// does not block readers. Returns how many instances were built.
    pub fn instantiate_resources(
        &self,
        factory: &dyn ResourceFactory,
        force: bool,
    ) -> Result<usize, ResourceError> {
        let list = self.resource_list();
        let mut built = 0;
        for pair in list.iter() {
            if pair.instantiate(self, factory, force)? {
                built += 1;
            }
        }
        Ok(built)
    }

    /// Dispose every pair this descriptor holds alone. Pairs still referenced
    /// from another list (shared map layers) stay alive.
    pub fn dispose_resources(&self) {
        let list = self.resources.lock().unwrap_or_else(|e| e.into_inner());
        for pair in list.iter() {
            if Arc::strong_count(pair) == 1 {
                pair.dispose();
            }
        }
    }
}

impl fmt::Debug for Descriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Descriptor")
            .field("resources", &self.resource_list().len())
            .field("time_matcher", &self.has_time_matcher())
            .field("frames", &self.frame_state())
            .finish()
    }
}
