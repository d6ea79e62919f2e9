//! Renderable displays.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tracing::debug;
use vizbench_common::DisplayId;

use crate::descriptor::Descriptor;

/// A renderable scene root. Displays are always handled as `Arc<Display>`
/// and compared by identity.
#[derive(Debug)]
pub struct Display {
    id: DisplayId,
    descriptor: Arc<Descriptor>,
    disposed: AtomicBool,
}

impl Display {
    pub fn new(descriptor: Descriptor) -> Arc<Self> {
        Self::with_descriptor(Arc::new(descriptor))
    }

    pub fn with_descriptor(descriptor: Arc<Descriptor>) -> Arc<Self> {
        Arc::new(Self {
            id: DisplayId::new(),
            descriptor,
            disposed: AtomicBool::new(false),
        })
    }

    pub fn id(&self) -> &DisplayId {
        &self.id
    }

    pub fn descriptor(&self) -> &Arc<Descriptor> {
        &self.descriptor
    }

    pub fn same(a: &Arc<Display>, b: &Arc<Display>) -> bool {
        Arc::ptr_eq(a, b)
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed.load(Ordering::Acquire)
    }

    /// Release the display's resources. Idempotent.
    pub fn dispose(&self) {
        if self.disposed.swap(true, Ordering::AcqRel) {
            return;
        }
        debug!(display = %self.id, "disposing display");
        self.descriptor.dispose_resources();
    }
}
