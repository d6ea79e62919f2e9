use std::sync::Mutex;

use super::types::{Resource, ResourceData, ResourceError, ResourceFactory, ResourceProperties};
use crate::descriptor::Descriptor;

/// One entry in a descriptor's resource list: the data, its properties, and
/// the live instance once instantiated.
///
/// Pairs are shared by `Arc`; map layers reused across panes are the same
/// pair object.
#[derive(Debug)]
pub struct ResourcePair {
    data: ResourceData,
    properties: Mutex<ResourceProperties>,
    instance: Mutex<Option<Box<dyn Resource>>>,
    generation: Mutex<u64>,
}

impl ResourcePair {
    pub fn new(data: ResourceData, properties: ResourceProperties) -> Self {
        Self {
            data,
            properties: Mutex::new(properties),
            instance: Mutex::new(None),
            generation: Mutex::new(0),
        }
    }

    pub fn data(&self) -> &ResourceData {
        &self.data
    }

    pub fn properties(&self) -> ResourceProperties {
        self.properties
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    pub fn set_visible(&self, visible: bool) {
        self.properties
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .visible = visible;
    }

    pub fn is_map_layer(&self) -> bool {
        self.properties().map_layer
    }

    pub fn is_instantiated(&self) -> bool {
        self.instance
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .is_some()
    }

    /// How many times this pair has been (re)instantiated.
    pub fn generation(&self) -> u64 {
        *self.generation.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Run `f` against the live instance, if any.
    pub fn with_instance<R>(&self, f: impl FnOnce(&dyn Resource) -> R) -> Option<R> {
        let guard = self.instance.lock().unwrap_or_else(|e| e.into_inner());
        guard.as_deref().map(f)
    }

    /// Build the live instance against `descriptor`. An existing instance is
    /// kept unless `force` is set, in which case it is disposed and rebuilt.
    ///
    /// Returns whether a new instance was built.
    pub fn instantiate(
        &self,
        descriptor: &Descriptor,
        factory: &dyn ResourceFactory,
        force: bool,
    ) -> Result<bool, ResourceError> {
        let mut instance = self.instance.lock().unwrap_or_else(|e| e.into_inner());
        if instance.is_some() && !force {
            return Ok(false);
        }

        let fresh = factory.construct(&self.data, descriptor)?;
        if let Some(mut old) = instance.replace(fresh) {
            old.dispose();
        }
        *self.generation.lock().unwrap_or_else(|e| e.into_inner()) += 1;
        Ok(true)
    }

    pub fn dispose(&self) {
        let mut instance = self.instance.lock().unwrap_or_else(|e| e.into_inner());
        if let Some(mut old) = instance.take() {
            old.dispose();
        }
    }
}
