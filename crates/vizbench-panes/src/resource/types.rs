use std::collections::BTreeMap;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::descriptor::Descriptor;

/// The serializable description of a resource. Two pairs whose data compare
/// equal describe the same layer even when they are different objects.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ResourceData {
    pub kind: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub params: BTreeMap<String, String>,
}

impl ResourceData {
    pub fn new(kind: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            name: name.into(),
            params: BTreeMap::new(),
        }
    }

    pub fn with_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.insert(key.into(), value.into());
        self
    }

    /// Label used in logs and error messages.
    pub fn label(&self) -> String {
        if self.name.is_empty() {
            self.kind.clone()
        } else {
            format!("{}:{}", self.kind, self.name)
        }
    }
}

/// Per-pair display properties. Edits are visible to every pane holding the
/// same pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResourceProperties {
    pub map_layer: bool,
    pub visible: bool,
    pub system: bool,
}

impl Default for ResourceProperties {
    fn default() -> Self {
        Self {
            map_layer: false,
            visible: true,
            system: false,
        }
    }
}

impl ResourceProperties {
    pub fn map_layer() -> Self {
        Self {
            map_layer: true,
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, thiserror::Error)]
#[error("{reason}")]
pub struct ResourceError {
    pub resource: String,
    pub reason: String,
}

impl ResourceError {
    pub fn new(resource: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            resource: resource.into(),
            reason: reason.into(),
        }
    }
}

/// A live, instantiated resource.
pub trait Resource: Send + fmt::Debug {
    fn name(&self) -> &str;

    /// Reference time of the descriptor this instance was built against.
    fn reference_time(&self) -> Option<DateTime<Utc>> {
        None
    }

    fn dispose(&mut self) {}
}

/// Builds live resources from their data. Injected into the loader so the
/// model stays free of any rendering backend.
pub trait ResourceFactory: Send + Sync {
    fn construct(
        &self,
        data: &ResourceData,
        descriptor: &Descriptor,
    ) -> Result<Box<dyn Resource>, ResourceError>;
}

/// A resource that only remembers what it was built from.
#[derive(Debug, Clone)]
pub struct LoadedResource {
    pub label: String,
    pub reference_time: Option<DateTime<Utc>>,
    pub frame_count: usize,
    pub disposed: bool,
}

impl Resource for LoadedResource {
    fn name(&self) -> &str {
        &self.label
    }

    fn reference_time(&self) -> Option<DateTime<Utc>> {
        self.reference_time
    }

    fn dispose(&mut self) {
        self.disposed = true;
    }
}

/// Factory producing [`LoadedResource`]s. Used by the CLI and by tests.
#[derive(Debug, Default, Clone, Copy)]
pub struct StaticResourceFactory;

impl ResourceFactory for StaticResourceFactory {
    fn construct(
        &self,
        data: &ResourceData,
        descriptor: &Descriptor,
    ) -> Result<Box<dyn Resource>, ResourceError> {
        if data.kind.trim().is_empty() {
            return Err(ResourceError::new(data.label(), "resource kind is empty"));
        }
        Ok(Box::new(LoadedResource {
            label: data.label(),
            reference_time: descriptor.reference_time(),
            frame_count: descriptor.frame_state().frame_count,
            disposed: false,
        }))
    }
}
