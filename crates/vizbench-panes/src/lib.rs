//! Display/pane/container model shared by the bundle loader and the input
//! dispatcher.

pub mod container;
pub mod descriptor;
pub mod display;
pub mod grid;
pub mod pane;
pub mod resource;
pub mod time_matcher;

pub use container::{ContainerError, ContainerKind, LoopMode, LoopProperties, PaneContainer};
pub use descriptor::{Descriptor, FrameState};
pub use display::Display;
pub use grid::{GridOptions, PaneGrid};
pub use pane::Pane;
pub use resource::{
    LoadedResource, Resource, ResourceData, ResourceError, ResourceFactory, ResourceList,
    ResourcePair, ResourceProperties, StaticResourceFactory,
};
pub use time_matcher::{MatchState, StandardTimeMatcher, TimeMatcher};
