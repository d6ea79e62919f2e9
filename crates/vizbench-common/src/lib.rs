pub mod errors;
pub mod events;
pub mod id;
pub mod types;

pub use errors::{ConfigError, LoadError, PlatformError, VizbenchError};
pub use events::{Event, EventBus};
pub use id::{new_correlation_id, new_id, DisplayId};
pub use types::{HistoryEntry, PaneId, Point};

pub type Result<T> = std::result::Result<T, VizbenchError>;
