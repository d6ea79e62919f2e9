use std::sync::Arc;

use vizbench_common::EventBus;
use vizbench_config::schema::LoaderConfig;
use vizbench_panes::ResourceFactory;
use vizbench_platform::UiExecutor;

/// Collaborators a load runs against. Passed to the loader explicitly;
/// nothing is looked up from process-wide state.
#[derive(Clone)]
pub struct LoadContext {
    pub ui: Arc<dyn UiExecutor>,
    pub factory: Arc<dyn ResourceFactory>,
    pub events: Arc<EventBus>,
    pub config: LoaderConfig,
}

impl LoadContext {
    pub fn new(ui: Arc<dyn UiExecutor>, factory: Arc<dyn ResourceFactory>) -> Self {
        Self {
            ui,
            factory,
            events: Arc::new(EventBus::default()),
            config: LoaderConfig::default(),
        }
    }

    pub fn with_events(mut self, events: Arc<EventBus>) -> Self {
        self.events = events;
        self
    }

    pub fn with_config(mut self, config: LoaderConfig) -> Self {
        self.config = config;
        self
    }
}
