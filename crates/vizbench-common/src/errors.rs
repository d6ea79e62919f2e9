use std::path::PathBuf;

use crate::types::PaneId;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),
}

#[derive(Debug, thiserror::Error)]
pub enum PlatformError {
    #[error("path error: {0}")]
    PathError(String),

    #[error("ui thread unavailable: {0}")]
    UiThreadUnavailable(String),

    #[error("ui task panicked: {0}")]
    UiTaskPanicked(String),
}

/// Everything that can go wrong between receiving bundle text and the last
/// pane showing its display.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("unable to load {displays} displays onto container with {panes} panes")]
    PaneCardinality { panes: usize, displays: usize },

    #[error("error ordering bundle displays: {detail}")]
    Ordering { detail: String },

    #[error("cannot find bundle file: {0}")]
    SourceResolution(String),

    #[error("failed to unmarshal bundle: {0}")]
    Unmarshal(String),

    #[error("failed to instantiate resource '{resource}' on {pane}: {reason}")]
    Instantiation {
        pane: PaneId,
        resource: String,
        reason: String,
    },

    #[error("anchor load for {pane} panicked: {message}")]
    AnchorPanicked { pane: PaneId, message: String },

    #[error("load worker for {pane} panicked: {message}")]
    WorkerPanicked { pane: PaneId, message: String },

    #[error("{} of {total} concurrent pane loads failed: {}", .failures.len(), join_failures(.failures))]
    Workers {
        total: usize,
        failures: Vec<LoadError>,
    },

    #[error("container rejected pane change: {0}")]
    Container(String),

    #[error("bundle load thread panicked: {0}")]
    Panicked(String),

    #[error(transparent)]
    Platform(#[from] PlatformError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

fn join_failures(failures: &[LoadError]) -> String {
    failures
        .iter()
        .map(|f| f.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}

#[derive(Debug, thiserror::Error)]
pub enum VizbenchError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Platform(#[from] PlatformError),

    #[error("error loading bundle: {0}")]
    Load(#[from] LoadError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_display() {
        let err = ConfigError::FileNotFound(PathBuf::from("/tmp/missing.toml"));
        assert_eq!(err.to_string(), "config file not found: /tmp/missing.toml");

        let err = ConfigError::ParseError("unexpected token".into());
        assert_eq!(err.to_string(), "config parse error: unexpected token");

        let err = ConfigError::ValidationError("input.menu_trigger_button".into());
        assert_eq!(
            err.to_string(),
            "config validation error: input.menu_trigger_button"
        );
    }

    #[test]
    fn platform_error_display() {
        let err = PlatformError::UiThreadUnavailable("channel closed".into());
        assert_eq!(err.to_string(), "ui thread unavailable: channel closed");

        let err = PlatformError::PathError("no data directory".into());
        assert_eq!(err.to_string(), "path error: no data directory");
    }

    #[test]
    fn cardinality_error_carries_both_counts() {
        let err = LoadError::PaneCardinality {
            panes: 4,
            displays: 2,
        };
        assert_eq!(
            err.to_string(),
            "unable to load 2 displays onto container with 4 panes"
        );
    }

    #[test]
    fn worker_aggregate_lists_every_failure() {
        let err = LoadError::Workers {
            total: 3,
            failures: vec![
                LoadError::WorkerPanicked {
                    pane: PaneId(2),
                    message: "boom".into(),
                },
                LoadError::Instantiation {
                    pane: PaneId(3),
                    resource: "radar".into(),
                    reason: "no data".into(),
                },
            ],
        };
        let msg = err.to_string();
        assert!(msg.starts_with("2 of 3 concurrent pane loads failed"));
        assert!(msg.contains("load worker for pane-2 panicked: boom"));
        assert!(msg.contains("failed to instantiate resource 'radar' on pane-3: no data"));
    }

    #[test]
    fn anchor_panic_names_the_pane() {
        let err = LoadError::AnchorPanicked {
            pane: PaneId(1),
            message: "factory bug".into(),
        };
        assert_eq!(err.to_string(), "anchor load for pane-1 panicked: factory bug");
    }

    #[test]
    fn vizbench_error_from_load() {
        let load_err = LoadError::SourceResolution("bundles/missing.json".into());
        let err: VizbenchError = load_err.into();
        assert!(matches!(err, VizbenchError::Load(_)));
        assert_eq!(
            err.to_string(),
            "error loading bundle: cannot find bundle file: bundles/missing.json"
        );
    }

    #[test]
    fn vizbench_error_from_config() {
        let config_err = ConfigError::ParseError("bad toml".into());
        let err: VizbenchError = config_err.into();
        assert!(matches!(err, VizbenchError::Config(_)));
        assert!(err.to_string().contains("bad toml"));
    }

    #[test]
    fn load_error_from_platform() {
        let err: LoadError = PlatformError::UiTaskPanicked("swap".into()).into();
        assert!(matches!(err, LoadError::Platform(_)));
        assert_eq!(err.to_string(), "ui task panicked: swap");
    }

    #[test]
    fn vizbench_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: VizbenchError = io_err.into();
        assert!(matches!(err, VizbenchError::Io(_)));
        assert!(err.to_string().contains("file missing"));
    }
}
