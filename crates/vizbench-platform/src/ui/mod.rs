//! UI-affinity executors.
//!
//! Pane and display mutations belong to a single UI-owning thread. Code
//! running elsewhere hands work over through a [`UiExecutor`], either
//! blocking until it ran (`run_blocking`) or fire-and-forget
//! (`run_deferred`).

mod inline;
mod thread;

pub use inline::InlineExecutor;
pub use thread::UiThread;

use std::any::Any;
use std::sync::{Arc, Mutex};

use vizbench_common::PlatformError;

/// A unit of work handed to the UI thread.
pub type UiTask = Box<dyn FnOnce() + Send + 'static>;

pub trait UiExecutor: Send + Sync {
    /// Run `task` on the UI thread and wait for it to finish.
    ///
    /// A panic inside the task is reported as
    /// [`PlatformError::UiTaskPanicked`].
    fn run_blocking(&self, task: UiTask) -> Result<(), PlatformError>;

    /// Queue `task` on the UI thread without waiting.
    fn run_deferred(&self, task: UiTask) -> Result<(), PlatformError>;
}

/// Run `f` on the UI thread and return its value.
pub fn run_blocking_with<T, F>(ui: &dyn UiExecutor, f: F) -> Result<T, PlatformError>
where
    T: Send + 'static,
    F: FnOnce() -> T + Send + 'static,
{
    let slot: Arc<Mutex<Option<T>>> = Arc::new(Mutex::new(None));
    let out = Arc::clone(&slot);
    ui.run_blocking(Box::new(move || {
        let value = f();
        *out.lock().unwrap_or_else(|e| e.into_inner()) = Some(value);
    }))?;

    let value = slot.lock().unwrap_or_else(|e| e.into_inner()).take();
    value.ok_or_else(|| PlatformError::UiTaskPanicked("task produced no result".into()))
}

/// Best-effort text of a panic payload.
pub fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn panic_message_reads_str_and_string() {
        let payload: Box<dyn Any + Send> = Box::new("static text");
        assert_eq!(panic_message(payload.as_ref()), "static text");

        let payload: Box<dyn Any + Send> = Box::new(String::from("owned text"));
        assert_eq!(panic_message(payload.as_ref()), "owned text");

        let payload: Box<dyn Any + Send> = Box::new(42u32);
        assert_eq!(panic_message(payload.as_ref()), "unknown panic");
    }

    #[test]
    fn run_blocking_with_returns_value_inline() {
        let ui = InlineExecutor::new();
        let value = run_blocking_with(&ui, || 6 * 7).unwrap();
        assert_eq!(value, 42);
    }

    #[test]
    fn run_blocking_with_returns_value_from_ui_thread() {
        let ui = UiThread::start("test-ui").unwrap();
        let name = run_blocking_with(&ui, || {
            std::thread::current().name().map(str::to_string)
        })
        .unwrap();
        assert_eq!(name.as_deref(), Some("test-ui"));
    }

    #[test]
    fn run_blocking_with_reports_panic() {
        let ui = InlineExecutor::new();
        let err = run_blocking_with(&ui, || -> u32 { panic!("bad swap") }).unwrap_err();
        assert!(matches!(err, PlatformError::UiTaskPanicked(ref m) if m == "bad swap"));
    }
}
