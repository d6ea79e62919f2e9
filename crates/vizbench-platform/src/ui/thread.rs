//! Dedicated UI thread.
//!
//! A single named thread drains a channel of tasks, so it is the only place
//! pane state is mutated.

use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::mpsc;
use std::thread::{self, JoinHandle, ThreadId};

use tracing::{debug, warn};
use vizbench_common::PlatformError;

use super::{panic_message, UiExecutor, UiTask};

enum UiMsg {
    Run {
        task: UiTask,
        done: Option<mpsc::Sender<Result<(), String>>>,
    },
    Shutdown,
}

pub struct UiThread {
    sender: mpsc::Sender<UiMsg>,
    thread_id: ThreadId,
    handle: Option<JoinHandle<()>>,
}

impl UiThread {
    pub fn start(name: &str) -> Result<Self, PlatformError> {
        let (tx, rx) = mpsc::channel::<UiMsg>();
        let handle = thread::Builder::new()
            .name(name.to_string())
            .spawn(move || ui_loop(rx))
            .map_err(|e| PlatformError::UiThreadUnavailable(format!("failed to spawn: {e}")))?;
        let thread_id = handle.thread().id();
        debug!(thread = name, "ui thread started");

        Ok(Self {
            sender: tx,
            thread_id,
            handle: Some(handle),
        })
    }

    /// Whether the caller is the UI thread.
    pub fn is_current(&self) -> bool {
        thread::current().id() == self.thread_id
    }

    fn send(&self, msg: UiMsg) -> Result<(), PlatformError> {
        self.sender
            .send(msg)
            .map_err(|_| PlatformError::UiThreadUnavailable("ui thread has exited".into()))
    }

    pub fn shutdown(mut self) {
        self.stop();
    }

    fn stop(&mut self) {
        let _ = self.sender.send(UiMsg::Shutdown);
        if let Some(handle) = self.handle.take() {
            if self.is_current() {
                return;
            }
            let _ = handle.join();
        }
    }
}

impl UiExecutor for UiThread {
    fn run_blocking(&self, task: UiTask) -> Result<(), PlatformError> {
        // Waiting on ourselves would never return.
        if self.is_current() {
            return catch_unwind(AssertUnwindSafe(task))
                .map_err(|payload| PlatformError::UiTaskPanicked(panic_message(payload.as_ref())));
        }

        let (done_tx, done_rx) = mpsc::channel();
        self.send(UiMsg::Run {
            task,
            done: Some(done_tx),
        })?;
        match done_rx.recv() {
            Ok(result) => result.map_err(PlatformError::UiTaskPanicked),
            Err(_) => Err(PlatformError::UiThreadUnavailable(
                "ui thread exited before the task ran".into(),
            )),
        }
    }

    fn run_deferred(&self, task: UiTask) -> Result<(), PlatformError> {
        self.send(UiMsg::Run { task, done: None })
    }
}

impl Drop for UiThread {
    fn drop(&mut self) {
        self.stop();
    }
}

fn ui_loop(rx: mpsc::Receiver<UiMsg>) {
    while let Ok(msg) = rx.recv() {
        match msg {
            UiMsg::Run { task, done } => {
                let result = catch_unwind(AssertUnwindSafe(task))
                    .map_err(|payload| panic_message(payload.as_ref()));
                match done {
                    Some(done) => {
                        let _ = done.send(result);
                    }
                    None => {
                        if let Err(message) = result {
                            warn!(error = %message, "deferred ui task panicked");
                        }
                    }
                }
            }
            UiMsg::Shutdown => break,
        }
    }
    debug!("ui thread stopped");
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};
    use std::time::Duration;

    #[test]
    fn blocking_tasks_run_on_the_ui_thread() {
        let ui = UiThread::start("vb-ui").unwrap();
        let caller = thread::current().id();
        let seen = Arc::new(Mutex::new(None));
        let out = Arc::clone(&seen);
        ui.run_blocking(Box::new(move || {
            *out.lock().unwrap() = Some(thread::current().id());
        }))
        .unwrap();
        let seen = seen.lock().unwrap().unwrap();
        assert_ne!(seen, caller);
        assert_eq!(seen, ui.thread_id);
    }

    #[test]
    fn tasks_run_in_submission_order() {
        let ui = UiThread::start("vb-ui-order").unwrap();
        let log = Arc::new(Mutex::new(Vec::new()));
        for i in 0..5 {
            let log = Arc::clone(&log);
            ui.run_deferred(Box::new(move || log.lock().unwrap().push(i)))
                .unwrap();
        }
        // A blocking task queues behind every deferred one.
        ui.run_blocking(Box::new(|| {})).unwrap();
        assert_eq!(*log.lock().unwrap(), vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn blocking_from_ui_thread_runs_inline() {
        let ui = Arc::new(UiThread::start("vb-ui-nested").unwrap());
        let inner = Arc::clone(&ui);
        let ran = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&ran);
        ui.run_blocking(Box::new(move || {
            inner
                .run_blocking(Box::new(move || {
                    counter.fetch_add(1, Ordering::SeqCst);
                }))
                .unwrap();
        }))
        .unwrap();
        assert_eq!(ran.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn panicking_task_does_not_kill_the_thread() {
        let ui = UiThread::start("vb-ui-panic").unwrap();
        let err = ui.run_blocking(Box::new(|| panic!("swap failed"))).unwrap_err();
        assert!(matches!(err, PlatformError::UiTaskPanicked(ref m) if m == "swap failed"));

        let ran = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&ran);
        ui.run_blocking(Box::new(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        }))
        .unwrap();
        assert_eq!(ran.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn deferred_does_not_wait() {
        let ui = UiThread::start("vb-ui-deferred").unwrap();
        let (tx, rx) = mpsc::channel();
        ui.run_deferred(Box::new(move || {
            thread::sleep(Duration::from_millis(20));
            let _ = tx.send(());
        }))
        .unwrap();
        assert!(rx.recv_timeout(Duration::from_secs(5)).is_ok());
    }

    #[test]
    fn shutdown_rejects_new_work() {
        let ui = UiThread::start("vb-ui-stop").unwrap();
        let sender = ui.sender.clone();
        ui.shutdown();
        assert!(sender
            .send(UiMsg::Run {
                task: Box::new(|| {}),
                done: None,
            })
            .is_err());
    }
}
