//! Fire-and-forget async work whose outcome can still be inspected.
//!
//! `observed` splits a future into a driver (handed to the executor) and a
//! `TaskHandle` that receives the output. If the driver is dropped before it
//! finishes, the handle reports `TaskStatus::Dropped`.

#[cfg(test)]
#[path = "task_test.rs"]
mod task_test;

use std::future::Future;

use futures::channel::oneshot;

/// Observable state of a spawned task.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TaskStatus<T> {
    Pending,
    Finished(T),
    /// The driver was dropped before producing a value.
    Dropped,
}

/// Receiving side of an observed task.
#[derive(Debug)]
pub struct TaskHandle<T> {
    rx: oneshot::Receiver<T>,
    outcome: Option<T>,
    dropped: bool,
}

/// Wrap `fut` so its output is delivered to the returned handle.
pub fn observed<F>(fut: F) -> (impl Future<Output = ()>, TaskHandle<F::Output>)
where
    F: Future,
{
    let (tx, rx) = oneshot::channel();
    let driver = async move {
        let value = fut.await;
        // The handle may already be gone; nothing left to notify.
        let _ = tx.send(value);
    };
    let handle = TaskHandle {
        rx,
        outcome: None,
        dropped: false,
    };
    (driver, handle)
}

impl<T: Clone> TaskHandle<T> {
    /// Poll without blocking; caches the outcome once it arrives.
    pub fn status(&mut self) -> TaskStatus<T> {
        if let Some(value) = &self.outcome {
            return TaskStatus::Finished(value.clone());
        }
        if self.dropped {
            return TaskStatus::Dropped;
        }
        match self.rx.try_recv() {
            Ok(Some(value)) => {
                self.outcome = Some(value.clone());
                TaskStatus::Finished(value)
            }
            Ok(None) => TaskStatus::Pending,
            Err(oneshot::Canceled) => {
                self.dropped = true;
                TaskStatus::Dropped
            }
        }
    }
}
