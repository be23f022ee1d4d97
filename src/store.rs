//! In-memory task store.
//!
//! An ordered sequence of tasks plus a monotonically increasing id counter,
//! both behind a single exclusive lock. Every operation holds the lock for
//! its full duration, so mutations are strictly serialized and reads never
//! observe a half-applied state.

use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;
use tracing::debug;

/// A unit of work: id, opaque text content, completion flag.
///
/// The JSON field names are part of the compatibility surface; do not rename.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Store-assigned identifier. Unique, never reused, strictly increasing.
    pub id: u64,
    /// Caller-supplied text. Stored and echoed verbatim.
    pub content: String,
    pub completed: bool,
}

#[derive(Default)]
struct StoreInner {
    /// Insertion order == creation order.
    tasks: Vec<Task>,
    /// Last id handed out; the next task gets `next_id + 1`.
    next_id: u64,
}

/// The authoritative in-memory collection of tasks.
pub struct TaskStore {
    inner: Mutex<StoreInner>,
}

impl TaskStore {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(StoreInner::default()),
        }
    }

    /// Snapshot of all tasks in creation order.
    pub async fn list(&self) -> Vec<Task> {
        let inner = self.inner.lock().await;
        inner.tasks.clone()
    }

    /// Create a task with the given content. Never fails.
    ///
    /// The new task gets the next id and starts un-completed regardless of
    /// what the caller sent.
    pub async fn create(&self, content: String) -> Task {
        let mut inner = self.inner.lock().await;
        inner.next_id += 1;
        let task = Task {
            id: inner.next_id,
            content,
            completed: false,
        };
        inner.tasks.push(task.clone());
        debug!(id = task.id, "task created");
        task
    }

    /// Remove the task with the given id. Returns false if absent.
    /// Order of the remaining tasks is preserved.
    pub async fn delete(&self, id: u64) -> bool {
        let mut inner = self.inner.lock().await;
        match inner.tasks.iter().position(|t| t.id == id) {
            Some(idx) => {
                inner.tasks.remove(idx);
                debug!(id, "task deleted");
                true
            }
            None => false,
        }
    }

    /// Mark the task with the given id completed, returning the updated
    /// record, or None if absent. One-way: there is no un-complete.
    pub async fn complete(&self, id: u64) -> Option<Task> {
        let mut inner = self.inner.lock().await;
        let task = inner.tasks.iter_mut().find(|t| t.id == id)?;
        task.completed = true;
        debug!(id, "task completed");
        Some(task.clone())
    }
}

impl Default for TaskStore {
    fn default() -> Self {
        Self::new()
    }
}
