//! Task storage
//!
//! The store owns every task record and the id-assignment rule. Handlers
//! depend on the [`TaskStore`] trait only, so a durable backend can replace
//! the in-memory one without touching the API layer.

pub mod memory;
pub mod task;

pub use memory::MemoryTaskStore;
pub use task::{seed_tasks, Task, TaskId, TaskUpdate, STATUS_PENDING};

use async_trait::async_trait;

/// Storage interface for task records
///
/// Absence is reported with `Option`/`bool` rather than errors: the
/// in-memory backend has no failure modes, and the API layer maps absence
/// to HTTP 404.
#[async_trait]
pub trait TaskStore: Send + Sync {
    /// All stored tasks, in store order (creation order as affected by
    /// prior deletions).
    async fn list_tasks(&self) -> Vec<Task>;

    /// First task whose id matches, if any.
    async fn get_task(&self, id: TaskId) -> Option<Task>;

    /// Append a new task. The store assigns the id, forces the status to
    /// [`STATUS_PENDING`] and stamps the creation time.
    async fn create_task(&self, title: String, description: String) -> Task;

    /// Overwrite title, description and status of the matching task in
    /// place, leaving `id` and `created_at` untouched. Returns the updated
    /// task, or `None` when no task matches.
    async fn update_task(&self, id: TaskId, update: TaskUpdate) -> Option<Task>;

    /// Remove the first task whose id matches, preserving the relative
    /// order of the remaining tasks. Returns whether a task was removed.
    async fn delete_task(&self, id: TaskId) -> bool;
}
