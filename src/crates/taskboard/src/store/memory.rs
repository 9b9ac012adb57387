//! In-memory task store
//!
//! Keeps the full task collection in an ordered `Vec` behind a single
//! mutex; every read and mutation goes through that one synchronized access
//! point. Ids come from a monotonic counter that survives deletions, so an
//! id is never handed out twice within a process run.

use async_trait::async_trait;
use chrono::Utc;

use crate::store::task::{seed_tasks, Task, TaskId, TaskUpdate, STATUS_PENDING};
use crate::store::TaskStore;

/// Ordered task records plus the id-allocation state
struct TaskTable {
    tasks: Vec<Task>,
    next_id: TaskId,
}

/// Process-memory [`TaskStore`] backend
///
/// All state is lost on restart; a fresh server boots from
/// [`MemoryTaskStore::with_seed_tasks`].
pub struct MemoryTaskStore {
    table: parking_lot::Mutex<TaskTable>,
}

impl MemoryTaskStore {
    /// Create an empty store. The first created task gets id 1.
    pub fn new() -> Self {
        Self::from_tasks(Vec::new())
    }

    /// Create a store pre-populated with the demo records.
    pub fn with_seed_tasks() -> Self {
        Self::from_tasks(seed_tasks())
    }

    /// Create a store over existing tasks. The id counter starts past the
    /// highest id present.
    pub fn from_tasks(tasks: Vec<Task>) -> Self {
        let next_id = tasks.iter().map(|task| task.id).max().unwrap_or(0) + 1;
        Self {
            table: parking_lot::Mutex::new(TaskTable { tasks, next_id }),
        }
    }
}

impl Default for MemoryTaskStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TaskStore for MemoryTaskStore {
    async fn list_tasks(&self) -> Vec<Task> {
        self.table.lock().tasks.clone()
    }

    async fn get_task(&self, id: TaskId) -> Option<Task> {
        self.table
            .lock()
            .tasks
            .iter()
            .find(|task| task.id == id)
            .cloned()
    }

    async fn create_task(&self, title: String, description: String) -> Task {
        let mut table = self.table.lock();
        let task = Task {
            id: table.next_id,
            title,
            description,
            status: STATUS_PENDING.to_string(),
            created_at: Utc::now().to_rfc3339(),
        };
        table.next_id += 1;
        table.tasks.push(task.clone());
        task
    }

    async fn update_task(&self, id: TaskId, update: TaskUpdate) -> Option<Task> {
        let mut table = self.table.lock();
        let task = table.tasks.iter_mut().find(|task| task.id == id)?;
        task.title = update.title;
        task.description = update.description;
        task.status = update.status;
        Some(task.clone())
    }

    async fn delete_task(&self, id: TaskId) -> bool {
        let mut table = self.table.lock();
        match table.tasks.iter().position(|task| task.id == id) {
            Some(index) => {
                table.tasks.remove(index);
                true
            }
            None => false,
        }
    }
}
