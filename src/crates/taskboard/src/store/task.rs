//! Task model and seed data

use serde::{Deserialize, Serialize};

/// Identifier assigned to a task by the store
pub type TaskId = i64;

/// Status every newly created task starts with
pub const STATUS_PENDING: &str = "pending";

/// A task record, stored and served over the wire in the same shape
///
/// Tasks are the only entity the service manages. The store assigns `id`
/// and `created_at` once at creation; `title`, `description` and `status`
/// are caller-supplied and unconstrained free text.
///
/// # Timestamps
/// `created_at` is an RFC 3339 string, immutable after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Unique task identifier (assigned by the store, never reused)
    pub id: TaskId,

    /// Task title
    pub title: String,

    /// Task description
    pub description: String,

    /// Free-form status text
    pub status: String,

    /// Task creation timestamp (RFC 3339 string)
    pub created_at: String,
}

/// Field values an update applies to an existing task
///
/// `id` and `created_at` are immutable after creation and deliberately
/// absent here.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskUpdate {
    /// Replacement title
    pub title: String,

    /// Replacement description
    pub description: String,

    /// Replacement status text
    pub status: String,
}

/// The two demo records every fresh store boots with
pub fn seed_tasks() -> Vec<Task> {
    vec![
        Task {
            id: 1,
            title: "Setup Docker".to_string(),
            description: "Configure Docker environment".to_string(),
            status: "completed".to_string(),
            created_at: "2024-01-01T10:00:00Z".to_string(),
        },
        Task {
            id: 2,
            title: "Deploy Go API".to_string(),
            description: "Deploy Go service to production".to_string(),
            status: "in-progress".to_string(),
            created_at: "2024-01-02T14:30:00Z".to_string(),
        },
    ]
}
