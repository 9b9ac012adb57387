//! HTTP API layer
//!
//! Maps the task store onto six endpoints:
//!
//! - `GET    /health`          service health probe
//! - `GET    /api/tasks`       list all tasks
//! - `GET    /api/tasks/{id}`  fetch one task
//! - `POST   /api/tasks`       create a task
//! - `PUT    /api/tasks/{id}`  overwrite a task
//! - `DELETE /api/tasks/{id}`  remove a task

pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod routes;

pub use error::{ApiError, ApiResult};
pub use routes::{create_router, AppState};
