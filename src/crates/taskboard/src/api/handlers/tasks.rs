//! Task CRUD handlers

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use crate::api::error::{ApiError, ApiResult};
use crate::api::middleware::validate_task_id;
use crate::api::models::{MessageResponse, TaskPayload};
use crate::api::routes::AppState;
use crate::store::{Task, TaskUpdate};

/// GET /api/tasks
pub async fn list_tasks(State(state): State<AppState>) -> Json<Vec<Task>> {
    Json(state.store.list_tasks().await)
}

/// GET /api/tasks/{id}
pub async fn get_task(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<Task>> {
    let id = validate_task_id(&id)?;
    let task = state.store.get_task(id).await.ok_or(ApiError::TaskNotFound)?;
    Ok(Json(task))
}

/// POST /api/tasks
///
/// The server assigns the id and creation time and always opens the task as
/// pending; any id or status in the body is ignored.
pub async fn create_task(
    State(state): State<AppState>,
    payload: Result<Json<TaskPayload>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<Task>)> {
    let Json(payload) = payload?;
    let task = state
        .store
        .create_task(payload.title, payload.description)
        .await;
    tracing::info!("Created task {}", task.id);
    Ok((StatusCode::CREATED, Json(task)))
}

/// PUT /api/tasks/{id}
///
/// Overwrites title, description and status with whatever the body carries;
/// id and creation time are preserved.
pub async fn update_task(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<TaskPayload>, JsonRejection>,
) -> ApiResult<Json<Task>> {
    let id = validate_task_id(&id)?;

    // Unknown ids win over malformed bodies; the store stays untouched on a
    // body error either way.
    if state.store.get_task(id).await.is_none() {
        return Err(ApiError::TaskNotFound);
    }
    let Json(payload) = payload?;

    let update = TaskUpdate {
        title: payload.title,
        description: payload.description,
        status: payload.status,
    };
    let task = state
        .store
        .update_task(id, update)
        .await
        .ok_or(ApiError::TaskNotFound)?;
    tracing::info!("Updated task {}", task.id);
    Ok(Json(task))
}

/// DELETE /api/tasks/{id}
pub async fn delete_task(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<MessageResponse>> {
    let id = validate_task_id(&id)?;
    if !state.store.delete_task(id).await {
        return Err(ApiError::TaskNotFound);
    }
    tracing::info!("Deleted task {}", id);
    Ok(Json(MessageResponse::new("Task deleted successfully")))
}
