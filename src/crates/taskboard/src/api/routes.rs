//! Route table and shared application state

use std::sync::Arc;

use axum::routing::get;
use axum::Router;

use crate::api::{handlers, middleware};
use crate::store::TaskStore;

/// State shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn TaskStore>,
}

/// Build the full router over the given store.
pub fn create_router(store: Arc<dyn TaskStore>) -> Router {
    let state = AppState { store };

    Router::new()
        .route("/health", get(handlers::health))
        .route(
            "/api/tasks",
            get(handlers::list_tasks).post(handlers::create_task),
        )
        .route(
            "/api/tasks/:id",
            get(handlers::get_task)
                .put(handlers::update_task)
                .delete(handlers::delete_task),
        )
        .layer(middleware::logging_layer())
        .layer(middleware::cors_layer())
        .with_state(state)
}
