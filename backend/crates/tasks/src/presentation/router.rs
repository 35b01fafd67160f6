//! Task Router
//!
//! The session middleware is layered on by the application wiring, not
//! here; this router only maps routes to handlers.

use axum::Router;
use axum::routing::{get, put};
use std::sync::Arc;

use sqlx::PgPool;

use crate::domain::repository::TaskRepository;
use crate::infra::postgres::PgTaskRepository;
use crate::presentation::handlers::{self, TaskAppState};

/// Create the task router backed by PostgreSQL
pub fn task_router(pool: PgPool) -> Router {
    let repo = Arc::new(PgTaskRepository::new(pool));
    task_router_generic(repo)
}

/// Create the task router over any repository implementation
pub fn task_router_generic<R>(repo: Arc<R>) -> Router
where
    R: TaskRepository + Clone + Send + Sync + 'static,
{
    let state = TaskAppState { repo };

    Router::new()
        .route(
            "/",
            get(handlers::list_tasks::<R>).post(handlers::create_task::<R>),
        )
        .route(
            "/{id}",
            put(handlers::update_task::<R>).delete(handlers::delete_task::<R>),
        )
        .with_state(state)
}
