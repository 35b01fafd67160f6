//! HTTP Handlers
//!
//! All routes here sit behind the session gate; the acting user arrives
//! as a [`CurrentUser`] request extension.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::{Extension, Json};
use std::sync::Arc;

use auth::middleware::CurrentUser;
use kernel::id::TaskId;

use crate::application::{
    CreateTaskInput, CreateTaskUseCase, DeleteTaskUseCase, ListTasksUseCase,
    UpdateTaskInput, UpdateTaskUseCase,
};
use crate::domain::repository::TaskRepository;
use crate::error::TaskResult;
use crate::presentation::dto::{DeleteTaskResponse, TaskPayload, TaskResponse};

/// Shared state for task handlers
#[derive(Clone)]
pub struct TaskAppState<R>
where
    R: TaskRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
}

/// GET /api/tasks
pub async fn list_tasks<R>(
    State(state): State<TaskAppState<R>>,
    Extension(current_user): Extension<CurrentUser>,
) -> TaskResult<impl IntoResponse>
where
    R: TaskRepository + Clone + Send + Sync + 'static,
{
    let use_case = ListTasksUseCase::new(state.repo.clone());
    let tasks = use_case.execute(current_user.user_id).await?;

    let response: Vec<TaskResponse> = tasks.into_iter().map(TaskResponse::from).collect();

    Ok(Json(response))
}

/// POST /api/tasks
pub async fn create_task<R>(
    State(state): State<TaskAppState<R>>,
    Extension(current_user): Extension<CurrentUser>,
    Json(payload): Json<TaskPayload>,
) -> TaskResult<impl IntoResponse>
where
    R: TaskRepository + Clone + Send + Sync + 'static,
{
    let use_case = CreateTaskUseCase::new(state.repo.clone());

    let task = use_case
        .execute(
            current_user.user_id,
            CreateTaskInput {
                title: payload.title,
                description: payload.description,
                due_date: payload.due_date,
                status: payload.status,
            },
        )
        .await?;

    Ok((StatusCode::CREATED, Json(TaskResponse::from(task))))
}

/// PUT /api/tasks/{id}
pub async fn update_task<R>(
    State(state): State<TaskAppState<R>>,
    Extension(current_user): Extension<CurrentUser>,
    Path(task_id): Path<i64>,
    Json(payload): Json<TaskPayload>,
) -> TaskResult<impl IntoResponse>
where
    R: TaskRepository + Clone + Send + Sync + 'static,
{
    let use_case = UpdateTaskUseCase::new(state.repo.clone());

    let task = use_case
        .execute(
            current_user.user_id,
            TaskId::from_i64(task_id),
            UpdateTaskInput {
                title: payload.title,
                description: payload.description,
                due_date: payload.due_date,
                status: payload.status,
            },
        )
        .await?;

    Ok(Json(TaskResponse::from(task)))
}

/// DELETE /api/tasks/{id}
pub async fn delete_task<R>(
    State(state): State<TaskAppState<R>>,
    Extension(current_user): Extension<CurrentUser>,
    Path(task_id): Path<i64>,
) -> TaskResult<impl IntoResponse>
where
    R: TaskRepository + Clone + Send + Sync + 'static,
{
    let use_case = DeleteTaskUseCase::new(state.repo.clone());
    use_case
        .execute(current_user.user_id, TaskId::from_i64(task_id))
        .await?;

    Ok(Json(DeleteTaskResponse {
        message: "Task deleted successfully".to_string(),
    }))
}
