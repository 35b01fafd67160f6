//! Create Task Use Case

use std::sync::Arc;

use chrono::NaiveDate;
use kernel::id::UserId;

use crate::domain::repository::TaskRepository;
use crate::domain::task::{Task, TaskDraft};
use crate::error::TaskResult;

/// Create task input
pub struct CreateTaskInput {
    pub title: String,
    pub description: Option<String>,
    pub due_date: Option<NaiveDate>,
    pub status: Option<String>,
}

/// Create task use case
pub struct CreateTaskUseCase<R>
where
    R: TaskRepository,
{
    task_repo: Arc<R>,
}

impl<R> CreateTaskUseCase<R>
where
    R: TaskRepository,
{
    pub fn new(task_repo: Arc<R>) -> Self {
        Self { task_repo }
    }

    pub async fn execute(&self, user_id: UserId, input: CreateTaskInput) -> TaskResult<Task> {
        let draft = TaskDraft::new(
            input.title,
            input.description,
            input.due_date,
            input.status,
        )?;

        let task = self.task_repo.create(user_id, &draft).await?;

        tracing::info!(user_id = %user_id, task_id = %task.id, "Task created");

        Ok(task)
    }
}
