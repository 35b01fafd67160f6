//! Update Task Use Case

use std::sync::Arc;

use chrono::NaiveDate;
use kernel::id::{TaskId, UserId};

use crate::domain::repository::TaskRepository;
use crate::domain::task::{Task, TaskDraft};
use crate::error::TaskResult;

/// Update task input (full replacement of the content fields)
pub struct UpdateTaskInput {
    pub title: String,
    pub description: Option<String>,
    pub due_date: Option<NaiveDate>,
    pub status: Option<String>,
}

/// Update task use case
pub struct UpdateTaskUseCase<R>
where
    R: TaskRepository,
{
    task_repo: Arc<R>,
}

impl<R> UpdateTaskUseCase<R>
where
    R: TaskRepository,
{
    pub fn new(task_repo: Arc<R>) -> Self {
        Self { task_repo }
    }

    pub async fn execute(
        &self,
        user_id: UserId,
        task_id: TaskId,
        input: UpdateTaskInput,
    ) -> TaskResult<Task> {
        // Same title rule as create
        let draft = TaskDraft::new(
            input.title,
            input.description,
            input.due_date,
            input.status,
        )?;

        let task = self.task_repo.update(user_id, task_id, &draft).await?;

        tracing::info!(user_id = %user_id, task_id = %task.id, "Task updated");

        Ok(task)
    }
}
