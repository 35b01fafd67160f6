//! Delete Task Use Case

use std::sync::Arc;

use kernel::id::{TaskId, UserId};

use crate::domain::repository::TaskRepository;
use crate::error::TaskResult;

/// Delete task use case
pub struct DeleteTaskUseCase<R>
where
    R: TaskRepository,
{
    task_repo: Arc<R>,
}

impl<R> DeleteTaskUseCase<R>
where
    R: TaskRepository,
{
    pub fn new(task_repo: Arc<R>) -> Self {
        Self { task_repo }
    }

    pub async fn execute(&self, user_id: UserId, task_id: TaskId) -> TaskResult<()> {
        self.task_repo.delete(user_id, task_id).await?;

        tracing::info!(user_id = %user_id, task_id = %task_id, "Task deleted");

        Ok(())
    }
}
