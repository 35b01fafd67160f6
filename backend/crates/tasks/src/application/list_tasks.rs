//! List Tasks Use Case

use std::sync::Arc;

use kernel::id::UserId;

use crate::domain::repository::TaskRepository;
use crate::domain::task::Task;
use crate::error::TaskResult;

/// List tasks use case
pub struct ListTasksUseCase<R>
where
    R: TaskRepository,
{
    task_repo: Arc<R>,
}

impl<R> ListTasksUseCase<R>
where
    R: TaskRepository,
{
    pub fn new(task_repo: Arc<R>) -> Self {
        Self { task_repo }
    }

    /// All of the user's tasks, newest first. No pagination.
    pub async fn execute(&self, user_id: UserId) -> TaskResult<Vec<Task>> {
        self.task_repo.list(user_id).await
    }
}
