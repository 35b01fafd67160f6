//! Repository Trait
//!
//! Every method takes the owning `user_id`; the store scopes each query
//! to that user so cross-user rows can never be read or written.

use kernel::id::{TaskId, UserId};

use crate::domain::task::{Task, TaskDraft};
use crate::error::TaskResult;

/// Task store trait
#[trait_variant::make(TaskRepository: Send)]
pub trait LocalTaskRepository {
    /// List all tasks for a user, newest first
    async fn list(&self, user_id: UserId) -> TaskResult<Vec<Task>>;

    /// Insert a new task, returning the stored row with its assigned id
    async fn create(&self, user_id: UserId, draft: &TaskDraft) -> TaskResult<Task>;

    /// Update a task owned by the user
    ///
    /// Returns [`crate::error::TaskError::NotFoundOrForbidden`] when no
    /// row matches both the id and the owner.
    async fn update(
        &self,
        user_id: UserId,
        task_id: TaskId,
        draft: &TaskDraft,
    ) -> TaskResult<Task>;

    /// Delete a task owned by the user
    ///
    /// Same not-found contract as `update`.
    async fn delete(&self, user_id: UserId, task_id: TaskId) -> TaskResult<()>;
}
