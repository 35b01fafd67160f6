//! Task Entity

use chrono::{DateTime, NaiveDate, Utc};
use kernel::id::{TaskId, UserId};

use crate::error::{TaskError, TaskResult};

/// Task entity
#[derive(Debug, Clone, PartialEq)]
pub struct Task {
    /// Task ID (database-assigned)
    pub id: TaskId,
    /// Owning user
    pub user_id: UserId,
    /// Title (non-empty after trimming)
    pub title: String,
    /// Free-form description, empty by default
    pub description: String,
    /// Optional due date (date only, no time component)
    pub due_date: Option<NaiveDate>,
    /// Free-form status label
    pub status: Option<String>,
    /// Created timestamp
    pub created_at: DateTime<Utc>,
    /// Updated timestamp
    pub updated_at: DateTime<Utc>,
}

/// Validated task content, used for both create and update
///
/// The ownership fields (`id`, `user_id`) are never part of the draft;
/// they come from the route and the session respectively.
#[derive(Debug, Clone)]
pub struct TaskDraft {
    pub title: String,
    pub description: String,
    pub due_date: Option<NaiveDate>,
    pub status: Option<String>,
}

impl TaskDraft {
    /// Validate task content
    ///
    /// The title must be non-empty after trimming; the same rule applies
    /// on create and on update. Everything else is accepted as-is.
    pub fn new(
        title: String,
        description: Option<String>,
        due_date: Option<NaiveDate>,
        status: Option<String>,
    ) -> TaskResult<Self> {
        if title.trim().is_empty() {
            return Err(TaskError::MissingTitle);
        }

        Ok(Self {
            title,
            description: description.unwrap_or_default(),
            due_date,
            status,
        })
    }
}
