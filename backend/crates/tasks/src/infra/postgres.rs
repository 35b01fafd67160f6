//! PostgreSQL Repository Implementation
//!
//! Every statement carries `user_id` in its WHERE clause (or inserts
//! it), so ownership is enforced at the row level.

use chrono::{DateTime, NaiveDate, Utc};
use kernel::id::{TaskId, UserId};
use sqlx::PgPool;

use crate::domain::repository::TaskRepository;
use crate::domain::task::{Task, TaskDraft};
use crate::error::{TaskError, TaskResult};

/// PostgreSQL-backed task repository
#[derive(Clone)]
pub struct PgTaskRepository {
    pool: PgPool,
}

impl PgTaskRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl TaskRepository for PgTaskRepository {
    async fn list(&self, user_id: UserId) -> TaskResult<Vec<Task>> {
        let rows = sqlx::query_as::<_, TaskRow>(
            r#"
            SELECT
                id,
                user_id,
                title,
                description,
                due_date,
                status,
                created_at,
                updated_at
            FROM tasks
            WHERE user_id = $1
            ORDER BY id DESC
            "#,
        )
        .bind(user_id.as_i64())
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(TaskRow::into_task).collect())
    }

    async fn create(&self, user_id: UserId, draft: &TaskDraft) -> TaskResult<Task> {
        let row = sqlx::query_as::<_, TaskRow>(
            r#"
            INSERT INTO tasks (user_id, title, description, due_date, status)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, user_id, title, description, due_date, status,
                      created_at, updated_at
            "#,
        )
        .bind(user_id.as_i64())
        .bind(&draft.title)
        .bind(&draft.description)
        .bind(draft.due_date)
        .bind(&draft.status)
        .fetch_one(&self.pool)
        .await?;

        Ok(row.into_task())
    }

    async fn update(
        &self,
        user_id: UserId,
        task_id: TaskId,
        draft: &TaskDraft,
    ) -> TaskResult<Task> {
        let row = sqlx::query_as::<_, TaskRow>(
            r#"
            UPDATE tasks SET
                title = $3,
                description = $4,
                due_date = $5,
                status = $6,
                updated_at = now()
            WHERE id = $1 AND user_id = $2
            RETURNING id, user_id, title, description, due_date, status,
                      created_at, updated_at
            "#,
        )
        .bind(task_id.as_i64())
        .bind(user_id.as_i64())
        .bind(&draft.title)
        .bind(&draft.description)
        .bind(draft.due_date)
        .bind(&draft.status)
        .fetch_optional(&self.pool)
        .await?;

        row.map(TaskRow::into_task)
            .ok_or(TaskError::NotFoundOrForbidden)
    }

    async fn delete(&self, user_id: UserId, task_id: TaskId) -> TaskResult<()> {
        let result = sqlx::query("DELETE FROM tasks WHERE id = $1 AND user_id = $2")
            .bind(task_id.as_i64())
            .bind(user_id.as_i64())
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(TaskError::NotFoundOrForbidden);
        }

        Ok(())
    }
}

// ============================================================================
// Row Type for sqlx mapping
// ============================================================================

#[derive(sqlx::FromRow)]
struct TaskRow {
    id: i64,
    user_id: i64,
    title: String,
    description: String,
    due_date: Option<NaiveDate>,
    status: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TaskRow {
    fn into_task(self) -> Task {
        Task {
            id: TaskId::from_i64(self.id),
            user_id: UserId::from_i64(self.user_id),
            title: self.title,
            description: self.description,
            due_date: self.due_date,
            status: self.status,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}
