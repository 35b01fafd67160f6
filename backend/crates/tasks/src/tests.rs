//! Use-case tests against an in-memory repository double.

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::Mutex;
use std::sync::atomic::{AtomicI64, Ordering};

use chrono::{NaiveDate, Utc};

use kernel::id::{TaskId, UserId};

use crate::application::{
    CreateTaskInput, CreateTaskUseCase, DeleteTaskUseCase, ListTasksUseCase,
    UpdateTaskInput, UpdateTaskUseCase,
};
use crate::domain::repository::TaskRepository;
use crate::domain::task::{Task, TaskDraft};
use crate::error::{TaskError, TaskResult};

/// In-memory stand-in for the task store
#[derive(Clone, Default)]
struct MemoryTaskRepository {
    tasks: Arc<Mutex<HashMap<i64, Task>>>,
    next_id: Arc<AtomicI64>,
}

impl MemoryTaskRepository {
    fn new() -> Self {
        Self {
            next_id: Arc::new(AtomicI64::new(1)),
            ..Default::default()
        }
    }
}

impl TaskRepository for MemoryTaskRepository {
    async fn list(&self, user_id: UserId) -> TaskResult<Vec<Task>> {
        let tasks = self.tasks.lock().unwrap();
        let mut owned: Vec<Task> = tasks
            .values()
            .filter(|t| t.user_id == user_id)
            .cloned()
            .collect();
        owned.sort_by(|a, b| b.id.as_i64().cmp(&a.id.as_i64()));
        Ok(owned)
    }

    async fn create(&self, user_id: UserId, draft: &TaskDraft) -> TaskResult<Task> {
        let now = Utc::now();
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);

        let task = Task {
            id: TaskId::from_i64(id),
            user_id,
            title: draft.title.clone(),
            description: draft.description.clone(),
            due_date: draft.due_date,
            status: draft.status.clone(),
            created_at: now,
            updated_at: now,
        };
        self.tasks.lock().unwrap().insert(id, task.clone());
        Ok(task)
    }

    async fn update(
        &self,
        user_id: UserId,
        task_id: TaskId,
        draft: &TaskDraft,
    ) -> TaskResult<Task> {
        let mut tasks = self.tasks.lock().unwrap();

        let task = tasks
            .get_mut(&task_id.as_i64())
            .filter(|t| t.user_id == user_id)
            .ok_or(TaskError::NotFoundOrForbidden)?;

        task.title = draft.title.clone();
        task.description = draft.description.clone();
        task.due_date = draft.due_date;
        task.status = draft.status.clone();
        task.updated_at = Utc::now();
        Ok(task.clone())
    }

    async fn delete(&self, user_id: UserId, task_id: TaskId) -> TaskResult<()> {
        let mut tasks = self.tasks.lock().unwrap();

        match tasks.get(&task_id.as_i64()) {
            Some(t) if t.user_id == user_id => {
                tasks.remove(&task_id.as_i64());
                Ok(())
            }
            _ => Err(TaskError::NotFoundOrForbidden),
        }
    }
}

fn alice() -> UserId {
    UserId::from_i64(1)
}

fn bob() -> UserId {
    UserId::from_i64(2)
}

fn input(title: &str) -> CreateTaskInput {
    CreateTaskInput {
        title: title.to_string(),
        description: None,
        due_date: None,
        status: None,
    }
}

#[tokio::test]
async fn create_defaults_description_to_empty() {
    let repo = Arc::new(MemoryTaskRepository::new());
    let create = CreateTaskUseCase::new(repo.clone());

    let task = create.execute(alice(), input("Buy milk")).await.unwrap();

    assert_eq!(task.title, "Buy milk");
    assert_eq!(task.description, "");
    assert!(task.due_date.is_none());
    assert!(task.status.is_none());
}

#[tokio::test]
async fn create_rejects_blank_title() {
    let repo = Arc::new(MemoryTaskRepository::new());
    let create = CreateTaskUseCase::new(repo.clone());

    let err = create.execute(alice(), input("   ")).await.unwrap_err();
    assert!(matches!(err, TaskError::MissingTitle));
    assert!(repo.tasks.lock().unwrap().is_empty());
}

#[tokio::test]
async fn list_returns_only_own_tasks_newest_first() {
    let repo = Arc::new(MemoryTaskRepository::new());
    let create = CreateTaskUseCase::new(repo.clone());

    create.execute(alice(), input("first")).await.unwrap();
    create.execute(bob(), input("not yours")).await.unwrap();
    create.execute(alice(), input("second")).await.unwrap();

    let list = ListTasksUseCase::new(repo.clone());
    let tasks = list.execute(alice()).await.unwrap();

    assert_eq!(tasks.len(), 2);
    assert_eq!(tasks[0].title, "second");
    assert_eq!(tasks[1].title, "first");
}

#[tokio::test]
async fn list_is_empty_for_new_user() {
    let repo = Arc::new(MemoryTaskRepository::new());
    let list = ListTasksUseCase::new(repo.clone());
    assert!(list.execute(alice()).await.unwrap().is_empty());
}

#[tokio::test]
async fn update_replaces_content_fields() {
    let repo = Arc::new(MemoryTaskRepository::new());
    let create = CreateTaskUseCase::new(repo.clone());
    let task = create.execute(alice(), input("draft")).await.unwrap();

    let due = NaiveDate::from_ymd_opt(2025, 7, 1).unwrap();
    let update = UpdateTaskUseCase::new(repo.clone());
    let updated = update
        .execute(
            alice(),
            task.id,
            UpdateTaskInput {
                title: "final".to_string(),
                description: Some("ready to ship".to_string()),
                due_date: Some(due),
                status: Some("done".to_string()),
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.id, task.id);
    assert_eq!(updated.title, "final");
    assert_eq!(updated.description, "ready to ship");
    assert_eq!(updated.due_date, Some(due));
    assert_eq!(updated.status.as_deref(), Some("done"));
}

#[tokio::test]
async fn update_rejects_blank_title() {
    let repo = Arc::new(MemoryTaskRepository::new());
    let create = CreateTaskUseCase::new(repo.clone());
    let task = create.execute(alice(), input("keep me")).await.unwrap();

    let update = UpdateTaskUseCase::new(repo.clone());
    let err = update
        .execute(
            alice(),
            task.id,
            UpdateTaskInput {
                title: "".to_string(),
                description: None,
                due_date: None,
                status: None,
            },
        )
        .await
        .unwrap_err();

    assert!(matches!(err, TaskError::MissingTitle));

    // Stored task untouched
    let list = ListTasksUseCase::new(repo.clone());
    assert_eq!(list.execute(alice()).await.unwrap()[0].title, "keep me");
}

#[tokio::test]
async fn update_cannot_touch_another_users_task() {
    let repo = Arc::new(MemoryTaskRepository::new());
    let create = CreateTaskUseCase::new(repo.clone());
    let task = create.execute(bob(), input("bob's")).await.unwrap();

    let update = UpdateTaskUseCase::new(repo.clone());
    let err = update
        .execute(
            alice(),
            task.id,
            UpdateTaskInput {
                title: "hijacked".to_string(),
                description: None,
                due_date: None,
                status: None,
            },
        )
        .await
        .unwrap_err();

    // Same error as a missing task
    assert!(matches!(err, TaskError::NotFoundOrForbidden));
}

#[tokio::test]
async fn delete_removes_own_task() {
    let repo = Arc::new(MemoryTaskRepository::new());
    let create = CreateTaskUseCase::new(repo.clone());
    let task = create.execute(alice(), input("gone soon")).await.unwrap();

    let delete = DeleteTaskUseCase::new(repo.clone());
    delete.execute(alice(), task.id).await.unwrap();

    let list = ListTasksUseCase::new(repo.clone());
    assert!(list.execute(alice()).await.unwrap().is_empty());
}

#[tokio::test]
async fn delete_cannot_touch_another_users_task() {
    let repo = Arc::new(MemoryTaskRepository::new());
    let create = CreateTaskUseCase::new(repo.clone());
    let task = create.execute(bob(), input("bob's")).await.unwrap();

    let delete = DeleteTaskUseCase::new(repo.clone());
    let err = delete.execute(alice(), task.id).await.unwrap_err();
    assert!(matches!(err, TaskError::NotFoundOrForbidden));

    // Bob's task survives
    let list = ListTasksUseCase::new(repo.clone());
    assert_eq!(list.execute(bob()).await.unwrap().len(), 1);
}

#[tokio::test]
async fn delete_missing_task_is_not_found() {
    let repo = Arc::new(MemoryTaskRepository::new());
    let delete = DeleteTaskUseCase::new(repo.clone());
    let err = delete
        .execute(alice(), TaskId::from_i64(999))
        .await
        .unwrap_err();
    assert!(matches!(err, TaskError::NotFoundOrForbidden));
}
