//! Application Layer
//!
//! Use cases. Each takes the repository as an `Arc` constructor
//! parameter and the acting user's id as an argument.

pub mod create_task;
pub mod delete_task;
pub mod list_tasks;
pub mod update_task;

// Re-exports
pub use create_task::{CreateTaskInput, CreateTaskUseCase};
pub use delete_task::DeleteTaskUseCase;
pub use list_tasks::ListTasksUseCase;
pub use update_task::{UpdateTaskInput, UpdateTaskUseCase};
