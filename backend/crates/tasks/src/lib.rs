//! Tasks Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Task entity, draft type, repository trait
//! - `application/` - Use cases (list, create, update, delete)
//! - `infra/` - PostgreSQL implementation
//! - `presentation/` - HTTP handlers, DTOs, router
//!
//! ## Ownership Model
//! Every operation is scoped to the authenticated user. A task belonging
//! to someone else is indistinguishable from a task that does not exist:
//! both come back as the same 404.

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

#[cfg(test)]
mod tests;

// Re-exports for convenience
pub use error::{TaskError, TaskResult};
pub use infra::postgres::PgTaskRepository;
pub use presentation::router::task_router;

// Convenience re-exports
pub mod models {
    pub use crate::domain::task::*;
    pub use crate::presentation::dto::*;
}

pub mod handlers {
    pub use crate::presentation::handlers::*;
}

pub mod router {
    pub use crate::presentation::router::*;
}
