//! Auth Router

use axum::Router;
use axum::routing::{get, post};
use std::sync::Arc;

use sqlx::PgPool;

use crate::application::config::AuthConfig;
use crate::domain::repository::{SessionRepository, UserRepository};
use crate::infra::postgres::PgAuthRepository;
use crate::presentation::handlers::{self, AuthAppState};

/// Create the auth router backed by PostgreSQL
pub fn auth_router(pool: PgPool, config: Arc<AuthConfig>) -> Router {
    let repo = Arc::new(PgAuthRepository::new(pool));
    auth_router_generic(repo, config)
}

/// Create the auth router over any repository implementation
pub fn auth_router_generic<R>(repo: Arc<R>, config: Arc<AuthConfig>) -> Router
where
    R: UserRepository + SessionRepository + Clone + Send + Sync + 'static,
{
    let state = AuthAppState { repo, config };

    Router::new()
        .route("/register", post(handlers::register::<R>))
        .route("/login", post(handlers::login::<R>))
        .route("/logout", get(handlers::logout::<R>))
        .with_state(state)
}
