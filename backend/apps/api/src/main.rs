//! API Server Entry Point
//!
//! Wires configuration, the database pool, the feature routers, and the
//! session gate together. Startup failures use `anyhow`; once the server
//! is running, errors flow through `kernel::error::AppError`.

use auth::{AuthConfig, AuthMiddlewareState, PgAuthRepository, require_session};
use axum::{
    Router, http,
    http::{Method, header},
};
use base64::Engine;
use base64::engine::general_purpose;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use std::env;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::{AllowHeaders, AllowMethods, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const LISTEN_PORT: u16 = 31113;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let pool = connect_database().await?;

    // Sweep sessions that expired while the server was down. Not fatal;
    // expired rows are also filtered out on every read.
    match PgAuthRepository::new(pool.clone()).cleanup_expired().await {
        Ok(sessions) => {
            tracing::info!(sessions_deleted = sessions, "Session cleanup completed");
        }
        Err(e) => {
            tracing::warn!(error = %e, "Session cleanup failed, continuing anyway");
        }
    }

    let auth_config = Arc::new(load_auth_config()?);

    let app = build_app(pool, auth_config);

    let addr = SocketAddr::from(([0, 0, 0, 0], LISTEN_PORT));
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "api=info,auth=info,tasks=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

async fn connect_database() -> anyhow::Result<PgPool> {
    let database_url =
        env::var("DATABASE_URL").expect("DATABASE_URL must be set in environment");

    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&database_url)
        .await?;
    tracing::info!("Connected to database");

    sqlx::migrate!("../../../database/migrations")
        .run(&pool)
        .await?;
    tracing::info!("Migrations completed");

    Ok(pool)
}

/// Debug builds get a random secret and an insecure cookie; production
/// requires `SESSION_SECRET` (base64, 32 bytes decoded).
fn load_auth_config() -> anyhow::Result<AuthConfig> {
    if cfg!(debug_assertions) {
        return Ok(AuthConfig::development());
    }

    let secret_b64 =
        env::var("SESSION_SECRET").expect("SESSION_SECRET must be set in production");
    let secret_bytes = Engine::decode(&general_purpose::STANDARD, &secret_b64)?;
    anyhow::ensure!(
        secret_bytes.len() == 32,
        "SESSION_SECRET must decode to 32 bytes"
    );

    let mut secret = [0u8; 32];
    secret.copy_from_slice(&secret_bytes);

    Ok(AuthConfig {
        session_secret: secret,
        ..AuthConfig::default()
    })
}

fn cors_layer() -> CorsLayer {
    let frontend_origins = env::var("FRONTEND_ORIGINS")
        .unwrap_or_else(|_| "http://localhost:40922,http://127.0.0.1:40922".to_string());

    let allowed_origins: Vec<http::HeaderValue> = frontend_origins
        .split(',')
        .filter_map(|origin| origin.trim().parse().ok())
        .collect();

    CorsLayer::new()
        .allow_origin(allowed_origins)
        .allow_methods(AllowMethods::list([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ]))
        .allow_headers(AllowHeaders::list([
            header::CONTENT_TYPE,
            header::AUTHORIZATION,
            header::ACCEPT,
        ]))
        .allow_credentials(true)
}

fn build_app(pool: PgPool, auth_config: Arc<AuthConfig>) -> Router {
    // Task routes sit behind the session gate; auth routes are open.
    let middleware_state = AuthMiddlewareState::new(
        Arc::new(PgAuthRepository::new(pool.clone())),
        auth_config.clone(),
    );
    let session_gate = axum::middleware::from_fn(
        move |request: axum::extract::Request, next: axum::middleware::Next| {
            let state = middleware_state.clone();
            async move { require_session(state, request, next).await }
        },
    );

    let api = Router::new()
        .nest(
            "/tasks",
            tasks::task_router(pool.clone()).layer(session_gate),
        )
        .merge(auth::auth_router(pool, auth_config));

    Router::new()
        .nest("/api", api)
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer())
}
