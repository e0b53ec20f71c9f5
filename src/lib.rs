// src/lib.rs
use anyhow::Result;
use axum::{middleware::from_fn_with_state, routing::get, Router};

use handlers::*;

// Public exports (visible outside this module)
pub mod domain;
pub mod envelope;

// Internal-only exports (sibling access within this module)
mod app_state;
mod config;
mod handlers;
mod infrastructure;
mod middleware;

use envelope::{define_api_handler, define_simple_handler, HandlerOptions};

// Hoist up only the public symbol(s)
pub use app_state::AppState;
pub use config::*;
pub use handlers::RequestContext;

// Publicly expose the infrastructure creation functions
pub use infrastructure::{
    connect_with_retry, // ---
    create_noop_metrics,
    create_postgres_repository,
    create_prom_metrics,
    run_migrations,
};

/// Build the HTTP router around an already assembled [`AppState`].
///
/// Every JSON route is a business function wrapped in the response envelope.
pub fn create_router(state: AppState) -> Router {
    // ---
    // Binaries install their own subscriber first; this covers tests.
    tracing_subscriber::fmt::try_init().ok();

    let api = |message: &str| HandlerOptions::new().error_message(message);

    Router::new()
        .route("/", get(root_handler))
        .route(
            "/user",
            get(define_simple_handler(example_user, HandlerOptions::new())),
        )
        .route(
            "/users",
            get(define_api_handler(list_users, api("Failed to fetch user list"))).post(
                define_api_handler(
                    create_user,
                    api("Failed to create user").success_message("Created successfully"),
                ),
            ),
        )
        .route(
            "/users/page",
            get(define_api_handler(list_users_page, api("Failed to fetch user page"))),
        )
        .route(
            "/users/{id}/posts",
            get(define_api_handler(list_user_posts, api("Failed to fetch posts"))),
        )
        .route(
            "/health",
            get(define_api_handler(health_check, api("Database connection failed"))),
        )
        .route(
            "/db-version",
            get(define_api_handler(db_version, api("Failed to fetch database version"))),
        )
        .route("/metrics", get(metrics_handler))
        .route_layer(from_fn_with_state(state.clone(), middleware::track_requests))
        .with_state(state)
}

/// Build the full application from configuration: metrics backend,
/// database pool (with retry), migrations, repository and router.
pub async fn create_app(config: &AppConfig) -> Result<Router> {
    // ---
    let metrics = match config.server.metrics {
        MetricsKind::Prometheus => create_prom_metrics()?,
        MetricsKind::Noop => create_noop_metrics()?,
    };

    let pool = connect_with_retry(&config.database).await?;
    run_migrations(&pool).await?;

    let repository = create_postgres_repository(pool);

    Ok(create_router(AppState::new(repository, metrics)))
}
