//! # Acadsync API
//!
//! The API crate provides the web server for the acadsync academic
//! administration service: sign-in endpoints for admins, students, and
//! teachers, read-only timetable views, and lab schedule generation.
//!
//! ## Architecture
//!
//! This crate follows a layered architecture:
//!
//! - **Routes**: Define API endpoints and URL structure
//! - **Handlers**: Implement request processing logic
//! - **Middleware**: Map domain errors onto HTTP responses
//! - **Config**: Handle environment and application configuration
//!
//! The API uses Axum as the web framework and SQLx for database access.

/// Configuration module for API settings
pub mod config;
/// Request handlers that implement business logic
pub mod handlers;
/// Middleware for error handling
pub mod middleware;
/// Route definitions and API endpoint structure
pub mod routes;

use std::sync::Arc;

use acadsync_core::models::lab_schedule::SchedulerConfig;
use axum::Router;
use eyre::Result;
use sqlx::PgPool;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::FmtSubscriber;

/// Shared application state that is accessible to all request handlers.
pub struct ApiState {
    /// PostgreSQL connection pool for database operations
    pub db_pool: PgPool,
    /// Defaults applied by the lab batch scheduler when a request omits
    /// sizing or timing parameters
    pub scheduler_config: SchedulerConfig,
}

/// Starts the API server with the provided configuration and database
/// connection: initializes logging, assembles the router, applies the
/// CORS and timeout layers, and serves until shutdown.
pub async fn start_server(config: config::ApiConfig, db_pool: PgPool) -> Result<()> {
    // Initialize tracing for logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(config.log_level)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    // Create shared state with dependencies
    let state = Arc::new(ApiState {
        db_pool,
        scheduler_config: config.scheduler.clone(),
    });

    // Build the application router with all routes
    let app = Router::new()
        // Health check endpoints
        .merge(routes::health::routes())
        // Sign-in endpoints
        .merge(routes::auth::routes())
        // Timetable view endpoints
        .merge(routes::timetable::routes())
        // Lab schedule generation
        .merge(routes::lab_schedule::routes())
        // Attach shared state to all routes
        .with_state(state);

    // Apply CORS configuration if origins are specified
    let app = if let Some(origins) = &config.cors_origins {
        let cors = tower_http::cors::CorsLayer::new()
            .allow_methods([
                axum::http::Method::GET,
                axum::http::Method::POST,
                axum::http::Method::PUT,
                axum::http::Method::DELETE,
                axum::http::Method::OPTIONS,
            ])
            .allow_headers([
                axum::http::header::CONTENT_TYPE,
                axum::http::header::AUTHORIZATION,
                axum::http::header::ACCEPT,
            ])
            .allow_origin(
                origins
                    .iter()
                    .map(|origin| origin.parse().unwrap())
                    .collect::<Vec<_>>(),
            )
            .allow_credentials(true);

        app.layer(cors)
    } else {
        app
    };

    // Add request timeout middleware
    let app = app.layer(
        tower::ServiceBuilder::new()
            .layer(axum::error_handling::HandleErrorLayer::new(
                |_err: axum::BoxError| async { axum::http::StatusCode::REQUEST_TIMEOUT },
            ))
            .timeout(std::time::Duration::from_secs(config.request_timeout))
            .into_inner(),
    );

    // Start the HTTP server
    let addr = config.server_addr();
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on http://{}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
