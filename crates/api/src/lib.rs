//! Users API Library
//!
//! This crate provides the HTTP REST API over the user directory, plus the
//! generated OpenAPI document and Swagger UI.

pub mod config;
pub mod extractors;
pub mod handlers;
pub mod openapi;
pub mod routes;
pub mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use tower_http::trace::TraceLayer;
use tracing::info;

use user_service_lib::{build_user_service, UserService};

use crate::config::ApiConfig;
use crate::routes::create_router;
use crate::state::AppState;

/// Build the application router around a user service.
pub fn build_app(users: Arc<dyn UserService>, config: ApiConfig) -> Router {
    let state = AppState::new(users, config);
    create_router(state).layer(TraceLayer::new_for_http())
}

/// Run the HTTP server with the given configuration.
pub async fn run_server(config: ApiConfig) -> Result<(), Box<dyn std::error::Error>> {
    let users = build_user_service(&config.users);
    info!("Directory holds {} users", users.count_users().await?);

    // Build address
    let addr: SocketAddr = config.addr().parse()?;
    let app = build_app(users, config);

    info!("Users API listening on {}", addr);
    info!("API docs at http://{}/swagger-ui", addr);

    // Run server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
