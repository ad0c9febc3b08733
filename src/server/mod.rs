//! HTTP server for the site backend.
//!
//! This module wires the services into an axum router and runs it.
//!
//! # Endpoints
//!
//! - `GET  /health`: Liveness probe
//! - `POST /api/chat`: Forward a conversation to the completion service
//! - `POST /api/contact`: Submit a contact-form message
//! - `GET  /api/contact`: List every contact message (unauthenticated)
//! - `POST /api/auth/register`: Register a user
//! - `POST /api/auth/login`: Check credentials
//! - `GET  /api/auth/users`: List registered users without passwords
//! - `GET  /api/features/{page}`: Notice for a disabled page
//! - `GET  /api/videos/{name}`: Resolve a video asset URL
//! - `GET  /api/metrics`: Metrics snapshot

pub mod handlers;

use crate::client::AsyncChatClient;
use crate::config::Config;
use crate::metrics::Metrics;
use crate::repositories::{InMemoryContactMessageRepository, InMemoryUserRepository};
use crate::services::{
    ChatService, ChatServiceImpl, ContactService, ContactServiceImpl, IdentityService,
    IdentityServiceImpl,
};
use anyhow::Result;
use axum::routing::{get, post};
use axum::Router;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Shared application state for the HTTP server.
#[derive(Clone)]
pub struct AppState {
    pub identity: Arc<dyn IdentityService>,
    pub contacts: Arc<dyn ContactService>,
    pub chat: Arc<dyn ChatService>,
    pub config: Arc<Config>,
    pub metrics: Metrics,
}

impl AppState {
    /// Build state backed by fresh in-memory stores.
    pub fn in_memory(config: Config, client: Arc<dyn AsyncChatClient>, metrics: Metrics) -> Self {
        let identity = Arc::new(IdentityServiceImpl::new(
            Arc::new(InMemoryUserRepository::new()),
            metrics.clone(),
        )) as Arc<dyn IdentityService>;
        let contacts = Arc::new(ContactServiceImpl::new(
            Arc::new(InMemoryContactMessageRepository::new()),
            metrics.clone(),
        )) as Arc<dyn ContactService>;
        let chat = Arc::new(ChatServiceImpl::new(client, metrics.clone())) as Arc<dyn ChatService>;

        Self {
            identity,
            contacts,
            chat,
            config: Arc::new(config),
            metrics,
        }
    }
}

/// Build the axum router with all routes.
pub fn app_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route("/api/chat", post(handlers::chat))
        .route(
            "/api/contact",
            post(handlers::submit_contact).get(handlers::list_contacts),
        )
        .route("/api/auth/register", post(handlers::register))
        .route("/api/auth/login", post(handlers::login))
        .route("/api/auth/users", get(handlers::list_users))
        .route("/api/features/{page}", get(handlers::feature_notice))
        .route("/api/videos/{name}", get(handlers::video_url))
        .route("/api/metrics", get(handlers::metrics))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Serve the router on `addr` until Ctrl-C.
pub async fn run_server(state: AppState, addr: SocketAddr) -> Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on {}", listener.local_addr()?);

    axum::serve(listener, app_router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
