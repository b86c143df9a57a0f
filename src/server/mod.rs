//! HTTP server exposing the seed datasets through axum.

pub mod routes;

use crate::config::ServerConfig;
use crate::query::RecordQueryEngine;
use crate::records::{seed, Account, Member, User};
use anyhow::{Context, Result};
use axum::Router;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;

/// Shared, read-only state for request handlers
pub struct AppState {
    pub config: ServerConfig,
    /// Team members (`/api/members`)
    pub members: RecordQueryEngine<Member>,
    /// Accounts (`/api/users`)
    pub accounts: RecordQueryEngine<Account>,
    /// Directory users (`/api/directory`)
    pub directory: RecordQueryEngine<User>,
}

impl AppState {
    /// State backed by the built-in seed datasets.
    pub fn new(config: ServerConfig) -> Arc<Self> {
        Self::with_datasets(config, seed::members(), seed::accounts(), seed::users())
    }

    pub fn with_datasets(
        config: ServerConfig,
        members: impl Into<Arc<[Member]>>,
        accounts: impl Into<Arc<[Account]>>,
        directory: impl Into<Arc<[User]>>,
    ) -> Arc<Self> {
        let page_size = config.default_page_size;
        Arc::new(Self {
            members: RecordQueryEngine::new(members).with_default_page_size(page_size),
            accounts: RecordQueryEngine::new(accounts).with_default_page_size(page_size),
            directory: RecordQueryEngine::new(directory).with_default_page_size(page_size),
            config,
        })
    }

    /// Sleep for the configured response delay, if any.
    pub async fn simulate_latency(&self) {
        if let Some(delay) = self.config.response_delay() {
            tokio::time::sleep(delay).await;
        }
    }
}

/// Build the application router
pub fn router(state: Arc<AppState>) -> Router {
    routes::routes()
        .with_state(state)
        .layer(CorsLayer::permissive())
}

/// Serve on an already-bound listener until the server stops.
pub async fn serve(listener: TcpListener, state: Arc<AppState>) -> Result<()> {
    let addr = listener.local_addr().context("Listener has no local address")?;
    tracing::info!(%addr, "listening");

    axum::serve(listener, router(state))
        .await
        .context("HTTP server failed")
}

/// Bind to the configured address and run the server
pub async fn run(config: ServerConfig) -> Result<()> {
    let addr = config.bind_addr();
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    let state = AppState::new(config);
    tracing::info!(
        members = state.members.len(),
        accounts = state.accounts.len(),
        directory = state.directory.len(),
        page_size = state.config.default_page_size,
        "datasets loaded"
    );

    serve(listener, state).await
}
