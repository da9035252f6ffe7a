//! HTTP server for clubauth.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;

use crate::config::ServerConfig;
use crate::db::{AccountRepository, Database};

use super::handlers::AppState;
use super::router::create_router;

/// HTTP server for the account API.
pub struct WebServer {
    /// Server configuration.
    config: ServerConfig,
    /// Application state.
    app_state: Arc<AppState>,
}

impl WebServer {
    /// Create a new web server around an account repository.
    pub fn new(config: &ServerConfig, accounts: Arc<dyn AccountRepository>) -> Self {
        Self {
            config: config.clone(),
            app_state: Arc::new(AppState::new(accounts)),
        }
    }

    /// Create a new web server backed by a database.
    pub fn from_database(config: &ServerConfig, db: &Database) -> Self {
        Self {
            config: config.clone(),
            app_state: Arc::new(AppState::from_database(db)),
        }
    }

    /// Get the configured host and port.
    pub fn bind_address(&self) -> (&str, u16) {
        (self.config.host.as_str(), self.config.port)
    }

    fn router(&self) -> Router {
        create_router(self.app_state.clone(), &self.config)
    }

    async fn bind(&self) -> Result<TcpListener, std::io::Error> {
        TcpListener::bind(self.bind_address()).await
    }

    /// Run the web server until Ctrl-C.
    pub async fn run(self) -> Result<(), std::io::Error> {
        let router = self.router();
        let listener = self.bind().await?;
        let local_addr = listener.local_addr()?;

        tracing::info!("Server running on http://{}", local_addr);

        axum::serve(listener, router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("Server stopped");
        Ok(())
    }

    /// Run the server in the background and return the actual bound address.
    ///
    /// This is useful for testing when binding to port 0.
    pub async fn run_with_addr(self) -> Result<SocketAddr, std::io::Error> {
        let router = self.router();
        let listener = self.bind().await?;
        let local_addr = listener.local_addr()?;

        tracing::info!("Server running on http://{}", local_addr);

        tokio::spawn(async move {
            if let Err(e) = axum::serve(listener, router).await {
                tracing::error!("Web server error: {}", e);
            }
        });

        Ok(local_addr)
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
