//! Server Implementation
//!
//! HTTP 服务器启动和管理

use crate::core::error::ServerError;
use crate::core::{Config, Result, ServerState};
use crate::services::http::build_router;

/// HTTP Server
pub struct Server {
    config: Config,
    state: Option<ServerState>,
}

impl Server {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            state: None,
        }
    }

    /// Create server with existing state
    pub fn with_state(config: Config, state: ServerState) -> Self {
        Self {
            config,
            state: Some(state),
        }
    }

    /// Serve until ctrl-c
    pub async fn run(&self) -> Result<()> {
        self.run_until(wait_for_shutdown(tokio::signal::ctrl_c())).await
    }

    pub async fn run_until<F>(&self, shutdown_signal: F) -> Result<()>
    where
        F: std::future::Future<Output = ()> + Send + 'static,
    {
        let state = match &self.state {
            Some(s) => s.clone(),
            None => ServerState::initialize(&self.config)?,
        };

        let addr = self.config.socket_addr();
        let listener = tokio::net::TcpListener::bind(addr)
            .await
            .map_err(|source| ServerError::Bind { addr, source })?;
        tracing::info!("🌅 Taboo Lounge site listening on {}", addr);

        axum::serve(listener, build_router(state))
            .with_graceful_shutdown(shutdown_signal)
            .await?;

        Ok(())
    }
}

/// Resolve once `signal` fires
///
/// A signal that fails to install never resolves.
async fn wait_for_shutdown<S>(signal: S)
where
    S: std::future::Future<Output = std::io::Result<()>>,
{
    match signal.await {
        Ok(()) => tracing::info!("Shutting down..."),
        Err(e) => {
            tracing::error!("Failed to listen for shutdown signal: {}", e);
            std::future::pending::<()>().await;
        }
    }
}
