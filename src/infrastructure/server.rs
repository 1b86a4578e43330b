//! HTTP server lifecycle: startup, serving and graceful shutdown.

use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;
use tracing::info;

use super::bootstrap::build_predictor;
use super::config::Config;
use crate::adapter::inbound::http::{router, AppState};
use crate::error::Result;
use crate::port::inbound::prediction::RiskPrediction;

/// A bound, not yet serving, HTTP server.
///
/// Models are loaded before binding; once a `Server` exists every artifact
/// has been validated.
pub struct Server {
    listener: TcpListener,
    state: AppState,
    config: Config,
}

impl Server {
    /// Load models and bind the configured address.
    ///
    /// # Errors
    ///
    /// Returns a startup error if any artifact is missing or invalid, or an
    /// IO error if the address cannot be bound.
    pub async fn bind(config: Config) -> Result<Self> {
        let predictor = build_predictor(&config.models.directory)?;
        Self::bind_with(config, Arc::new(predictor)).await
    }

    /// Bind the configured address with an already built predictor.
    ///
    /// # Errors
    ///
    /// Returns an error if the address is invalid or cannot be bound.
    pub async fn bind_with(config: Config, predictor: Arc<dyn RiskPrediction>) -> Result<Self> {
        let addr = config.bind_addr()?;
        let listener = TcpListener::bind(addr).await?;
        Ok(Self {
            listener,
            state: AppState::new(predictor),
            config,
        })
    }

    /// The address actually bound (resolves port `0`).
    ///
    /// # Errors
    ///
    /// Returns an IO error if the socket has no local address.
    pub fn local_addr(&self) -> Result<SocketAddr> {
        Ok(self.listener.local_addr()?)
    }

    /// Serve until `shutdown` resolves, then drain in-flight requests.
    ///
    /// # Errors
    ///
    /// Returns an IO error if the server fails while accepting connections.
    pub async fn serve_until<F>(self, shutdown: F) -> Result<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let addr = self.local_addr()?;
        let app = router(self.state, &self.config.cors);

        info!(
            %addr,
            origins = ?self.config.cors.allowed_origins,
            "Prediction API listening"
        );

        axum::serve(self.listener, app)
            .with_graceful_shutdown(shutdown)
            .await?;

        info!("Prediction API stopped");
        Ok(())
    }
}

/// Load models, bind, and serve until Ctrl-C.
///
/// # Errors
///
/// Returns any startup, bind or serve error.
pub async fn run(config: Config) -> Result<()> {
    let server = Server::bind(config).await?;
    server
        .serve_until(async {
            if tokio::signal::ctrl_c().await.is_ok() {
                info!("Shutdown signal received");
            }
        })
        .await
}
