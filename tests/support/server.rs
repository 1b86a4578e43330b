//! In-process API server bound to an ephemeral loopback port.

use std::net::SocketAddr;
use std::path::Path;
use std::sync::Arc;

use persona_risk::application::{ModelRegistry, RiskPredictor};
use persona_risk::infrastructure::config::Config;
use persona_risk::infrastructure::server::Server;
use persona_risk::port::inbound::prediction::RiskPrediction;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;

/// Loopback config on port 0 with default CORS and models settings.
pub fn local_config() -> Config {
    let mut config = Config::default();
    config.server.host = "127.0.0.1".to_string();
    config.server.port = 0;
    config
}

/// Loopback config loading artifacts from `dir`.
pub fn local_config_for(dir: &Path) -> Config {
    let mut config = local_config();
    config.models.directory = dir.to_path_buf();
    config
}

pub struct TestServer {
    addr: SocketAddr,
    shutdown: Option<oneshot::Sender<()>>,
    handle: Option<JoinHandle<persona_risk::error::Result<()>>>,
}

impl TestServer {
    /// Serve an in-memory registry.
    pub async fn with_registry(config: Config, registry: ModelRegistry) -> Self {
        let predictor: Arc<dyn RiskPrediction> = Arc::new(RiskPredictor::new(Arc::new(registry)));
        let server = Server::bind_with(config, predictor)
            .await
            .expect("bind test server");
        Self::spawn(server)
    }

    /// Serve artifacts loaded from `config.models.directory`.
    pub async fn from_artifacts(config: Config) -> Self {
        let server = Server::bind(config).await.expect("bind test server");
        Self::spawn(server)
    }

    fn spawn(server: Server) -> Self {
        let addr = server.local_addr().expect("local addr");
        let (tx, rx) = oneshot::channel::<()>();
        let handle = tokio::spawn(server.serve_until(async move {
            let _ = rx.await;
        }));
        Self {
            addr,
            shutdown: Some(tx),
            handle: Some(handle),
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    /// Signal shutdown and wait for the serve task to finish.
    pub async fn stop(mut self) {
        if let Some(tx) = self.shutdown.take() {
            let _ = tx.send(());
        }
        if let Some(handle) = self.handle.take() {
            handle
                .await
                .expect("serve task panicked")
                .expect("server exited cleanly");
        }
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown.take() {
            let _ = tx.send(());
        }
    }
}
