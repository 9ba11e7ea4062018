mod error;

pub use error::{AppError, Result};
pub mod client;
pub mod config;
pub mod logging;
pub mod models;
pub mod price_service;
pub mod routes;
#[cfg(test)]
mod test_support;

use config::Config;
use models::AppState;
use price_service::{PriceService, COINGECKO_URI};
use tokio::net::TcpListener;

pub struct LocalService {
    config: Config,
}
impl LocalService {
    pub fn new(config: Config) -> Self {
        Self { config }
    }
    /// Serves `GET /api/prices` until Ctrl-C
    pub async fn run(&self) -> anyhow::Result<()> {
        let price_service = PriceService::new(COINGECKO_URI)?;
        let state = AppState::new(price_service);
        let router = routes::init(state);
        let listener = TcpListener::bind(self.config.addr).await?;
        tracing::info!("listening on {}", listener.local_addr()?);
        axum::serve(listener, router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;
        tracing::info!("server stopped");
        Ok(())
    }
}

pub async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to listen for ctrl-c: {e:?}");
    }
}
