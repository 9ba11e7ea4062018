use async_trait::async_trait;
use http::header::CACHE_CONTROL;

use crate::models::PriceSnapshot;
use crate::{AppError, Result};

/// Where the dashboard gets its snapshots from
#[async_trait]
pub trait SnapshotSource: Send + Sync {
    async fn fetch(&self) -> Result<PriceSnapshot>;
}

/// Talks to `GET /api/prices`
#[derive(Clone)]
pub struct ProxyClient {
    client: reqwest::Client,
    url: String,
}
impl ProxyClient {
    pub fn new(url: impl Into<String>) -> Result<Self> {
        let client = reqwest::Client::builder().gzip(true).build()?;
        Ok(Self {
            client,
            url: url.into(),
        })
    }
}

#[async_trait]
impl SnapshotSource for ProxyClient {
    async fn fetch(&self) -> Result<PriceSnapshot> {
        let response = self
            .client
            .get(&self.url)
            .header(CACHE_CONTROL, "no-store")
            .send()
            .await?;
        let status = response.status();
        if !status.is_success() {
            return Err(AppError::ReqwestError(format!("proxy answered {status}")));
        }
        let body = response.bytes().await?;
        let mut snapshot: PriceSnapshot = serde_json::from_slice(&body)?;
        snapshot.prices = snapshot.prices.validated()?;
        Ok(snapshot)
    }
}
