use crate::models::{vs_currencies, Coin, PriceSnapshot, Prices, SimplePriceResponse};
use crate::{AppError, Result};
use http::header::{ACCEPT, CACHE_CONTROL};

// simple-price endpoint of the upstream API
pub const COINGECKO_URI: &str = "https://api.coingecko.com/api/v3/simple/price";
// upstream may serve a copy up to this old
const REVALIDATE_HINT: &str = "max-age=30";

#[derive(Clone)]
pub struct PriceService {
    client: reqwest::Client,
    upstream_url: String,
}

impl PriceService {
    pub fn new(upstream_url: impl Into<String>) -> Result<Self> {
        let client = reqwest::Client::builder().gzip(true).build()?;
        Ok(PriceService {
            client,
            upstream_url: upstream_url.into(),
        })
    }
    /// One upstream request, no retries. Any failure means no snapshot.
    pub async fn snapshot(&self) -> Result<PriceSnapshot> {
        let coin = Coin::Bitcoin;
        tracing::debug!("requesting {} price from {}", coin.id(), self.upstream_url);
        let response = self
            .client
            .get(&self.upstream_url)
            .query(&[("ids", coin.id().to_string()), ("vs_currencies", vs_currencies())])
            .header(ACCEPT, "application/json")
            .header(CACHE_CONTROL, REVALIDATE_HINT)
            .send()
            .await?;
        let status = response.status();
        if !status.is_success() {
            return Err(AppError::ReqwestError(format!(
                "upstream request failed: {status}"
            )));
        }
        let body = response.bytes().await?;
        let payload: SimplePriceResponse = serde_json::from_slice(&body)?;
        let prices = Prices::try_from(payload)?;
        Ok(PriceSnapshot::new(prices))
    }
}
