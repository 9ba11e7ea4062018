use sats_api::{config::Config, logging::init_logging, LocalService};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging("info");
    let config = Config::from_env()?;
    tracing::info!("upstream: {}", sats_api::price_service::COINGECKO_URI);
    LocalService::new(config).run().await
}
