use std::net::SocketAddr;

use derive_builder::Builder;

use crate::{AppError, Result};

pub const ADDR_VAR: &str = "SATS_ADDR";
pub const PROXY_URL_VAR: &str = "SATS_PROXY_URL";

/// Settings for the proxy and the watcher
#[derive(Debug, Clone, PartialEq, Builder)]
#[builder(setter(into))]
pub struct Config {
    /// where the proxy listens
    #[builder(default = "SocketAddr::from(([0, 0, 0, 0], 8000))")]
    pub addr: SocketAddr,
    /// proxy endpoint polled by the watcher
    #[builder(default = "\"http://127.0.0.1:8000/api/prices\".to_string()")]
    pub proxy_url: String,
}

impl Config {
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }
    /// Reads the environment, `.env` included
    pub fn from_env() -> Result<Self> {
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| dotenvy::var(key).ok())
    }
    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut builder = Self::builder();
        if let Some(addr) = lookup(ADDR_VAR) {
            let addr: SocketAddr = addr
                .parse()
                .map_err(|e| AppError::ConfigError(format!("{ADDR_VAR}: {e}")))?;
            builder.addr(addr);
        }
        if let Some(url) = lookup(PROXY_URL_VAR) {
            builder.proxy_url(url);
        }
        Ok(builder.build()?)
    }
}

impl From<ConfigBuilderError> for AppError {
    fn from(value: ConfigBuilderError) -> Self {
        Self::ConfigError(value.to_string())
    }
}
