use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::CurrencyCode;
use crate::{AppError, Result};

pub const PRICE_ERROR_MESSAGE: &str = "Failed to fetch Bitcoin price data.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Coin {
    #[default]
    #[serde(rename = "bitcoin")]
    Bitcoin,
}
impl Coin {
    /// id of the coin in the upstream API
    pub fn id(&self) -> &'static str {
        match self {
            Self::Bitcoin => "bitcoin",
        }
    }
}

/// Price of one bitcoin in every tracked currency
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub struct Prices {
    pub usd: f64,
    pub eur: f64,
    pub jpy: f64,
    pub gbp: f64,
    pub aud: f64,
    pub cad: f64,
    pub chf: f64,
    pub cny: f64,
    pub hkd: f64,
    pub idr: f64,
}
impl Prices {
    pub fn get(&self, code: CurrencyCode) -> f64 {
        match code {
            CurrencyCode::Usd => self.usd,
            CurrencyCode::Eur => self.eur,
            CurrencyCode::Jpy => self.jpy,
            CurrencyCode::Gbp => self.gbp,
            CurrencyCode::Aud => self.aud,
            CurrencyCode::Cad => self.cad,
            CurrencyCode::Chf => self.chf,
            CurrencyCode::Cny => self.cny,
            CurrencyCode::Hkd => self.hkd,
            CurrencyCode::Idr => self.idr,
        }
    }
    /// builds the record from a lookup, failing on the first missing or invalid amount
    fn try_collect(mut lookup: impl FnMut(CurrencyCode) -> Option<f64>) -> Result<Self> {
        let mut amount = |code: CurrencyCode| check_amount(code, lookup(code));
        Ok(Self {
            usd: amount(CurrencyCode::Usd)?,
            eur: amount(CurrencyCode::Eur)?,
            jpy: amount(CurrencyCode::Jpy)?,
            gbp: amount(CurrencyCode::Gbp)?,
            aud: amount(CurrencyCode::Aud)?,
            cad: amount(CurrencyCode::Cad)?,
            chf: amount(CurrencyCode::Chf)?,
            cny: amount(CurrencyCode::Cny)?,
            hkd: amount(CurrencyCode::Hkd)?,
            idr: amount(CurrencyCode::Idr)?,
        })
    }
    /// re-checks amounts that came from an untrusted source
    pub fn validated(self) -> Result<Self> {
        Self::try_collect(|code| Some(self.get(code)))
    }
}

fn check_amount(code: CurrencyCode, value: Option<f64>) -> Result<f64> {
    match value {
        Some(v) if v.is_finite() && v >= 0.0 => Ok(v),
        Some(v) => Err(AppError::InvalidPayload(format!("{code} price is invalid: {v}"))),
        None => Err(AppError::InvalidPayload(format!("{code} price is missing"))),
    }
}

/// Body of a successful `GET /api/prices`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceSnapshot {
    pub coin: Coin,
    pub last_updated: DateTime<Utc>,
    pub prices: Prices,
}
impl PriceSnapshot {
    pub fn new(prices: Prices) -> Self {
        Self {
            coin: Coin::Bitcoin,
            last_updated: Utc::now(),
            prices,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorPayload {
    pub error: String,
}
impl Default for ErrorPayload {
    fn default() -> Self {
        Self {
            error: PRICE_ERROR_MESSAGE.to_string(),
        }
    }
}

/// Upstream `simple/price` body: `{"bitcoin": {"usd": 65000, ...}}`
#[derive(Debug, Deserialize)]
pub struct SimplePriceResponse {
    bitcoin: Option<HashMap<String, serde_json::Value>>,
}
impl TryFrom<SimplePriceResponse> for Prices {
    type Error = AppError;

    fn try_from(value: SimplePriceResponse) -> Result<Self> {
        let quotes = value.bitcoin.ok_or_else(|| {
            AppError::InvalidPayload(format!("{} is missing", Coin::Bitcoin.id()))
        })?;
        Prices::try_collect(|code| quotes.get(&code.upstream_key()).and_then(|v| v.as_f64()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CURRENCIES;
    use anyhow::Result;

    fn parse(body: &str) -> crate::Result<Prices> {
        let response: SimplePriceResponse = serde_json::from_str(body)?;
        Prices::try_from(response)
    }

    #[test]
    fn test_full_payload_maps_one_to_one() -> Result<()> {
        let prices = parse(
            r#"{"bitcoin":{"usd":65000,"eur":60000,"jpy":9800000,"gbp":51000,"aud":97000,
            "cad":88000,"chf":57000,"cny":470000,"hkd":508000,"idr":1020000000}}"#,
        )?;
        assert_eq!(prices.get(CurrencyCode::Usd), 65000.0);
        assert_eq!(prices.get(CurrencyCode::Jpy), 9_800_000.0);
        assert_eq!(prices.get(CurrencyCode::Idr), 1_020_000_000.0);
        for currency in CURRENCIES {
            let amount = prices.get(currency.code);
            assert!(amount.is_finite() && amount >= 0.0);
        }
        Ok(())
    }
    #[test]
    fn test_partial_payload_is_rejected() {
        let result = parse(r#"{"bitcoin":{"usd":65000}}"#);
        assert!(matches!(result, Err(AppError::InvalidPayload(_))));
    }
    #[test]
    fn test_wrong_types_are_rejected() {
        assert!(parse(
            r#"{"bitcoin":{"usd":"65000","eur":60000,"jpy":9800000,"gbp":51000,"aud":97000,
            "cad":88000,"chf":57000,"cny":470000,"hkd":508000,"idr":1020000000}}"#
        )
        .is_err());
        assert!(parse(
            r#"{"bitcoin":{"usd":-1,"eur":60000,"jpy":9800000,"gbp":51000,"aud":97000,
            "cad":88000,"chf":57000,"cny":470000,"hkd":508000,"idr":1020000000}}"#
        )
        .is_err());
        assert!(parse(r#"{"ethereum":{"usd":3000}}"#).is_err());
        assert!(parse(r#"{"bitcoin":null}"#).is_err());
        assert!(parse(r#"[]"#).is_err());
    }
    #[test]
    fn test_snapshot_wire_format() -> Result<()> {
        let prices = Prices {
            usd: 1.0,
            eur: 2.0,
            jpy: 3.0,
            gbp: 4.0,
            aud: 5.0,
            cad: 6.0,
            chf: 7.0,
            cny: 8.0,
            hkd: 9.0,
            idr: 10.0,
        };
        let value = serde_json::to_value(PriceSnapshot::new(prices))?;
        assert_eq!(value["coin"], "bitcoin");
        assert!(value["lastUpdated"].is_string());
        let keys = value["prices"]
            .as_object()
            .map(|o| o.keys().cloned().collect::<Vec<_>>())
            .unwrap_or_default();
        assert_eq!(keys.len(), 10);
        for currency in CURRENCIES {
            assert!(keys.contains(&currency.code.to_string()));
        }
        assert_eq!(
            serde_json::to_string(&ErrorPayload::default())?,
            r#"{"error":"Failed to fetch Bitcoin price data."}"#
        );
        Ok(())
    }
}
