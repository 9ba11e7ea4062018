use std::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};

use crate::models::CurrencyCode;

const NBSP: char = '\u{a0}';

/// en-US money formatting for one currency: `$65,000.00`, `¥9,800,000`, `CHF 57,000.00`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoneyFormat {
    symbol: String,
    min_fraction_digits: usize,
}

impl MoneyFormat {
    pub fn new(code: CurrencyCode) -> Self {
        let symbol = match code {
            CurrencyCode::Usd => "$".to_string(),
            CurrencyCode::Eur => "€".to_string(),
            CurrencyCode::Jpy => "¥".to_string(),
            CurrencyCode::Gbp => "£".to_string(),
            CurrencyCode::Aud => "A$".to_string(),
            CurrencyCode::Cad => "CA$".to_string(),
            CurrencyCode::Cny => "CN¥".to_string(),
            CurrencyCode::Hkd => "HK$".to_string(),
            // no en-US symbol, the code is used
            CurrencyCode::Chf | CurrencyCode::Idr => format!("{code}{NBSP}"),
        };
        let min_fraction_digits = match code {
            CurrencyCode::Jpy | CurrencyCode::Idr => 0,
            _ => 2,
        };
        Self {
            symbol,
            min_fraction_digits,
        }
    }

    pub fn format(&self, amount: f64) -> String {
        let sign = if amount < 0.0 { "-" } else { "" };
        let (units, mut fraction) = round_to_cents(amount.abs());
        while fraction.len() > self.min_fraction_digits && fraction.ends_with('0') {
            fraction.pop();
        }
        let units = group_thousands(&units);
        if fraction.is_empty() {
            format!("{sign}{}{units}", self.symbol)
        } else {
            format!("{sign}{}{units}.{fraction}", self.symbol)
        }
    }
}

/// Rounds the shortest decimal form of `amount` half away from zero, so `1.005` gives `1.01`.
/// Returns integer digits and exactly two fraction digits.
fn round_to_cents(amount: f64) -> (String, String) {
    let rounded = match Decimal::from_str(&amount.to_string()) {
        Ok(value) => {
            let cents = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
            format!("{cents:.2}")
        }
        // out of Decimal range
        Err(_) => format!("{amount:.2}"),
    };
    match rounded.split_once('.') {
        Some((units, fraction)) => (units.to_string(), fraction.to_string()),
        None => (rounded, "00".to_string()),
    }
}

fn group_thousands(digits: &str) -> String {
    let mut result = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            result.push(',');
        }
        result.push(ch);
    }
    result
}
