use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

/// Currencies the bitcoin price is shown in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum CurrencyCode {
    Usd,
    Eur,
    Jpy,
    Gbp,
    Aud,
    Cad,
    Chf,
    Cny,
    Hkd,
    Idr,
}

impl CurrencyCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Usd => "USD",
            Self::Eur => "EUR",
            Self::Jpy => "JPY",
            Self::Gbp => "GBP",
            Self::Aud => "AUD",
            Self::Cad => "CAD",
            Self::Chf => "CHF",
            Self::Cny => "CNY",
            Self::Hkd => "HKD",
            Self::Idr => "IDR",
        }
    }
    /// key used by the upstream API, e.g. `usd`
    pub fn upstream_key(&self) -> String {
        self.as_str().to_lowercase()
    }
}
impl Display for CurrencyCode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Currency {
    pub code: CurrencyCode,
    pub name: &'static str,
}

/// Display order is the order of this table
pub const CURRENCIES: [Currency; 10] = [
    Currency {
        code: CurrencyCode::Usd,
        name: "US Dollar",
    },
    Currency {
        code: CurrencyCode::Eur,
        name: "Euro",
    },
    Currency {
        code: CurrencyCode::Jpy,
        name: "Japanese Yen",
    },
    Currency {
        code: CurrencyCode::Gbp,
        name: "British Pound",
    },
    Currency {
        code: CurrencyCode::Aud,
        name: "Australian Dollar",
    },
    Currency {
        code: CurrencyCode::Cad,
        name: "Canadian Dollar",
    },
    Currency {
        code: CurrencyCode::Chf,
        name: "Swiss Franc",
    },
    Currency {
        code: CurrencyCode::Cny,
        name: "Chinese Yuan",
    },
    Currency {
        code: CurrencyCode::Hkd,
        name: "Hong Kong Dollar",
    },
    Currency {
        code: CurrencyCode::Idr,
        name: "Indonesian Rupiah",
    },
];

/// `usd,eur,jpy,...` for the `vs_currencies` query parameter
pub fn vs_currencies() -> String {
    CURRENCIES
        .iter()
        .map(|c| c.code.upstream_key())
        .collect::<Vec<_>>()
        .join(",")
}
