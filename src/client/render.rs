use std::fmt::{self, Display, Formatter};

use super::{MoneyFormat, View};
use crate::models::{Currency, CURRENCIES};

pub const TITLE: &str = "Sats in Every Currency";
pub const SUBTITLE: &str = "Live Bitcoin price across major global currencies.";
pub const LOADING_MESSAGE: &str = "Loading Bitcoin price…";
pub const ERROR_MESSAGE: &str = "Failed to load price data.";
pub const FOOTER: &str = "Updates every 30 seconds. Data source: CoinGecko.";

/// Renders the dashboard page as text. Holds one formatter per currency.
pub struct Renderer {
    rows: Vec<(Currency, MoneyFormat)>,
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer {
    pub fn new() -> Self {
        let rows = CURRENCIES
            .iter()
            .map(|currency| (*currency, MoneyFormat::new(currency.code)))
            .collect();
        Self { rows }
    }

    pub fn render(&self, view: &View) -> String {
        Page {
            renderer: self,
            view,
        }
        .to_string()
    }
}

struct Page<'a> {
    renderer: &'a Renderer,
    view: &'a View,
}

impl Display for Page<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "{TITLE}")?;
        writeln!(f, "{SUBTITLE}")?;
        writeln!(f)?;
        match self.view {
            View::Loading => writeln!(f, "{LOADING_MESSAGE}")?,
            View::Error => writeln!(f, "{ERROR_MESSAGE}")?,
            View::Ready(snapshot) => {
                let rows = &self.renderer.rows;
                let name_width = rows
                    .iter()
                    .map(|(c, _)| c.name.chars().count())
                    .max()
                    .unwrap_or_default();
                for (currency, format) in rows {
                    let amount = format.format(snapshot.prices.get(currency.code));
                    writeln!(
                        f,
                        "{:<5}{:<name_width$}  {amount}",
                        currency.code.as_str(),
                        currency.name,
                    )?;
                }
            }
        }
        writeln!(f)?;
        write!(f, "{FOOTER}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{PriceSnapshot, Prices};

    fn ready() -> View {
        View::Ready(PriceSnapshot::new(Prices {
            usd: 65000.0,
            eur: 60000.0,
            jpy: 9_800_000.0,
            gbp: 51000.0,
            aud: 97000.0,
            cad: 88000.0,
            chf: 57000.0,
            cny: 470000.0,
            hkd: 508000.0,
            idr: 1_020_000_000.0,
        }))
    }

    #[test]
    fn test_loading_and_error_pages() {
        let renderer = Renderer::new();
        let loading = renderer.render(&View::Loading);
        assert!(loading.contains(LOADING_MESSAGE));
        assert!(!loading.contains(ERROR_MESSAGE));
        let error = renderer.render(&View::Error);
        assert!(error.contains(ERROR_MESSAGE));
        assert!(!error.contains("$65,000.00"));
        assert!(error.starts_with(TITLE));
        assert!(error.ends_with(FOOTER));
    }
    #[test]
    fn test_ready_page_lists_every_currency_in_order() {
        let page = Renderer::new().render(&ready());
        let rows = page
            .lines()
            .filter(|line| CURRENCIES.iter().any(|c| line.starts_with(c.code.as_str())))
            .collect::<Vec<_>>();
        assert_eq!(rows.len(), CURRENCIES.len());
        for (row, currency) in rows.iter().zip(CURRENCIES.iter()) {
            assert!(row.starts_with(currency.code.as_str()));
            assert!(row.contains(currency.name));
        }
        assert!(rows[0].ends_with("$65,000.00"));
        assert!(rows[2].ends_with("¥9,800,000"));
        assert!(rows[9].ends_with("IDR\u{a0}1,020,000,000"));
    }
    #[test]
    fn test_error_replaces_previous_prices() {
        let renderer = Renderer::new();
        assert!(renderer.render(&ready()).contains("€60,000.00"));
        let page = renderer.render(&View::Error);
        assert!(page.contains(ERROR_MESSAGE));
        assert!(!page.contains("€60,000.00"));
    }
}
