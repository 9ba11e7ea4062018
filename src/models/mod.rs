mod currency;
mod price;
pub use currency::*;
pub use price::*;

use crate::price_service::PriceService;

/// State shared by the handlers
#[derive(Clone)]
pub struct AppState {
    pub price_service: PriceService,
}
impl AppState {
    /// Wraps the services the handlers need
    pub fn new(price_service: PriceService) -> Self {
        Self { price_service }
    }
}
