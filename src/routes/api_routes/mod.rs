use crate::models::AppState;
use axum::routing::get;
use axum::Router;

mod prices;

pub fn init(state: AppState) -> Router {
    Router::new()
        .route("/prices", get(prices::prices))
        .with_state(state)
}
