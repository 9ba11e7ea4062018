use crate::models::{AppState, ErrorPayload};
use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use http::header::CACHE_CONTROL;
use http::StatusCode;

/// Same value on success and failure
pub const PRICES_CACHE_CONTROL: &str = "s-maxage=30, stale-while-revalidate=120";

pub(super) async fn prices(State(state): State<AppState>) -> impl IntoResponse {
    let headers = [(CACHE_CONTROL, PRICES_CACHE_CONTROL)];
    match state.price_service.snapshot().await {
        Ok(snapshot) => (StatusCode::OK, headers, Json(snapshot)).into_response(),
        Err(e) => {
            tracing::error!("failed to fetch bitcoin price: {e}");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                headers,
                Json(ErrorPayload::default()),
            )
                .into_response()
        }
    }
}
