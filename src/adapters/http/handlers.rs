//! Request handlers.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::error::ServiceError;

use super::AppState;

/// `GET /data`: one atomic increment, rendered as plain text.
///
/// Store failures become a 500 with a fixed body via `ServiceError`.
pub async fn data(State(state): State<AppState>) -> Result<String, ServiceError> {
    let count = state.counter.record_access().await?;
    Ok(count.render())
}

/// `GET /healthz`: liveness only, never consults the store.
pub async fn healthz() -> impl IntoResponse {
    (StatusCode::OK, "OK")
}
