// GET handlers: version, snapshot, extensions

use axum::{extract::State, http::StatusCode, response::IntoResponse};

use super::AppState;
use crate::version::{NAME, VERSION};

/// GET /version — returns service name and version (from Cargo.toml at build time).
pub(super) async fn version_handler() -> impl IntoResponse {
    axum::Json(serde_json::json!({
        "name": NAME,
        "version": VERSION,
    }))
}

/// GET /api/snapshot — collects and aggregates a fresh snapshot per request.
pub(super) async fn snapshot_handler(State(state): State<AppState>) -> impl IntoResponse {
    match state.collector.collect_timestamped().await {
        Ok(snapshot) => axum::Json(snapshot).into_response(),
        Err(e) => (
            StatusCode::BAD_GATEWAY,
            axum::Json(serde_json::json!({ "error": e.to_string() })),
        )
            .into_response(),
    }
}

/// GET /api/extensions — extensions used to group samples by extension id.
pub(super) async fn extensions_handler(State(state): State<AppState>) -> impl IntoResponse {
    axum::Json(state.collector.registry().extensions().to_vec())
}
