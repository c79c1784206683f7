// HTTP routes

mod http;

use axum::{Router, routing::get};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

use crate::collector::FileCollector;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) collector: Arc<FileCollector>,
}

pub fn app(collector: Arc<FileCollector>) -> Router {
    let state = AppState { collector };
    Router::new()
        .route("/", get(|| async { "perfsnap: per-tab performance snapshots" })) // GET /
        .route("/version", get(http::version_handler)) // GET /version
        .route("/api/snapshot", get(http::snapshot_handler)) // GET /api/snapshot
        .route("/api/extensions", get(http::extensions_handler)) // GET /api/extensions
        .layer(CorsLayer::new().allow_origin(Any))
        .with_state(state)
}
