pub mod health;
pub mod pages;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use tower_http::limit::RequestBodyLimitLayer;

use crate::roast::handlers;
use crate::state::AppState;

/// Builds the application router: the web page, the JSON/multipart API, the
/// health probe, and the upload size cap.
///
/// Two limit layers on purpose: `RequestBodyLimitLayer` turns an oversized
/// Content-Length into an early 413, and `DefaultBodyLimit` raises Axum's
/// built-in 2 MB extractor cap to the configured one for streamed bodies.
pub fn build_router(state: AppState) -> Router {
    let upload_cap = state.config.max_upload_bytes;

    Router::new()
        .route("/", get(pages::serve_index).post(pages::handle_form))
        .route("/api/roast", post(handlers::handle_roast))
        .route("/api/improve", post(handlers::handle_improve))
        .route("/health", get(health::health_handler))
        .layer(DefaultBodyLimit::max(upload_cap))
        .layer(RequestBodyLimitLayer::new(upload_cap))
        .with_state(state)
}
