// Route path constants and router assembly - single source of truth for
// what the binary serves and what the tests exercise.

use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

use crate::handlers;

pub const ROOT: &str = "/";

/// Build the application router
///
/// Registers the single greeting route and the request-trace layer.
/// Unrouted paths and methods fall through to axum's defaults; no
/// fallback is registered.
pub fn app() -> Router {
    Router::new()
        .route(ROOT, get(handlers::greeting_handler))
        .layer(TraceLayer::new_for_http())
}
