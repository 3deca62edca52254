use axum::http::StatusCode;

/// Body returned for every successful GET / request
pub const GREETING: &str = "Version 1 Running";

/// GET / handler - Return the fixed greeting
///
/// Always responds 200 OK with the same plain-text body. The request is
/// ignored beyond route matching and no shared state is touched.
pub async fn greeting_handler() -> (StatusCode, &'static str) {
    tracing::debug!("Serving greeting");
    (StatusCode::OK, GREETING)
}
