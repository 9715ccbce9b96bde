//! Request counting middleware.

use axum::{extract::Request, middleware::Next, response::Response};
use telemetry::metrics;

/// Counts every request that reaches the router.
pub async fn count_requests(request: Request, next: Next) -> Response {
    metrics().requests.inc();
    next.run(request).await
}
