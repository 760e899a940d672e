//! # Request Metrics
//!
//! Counts requests and 4xx/5xx responses through the `metrics` facade.
//! Without an installed recorder the counters are no-ops; with one, the
//! Prometheus exposition is served at `/metrics`.

use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::Response;
use metrics::counter;

use crate::error::AppError;
use crate::state::AppState;

pub async fn metrics_middleware(request: Request, next: Next) -> Response {
    let method = request.method().to_string();
    let response = next.run(request).await;

    let status = response.status();
    counter!("passfeed_http_requests_total", "method" => method.clone()).increment(1);
    if status.is_client_error() || status.is_server_error() {
        counter!(
            "passfeed_http_errors_total",
            "method" => method,
            "status" => status.as_u16().to_string()
        )
        .increment(1);
    }
    response
}

/// GET /metrics: Prometheus text exposition.
pub async fn render(State(state): State<AppState>) -> Result<String, AppError> {
    state
        .metrics
        .as_ref()
        .map(|handle| handle.render())
        .ok_or_else(|| AppError::ServiceUnavailable("metrics recorder not installed".into()))
}
