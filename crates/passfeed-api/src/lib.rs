//! # passfeed-api: HTTP Service
//!
//! ## API Surface
//!
//! | Route | Module | Purpose |
//! |---|---|---|
//! | `GET /` | here | greeting |
//! | `GET /feeds`, `POST /feeds`, `GET /feeds/{feed_id}` | [`routes::feeds`] | feed protocol |
//! | `GET /issue/eddsa-public-key` | [`routes::tickets`] | issuer key |
//! | `GET /ticket/{ticket_id}` | [`routes::tickets`] | ticket lookup |
//! | `GET /metrics` | [`middleware::metrics`] | Prometheus exposition |
//! | `GET /openapi.json` | [`openapi`] | OpenAPI document |
//! | `GET /health/*` | here | probes |
//!
//! ## Middleware Stack (execution order)
//!
//! ```text
//! TraceLayer → metrics_middleware → Handler
//! ```

pub mod bootstrap;
pub mod config;
pub mod error;
pub mod middleware;
pub mod openapi;
pub mod routes;
pub mod state;

use axum::middleware::from_fn;
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;
use utoipa::ToSchema;

use crate::state::AppState;

/// Assemble the application router.
///
/// Health probes are mounted outside the metrics and trace layers.
pub fn app(state: AppState) -> Router {
    let api = Router::new()
        .route("/", get(greeting))
        .merge(routes::feeds::router())
        .merge(routes::tickets::router())
        .merge(openapi::router())
        .route("/metrics", get(middleware::metrics::render))
        .layer(from_fn(middleware::metrics::metrics_middleware))
        .layer(middleware::tracing_layer::layer())
        .with_state(state);

    let health = Router::new()
        .route("/health/liveness", get(liveness))
        .route("/health/readiness", get(readiness));

    Router::new().merge(health).merge(api)
}

#[derive(Debug, Serialize, ToSchema)]
pub struct Greeting {
    pub message: String,
}

/// GET /: Greeting.
#[utoipa::path(
    get,
    path = "/",
    responses((status = 200, description = "Greeting", body = Greeting)),
    tag = "feeds"
)]
pub async fn greeting() -> Json<Greeting> {
    Json(Greeting {
        message: "Hello World".into(),
    })
}

async fn liveness() -> &'static str {
    "ok"
}

async fn readiness() -> &'static str {
    "ready"
}
