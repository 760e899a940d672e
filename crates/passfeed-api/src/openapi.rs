//! # OpenAPI Document
//!
//! Generated from the utoipa-annotated handlers and served at
//! `/openapi.json`.

use axum::routing::get;
use axum::{Json, Router};
use utoipa::OpenApi;

use crate::state::AppState;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "passfeed",
        version = "0.1.0",
        description = "Credential feed server: lists its feed, answers polls with signed ticket credentials, and exposes the issuer key and ticket lookup.",
        license(name = "AGPL-3.0-or-later")
    ),
    paths(
        crate::greeting,
        crate::routes::feeds::list_feeds,
        crate::routes::feeds::poll_feed,
        crate::routes::feeds::get_feed,
        crate::routes::tickets::public_key,
        crate::routes::tickets::get_ticket,
    ),
    components(schemas(
        crate::Greeting,
        crate::error::ErrorBody,
        crate::error::ErrorDetail,
    )),
    tags(
        (name = "feeds", description = "Feed listing and polling"),
        (name = "issuer", description = "Issuing key"),
        (name = "tickets", description = "Ticket lookup"),
    )
)]
pub struct ApiDoc;

pub fn router() -> Router<AppState> {
    Router::new().route("/openapi.json", get(openapi_json))
}

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spec_lists_every_route() {
        let doc = ApiDoc::openapi();
        for path in [
            "/",
            "/feeds",
            "/feeds/{feed_id}",
            "/issue/eddsa-public-key",
            "/ticket/{ticket_id}",
        ] {
            assert!(doc.paths.paths.contains_key(path), "missing {path}");
        }
    }
}
