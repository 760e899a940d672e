//! # Feed Protocol Routes
//!
//! Listing and polling the hosted feed. Request and response bodies are the
//! `passfeed_feed` wire types, serialized as-is.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::routing::get;
use axum::{Json, Router};
use passfeed_feed::{ListFeedsResponse, PollFeedRequest, PollFeedResponse};

use crate::error::AppError;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/feeds", get(list_feeds).post(poll_feed))
        .route("/feeds/{feed_id}", get(get_feed))
}

/// GET /feeds: List hosted feeds and provider details.
#[utoipa::path(
    get,
    path = "/feeds",
    responses(
        (status = 200, description = "Hosted feeds", body = serde_json::Value),
    ),
    tag = "feeds"
)]
pub async fn list_feeds(State(state): State<AppState>) -> Json<ListFeedsResponse> {
    Json(state.feed.list_feeds())
}

/// POST /feeds: Poll a feed.
///
/// An invalid or missing request credential is answered with an empty
/// action list, not an error.
#[utoipa::path(
    post,
    path = "/feeds",
    request_body = serde_json::Value,
    responses(
        (status = 200, description = "Folder actions for the requester", body = serde_json::Value),
        (status = 400, description = "Malformed poll body", body = crate::error::ErrorBody),
        (status = 404, description = "Unknown feed", body = crate::error::ErrorBody),
        (status = 500, description = "Catalog or issuance failure", body = crate::error::ErrorBody),
    ),
    tag = "feeds"
)]
pub async fn poll_feed(
    State(state): State<AppState>,
    body: Result<Json<PollFeedRequest>, JsonRejection>,
) -> Result<Json<PollFeedResponse>, AppError> {
    let Json(request) = body.map_err(|e| AppError::BadRequest(e.body_text()))?;
    let response = state.feed.handle_poll(&request).await?;
    Ok(Json(response))
}

/// GET /feeds/{feed_id}: List a single feed.
#[utoipa::path(
    get,
    path = "/feeds/{feed_id}",
    params(("feed_id" = String, Path, description = "Feed identifier")),
    responses(
        (status = 200, description = "The feed", body = serde_json::Value),
        (status = 404, description = "Unknown feed", body = crate::error::ErrorBody),
    ),
    tag = "feeds"
)]
pub async fn get_feed(
    State(state): State<AppState>,
    Path(feed_id): Path<String>,
) -> Result<Json<ListFeedsResponse>, AppError> {
    state
        .feed
        .list_single_feed(&feed_id)
        .map(Json)
        .ok_or_else(|| AppError::NotFound("not found".into()))
}
