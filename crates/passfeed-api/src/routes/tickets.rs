//! Issuer public key and direct ticket lookup.

use axum::extract::{Path, State};
use axum::routing::get;
use axum::{Json, Router};
use passfeed_core::{CredentialRecord, TicketId};

use crate::error::AppError;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/issue/eddsa-public-key", get(public_key))
        .route("/ticket/{ticket_id}", get(get_ticket))
}

/// GET /issue/eddsa-public-key: Hex public key of the issuing key.
#[utoipa::path(
    get,
    path = "/issue/eddsa-public-key",
    responses(
        (status = 200, description = "Hex-encoded Ed25519 public key", body = String),
        (status = 503, description = "No signing key configured", body = crate::error::ErrorBody),
    ),
    tag = "issuer"
)]
pub async fn public_key(State(state): State<AppState>) -> Result<Json<String>, AppError> {
    state
        .feed
        .public_key()
        .map(|key| Json(key.to_hex()))
        .ok_or_else(|| AppError::ServiceUnavailable("signing key not configured".into()))
}

/// GET /ticket/{ticket_id}: Look a ticket up in a freshly built catalog.
///
/// Dynamic records get new ids on every build, so only static tickets can
/// be found here; an id taken from a poll response never matches again.
#[utoipa::path(
    get,
    path = "/ticket/{ticket_id}",
    params(("ticket_id" = String, Path, description = "Ticket UUID")),
    responses(
        (status = 200, description = "The unsigned credential record", body = serde_json::Value),
        (status = 404, description = "No such ticket", body = crate::error::ErrorBody),
        (status = 500, description = "Catalog build failed", body = crate::error::ErrorBody),
    ),
    tag = "tickets"
)]
pub async fn get_ticket(
    State(state): State<AppState>,
    Path(ticket_id): Path<String>,
) -> Result<Json<CredentialRecord>, AppError> {
    let not_found = || AppError::NotFound("Ticket not found".into());
    // A malformed id cannot match any ticket.
    let ticket_id = TicketId::parse(&ticket_id).map_err(|_| not_found())?;
    state
        .feed
        .find_ticket(&ticket_id)
        .await?
        .map(Json)
        .ok_or_else(not_found)
}
