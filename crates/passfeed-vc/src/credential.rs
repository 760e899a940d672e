//! # Ticket Credential
//!
//! Wire shape (camelCase):
//!
//! ```json
//! {
//!   "ticket": {
//!     "attendeeEmail": "...", "attendeeName": "...", "eventName": "...",
//!     "ticketName": "...", "ticketId": "...", "eventId": "...",
//!     "productId": "...", "ticketCategory": "...",
//!     "checkerEmail": "", "isConsumed": false, "isRevoked": false,
//!     "attendeeSemaphoreId": "...",
//!     "timestampConsumed": 0, "timestampSigned": 1700000000000
//!   },
//!   "proof": { "type": "Ed25519JcsSignature", "verificationMethod": "<hex>", "proofValue": "<hex>" }
//! }
//! ```

use passfeed_core::{
    CanonicalBytes, CanonicalizationError, CredentialRecord, EpochMillis, EventId, ProductId,
    SemaphoreId, TicketCategory, TicketId,
};
use passfeed_crypto::Ed25519PublicKey;
use serde::{Deserialize, Serialize};

use crate::error::VcError;
use crate::proof::TicketProof;

/// The signed portion of a ticket credential.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct TicketData {
    pub attendee_email: String,
    pub attendee_name: String,
    pub event_name: String,
    pub ticket_name: String,
    pub ticket_id: TicketId,
    pub event_id: EventId,
    pub product_id: ProductId,
    pub ticket_category: TicketCategory,
    /// Always empty at issuance: nobody has checked the ticket in.
    pub checker_email: String,
    pub is_consumed: bool,
    pub is_revoked: bool,
    pub attendee_semaphore_id: SemaphoreId,
    pub timestamp_consumed: EpochMillis,
    pub timestamp_signed: EpochMillis,
}

impl TicketData {
    /// Stamp issuance metadata onto `record` for `holder`.
    pub fn issue(record: &CredentialRecord, holder: &SemaphoreId, signed_at: EpochMillis) -> Self {
        Self {
            attendee_email: record.attendee_email.clone(),
            attendee_name: record.attendee_name.clone(),
            event_name: record.event_name.clone(),
            ticket_name: record.ticket_name.clone(),
            ticket_id: record.ticket_id,
            event_id: record.event_id,
            product_id: record.product_id,
            ticket_category: record.ticket_category,
            checker_email: String::new(),
            is_consumed: false,
            is_revoked: false,
            attendee_semaphore_id: holder.clone(),
            timestamp_consumed: EpochMillis::ZERO,
            timestamp_signed: signed_at,
        }
    }

    /// The credential record this ticket was issued from.
    pub fn record(&self) -> CredentialRecord {
        CredentialRecord {
            attendee_email: self.attendee_email.clone(),
            attendee_name: self.attendee_name.clone(),
            event_name: self.event_name.clone(),
            ticket_name: self.ticket_name.clone(),
            ticket_id: self.ticket_id,
            event_id: self.event_id,
            product_id: self.product_id,
            ticket_category: self.ticket_category,
        }
    }
}

/// Ticket data plus its proof. Immutable once issued.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TicketCredential {
    ticket: TicketData,
    proof: TicketProof,
}

impl TicketCredential {
    pub(crate) fn new(ticket: TicketData, proof: TicketProof) -> Self {
        Self { ticket, proof }
    }

    pub fn ticket(&self) -> &TicketData {
        &self.ticket
    }

    pub fn proof(&self) -> &TicketProof {
        &self.proof
    }

    /// Canonical bytes of the ticket data. This is what the proof signs.
    pub fn signing_input(ticket: &TicketData) -> Result<CanonicalBytes, CanonicalizationError> {
        CanonicalBytes::new(ticket)
    }

    /// Check the proof under `issuer`.
    ///
    /// Fails if the proof names a different key, or if the signature does
    /// not cover the current ticket data.
    pub fn verify(&self, issuer: &Ed25519PublicKey) -> Result<(), VcError> {
        if &self.proof.verification_method != issuer {
            return Err(VcError::KeyMismatch(self.proof.verification_method.to_hex()));
        }
        let canonical = Self::signing_input(&self.ticket)?;
        passfeed_crypto::verify(&canonical, &self.proof.proof_value, issuer)?;
        Ok(())
    }
}
