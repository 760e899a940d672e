//! # Issuer
//!
//! Holds the process-wide signing key. A missing key is not a startup
//! error: the service still serves feeds and lookups, and every issuance
//! fails with [`IssueError::SigningKeyUnavailable`].

use metrics::counter;
use passfeed_core::{CredentialRecord, EpochMillis, SemaphoreId};
use passfeed_crypto::{Ed25519KeyPair, Ed25519PublicKey};

use crate::credential::{TicketCredential, TicketData};
use crate::error::IssueError;
use crate::proof::{ProofType, TicketProof};

#[derive(Debug)]
pub struct Issuer {
    key: Option<Ed25519KeyPair>,
}

impl Issuer {
    pub fn new(key: Ed25519KeyPair) -> Self {
        Self { key: Some(key) }
    }

    /// An issuer with no key. Every `issue` call fails.
    pub fn unconfigured() -> Self {
        Self { key: None }
    }

    pub fn public_key(&self) -> Option<Ed25519PublicKey> {
        self.key.as_ref().map(Ed25519KeyPair::public_key)
    }

    /// Sign `record` for `holder`, stamped with the current time.
    pub fn issue(
        &self,
        record: &CredentialRecord,
        holder: &SemaphoreId,
    ) -> Result<TicketCredential, IssueError> {
        self.issue_at(record, holder, EpochMillis::now())
    }

    /// Sign `record` for `holder` with an explicit signing time.
    pub fn issue_at(
        &self,
        record: &CredentialRecord,
        holder: &SemaphoreId,
        signed_at: EpochMillis,
    ) -> Result<TicketCredential, IssueError> {
        let key = self.key.as_ref().ok_or(IssueError::SigningKeyUnavailable)?;
        let ticket = TicketData::issue(record, holder, signed_at);
        let canonical = TicketCredential::signing_input(&ticket)?;
        let proof = TicketProof {
            proof_type: ProofType::Ed25519Jcs,
            verification_method: key.public_key(),
            proof_value: key.sign(&canonical),
        };
        counter!("passfeed_credentials_issued_total").increment(1);
        tracing::debug!(ticket_id = %ticket.ticket_id, category = %ticket.ticket_category, "credential issued");
        Ok(TicketCredential::new(ticket, proof))
    }
}
