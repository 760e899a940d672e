//! Proof object attached to a ticket credential.

use passfeed_crypto::{Ed25519PublicKey, Ed25519Signature};
use serde::{Deserialize, Serialize};

/// The signature scheme of a proof.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProofType {
    /// Ed25519 over the RFC 8785 canonical JSON of the ticket data.
    #[serde(rename = "Ed25519JcsSignature")]
    Ed25519Jcs,
}

/// A detached Ed25519 proof. Both keys and signatures are hex on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct TicketProof {
    #[serde(rename = "type")]
    pub proof_type: ProofType,
    /// Public key of the issuer.
    pub verification_method: Ed25519PublicKey,
    pub proof_value: Ed25519Signature,
}
