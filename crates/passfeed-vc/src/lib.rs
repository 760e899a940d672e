//! # passfeed-vc
//!
//! A [`TicketCredential`] is a [`CredentialRecord`](passfeed_core::CredentialRecord)
//! stamped with issuance metadata and bound to the requester's identity key,
//! plus an Ed25519 proof over the JCS-canonical bytes of the ticket data.
//!
//! ## Security Invariant
//!
//! - The signing input is [`TicketCredential::signing_input`]: the ticket
//!   data without the proof, canonicalized. Issuance and verification share
//!   this single code path.
//! - The [`Issuer`] holds the only signing key and never exposes it.

pub mod credential;
pub mod error;
pub mod issuer;
pub mod proof;

pub use credential::{TicketCredential, TicketData};
pub use error::{IssueError, VcError};
pub use issuer::Issuer;
pub use proof::{ProofType, TicketProof};
