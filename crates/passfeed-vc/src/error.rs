//! Issuance and verification errors.

use passfeed_core::CanonicalizationError;
use thiserror::Error;

/// Issuance failures.
#[derive(Error, Debug)]
pub enum IssueError {
    /// No signing key is configured. Fatal for the request; not retried.
    #[error("signing key unavailable")]
    SigningKeyUnavailable,

    #[error("canonicalization failed: {0}")]
    Canonicalization(#[from] CanonicalizationError),
}

/// Verification failures.
#[derive(Error, Debug)]
pub enum VcError {
    #[error("canonicalization failed: {0}")]
    Canonicalization(#[from] CanonicalizationError),

    /// The proof names a different key than the one supplied.
    #[error("proof verification method {0} does not match the expected key")]
    KeyMismatch(String),

    #[error("proof verification failed: {0}")]
    VerificationFailed(#[from] passfeed_crypto::CryptoError),
}
