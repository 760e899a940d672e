use thiserror::Error;

/// Key parsing and signature verification failures.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CryptoError {
    /// Malformed key material (wrong length, bad hex, not a curve point).
    #[error("invalid key: {0}")]
    InvalidKey(String),

    /// Malformed signature encoding.
    #[error("invalid signature encoding: {0}")]
    InvalidSignature(String),

    /// Well-formed signature that does not verify.
    #[error("signature verification failed")]
    VerificationFailed,
}
