//! # passfeed-crypto
//!
//! Ed25519 signing for issued ticket credentials and verification of
//! inbound feed credentials.
//!
//! ## Security Invariant
//!
//! - Signing and verification take `&CanonicalBytes`, never raw bytes.
//! - Private key material is never serialized, logged or returned. Seeds
//!   read from configuration are wiped after use.
//! - Public key equality against a trusted key is constant-time
//!   ([`Ed25519PublicKey::ct_eq`]).

pub mod ed25519;
pub mod error;
mod hex;

pub use ed25519::{verify, Ed25519KeyPair, Ed25519PublicKey, Ed25519Signature};
pub use error::CryptoError;
