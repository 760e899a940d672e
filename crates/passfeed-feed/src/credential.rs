//! # Request Credentials
//!
//! A poll is authenticated by a [`FeedCredential`]: an email-ownership
//! claim signed by the identity provider. The verifier accepts it only when
//! the Ed25519 signature covers the JCS form of the claim and the signer is
//! the configured trusted key.
//!
//! ```json
//! {
//!   "claim": { "emailAddress": "pablo@x.com", "semaphoreId": "1234" },
//!   "signer": "<64 hex>",
//!   "signature": "<128 hex>"
//! }
//! ```

use passfeed_core::{CanonicalBytes, SemaphoreId};
use passfeed_crypto::{CryptoError, Ed25519KeyPair, Ed25519PublicKey, Ed25519Signature};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The signed statement: this semaphore identity owns this email address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct EmailClaim {
    pub email_address: String,
    pub semaphore_id: SemaphoreId,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FeedCredential {
    pub claim: EmailClaim,
    pub signer: Ed25519PublicKey,
    pub signature: Ed25519Signature,
}

impl FeedCredential {
    /// Sign `claim` with `key`. Used by tooling and tests; the service only
    /// verifies.
    pub fn sign(claim: EmailClaim, key: &Ed25519KeyPair) -> Result<Self, RequestCredentialInvalid> {
        let canonical = CanonicalBytes::new(&claim)
            .map_err(|e| RequestCredentialInvalid::Malformed(e.to_string()))?;
        Ok(Self {
            signature: key.sign(&canonical),
            signer: key.public_key(),
            claim,
        })
    }

    /// Decode the raw `pcd` field of a poll request.
    pub fn from_pcd(pcd: Option<&serde_json::Value>) -> Result<Self, RequestCredentialInvalid> {
        let value = match pcd {
            None | Some(serde_json::Value::Null) => return Err(RequestCredentialInvalid::Missing),
            Some(v) => v,
        };
        Self::deserialize(value).map_err(|e| RequestCredentialInvalid::Malformed(e.to_string()))
    }
}

/// The identity a verified credential speaks for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerifiedRequester {
    pub email: String,
    pub semaphore_id: SemaphoreId,
}

/// Why a request credential was not accepted. Never surfaced to the
/// client; a poll with an invalid credential gets an empty action list.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RequestCredentialInvalid {
    #[error("no credential presented")]
    Missing,

    #[error("malformed credential: {0}")]
    Malformed(String),

    #[error("no trusted identity provider key configured")]
    NoTrustedKey,

    #[error("credential signed by untrusted key {0}")]
    UntrustedSigner(Ed25519PublicKey),

    #[error("credential signature rejected: {0}")]
    BadSignature(CryptoError),
}

pub trait RequestCredentialVerifier: Send + Sync {
    fn verify(&self, credential: &FeedCredential) -> Result<VerifiedRequester, RequestCredentialInvalid>;
}

/// Accepts email claims signed by one trusted identity-provider key.
///
/// With no key configured every credential is rejected.
#[derive(Debug, Clone)]
pub struct EmailClaimVerifier {
    trusted: Option<Ed25519PublicKey>,
}

impl EmailClaimVerifier {
    pub fn new(trusted: Ed25519PublicKey) -> Self {
        Self {
            trusted: Some(trusted),
        }
    }

    pub fn untrusting() -> Self {
        Self { trusted: None }
    }

    pub fn trusted_key(&self) -> Option<&Ed25519PublicKey> {
        self.trusted.as_ref()
    }
}

impl RequestCredentialVerifier for EmailClaimVerifier {
    fn verify(&self, credential: &FeedCredential) -> Result<VerifiedRequester, RequestCredentialInvalid> {
        let trusted = self.trusted.as_ref().ok_or(RequestCredentialInvalid::NoTrustedKey)?;
        if !credential.signer.ct_eq(trusted) {
            return Err(RequestCredentialInvalid::UntrustedSigner(credential.signer));
        }
        let canonical = CanonicalBytes::new(&credential.claim)
            .map_err(|e| RequestCredentialInvalid::Malformed(e.to_string()))?;
        passfeed_crypto::verify(&canonical, &credential.signature, trusted)
            .map_err(RequestCredentialInvalid::BadSignature)?;
        Ok(VerifiedRequester {
            email: credential.claim.email_address.clone(),
            semaphore_id: credential.claim.semaphore_id.clone(),
        })
    }
}
