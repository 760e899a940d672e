//! # sign-claim
//!
//! Acts as a local identity provider: signs an email claim with a provider
//! seed and prints a complete poll body for `POST /feeds`. Point the server
//! at the matching public key with `ZUPASS_PUBLIC_KEY`.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use passfeed_core::SemaphoreId;
use passfeed_crypto::Ed25519KeyPair;
use passfeed_feed::{EmailClaim, FeedCredential};

#[derive(Args, Debug)]
pub struct SignClaimArgs {
    /// Identity provider seed file. Defaults to the ZUPASS_PRIVATE_KEY
    /// environment variable.
    #[arg(long)]
    pub key: Option<PathBuf>,
    /// Email address to claim.
    #[arg(long)]
    pub email: String,
    /// Semaphore identity the issued tickets are bound to.
    #[arg(long)]
    pub semaphore_id: String,
    /// Feed to poll.
    #[arg(long, default_value = "1")]
    pub feed_id: String,
}

pub fn run_sign_claim(args: &SignClaimArgs) -> Result<u8> {
    let key = crate::load_key(args.key.as_deref(), "ZUPASS_PRIVATE_KEY")?;
    let body = poll_body(&key, &args.email, &args.semaphore_id, &args.feed_id)?;
    println!("{}", serde_json::to_string_pretty(&body)?);
    Ok(0)
}

fn poll_body(
    key: &Ed25519KeyPair,
    email: &str,
    semaphore_id: &str,
    feed_id: &str,
) -> Result<serde_json::Value> {
    let claim = EmailClaim {
        email_address: email.to_string(),
        semaphore_id: SemaphoreId::new(semaphore_id).context("invalid semaphore id")?,
    };
    let credential = FeedCredential::sign(claim, key)?;
    Ok(serde_json::json!({
        "feedId": feed_id,
        "pcd": serde_json::to_value(credential)?,
    }))
}
