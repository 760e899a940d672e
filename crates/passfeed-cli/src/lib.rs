//! # passfeed-cli: Command-Line Interface
//!
//! ## Subcommands
//!
//! - `keygen`: generate an Ed25519 key pair to files
//! - `pubkey`: print the public key of a seed
//! - `catalog`: build the catalog from the configured registries and print it
//! - `ticket`: look one ticket up in a freshly built catalog
//! - `sign-claim`: produce a signed poll request for local testing
//!
//! Argument parsing lives in the `*Args` types; handlers return an exit code
//! and leave printing errors to `main`.

pub mod catalog;
pub mod claim;
pub mod keys;

use std::path::Path;

use anyhow::{Context, Result};
use passfeed_crypto::Ed25519KeyPair;
use zeroize::Zeroizing;

/// Read a hex seed from `path`, or from `env_var` when no path is given.
pub fn load_key(path: Option<&Path>, env_var: &str) -> Result<Ed25519KeyPair> {
    let seed = match path {
        Some(path) => Zeroizing::new(
            std::fs::read_to_string(path)
                .with_context(|| format!("failed to read key file: {}", path.display()))?,
        ),
        None => Zeroizing::new(
            std::env::var(env_var)
                .with_context(|| format!("no key file given and {env_var} is not set"))?,
        ),
    };
    Ed25519KeyPair::from_hex_seed(&seed).context("key is not a 64-hex-char Ed25519 seed")
}
