//! # Key Subcommands
//!
//! `keygen` writes `<prefix>.key` (hex seed) and `<prefix>.pub` (hex public
//! key). `pubkey` prints the public key of an existing seed, e.g. to hand
//! to clients or to set as `ZUPASS_PUBLIC_KEY` for a test identity provider.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;
use passfeed_crypto::Ed25519KeyPair;

#[derive(Args, Debug)]
pub struct KeygenArgs {
    /// Output directory for the key files.
    #[arg(long, short, default_value = ".")]
    pub output: PathBuf,
    /// Key file name prefix.
    #[arg(long, default_value = "passfeed")]
    pub prefix: String,
}

#[derive(Args, Debug)]
pub struct PubkeyArgs {
    /// Hex seed file. Defaults to the SERVER_PRIVATE_KEY environment variable.
    #[arg(long)]
    pub key: Option<PathBuf>,
}

pub fn run_keygen(args: &KeygenArgs) -> Result<u8> {
    let (key_path, pub_path) = keygen(&args.output, &args.prefix)?;
    println!("OK: generated Ed25519 key pair");
    println!("  Private key: {}", key_path.display());
    println!("  Public key:  {}", pub_path.display());
    Ok(0)
}

fn keygen(output: &Path, prefix: &str) -> Result<(PathBuf, PathBuf)> {
    std::fs::create_dir_all(output)
        .with_context(|| format!("failed to create output directory: {}", output.display()))?;

    let key = Ed25519KeyPair::generate();
    let key_path = output.join(format!("{prefix}.key"));
    let pub_path = output.join(format!("{prefix}.pub"));

    write_private(&key_path, key.seed_hex().as_bytes())
        .with_context(|| format!("failed to write private key: {}", key_path.display()))?;
    std::fs::write(&pub_path, key.public_key().to_hex())
        .with_context(|| format!("failed to write public key: {}", pub_path.display()))?;
    tracing::info!(public_key = %key.public_key(), "key pair generated");
    Ok((key_path, pub_path))
}

/// Write a secret file readable only by its owner.
#[cfg(unix)]
fn write_private(path: &Path, contents: &[u8]) -> std::io::Result<()> {
    use std::io::Write;
    use std::os::unix::fs::OpenOptionsExt;

    std::fs::OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .mode(0o600)
        .open(path)?
        .write_all(contents)
}

#[cfg(not(unix))]
fn write_private(path: &Path, contents: &[u8]) -> std::io::Result<()> {
    std::fs::write(path, contents)
}

pub fn run_pubkey(args: &PubkeyArgs) -> Result<u8> {
    let key = crate::load_key(args.key.as_deref(), "SERVER_PRIVATE_KEY")?;
    println!("{}", key.public_key());
    Ok(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use passfeed_crypto::Ed25519PublicKey;

    #[test]
    fn keygen_writes_matching_pair() {
        let dir = tempfile::tempdir().unwrap();
        let (key_path, pub_path) = keygen(dir.path(), "test").unwrap();

        let key = crate::load_key(Some(&key_path), "PASSFEED_TEST_UNUSED").unwrap();
        let public = Ed25519PublicKey::from_hex(&std::fs::read_to_string(pub_path).unwrap()).unwrap();
        assert_eq!(key.public_key(), public);
    }

    #[cfg(unix)]
    #[test]
    fn private_key_is_owner_only() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let (key_path, _) = keygen(dir.path(), "test").unwrap();
        let mode = std::fs::metadata(&key_path).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o600);
    }

    #[test]
    fn load_key_rejects_garbage() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.key");
        std::fs::write(&path, "zz").unwrap();
        assert!(crate::load_key(Some(&path), "PASSFEED_TEST_UNUSED").is_err());
    }

    #[test]
    fn load_key_without_file_or_env_fails() {
        assert!(crate::load_key(None, "PASSFEED_TEST_ABSENT_KEY").is_err());
    }
}
