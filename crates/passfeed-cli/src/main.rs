//! # passfeed CLI Entry Point

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use passfeed_cli::catalog::{run_catalog, run_ticket, CatalogArgs, TicketArgs};
use passfeed_cli::claim::{run_sign_claim, SignClaimArgs};
use passfeed_cli::keys::{run_keygen, run_pubkey, KeygenArgs, PubkeyArgs};

/// passfeed: credential feed tooling.
#[derive(Parser, Debug)]
#[command(name = "passfeed", version, about)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate an Ed25519 key pair.
    Keygen(KeygenArgs),
    /// Print the public key of a seed.
    Pubkey(PubkeyArgs),
    /// Build the catalog and print it as JSON.
    Catalog(CatalogArgs),
    /// Look up a ticket by id.
    Ticket(TicketArgs),
    /// Sign an email claim and print a poll request body.
    SignClaim(SignClaimArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let result = match &cli.command {
        Commands::Keygen(args) => run_keygen(args),
        Commands::Pubkey(args) => run_pubkey(args),
        Commands::Catalog(args) => run_catalog(args),
        Commands::Ticket(args) => run_ticket(args),
        Commands::SignClaim(args) => run_sign_claim(args),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            eprintln!("error: {e:#}");
            ExitCode::from(1)
        }
    }
}
