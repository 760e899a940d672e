//! # Catalog Subcommands
//!
//! Build the catalog exactly as the server would for a poll, using the same
//! environment (`ZUPASS_API_URL`, `REGISTRY_TIMEOUT_SECS`) and an optional
//! descriptor file, and print it as JSON.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Args;
use passfeed_catalog::{CatalogBuilder, DescriptorTable};
use passfeed_core::TicketId;
use passfeed_registry::{RegistryApiConfig, ZupassIdentityClient};

#[derive(Args, Debug)]
pub struct CatalogArgs {
    /// YAML descriptor table. Defaults to the built-in registries.
    #[arg(long)]
    pub registries: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct TicketArgs {
    /// Ticket UUID.
    pub ticket_id: String,
    /// YAML descriptor table. Defaults to the built-in registries.
    #[arg(long)]
    pub registries: Option<PathBuf>,
}

pub fn run_catalog(args: &CatalogArgs) -> Result<u8> {
    let builder = builder(args.registries.as_deref())?;
    let catalog = runtime()?.block_on(builder.build_catalog())?;
    println!("{}", serde_json::to_string_pretty(&catalog)?);
    Ok(0)
}

pub fn run_ticket(args: &TicketArgs) -> Result<u8> {
    let ticket_id = TicketId::parse(&args.ticket_id)?;
    let builder = builder(args.registries.as_deref())?;
    match runtime()?.block_on(builder.find_ticket(&ticket_id))? {
        Some(record) => {
            println!("{}", serde_json::to_string_pretty(&record)?);
            Ok(0)
        }
        None => {
            eprintln!("Ticket not found");
            Ok(1)
        }
    }
}

fn descriptor_table(path: Option<&Path>) -> Result<DescriptorTable> {
    let table = match path {
        Some(path) => DescriptorTable::from_yaml_file(path)?,
        None => DescriptorTable::builtin()?,
    };
    Ok(table)
}

fn builder(registries: Option<&Path>) -> Result<CatalogBuilder> {
    let table = descriptor_table(registries)?;
    let config = RegistryApiConfig::from_env()?;
    let http = passfeed_registry::http_client(&config)?;
    let resolver = ZupassIdentityClient::new(http.clone(), config.identity_api_url.clone());
    tracing::debug!(registries = table.len(), "building catalog");
    Ok(CatalogBuilder::from_table(&table, http, Arc::new(resolver))?)
}

fn runtime() -> Result<tokio::runtime::Runtime> {
    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("failed to start async runtime")
}
