//! # Catalog Builder
//!
//! Fans out across registries and identifiers on a [`JoinSet`], fans back in
//! to a [`Catalog`]. The first error wins: remaining tasks are detached so
//! requests already on the wire complete and are ignored, and the error is
//! returned. Nothing is cached between builds.

use std::sync::Arc;

use metrics::counter;
use passfeed_core::{Catalog, Category, CredentialRecord, TicketId};
use passfeed_registry::{EvmRegistryClient, IdentityResolver, RegistryClient};
use tokio::task::JoinSet;

use crate::descriptor::{DescriptorTable, RecordTemplate, RegistrySource};
use crate::error::CatalogError;
use crate::normalize::{validate_record, Normalizer};

enum Source {
    Static(Vec<CredentialRecord>),
    Registry {
        client: Arc<dyn RegistryClient>,
        template: RecordTemplate,
    },
}

/// Aggregates every configured source into a fresh [`Catalog`].
pub struct CatalogBuilder {
    sources: Vec<(Category, Source)>,
    resolver: Arc<dyn IdentityResolver>,
    normalizer: Arc<Normalizer>,
}

impl std::fmt::Debug for CatalogBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let categories: Vec<&str> = self.sources.iter().map(|(c, _)| c.as_str()).collect();
        f.debug_struct("CatalogBuilder")
            .field("categories", &categories)
            .finish_non_exhaustive()
    }
}

impl CatalogBuilder {
    /// An empty builder resolving identities through `resolver`.
    pub fn new(resolver: Arc<dyn IdentityResolver>) -> Result<Self, CatalogError> {
        Ok(Self {
            sources: Vec::new(),
            resolver,
            normalizer: Arc::new(Normalizer::new()?),
        })
    }

    /// A builder for every source in `table`, with EVM registries queried
    /// over `http`.
    pub fn from_table(
        table: &DescriptorTable,
        http: reqwest::Client,
        resolver: Arc<dyn IdentityResolver>,
    ) -> Result<Self, CatalogError> {
        let mut builder = Self::new(resolver)?;
        for descriptor in table.iter() {
            let category = descriptor.category.clone();
            builder = match &descriptor.source {
                RegistrySource::Static { records } => builder.with_static(category, records.clone())?,
                RegistrySource::Evm {
                    rpc_url,
                    contract,
                    template,
                } => {
                    let client = EvmRegistryClient::new(http.clone(), rpc_url.clone(), contract.as_str())
                        .map_err(|e| CatalogError::InvalidDescriptor(format!("{category}: {e}")))?;
                    builder.with_registry(category, Arc::new(client), template.clone())?
                }
            };
        }
        Ok(builder)
    }

    /// Add a static record set. Records are validated here, once.
    pub fn with_static(
        mut self,
        category: Category,
        records: Vec<CredentialRecord>,
    ) -> Result<Self, CatalogError> {
        self.ensure_new(&category)?;
        for record in &records {
            validate_record(record, &category)?;
        }
        self.sources.push((category, Source::Static(records)));
        Ok(self)
    }

    /// Add a dynamic registry whose identifiers are resolved and mapped
    /// through `template`.
    pub fn with_registry(
        mut self,
        category: Category,
        client: Arc<dyn RegistryClient>,
        template: RecordTemplate,
    ) -> Result<Self, CatalogError> {
        self.ensure_new(&category)?;
        self.sources
            .push((category, Source::Registry { client, template }));
        Ok(self)
    }

    fn ensure_new(&self, category: &Category) -> Result<(), CatalogError> {
        if self.sources.iter().any(|(c, _)| c == category) {
            return Err(CatalogError::DuplicateCategory(category.to_string()));
        }
        Ok(())
    }

    pub fn categories(&self) -> impl Iterator<Item = &Category> {
        self.sources.iter().map(|(c, _)| c)
    }

    /// Build a fresh catalog from every source.
    ///
    /// Static categories are always present with their declared records.
    /// Each registry category holds one record per identifier, in the order
    /// the registry returned them.
    pub async fn build_catalog(&self) -> Result<Catalog, CatalogError> {
        let result = self.build_inner().await;
        match &result {
            Ok(catalog) => {
                counter!("passfeed_catalog_builds_total", "outcome" => "ok").increment(1);
                tracing::info!(
                    categories = catalog.len(),
                    records = catalog.record_count(),
                    "catalog built"
                );
                for (category, records) in catalog.iter() {
                    tracing::debug!(category = %category, records = records.len(), "catalog category");
                }
            }
            Err(e) => {
                counter!("passfeed_catalog_builds_total", "outcome" => "error").increment(1);
                tracing::warn!(error = %e, "catalog build failed");
            }
        }
        result
    }

    async fn build_inner(&self) -> Result<Catalog, CatalogError> {
        let mut catalog = Catalog::new();
        let mut tasks = JoinSet::new();

        for (category, source) in &self.sources {
            match source {
                Source::Static(records) => {
                    catalog.insert(category.clone(), records.clone());
                }
                Source::Registry { client, template } => {
                    tasks.spawn(populate(
                        category.clone(),
                        Arc::clone(client),
                        template.clone(),
                        Arc::clone(&self.resolver),
                        Arc::clone(&self.normalizer),
                    ));
                }
            }
        }

        for (category, records) in join_all(tasks).await? {
            catalog.insert(category, records);
        }
        Ok(catalog)
    }

    /// Look up a single record by ticket id in a freshly built catalog.
    pub async fn find_ticket(
        &self,
        ticket_id: &TicketId,
    ) -> Result<Option<CredentialRecord>, CatalogError> {
        let catalog = self.build_catalog().await?;
        Ok(catalog.find_ticket(ticket_id).cloned())
    }
}

/// Fetch one registry's identifiers and resolve each of them concurrently.
async fn populate(
    category: Category,
    client: Arc<dyn RegistryClient>,
    template: RecordTemplate,
    resolver: Arc<dyn IdentityResolver>,
    normalizer: Arc<Normalizer>,
) -> Result<(Category, Vec<CredentialRecord>), CatalogError> {
    let identifiers = client.fetch_identifiers().await.map_err(|source| {
        tracing::warn!(category = %category, error = %source, "registry fetch failed");
        CatalogError::Registry {
            category: category.to_string(),
            source,
        }
    })?;

    let template = Arc::new(template);
    let mut tasks = JoinSet::new();
    for (index, identifier) in identifiers.into_iter().enumerate() {
        let category = category.clone();
        let template = Arc::clone(&template);
        let resolver = Arc::clone(&resolver);
        let normalizer = Arc::clone(&normalizer);
        tasks.spawn(async move {
            let raw = resolver.resolve(&identifier).await.map_err(|source| {
                tracing::warn!(
                    category = %category,
                    identifier = %identifier,
                    error = %source,
                    "identity resolution failed"
                );
                CatalogError::Registry {
                    category: category.to_string(),
                    source,
                }
            })?;
            let record = normalizer.normalize(&raw, &category, &template)?;
            Ok((index, record))
        });
    }

    let mut indexed = join_all(tasks).await?;
    indexed.sort_by_key(|(index, _)| *index);
    Ok((category, indexed.into_iter().map(|(_, r)| r).collect()))
}

/// Await every task; on the first error detach the rest and return it.
async fn join_all<T: 'static>(
    mut tasks: JoinSet<Result<T, CatalogError>>,
) -> Result<Vec<T>, CatalogError> {
    let mut out = Vec::with_capacity(tasks.len());
    while let Some(joined) = tasks.join_next().await {
        let outcome = joined
            .map_err(|e| CatalogError::Task(e.to_string()))
            .and_then(|r| r);
        match outcome {
            Ok(value) => out.push(value),
            Err(e) => {
                tasks.detach_all();
                return Err(e);
            }
        }
    }
    Ok(out)
}
