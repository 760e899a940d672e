//! Catalog construction errors.

use passfeed_registry::RegistryError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    /// A raw identity or a static record failed validation. Not retryable.
    #[error("schema violation in {category}: {reason}")]
    SchemaViolation { category: String, reason: String },

    /// A registry fetch or identity resolution failed.
    #[error("registry {category} failed: {source}")]
    Registry {
        category: String,
        #[source]
        source: RegistryError,
    },

    /// Two descriptors name the same category.
    #[error("duplicate category in descriptor table: {0}")]
    DuplicateCategory(String),

    /// A descriptor could not be parsed or turned into a client.
    #[error("invalid registry descriptor: {0}")]
    InvalidDescriptor(String),

    /// A population task panicked or was cancelled.
    #[error("catalog task failed: {0}")]
    Task(String),
}
