//! # passfeed-catalog
//!
//! Builds the [`Catalog`](passfeed_core::Catalog): the merged view of every
//! static record set and every dynamic registry.
//!
//! ## Pipeline
//!
//! ```text
//! DescriptorTable ──► CatalogBuilder::build_catalog
//!                       ├─ static sources: copied verbatim
//!                       └─ registry sources (concurrently):
//!                            fetch identifiers
//!                            └─ per identifier (concurrently):
//!                                 resolve ─► Normalizer::normalize
//! ```
//!
//! ## Failure Policy
//!
//! All or nothing. One failed registry fetch, resolution or normalization
//! fails the whole build; no partial catalog is returned. Sibling tasks
//! still in flight are detached and their results discarded.

pub mod builder;
pub mod descriptor;
pub mod error;
pub mod normalize;

pub use builder::CatalogBuilder;
pub use descriptor::{DescriptorTable, RecordTemplate, RegistryDescriptor, RegistrySource};
pub use error::CatalogError;
pub use normalize::{validate_record, Normalizer};
