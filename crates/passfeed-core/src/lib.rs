//! # passfeed-core: Foundational Types
//!
//! Every other crate in the workspace depends on `passfeed-core`; it depends
//! on nothing internal.
//!
//! ## Key Design Principles
//!
//! 1. **Newtype wrappers for identifiers.** `TicketId`, `EventId`,
//!    `ProductId` and `SemaphoreId` cannot be confused with one another or
//!    with free-form strings.
//!
//! 2. **Closed ticket category set.** [`TicketCategory`] is an exhaustive
//!    enum; unknown categories are rejected at deserialization.
//!
//! 3. **Open folder set.** [`Category`] (the catalog key / credential folder)
//!    is a validated string because registries are configured at runtime.
//!
//! 4. **`CanonicalBytes` newtype.** All signing input flows through
//!    `CanonicalBytes::new()` (RFC 8785 JCS).
//!
//! ## Crate Policy
//!
//! - No dependencies on other `passfeed-*` crates.
//! - No `unsafe` code.
//! - No `.unwrap()` outside tests.

pub mod canonical;
pub mod catalog;
pub mod error;
pub mod identity;
pub mod record;
pub mod temporal;

pub use canonical::CanonicalBytes;
pub use catalog::{Catalog, Category};
pub use error::{CanonicalizationError, ValidationError};
pub use identity::{EventId, ProductId, SemaphoreId, TicketId};
pub use record::{CredentialRecord, TicketCategory};
pub use temporal::EpochMillis;
