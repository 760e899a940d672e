//! # Catalog
//!
//! The merged, normalized view of every registry: a mapping from
//! [`Category`] (credential folder name) to the ordered records in it.
//!
//! A catalog is built fresh for each aggregation cycle and owned by the
//! caller that built it. Record order within a category is insertion order;
//! category iteration is lexicographic.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::identity::TicketId;
use crate::record::CredentialRecord;

/// A credential folder name. Non-empty, no path separators.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Category(String);

impl Category {
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        let name = name.into();
        if name.trim().is_empty() || name.contains('/') || name.contains('\\') {
            return Err(ValidationError::InvalidCategory(name));
        }
        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Category {
    type Error = ValidationError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<Category> for String {
    fn from(c: Category) -> Self {
        c.0
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Category → records.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    categories: BTreeMap<Category, Vec<CredentialRecord>>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append records to a category, creating it if absent.
    pub fn extend(&mut self, category: Category, records: impl IntoIterator<Item = CredentialRecord>) {
        self.categories.entry(category).or_default().extend(records);
    }

    /// Replace the contents of a category. Returns the previous records, if any.
    pub fn insert(
        &mut self,
        category: Category,
        records: Vec<CredentialRecord>,
    ) -> Option<Vec<CredentialRecord>> {
        self.categories.insert(category, records)
    }

    pub fn get(&self, category: &Category) -> Option<&[CredentialRecord]> {
        self.categories.get(category).map(Vec::as_slice)
    }

    pub fn contains(&self, category: &Category) -> bool {
        self.categories.contains_key(category)
    }

    pub fn categories(&self) -> impl Iterator<Item = &Category> {
        self.categories.keys()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Category, &[CredentialRecord])> {
        self.categories.iter().map(|(k, v)| (k, v.as_slice()))
    }

    /// First record with the given ticket id, scanning categories in order.
    pub fn find_ticket(&self, ticket_id: &TicketId) -> Option<&CredentialRecord> {
        self.categories
            .values()
            .flatten()
            .find(|r| &r.ticket_id == ticket_id)
    }

    /// Number of categories.
    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Total number of records across all categories.
    pub fn record_count(&self) -> usize {
        self.categories.values().map(Vec::len).sum()
    }
}
