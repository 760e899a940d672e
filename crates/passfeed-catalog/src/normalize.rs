//! # Record Normalization
//!
//! Identity-API records are a trust boundary. Each raw record is validated
//! against [`identity_schema`] before it is decoded, then mapped through the
//! registry's [`RecordTemplate`] into a [`CredentialRecord`] with freshly
//! generated ticket, event and product ids.
//!
//! `format: uuid` is not enforced by every validator configuration, so the
//! `uuid` field is additionally parsed with the `uuid` crate.

use jsonschema::Validator;
use passfeed_core::{Category, CredentialRecord, EventId, ProductId, TicketId};
use passfeed_registry::RawRegistryIdentity;
use serde_json::Value;

use crate::descriptor::RecordTemplate;
use crate::error::CatalogError;

/// JSON Schema for an identity-API account record.
pub fn identity_schema() -> Value {
    serde_json::json!({
        "$schema": "https://json-schema.org/draft/2020-12/schema",
        "type": "object",
        "required": ["email", "uuid", "commitment", "role", "terms_agreed"],
        "properties": {
            "email": { "type": "string", "minLength": 1 },
            "uuid": { "type": "string", "format": "uuid" },
            "commitment": { "type": "string" },
            "role": { "type": "string" },
            "terms_agreed": { "type": "number" }
        }
    })
}

/// Validates raw identity records and maps them to credential records.
pub struct Normalizer {
    validator: Validator,
}

impl std::fmt::Debug for Normalizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Normalizer").finish_non_exhaustive()
    }
}

impl Normalizer {
    pub fn new() -> Result<Self, CatalogError> {
        let validator = jsonschema::validator_for(&identity_schema())
            .map_err(|e| CatalogError::InvalidDescriptor(format!("identity schema: {e}")))?;
        Ok(Self { validator })
    }

    /// Validate `raw` and map it through `template`.
    ///
    /// Every failure is a [`CatalogError::SchemaViolation`] naming
    /// `category`.
    pub fn normalize(
        &self,
        raw: &Value,
        category: &Category,
        template: &RecordTemplate,
    ) -> Result<CredentialRecord, CatalogError> {
        let violation = |reason: String| CatalogError::SchemaViolation {
            category: category.to_string(),
            reason,
        };

        let errors: Vec<String> = self
            .validator
            .iter_errors(raw)
            .map(|e| {
                let path = e.instance_path.to_string();
                if path.is_empty() {
                    format!("(root): {e}")
                } else {
                    format!("{path}: {e}")
                }
            })
            .collect();
        if !errors.is_empty() {
            return Err(violation(errors.join("; ")));
        }

        let identity: RawRegistryIdentity =
            serde_json::from_value(raw.clone()).map_err(|e| violation(e.to_string()))?;
        uuid::Uuid::parse_str(&identity.uuid)
            .map_err(|_| violation(format!("/uuid: {:?} is not a UUID", identity.uuid)))?;

        let record = CredentialRecord {
            attendee_email: identity.email,
            attendee_name: template.attendee_name.clone(),
            event_name: template.event_name.clone(),
            ticket_name: template.ticket_name.clone(),
            ticket_id: TicketId::new(),
            event_id: EventId::new(),
            product_id: ProductId::new(),
            ticket_category: template.ticket_category,
        };
        validate_record(&record, category)?;
        Ok(record)
    }
}

/// Enforce the credential-record invariants.
///
/// Applied to normalized and static records alike.
pub fn validate_record(record: &CredentialRecord, category: &Category) -> Result<(), CatalogError> {
    record.validate().map_err(|e| CatalogError::SchemaViolation {
        category: category.to_string(),
        reason: e.to_string(),
    })
}
