//! # Identifier Newtypes
//!
//! Ticket, event and product identifiers are UUIDs; the requester identity
//! key is an opaque string issued by the identity provider. Keeping them as
//! distinct types prevents a `TicketId` from being passed where an `EventId`
//! is expected.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::ValidationError;

macro_rules! uuid_newtype {
    ($(#[$meta:meta])* $name:ident, $field:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(Uuid);

        impl $name {
            /// Generate a fresh random (v4) identifier.
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }

            pub const fn from_uuid(uuid: Uuid) -> Self {
                Self(uuid)
            }

            /// Parse from the hyphenated string form.
            pub fn parse(s: &str) -> Result<Self, ValidationError> {
                Uuid::parse_str(s)
                    .map(Self)
                    .map_err(|_| ValidationError::InvalidUuid {
                        field: $field,
                        value: s.to_string(),
                    })
            }

            pub fn as_uuid(&self) -> &Uuid {
                &self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl std::str::FromStr for $name {
            type Err = ValidationError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::parse(s)
            }
        }
    };
}

uuid_newtype!(
    /// Primary key of a credential record within its category.
    TicketId,
    "ticketId"
);
uuid_newtype!(
    /// Identifier of the event a ticket admits to.
    EventId,
    "eventId"
);
uuid_newtype!(
    /// Identifier of the ticket product (tier) within an event.
    ProductId,
    "productId"
);

/// The requester's anonymous-membership identity key.
///
/// Issued credentials are bound to this value. It is opaque to this
/// service: only emptiness and embedded whitespace are rejected.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SemaphoreId(String);

impl SemaphoreId {
    pub fn new(s: impl Into<String>) -> Result<Self, ValidationError> {
        let s = s.into();
        if s.is_empty() || s.chars().any(char::is_whitespace) {
            return Err(ValidationError::InvalidSemaphoreId(s));
        }
        Ok(Self(s))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for SemaphoreId {
    type Error = ValidationError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<SemaphoreId> for String {
    fn from(id: SemaphoreId) -> Self {
        id.0
    }
}

impl std::fmt::Display for SemaphoreId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ticket_id_parses_hyphenated_uuid() {
        let id = TicketId::parse("f65d8af8-e4c8-41c1-b9e2-0fb5d197c2ba").unwrap();
        assert_eq!(id.to_string(), "f65d8af8-e4c8-41c1-b9e2-0fb5d197c2ba");
    }

    #[test]
    fn invalid_uuid_names_the_field() {
        let err = EventId::parse("not-a-uuid").unwrap_err();
        assert_eq!(
            err,
            ValidationError::InvalidUuid {
                field: "eventId",
                value: "not-a-uuid".to_string()
            }
        );
    }

    #[test]
    fn fresh_ids_are_distinct() {
        assert_ne!(ProductId::new(), ProductId::new());
    }

    #[test]
    fn uuid_newtypes_serialize_as_plain_strings() {
        let id = TicketId::parse("3e8970cf-e4c8-41c1-b9e2-0fb5d197c2ba").unwrap();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, r#""3e8970cf-e4c8-41c1-b9e2-0fb5d197c2ba""#);
    }

    #[test]
    fn semaphore_id_rejects_empty_and_whitespace() {
        assert!(SemaphoreId::new("").is_err());
        assert!(SemaphoreId::new("12 34").is_err());
        assert_eq!(SemaphoreId::new("1234567890").unwrap().as_str(), "1234567890");
    }

    #[test]
    fn semaphore_id_deserialization_validates() {
        let bad: Result<SemaphoreId, _> = serde_json::from_str(r#""""#);
        assert!(bad.is_err());
        let good: SemaphoreId = serde_json::from_str(r#""42""#).unwrap();
        assert_eq!(good.as_str(), "42");
    }
}
