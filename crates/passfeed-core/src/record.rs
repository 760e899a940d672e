//! # Credential Records
//!
//! [`CredentialRecord`] is the normalized attendance credential produced by
//! every registry, static or dynamic. Its JSON shape (camelCase field names,
//! category display strings) is the wire shape of the direct ticket lookup
//! and the record portion of an issued ticket credential.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::identity::{EventId, ProductId, TicketId};

/// The closed set of ticket categories a record may carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum TicketCategory {
    Devconnect,
    ZuConnect,
    HackZuzalu,
    EthIstanbul,
    Linea,
    #[serde(rename = "Chiliz Fan")]
    ChilizFan,
    Mantle,
    Scroll,
}

impl TicketCategory {
    /// Every known category.
    pub const ALL: [TicketCategory; 8] = [
        Self::Devconnect,
        Self::ZuConnect,
        Self::HackZuzalu,
        Self::EthIstanbul,
        Self::Linea,
        Self::ChilizFan,
        Self::Mantle,
        Self::Scroll,
    ];

    /// The wire name of this category.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Devconnect => "Devconnect",
            Self::ZuConnect => "ZuConnect",
            Self::HackZuzalu => "HackZuzalu",
            Self::EthIstanbul => "EthIstanbul",
            Self::Linea => "Linea",
            Self::ChilizFan => "Chiliz Fan",
            Self::Mantle => "Mantle",
            Self::Scroll => "Scroll",
        }
    }
}

impl std::fmt::Display for TicketCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for TicketCategory {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| ValidationError::UnknownTicketCategory(s.to_string()))
    }
}

/// A normalized attendance credential.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CredentialRecord {
    pub attendee_email: String,
    pub attendee_name: String,
    pub event_name: String,
    pub ticket_name: String,
    pub ticket_id: TicketId,
    pub event_id: EventId,
    pub product_id: ProductId,
    pub ticket_category: TicketCategory,
}

impl CredentialRecord {
    /// Check that every display field is present and non-empty.
    ///
    /// Identifier well-formedness and category membership are already
    /// guaranteed by the field types.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let fields: [(&'static str, &str); 4] = [
            ("attendeeEmail", &self.attendee_email),
            ("attendeeName", &self.attendee_name),
            ("eventName", &self.event_name),
            ("ticketName", &self.ticket_name),
        ];
        for (name, value) in fields {
            if value.trim().is_empty() {
                return Err(ValidationError::EmptyField(name));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> CredentialRecord {
        CredentialRecord {
            attendee_email: "pablo@hashingsystems.com".into(),
            attendee_name: "Pablo the Penguin".into(),
            event_name: "HackZuzalu Istanbul".into(),
            ticket_name: "Hacker".into(),
            ticket_id: TicketId::parse("f65d8af8-e4c8-41c1-b9e2-0fb5d197c2ba").unwrap(),
            event_id: EventId::parse("3e8970cf-499b-4679-967b-8aa6647b288e").unwrap(),
            product_id: ProductId::parse("a9f5e8a9-5a6e-4419-aa80-5c0f18efb6dd").unwrap(),
            ticket_category: TicketCategory::HackZuzalu,
        }
    }

    #[test]
    fn record_serializes_with_camel_case_fields() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["attendeeEmail"], "pablo@hashingsystems.com");
        assert_eq!(json["ticketId"], "f65d8af8-e4c8-41c1-b9e2-0fb5d197c2ba");
        assert_eq!(json["ticketCategory"], "HackZuzalu");
    }

    #[test]
    fn chiliz_category_uses_display_name_on_the_wire() {
        let json = serde_json::to_string(&TicketCategory::ChilizFan).unwrap();
        assert_eq!(json, r#""Chiliz Fan""#);
        let back: TicketCategory = serde_json::from_str(&json).unwrap();
        assert_eq!(back, TicketCategory::ChilizFan);
    }

    #[test]
    fn unknown_category_is_rejected() {
        let mut json = serde_json::to_value(sample()).unwrap();
        json["ticketCategory"] = "Burning Man".into();
        assert!(serde_json::from_value::<CredentialRecord>(json).is_err());
        assert!("Burning Man".parse::<TicketCategory>().is_err());
    }

    #[test]
    fn malformed_ticket_id_is_rejected_at_deserialization() {
        let mut json = serde_json::to_value(sample()).unwrap();
        json["ticketId"] = "1234".into();
        assert!(serde_json::from_value::<CredentialRecord>(json).is_err());
    }

    #[test]
    fn category_from_str_matches_as_str() {
        for c in TicketCategory::ALL {
            assert_eq!(c.as_str().parse::<TicketCategory>().unwrap(), c);
        }
    }

    #[test]
    fn validate_rejects_blank_display_fields() {
        let mut r = sample();
        assert!(r.validate().is_ok());
        r.attendee_name = "   ".into();
        assert_eq!(r.validate(), Err(ValidationError::EmptyField("attendeeName")));
        let mut r = sample();
        r.attendee_email.clear();
        assert_eq!(r.validate(), Err(ValidationError::EmptyField("attendeeEmail")));
    }
}
