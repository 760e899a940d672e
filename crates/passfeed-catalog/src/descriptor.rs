//! # Registry Descriptor Table
//!
//! The runtime list of catalog sources. Each descriptor names a category and
//! where its records come from: a static record set, or an EVM registry
//! whose identifiers are resolved and mapped through a [`RecordTemplate`].
//!
//! The built-in table matches the production deployment. A YAML file with
//! the same shape can replace it:
//!
//! ```yaml
//! registries:
//!   - category: Linea
//!     kind: evm
//!     rpc_url: https://rpc.linea.build
//!     contract: "0xe47ca047cb7e6a9ade9405ca68077d63424f34ec"
//!     template:
//!       attendee_name: Linea Builder
//!       event_name: Linea Buildathon
//!       ticket_name: Linea
//!       ticket_category: Linea
//!   - category: Zuzalu
//!     kind: static
//!     records:
//!       - attendeeEmail: pablo@hashingsystems.com
//!         # ...
//! ```

use std::collections::BTreeSet;
use std::path::Path;

use passfeed_core::{Category, CredentialRecord, EventId, ProductId, TicketCategory, TicketId};
use serde::{Deserialize, Serialize};
use url::Url;
use uuid::uuid;

use crate::error::CatalogError;

/// Display fields stamped onto every record a dynamic registry produces.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RecordTemplate {
    pub attendee_name: String,
    pub event_name: String,
    pub ticket_name: String,
    pub ticket_category: TicketCategory,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RegistrySource {
    /// Records declared inline. Never fetched.
    Static { records: Vec<CredentialRecord> },
    /// An on-chain `getUuids()` registry.
    Evm {
        rpc_url: Url,
        contract: String,
        template: RecordTemplate,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistryDescriptor {
    pub category: Category,
    #[serde(flatten)]
    pub source: RegistrySource,
}

/// An ordered descriptor list with unique categories.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DescriptorTable {
    descriptors: Vec<RegistryDescriptor>,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct DescriptorFile {
    registries: Vec<RegistryDescriptor>,
}

impl DescriptorTable {
    /// Build a table, rejecting duplicate category names.
    pub fn new(descriptors: Vec<RegistryDescriptor>) -> Result<Self, CatalogError> {
        let mut seen = BTreeSet::new();
        for d in &descriptors {
            if !seen.insert(d.category.as_str()) {
                return Err(CatalogError::DuplicateCategory(d.category.to_string()));
            }
        }
        Ok(Self { descriptors })
    }

    pub fn from_yaml_str(yaml: &str) -> Result<Self, CatalogError> {
        let file: DescriptorFile =
            serde_yaml::from_str(yaml).map_err(|e| CatalogError::InvalidDescriptor(e.to_string()))?;
        Self::new(file.registries)
    }

    pub fn from_yaml_file(path: &Path) -> Result<Self, CatalogError> {
        let yaml = std::fs::read_to_string(path)
            .map_err(|e| CatalogError::InvalidDescriptor(format!("{}: {e}", path.display())))?;
        Self::from_yaml_str(&yaml)
    }

    /// The production table: four EVM registries and two static sets.
    pub fn builtin() -> Result<Self, CatalogError> {
        let mut descriptors = vec![
            evm(
                "Linea",
                "https://rpc.linea.build",
                "0xe47ca047cb7e6a9ade9405ca68077d63424f34ec",
                ["Linea Builder", "Linea Buildathon", "Linea"],
                TicketCategory::Linea,
            )?,
            evm(
                "Chiliz",
                "https://rpc.ankr.com/chiliz",
                "0x56E4ca7f050D9caf72568087B6461405f87a43d8",
                ["Chiliz Builder", "Chiliz FanAthon", "Chiliz"],
                TicketCategory::ChilizFan,
            )?,
            evm(
                "Mantle",
                "https://mantle-mainnet.public.blastapi.io",
                "0xC765D6B7eA9D4b9CcD8cBAdbB0e4726d68e195E4",
                ["Mantle Builder", "Mantle Buildathon", "Mantle"],
                TicketCategory::Mantle,
            )?,
            evm(
                "Scroll",
                "https://rpc.scroll.io",
                "0xb84Df10966a5D7e1ab46D9276F55d57bD336AFC7",
                ["Scroll Builder", "Scroll Buildathon", "Scroll"],
                TicketCategory::Scroll,
            )?,
        ];

        let pablo = |event_name: &str, ticket: TicketId, event: EventId, ticket_category: TicketCategory| {
            CredentialRecord {
                attendee_email: "pablo@hashingsystems.com".into(),
                attendee_name: "Pablo the Penguin".into(),
                event_name: event_name.into(),
                ticket_name: "Hacker".into(),
                ticket_id: ticket,
                event_id: event,
                product_id: ProductId::from_uuid(uuid!("a9f5e8a9-5a6e-4419-aa80-5c0f18efb6dd")),
                ticket_category,
            }
        };
        descriptors.push(RegistryDescriptor {
            category: category("Zuzalu")?,
            source: RegistrySource::Static {
                records: vec![pablo(
                    "HackZuzalu Istanbul",
                    TicketId::from_uuid(uuid!("f65d8af8-e4c8-41c1-b9e2-0fb5d197c2ba")),
                    EventId::from_uuid(uuid!("3e8970cf-499b-4679-967b-8aa6647b288e")),
                    TicketCategory::HackZuzalu,
                )],
            },
        });
        descriptors.push(RegistryDescriptor {
            category: category("EthIstanbul")?,
            source: RegistrySource::Static {
                records: vec![pablo(
                    "Ethereum Istanbul",
                    TicketId::from_uuid(uuid!("3e8970cf-e4c8-41c1-b9e2-0fb5d197c2ba")),
                    EventId::from_uuid(uuid!("f65d8af8-499b-4679-967b-8aa6647b288e")),
                    TicketCategory::EthIstanbul,
                )],
            },
        });

        Self::new(descriptors)
    }

    pub fn iter(&self) -> impl Iterator<Item = &RegistryDescriptor> {
        self.descriptors.iter()
    }

    pub fn categories(&self) -> impl Iterator<Item = &Category> {
        self.descriptors.iter().map(|d| &d.category)
    }

    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }
}

fn category(name: &str) -> Result<Category, CatalogError> {
    Category::new(name).map_err(|e| CatalogError::InvalidDescriptor(e.to_string()))
}

fn evm(
    name: &str,
    rpc_url: &str,
    contract: &str,
    [attendee_name, event_name, ticket_name]: [&str; 3],
    ticket_category: TicketCategory,
) -> Result<RegistryDescriptor, CatalogError> {
    Ok(RegistryDescriptor {
        category: category(name)?,
        source: RegistrySource::Evm {
            rpc_url: Url::parse(rpc_url)
                .map_err(|e| CatalogError::InvalidDescriptor(format!("{rpc_url}: {e}")))?,
            contract: contract.into(),
            template: RecordTemplate {
                attendee_name: attendee_name.into(),
                event_name: event_name.into(),
                ticket_name: ticket_name.into(),
                ticket_category,
            },
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_table_has_six_unique_categories() {
        let table = DescriptorTable::builtin().unwrap();
        let names: Vec<_> = table.categories().map(Category::as_str).collect();
        assert_eq!(
            names,
            vec!["Linea", "Chiliz", "Mantle", "Scroll", "Zuzalu", "EthIstanbul"]
        );
    }

    #[test]
    fn builtin_static_records_are_fixed() {
        let table = DescriptorTable::builtin().unwrap();
        let zuzalu = table
            .iter()
            .find(|d| d.category.as_str() == "Zuzalu")
            .unwrap();
        match &zuzalu.source {
            RegistrySource::Static { records } => {
                assert_eq!(records.len(), 1);
                assert_eq!(records[0].attendee_email, "pablo@hashingsystems.com");
                assert_eq!(
                    records[0].ticket_id.to_string(),
                    "f65d8af8-e4c8-41c1-b9e2-0fb5d197c2ba"
                );
                assert_eq!(records[0].ticket_category, TicketCategory::HackZuzalu);
            }
            other => panic!("expected static source, got {other:?}"),
        }
    }

    #[test]
    fn chiliz_maps_to_chiliz_fan_category() {
        let table = DescriptorTable::builtin().unwrap();
        let chiliz = table.iter().find(|d| d.category.as_str() == "Chiliz").unwrap();
        match &chiliz.source {
            RegistrySource::Evm { template, .. } => {
                assert_eq!(template.ticket_category, TicketCategory::ChilizFan);
                assert_eq!(template.event_name, "Chiliz FanAthon");
            }
            other => panic!("expected evm source, got {other:?}"),
        }
    }

    #[test]
    fn duplicate_category_is_rejected() {
        let table = DescriptorTable::builtin().unwrap();
        let mut descriptors: Vec<_> = table.iter().cloned().collect();
        descriptors.push(descriptors[0].clone());
        match DescriptorTable::new(descriptors) {
            Err(CatalogError::DuplicateCategory(name)) => assert_eq!(name, "Linea"),
            other => panic!("expected DuplicateCategory, got {other:?}"),
        }
    }

    #[test]
    fn yaml_table_parses_both_kinds() {
        let yaml = r#"
registries:
  - category: Linea
    kind: evm
    rpc_url: https://rpc.linea.build
    contract: "0xe47ca047cb7e6a9ade9405ca68077d63424f34ec"
    template:
      attendee_name: Linea Builder
      event_name: Linea Buildathon
      ticket_name: Linea
      ticket_category: Linea
  - category: Zuzalu
    kind: static
    records:
      - attendeeEmail: pablo@hashingsystems.com
        attendeeName: Pablo the Penguin
        eventName: HackZuzalu Istanbul
        ticketName: Hacker
        ticketId: f65d8af8-e4c8-41c1-b9e2-0fb5d197c2ba
        eventId: 3e8970cf-499b-4679-967b-8aa6647b288e
        productId: a9f5e8a9-5a6e-4419-aa80-5c0f18efb6dd
        ticketCategory: HackZuzalu
"#;
        let table = DescriptorTable::from_yaml_str(yaml).unwrap();
        assert_eq!(table.len(), 2);
        let builtin = DescriptorTable::builtin().unwrap();
        let builtin_zuzalu = builtin.iter().find(|d| d.category.as_str() == "Zuzalu");
        let yaml_zuzalu = table.iter().find(|d| d.category.as_str() == "Zuzalu");
        assert_eq!(yaml_zuzalu, builtin_zuzalu);
    }

    #[test]
    fn yaml_with_duplicate_category_is_rejected() {
        let yaml = r#"
registries:
  - category: Scroll
    kind: static
    records: []
  - category: Scroll
    kind: static
    records: []
"#;
        assert!(matches!(
            DescriptorTable::from_yaml_str(yaml),
            Err(CatalogError::DuplicateCategory(_))
        ));
    }

    #[test]
    fn yaml_with_unknown_ticket_category_is_rejected() {
        let yaml = r#"
registries:
  - category: Base
    kind: evm
    rpc_url: https://mainnet.base.org
    contract: "0xe47ca047cb7e6a9ade9405ca68077d63424f34ec"
    template:
      attendee_name: Base Builder
      event_name: Base Buildathon
      ticket_name: Base
      ticket_category: Base
"#;
        assert!(matches!(
            DescriptorTable::from_yaml_str(yaml),
            Err(CatalogError::InvalidDescriptor(_))
        ));
    }
}
