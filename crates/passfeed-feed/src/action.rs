//! Folder actions sent to polling clients.

use passfeed_core::Category;
use passfeed_vc::TicketCredential;
use serde::{Deserialize, Serialize};

/// One step of a feed response. Clients apply actions in order.
///
/// Serialized with a `type` tag, using the wire names existing clients
/// expect (`DeleteFolder_action`, `ReplaceInFolder_action`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum FeedAction {
    #[serde(rename = "DeleteFolder_action")]
    DeleteFolder { folder: Category, recursive: bool },
    #[serde(rename = "ReplaceInFolder_action")]
    ReplaceInFolder {
        folder: Category,
        pcds: Vec<TicketCredential>,
    },
}

impl FeedAction {
    /// Clear a folder, leaving subfolders alone.
    pub fn delete_folder(folder: Category) -> Self {
        Self::DeleteFolder {
            folder,
            recursive: false,
        }
    }

    pub fn folder(&self) -> &Category {
        match self {
            Self::DeleteFolder { folder, .. } | Self::ReplaceInFolder { folder, .. } => folder,
        }
    }
}
