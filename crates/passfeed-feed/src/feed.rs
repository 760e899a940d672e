//! Feed definition and the request/response bodies of the feed protocol.

use passfeed_core::Category;
use serde::{Deserialize, Serialize};

use crate::action::FeedAction;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PermissionType {
    #[serde(rename = "ReplaceInFolder_permission")]
    ReplaceInFolder,
    #[serde(rename = "DeleteFolder_permission")]
    DeleteFolder,
}

/// Grants the feed one kind of action on one folder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedPermission {
    pub folder: Category,
    #[serde(rename = "type")]
    pub permission: PermissionType,
}

/// What the client must present when polling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CredentialRequest {
    pub signature_type: String,
    pub pcd_type: String,
}

impl Default for CredentialRequest {
    fn default() -> Self {
        Self {
            // Misspelling kept: deployed clients match on this exact string.
            signature_type: "sempahore-signature-pcd".into(),
            pcd_type: "email-pcd".into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Feed {
    pub id: String,
    pub name: String,
    pub description: String,
    pub permissions: Vec<FeedPermission>,
    pub credential_request: CredentialRequest,
}

impl Feed {
    /// The single feed this service hosts, with replace and delete
    /// permission on every category.
    pub fn primary<'a>(categories: impl IntoIterator<Item = &'a Category>) -> Self {
        let permissions = categories
            .into_iter()
            .flat_map(|folder| {
                [PermissionType::ReplaceInFolder, PermissionType::DeleteFolder].map(|permission| {
                    FeedPermission {
                        folder: folder.clone(),
                        permission,
                    }
                })
            })
            .collect();
        Self {
            id: "1".into(),
            name: "First feed".into(),
            description: "First test feed".into(),
            permissions,
            credential_request: CredentialRequest::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListFeedsResponse {
    pub feeds: Vec<Feed>,
    pub provider_url: String,
    pub provider_name: String,
}

/// A poll. `pcd` is kept as raw JSON so a malformed credential degrades to
/// an empty response instead of a rejected request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PollFeedRequest {
    pub feed_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pcd: Option<serde_json::Value>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PollFeedResponse {
    pub actions: Vec<FeedAction>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primary_feed_grants_replace_and_delete_per_category() {
        let cats = [Category::new("Zuzalu").unwrap(), Category::new("Linea").unwrap()];
        let feed = Feed::primary(&cats);
        assert_eq!(feed.id, "1");
        assert_eq!(feed.permissions.len(), 4);
        let json = serde_json::to_value(&feed).unwrap();
        assert_eq!(
            json["permissions"][0],
            serde_json::json!({"folder": "Zuzalu", "type": "ReplaceInFolder_permission"})
        );
        assert_eq!(
            json["permissions"][1],
            serde_json::json!({"folder": "Zuzalu", "type": "DeleteFolder_permission"})
        );
        assert_eq!(
            json["credentialRequest"],
            serde_json::json!({"signatureType": "sempahore-signature-pcd", "pcdType": "email-pcd"})
        );
    }

    #[test]
    fn poll_request_without_pcd_parses() {
        let req: PollFeedRequest = serde_json::from_str(r#"{"feedId":"1"}"#).unwrap();
        assert_eq!(req.feed_id, "1");
        assert!(req.pcd.is_none());
    }
}
