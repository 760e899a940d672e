//! # passfeed-feed
//!
//! The polling feed protocol. A client polls with a signed email claim; the
//! service rebuilds the catalog, picks the requester's records and answers
//! with a `DeleteFolder` + `ReplaceInFolder` pair per matching category,
//! each record signed into a ticket credential bound to the requester.
//!
//! ```text
//! PollFeedRequest ─► RequestCredentialVerifier ─► CatalogBuilder
//!                         │ invalid: []               │
//!                         ▼                           ▼
//!                    PollFeedResponse ◄─ Issuer ◄─ compute_actions
//! ```

pub mod action;
pub mod credential;
pub mod diff;
pub mod error;
pub mod feed;
pub mod service;

pub use action::FeedAction;
pub use credential::{
    EmailClaim, EmailClaimVerifier, FeedCredential, RequestCredentialInvalid,
    RequestCredentialVerifier, VerifiedRequester,
};
pub use diff::{compute_actions, records_for_requester};
pub use error::FeedError;
pub use feed::{
    CredentialRequest, Feed, FeedPermission, ListFeedsResponse, PermissionType, PollFeedRequest,
    PollFeedResponse,
};
pub use service::{FeedService, ProviderInfo};
