//! # Feed Service
//!
//! Owns everything a poll needs: the catalog builder, the issuer and the
//! request-credential verifier. Constructed once in the binary and shared
//! behind an `Arc`; holds no mutable state, so every poll sees a freshly
//! built catalog.

use std::sync::Arc;

use metrics::counter;
use passfeed_catalog::CatalogBuilder;
use passfeed_core::{Catalog, CredentialRecord, SemaphoreId, TicketId};
use passfeed_crypto::Ed25519PublicKey;
use passfeed_vc::Issuer;

use crate::credential::{FeedCredential, RequestCredentialVerifier};
use crate::diff::compute_actions;
use crate::error::FeedError;
use crate::feed::{Feed, ListFeedsResponse, PollFeedRequest, PollFeedResponse};

/// How the service advertises itself in feed listings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderInfo {
    pub url: String,
    pub name: String,
}

impl Default for ProviderInfo {
    fn default() -> Self {
        Self {
            url: "http://localhost:3100/feeds".into(),
            name: "Test Feed Server".into(),
        }
    }
}

pub struct FeedService {
    builder: CatalogBuilder,
    issuer: Issuer,
    verifier: Arc<dyn RequestCredentialVerifier>,
    provider: ProviderInfo,
    feed: Feed,
}

impl std::fmt::Debug for FeedService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FeedService")
            .field("builder", &self.builder)
            .field("issuer", &self.issuer)
            .field("provider", &self.provider)
            .finish_non_exhaustive()
    }
}

impl FeedService {
    /// The hosted feed gets permissions on every category `builder` knows.
    pub fn new(
        builder: CatalogBuilder,
        issuer: Issuer,
        verifier: Arc<dyn RequestCredentialVerifier>,
        provider: ProviderInfo,
    ) -> Self {
        let feed = Feed::primary(builder.categories());
        Self {
            builder,
            issuer,
            verifier,
            provider,
            feed,
        }
    }

    pub fn feed(&self) -> &Feed {
        &self.feed
    }

    pub fn has_feed(&self, feed_id: &str) -> bool {
        self.feed.id == feed_id
    }

    pub fn list_feeds(&self) -> ListFeedsResponse {
        ListFeedsResponse {
            feeds: vec![self.feed.clone()],
            provider_url: self.provider.url.clone(),
            provider_name: self.provider.name.clone(),
        }
    }

    pub fn list_single_feed(&self, feed_id: &str) -> Option<ListFeedsResponse> {
        self.has_feed(feed_id).then(|| self.list_feeds())
    }

    pub fn public_key(&self) -> Option<Ed25519PublicKey> {
        self.issuer.public_key()
    }

    /// Answer one poll.
    ///
    /// A missing or invalid request credential yields an empty action list.
    /// Catalog and issuance failures are errors.
    pub async fn handle_poll(&self, request: &PollFeedRequest) -> Result<PollFeedResponse, FeedError> {
        if !self.has_feed(&request.feed_id) {
            return Err(FeedError::UnknownFeed(request.feed_id.clone()));
        }

        let requester = match FeedCredential::from_pcd(request.pcd.as_ref())
            .and_then(|credential| self.verifier.verify(&credential))
        {
            Ok(requester) => requester,
            Err(reason) => {
                counter!("passfeed_feed_polls_total", "outcome" => "rejected").increment(1);
                tracing::debug!(feed_id = %request.feed_id, %reason, "request credential rejected");
                return Ok(PollFeedResponse { actions: vec![] });
            }
        };

        let result = self.actions_for(&requester.email, &requester.semaphore_id).await;
        match &result {
            Ok(response) => {
                counter!("passfeed_feed_polls_total", "outcome" => "ok").increment(1);
                tracing::debug!(
                    feed_id = %request.feed_id,
                    actions = response.actions.len(),
                    "poll answered"
                );
            }
            Err(e) => {
                counter!("passfeed_feed_polls_total", "outcome" => "error").increment(1);
                tracing::warn!(feed_id = %request.feed_id, error = %e, "poll failed");
            }
        }
        result
    }

    async fn actions_for(
        &self,
        email: &str,
        holder: &SemaphoreId,
    ) -> Result<PollFeedResponse, FeedError> {
        let catalog = self.builder.build_catalog().await?;
        let actions = compute_actions(&catalog, email, |record| self.issuer.issue(record, holder))?;
        Ok(PollFeedResponse { actions })
    }

    /// Look a ticket up in a freshly built catalog.
    pub async fn find_ticket(&self, ticket_id: &TicketId) -> Result<Option<CredentialRecord>, FeedError> {
        Ok(self.builder.find_ticket(ticket_id).await?)
    }

    /// Build and return the full catalog.
    pub async fn catalog(&self) -> Result<Catalog, FeedError> {
        Ok(self.builder.build_catalog().await?)
    }
}
