//! # Application State
//!
//! Shared state handed to every route handler through the `State`
//! extractor. Cloning is cheap: the feed service is behind an `Arc` and the
//! Prometheus handle is itself reference-counted.

use std::sync::Arc;

use metrics_exporter_prometheus::PrometheusHandle;
use passfeed_feed::FeedService;

#[derive(Clone)]
pub struct AppState {
    pub feed: Arc<FeedService>,
    /// Present when a Prometheus recorder has been installed.
    pub metrics: Option<PrometheusHandle>,
}

impl AppState {
    pub fn new(feed: FeedService) -> Self {
        Self {
            feed: Arc::new(feed),
            metrics: None,
        }
    }

    pub fn with_metrics(mut self, handle: PrometheusHandle) -> Self {
        self.metrics = Some(handle);
        self
    }
}
