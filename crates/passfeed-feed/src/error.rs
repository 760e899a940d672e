use passfeed_catalog::CatalogError;
use passfeed_vc::IssueError;
use thiserror::Error;

/// Feed service failures. A bad request credential is not an error here;
/// it yields an empty action list.
#[derive(Error, Debug)]
pub enum FeedError {
    #[error("unknown feed: {0}")]
    UnknownFeed(String),

    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error(transparent)]
    Issue(#[from] IssueError),
}
