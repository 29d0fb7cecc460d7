//! Link feed service
//!
//! Provides the resolver semantics for the feed: the informational string,
//! listing, and link creation over a shared [`LinkStore`].

use std::sync::Arc;

use tracing::info;

use crate::storage::{Link, LinkStore, NewLink, Snapshot};

/// Fixed string returned by `Query.info`
pub const INFO: &str = "This is the API of a Hackernews Clone";

// ============ Request DTOs ============

/// Request to post a new link
#[derive(Debug, Clone)]
pub struct PostLinkRequest {
    /// Target URL, stored verbatim
    pub url: String,
    /// Free-form description
    pub description: String,
}

impl From<PostLinkRequest> for NewLink {
    fn from(req: PostLinkRequest) -> Self {
        NewLink {
            url: req.url,
            description: req.description,
        }
    }
}

/// Link service
///
/// Cheap to clone; every clone shares the same store.
#[derive(Clone)]
pub struct LinkService {
    store: Arc<LinkStore>,
}

impl LinkService {
    pub fn new(store: Arc<LinkStore>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &Arc<LinkStore> {
        &self.store
    }

    pub fn info(&self) -> &'static str {
        INFO
    }

    /// Every stored link in creation order, as of this call
    pub fn feed(&self) -> Snapshot {
        self.store.snapshot()
    }

    /// Create a link with the next identifier and append it to the feed
    pub fn post(&self, req: PostLinkRequest) -> Arc<Link> {
        let link = self.store.append(req.into());
        info!("Link posted: {} -> {}", link.id, link.url);
        link
    }
}
