use std::sync::Arc;

use parking_lot::RwLock;
use tracing::trace;

use super::models::{Link, NewLink};

/// Point-in-time view of the link sequence. Entries are shared with the
/// store, so taking a snapshot copies pointers, never link contents.
pub type Snapshot = Vec<Arc<Link>>;

struct Inner {
    links: Vec<Arc<Link>>,
    next_id: u64,
}

/// Ordered in-memory link collection plus the identifier counter
///
/// Links and counter sit behind one lock: an append pushes the link and bumps
/// the counter in a single write section, so an id is never handed out twice
/// and no append is lost when several workers post at once. Existing links
/// are never moved or copied by an append.
pub struct LinkStore {
    inner: RwLock<Inner>,
    id_prefix: String,
}

impl LinkStore {
    /// Empty store, counter starting at 0
    pub fn new(id_prefix: impl Into<String>) -> Self {
        Self::with_seed(id_prefix, Vec::new())
    }

    /// Store pre-filled with `seed` in order; entry `i` gets id `<prefix><i>`
    /// and the counter starts at the seed length.
    pub fn with_seed<I>(id_prefix: impl Into<String>, seed: I) -> Self
    where
        I: IntoIterator<Item = NewLink>,
    {
        let id_prefix = id_prefix.into();
        let links: Vec<Arc<Link>> = seed
            .into_iter()
            .enumerate()
            .map(|(i, new_link)| {
                Arc::new(Link {
                    id: format!("{}{}", id_prefix, i),
                    url: new_link.url,
                    description: new_link.description,
                })
            })
            .collect();
        let next_id = links.len() as u64;

        Self {
            inner: RwLock::new(Inner { links, next_id }),
            id_prefix,
        }
    }

    pub fn snapshot(&self) -> Snapshot {
        self.inner.read().links.clone()
    }

    pub fn len(&self) -> usize {
        self.inner.read().links.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Counter value the next append will use
    pub fn next_id(&self) -> u64 {
        self.inner.read().next_id
    }

    pub fn id_prefix(&self) -> &str {
        &self.id_prefix
    }

    /// Append a link to the end of the sequence and return it
    pub fn append(&self, new_link: NewLink) -> Arc<Link> {
        let mut inner = self.inner.write();

        let link = Arc::new(Link {
            id: format!("{}{}", self.id_prefix, inner.next_id),
            url: new_link.url,
            description: new_link.description,
        });
        inner.links.push(link.clone());
        inner.next_id += 1;

        trace!("Appended link {} (store size {})", link.id, inner.links.len());
        link
    }
}
