use serde::{Deserialize, Serialize};

/// A shared link as stored and served by the feed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    pub id: String,
    pub url: String,
    pub description: String,
}

/// Caller-supplied fields of a link, before the store assigns an id
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewLink {
    pub url: String,
    pub description: String,
}

impl NewLink {
    pub fn new(url: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            description: description.into(),
        }
    }
}
