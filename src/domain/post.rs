use serde::{Deserialize, Serialize};

/// Author recorded when the feed entry carries none.
pub const UNKNOWN_AUTHOR: &str = "unknown";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostRecord {
    pub title: String,
    pub link: String,
    pub author: String,
    pub published: Option<String>,
    pub summary: String,
    pub source: String,
}

impl PostRecord {
    pub fn new(title: String, link: String) -> Self {
        Self {
            title,
            link,
            author: UNKNOWN_AUTHOR.to_string(),
            published: None,
            summary: String::new(),
            source: String::new(),
        }
    }

    pub fn with_author(mut self, author: String) -> Self {
        self.author = author;
        self
    }

    pub fn with_published(mut self, published: Option<String>) -> Self {
        self.published = published;
        self
    }

    pub fn with_summary(mut self, summary: String) -> Self {
        self.summary = summary;
        self
    }

    pub fn with_source(mut self, source: &str) -> Self {
        self.source = source.to_string();
        self
    }
}
