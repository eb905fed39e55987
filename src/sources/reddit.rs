use std::time::Duration;

use chrono::{DateTime, Utc};
use feed_rs::parser;
use reqwest::blocking::Client;
use url::Url;

use crate::config::Config;
use crate::domain::{post::UNKNOWN_AUTHOR, PostRecord};
use crate::errors::FetchError;
use crate::sources::traits::SearchSource;

/// Origin tag recorded on every post this source yields.
pub const REDDIT_SOURCE: &str = "reddit";

/// A real Reddit post always contains this segment in its permalink. Entries
/// without it are subreddit landing pages or community descriptions.
pub const POST_PATH_MARKER: &str = "/comments/";

const DEFAULT_SEARCH_URL: &str = "https://www.reddit.com/search.rss";
const DEFAULT_USER_AGENT: &str = "vibewatch/0.1 (brand reputation research)";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

pub struct RedditSource {
    client: Client,
    search_url: String,
}

impl RedditSource {
    pub fn new() -> Self {
        Self::with_options(DEFAULT_SEARCH_URL, DEFAULT_USER_AGENT, DEFAULT_TIMEOUT_SECS)
    }

    pub fn from_config(config: &Config) -> Self {
        Self::with_options(&config.search_url, &config.user_agent, config.timeout_secs)
    }

    fn with_options(search_url: &str, user_agent: &str, timeout_secs: u64) -> Self {
        Self {
            client: Client::builder()
                .timeout(Duration::from_secs(timeout_secs))
                .user_agent(user_agent)
                .build()
                .unwrap_or_else(|_| Client::new()),
            search_url: search_url.to_string(),
        }
    }

    /// Build the search request URL: escaped keyword, newest first.
    fn search_url(&self, keyword: &str) -> Result<Url, FetchError> {
        let mut url =
            Url::parse(&self.search_url).map_err(|e| FetchError::InvalidUrl(e.to_string()))?;
        url.query_pairs_mut()
            .append_pair("q", keyword)
            .append_pair("sort", "new");
        Ok(url)
    }

    /// Parse the response body, falling back to a truncation-recovery pass.
    ///
    /// A malformed document that still holds complete leading entries is a
    /// degraded success: the recovered entries are returned and a diagnostic
    /// goes to stderr. Only a fully unparseable body is an error.
    fn parse_feed(bytes: &[u8]) -> Result<feed_rs::model::Feed, FetchError> {
        match parser::parse(bytes) {
            Ok(feed) => Ok(feed),
            Err(err) => match Self::recover_truncated(bytes) {
                Some(feed) => {
                    eprintln!(
                        "Warning: malformed feed response, recovered {} entries",
                        feed.entries.len()
                    );
                    Ok(feed)
                }
                None => Err(FetchError::FeedParse(err.to_string())),
            },
        }
    }

    /// Cut the document at its last complete entry and re-parse.
    fn recover_truncated(bytes: &[u8]) -> Option<feed_rs::model::Feed> {
        let text = String::from_utf8_lossy(bytes);

        for (entry_close, doc_close) in [
            ("</entry>", "</feed>"),
            ("</item>", "</channel></rss>"),
        ] {
            if let Some(pos) = text.rfind(entry_close) {
                let mut repaired = text[..pos + entry_close.len()].to_string();
                repaired.push_str(doc_close);
                if let Ok(feed) = parser::parse(repaired.as_bytes()) {
                    if !feed.entries.is_empty() {
                        return Some(feed);
                    }
                }
            }
        }

        None
    }

    fn is_post_entry(link: &str) -> bool {
        link.contains(POST_PATH_MARKER)
    }

    /// Map feed entries to records: filter first, then cap at `limit`.
    fn collect_posts(feed: feed_rs::model::Feed, limit: usize) -> Vec<PostRecord> {
        let mut posts = Vec::new();

        for entry in feed.entries {
            let link = entry
                .links
                .into_iter()
                .next()
                .map(|l| l.href)
                .unwrap_or_default();

            if !Self::is_post_entry(&link) {
                continue;
            }

            let title = entry.title.map(|t| t.content).unwrap_or_default();

            let author = entry
                .authors
                .into_iter()
                .next()
                .map(|person| person.name)
                .filter(|name| !name.is_empty())
                .unwrap_or_else(|| UNKNOWN_AUTHOR.to_string());

            let published = entry.published.or(entry.updated).map(to_iso8601);

            let summary = entry
                .summary
                .map(|t| t.content)
                .or_else(|| entry.content.and_then(|c| c.body))
                .map(|text| clean_summary(&text))
                .unwrap_or_default();

            posts.push(
                PostRecord::new(title, link)
                    .with_author(author)
                    .with_published(published)
                    .with_summary(summary)
                    .with_source(REDDIT_SOURCE),
            );

            // Limit counts accepted records, not raw entries.
            if posts.len() >= limit {
                break;
            }
        }

        posts
    }
}

impl Default for RedditSource {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchSource for RedditSource {
    fn fetch(&self, keyword: &str, limit: usize) -> Result<Vec<PostRecord>, FetchError> {
        let keyword = keyword.trim();
        if keyword.is_empty() {
            return Err(FetchError::EmptyKeyword);
        }
        if limit == 0 {
            return Err(FetchError::InvalidLimit);
        }

        let url = self.search_url(keyword)?;
        let response = self.client.get(url.as_str()).send()?;
        let bytes = response.bytes()?;

        let feed = Self::parse_feed(&bytes)?;
        Ok(Self::collect_posts(feed, limit))
    }
}

fn to_iso8601(timestamp: DateTime<Utc>) -> String {
    timestamp.to_rfc3339()
}

/// Basic cleanup for feed excerpts: newlines to spaces, the common
/// ampersand/space entities unescaped, surrounding whitespace dropped.
fn clean_summary(text: &str) -> String {
    text.replace('\n', " ")
        .replace("&amp;", "&")
        .replace("&#32;", " ")
        .trim()
        .to_string()
}
