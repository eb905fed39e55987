use crate::domain::PostRecord;
use crate::errors::FetchError;

/// A keyword search over one upstream feed.
///
/// Implementations are stateless across invocations and perform no retries;
/// transport and parse failures surface as `FetchError` for the caller to
/// handle.
#[cfg_attr(test, mockall::automock)]
pub trait SearchSource: Send + Sync {
    /// Fetch up to `limit` posts mentioning `keyword`, newest first.
    fn fetch(&self, keyword: &str, limit: usize) -> Result<Vec<PostRecord>, FetchError>;
}
