use crate::analysis::{PolarityScorer, SentimentClassifier};
use crate::domain::{ReputationSnapshot, ScoredPost};
use crate::errors::MonitorResult;
use crate::sources::SearchSource;

/// Runs the pipeline: fetch posts for a keyword, classify each title, fold
/// the results into a snapshot.
pub struct MonitorService<F: SearchSource, S: PolarityScorer> {
    source: F,
    classifier: SentimentClassifier<S>,
}

impl<F: SearchSource, S: PolarityScorer> MonitorService<F, S> {
    pub fn new(source: F, classifier: SentimentClassifier<S>) -> Self {
        Self { source, classifier }
    }

    /// One monitor run. Posts whose classification fails are skipped and
    /// reported; the rest of the sequence still completes.
    pub fn snapshot(&self, keyword: &str, limit: usize) -> MonitorResult<ReputationSnapshot> {
        let posts = self.source.fetch(keyword, limit)?;

        let mut scored = Vec::with_capacity(posts.len());
        let mut skipped = 0;

        for post in posts {
            match self.classifier.classify(&post.title) {
                Ok(sentiment) => scored.push(ScoredPost { post, sentiment }),
                Err(e) => {
                    eprintln!("Skipping '{}': {}", post.title, e);
                    skipped += 1;
                }
            }
        }

        Ok(ReputationSnapshot::new(keyword.trim(), scored, skipped))
    }
}
