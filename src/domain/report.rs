use serde::{Deserialize, Serialize};

use super::post::PostRecord;
use super::sentiment::{round2, SentimentLabel, SentimentResult};

/// One post together with its classification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredPost {
    pub post: PostRecord,
    pub sentiment: SentimentResult,
}

/// Aggregate view over one monitor run. Posts keep their original feed order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReputationSnapshot {
    pub keyword: String,
    pub posts: Vec<ScoredPost>,
    pub positive: usize,
    pub neutral: usize,
    pub negative: usize,
    pub average_score: f64,
    pub overall: SentimentLabel,
    pub skipped: usize,
}

impl ReputationSnapshot {
    /// Fold classified posts into counts, mean polarity, and an overall label.
    ///
    /// The overall label is derived from the mean polarity with the same
    /// thresholds as per-post labeling, so it always agrees with
    /// `average_score`.
    pub fn new(keyword: &str, posts: Vec<ScoredPost>, skipped: usize) -> Self {
        let positive = Self::count(&posts, SentimentLabel::Positive);
        let neutral = Self::count(&posts, SentimentLabel::Neutral);
        let negative = Self::count(&posts, SentimentLabel::Negative);

        let mean = if posts.is_empty() {
            0.0
        } else {
            posts.iter().map(|p| p.sentiment.score).sum::<f64>() / posts.len() as f64
        };

        Self {
            keyword: keyword.to_string(),
            positive,
            neutral,
            negative,
            average_score: round2(mean),
            overall: SentimentLabel::from_polarity(mean),
            skipped,
            posts,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }

    fn count(posts: &[ScoredPost], label: SentimentLabel) -> usize {
        posts.iter().filter(|p| p.sentiment.label == label).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scored(title: &str, score: f64) -> ScoredPost {
        ScoredPost {
            post: PostRecord::new(
                title.to_string(),
                format!("https://www.reddit.com/r/test/comments/{}/", title),
            ),
            sentiment: SentimentResult {
                label: SentimentLabel::from_polarity(score),
                score,
                subjectivity: 0.5,
            },
        }
    }

    #[test]
    fn test_empty_snapshot_is_neutral() {
        let snapshot = ReputationSnapshot::new("Tesla", Vec::new(), 0);

        assert!(snapshot.is_empty());
        assert_eq!(snapshot.average_score, 0.0);
        assert_eq!(snapshot.overall, SentimentLabel::Neutral);
        assert_eq!(snapshot.positive + snapshot.neutral + snapshot.negative, 0);
    }

    #[test]
    fn test_counts_and_average() {
        let snapshot = ReputationSnapshot::new(
            "Tesla",
            vec![scored("a", 0.8), scored("b", -0.4), scored("c", 0.0)],
            0,
        );

        assert_eq!(snapshot.positive, 1);
        assert_eq!(snapshot.negative, 1);
        assert_eq!(snapshot.neutral, 1);
        // (0.8 - 0.4 + 0.0) / 3 = 0.1333...
        assert_eq!(snapshot.average_score, 0.13);
        assert_eq!(snapshot.overall, SentimentLabel::Positive);
    }

    #[test]
    fn test_overall_uses_mean_not_last_item() {
        // Last item is Negative but the mean is clearly positive.
        let snapshot = ReputationSnapshot::new(
            "Tesla",
            vec![scored("a", 0.9), scored("b", 0.9), scored("c", -0.2)],
            0,
        );

        assert_eq!(snapshot.overall, SentimentLabel::Positive);
    }

    #[test]
    fn test_overall_neutral_inside_band() {
        let snapshot =
            ReputationSnapshot::new("Tesla", vec![scored("a", 0.2), scored("b", -0.2)], 0);

        assert_eq!(snapshot.average_score, 0.0);
        assert_eq!(snapshot.overall, SentimentLabel::Neutral);
    }

    #[test]
    fn test_skipped_is_recorded() {
        let snapshot = ReputationSnapshot::new("Tesla", vec![scored("a", 0.5)], 2);
        assert_eq!(snapshot.skipped, 2);
        assert_eq!(snapshot.posts.len(), 1);
    }
}
