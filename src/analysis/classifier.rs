use regex::Regex;

use crate::analysis::lexicon::LexiconScorer;
use crate::domain::sentiment::round2;
use crate::domain::{SentimentLabel, SentimentResult};
use crate::errors::ClassificationError;

/// Narrow interface to the text-polarity model, so any equivalent lexical or
/// statistical scorer can stand in.
#[cfg_attr(test, mockall::automock)]
pub trait PolarityScorer: Send + Sync {
    /// Score normalized text, returning (polarity, subjectivity).
    ///
    /// Polarity lands in [-1, 1], subjectivity in [0, 1]; the classifier
    /// clamps anyway.
    fn score(&self, text: &str) -> Result<(f64, f64), ClassificationError>;
}

pub struct SentimentClassifier<S: PolarityScorer = LexiconScorer> {
    scorer: S,
}

impl SentimentClassifier {
    pub fn new() -> Self {
        Self {
            scorer: LexiconScorer::new(),
        }
    }
}

impl Default for SentimentClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: PolarityScorer> SentimentClassifier<S> {
    pub fn with_scorer(scorer: S) -> Self {
        Self { scorer }
    }

    /// Classify one text: normalize, score, label, round.
    ///
    /// Input that normalizes to nothing short-circuits to the neutral result
    /// without touching the scorer.
    pub fn classify(&self, text: &str) -> Result<SentimentResult, ClassificationError> {
        let cleaned = normalize(text);
        if cleaned.is_empty() {
            return Ok(SentimentResult::neutral());
        }

        let (polarity, subjectivity) = self.scorer.score(&cleaned)?;
        let polarity = polarity.clamp(-1.0, 1.0);
        let subjectivity = subjectivity.clamp(0.0, 1.0);

        // Label from the unrounded polarity; only the reported numbers round.
        Ok(SentimentResult {
            label: SentimentLabel::from_polarity(polarity),
            score: round2(polarity),
            subjectivity: round2(subjectivity),
        })
    }
}

/// Strip markup from feed text: HTML comments, then tags, then the common
/// space entities, then whitespace runs. Idempotent.
pub fn normalize(text: &str) -> String {
    let comments = Regex::new(r"(?s)<!--.*?-->").unwrap();
    let tags = Regex::new(r"<[^>]+>").unwrap();
    let space_entities = Regex::new(r"&nbsp;|&#160;|&#32;").unwrap();

    let text = comments.replace_all(text, "");
    let text = tags.replace_all(&text, "");
    let text = space_entities.replace_all(&text, " ");

    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
