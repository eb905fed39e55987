pub mod classifier;
pub mod lexicon;

pub use classifier::{normalize, PolarityScorer, SentimentClassifier};
pub use lexicon::LexiconScorer;
