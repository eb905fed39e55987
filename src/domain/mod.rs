pub mod post;
pub mod report;
pub mod sentiment;

pub use post::PostRecord;
pub use report::{ReputationSnapshot, ScoredPost};
pub use sentiment::{SentimentLabel, SentimentResult};
