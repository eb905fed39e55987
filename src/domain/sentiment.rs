use serde::{Deserialize, Serialize};

/// Polarity above this is Positive, below its negation is Negative. The
/// boundaries themselves fall into Neutral.
pub const POSITIVE_THRESHOLD: f64 = 0.1;
pub const NEGATIVE_THRESHOLD: f64 = -0.1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SentimentLabel {
    Positive,
    Neutral,
    Negative,
}

impl SentimentLabel {
    /// Map a polarity to its discrete label using the fixed thresholds.
    pub fn from_polarity(polarity: f64) -> Self {
        if polarity > POSITIVE_THRESHOLD {
            SentimentLabel::Positive
        } else if polarity < NEGATIVE_THRESHOLD {
            SentimentLabel::Negative
        } else {
            SentimentLabel::Neutral
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SentimentLabel::Positive => "Positive",
            SentimentLabel::Neutral => "Neutral",
            SentimentLabel::Negative => "Negative",
        }
    }
}

impl std::fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for SentimentLabel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "positive" => Ok(SentimentLabel::Positive),
            "neutral" => Ok(SentimentLabel::Neutral),
            "negative" => Ok(SentimentLabel::Negative),
            _ => Err(format!("Unknown sentiment label: {}", s)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentimentResult {
    pub label: SentimentLabel,
    pub score: f64,
    pub subjectivity: f64,
}

impl SentimentResult {
    /// Result for input that normalizes to nothing.
    pub fn neutral() -> Self {
        Self {
            label: SentimentLabel::Neutral,
            score: 0.0,
            subjectivity: 0.0,
        }
    }
}

/// Round to the two decimal places reported to callers.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_from_polarity_bands() {
        assert_eq!(SentimentLabel::from_polarity(0.5), SentimentLabel::Positive);
        assert_eq!(SentimentLabel::from_polarity(0.11), SentimentLabel::Positive);
        assert_eq!(SentimentLabel::from_polarity(0.0), SentimentLabel::Neutral);
        assert_eq!(
            SentimentLabel::from_polarity(-0.11),
            SentimentLabel::Negative
        );
        assert_eq!(SentimentLabel::from_polarity(-1.0), SentimentLabel::Negative);
    }

    #[test]
    fn test_from_polarity_boundaries_are_neutral() {
        // The thresholds use strict inequality, so exactly +/-0.1 stays Neutral.
        assert_eq!(SentimentLabel::from_polarity(0.1), SentimentLabel::Neutral);
        assert_eq!(SentimentLabel::from_polarity(-0.1), SentimentLabel::Neutral);
    }

    #[test]
    fn test_label_round_trips_through_str() {
        for label in [
            SentimentLabel::Positive,
            SentimentLabel::Neutral,
            SentimentLabel::Negative,
        ] {
            assert_eq!(SentimentLabel::from_str(label.as_str()), Ok(label));
        }
        assert!(SentimentLabel::from_str("meh").is_err());
    }

    #[test]
    fn test_round2() {
        assert_eq!(round2(0.12345), 0.12);
        assert_eq!(round2(0.678), 0.68);
        assert_eq!(round2(-0.125), -0.13);
        assert_eq!(round2(1.0), 1.0);
    }

    #[test]
    fn test_neutral_result() {
        let result = SentimentResult::neutral();
        assert_eq!(result.label, SentimentLabel::Neutral);
        assert_eq!(result.score, 0.0);
        assert_eq!(result.subjectivity, 0.0);
    }
}
