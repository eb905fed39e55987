use std::collections::HashMap;

use regex::Regex;

use crate::analysis::classifier::PolarityScorer;
use crate::errors::ClassificationError;

/// Negated words flip and damp their polarity by this factor.
const NEGATION_FACTOR: f64 = -0.5;

const NEGATIONS: &[&str] = &[
    "not", "no", "never", "cannot", "isn't", "wasn't", "aren't", "don't", "doesn't", "didn't",
    "won't", "can't", "couldn't", "wouldn't", "shouldn't",
];

/// Modifiers that scale the next sentiment word.
const INTENSIFIERS: &[(&str, f64)] = &[
    ("absolutely", 1.4),
    ("barely", 0.6),
    ("extremely", 1.5),
    ("incredibly", 1.5),
    ("really", 1.3),
    ("slightly", 0.7),
    ("so", 1.2),
    ("somewhat", 0.8),
    ("super", 1.4),
    ("totally", 1.3),
    ("very", 1.3),
];

/// (word, polarity, subjectivity), in the spirit of the pattern lexicon.
const ENTRIES: &[(&str, f64, f64)] = &[
    // positive
    ("amazing", 0.6, 0.9),
    ("awesome", 1.0, 1.0),
    ("beat", 0.4, 0.5),
    ("beautiful", 0.85, 1.0),
    ("best", 1.0, 0.3),
    ("better", 0.5, 0.5),
    ("breakthrough", 0.6, 0.7),
    ("brilliant", 0.9, 0.9),
    ("bullish", 0.6, 0.8),
    ("comfortable", 0.4, 0.6),
    ("cool", 0.35, 0.65),
    ("delightful", 1.0, 1.0),
    ("easy", 0.45, 0.8),
    ("enjoy", 0.4, 0.5),
    ("excellent", 1.0, 1.0),
    ("excited", 0.4, 0.75),
    ("fantastic", 0.4, 0.9),
    ("fast", 0.2, 0.6),
    ("fun", 0.3, 0.2),
    ("gain", 0.4, 0.5),
    ("gains", 0.4, 0.5),
    ("glad", 0.5, 1.0),
    ("good", 0.7, 0.6),
    ("great", 0.8, 0.75),
    ("growth", 0.4, 0.4),
    ("happy", 0.8, 1.0),
    ("impressive", 1.0, 1.0),
    ("improved", 0.3, 0.4),
    ("innovative", 0.5, 0.7),
    ("love", 0.5, 0.6),
    ("loved", 0.7, 0.8),
    ("nice", 0.6, 1.0),
    ("outperform", 0.5, 0.6),
    ("perfect", 1.0, 1.0),
    ("pleased", 0.5, 0.8),
    ("profit", 0.5, 0.5),
    ("rally", 0.5, 0.6),
    ("recommend", 0.4, 0.5),
    ("record", 0.3, 0.4),
    ("reliable", 0.5, 0.6),
    ("safe", 0.5, 0.5),
    ("satisfied", 0.5, 0.7),
    ("smooth", 0.4, 0.6),
    ("soar", 0.6, 0.7),
    ("solid", 0.4, 0.5),
    ("strong", 0.4, 0.5),
    ("stunning", 0.8, 0.9),
    ("success", 0.8, 0.8),
    ("successful", 0.75, 0.75),
    ("superb", 0.9, 1.0),
    ("surge", 0.5, 0.6),
    ("trustworthy", 0.6, 0.7),
    ("upgrade", 0.4, 0.5),
    ("useful", 0.3, 0.3),
    ("win", 0.6, 0.7),
    ("winner", 0.6, 0.7),
    ("wonderful", 1.0, 1.0),
    ("worth", 0.3, 0.3),
    // negative
    ("angry", -0.5, 0.8),
    ("annoying", -0.6, 0.9),
    ("awful", -1.0, 1.0),
    ("bad", -0.7, 0.65),
    ("bearish", -0.6, 0.8),
    ("broken", -0.4, 0.5),
    ("buggy", -0.5, 0.7),
    ("concern", -0.3, 0.6),
    ("concerned", -0.3, 0.6),
    ("crash", -0.6, 0.6),
    ("decline", -0.4, 0.5),
    ("defective", -0.6, 0.7),
    ("disappointed", -0.6, 0.8),
    ("disappointing", -0.6, 0.8),
    ("disaster", -0.8, 0.9),
    ("dislike", -0.4, 0.6),
    ("downgrade", -0.4, 0.5),
    ("drop", -0.3, 0.4),
    ("dropped", -0.3, 0.4),
    ("expensive", -0.4, 0.7),
    ("fail", -0.5, 0.5),
    ("failed", -0.5, 0.5),
    ("failure", -0.6, 0.6),
    ("fake", -0.5, 0.7),
    ("fraud", -0.8, 0.9),
    ("garbage", -0.8, 0.9),
    ("hate", -0.8, 0.9),
    ("horrible", -1.0, 1.0),
    ("lawsuit", -0.4, 0.5),
    ("layoff", -0.5, 0.6),
    ("layoffs", -0.5, 0.6),
    ("lose", -0.4, 0.5),
    ("loss", -0.4, 0.4),
    ("losses", -0.4, 0.4),
    ("mediocre", -0.3, 0.6),
    ("mess", -0.4, 0.6),
    ("nightmare", -0.8, 0.9),
    ("overpriced", -0.5, 0.8),
    ("overrated", -0.5, 0.8),
    ("pathetic", -0.8, 0.9),
    ("plunge", -0.6, 0.6),
    ("poor", -0.4, 0.6),
    ("problem", -0.3, 0.4),
    ("problems", -0.3, 0.4),
    ("recall", -0.4, 0.5),
    ("regret", -0.5, 0.7),
    ("risky", -0.4, 0.6),
    ("sad", -0.5, 1.0),
    ("scam", -0.9, 0.9),
    ("slow", -0.3, 0.4),
    ("terrible", -1.0, 1.0),
    ("trash", -0.7, 0.8),
    ("ugly", -0.7, 0.9),
    ("unreliable", -0.5, 0.6),
    ("useless", -0.5, 0.6),
    ("warning", -0.3, 0.4),
    ("weak", -0.3, 0.5),
    ("worse", -0.6, 0.6),
    ("worst", -1.0, 1.0),
    ("wrong", -0.5, 0.5),
];

/// Fixed lexical polarity/subjectivity scorer.
///
/// Averages the table values of every sentiment-bearing word in the text,
/// with a one-word lookbehind for negators and intensifiers. Texts without
/// any known word score (0.0, 0.0).
pub struct LexiconScorer {
    words: HashMap<&'static str, (f64, f64)>,
    intensifiers: HashMap<&'static str, f64>,
    token_re: Regex,
}

impl LexiconScorer {
    pub fn new() -> Self {
        Self {
            words: ENTRIES.iter().map(|&(word, p, s)| (word, (p, s))).collect(),
            intensifiers: INTENSIFIERS.iter().copied().collect(),
            token_re: Regex::new(r"[a-z']+").unwrap(),
        }
    }

    fn score_text(&self, text: &str) -> (f64, f64) {
        let lowered = text.to_lowercase();

        let mut polarities = Vec::new();
        let mut subjectivities = Vec::new();
        let mut negated = false;
        let mut boost = 1.0;

        for token in self.token_re.find_iter(&lowered) {
            let token = token.as_str().trim_matches('\'');

            if let Some(&(polarity, subjectivity)) = self.words.get(token) {
                let mut polarity = polarity * boost;
                if negated {
                    polarity *= NEGATION_FACTOR;
                }
                polarities.push(polarity.clamp(-1.0, 1.0));
                subjectivities.push((subjectivity * boost).clamp(0.0, 1.0));
                negated = false;
                boost = 1.0;
            } else if let Some(&factor) = self.intensifiers.get(token) {
                boost = factor;
            } else if NEGATIONS.contains(&token) {
                negated = true;
            } else {
                // Modifiers only reach across adjacent tokens.
                negated = false;
                boost = 1.0;
            }
        }

        if polarities.is_empty() {
            return (0.0, 0.0);
        }

        let polarity = polarities.iter().sum::<f64>() / polarities.len() as f64;
        let subjectivity = subjectivities.iter().sum::<f64>() / subjectivities.len() as f64;
        (polarity, subjectivity)
    }
}

impl Default for LexiconScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl PolarityScorer for LexiconScorer {
    fn score(&self, text: &str) -> Result<(f64, f64), ClassificationError> {
        Ok(self.score_text(text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn polarity(text: &str) -> f64 {
        LexiconScorer::new().score_text(text).0
    }

    #[test]
    fn test_positive_text() {
        assert!(polarity("I love this product, the quality is great") > 0.1);
        assert!(polarity("Record growth and a strong rally") > 0.1);
    }

    #[test]
    fn test_negative_text() {
        assert!(polarity("Terrible quality, total garbage") < -0.1);
        assert!(polarity("Massive losses and layoffs announced") < -0.1);
    }

    #[test]
    fn test_text_without_sentiment_words() {
        let (polarity, subjectivity) = LexiconScorer::new().score_text("The sky is above us");
        assert_eq!(polarity, 0.0);
        assert_eq!(subjectivity, 0.0);
    }

    #[test]
    fn test_negation_flips_polarity() {
        assert!(polarity("good") > 0.0);
        assert!(polarity("not good") < 0.0);
        assert!(polarity("not bad") > 0.0);
    }

    #[test]
    fn test_negation_reaches_across_intensifier() {
        assert!(polarity("not very good") < 0.0);
    }

    #[test]
    fn test_intensifiers_scale() {
        assert!(polarity("very good") > polarity("good"));
        assert!(polarity("slightly good") < polarity("good"));
        assert!(polarity("extremely bad") < polarity("bad"));
    }

    #[test]
    fn test_modifiers_do_not_reach_past_other_words() {
        // "very" applies to the next sentiment word only.
        assert_eq!(polarity("very much good"), polarity("good"));
        assert_eq!(polarity("not the good"), polarity("good"));
    }

    #[test]
    fn test_boosted_scores_stay_in_range() {
        let (polarity, subjectivity) = LexiconScorer::new().score_text("extremely awesome");
        assert_eq!(polarity, 1.0);
        assert_eq!(subjectivity, 1.0);
    }

    #[test]
    fn test_scores_within_ranges() {
        let scorer = LexiconScorer::new();
        let samples = [
            "awesome perfect excellent wonderful",
            "worst horrible terrible awful",
            "good and bad at once",
            "extremely wonderful, never terrible",
        ];

        for sample in samples {
            let (polarity, subjectivity) = scorer.score_text(sample);
            assert!((-1.0..=1.0).contains(&polarity), "polarity for {:?}", sample);
            assert!(
                (0.0..=1.0).contains(&subjectivity),
                "subjectivity for {:?}",
                sample
            );
        }
    }

    #[test]
    fn test_lexicon_values_within_ranges() {
        for &(word, polarity, subjectivity) in ENTRIES {
            assert!(
                (-1.0..=1.0).contains(&polarity),
                "polarity out of range for {}",
                word
            );
            assert!(
                (0.0..=1.0).contains(&subjectivity),
                "subjectivity out of range for {}",
                word
            );
        }
    }

    #[test]
    fn test_lexicon_has_no_duplicates() {
        let mut seen = std::collections::HashSet::new();
        for &(word, _, _) in ENTRIES {
            assert!(seen.insert(word), "duplicate lexicon entry: {}", word);
        }
    }
}
