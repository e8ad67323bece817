use crate::lexicon::{INTENSIFIERS, NEGATIONS, NEGATIVE_WORDS, POSITIVE_WORDS};
use serde::{Deserialize, Serialize};

/// Coarse sentiment class, derived from polarity with fixed ±0.1 thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SentimentLabel {
    Positive,
    Neutral,
    Negative,
}

impl SentimentLabel {
    pub fn from_polarity(polarity: f64) -> Self {
        if polarity > 0.1 {
            Self::Positive
        } else if polarity < -0.1 {
            Self::Negative
        } else {
            Self::Neutral
        }
    }
}

/// Whole-text sentiment: polarity in [-1, 1], subjectivity in [0, 1].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SentimentResult {
    pub polarity: f64,
    pub subjectivity: f64,
    pub label: SentimentLabel,
    pub description: String,
}

/// Lexicon-based sentiment scorer.
///
/// Counts positive and negative words with simple negation (previous two
/// tokens) and intensifier (previous token, x1.5) handling. Cannot fail
/// for any string input.
#[derive(Debug, Clone, Default)]
pub struct SentimentScorer;

impl SentimentScorer {
    pub fn new() -> Self {
        Self
    }

    /// Polarity of `text` in [-1, 1]. Zero for text with no lexicon hits.
    pub fn polarity(&self, text: &str) -> f64 {
        let (positive, negative, _) = self.tally(text);
        let total = positive + negative;
        if total == 0.0 {
            0.0
        } else {
            (positive - negative) / total
        }
    }

    pub fn score(&self, text: &str) -> SentimentResult {
        let (positive, negative, token_count) = self.tally(text);
        let total = positive + negative;

        let polarity = if total == 0.0 { 0.0 } else { (positive - negative) / total };
        let subjectivity = if token_count == 0 {
            0.0
        } else {
            (3.0 * total / token_count as f64).min(1.0)
        };

        SentimentResult {
            polarity: round3(polarity),
            subjectivity: round3(subjectivity),
            label: SentimentLabel::from_polarity(polarity),
            description: describe(polarity, subjectivity),
        }
    }

    fn tally(&self, text: &str) -> (f64, f64, usize) {
        let words: Vec<String> = text
            .to_lowercase()
            .split(|c: char| !c.is_alphanumeric() && c != '\'')
            .filter(|s| !s.is_empty())
            .map(String::from)
            .collect();

        let mut positive = 0.0;
        let mut negative = 0.0;

        for (i, word) in words.iter().enumerate() {
            let intensified = i > 0 && INTENSIFIERS.contains(words[i - 1].as_str());
            let weight = if intensified { 1.5 } else { 1.0 };

            let negated = (i > 0 && NEGATIONS.contains(words[i - 1].as_str()))
                || (i > 1 && NEGATIONS.contains(words[i - 2].as_str()));

            if POSITIVE_WORDS.contains(word.as_str()) {
                if negated {
                    negative += weight;
                } else {
                    positive += weight;
                }
            } else if NEGATIVE_WORDS.contains(word.as_str()) {
                if negated {
                    positive += weight;
                } else {
                    negative += weight;
                }
            }
        }

        (positive, negative, words.len())
    }
}

pub(crate) fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}

fn describe(polarity: f64, subjectivity: f64) -> String {
    let pol_desc = if polarity > 0.5 {
        "very positive"
    } else if polarity > 0.1 {
        "positive"
    } else if polarity < -0.5 {
        "very negative"
    } else if polarity < -0.1 {
        "negative"
    } else {
        "neutral"
    };

    let subj_desc = if subjectivity > 0.6 {
        "highly subjective (opinion-based)"
    } else if subjectivity > 0.3 {
        "somewhat subjective"
    } else {
        "objective (fact-based)"
    };

    format!("This text is {pol_desc} and {subj_desc}.")
}
