use crate::scorer::{round3, SentimentLabel, SentimentScorer};
use crate::sentences;
use entities::Entity;
use serde::{Deserialize, Serialize};

/// Sentiment attributed to one entity, scored over the sentences that
/// mention it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntitySentiment {
    pub entity: String,
    pub label: String,
    pub sentiment: f64,
    pub sentiment_label: SentimentLabel,
}

/// Score sentiment around each entity.
///
/// An entity's sentences are those containing its literal text as a
/// substring (case-sensitive, no fuzzy matching). Matching sentences are
/// joined with single spaces in order of appearance and scored as one
/// text. Entities mentioned in no sentence are omitted, not reported as
/// neutral.
pub fn attribute(scorer: &SentimentScorer, text: &str, entity_list: &[Entity]) -> Vec<EntitySentiment> {
    let sentence_list = sentences::split(text);
    let mut results = Vec::new();

    for entity in entity_list {
        let matching: Vec<&str> = sentence_list
            .iter()
            .copied()
            .filter(|s| s.contains(entity.text.as_str()))
            .collect();

        if matching.is_empty() {
            continue;
        }

        let combined = matching.join(" ");
        let polarity = scorer.polarity(&combined);

        results.push(EntitySentiment {
            entity: entity.text.clone(),
            label: entity.label.clone(),
            sentiment: round3(polarity),
            sentiment_label: SentimentLabel::from_polarity(polarity),
        });
    }

    results
}
