pub mod hints;

pub use hints::{entity_hints, EntityHint};

use anyhow::Result;
use entities::Entity;
use serde::{Deserialize, Serialize};

/// Categories and their trigger keywords, in declaration order.
///
/// Declaration order is the tie-break: with equal scores the
/// first-declared category wins, so this table must stay ordered.
const CATEGORY_PATTERNS: &[(&str, &[&str])] = &[
    (
        "Business & Finance",
        &[
            "company", "business", "revenue", "profit", "ceo", "investment", "stock",
            "market", "financial",
        ],
    ),
    (
        "Technology & Science",
        &[
            "technology", "software", "ai", "research", "data", "algorithm", "computer",
            "science", "innovation",
        ],
    ),
    (
        "Politics & Government",
        &[
            "government", "president", "election", "political", "parliament", "minister",
            "policy", "law",
        ],
    ),
    (
        "Sports & Entertainment",
        &[
            "game", "player", "team", "match", "championship", "movie", "music",
            "celebrity",
        ],
    ),
    (
        "Health & Medicine",
        &[
            "health", "medical", "doctor", "patient", "hospital", "treatment", "disease",
            "medicine",
        ],
    ),
];

/// Topic classification outcome. Confidence is a bounded heuristic score
/// in [0, 0.95], not a calibrated probability.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryResult {
    pub primary_category: String,
    pub confidence: f64,
    pub method: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub hints: Vec<String>,
}

/// Topic categorizer seam. The aggregator selects between the two paths
/// by input length and falls back from `rich` to `quick` on failure.
pub trait Categorizer: Send + Sync {
    /// Keyword-only scoring. Must never fail.
    fn quick(&self, text: &str, entity_list: &[Entity]) -> CategoryResult;

    /// Keyword scoring merged with entity-type hints.
    fn rich(&self, text: &str, entity_list: &[Entity]) -> Result<CategoryResult>;
}

/// The stock keyword-table categorizer.
#[derive(Debug, Clone, Default)]
pub struct KeywordCategorizer;

impl KeywordCategorizer {
    pub fn new() -> Self {
        Self
    }
}

impl Categorizer for KeywordCategorizer {
    fn quick(&self, text: &str, _entity_list: &[Entity]) -> CategoryResult {
        let text_lower = text.to_lowercase();

        let mut best: Option<(&str, usize)> = None;
        for (category, keywords) in CATEGORY_PATTERNS {
            // Substring match, deliberately not word-bounded.
            let score = keywords.iter().filter(|k| text_lower.contains(*k)).count();
            if score > 0 && best.map_or(true, |(_, s)| score > s) {
                best = Some((category, score));
            }
        }

        match best {
            Some((category, score)) => CategoryResult {
                primary_category: category.to_string(),
                confidence: (score as f64 / 10.0).min(0.95),
                method: "keyword-based".to_string(),
                hints: Vec::new(),
            },
            None => CategoryResult {
                primary_category: "General".to_string(),
                confidence: 0.5,
                method: "default".to_string(),
                hints: Vec::new(),
            },
        }
    }

    /// Merge policy: hints nudge, never override. A hint that maps onto a
    /// table category lifts the "General" default to that category
    /// (confidence 0.55) or adds 0.1 confidence when the keyword winner
    /// already agrees with it. Hints that suggest no table category only
    /// annotate the result.
    fn rich(&self, text: &str, entity_list: &[Entity]) -> Result<CategoryResult> {
        let mut result = self.quick(text, entity_list);
        let hint_list = entity_hints(entity_list);

        if result.method == "default" {
            if let Some(hint) = hint_list.iter().find(|h| h.suggests.is_some()) {
                result.primary_category = hint.suggests.unwrap().to_string();
                result.confidence = 0.55;
                result.method = "entity-hint".to_string();
            }
        } else if hint_list
            .iter()
            .any(|h| h.suggests == Some(result.primary_category.as_str()))
        {
            result.confidence = (result.confidence + 0.1).min(0.95);
            result.method = "keyword+entity".to_string();
        }

        result.hints = hint_list.iter().map(|h| h.description.to_string()).collect();
        Ok(result)
    }
}
