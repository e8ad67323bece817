use crate::schema::Entity;
use anyhow::Result;
use once_cell::sync::Lazy;
use regex::Regex;

/// Source of named entities for a piece of text.
///
/// The server holds one implementation for its lifetime; tests inject
/// their own.
pub trait EntitySource: Send + Sync {
    fn extract(&self, text: &str) -> Result<Vec<Entity>>;
}

// Compiled once per process, on first use.
static ORG_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b([A-Z][A-Za-z]+(?:\s+[A-Z][A-Za-z]+)*\s+(?:Inc|LLC|Corp|Corporation|Ltd|Limited|Company|Co|Group|Institute|University|College)\.?)\b").unwrap()
});

static MONEY_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\$\s*\d+(?:,\d{3})*(?:\.\d+)?(?:\s*(?:billion|million|trillion))?|\b\d+(?:,\d{3})*(?:\.\d+)?\s*(?:USD|EUR|GBP|dollars?|euros?|pounds?)\b").unwrap()
});

static DATE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b(\d{1,2}[/-]\d{1,2}[/-]\d{2,4}|\d{4}[/-]\d{1,2}[/-]\d{1,2}|(?:January|February|March|April|May|June|July|August|September|October|November|December|Jan|Feb|Mar|Apr|Jun|Jul|Aug|Sep|Oct|Nov|Dec)\.?\s+\d{1,2}(?:,\s*\d{4})?|\d{1,2}\s+(?:January|February|March|April|May|June|July|August|September|October|November|December)\s+\d{4})\b").unwrap()
});

static GPE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b(United States|United Kingdom|USA|UK|Germany|France|Japan|China|India|Brazil|Canada|Australia|New York|California|Texas|London|Paris|Tokyo|Beijing|Berlin|Washington|Chicago|Los Angeles|San Francisco|Boston|Seattle|Miami|Austin|Denver|Portland|Atlanta)\b").unwrap()
});

static LOC_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b((?:Mount|Lake|Cape)\s+[A-Z][a-z]+|[A-Z][a-z]+\s+(?:Mountains|River|Valley|Desert|Ocean|Sea|Island|Coast))\b").unwrap()
});

static PERSON_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b([A-Z][a-z]+(?:\s+[A-Z][a-z]+)+)\b").unwrap()
});

/// Regex-based entity recognizer.
///
/// Deterministic stand-in for a statistical NER model: capitalization,
/// suffix, and lexical cues only. Patterns are checked in a fixed
/// precedence order and a span claimed by one label is never re-reported
/// under another (so "New York" stays GPE rather than also matching the
/// capitalized-pair PERSON pattern).
pub struct PatternRecognizer;

impl PatternRecognizer {
    pub fn new() -> Self {
        Self
    }

    fn collect(
        text: &str,
        pattern: &Regex,
        label: &str,
        claimed: &mut Vec<(usize, usize)>,
        out: &mut Vec<Entity>,
    ) {
        for m in pattern.find_iter(text) {
            let (start, end) = (m.start(), m.end());
            if claimed.iter().any(|&(s, e)| start < e && s < end) {
                continue;
            }
            claimed.push((start, end));
            out.push(Entity::new(m.as_str(), label, start, end));
        }
    }
}

impl Default for PatternRecognizer {
    fn default() -> Self {
        Self::new()
    }
}

impl EntitySource for PatternRecognizer {
    fn extract(&self, text: &str) -> Result<Vec<Entity>> {
        let mut claimed: Vec<(usize, usize)> = Vec::new();
        let mut entities = Vec::new();

        // Precedence: more specific cues claim their spans first.
        Self::collect(text, &MONEY_PATTERN, "MONEY", &mut claimed, &mut entities);
        Self::collect(text, &DATE_PATTERN, "DATE", &mut claimed, &mut entities);
        Self::collect(text, &ORG_PATTERN, "ORG", &mut claimed, &mut entities);
        Self::collect(text, &GPE_PATTERN, "GPE", &mut claimed, &mut entities);
        Self::collect(text, &LOC_PATTERN, "LOC", &mut claimed, &mut entities);
        Self::collect(text, &PERSON_PATTERN, "PERSON", &mut claimed, &mut entities);

        entities.sort_by_key(|e| e.start);
        Ok(entities)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognizes_basic_entity_types() {
        let text = "Acme Corp paid $5 million to Jane Smith in London on March 3, 2024.";
        let entities = PatternRecognizer::new().extract(text).unwrap();

        let labels: Vec<(&str, &str)> = entities
            .iter()
            .map(|e| (e.text.as_str(), e.label.as_str()))
            .collect();

        assert!(labels.contains(&("Acme Corp", "ORG")));
        assert!(labels.contains(&("$5 million", "MONEY")));
        assert!(labels.contains(&("Jane Smith", "PERSON")));
        assert!(labels.contains(&("London", "GPE")));
        assert!(labels.contains(&("March 3, 2024", "DATE")));
    }

    #[test]
    fn offsets_index_into_source_text() {
        let text = "Visit Mount Fuji with Bob Jones.";
        let entities = PatternRecognizer::new().extract(text).unwrap();

        for e in &entities {
            assert!(e.start <= e.end);
            assert_eq!(&text[e.start..e.end], e.text);
        }
    }

    #[test]
    fn claimed_spans_are_not_relabeled() {
        // "New York" matches both the GPE list and the capitalized-pair
        // PERSON pattern; GPE has precedence.
        let text = "She moved to New York.";
        let entities = PatternRecognizer::new().extract(text).unwrap();

        let new_york: Vec<&Entity> = entities.iter().filter(|e| e.text == "New York").collect();
        assert_eq!(new_york.len(), 1);
        assert_eq!(new_york[0].label, "GPE");
    }

    #[test]
    fn results_are_ordered_by_offset() {
        let text = "Bob Jones left London for Tokyo with Ann Lee.";
        let entities = PatternRecognizer::new().extract(text).unwrap();
        let starts: Vec<usize> = entities.iter().map(|e| e.start).collect();
        let mut sorted = starts.clone();
        sorted.sort_unstable();
        assert_eq!(starts, sorted);
    }
}
