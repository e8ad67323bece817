pub mod recognizer;
pub mod schema;

pub use recognizer::{EntitySource, PatternRecognizer};
pub use schema::Entity;

use std::collections::HashMap;

/// Count entity occurrences per label.
pub fn label_counts(entities: &[Entity]) -> HashMap<String, usize> {
    let mut counts = HashMap::new();
    for entity in entities {
        *counts.entry(entity.label.clone()).or_insert(0) += 1;
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_group_by_label() {
        let entities = vec![
            Entity::new("Acme Corp", "ORG", 0, 9),
            Entity::new("Bob Jones", "PERSON", 10, 19),
            Entity::new("Globex Inc", "ORG", 20, 30),
        ];
        let counts = label_counts(&entities);
        assert_eq!(counts.get("ORG"), Some(&2));
        assert_eq!(counts.get("PERSON"), Some(&1));
        assert_eq!(counts.len(), 2);
    }
}
