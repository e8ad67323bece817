use entities::{label_counts, Entity};

/// An advisory signal derived from entity-type counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntityHint {
    pub description: &'static str,
    /// Category this hint points at, when it maps onto the keyword table.
    pub suggests: Option<&'static str>,
}

/// Derive categorization hints from the entity mix.
///
/// Rules are checked in a fixed order so the hint list is deterministic
/// for a given entity set.
pub fn entity_hints(entity_list: &[Entity]) -> Vec<EntityHint> {
    let counts = label_counts(entity_list);
    let count = |label: &str| counts.get(label).copied().unwrap_or(0);

    let mut hints = Vec::new();

    if count("ORG") > 2 || count("MONEY") > 0 {
        hints.push(EntityHint {
            description: "Contains business/financial entities",
            suggests: Some("Business & Finance"),
        });
    }
    if count("GPE") > 3 || count("LOC") > 2 {
        hints.push(EntityHint {
            description: "Contains multiple geographic references",
            suggests: None,
        });
    }
    if count("DATE") > 2 {
        hints.push(EntityHint {
            description: "Contains temporal references (news/events)",
            suggests: None,
        });
    }
    if count("PERSON") > 3 {
        hints.push(EntityHint {
            description: "Focuses on multiple individuals",
            suggests: None,
        });
    }

    hints
}
