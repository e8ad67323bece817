use categorize::CategoryResult;
use entities::Entity;
use sentiment::{EntitySentiment, SentimentResult};
use serde::Serialize;
use std::collections::HashMap;

/// Unified result of one document analysis.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisResponse {
    pub entities: Vec<Entity>,
    pub counts: HashMap<String, usize>,
    pub total_entities: usize,
    pub sentiment: SentimentResult,
    pub entity_sentiments: Vec<EntitySentiment>,
    pub category: CategoryResult,
}

/// Trimmed per-document result for batch analysis: entity list and
/// sentiment are computed over truncated views, `total_entities` over the
/// full document.
#[derive(Debug, Clone, Serialize)]
pub struct DocumentPreview {
    pub filename: String,
    pub text_preview: String,
    pub text_length: usize,
    pub entities: Vec<Entity>,
    pub total_entities: usize,
    pub counts: HashMap<String, usize>,
    pub sentiment: SentimentResult,
    pub category: CategoryResult,
}

/// Which categorization path produced a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryPath {
    /// Entity-hint-aware path (short inputs).
    Rich,
    /// Keyword-only path (long inputs).
    Quick,
    /// Keyword-only path, reached because the rich path failed.
    QuickFallback,
}
