/// Tunable limits for the analysis pipeline.
#[derive(Debug, Clone)]
pub struct AnalyzerConfig {
    /// Texts shorter than this (in chars) take the richer,
    /// entity-hint-aware categorization path.
    pub rich_path_max_chars: usize,
    /// Batch analysis scores sentiment over this many leading chars.
    pub batch_sentiment_prefix: usize,
    /// Batch text previews are truncated to this many chars.
    pub preview_chars: usize,
    /// Batch entity lists are truncated to this many entries.
    pub batch_entity_limit: usize,
    /// Extracted text below this length is treated as an extraction
    /// failure rather than analyzed.
    pub min_text_chars: usize,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            rich_path_max_chars: 1000,
            batch_sentiment_prefix: 500,
            preview_chars: 200,
            batch_entity_limit: 10,
            min_text_chars: 10,
        }
    }
}
