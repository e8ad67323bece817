use crate::config::AnalyzerConfig;
use crate::response::{AnalysisResponse, CategoryPath, DocumentPreview};
use anyhow::{Context, Result};
use categorize::{Categorizer, CategoryResult};
use entities::{label_counts, Entity, EntitySource};
use sentiment::{attribute, SentimentScorer};
use std::sync::Arc;
use tracing::warn;

/// Orchestrates the sub-analyses into one response.
///
/// Entity extraction failure is fatal to the request. Categorization
/// failure never is: the rich path degrades to the keyword path with a
/// logged diagnostic. The lexicon sentiment scorer cannot fail.
pub struct Analyzer {
    source: Arc<dyn EntitySource>,
    scorer: SentimentScorer,
    categorizer: Arc<dyn Categorizer>,
    config: AnalyzerConfig,
}

impl Analyzer {
    pub fn new(
        source: Arc<dyn EntitySource>,
        scorer: SentimentScorer,
        categorizer: Arc<dyn Categorizer>,
        config: AnalyzerConfig,
    ) -> Self {
        Self {
            source,
            scorer,
            categorizer,
            config,
        }
    }

    /// Full single-document analysis.
    pub fn analyze(&self, text: &str) -> Result<AnalysisResponse> {
        let entity_list = self
            .source
            .extract(text)
            .context("entity extraction failed")?;
        let counts = label_counts(&entity_list);
        let sentiment = self.scorer.score(text);
        let entity_sentiments = attribute(&self.scorer, text, &entity_list);
        let (category, _) = self.select_category(text, &entity_list);

        Ok(AnalysisResponse {
            total_entities: entity_list.len(),
            entities: entity_list,
            counts,
            sentiment,
            entity_sentiments,
            category,
        })
    }

    /// Length-gated categorization with fallback.
    ///
    /// Short inputs take the rich path; if it fails the keyword path is
    /// substituted and the degradation is visible in the returned path tag.
    pub fn select_category(
        &self,
        text: &str,
        entity_list: &[Entity],
    ) -> (CategoryResult, CategoryPath) {
        if text.chars().count() < self.config.rich_path_max_chars {
            match self.categorizer.rich(text, entity_list) {
                Ok(result) => (result, CategoryPath::Rich),
                Err(error) => {
                    warn!(%error, "rich categorization failed, using keyword path");
                    (
                        self.categorizer.quick(text, entity_list),
                        CategoryPath::QuickFallback,
                    )
                }
            }
        } else {
            (
                self.categorizer.quick(text, entity_list),
                CategoryPath::Quick,
            )
        }
    }

    /// Batch-mode analysis of one extracted document: sentiment over a
    /// truncated prefix, entity list truncated for the preview payload,
    /// `total_entities` over the whole document.
    pub fn analyze_preview(&self, filename: &str, text: &str) -> Result<DocumentPreview> {
        let entity_list = self
            .source
            .extract(text)
            .context("entity extraction failed")?;
        let counts = label_counts(&entity_list);
        let total_entities = entity_list.len();

        let sentiment_prefix: String =
            text.chars().take(self.config.batch_sentiment_prefix).collect();
        let sentiment = self.scorer.score(&sentiment_prefix);

        let category = self.categorizer.quick(text, &entity_list);

        let text_length = text.chars().count();
        let text_preview = if text_length > self.config.preview_chars {
            let prefix: String = text.chars().take(self.config.preview_chars).collect();
            format!("{prefix}...")
        } else {
            text.to_string()
        };

        let mut entity_list = entity_list;
        entity_list.truncate(self.config.batch_entity_limit);

        Ok(DocumentPreview {
            filename: filename.to_string(),
            text_preview,
            text_length,
            entities: entity_list,
            total_entities,
            counts,
            sentiment,
            category,
        })
    }

    /// Whether extracted text is long enough to analyze at all.
    pub fn text_long_enough(&self, text: &str) -> bool {
        text.chars().count() >= self.config.min_text_chars
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::bail;
    use categorize::KeywordCategorizer;
    use entities::PatternRecognizer;
    use std::sync::Mutex;

    fn analyzer_with(categorizer: Arc<dyn Categorizer>) -> Analyzer {
        Analyzer::new(
            Arc::new(PatternRecognizer::new()),
            SentimentScorer::new(),
            categorizer,
            AnalyzerConfig::default(),
        )
    }

    fn stock_analyzer() -> Analyzer {
        analyzer_with(Arc::new(KeywordCategorizer::new()))
    }

    /// Records which path was invoked; `rich` optionally fails.
    struct RecordingCategorizer {
        calls: Mutex<Vec<&'static str>>,
        fail_rich: bool,
    }

    impl RecordingCategorizer {
        fn new(fail_rich: bool) -> Self {
            Self {
                calls: Mutex::new(Vec::new()),
                fail_rich,
            }
        }

        fn calls(&self) -> Vec<&'static str> {
            self.calls.lock().unwrap().clone()
        }
    }

    impl Categorizer for RecordingCategorizer {
        fn quick(&self, _text: &str, _entity_list: &[Entity]) -> CategoryResult {
            self.calls.lock().unwrap().push("quick");
            CategoryResult {
                primary_category: "General".to_string(),
                confidence: 0.5,
                method: "default".to_string(),
                hints: Vec::new(),
            }
        }

        fn rich(&self, text: &str, entity_list: &[Entity]) -> Result<CategoryResult> {
            self.calls.lock().unwrap().push("rich");
            if self.fail_rich {
                bail!("rich path unavailable");
            }
            Ok(self.quick(text, entity_list))
        }
    }

    #[test]
    fn short_text_takes_the_rich_path() {
        let recorder = Arc::new(RecordingCategorizer::new(false));
        let analyzer = analyzer_with(recorder.clone());

        let text = "a".repeat(999);
        let (_, path) = analyzer.select_category(&text, &[]);

        assert_eq!(path, CategoryPath::Rich);
        assert_eq!(recorder.calls()[0], "rich");
    }

    #[test]
    fn long_text_takes_the_quick_path() {
        let recorder = Arc::new(RecordingCategorizer::new(false));
        let analyzer = analyzer_with(recorder.clone());

        let text = "a".repeat(1000);
        let (_, path) = analyzer.select_category(&text, &[]);

        assert_eq!(path, CategoryPath::Quick);
        assert_eq!(recorder.calls(), vec!["quick"]);
    }

    #[test]
    fn rich_failure_falls_back_to_quick() {
        let recorder = Arc::new(RecordingCategorizer::new(true));
        let analyzer = analyzer_with(recorder.clone());

        let (result, path) = analyzer.select_category("short text", &[]);

        assert_eq!(path, CategoryPath::QuickFallback);
        assert_eq!(recorder.calls(), vec!["rich", "quick"]);
        assert_eq!(result.primary_category, "General");
    }

    #[test]
    fn analyze_survives_categorizer_failure() {
        let analyzer = analyzer_with(Arc::new(RecordingCategorizer::new(true)));
        let response = analyzer.analyze("Acme Corp had a great quarter.").unwrap();
        assert_eq!(response.category.primary_category, "General");
        assert_eq!(response.total_entities, response.entities.len());
    }

    #[test]
    fn analyze_merges_all_sub_analyses() {
        let analyzer = stock_analyzer();
        let response = analyzer
            .analyze("Acme Corp is a wonderful company. Revenue reached $5 million.")
            .unwrap();

        assert!(response.total_entities >= 2);
        assert_eq!(
            response.counts.values().sum::<usize>(),
            response.total_entities
        );
        assert_eq!(response.category.primary_category, "Business & Finance");
        assert!(response
            .entity_sentiments
            .iter()
            .any(|es| es.entity == "Acme Corp"));
    }

    #[test]
    fn preview_truncates_text_and_entities_but_not_totals() {
        let analyzer = stock_analyzer();

        // Twelve recognizable people spread over a long text.
        let mut text = String::new();
        for name in [
            "Alice Smith", "Bob Jones", "Carol White", "Dan Brown", "Eve Black",
            "Frank Green", "Grace Hill", "Hank Stone", "Ivy Lake", "Jack Frost",
            "Kate Snow", "Liam Reed",
        ] {
            text.push_str(&format!("{name} attended the annual shareholder meeting. "));
        }
        text.push_str(&"The quarterly numbers were discussed at length. ".repeat(10));

        let preview = analyzer.analyze_preview("report.txt", &text).unwrap();

        assert_eq!(preview.entities.len(), 10);
        assert!(preview.total_entities >= 12);
        assert_eq!(preview.text_length, text.chars().count());
        assert!(preview.text_preview.ends_with("..."));
        assert_eq!(preview.text_preview.chars().count(), 203);
    }

    #[test]
    fn short_preview_text_is_not_elided() {
        let analyzer = stock_analyzer();
        let preview = analyzer
            .analyze_preview("note.txt", "A short note about nothing much.")
            .unwrap();
        assert_eq!(preview.text_preview, "A short note about nothing much.");
    }

    #[test]
    fn minimum_length_gate() {
        let analyzer = stock_analyzer();
        assert!(!analyzer.text_long_enough("too short"));
        assert!(analyzer.text_long_enough("long enough text"));
    }
}
