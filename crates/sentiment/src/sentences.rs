use unicode_segmentation::UnicodeSegmentation;

/// Split text into trimmed, non-empty sentences using Unicode sentence
/// boundaries.
pub fn split(text: &str) -> Vec<&str> {
    text.split_sentence_bounds()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_sentence_boundaries() {
        let sentences = split("First sentence. Second one! A third?");
        assert_eq!(sentences, vec!["First sentence.", "Second one!", "A third?"]);
    }

    #[test]
    fn empty_input_yields_no_sentences() {
        assert!(split("").is_empty());
        assert!(split("   \n  ").is_empty());
    }
}
