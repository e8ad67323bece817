use crate::error::ExtractError;
use lopdf::Document;

/// Extract text from a PDF, page by page, joined with newlines.
pub fn extract(bytes: &[u8]) -> Result<String, ExtractError> {
    let doc = Document::load_mem(bytes).map_err(|e| ExtractError::Parse(e.to_string()))?;

    let mut text = String::new();
    for page_number in doc.get_pages().keys() {
        let page_text = doc
            .extract_text(&[*page_number])
            .map_err(|e| ExtractError::Parse(e.to_string()))?;
        text.push_str(&page_text);
        text.push('\n');
    }

    Ok(text.trim().to_string())
}
