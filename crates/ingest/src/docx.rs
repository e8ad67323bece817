use crate::error::ExtractError;
use once_cell::sync::Lazy;
use regex::Regex;
use std::io::{Cursor, Read};
use zip::ZipArchive;

static XML_TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]+>").unwrap());

/// Extract paragraph text from a docx container, joined with newlines.
///
/// A docx file is a zip archive whose body lives in word/document.xml;
/// paragraph close tags become line breaks, everything else markup-like
/// is dropped.
pub fn extract(bytes: &[u8]) -> Result<String, ExtractError> {
    let mut archive = ZipArchive::new(Cursor::new(bytes))
        .map_err(|e| ExtractError::Parse(e.to_string()))?;

    let mut document_xml = String::new();
    archive
        .by_name("word/document.xml")
        .map_err(|e| ExtractError::Parse(e.to_string()))?
        .read_to_string(&mut document_xml)
        .map_err(|e| ExtractError::Parse(e.to_string()))?;

    let with_breaks = document_xml.replace("</w:p>", "\n");
    let stripped = XML_TAG.replace_all(&with_breaks, "");
    Ok(decode_entities(&stripped).trim().to_string())
}

fn decode_entities(text: &str) -> String {
    text.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&apos;", "'")
        .replace("&amp;", "&")
}
