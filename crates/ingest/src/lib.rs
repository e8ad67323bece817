pub mod docx;
pub mod error;
pub mod pdf;

pub use error::ExtractError;

/// Extract plain text from uploaded bytes, dispatching on the filename
/// extension. Supports txt, pdf and docx/doc.
pub fn extract_text(bytes: &[u8], filename: &str) -> Result<String, ExtractError> {
    let extension = filename
        .rsplit('.')
        .next()
        .unwrap_or("")
        .to_lowercase();

    match extension.as_str() {
        "txt" => Ok(extract_txt(bytes)),
        "pdf" => pdf::extract(bytes),
        "docx" | "doc" => docx::extract(bytes),
        _ => Err(ExtractError::UnsupportedFormat(extension)),
    }
}

/// Decode text bytes: UTF-8 first, Latin-1 as the lossless fallback
/// (every byte is a valid Latin-1 code point).
fn extract_txt(bytes: &[u8]) -> String {
    match std::str::from_utf8(bytes) {
        Ok(text) => text.to_string(),
        Err(_) => bytes.iter().map(|&b| b as char).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn utf8_text_decodes_directly() {
        let text = extract_text("héllo wörld".as_bytes(), "notes.txt").unwrap();
        assert_eq!(text, "héllo wörld");
    }

    #[test]
    fn non_utf8_text_falls_back_to_latin1() {
        // 0xE9 is 'é' in Latin-1 but not valid UTF-8 on its own.
        let bytes = [b'c', b'a', b'f', 0xE9];
        let text = extract_text(&bytes, "menu.txt").unwrap();
        assert_eq!(text, "café");
    }

    #[test]
    fn unknown_extension_is_rejected() {
        let err = extract_text(b"...", "image.png").unwrap_err();
        assert!(matches!(err, ExtractError::UnsupportedFormat(ref ext) if ext == "png"));
    }

    #[test]
    fn extension_match_is_case_insensitive() {
        assert!(extract_text(b"ok", "README.TXT").is_ok());
    }
}
