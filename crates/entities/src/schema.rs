use serde::{Deserialize, Serialize};

/// A labeled span of the input text.
///
/// Offsets are byte offsets into the original input; `start <= end` always
/// holds and the span `&text[start..end]` equals `self.text`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    pub text: String,
    pub label: String,
    pub start: usize,
    pub end: usize,
}

impl Entity {
    pub fn new(text: impl Into<String>, label: impl Into<String>, start: usize, end: usize) -> Self {
        Self {
            text: text.into(),
            label: label.into(),
            start,
            end,
        }
    }
}
