pub mod analyzer;
pub mod config;
pub mod response;

pub use analyzer::Analyzer;
pub use config::AnalyzerConfig;
pub use response::{AnalysisResponse, CategoryPath, DocumentPreview};
