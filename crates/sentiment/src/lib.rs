pub mod attribution;
pub mod lexicon;
pub mod scorer;
pub mod sentences;

pub use attribution::{attribute, EntitySentiment};
pub use scorer::{SentimentLabel, SentimentResult, SentimentScorer};
