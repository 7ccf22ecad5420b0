//! Keyword-based advisory engine.
//!
//! Classification is a two-stage scan: a domain gate over a fixed
//! agriculture vocabulary, then an ordered list of topic groups where the
//! first match wins. Every topic maps to a canned response; the
//! market-price topic additionally carries a static chart and a source
//! citation.

mod classifier;
mod types;

pub use classifier::KeywordClassifier;
pub use types::{advice_for, Advice, ChartPoint, ChartSpec, SourceRef, Topic, REFUSAL_TEXT};

use crate::error::QueryError;

/// Answer a free-text question.
///
/// Blank or whitespace-only input is rejected before classification;
/// everything else gets the canned response for its matched topic.
pub fn respond(text: &str) -> std::result::Result<Advice, QueryError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(QueryError::Empty);
    }
    let topic = KeywordClassifier::new().classify(trimmed);
    Ok(advice_for(topic))
}
