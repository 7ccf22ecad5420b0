//! Keyword classifier for farmer queries.

use super::types::Topic;

/// Fixed agriculture vocabulary gating whether a query is in scope.
///
/// Entries are fragments, not words: "fertil" in "fertilizer" matches,
/// as does "irrig" inside "irrigation schedule".
const DOMAIN_KEYWORDS: [&str; 16] = [
    "crop",
    "soil",
    "irrig",
    "pest",
    "disease",
    "harvest",
    "yield",
    "market",
    "price",
    "fertilizer",
    "manure",
    "weed",
    "pesticide",
    "seed",
    "sowing",
    "cultiv",
];

/// Topic groups checked in strict priority order. The first matching
/// group wins, so a query mentioning both pests and prices gets the
/// market-price answer.
const TOPIC_GROUPS: [(&[&str], Topic); 4] = [
    (&["price", "market", "trend"], Topic::MarketPrice),
    (&["pest", "worm"], Topic::PestControl),
    (&["soil", "fertil"], Topic::SoilHealth),
    (&["irrig", "water"], Topic::Irrigation),
];

/// Classifies free-text queries into advisory topics by substring scan.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeywordClassifier;

impl KeywordClassifier {
    /// Create a new classifier.
    pub fn new() -> Self {
        Self
    }

    /// Classify a query.
    ///
    /// Matching is case-insensitive substring containment, never
    /// tokenized word matching. Within a group any keyword suffices;
    /// across groups the order above is binding.
    pub fn classify(&self, query: &str) -> Topic {
        let query = query.to_lowercase();

        if !DOMAIN_KEYWORDS.iter().any(|kw| query.contains(kw)) {
            return Topic::OutOfScope;
        }

        for (keywords, topic) in TOPIC_GROUPS {
            if keywords.iter().any(|kw| query.contains(kw)) {
                return topic;
            }
        }

        Topic::GeneralAgriculture
    }
}
