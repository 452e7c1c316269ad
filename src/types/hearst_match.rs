use serde::{Deserialize, Serialize};

use crate::types::Span;

/// One extracted is-a relation: `(predicate, hypernym, hyponym)`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HearstMatch {
    pub predicate: String,
    pub hypernym: Span,
    pub hyponym: Span,
}

impl HearstMatch {
    pub fn new(predicate: impl Into<String>, hypernym: Span, hyponym: Span) -> Self {
        Self {
            predicate: predicate.into(),
            hypernym,
            hyponym,
        }
    }

    /// Tuple view, handy when comparing against expected triples
    pub fn as_tuple(&self) -> (&str, Span, Span) {
        (self.predicate.as_str(), self.hypernym, self.hyponym)
    }
}

impl<P: Into<String>> From<(P, Span, Span)> for HearstMatch {
    fn from((predicate, hypernym, hyponym): (P, Span, Span)) -> Self {
        HearstMatch::new(predicate, hypernym, hyponym)
    }
}
