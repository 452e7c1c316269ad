//! Field and label name constants for consistency across the codebase

pub const FIELD_WORD: &str = "word";
pub const FIELD_LOWER: &str = "lower";
pub const FIELD_LEMMA: &str = "lemma";
pub const FIELD_POS: &str = "pos";
pub const FIELD_TAG: &str = "tag";
pub const FIELD_DEP: &str = "dep";
pub const FIELD_DEPENDENCIES: &str = "dependencies";

pub const ROOT_LABEL: &str = "ROOT";
pub const COMPOUND_LABEL: &str = "compound";
pub const CONJ_LABEL: &str = "conj";

/// Universal POS tags treated as nominal heads
pub const NOMINAL_POS: [&str; 3] = ["NOUN", "PROPN", "PRON"];

pub const HYPERNYM_CAPTURE: &str = "hypernym";
pub const HYPONYM_CAPTURE: &str = "hyponym";

/// Name the detector registers under in a [`crate::pipeline::Pipeline`]
pub const HYPONYM_DETECTOR_COMPONENT: &str = "hyponym_detector";

pub fn is_nominal(pos: &str) -> bool {
    NOMINAL_POS.contains(&pos)
}
