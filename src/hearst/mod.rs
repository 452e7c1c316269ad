//! Hearst-pattern hypernym/hyponym detection
//!
//! - `rules`: the built-in rule table
//! - `noun_compound`: compound heads and noun-phrase expansion
//! - `detector`: [`HyponymDetector`], which ties them together

pub mod detector;
pub mod noun_compound;
pub mod rules;

pub use detector::HyponymDetector;
pub use noun_compound::{expand_to_noun_compound, find_noun_compound_head};
pub use rules::{default_rules, HearstRule, BASE_RULES, EXTENDED_RULES};
