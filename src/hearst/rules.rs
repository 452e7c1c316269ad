//! Built-in Hearst rule table
//!
//! Each rule is a token pattern with one `hypernym` and one `hyponym`
//! capture. The last token of each capture anchors the noun phrase that is
//! reported.

use serde::{Deserialize, Serialize};

/// A labelled Hearst pattern
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HearstRule {
    pub label: String,
    pub query: String,
    /// Only active when the detector runs with `extended = true`
    #[serde(default)]
    pub extended: bool,
}

impl HearstRule {
    pub fn new(label: impl Into<String>, query: impl Into<String>) -> Self {
        Self { label: label.into(), query: query.into(), extended: false }
    }

    pub fn extended(label: impl Into<String>, query: impl Into<String>) -> Self {
        Self { label: label.into(), query: query.into(), extended: true }
    }
}

macro_rules! hypernym {
    () => {
        "(?<hypernym> [pos=/NOUN|PROPN|PRON/]+)"
    };
}

macro_rules! hyponym {
    () => {
        "(?<hyponym> [pos=/NOUN|PROPN|PRON/]+)"
    };
}

/// `<hypernym> ,? <cue...> <det>? <hyponym>`
macro_rules! hypernym_first {
    ($($cue:literal)+) => {
        concat!(hypernym!(), " [pos=PUNCT]?", $(" ", $cue,)+ " [pos=DET]? ", hyponym!())
    };
}

// Cue words whose inflected form differs from the lemma also match on `lower`,
// so documents without a lemma field still trigger them.
pub const BASE_RULES: &[(&str, &str)] = &[
    ("such_as", hypernym_first!("[lemma=such]" "[lemma=as]")),
    ("include", hypernym_first!("[lemma=include | lower=/include[sd]?|including/]")),
    ("especially", hypernym_first!("[lemma=especially]")),
    (
        "other",
        concat!(hyponym!(), " [pos=PUNCT]? [lemma=/and|or/] [lemma=other] ", hypernym!()),
    ),
];

pub const EXTENDED_RULES: &[(&str, &str)] = &[
    ("which_may_include", hypernym_first!("[lemma=which]" "[lemma=may]" "[lemma=include | lower=/include[sd]?|including/]")),
    ("which_be_similar_to", hypernym_first!("[lemma=which]" "[lemma=be | lower=/is|are|was|were/]" "[lemma=similar]" "[lemma=to]")),
    ("mainly", hypernym_first!("[lemma=mainly]")),
    ("mostly", hypernym_first!("[lemma=mostly]")),
    ("notably", hypernym_first!("[lemma=notably]")),
    ("particularly", hypernym_first!("[lemma=particularly]")),
    ("principally", hypernym_first!("[lemma=principally]")),
    ("in_particular", hypernym_first!("[lemma=in]" "[lemma=particular]" "[pos=PUNCT]?")),
    ("except", hypernym_first!("[lemma=except]")),
    ("other_than", hypernym_first!("[lemma=other]" "[lemma=than]")),
    ("e.g.", hypernym_first!(r"[lower=/e\.?g\.?/]" "[pos=PUNCT]?")),
    ("i.e.", hypernym_first!(r"[lower=/i\.?e\.?/]" "[pos=PUNCT]?")),
    (
        "a_kind_of",
        concat!(hyponym!(), " [lemma=be | lower=/is|are|was|were/] [lower=/an?/] [lemma=kind] [lemma=of] ", hypernym!()),
    ),
    (
        "kind_of",
        concat!(hyponym!(), " [pos=PUNCT]? [lemma=kind | lower=kinds] [lemma=of] ", hypernym!()),
    ),
    (
        "form_of",
        concat!(hyponym!(), " [lemma=be | lower=/is|are|was|were/] [lower=/an?/] [lemma=form] [lemma=of] ", hypernym!()),
    ),
    (
        "a_type_of",
        concat!(hyponym!(), " [lemma=be | lower=/is|are|was|were/] [lower=/an?/] [lemma=type] [lemma=of] ", hypernym!()),
    ),
    ("like", hypernym_first!("[lemma=like & !pos=VERB]")),
    (
        "such_NOUN_as",
        concat!("[lemma=such] ", hypernym!(), " [lemma=as] [pos=DET]? ", hyponym!()),
    ),
    ("for_example", hypernym_first!("[lemma=for]" "[lemma=example]" "[pos=PUNCT]?")),
    ("for_instance", hypernym_first!("[lemma=for]" "[lemma=instance]" "[pos=PUNCT]?")),
    ("among_them", hypernym_first!("[lemma=among]" "[lower=them]" "[pos=PUNCT]?")),
    ("which_be_call", hypernym_first!("[lemma=which]" "[lemma=be | lower=/is|are|was|were/]" "[lemma=call | lower=called]")),
    ("which_be_name", hypernym_first!("[lemma=which]" "[lemma=be | lower=/is|are|was|were/]" "[lemma=name | lower=named]")),
];

/// Base rules, followed by the extended ones when `extended` is set
pub fn default_rules(extended: bool) -> Vec<HearstRule> {
    let base = BASE_RULES.iter().map(|(label, query)| HearstRule::new(*label, *query));
    let more = EXTENDED_RULES
        .iter()
        .filter(|_| extended)
        .map(|(label, query)| HearstRule::extended(*label, *query));
    base.chain(more).collect()
}
