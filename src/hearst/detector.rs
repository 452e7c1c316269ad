//! The hyponym detector pipeline component

use std::collections::HashSet;

use crate::compiler::QueryParser;
use crate::data::annotated::{AnnotatedDocument, AnnotatedSentence};
use crate::engine::config::DetectorConfig;
use crate::engine::constants::*;
use crate::engine::execution::TokenPatternMatcher;
use crate::error::{HearstError, Result};
use crate::hearst::noun_compound::{expand_to_noun_compound, find_noun_compound_head};
use crate::hearst::rules::{default_rules, HearstRule};
use crate::types::{HearstMatch, Span, SpanWithCaptures};

#[derive(Debug, Clone)]
struct CompiledRule {
    label: String,
    matcher: TokenPatternMatcher,
}

/// Finds Hearst-pattern hypernym/hyponym pairs in annotated documents.
///
/// The rule table is compiled once in [`HyponymDetector::new`]; after that
/// the detector is immutable and can be shared between threads.
#[derive(Debug, Clone)]
pub struct HyponymDetector {
    extended: bool,
    rules: Vec<CompiledRule>,
}

impl HyponymDetector {
    pub fn new(config: DetectorConfig) -> Result<Self> {
        let parser = QueryParser::new();
        let mut labels = HashSet::new();
        let mut rules = Vec::new();

        let custom = config.rules.into_iter().filter(|rule| config.extended || !rule.extended);
        for rule in default_rules(config.extended).into_iter().chain(custom) {
            if rule.label.trim().is_empty() {
                return Err(HearstError::Config(format!("rule '{}' has an empty label", rule.query)));
            }
            if !labels.insert(rule.label.clone()) {
                return Err(HearstError::Config(format!("duplicate rule label '{}'", rule.label)));
            }
            rules.push(compile_rule(&parser, rule)?);
        }

        log::debug!(
            "Compiled {} Hearst rules (extended: {})",
            rules.len(),
            config.extended
        );
        Ok(Self { extended: config.extended, rules })
    }

    /// Detector over the built-in rules only
    pub fn with_extended(extended: bool) -> Result<Self> {
        Self::new(DetectorConfig::new(extended))
    }

    /// Build from a pipe config map such as `{"extended": true}`
    pub fn from_json_config(config: serde_json::Value) -> Result<Self> {
        Self::new(DetectorConfig::from_json_value(config)?)
    }

    pub fn extended(&self) -> bool {
        self.extended
    }

    /// Rule labels in evaluation order
    pub fn rule_labels(&self) -> impl Iterator<Item = &str> + '_ {
        self.rules.iter().map(|rule| rule.label.as_str())
    }

    /// All matches in `doc`, ordered by the start of the triggering pattern
    /// match, then rule order, then hyponym position.
    pub fn detect(&self, doc: &AnnotatedDocument) -> Vec<HearstMatch> {
        let mut found: Vec<(usize, usize, HearstMatch)> = Vec::new();
        for (sentence_idx, sentence) in doc.sentences().iter().enumerate() {
            if !sentence.is_well_formed() {
                log::debug!("Document '{}': skipping malformed sentence {}", doc.id(), sentence_idx);
                continue;
            }
            self.detect_in_sentence(doc, sentence, &mut found);
        }

        found.sort_by_key(|(start, rule_idx, m)| (*start, *rule_idx, m.hyponym));
        let mut seen = HashSet::new();
        found
            .into_iter()
            .map(|(_, _, m)| m)
            .filter(|m| seen.insert(m.clone()))
            .collect()
    }

    /// Run [`Self::detect`] and store the result on the document, replacing
    /// any earlier result.
    pub fn process(&self, doc: &mut AnnotatedDocument) {
        let matches = self.detect(doc);
        log::debug!("Document '{}': {} Hearst matches", doc.id(), matches.len());
        doc.set_hearst_patterns(matches);
    }

    fn detect_in_sentence(
        &self,
        doc: &AnnotatedDocument,
        sentence: &AnnotatedSentence,
        found: &mut Vec<(usize, usize, HearstMatch)>,
    ) {
        for (rule_idx, rule) in self.rules.iter().enumerate() {
            for raw in rule.matcher.find_in_sentence(doc, sentence.span()) {
                for m in resolve_match(doc, &rule.label, &raw) {
                    log::debug!(
                        "{}: '{}' is a '{}'",
                        rule.label,
                        doc.text(m.hyponym),
                        doc.text(m.hypernym)
                    );
                    found.push((raw.span.start, rule_idx, m));
                }
            }
        }
    }
}

fn compile_rule(parser: &QueryParser, rule: HearstRule) -> Result<CompiledRule> {
    let pattern = parser.parse_query(&rule.query)?;
    for capture in [HYPERNYM_CAPTURE, HYPONYM_CAPTURE] {
        let found = pattern.capture_names().iter().filter(|name| **name == capture).count();
        if found != 1 {
            return Err(HearstError::MissingCapture { label: rule.label, capture, found });
        }
    }
    Ok(CompiledRule { label: rule.label, matcher: TokenPatternMatcher::new(pattern) })
}

/// Turn one raw pattern match into triples: resolve both anchors to their
/// compound heads, expand them to noun phrases, and add one hyponym per
/// `conj` coordinate.
fn resolve_match(doc: &AnnotatedDocument, label: &str, raw: &SpanWithCaptures) -> Vec<HearstMatch> {
    let anchor = |capture: &str| raw.capture(capture).and_then(|span| span.last());
    let (Some(hypernym_anchor), Some(hyponym_anchor)) = (anchor(HYPERNYM_CAPTURE), anchor(HYPONYM_CAPTURE)) else {
        return Vec::new();
    };

    let hypernym = expand_to_noun_compound(find_noun_compound_head(doc.token(hypernym_anchor)));
    let hyponym_head = find_noun_compound_head(doc.token(hyponym_anchor));

    let mut hyponyms: Vec<Span> = std::iter::once(hyponym_head)
        .chain(hyponym_head.conjuncts())
        .map(expand_to_noun_compound)
        .filter(|span| !span.overlaps(&hypernym))
        .collect();
    hyponyms.sort();
    hyponyms.dedup();

    hyponyms
        .into_iter()
        .map(|hyponym| HearstMatch::new(label, hypernym, hyponym))
        .collect()
}
