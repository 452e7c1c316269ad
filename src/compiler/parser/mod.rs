use pest::Parser;

use crate::compiler::ast::Pattern;
use crate::compiler::pest_parser::{build_ast, PatternGrammar, Rule};
use crate::error::{HearstError, Result};

/// Parser for the token-pattern language
#[derive(Debug, Clone, Copy, Default)]
pub struct QueryParser;

impl QueryParser {
    pub fn new() -> Self {
        Self
    }

    pub fn parse_query(&self, query: &str) -> Result<Pattern> {
        let mut pairs = PatternGrammar::parse(Rule::query, query).map_err(|e| {
            HearstError::PatternParse {
                query: query.to_string(),
                message: e.to_string(),
            }
        })?;

        let first_pair = pairs.next().ok_or_else(|| HearstError::PatternParse {
            query: query.to_string(),
            message: "empty parse result".to_string(),
        })?;

        build_ast(first_pair)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compiler::ast::{Constraint, Matcher, TokenField};

    fn parse(query: &str) -> Pattern {
        QueryParser::new()
            .parse_query(query)
            .unwrap_or_else(|e| panic!("failed to parse {:?}: {}", query, e))
    }

    // ==================== Valid Query Tests ====================

    #[test]
    fn test_parse_simple_field_constraint() {
        match parse("[lemma=such]") {
            Pattern::Constraint(Constraint::Field { field, matcher: Matcher::String(value) }) => {
                assert_eq!(field, TokenField::Lemma);
                assert_eq!(value, "such");
            }
            other => panic!("Expected Field constraint, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_wildcard_constraint() {
        assert!(matches!(parse("[]"), Pattern::Constraint(Constraint::Wildcard)));
    }

    #[test]
    fn test_parse_regex_and_quoted_values() {
        match parse(r#"[pos=/NOUN|PROPN/ & !word=","]"#) {
            Pattern::Constraint(Constraint::Conjunctive(parts)) => {
                assert_eq!(parts.len(), 2);
                match &parts[0] {
                    Constraint::Field { matcher, .. } => {
                        assert!(matcher.matches("PROPN"));
                        assert!(!matcher.matches("VERB"));
                    }
                    other => panic!("Expected regex field, got {:?}", other),
                }
                match &parts[1] {
                    Constraint::Negated(inner) => match inner.as_ref() {
                        Constraint::Field { matcher: Matcher::String(value), .. } => assert_eq!(value, ","),
                        other => panic!("Expected quoted field, got {:?}", other),
                    },
                    other => panic!("Expected negation, got {:?}", other),
                }
            }
            other => panic!("Expected conjunction, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_constraint_disjunction_with_parens() {
        match parse("[(lemma=and | lemma=or) & pos=CCONJ]") {
            Pattern::Constraint(Constraint::Conjunctive(parts)) => {
                assert!(matches!(parts[0], Constraint::Disjunctive(_)));
            }
            other => panic!("Expected conjunction, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_named_capture_sequence() {
        let pattern = parse("(?<hypernym> [pos=NOUN]) [lemma=such] [lemma=as] (?<hyponym> [pos=NOUN])");
        match &pattern {
            Pattern::Concatenated(steps) => assert_eq!(steps.len(), 4),
            other => panic!("Expected sequence, got {:?}", other),
        }
        assert_eq!(pattern.capture_names(), vec!["hypernym", "hyponym"]);
    }

    #[test]
    fn test_parse_quantifiers() {
        for (query, expected_min, expected_max) in [
            ("[pos=PUNCT]?", 0, Some(1)),
            ("[pos=ADJ]*", 0, None),
            ("[pos=NOUN]+", 1, None),
            ("[]{2}", 2, Some(2)),
            ("[]{1,}", 1, None),
            ("[]{0,3}", 0, Some(3)),
        ] {
            match parse(query) {
                Pattern::Repetition { min, max, .. } => {
                    assert_eq!(min, expected_min, "{}", query);
                    assert_eq!(max, expected_max, "{}", query);
                }
                other => panic!("Expected repetition for {}, got {:?}", query, other),
            }
        }
    }

    #[test]
    fn test_parse_group_alternation() {
        match parse("[lemma=such] ([lemma=as] | [lemma=like])") {
            Pattern::Concatenated(steps) => assert!(matches!(steps[1], Pattern::Disjunctive(_))),
            other => panic!("Expected sequence, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_bare_value_with_dots() {
        match parse("[lower=e.g.]") {
            Pattern::Constraint(Constraint::Field { matcher: Matcher::String(value), .. }) => {
                assert_eq!(value, "e.g.");
            }
            other => panic!("Expected Field constraint, got {:?}", other),
        }
    }

    // ==================== Invalid Query Tests ====================

    #[test]
    fn test_parse_errors_are_reported() {
        let parser = QueryParser::new();
        assert!(matches!(parser.parse_query(""), Err(HearstError::PatternParse { .. })));
        assert!(matches!(parser.parse_query("[lemma=such"), Err(HearstError::PatternParse { .. })));
        assert!(matches!(parser.parse_query("[colour=red]"), Err(HearstError::UnknownField(_))));
        assert!(matches!(parser.parse_query("[word=/(/]"), Err(HearstError::InvalidRegex { .. })));
        assert!(matches!(parser.parse_query("[]{3,1}"), Err(HearstError::PatternParse { .. })));
    }
}
