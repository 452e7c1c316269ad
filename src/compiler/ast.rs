use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use regex::Regex;

use crate::engine::constants::*;
use crate::error::HearstError;

/// Matcher for string or regex values
#[derive(Debug, Clone)]
pub enum Matcher {
    String(String),
    /// Regex matched against the whole value
    Regex { pattern: String, regex: Arc<Regex> },
}

impl Matcher {
    /// Create a string matcher
    pub fn string(s: impl Into<String>) -> Self {
        Matcher::String(s.into())
    }

    /// Create a regex matcher. The pattern is anchored at both ends.
    pub fn try_regex(pattern: impl Into<String>) -> Result<Self, regex::Error> {
        let pattern = pattern.into();
        let regex = Regex::new(&format!("^(?:{})$", pattern))?;
        Ok(Matcher::Regex { pattern, regex: Arc::new(regex) })
    }

    /// Check if a value matches this matcher
    pub fn matches(&self, value: &str) -> bool {
        match self {
            Matcher::String(s) => value == s,
            Matcher::Regex { regex, .. } => regex.is_match(value),
        }
    }

    /// Get the pattern string (for both String and Regex variants)
    pub fn pattern_str(&self) -> &str {
        match self {
            Matcher::String(s) => s,
            Matcher::Regex { pattern, .. } => pattern,
        }
    }
}

/// Token attribute a constraint can test
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenField {
    Word,
    Lower,
    Lemma,
    Pos,
    Tag,
    Dep,
}

impl FromStr for TokenField {
    type Err = HearstError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name {
            FIELD_WORD => Ok(TokenField::Word),
            FIELD_LOWER => Ok(TokenField::Lower),
            FIELD_LEMMA => Ok(TokenField::Lemma),
            FIELD_POS => Ok(TokenField::Pos),
            FIELD_TAG => Ok(TokenField::Tag),
            FIELD_DEP => Ok(TokenField::Dep),
            other => Err(HearstError::UnknownField(other.to_string())),
        }
    }
}

impl fmt::Display for TokenField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TokenField::Word => FIELD_WORD,
            TokenField::Lower => FIELD_LOWER,
            TokenField::Lemma => FIELD_LEMMA,
            TokenField::Pos => FIELD_POS,
            TokenField::Tag => FIELD_TAG,
            TokenField::Dep => FIELD_DEP,
        };
        f.write_str(name)
    }
}

/// Anything that can answer token attribute lookups
pub trait TokenFields {
    fn field(&self, field: TokenField) -> &str;
}

/// Constraints for token matching
#[derive(Debug, Clone)]
pub enum Constraint {
    Wildcard,
    Field { field: TokenField, matcher: Matcher },
    Negated(Box<Constraint>),
    Conjunctive(Vec<Constraint>),
    Disjunctive(Vec<Constraint>),
}

impl Constraint {
    /// Check if a token matches this constraint
    pub fn matches<T: TokenFields + ?Sized>(&self, token: &T) -> bool {
        match self {
            Constraint::Wildcard => true,
            Constraint::Field { field, matcher } => matcher.matches(token.field(*field)),
            Constraint::Negated(inner) => !inner.matches(token),
            Constraint::Conjunctive(constraints) => constraints.iter().all(|c| c.matches(token)),
            Constraint::Disjunctive(constraints) => constraints.iter().any(|c| c.matches(token)),
        }
    }
}

/// Token-sequence patterns
#[derive(Debug, Clone)]
pub enum Pattern {
    Constraint(Constraint),
    Disjunctive(Vec<Pattern>),
    Concatenated(Vec<Pattern>),
    NamedCapture { name: String, pattern: Box<Pattern> },
    /// Greedy repetition of `pattern`, between `min` and `max` times
    Repetition { pattern: Box<Pattern>, min: usize, max: Option<usize> },
}

impl Pattern {
    /// Names of every capture in the pattern, in left-to-right order
    pub fn capture_names(&self) -> Vec<&str> {
        let mut names = Vec::new();
        self.collect_capture_names(&mut names);
        names
    }

    fn collect_capture_names<'a>(&'a self, names: &mut Vec<&'a str>) {
        match self {
            Pattern::Constraint(_) => {}
            Pattern::Disjunctive(patterns) | Pattern::Concatenated(patterns) => {
                for pattern in patterns {
                    pattern.collect_capture_names(names);
                }
            }
            Pattern::NamedCapture { name, pattern } => {
                names.push(name);
                pattern.collect_capture_names(names);
            }
            Pattern::Repetition { pattern, .. } => pattern.collect_capture_names(names),
        }
    }
}
