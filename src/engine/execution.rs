//! Token-sequence pattern execution
//!
//! Patterns are matched with a backtracking matcher written in
//! continuation-passing style: every pattern node receives the position it
//! starts at and a continuation that decides whether the rest of the match
//! succeeds from the position the node ended at. Repetitions try the
//! longest run first, so the first complete match found is the greedy one.

use crate::compiler::ast::{Pattern, TokenFields};
use crate::data::annotated::{AnnotatedDocument, Token};
use crate::types::{NamedCapture, Span, SpanWithCaptures};

type Continuation<'k> = dyn FnMut(usize, &mut Vec<NamedCapture>) -> bool + 'k;

/// Executes one compiled [`Pattern`] over token sequences
#[derive(Debug, Clone)]
pub struct TokenPatternMatcher {
    pattern: Pattern,
}

impl TokenPatternMatcher {
    pub fn new(pattern: Pattern) -> Self {
        Self { pattern }
    }

    pub fn pattern(&self) -> &Pattern {
        &self.pattern
    }

    /// Greedy match starting exactly at `start`. Empty matches are rejected.
    /// Spans are relative to `tokens`.
    pub fn match_at<T: TokenFields>(&self, tokens: &[T], start: usize) -> Option<SpanWithCaptures> {
        let mut captures = Vec::new();
        let mut end = start;
        let matched = match_node(tokens, &self.pattern, start, &mut captures, &mut |e: usize, _: &mut Vec<NamedCapture>| {
            if e == start {
                return false;
            }
            end = e;
            true
        });
        if !matched {
            return None;
        }
        captures.sort_by_key(|c| c.span.start);
        Some(SpanWithCaptures::with_captures(Span::new(start, end), captures))
    }

    /// At most one match per start position, in start order
    pub fn find_all<T: TokenFields>(&self, tokens: &[T]) -> Vec<SpanWithCaptures> {
        (0..tokens.len())
            .filter_map(|start| self.match_at(tokens, start))
            .collect()
    }

    /// Match within one sentence of `doc`; spans are document-level
    pub fn find_in_sentence(&self, doc: &AnnotatedDocument, sentence: Span) -> Vec<SpanWithCaptures> {
        let tokens: Vec<Token<'_>> = sentence.range().map(|i| doc.token(i)).collect();
        let offset = sentence.start;
        self.find_all(&tokens)
            .into_iter()
            .map(|m| {
                let captures = m
                    .captures
                    .into_iter()
                    .map(|c| NamedCapture::new(c.name, shift(c.span, offset)))
                    .collect();
                SpanWithCaptures::with_captures(shift(m.span, offset), captures)
            })
            .collect()
    }
}

fn shift(span: Span, offset: usize) -> Span {
    Span::new(span.start + offset, span.end + offset)
}

fn match_node<T: TokenFields>(
    tokens: &[T],
    pattern: &Pattern,
    pos: usize,
    captures: &mut Vec<NamedCapture>,
    k: &mut Continuation<'_>,
) -> bool {
    match pattern {
        Pattern::Constraint(constraint) => {
            pos < tokens.len() && constraint.matches(&tokens[pos]) && k(pos + 1, captures)
        }
        Pattern::Disjunctive(branches) => branches
            .iter()
            .any(|branch| match_node(tokens, branch, pos, captures, &mut *k)),
        Pattern::Concatenated(steps) => match_sequence(tokens, steps, pos, captures, k),
        Pattern::NamedCapture { name, pattern } => {
            match_node(tokens, pattern, pos, captures, &mut |end: usize, captures: &mut Vec<NamedCapture>| {
                captures.push(NamedCapture::new(name.clone(), Span::new(pos, end)));
                if k(end, captures) {
                    true
                } else {
                    captures.pop();
                    false
                }
            })
        }
        Pattern::Repetition { pattern, min, max } => {
            match_repetition(tokens, pattern, *min, *max, 0, pos, captures, k)
        }
    }
}

fn match_sequence<T: TokenFields>(
    tokens: &[T],
    steps: &[Pattern],
    pos: usize,
    captures: &mut Vec<NamedCapture>,
    k: &mut Continuation<'_>,
) -> bool {
    match steps.split_first() {
        None => k(pos, captures),
        Some((first, rest)) => match_node(tokens, first, pos, captures, &mut |next: usize, captures: &mut Vec<NamedCapture>| {
            match_sequence(tokens, rest, next, captures, &mut *k)
        }),
    }
}

#[allow(clippy::too_many_arguments)]
fn match_repetition<T: TokenFields>(
    tokens: &[T],
    pattern: &Pattern,
    min: usize,
    max: Option<usize>,
    count: usize,
    pos: usize,
    captures: &mut Vec<NamedCapture>,
    k: &mut Continuation<'_>,
) -> bool {
    if max.map_or(true, |max| count < max) {
        let matched = match_node(tokens, pattern, pos, captures, &mut |next: usize, captures: &mut Vec<NamedCapture>| {
            // zero-width iterations past the minimum would never terminate
            if next == pos && count >= min {
                return false;
            }
            match_repetition(tokens, pattern, min, max, count + 1, next, captures, &mut *k)
        });
        if matched {
            return true;
        }
    }
    count >= min && k(pos, captures)
}
