//! Noun-compound heads and noun-phrase boundaries from the dependency tree

use crate::data::annotated::Token;
use crate::engine::constants::COMPOUND_LABEL;
use crate::types::Span;

/// Climb `compound` relations while the head is nominal.
///
/// "potassium" in "The potassium channel" resolves to "channel". Adjacent
/// nouns that are not linked by `compound` are left alone. The climb stops
/// after one step per sentence token, so a cyclic parse cannot loop.
pub fn find_noun_compound_head<'d>(token: Token<'d>) -> Token<'d> {
    let limit = token.sentence().span().length();
    let mut current = token;
    for _ in 0..limit {
        if current.dep() != COMPOUND_LABEL {
            break;
        }
        let head = current.head();
        if head == current || !head.is_nominal() {
            break;
        }
        current = head;
    }
    current
}

/// Span of the noun phrase around `token`.
///
/// Grows right, then left, over neighbours attached to the current span
/// (their head is in the span, or they head a token in the span) that are
/// nominal or `compound` modifiers. Never leaves the sentence.
pub fn expand_to_noun_compound(token: Token<'_>) -> Span {
    let doc = token.doc();
    let sentence = token.sentence().span();
    let mut span = Span::token(token.i());

    while span.end < sentence.end && joins(doc.token(span.end), span) {
        span.end += 1;
    }
    while span.start > sentence.start && joins(doc.token(span.start - 1), span) {
        span.start -= 1;
    }
    span
}

fn joins(candidate: Token<'_>, span: Span) -> bool {
    if !candidate.is_nominal() && candidate.dep() != COMPOUND_LABEL {
        return false;
    }
    let doc = candidate.doc();
    span.contains_index(candidate.head().i())
        || span.range().any(|i| doc.token(i).head() == candidate)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::annotated::AnnotatedDocument;
    use crate::data::document::{Document, Sentence};

    fn parsed(words: &[&str], tags: &[&str], heads: &[(u32, &str)]) -> AnnotatedDocument {
        let mut edges = Vec::new();
        let mut roots = Vec::new();
        for (i, (head, dep)) in heads.iter().enumerate() {
            if *dep == "ROOT" {
                roots.push(i as u32);
            } else {
                edges.push((*head, i as u32, dep.to_string()));
            }
        }
        let sentence = Sentence::from_words(words.iter().copied())
            .with_tokens("tag", tags.iter().copied())
            .with_dependencies(edges, roots);
        AnnotatedDocument::from_document(&Document::new("test", vec![sentence]))
    }

    fn potassium() -> AnnotatedDocument {
        parsed(
            &["The", "potassium", "channel", "is", "good", "."],
            &["DT", "NN", "NN", "VBZ", "JJ", "."],
            &[(2, "det"), (2, "compound"), (3, "nsubj"), (3, "ROOT"), (3, "acomp"), (3, "punct")],
        )
    }

    fn planting() -> AnnotatedDocument {
        parsed(
            &["Planting", "of", "large", "plants", "."],
            &["NN", "IN", "JJ", "NNS", "."],
            &[(0, "ROOT"), (0, "prep"), (3, "amod"), (1, "pobj"), (0, "punct")],
        )
    }

    fn habitats(first_tag: &str) -> AnnotatedDocument {
        parsed(
            &["Keystone", "plant", "habitats", "are", "good", "."],
            &[first_tag, "NN", "NNS", "VBP", "JJ", "."],
            &[(2, "compound"), (2, "compound"), (3, "nsubj"), (3, "ROOT"), (3, "acomp"), (3, "punct")],
        )
    }

    #[test]
    fn test_compound_resolves_to_head() {
        let doc = potassium();
        assert_eq!(find_noun_compound_head(doc.token(1)).i(), 2);
        assert_eq!(find_noun_compound_head(doc.token(2)).i(), 2);
        assert_eq!(find_noun_compound_head(doc.token(3)).i(), 3);
    }

    #[test]
    fn test_unlinked_nouns_stay_separate() {
        let doc = planting();
        assert_eq!(find_noun_compound_head(doc.token(3)).i(), 3);
        assert_eq!(find_noun_compound_head(doc.token(0)).i(), 0);
    }

    #[test]
    fn test_compound_on_non_nominal_head_stops() {
        let doc = parsed(
            &["test", "run", "."],
            &["NN", "VB", "."],
            &[(1, "compound"), (1, "ROOT"), (1, "punct")],
        );
        assert_eq!(find_noun_compound_head(doc.token(0)).i(), 0);
    }

    #[test]
    fn test_expand_keystone_plant_habitats() {
        for tag in ["NN", "JJ"] {
            let doc = habitats(tag);
            for i in [1, 2] {
                let span = expand_to_noun_compound(doc.token(i));
                assert_eq!(span.end, 3, "tag {} token {}", tag, i);
                assert!(span.start <= 1, "tag {} token {}", tag, i);
            }
        }
    }

    #[test]
    fn test_expand_stops_at_other_constituents() {
        let doc = potassium();
        assert_eq!(expand_to_noun_compound(doc.token(2)), Span::new(1, 3));

        let doc = planting();
        assert_eq!(expand_to_noun_compound(doc.token(3)), Span::new(3, 4));
        assert_eq!(expand_to_noun_compound(doc.token(0)), Span::new(0, 1));
    }

    #[test]
    fn test_expand_stays_inside_sentence() {
        let first = Sentence::from_words(["Dogs"])
            .with_tokens("tag", ["NNS"])
            .with_dependencies(Vec::new(), vec![0]);
        let second = Sentence::from_words(["Cats"])
            .with_tokens("tag", ["NNS"])
            .with_dependencies(Vec::new(), vec![0]);
        let doc = AnnotatedDocument::from_document(&Document::new("two", vec![first, second]));
        assert_eq!(expand_to_noun_compound(doc.token(1)), Span::new(1, 2));
    }
}
