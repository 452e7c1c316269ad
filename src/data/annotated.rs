//! Flattened, read-only view of a parsed [`Document`].
//!
//! Tokens are addressed by their position in the whole document, the way
//! spans are reported in results. Each sentence keeps its own dependency
//! graph over sentence-local indices. Sentences whose annotation is
//! inconsistent are kept but flagged, and the detector skips them.

use std::fmt;

use crate::compiler::ast::{Matcher, TokenField, TokenFields};
use crate::data::document::{Document, Sentence};
use crate::data::pos::universal_pos;
use crate::digraph::{DirectedGraph, GraphTraversal, Traversal};
use crate::engine::constants::*;
use crate::error::{HearstError, Result};
use crate::types::{HearstMatch, Span};

#[derive(Debug, Clone)]
struct TokenData {
    word: String,
    lower: String,
    lemma: String,
    pos: String,
    tag: String,
    dep: String,
    /// Document-level index of the head; a root is its own head
    head: usize,
    sentence: usize,
}

/// One sentence of an [`AnnotatedDocument`]
#[derive(Debug, Clone)]
pub struct AnnotatedSentence {
    span: Span,
    graph: DirectedGraph,
    problem: Option<String>,
}

impl AnnotatedSentence {
    /// Document-level token range of the sentence
    pub fn span(&self) -> Span {
        self.span
    }

    /// Dependency graph over sentence-local token indices
    pub fn graph(&self) -> &DirectedGraph {
        &self.graph
    }

    pub fn is_well_formed(&self) -> bool {
        self.problem.is_none()
    }

    /// Why the sentence was flagged, if it was
    pub fn problem(&self) -> Option<&str> {
        self.problem.as_deref()
    }
}

/// Parsed document plus the typed `hearst_patterns` result slot
#[derive(Debug, Clone)]
pub struct AnnotatedDocument {
    id: String,
    tokens: Vec<TokenData>,
    sentences: Vec<AnnotatedSentence>,
    hearst_patterns: Option<Vec<HearstMatch>>,
}

impl AnnotatedDocument {
    pub fn from_document(doc: &Document) -> Self {
        let mut tokens = Vec::new();
        let mut sentences = Vec::with_capacity(doc.sentences.len());

        for (sentence_idx, sentence) in doc.sentences.iter().enumerate() {
            let offset = tokens.len();
            let (sentence_tokens, graph, problem) = annotate_sentence(sentence, sentence_idx, offset);
            if let Some(problem) = &problem {
                let err = HearstError::MalformedSentence { sentence: sentence_idx, message: problem.clone() };
                log::warn!("Document '{}': {}; skipping it for pattern matching", doc.id, err);
            }
            tokens.extend(sentence_tokens);
            sentences.push(AnnotatedSentence {
                span: Span::new(offset, tokens.len()),
                graph,
                problem,
            });
        }

        Self {
            id: doc.id.clone(),
            tokens,
            sentences,
            hearst_patterns: None,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Token at document position `i`.
    ///
    /// # Panics
    /// Panics if `i` is out of range, like slice indexing.
    pub fn token(&self, i: usize) -> Token<'_> {
        assert!(i < self.tokens.len(), "token index {} out of range for document of {} tokens", i, self.tokens.len());
        Token { doc: self, i }
    }

    pub fn get(&self, i: usize) -> Option<Token<'_>> {
        (i < self.tokens.len()).then_some(Token { doc: self, i })
    }

    pub fn tokens(&self) -> impl Iterator<Item = Token<'_>> + '_ {
        (0..self.tokens.len()).map(move |i| Token { doc: self, i })
    }

    pub fn sentences(&self) -> &[AnnotatedSentence] {
        &self.sentences
    }

    /// Fails on the first sentence flagged as malformed
    pub fn check(&self) -> Result<()> {
        for (idx, sentence) in self.sentences.iter().enumerate() {
            if let Some(problem) = &sentence.problem {
                return Err(HearstError::MalformedSentence { sentence: idx, message: problem.clone() });
            }
        }
        Ok(())
    }

    /// Span `[start, end)` over this document
    pub fn span(&self, start: usize, end: usize) -> Span {
        debug_assert!(end <= self.tokens.len());
        Span::new(start, end)
    }

    /// Space-joined words of a span
    pub fn text(&self, span: Span) -> String {
        let end = span.end.min(self.tokens.len());
        let start = span.start.min(end);
        self.tokens[start..end]
            .iter()
            .map(|token| token.word.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Token handles of a span, clipped to the document
    pub fn span_tokens(&self, span: Span) -> impl Iterator<Item = Token<'_>> + '_ {
        let end = span.end.min(self.tokens.len());
        (span.start.min(end)..end).map(move |i| Token { doc: self, i })
    }

    /// Matches attached by the last processing pass; empty until processed
    pub fn hearst_patterns(&self) -> &[HearstMatch] {
        self.hearst_patterns.as_deref().unwrap_or(&[])
    }

    pub fn is_processed(&self) -> bool {
        self.hearst_patterns.is_some()
    }

    pub(crate) fn set_hearst_patterns(&mut self, matches: Vec<HearstMatch>) {
        self.hearst_patterns = Some(matches);
    }

    fn sentence_of(&self, i: usize) -> &AnnotatedSentence {
        &self.sentences[self.tokens[i].sentence]
    }
}

impl From<&Document> for AnnotatedDocument {
    fn from(doc: &Document) -> Self {
        AnnotatedDocument::from_document(doc)
    }
}

fn annotate_sentence(
    sentence: &Sentence,
    sentence_idx: usize,
    offset: usize,
) -> (Vec<TokenData>, DirectedGraph, Option<String>) {
    let mut problems: Vec<String> = Vec::new();

    // token count comes from the fields themselves; numTokens is only checked
    let words = sentence.tokens(FIELD_WORD);
    let n = match words {
        Some(words) => words.len(),
        None => {
            problems.push("missing 'word' field".to_string());
            sentence
                .fields
                .iter()
                .filter_map(|field| sentence.tokens(field.name()))
                .map(<[String]>::len)
                .max()
                .unwrap_or(0)
        }
    };
    if sentence.num_tokens as usize != n {
        problems.push(format!("numTokens is {} but the sentence has {} tokens", sentence.num_tokens, n));
    }

    let mut column = |name: &str| -> Option<Vec<String>> {
        let values = sentence.tokens(name)?;
        if values.len() != n {
            problems.push(format!("field '{}' has {} tokens but the sentence has {}", name, values.len(), n));
        }
        Some((0..n).map(|i| values.get(i).cloned().unwrap_or_default()).collect())
    };

    let words = column(FIELD_WORD);
    let lemmas = column(FIELD_LEMMA);
    let pos = column(FIELD_POS);
    let tags = column(FIELD_TAG);
    let words = words.unwrap_or_else(|| vec![String::new(); n]);
    let tags = tags.unwrap_or_else(|| vec![String::new(); n]);

    let mut tokens: Vec<TokenData> = (0..n)
        .map(|i| {
            let lower = words[i].to_lowercase();
            TokenData {
                lemma: lemmas.as_ref().map(|l| l[i].clone()).unwrap_or_else(|| lower.clone()),
                pos: pos.as_ref()
                    .map(|p| p[i].clone())
                    .unwrap_or_else(|| universal_pos(&tags[i]).to_string()),
                tag: tags[i].clone(),
                word: words[i].clone(),
                lower,
                dep: String::new(),
                head: offset + i,
                sentence: sentence_idx,
            }
        })
        .collect();

    let mut graph = DirectedGraph::with_nodes(n);
    match sentence.dependencies() {
        None => problems.push("missing dependency graph".to_string()),
        Some(deps) => {
            let mut in_range = true;
            for (head, dependent, label) in deps.edges {
                let (head, dependent) = (*head as usize, *dependent as usize);
                if head >= n || dependent >= n {
                    problems.push(format!("edge {}->{}:{} points outside the sentence", head, dependent, label));
                    in_range = false;
                    continue;
                }
                graph.add_edge(head, dependent, label);
            }

            if in_range {
                if let Err(problem) = graph.check_tree() {
                    problems.push(problem);
                }
            }
            for (i, token) in tokens.iter_mut().enumerate() {
                match graph.head(i) {
                    Some((head, label)) => {
                        token.head = offset + head;
                        token.dep = label.to_string();
                    }
                    None => token.dep = ROOT_LABEL.to_string(),
                }
            }
        }
    }

    let problem = if problems.is_empty() { None } else { Some(problems.join("; ")) };
    (tokens, graph, problem)
}

/// Cheap handle to one token of an [`AnnotatedDocument`].
///
/// Two handles are equal when they point at the same position of the same
/// document.
#[derive(Clone, Copy)]
pub struct Token<'d> {
    doc: &'d AnnotatedDocument,
    i: usize,
}

impl<'d> Token<'d> {
    /// Document-level index
    pub fn i(&self) -> usize {
        self.i
    }

    pub fn doc(&self) -> &'d AnnotatedDocument {
        self.doc
    }

    fn data(&self) -> &'d TokenData {
        &self.doc.tokens[self.i]
    }

    pub fn text(&self) -> &'d str {
        &self.data().word
    }

    pub fn lower(&self) -> &'d str {
        &self.data().lower
    }

    pub fn lemma(&self) -> &'d str {
        &self.data().lemma
    }

    /// Universal POS tag
    pub fn pos(&self) -> &'d str {
        &self.data().pos
    }

    /// Fine-grained (PTB) tag
    pub fn tag(&self) -> &'d str {
        &self.data().tag
    }

    /// Dependency label towards the head (`ROOT` for roots)
    pub fn dep(&self) -> &'d str {
        &self.data().dep
    }

    /// Syntactic head; a root is its own head
    pub fn head(&self) -> Token<'d> {
        Token { doc: self.doc, i: self.data().head }
    }

    pub fn sentence_index(&self) -> usize {
        self.data().sentence
    }

    pub fn sentence(&self) -> &'d AnnotatedSentence {
        self.doc.sentence_of(self.i)
    }

    pub fn is_nominal(&self) -> bool {
        is_nominal(self.pos())
    }

    /// Tokens coordinated with this one through `conj` relations, in
    /// document order, excluding the token itself.
    pub fn conjuncts(&self) -> Vec<Token<'d>> {
        let sentence = self.sentence();
        let offset = sentence.span.start;
        let conj = || Matcher::string(CONJ_LABEL);
        let traversal = Traversal::Concatenated(vec![
            Traversal::KleeneStar(Box::new(Traversal::Incoming(conj()))),
            Traversal::KleeneStar(Box::new(Traversal::Outgoing(conj()))),
        ]);

        GraphTraversal::new(&sentence.graph)
            .execute(&traversal, &[self.i - offset])
            .into_nodes()
            .into_iter()
            .map(|local| local + offset)
            .filter(|&i| i != self.i)
            .map(|i| Token { doc: self.doc, i })
            .collect()
    }
}

impl<'d> TokenFields for Token<'d> {
    fn field(&self, field: TokenField) -> &str {
        match field {
            TokenField::Word => self.text(),
            TokenField::Lower => self.lower(),
            TokenField::Lemma => self.lemma(),
            TokenField::Pos => self.pos(),
            TokenField::Tag => self.tag(),
            TokenField::Dep => self.dep(),
        }
    }
}

impl<'d> PartialEq for Token<'d> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.doc, other.doc) && self.i == other.i
    }
}

impl<'d> Eq for Token<'d> {}

impl<'d> fmt::Debug for Token<'d> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Token({}: {:?})", self.i, self.text())
    }
}

impl<'d> fmt::Display for Token<'d> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text())
    }
}
