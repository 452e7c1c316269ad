use serde::{Deserialize, Serialize};

use crate::engine::constants::{FIELD_DEPENDENCIES, FIELD_WORD};

/// Represents a complete document with metadata and sentences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub id: String,
    #[serde(default)]
    pub metadata: Vec<String>,
    pub sentences: Vec<Sentence>,
}

/// Represents a single sentence with its fields
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sentence {
    #[serde(rename = "numTokens")]
    pub num_tokens: u32,
    pub fields: Vec<Field>,
}

/// Represents a field in a sentence
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "$type")]
pub enum Field {
    #[serde(rename = "ai.lum.odinson.TokensField")]
    TokensField {
        name: String,
        tokens: Vec<String>,
    },
    #[serde(rename = "ai.lum.odinson.GraphField")]
    GraphField {
        name: String,
        edges: Vec<(u32, u32, String)>, // (head, dependent, relation)
        roots: Vec<u32>,
    },
}

impl Field {
    pub fn name(&self) -> &str {
        match self {
            Field::TokensField { name, .. } => name,
            Field::GraphField { name, .. } => name,
        }
    }
}

/// Borrowed view of a dependency graph field
#[derive(Debug, Clone, Copy)]
pub struct GraphField<'a> {
    pub edges: &'a [(u32, u32, String)],
    pub roots: &'a [u32],
}

impl Document {
    pub fn new(id: impl Into<String>, sentences: Vec<Sentence>) -> Self {
        Self {
            id: id.into(),
            metadata: Vec::new(),
            sentences,
        }
    }

    /// Get a specific field by name from a sentence
    pub fn get_field(&self, sentence_idx: usize, field_name: &str) -> Option<&Field> {
        self.sentences.get(sentence_idx)?.field(field_name)
    }

    /// Get tokens from a specific field
    pub fn get_tokens(&self, sentence_idx: usize, field_name: &str) -> Option<&[String]> {
        self.sentences.get(sentence_idx)?.tokens(field_name)
    }

    /// Get dependencies from a sentence
    pub fn get_dependencies(&self, sentence_idx: usize) -> Option<GraphField<'_>> {
        self.sentences.get(sentence_idx)?.dependencies()
    }

    /// Get sentence length
    pub fn sentence_length(&self, sentence_idx: usize) -> Option<u32> {
        self.sentences.get(sentence_idx).map(|s| s.num_tokens)
    }

    /// Total number of tokens across all sentences
    pub fn num_tokens(&self) -> usize {
        self.sentences.iter().map(|s| s.num_tokens as usize).sum()
    }
}

impl Sentence {
    /// Start a sentence from its surface words
    pub fn from_words<S: Into<String>>(words: impl IntoIterator<Item = S>) -> Self {
        let tokens: Vec<String> = words.into_iter().map(Into::into).collect();
        Self {
            num_tokens: tokens.len() as u32,
            fields: vec![Field::TokensField {
                name: FIELD_WORD.to_string(),
                tokens,
            }],
        }
    }

    /// Add (or replace) a token field
    pub fn with_tokens<S: Into<String>>(mut self, name: &str, tokens: impl IntoIterator<Item = S>) -> Self {
        let tokens: Vec<String> = tokens.into_iter().map(Into::into).collect();
        self.fields.retain(|field| field.name() != name);
        self.fields.push(Field::TokensField {
            name: name.to_string(),
            tokens,
        });
        self
    }

    /// Add (or replace) the dependency graph field
    pub fn with_dependencies(mut self, edges: Vec<(u32, u32, String)>, roots: Vec<u32>) -> Self {
        self.fields.retain(|field| field.name() != FIELD_DEPENDENCIES);
        self.fields.push(Field::GraphField {
            name: FIELD_DEPENDENCIES.to_string(),
            edges,
            roots,
        });
        self
    }

    pub fn field(&self, field_name: &str) -> Option<&Field> {
        self.fields.iter().find(|field| field.name() == field_name)
    }

    pub fn tokens(&self, field_name: &str) -> Option<&[String]> {
        match self.field(field_name)? {
            Field::TokensField { tokens, .. } => Some(tokens),
            _ => None,
        }
    }

    pub fn dependencies(&self) -> Option<GraphField<'_>> {
        match self.field(FIELD_DEPENDENCIES)? {
            Field::GraphField { edges, roots, .. } => Some(GraphField { edges, roots }),
            _ => None,
        }
    }
}

impl<'a> GraphField<'a> {
    /// Get incoming edges for a token
    pub fn incoming_edges(&self, token_idx: u32) -> Vec<(u32, &'a str)> {
        self.edges.iter()
            .filter(|(_, to, _)| *to == token_idx)
            .map(|(from, _, rel)| (*from, rel.as_str()))
            .collect()
    }

    /// Get outgoing edges for a token
    pub fn outgoing_edges(&self, token_idx: u32) -> Vec<(u32, &'a str)> {
        self.edges.iter()
            .filter(|(from, _, _)| *from == token_idx)
            .map(|(_, to, rel)| (*to, rel.as_str()))
            .collect()
    }
}
