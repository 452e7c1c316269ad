use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use anyhow::{anyhow, Context, Result};
use flate2::read::GzDecoder;

use crate::data::document::{Document, Field, Sentence};
use crate::engine::constants::*;

/// Input format of a document file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    /// Odinson JSON: a single document, an array of documents, or JSONL
    Json,
    /// CoNLL-U, one document per file
    Conllu,
}

impl InputFormat {
    /// Guess the format from a file name, looking through a `.gz` suffix
    pub fn from_path(path: &Path) -> Self {
        let name = path.file_name().and_then(|n| n.to_str()).unwrap_or("");
        let name = name.strip_suffix(".gz").unwrap_or(name);
        if name.ends_with(".conllu") || name.ends_with(".conll") {
            InputFormat::Conllu
        } else {
            InputFormat::Json
        }
    }
}

/// Parser for Odinson JSON (optionally gzipped) and CoNLL-U documents
#[derive(Debug, Clone, Copy, Default)]
pub struct DocumentParser;

impl DocumentParser {
    pub fn new() -> Self {
        Self
    }

    /// Validate document structure.
    /// Edges outside a sentence are errors; token count mismatches are warnings.
    pub fn validate_document(&self, doc: &Document) -> Result<()> {
        for (sentence_idx, sentence) in doc.sentences.iter().enumerate() {
            let token_count = sentence.num_tokens as usize;

            for field in &sentence.fields {
                match field {
                    Field::TokensField { name, tokens } => {
                        if tokens.len() != token_count {
                            log::warn!(
                                "Document '{}' sentence {}: field '{}' has {} tokens but numTokens is {}",
                                doc.id, sentence_idx, name, tokens.len(), token_count
                            );
                        }
                    }
                    Field::GraphField { edges, .. } => {
                        for (from, to, rel) in edges {
                            if *from as usize >= token_count || *to as usize >= token_count {
                                return Err(anyhow!(
                                    "Document '{}' sentence {}: edge {}->{}:{} is outside the sentence (token count: {})",
                                    doc.id, sentence_idx, from, to, rel, token_count
                                ));
                            }
                        }
                    }
                }
            }
        }
        Ok(())
    }

    /// Parse a file, detecting gzip by its magic bytes
    pub fn parse_file<P: AsRef<Path>>(&self, file_path: P, format: InputFormat) -> Result<Vec<Document>> {
        let path = file_path.as_ref();
        let mut bytes = Vec::new();
        File::open(path)
            .and_then(|file| BufReader::new(file).read_to_end(&mut bytes))
            .with_context(|| format!("Failed to read {}", path.display()))?;

        let content = if bytes.starts_with(&[0x1f, 0x8b]) {
            let mut decoded = String::new();
            GzDecoder::new(bytes.as_slice())
                .read_to_string(&mut decoded)
                .with_context(|| format!("Failed to decompress {}", path.display()))?;
            decoded
        } else {
            String::from_utf8(bytes).with_context(|| format!("{} is not valid UTF-8", path.display()))?
        };

        let documents = match format {
            InputFormat::Json => self.parse_json(&content),
            InputFormat::Conllu => {
                let default_id = path
                    .file_stem()
                    .and_then(|s| s.to_str())
                    .unwrap_or("document")
                    .trim_end_matches(".conllu");
                self.parse_conllu(&content, default_id).map(|doc| vec![doc])
            }
        };
        documents.with_context(|| format!("Failed to parse {}", path.display()))
    }

    /// Parse from a reader (single document, array of documents, or JSONL)
    pub fn parse_reader<R: Read>(&self, mut reader: R) -> Result<Vec<Document>> {
        let mut content = String::new();
        reader.read_to_string(&mut content)?;
        self.parse_json(&content)
    }

    /// Parse a JSON string: a single document, an array, or one document per line
    pub fn parse_json(&self, json_str: &str) -> Result<Vec<Document>> {
        if let Ok(doc) = serde_json::from_str::<Document>(json_str) {
            return Ok(vec![doc]);
        }

        if let Ok(docs) = serde_json::from_str::<Vec<Document>>(json_str) {
            return Ok(docs);
        }

        let mut documents = Vec::new();
        for (line_no, line) in json_str.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            let doc: Document = serde_json::from_str(line)
                .with_context(|| format!("Line {} is not a valid document", line_no + 1))?;
            documents.push(doc);
        }
        if documents.is_empty() {
            return Err(anyhow!("No documents found in input"));
        }
        Ok(documents)
    }

    /// Parse a gzipped JSON buffer
    pub fn parse_gzipped_json(&self, gzipped_data: &[u8]) -> Result<Vec<Document>> {
        let mut decoder = GzDecoder::new(gzipped_data);
        let mut json_str = String::new();
        decoder.read_to_string(&mut json_str)?;
        self.parse_json(&json_str)
    }

    /// Parse CoNLL-U text into one document.
    ///
    /// Multiword-token and empty-node lines are skipped. A `# newdoc id = ...`
    /// comment overrides `default_id`.
    pub fn parse_conllu(&self, content: &str, default_id: &str) -> Result<Document> {
        let mut doc_id = default_id.to_string();
        let mut sentences = Vec::new();
        let mut rows: Vec<ConlluRow> = Vec::new();

        for (line_no, line) in content.lines().enumerate() {
            let line = line.trim_end();
            if line.is_empty() {
                if !rows.is_empty() {
                    sentences.push(conllu_sentence(std::mem::take(&mut rows)));
                }
                continue;
            }
            if let Some(comment) = line.strip_prefix('#') {
                if let Some(id) = comment.trim().strip_prefix("newdoc id =") {
                    doc_id = id.trim().to_string();
                }
                continue;
            }
            let columns: Vec<&str> = line.split('\t').collect();
            if columns.len() < 8 {
                return Err(anyhow!("Line {}: expected at least 8 tab-separated columns, found {}", line_no + 1, columns.len()));
            }
            if columns[0].contains('-') || columns[0].contains('.') {
                continue;
            }
            let id: u32 = columns[0].parse()
                .with_context(|| format!("Line {}: invalid token id '{}'", line_no + 1, columns[0]))?;
            if id as usize != rows.len() + 1 {
                return Err(anyhow!("Line {}: token id {} out of sequence", line_no + 1, id));
            }
            let head: u32 = columns[6].parse()
                .with_context(|| format!("Line {}: invalid head '{}'", line_no + 1, columns[6]))?;
            rows.push(ConlluRow {
                form: columns[1].to_string(),
                lemma: columns[2].to_string(),
                upos: columns[3].to_string(),
                xpos: columns[4].to_string(),
                head,
                deprel: columns[7].to_string(),
            });
        }
        if !rows.is_empty() {
            sentences.push(conllu_sentence(rows));
        }

        Ok(Document::new(doc_id, sentences))
    }
}

struct ConlluRow {
    form: String,
    lemma: String,
    upos: String,
    xpos: String,
    /// 1-based, 0 for the root
    head: u32,
    deprel: String,
}

fn conllu_sentence(rows: Vec<ConlluRow>) -> Sentence {
    let mut edges = Vec::new();
    let mut roots = Vec::new();
    for (i, row) in rows.iter().enumerate() {
        if row.head == 0 {
            roots.push(i as u32);
        } else {
            edges.push((row.head - 1, i as u32, row.deprel.clone()));
        }
    }

    let mut sentence = Sentence::from_words(rows.iter().map(|r| r.form.clone()));
    if rows.iter().any(|r| r.lemma != "_") {
        sentence = sentence.with_tokens(FIELD_LEMMA, rows.iter().map(|r| r.lemma.clone()));
    }
    if rows.iter().any(|r| r.upos != "_") {
        sentence = sentence.with_tokens(FIELD_POS, rows.iter().map(|r| r.upos.clone()));
    }
    if rows.iter().any(|r| r.xpos != "_") {
        sentence = sentence.with_tokens(FIELD_TAG, rows.iter().map(|r| r.xpos.clone()));
    }
    sentence.with_dependencies(edges, roots)
}
