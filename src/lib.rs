//! Hearst-pattern hypernym/hyponym extraction over dependency-parsed text.
//!
//! Documents arrive already tokenized, tagged and parsed (Odinson JSON or
//! CoNLL-U). [`HyponymDetector`] matches a table of token patterns against
//! each sentence, resolves the captured nouns to their compound heads,
//! expands them to noun phrases and emits one [`HearstMatch`] per hyponym.
//!
//! ```no_run
//! use hyponym_detector::data::{AnnotatedDocument, DocumentParser, InputFormat};
//! use hyponym_detector::{Pipeline, HYPONYM_DETECTOR_COMPONENT};
//!
//! # fn main() -> anyhow::Result<()> {
//! let docs = DocumentParser::new().parse_file("docs.json.gz", InputFormat::Json)?;
//! let mut nlp = Pipeline::new();
//! nlp.add_pipe(HYPONYM_DETECTOR_COMPONENT, serde_json::json!({"extended": true}))?;
//! for doc in &docs {
//!     let mut doc = AnnotatedDocument::from_document(doc);
//!     nlp.run(&mut doc);
//!     for m in doc.hearst_patterns() {
//!         println!("{}: {} -> {}", m.predicate, doc.text(m.hyponym), doc.text(m.hypernym));
//!     }
//! }
//! # Ok(())
//! # }
//! ```

pub mod compiler;
pub mod data;
pub mod digraph;
pub mod engine;
pub mod error;
pub mod hearst;
pub mod pipeline;
pub mod types;

pub use compiler::QueryParser;
pub use data::{AnnotatedDocument, Document, DocumentParser, Token};
pub use engine::{DetectorConfig, HYPONYM_DETECTOR_COMPONENT};
pub use error::{HearstError, Result};
pub use hearst::{expand_to_noun_compound, find_noun_compound_head, HearstRule, HyponymDetector};
pub use pipeline::{Pipeline, PipelineComponent};
pub use types::{HearstMatch, Span};
