pub mod annotated;
pub mod document;
pub mod parser;
pub mod pos;

pub use annotated::{AnnotatedDocument, AnnotatedSentence, Token};
pub use document::{Document, Field, GraphField, Sentence};
pub use parser::{DocumentParser, InputFormat};
