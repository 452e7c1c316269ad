pub mod ast;
pub mod parser;
pub mod pest_parser;

pub use parser::QueryParser;
