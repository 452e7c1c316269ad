//! Rule execution support
//!
//! - `constants`: field and label names shared across the crate
//! - `config`: detector configuration (YAML / JSON)
//! - `execution`: backtracking matcher for token-sequence patterns

pub mod config;
pub mod constants;
pub mod execution;

pub use config::DetectorConfig;
pub use constants::*;
pub use execution::TokenPatternMatcher;
