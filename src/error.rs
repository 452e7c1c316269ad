//! Error types shared by the detector, the rule compiler and the pipeline.

use thiserror::Error;

/// Errors raised while configuring or running the hyponym detector.
#[derive(Debug, Error)]
pub enum HearstError {
    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Failed to parse pattern '{query}': {message}")]
    PatternParse { query: String, message: String },

    #[error("Unknown token field '{0}' (expected one of word, lower, lemma, pos, tag, dep)")]
    UnknownField(String),

    #[error("Invalid regex '{pattern}': {source}")]
    InvalidRegex {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("Rule '{label}' must capture exactly one '{capture}' (found {found})")]
    MissingCapture {
        label: String,
        capture: &'static str,
        found: usize,
    },

    #[error("No pipeline component registered under '{0}'")]
    UnknownComponent(String),

    #[error("Pipeline already contains a component named '{0}'")]
    DuplicateComponent(String),

    #[error("Sentence {sentence}: {message}")]
    MalformedSentence { sentence: usize, message: String },
}

pub type Result<T> = std::result::Result<T, HearstError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = HearstError::MissingCapture {
            label: "such_as".to_string(),
            capture: "hyponym",
            found: 0,
        };
        assert!(err.to_string().contains("such_as"));
        assert!(err.to_string().contains("hyponym"));

        let err = HearstError::MalformedSentence { sentence: 3, message: "cycle".to_string() };
        assert!(err.to_string().starts_with("Sentence 3"));
    }
}
