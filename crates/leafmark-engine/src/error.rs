use thiserror::Error;

/// Errors raised by inline splitting, reference extraction, span conversion
/// and node construction.
///
/// Every failure is deterministic for a given input and leaves no partial
/// output behind.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InlineError {
    #[error("Unbalanced delimiter {delimiter:?} in text: {text:?}")]
    UnbalancedDelimiter { delimiter: String, text: String },

    #[error("Delimiter must not be empty")]
    EmptyDelimiter,

    #[error("No {pattern} reference found in text: {text:?}")]
    NoMatchFound { pattern: &'static str, text: String },

    #[error("Missing required field `{field}` for {kind}")]
    MissingRequiredField {
        field: &'static str,
        kind: &'static str,
    },

    #[error("Invalid span kind: {0}")]
    InvalidKind(String),
}
