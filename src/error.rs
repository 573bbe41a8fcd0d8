//! Typed failures for the conversion engine.
//!
//! Every engine call is isolated; a failure carries a human-readable message
//! and never poisons state visible to the next call (there is none).

pub type Result<T> = std::result::Result<T, TransformError>;

#[derive(Debug, thiserror::Error)]
pub enum TransformError {
    /// Input is not valid (or repairable) structured data.
    #[error("invalid JSON input: {0}")]
    Parse(String),

    /// Slug not recognized by the router.
    #[error("unknown converter: {0}")]
    UnsupportedMode(String),

    /// Token-decode input does not have the expected segment count.
    #[error("invalid JWT: expected 3 dot-separated parts")]
    MalformedToken,

    /// A recognized converter failed on this input.
    #[error("{0}")]
    Engine(String),
}

impl TransformError {
    pub fn engine(message: impl std::fmt::Display) -> Self {
        Self::Engine(message.to_string())
    }
}
