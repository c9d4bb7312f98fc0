use thiserror::Error;

/// Result type for sigcodec operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for the signature codec
///
/// Malformed input of every shape (unknown leading marker, unterminated
/// class or type-variable signature, truncated buffer, missing '(') is
/// reported as a single `Syntax` kind. There is no recoverable tier: the
/// grammar is either satisfied or it is not, and no partial result is
/// produced.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Malformed signature: {message}")]
    Syntax { message: String },

    #[error("Parameter name count mismatch: {expected} parameter type(s), {actual} name(s)")]
    ParameterNameCount { expected: usize, actual: usize },
}

impl Error {
    /// Create a syntax error
    pub fn syntax(message: impl Into<String>) -> Self {
        Self::Syntax { message: message.into() }
    }
}
