use std::fmt;
use thiserror::Error;

/// Reasons an input is rejected before tokenization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CaseError {
    /// Input was absent or not textual. `received` names the runtime type.
    #[error("expected a string, received {received}")]
    InvalidType { received: &'static str },

    #[error("expected a non-whitespace string")]
    WhitespaceOnly,
}

/// Coarse failure class, for callers that map failures to responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Type,
    Whitespace,
}

impl CaseError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            CaseError::InvalidType { .. } => ErrorKind::Type,
            CaseError::WhitespaceOnly => ErrorKind::Whitespace,
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::Type => write!(f, "type"),
            ErrorKind::Whitespace => write!(f, "whitespace"),
        }
    }
}
