//! Error taxonomy for toolkit operations.

use thiserror::Error;

/// Failures reported by parse, validate, and formatting operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UrlToolError {
    /// No URL string was available where one is required.
    #[error("no URL provided")]
    EmptyInput,

    /// An operation needing parse state ran before any successful parse.
    #[error("no URL has been parsed yet")]
    NotParsed,

    /// The authority carries a port substring that is not an integer in 0-65535.
    #[error("invalid port {0:?} in URL authority")]
    MalformedPort(String),
}

/// Result type for toolkit operations.
pub type Result<T> = std::result::Result<T, UrlToolError>;
