//! Error types for the black76 crate.
//!
//! The user-facing taxonomy is deliberately small: a malformed request can
//! only fail one way (wrong length), and every arithmetic edge case is
//! pre-empted inside the engine by explicit substitution rules. Anything
//! else that goes wrong is an internal fault, caught at the call boundary
//! and surfaced as a structured error rather than a crashed host.

use thiserror::Error;

/// Convenience type alias for results in this crate.
pub type Result<T> = std::result::Result<T, Black76Error>;

/// Errors that can occur while servicing a pricing request.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Black76Error {
    /// Request body is not 61 bytes (or 4-byte selector + 61 bytes).
    #[error("invalid input length: expected 61 bytes or 4-byte selector + 61 bytes, got {got}")]
    InvalidInputLength { got: usize },

    /// Unexpected computational fault (e.g., an arithmetic trap caught at
    /// the call boundary, or a result magnitude too wide to encode).
    #[error("internal fault: {message}")]
    InternalFault { message: String },
}
