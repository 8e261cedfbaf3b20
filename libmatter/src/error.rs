//! Error types for front-matter parsing.

use thiserror::Error;

/// Result type for front-matter parsing operations.
pub type Result<T> = std::result::Result<T, ParseError>;

/// Error type for front-matter parsing.
///
/// The grammar reports every violation the same way: the parse aborts at the
/// first token that does not fit, with no recovery and no partial result.
/// Errors carry no position information.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseError {
    /// The token at the cursor (or the absence of one) does not satisfy the
    /// grammar rule being applied.
    #[error("Unexpected token")]
    UnexpectedToken,
}
