//! Front-matter parser implementation.
//!
//! Parses the flat, indentation-sensitive YAML subset used for document
//! front-matter: top-level `key: value` lines and keys followed by an
//! indented block of `- item` lines. Nothing else — no nesting, no flow
//! collections, no quoting, no comments.
//!
//! # Parsing Pipeline
//!
//! The parser operates in two phases:
//!
//! 1. **Tokenizer**: Converts source text into a flat token sequence of
//!    indents, dashes, colons, word runs, and line terminators. Word tokens
//!    borrow from the source; nothing is copied.
//!
//! 2. **Parser**: Walks the buffered tokens with a single cursor and builds
//!    the ordered list of top-level entries, using indent widths as the
//!    structural delimiters.
//!
//! ```
//! let entries = libmatter::parse("names:\n  - Agustine\n  - Haruka").unwrap();
//! assert_eq!(entries.len(), 1);
//! assert_eq!(entries[0].key(), Some("names"));
//! assert_eq!(
//!     entries[0].as_sequence(),
//!     Some(&["Agustine".to_string(), "Haruka".to_string()][..])
//! );
//! ```

mod error;
mod parser;
mod tokenizer;
mod value;

pub use error::{ParseError, Result};
pub use parser::Parser;
pub use tokenizer::{Token, Tokenizer};
pub use value::Value;

/// Parse a front-matter document into its top-level entries.
///
/// # Example
///
/// ```
/// let entries = libmatter::parse("name: Agustina").unwrap();
/// assert_eq!(entries[0].as_scalar(), Some("Agustina"));
/// ```
pub fn parse(input: &str) -> Result<Vec<Value>> {
    Parser::new(input).parse()
}
