//! Phase 2: Parser
//!
//! The parser walks the buffered token sequence with a single cursor and
//! builds the ordered list of top-level entries. Indentation tokens are the
//! structural delimiters: an indent after a key's colon-and-newline opens a
//! sequence block, and the exact indent width gates every item in it.
//!
//! There is no recovery. The first token that does not fit the grammar aborts
//! the parse with [`ParseError::UnexpectedToken`].

use crate::error::{ParseError, Result};
use crate::tokenizer::{Token, Tokenizer};
use crate::value::Value;

/// A recursive-descent parser over a fully buffered token sequence.
///
/// Construction runs the tokenizer to completion; parsing is a second forward
/// pass over the buffer. Dropping the parser releases the token buffer,
/// independently of the value tree it returned.
pub struct Parser<'src> {
    tokens: Vec<Token<'src>>,
    pos: usize,
}

impl<'src> Parser<'src> {
    /// Tokenize `source` and build a ready-to-parse instance.
    pub fn new(source: &'src str) -> Self {
        Self {
            tokens: Tokenizer::new(source).collect(),
            pos: 0,
        }
    }

    /// Parse the document into its top-level entries, in source order.
    pub fn parse(&mut self) -> Result<Vec<Value>> {
        let mut entries = Vec::new();

        while let Some(token) = self.current() {
            match token {
                // Leading indentation before a top-level key is skipped,
                // never validated.
                Token::Indent(_) => self.advance(),
                Token::Value(_) => entries.push(self.parse_entry()?),
                // Blank line or terminator of a consumed construct.
                Token::EndLine => self.advance(),
                Token::Colon | Token::Dash => return Err(ParseError::UnexpectedToken),
            }
        }

        Ok(entries)
    }

    // ========================================================================
    // Cursor primitives
    // ========================================================================

    /// Token at the cursor, or `None` at end of input.
    fn current(&self) -> Option<Token<'src>> {
        self.tokens.get(self.pos).copied()
    }

    /// Token one past the cursor, without advancing.
    fn peek_next(&self) -> Option<Token<'src>> {
        self.tokens.get(self.pos + 1).copied()
    }

    /// Structural equality test against the cursor, without advancing.
    fn check(&self, expected: Token<'src>) -> bool {
        self.current() == Some(expected)
    }

    /// Advance past `expected`, or fail if the cursor holds anything else.
    fn consume(&mut self, expected: Token<'src>) -> Result<()> {
        if self.check(expected) {
            self.advance();
            Ok(())
        } else {
            Err(ParseError::UnexpectedToken)
        }
    }

    /// Move the cursor one token forward.
    fn advance(&mut self) {
        if self.pos < self.tokens.len() {
            self.pos += 1;
        }
    }

    // ========================================================================
    // Grammar
    // ========================================================================

    /// Parse one top-level `key: ...` entry.
    ///
    /// The token after the colon decides the shape: an indent means the rest
    /// of the line is a scalar, a line terminator followed by an indent opens
    /// a sequence block.
    fn parse_entry(&mut self) -> Result<Value> {
        let key = match self.current() {
            Some(Token::Value(text)) => text.to_string(),
            _ => return Err(ParseError::UnexpectedToken),
        };
        self.advance();
        self.consume(Token::Colon)?;

        match self.current() {
            Some(Token::Indent(_)) => {
                self.advance();
                let value = self.collect_scalar()?;
                Ok(Value::Scalar { key, value })
            }
            Some(Token::EndLine) => match self.peek_next() {
                Some(Token::Indent(width)) => {
                    self.advance();
                    let items = self.parse_sequence(width)?;
                    Ok(Value::Sequence { key, items })
                }
                _ => Err(ParseError::UnexpectedToken),
            },
            // A value hard against the colon, or nothing at all. The scalar
            // form requires at least one space after the colon.
            _ => Err(ParseError::UnexpectedToken),
        }
    }

    /// Accumulate the rest of the line as one scalar string.
    ///
    /// The tokenizer may have split the text into several Indent, Colon and
    /// Value tokens (`2025-08-08T03:02:00` is five of them); each maps back
    /// to its literal spelling. Stops after consuming the line terminator, or
    /// at end of input.
    fn collect_scalar(&mut self) -> Result<String> {
        let mut text = String::new();

        while let Some(token) = self.current() {
            match token {
                Token::EndLine => {
                    self.advance();
                    break;
                }
                Token::Indent(width) => text.push_str(&" ".repeat(width)),
                Token::Colon => text.push(':'),
                Token::Value(word) => text.push_str(word),
                // A dash has no spelling inside a scalar.
                Token::Dash => return Err(ParseError::UnexpectedToken),
            }
            self.advance();
        }

        Ok(text)
    }

    /// Parse an indented block of `- item` lines.
    ///
    /// Items must sit at exactly `item_indent` spaces; the first line at any
    /// other width ends the block without error and is left for the top-level
    /// loop. After the dash, exactly one space is required before the item
    /// text.
    fn parse_sequence(&mut self, item_indent: usize) -> Result<Vec<String>> {
        let mut items = Vec::new();

        while self.check(Token::Indent(item_indent)) {
            self.consume(Token::Indent(item_indent))?;
            if !self.check(Token::Dash) {
                // An indented line without a dash marker is a nested mapping.
                self.parse_mapping()?;
            }
            self.consume(Token::Dash)?;
            self.consume(Token::Indent(1))?;
            match self.current() {
                Some(Token::Value(_)) => items.push(self.collect_scalar()?),
                _ => return Err(ParseError::UnexpectedToken),
            }
        }

        Ok(items)
    }

    /// Parse a nested mapping block.
    ///
    /// Nested mappings are not part of the grammar yet. Reaching one fails
    /// deterministically instead of misparsing it as something else.
    fn parse_mapping(&mut self) -> Result<Value> {
        Err(ParseError::UnexpectedToken)
    }
}
