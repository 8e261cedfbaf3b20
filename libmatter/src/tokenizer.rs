//! Phase 1: Tokenizer
//!
//! The tokenizer converts raw source text into a flat token sequence. It
//! recognizes, in order:
//! - Line terminators (LF, or CRLF consumed as one unit)
//! - Indentation (a counted run of spaces)
//! - The `:` and `-` structural markers
//! - Word runs (alphanumeric-led text including embedded `- / , ' . ! ?`)
//!
//! Anything else ends lexing: the tokenizer never fails, it stops. A document
//! containing an unscannable byte simply produces fewer tokens, and the
//! parser trips over the truncated stream if the cut falls mid-construct.

/// A single lexical unit of a front-matter document.
///
/// `Value` borrows its text from the source; nothing is copied during
/// tokenization. Two tokens are equal iff they have the same variant and,
/// where applicable, the same payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token<'src> {
    /// A run of `n` consecutive spaces, consumed as one unit.
    Indent(usize),
    /// A `-` list marker (a dash that did not begin a word run).
    Dash,
    /// A `:` key separator.
    Colon,
    /// A maximal word run, sliced out of the source text.
    Value(&'src str),
    /// One logical line terminator.
    EndLine,
}

/// Bytes that may continue a word run once it has started.
fn is_word_byte(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || matches!(byte, b'-' | b'/' | b',' | b'\'' | b'.' | b'!' | b'?')
}

/// A pull tokenizer over front-matter source text.
///
/// The only state is a shrinking view of the remaining input: every
/// recognized token truncates the front of the slice. There is no
/// backtracking and no lookahead beyond the current byte.
#[derive(Debug, Clone)]
pub struct Tokenizer<'src> {
    rest: &'src str,
}

impl<'src> Tokenizer<'src> {
    /// Create a tokenizer over the whole source text.
    pub fn new(source: &'src str) -> Self {
        Self { rest: source }
    }

    /// Pull and consume the next token, or `None` at end of input.
    pub fn next_token(&mut self) -> Option<Token<'src>> {
        if let Some(tail) = self.rest.strip_prefix("\r\n") {
            self.rest = tail;
            return Some(Token::EndLine);
        }
        if let Some(tail) = self.rest.strip_prefix('\n') {
            self.rest = tail;
            return Some(Token::EndLine);
        }

        let spaces = self.rest.bytes().take_while(|&b| b == b' ').count();
        if spaces > 0 {
            self.rest = &self.rest[spaces..];
            return Some(Token::Indent(spaces));
        }

        if let Some(tail) = self.rest.strip_prefix(':') {
            self.rest = tail;
            return Some(Token::Colon);
        }

        // A dash can only start a word run after an alphanumeric byte, so a
        // dash at the front is always the list marker. `2025-08-08` never
        // reaches this arm: the word-run rule below absorbs its dashes.
        if let Some(tail) = self.rest.strip_prefix('-') {
            self.rest = tail;
            return Some(Token::Dash);
        }

        if self.rest.bytes().next().is_some_and(|b| b.is_ascii_alphanumeric()) {
            let len = self.rest.bytes().take_while(|&b| is_word_byte(b)).count();
            let (word, tail) = self.rest.split_at(len);
            self.rest = tail;
            return Some(Token::Value(word));
        }

        // Unrecognized byte (or a lone `\r`, or end of input): lexing is
        // over. Drop the remainder so every later call also reports the end.
        self.rest = "";
        None
    }
}

impl<'src> Iterator for Tokenizer<'src> {
    type Item = Token<'src>;

    fn next(&mut self) -> Option<Token<'src>> {
        self.next_token()
    }
}
