//! Whitespace tokenizer for the input file formats.
//!
//! All three input files are streams of whitespace-separated tokens. The
//! tokenizer tracks 1-indexed line and column numbers so readers can point
//! at the offending token, and can also hand out the remainder of a line for
//! free-text fields such as the knowledge-base domain.

use prodsys_foundation::{Error, ErrorContext, Result};

/// A token with its position in the source.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Token<'a> {
    /// The token text.
    pub text: &'a str,
    /// Line number (1-indexed).
    pub line: usize,
    /// Column number (1-indexed, in characters).
    pub column: usize,
}

/// Splits source text into whitespace-separated tokens.
#[derive(Clone, Debug)]
pub struct Tokenizer<'a> {
    source: &'a str,
    pos: usize,
    line: usize,
    column: usize,
    origin: Option<String>,
}

impl<'a> Tokenizer<'a> {
    /// Creates a tokenizer over the given source.
    #[must_use]
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            pos: 0,
            line: 1,
            column: 1,
            origin: None,
        }
    }

    /// Names the source in error contexts (usually the file path).
    #[must_use]
    pub fn with_origin(mut self, origin: impl Into<String>) -> Self {
        self.origin = Some(origin.into());
        self
    }

    /// Returns the current line and column.
    #[must_use]
    pub fn position(&self) -> (usize, usize) {
        (self.line, self.column)
    }

    fn bump(&mut self, c: char) {
        self.pos += c.len_utf8();
        if c == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
    }

    fn skip_whitespace(&mut self) {
        while let Some(c) = self.source[self.pos..].chars().next() {
            if !c.is_whitespace() {
                break;
            }
            self.bump(c);
        }
    }

    /// Returns the next token, or `None` at end of input.
    pub fn next_token(&mut self) -> Option<Token<'a>> {
        self.skip_whitespace();
        let start = self.pos;
        let (line, column) = self.position();

        while let Some(c) = self.source[self.pos..].chars().next() {
            if c.is_whitespace() {
                break;
            }
            self.bump(c);
        }

        if self.pos == start {
            return None;
        }
        Some(Token {
            text: &self.source[start..self.pos],
            line,
            column,
        })
    }

    /// Returns the next token without consuming it.
    #[must_use]
    pub fn peek(&self) -> Option<Token<'a>> {
        self.clone().next_token()
    }

    /// Consumes and returns the rest of the current physical line, trimmed.
    ///
    /// Blank lines are not skipped: on an empty line this returns `""` and
    /// moves to the start of the next line.
    pub fn rest_of_line(&mut self) -> &'a str {
        let start = self.pos;
        while let Some(c) = self.source[self.pos..].chars().next() {
            if c == '\n' {
                break;
            }
            self.bump(c);
        }
        let line = &self.source[start..self.pos];
        if let Some(c) = self.source[self.pos..].chars().next() {
            self.bump(c);
        }
        line.trim()
    }

    /// Returns the next token or a parse error naming what was expected.
    ///
    /// # Errors
    /// Returns `ParseError` at end of input.
    pub fn expect(&mut self, what: &str) -> Result<Token<'a>> {
        match self.next_token() {
            Some(token) => Ok(token),
            None => {
                let (line, column) = self.position();
                Err(self.error_at(
                    format!("unexpected end of input, expected {what}"),
                    line,
                    column,
                ))
            }
        }
    }

    /// Consumes a non-negative count.
    ///
    /// # Errors
    /// Returns `ParseError` if the token is not a non-negative integer.
    pub fn expect_count(&mut self, what: &str) -> Result<usize> {
        let token = self.expect(what)?;
        token.text.parse().map_err(|_| {
            self.error(
                format!("expected {what} as a non-negative integer, found '{}'", token.text),
                token,
            )
        })
    }

    /// Consumes a signed integer.
    ///
    /// # Errors
    /// Returns `ParseError` if the token is not an integer.
    pub fn expect_int(&mut self, what: &str) -> Result<i64> {
        let token = self.expect(what)?;
        token.text.parse().map_err(|_| {
            self.error(
                format!("expected {what} as an integer, found '{}'", token.text),
                token,
            )
        })
    }

    /// Builds a parse error located at a token.
    #[must_use]
    pub fn error(&self, message: impl Into<String>, token: Token<'_>) -> Error {
        self.error_at(message, token.line, token.column)
    }

    fn error_at(&self, message: impl Into<String>, line: usize, column: usize) -> Error {
        let err = Error::parse(message, line, column);
        match &self.origin {
            Some(origin) => err.with_context(
                ErrorContext::new()
                    .with_source(origin.clone())
                    .with_position(line, column),
            ),
            None => err,
        }
    }
}
