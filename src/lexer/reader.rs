use super::classify::is_whitespace;
use super::scanner::{scan_string, scan_word};
use super::source::CharSource;
use super::token::Token;
use crate::error::Result;
use std::io::Read;

/// Pull-based token reader over one complete input
///
/// A reader is single use: once the input is exhausted every further call to
/// [`next_token`](Reader::next_token) returns `Ok(None)`.
pub struct Reader {
    source: CharSource,
    /// Set after end of input or the first error; stops iteration
    finished: bool,
}

impl Reader {
    /// Creates a reader over source text
    pub fn new(text: &str) -> Self {
        Reader {
            source: CharSource::new(text),
            finished: false,
        }
    }

    /// Reads the whole stream eagerly and creates a reader over it
    pub fn from_reader<R: Read>(mut input: R) -> Result<Self> {
        let mut text = String::new();
        input.read_to_string(&mut text)?;
        tracing::debug!(bytes = text.len(), "read input");
        Ok(Reader::new(&text))
    }

    /// Returns the next token, or `None` at end of input
    pub fn next_token(&mut self) -> Result<Option<Token>> {
        loop {
            let mut next = self.source.read_char();
            while matches!(next, Some(c) if is_whitespace(c)) {
                next = self.source.read_char();
            }

            let c = match next {
                Some(c) => c,
                None => return Ok(None),
            };

            let token = match c {
                // Comments run to end of line
                ';' => {
                    tracing::debug!(line = self.source.line(), "skipping comment");
                    self.source.skip_line();
                    continue;
                }
                '(' => Token::LeftParen,
                ')' => Token::RightParen,
                '\'' => Token::Quote,
                '"' => scan_string(&mut self.source)?,
                _ => {
                    self.source.unread_char(c);
                    scan_word(&mut self.source)
                }
            };

            return Ok(Some(token));
        }
    }

    /// Reads every remaining token
    pub fn tokens(self) -> Result<Vec<Token>> {
        self.collect()
    }

    /// Line currently being read (1-based)
    pub fn line(&self) -> usize {
        self.source.line()
    }
}

impl Iterator for Reader {
    type Item = Result<Token>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        match self.next_token() {
            Ok(Some(token)) => Some(Ok(token)),
            Ok(None) => {
                self.finished = true;
                None
            }
            Err(e) => {
                self.finished = true;
                Some(Err(e))
            }
        }
    }
}

impl std::iter::FusedIterator for Reader {}
