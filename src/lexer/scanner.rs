use super::classify::{classify_word, is_breaking};
use super::source::CharSource;
use super::token::Token;
use crate::error::{Error, Result};

/// Scans the body of a string literal.
///
/// The opening `"` must already have been consumed; the closing one is
/// consumed here and not included in the token.
pub fn scan_string(source: &mut CharSource) -> Result<Token> {
    let line = source.line();
    let mut value = String::new();

    loop {
        match source.read_char() {
            None => return Err(Error::UnterminatedString { line }),
            Some('"') => break,
            Some('\\') => {
                let escaped = source
                    .read_char()
                    .ok_or(Error::UnterminatedString { line })?;
                value.push(decode_escape(escaped, source.line())?);
            }
            Some(c) => value.push(c),
        }
    }

    Ok(Token::String(value))
}

/// Maps the character after a backslash to the character it stands for.
pub fn decode_escape(escaped: char, line: usize) -> Result<char> {
    match escaped {
        '\\' => Ok('\\'),
        '"' => Ok('"'),
        'b' => Ok('\x08'),
        'f' => Ok('\x0C'),
        'n' => Ok('\n'),
        'r' => Ok('\r'),
        't' => Ok('\t'),
        'v' => Ok('\x0B'),
        _ => Err(Error::UnsupportedEscape {
            escape: escaped,
            line,
        }),
    }
}

/// Scans a bare word and classifies it.
///
/// The first character must still be unread (or pushed back). The breaking
/// character that ends the word is pushed back for the next scan.
pub fn scan_word(source: &mut CharSource) -> Token {
    let mut word = String::new();

    while let Some(c) = source.read_char() {
        if is_breaking(c) {
            source.unread_char(c);
            break;
        }
        word.push(c);
    }

    classify_word(&word)
}
