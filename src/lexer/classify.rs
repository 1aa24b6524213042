//! Character predicates and bare-word classification.

use super::token::Token;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref INTEGER_RE: Regex = Regex::new(r"^[+-]?[0-9]+$").unwrap();
    // Lowercase `e` with a mandatory exponent sign; `.5` and `1.` are both floats.
    static ref FLOAT_RE: Regex =
        Regex::new(r"^[+-]?([0-9]+\.?[0-9]*|\.[0-9]+)(e[+-][0-9]+)?$").unwrap();
}

/// Space, form feed, newline, carriage return, tab or vertical tab
pub fn is_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\x0C' | '\n' | '\r' | '\t' | '\x0B')
}

/// Characters that end a bare word without becoming part of it
pub fn is_breaking(c: char) -> bool {
    is_whitespace(c) || matches!(c, '(' | ')' | '\'' | ';')
}

/// Classifies a complete bare word.
///
/// Booleans are tried first, then integers, then floats; anything else is a
/// symbol, so this never fails.
pub fn classify_word(word: &str) -> Token {
    match word {
        "#t" => return Token::Boolean(true),
        "#f" => return Token::Boolean(false),
        _ => {}
    }

    if INTEGER_RE.is_match(word) {
        match word.parse::<i64>() {
            Ok(n) => return Token::Integer(n),
            Err(_) => {
                tracing::warn!(word, "integer literal out of range, reading it as a float");
            }
        }
    }

    if FLOAT_RE.is_match(word) {
        if let Ok(f) = word.parse::<f64>() {
            return Token::Float(f);
        }
    }

    Token::Symbol(word.to_string())
}
