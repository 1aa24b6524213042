//! Lexical analysis for ulisp
//!
//! Converts source text into a pull-based stream of tokens. Data flows one
//! way: [`Reader`] drives the scanners, the scanners pull characters from a
//! [`CharSource`], and the source pulls whole lines from a [`LineFeeder`].

mod classify;
mod reader;
mod scanner;
mod source;
mod token;

pub use classify::{classify_word, is_breaking, is_whitespace};
pub use reader::Reader;
pub use scanner::{decode_escape, scan_string, scan_word};
pub use source::{CharSource, LineFeeder};
pub use token::Token;
