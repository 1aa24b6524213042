//! # ulisp - the reader of a micro LISP
//!
//! The lexical front end of a small LISP: it turns input text into a stream of
//! classified tokens for a downstream parser.
//!
//! ## Quick Start
//!
//! ```rust
//! use ulisp::{Reader, Token};
//!
//! # fn main() -> ulisp::Result<()> {
//! let mut reader = Reader::new("(define half 0.5) ; ratio\n'(#t \"yes\")");
//!
//! assert_eq!(reader.next_token()?, Some(Token::LeftParen));
//! assert_eq!(reader.next_token()?, Some(Token::Symbol("define".to_string())));
//! assert_eq!(reader.next_token()?, Some(Token::Symbol("half".to_string())));
//! assert_eq!(reader.next_token()?, Some(Token::Float(0.5)));
//! assert_eq!(reader.next_token()?, Some(Token::RightParen));
//!
//! // The comment is skipped; the rest can be drained at once
//! let rest = reader.tokens()?;
//! assert_eq!(
//!     rest,
//!     vec![
//!         Token::Quote,
//!         Token::LeftParen,
//!         Token::Boolean(true),
//!         Token::String("yes".to_string()),
//!         Token::RightParen,
//!     ]
//! );
//! # Ok(())
//! # }
//! ```
//!
//! ## Tokens
//!
//! - **Delimiters**: `(`, `)` and `'`
//! - **Strings**: `"..."` with the escapes `\\ \" \b \f \n \r \t \v`
//! - **Booleans**: `#t`, `#f`
//! - **Numbers**: integers (`-17`, `+5`) and floats (`2.5`, `.5`, `1e+3`)
//! - **Symbols**: any other run of characters up to whitespace, a delimiter or `;`
//!
//! A `;` starts a comment that runs to the end of the line.
//!
//! ## Error Handling
//!
//! Only string literals can fail to scan. Errors are returned, never printed:
//!
//! ```rust
//! use ulisp::{Error, Reader};
//!
//! let err = Reader::new("\"tab\\q\"").tokens().unwrap_err();
//! assert!(matches!(err, Error::UnsupportedEscape { escape: 'q', .. }));
//!
//! let err = Reader::new("(\"abc").tokens().unwrap_err();
//! assert_eq!(err, Error::UnterminatedString { line: 1 });
//! ```
//!
//! ## Architecture
//!
//! ```text
//! Input → LineFeeder → CharSource → scan_string / scan_word → Reader → Tokens
//! ```

/// Version of the ulisp reader
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod error;
pub mod lexer;
pub mod symbol_table;

// Re-export main types
pub use error::{Error, Result};
pub use lexer::{CharSource, LineFeeder, Reader, Token};
pub use symbol_table::SymbolTable;
