//! Error types for the ulisp reader

use thiserror::Error;

/// Reader errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    // Lexical errors
    /// End of input reached inside a string literal
    ///
    /// **Triggered by:** A missing closing quote, or input ending right after a `\`
    /// **Example:** `("abc` or `"abc\`
    #[error("found EOF while reading a string (string starts on line {line})")]
    UnterminatedString {
        /// Line on which the string literal was opened
        line: usize,
    },

    /// Backslash followed by a character with no defined escape
    ///
    /// **Triggered by:** Any escape other than `\\ \" \b \f \n \r \t \v`
    /// **Example:** `"tab\q"`
    #[error("unsupported escape sequence in string: \\{escape} (line {line})")]
    UnsupportedEscape {
        /// Character that followed the backslash
        escape: char,
        /// Line on which the escape appeared
        line: usize,
    },

    // Symbol interning
    /// Symbol table has no free slot for a new name
    #[error("symbol table overflow (capacity: {capacity})")]
    SymbolTableOverflow {
        /// Maximum number of names the table holds
        capacity: usize,
    },

    // External errors
    /// Reading the input stream failed
    #[error("I/O error: {message}")]
    Io {
        /// Error message
        message: String,
    },
}

impl Error {
    /// True for conditions raised while scanning characters into tokens
    pub fn is_lexical(&self) -> bool {
        matches!(
            self,
            Error::UnterminatedString { .. } | Error::UnsupportedEscape { .. }
        )
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io {
            message: err.to_string(),
        }
    }
}

/// Result type for ulisp operations
pub type Result<T> = std::result::Result<T, Error>;
