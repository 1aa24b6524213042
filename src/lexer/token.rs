use serde::{Deserialize, Serialize};

/// A single lexeme produced by the reader
///
/// Literal kinds carry exactly one payload; delimiters carry none.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value")]
pub enum Token {
    // Literals
    /// Integer literal
    #[serde(rename = "int")]
    Integer(i64),
    /// Floating-point literal
    #[serde(rename = "float")]
    Float(f64),
    /// String literal, escapes already decoded
    #[serde(rename = "string")]
    String(String),
    /// Boolean literal (`#t` / `#f`)
    #[serde(rename = "boolean")]
    Boolean(bool),
    /// Any other bare word
    #[serde(rename = "symbol")]
    Symbol(String),

    // Delimiters
    /// Left parenthesis (
    #[serde(rename = "left_paren")]
    LeftParen,
    /// Right parenthesis )
    #[serde(rename = "right_paren")]
    RightParen,
    /// Quote (')
    #[serde(rename = "quote")]
    Quote,
}

impl Token {
    /// Name of the token kind as used in lexeme dumps
    pub fn kind_name(&self) -> &'static str {
        match self {
            Token::Integer(_) => "int",
            Token::Float(_) => "float",
            Token::String(_) => "string",
            Token::Boolean(_) => "boolean",
            Token::Symbol(_) => "symbol",
            Token::LeftParen => "left_paren",
            Token::RightParen => "right_paren",
            Token::Quote => "quote",
        }
    }

    /// True for the payload-free delimiter tokens
    pub fn is_delimiter(&self) -> bool {
        matches!(self, Token::LeftParen | Token::RightParen | Token::Quote)
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "<Lexeme, type: {}", self.kind_name())?;
        match self {
            Token::Integer(n) => write!(f, ", value: {}", n)?,
            Token::Float(fl) => write!(f, ", value: {:?}", fl)?,
            Token::String(s) | Token::Symbol(s) => write!(f, ", value: {}", s)?,
            Token::Boolean(b) => write!(f, ", value: {}", b)?,
            Token::LeftParen | Token::RightParen | Token::Quote => {}
        }
        write!(f, ">")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lexeme_display() {
        assert_eq!(
            Token::Integer(42).to_string(),
            "<Lexeme, type: int, value: 42>"
        );
        assert_eq!(
            Token::Float(5.0).to_string(),
            "<Lexeme, type: float, value: 5.0>"
        );
        assert_eq!(
            Token::Symbol("car".to_string()).to_string(),
            "<Lexeme, type: symbol, value: car>"
        );
        assert_eq!(
            Token::Boolean(false).to_string(),
            "<Lexeme, type: boolean, value: false>"
        );
        assert_eq!(Token::LeftParen.to_string(), "<Lexeme, type: left_paren>");
        assert_eq!(Token::Quote.to_string(), "<Lexeme, type: quote>");
    }

    #[test]
    fn test_delimiters_have_no_payload() {
        assert!(Token::LeftParen.is_delimiter());
        assert!(Token::RightParen.is_delimiter());
        assert!(Token::Quote.is_delimiter());
        assert!(!Token::Integer(1).is_delimiter());
        assert!(!Token::String(String::new()).is_delimiter());
    }

    #[test]
    fn test_json_shape() {
        let json = serde_json::to_string(&Token::Integer(7)).unwrap();
        assert_eq!(json, r#"{"type":"int","value":7}"#);

        let json = serde_json::to_string(&Token::RightParen).unwrap();
        assert_eq!(json, r#"{"type":"right_paren"}"#);

        let back: Token = serde_json::from_str(r#"{"type":"symbol","value":"x"}"#).unwrap();
        assert_eq!(back, Token::Symbol("x".to_string()));
    }
}
