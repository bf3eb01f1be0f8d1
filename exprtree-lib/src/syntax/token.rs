use super::ast::Number;
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TokenType {
    Number,
    Identifier,
    Keyword,
    Operator,
    Delimiter,
    Newline,
}

impl fmt::Display for TokenType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TokenType::Number => "Number",
            TokenType::Identifier => "Identifier",
            TokenType::Keyword => "Keyword",
            TokenType::Operator => "Operator",
            TokenType::Delimiter => "Delimiter",
            TokenType::Newline => "Newline",
        };
        f.write_str(name)
    }
}

/// Decoded payload of a token. Numbers are decoded once, at scan time.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum TokenValue {
    Number(Number),
    Text(String),
}

impl fmt::Display for TokenValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenValue::Number(n) => write!(f, "{n}"),
            TokenValue::Text(s) => f.write_str(s),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Token {
    #[serde(rename = "kind")]
    pub token_type: TokenType,
    pub value: TokenValue,
    pub lexeme: String,
    pub line: usize,
    pub column: usize,
    #[serde(skip)]
    pub span: std::ops::Range<usize>,
}

impl Token {
    pub fn number(&self) -> Option<Number> {
        match self.value {
            TokenValue::Number(n) => Some(n),
            TokenValue::Text(_) => None,
        }
    }

    pub fn is(&self, token_type: TokenType, lexeme: &str) -> bool {
        self.token_type == token_type && self.lexeme == lexeme
    }

    /// Column just past the last character of the token.
    pub fn end_column(&self) -> usize {
        self.column + self.lexeme.chars().count()
    }

    /// One line of the human-readable token listing.
    pub fn listing_line(&self) -> String {
        format!(
            "Token: {} | Tipo: {} | Línea: {}, Columna: {}",
            self.value, self.token_type, self.line, self.column
        )
    }
}
