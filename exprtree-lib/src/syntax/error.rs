use super::token::{Token, TokenType};
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum LexicalErrorKind {
    UnexpectedCharacter(char),
    NumberOutOfRange(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct LexicalError {
    pub kind: LexicalErrorKind,
    pub line: usize,
    pub column: usize,
    pub span: std::ops::Range<usize>,
}

impl LexicalError {
    pub fn new(
        kind: LexicalErrorKind,
        line: usize,
        column: usize,
        span: std::ops::Range<usize>,
    ) -> Self {
        Self {
            kind,
            line,
            column,
            span,
        }
    }

    /// The character that no pattern accepted, if that is what failed.
    pub fn character(&self) -> Option<char> {
        match self.kind {
            LexicalErrorKind::UnexpectedCharacter(ch) => Some(ch),
            LexicalErrorKind::NumberOutOfRange(_) => None,
        }
    }
}

impl fmt::Display for LexicalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Lexical error at line {}, column {}: ",
            self.line, self.column
        )?;
        match &self.kind {
            LexicalErrorKind::UnexpectedCharacter(ch) => {
                write!(f, "unexpected character {:?}", ch)
            }
            LexicalErrorKind::NumberOutOfRange(lexeme) => {
                write!(f, "integer literal {lexeme} is out of range")
            }
        }
    }
}

impl std::error::Error for LexicalError {}

/// What the parser ran into when it gave up.
#[derive(Debug, Clone, PartialEq)]
pub enum Found {
    Token {
        lexeme: String,
        token_type: TokenType,
    },
    EndOfInput,
}

impl From<&Token> for Found {
    fn from(token: &Token) -> Self {
        Found::Token {
            lexeme: token.lexeme.clone(),
            token_type: token.token_type,
        }
    }
}

impl fmt::Display for Found {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Found::Token { lexeme, .. } => write!(f, "'{lexeme}'"),
            Found::EndOfInput => write!(f, "end of input"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SyntaxError {
    pub message: String,
    pub found: Found,
    pub line: usize,
    pub column: usize,
}

impl SyntaxError {
    pub fn new(message: String, found: Found, line: usize, column: usize) -> Self {
        Self {
            message,
            found,
            line,
            column,
        }
    }

    pub fn at_token(message: String, token: &Token) -> Self {
        Self::new(message, Found::from(token), token.line, token.column)
    }

    pub fn is_end_of_input(&self) -> bool {
        self.found == Found::EndOfInput
    }
}

impl fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Syntax error at line {}, column {}: {}, found {}",
            self.line, self.column, self.message, self.found
        )
    }
}

impl std::error::Error for SyntaxError {}
