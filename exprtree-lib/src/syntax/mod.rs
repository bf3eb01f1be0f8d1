pub mod ast;
pub mod error;
pub mod keywords;
pub mod parser;
pub mod reader;
pub mod token;
pub mod tokenize;
pub mod tree;

pub use ast::{BinaryOperator, Node, Number};
pub use error::{Found, LexicalError, LexicalErrorKind, SyntaxError};
pub use parser::parse;
pub use token::{Token, TokenType, TokenValue};
pub use tokenize::tokenize;
pub use tree::render_tree;

/// Tokenizes and parses `source` in one step.
pub fn parse_source(source: &str) -> Result<Node, crate::Error> {
    let tokens = tokenize(source)?;
    Ok(parse(&tokens)?)
}
