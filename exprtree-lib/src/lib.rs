//! Front end for a small arithmetic expression language.
//!
//! ```text
//! source → tokenize → [Token] → parse → Node → evaluate / render_tree
//! ```
//!
//! The tokenizer also recognizes identifiers, keywords and delimiters of a
//! wider imperative sketch; the parser accepts only numbers, `+ - * /` and
//! parentheses.

pub mod error;
pub mod eval;
pub mod syntax;

pub use error::Error;
pub use eval::{evaluate, EvalError};
pub use syntax::{
    parse, parse_source, render_tree, tokenize, BinaryOperator, LexicalError, Node, Number,
    SyntaxError, Token, TokenType, TokenValue,
};

/// Parses and evaluates `source`.
pub fn calculate(source: &str) -> Result<Number, Error> {
    let tree = parse_source(source)?;
    Ok(evaluate(&tree)?)
}
