use crate::eval::EvalError;
use crate::syntax::{LexicalError, SyntaxError};
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    Lexical(LexicalError),
    Syntax(SyntaxError),
    Eval(EvalError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Lexical(err) => write!(f, "{err}"),
            Error::Syntax(err) => write!(f, "{err}"),
            Error::Eval(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Lexical(err) => Some(err),
            Error::Syntax(err) => Some(err),
            Error::Eval(err) => Some(err),
        }
    }
}

impl From<LexicalError> for Error {
    fn from(err: LexicalError) -> Self {
        Error::Lexical(err)
    }
}

impl From<SyntaxError> for Error {
    fn from(err: SyntaxError) -> Self {
        Error::Syntax(err)
    }
}

impl From<EvalError> for Error {
    fn from(err: EvalError) -> Self {
        Error::Eval(err)
    }
}
