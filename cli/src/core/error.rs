use exprtree_lib::{EvalError, LexicalError, SyntaxError};
use std::fmt;
use std::io;

#[derive(Debug)]
pub enum AppError {
    Io(io::Error),
    Lexical(LexicalError),
    Syntax(SyntaxError),
    Eval(EvalError),
    Generic(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Io(err) => write!(f, "IO error: {err}"),
            AppError::Lexical(err) => write!(f, "{err}"),
            AppError::Syntax(err) => write!(f, "{err}"),
            AppError::Eval(err) => write!(f, "{err}"),
            AppError::Generic(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Io(err) => Some(err),
            AppError::Lexical(err) => Some(err),
            AppError::Syntax(err) => Some(err),
            AppError::Eval(err) => Some(err),
            AppError::Generic(_) => None,
        }
    }
}

impl From<io::Error> for AppError {
    fn from(err: io::Error) -> Self {
        AppError::Io(err)
    }
}

impl From<LexicalError> for AppError {
    fn from(err: LexicalError) -> Self {
        AppError::Lexical(err)
    }
}

impl From<SyntaxError> for AppError {
    fn from(err: SyntaxError) -> Self {
        AppError::Syntax(err)
    }
}

impl From<EvalError> for AppError {
    fn from(err: EvalError) -> Self {
        AppError::Eval(err)
    }
}

impl From<exprtree_lib::Error> for AppError {
    fn from(err: exprtree_lib::Error) -> Self {
        match err {
            exprtree_lib::Error::Lexical(err) => AppError::Lexical(err),
            exprtree_lib::Error::Syntax(err) => AppError::Syntax(err),
            exprtree_lib::Error::Eval(err) => AppError::Eval(err),
        }
    }
}

impl From<String> for AppError {
    fn from(msg: String) -> Self {
        AppError::Generic(msg)
    }
}

impl From<&str> for AppError {
    fn from(msg: &str) -> Self {
        AppError::Generic(msg.to_string())
    }
}
