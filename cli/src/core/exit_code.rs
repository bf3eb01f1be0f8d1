use crate::core::error::AppError;

/// Process exit codes.
/// Code 2 is shared with clap's usage errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[allow(dead_code)]
pub enum ExitCode {
    /// Success
    Success = 0,
    /// General/unspecified error
    GeneralError = 1,
    /// Malformed expression
    SyntaxError = 2,
    /// Character outside the token set
    LexicalError = 3,
    /// File not found or IO error
    FileError = 4,
    /// Division by zero, overflow
    EvaluationError = 5,
}

impl ExitCode {
    pub fn code(&self) -> i32 {
        *self as i32
    }
}

impl From<&AppError> for ExitCode {
    fn from(error: &AppError) -> Self {
        match error {
            AppError::Io(_) => ExitCode::FileError,
            AppError::Lexical(_) => ExitCode::LexicalError,
            AppError::Syntax(_) => ExitCode::SyntaxError,
            AppError::Eval(_) => ExitCode::EvaluationError,
            AppError::Generic(_) => ExitCode::GeneralError,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use exprtree_lib::{calculate, tokenize};

    #[test]
    fn test_exit_code_per_error_kind() {
        let lexical = AppError::from(tokenize("1 $ 2").unwrap_err());
        assert_eq!(ExitCode::from(&lexical).code(), 3);

        let syntax = AppError::from(calculate("(1").unwrap_err());
        assert_eq!(ExitCode::from(&syntax).code(), 2);

        let eval = AppError::from(calculate("1 / 0").unwrap_err());
        assert_eq!(ExitCode::from(&eval).code(), 5);

        let io = AppError::from(std::io::Error::new(std::io::ErrorKind::NotFound, "gone"));
        assert_eq!(ExitCode::from(&io), ExitCode::FileError);

        assert_eq!(ExitCode::from(&AppError::from("boom")).code(), 1);
        assert_eq!(ExitCode::Success.code(), 0);
    }
}
