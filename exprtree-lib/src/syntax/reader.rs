use super::{
    error::{Found, SyntaxError},
    token::Token,
};

/// Cursor over a token slice.
#[derive(Debug, Clone)]
pub struct TokenReader<'a> {
    pub tokens: &'a [Token],
    pub idx: usize,
}

impl<'a> TokenReader<'a> {
    pub fn new(tokens: &'a [Token]) -> Self {
        Self { tokens, idx: 0 }
    }
    pub fn cur(&self) -> Option<&'a Token> {
        self.tokens.get(self.idx)
    }
    pub fn advance(&mut self) {
        if self.idx < self.tokens.len() {
            self.idx += 1;
        }
    }

    /// Position reported for errors at end of input: just past the last token.
    pub fn end_position(&self) -> (usize, usize) {
        self.tokens
            .last()
            .map(|t| (t.line, t.end_column()))
            .unwrap_or((1, 0))
    }

    pub fn end_of_input_error<S: Into<String>>(&self, message: S) -> SyntaxError {
        let (line, column) = self.end_position();
        SyntaxError::new(message.into(), Found::EndOfInput, line, column)
    }
}

/// Returns the current token if it satisfies `pred`, without consuming it.
pub fn expect<'a, F, S>(r: &TokenReader<'a>, pred: F, msg: S) -> Result<&'a Token, SyntaxError>
where
    F: Fn(&Token) -> bool,
    S: Into<String>,
{
    match r.cur() {
        Some(t) if pred(t) => Ok(t),
        Some(t) => Err(SyntaxError::at_token(msg.into(), t)),
        None => Err(r.end_of_input_error(msg)),
    }
}
