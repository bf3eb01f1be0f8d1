use super::{
    ast::Number,
    error::{LexicalError, LexicalErrorKind},
    keywords::{is_keyword, ALL_OPERATORS},
    token::{Token, TokenType, TokenValue},
};
use lazy_static::lazy_static;
use regex::Regex;

/// What a pattern in the table produces when it matches.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Rule {
    Emit(TokenType),
    Newline,
    Skip,
}

lazy_static! {
    // Order is priority: the first pattern matching at the cursor wins.
    static ref TOKEN_PATTERNS: Vec<(Regex, Rule)> = vec![
        (
            Regex::new(r"^\d+(\.\d*)?").unwrap(),
            Rule::Emit(TokenType::Number)
        ),
        (
            Regex::new(r#"^["=(){}:;,.#]"#).unwrap(),
            Rule::Emit(TokenType::Delimiter)
        ),
        (
            Regex::new(r"^[A-Za-z_]\w*").unwrap(),
            Rule::Emit(TokenType::Identifier)
        ),
        (
            Regex::new(&operator_pattern()).unwrap(),
            Rule::Emit(TokenType::Operator)
        ),
        (Regex::new(r"^\n").unwrap(), Rule::Newline),
        (Regex::new(r"^[ \t]+").unwrap(), Rule::Skip),
    ];
    static ref DECIMAL_DIGIT: Regex = Regex::new(r"^\d$").unwrap();
}

fn operator_pattern() -> String {
    let alternatives: Vec<String> = ALL_OPERATORS.iter().map(|op| regex::escape(op)).collect();
    format!("^(?:{})", alternatives.join("|"))
}

/// Splits `input` into classified tokens.
///
/// Whitespace and newlines are consumed without producing tokens. The first
/// character that no pattern accepts aborts the whole pass.
pub fn tokenize(input: &str) -> Result<Vec<Token>, LexicalError> {
    let mut tokens = Vec::new();
    let mut position = 0;
    let mut line = 1;
    let mut column = 0;
    let mut remaining = input;

    while !remaining.is_empty() {
        let matched = TOKEN_PATTERNS
            .iter()
            .find_map(|(pattern, rule)| pattern.find(remaining).map(|mat| (mat.len(), *rule)));

        let Some((len, rule)) = matched else {
            let ch = remaining.chars().next().unwrap_or_default();
            return Err(LexicalError::new(
                LexicalErrorKind::UnexpectedCharacter(ch),
                line,
                column,
                position..position + ch.len_utf8(),
            ));
        };

        let lexeme = &remaining[..len];
        let span = position..position + len;
        match rule {
            Rule::Newline => {
                line += 1;
                column = 0;
            }
            Rule::Skip => {
                column += lexeme.chars().count();
            }
            Rule::Emit(token_type) => {
                let token = make_token(token_type, lexeme, line, column, span)?;
                column += lexeme.chars().count();
                tokens.push(token);
            }
        }
        position += len;
        remaining = &remaining[len..];
    }
    Ok(tokens)
}

fn make_token(
    token_type: TokenType,
    lexeme: &str,
    line: usize,
    column: usize,
    span: std::ops::Range<usize>,
) -> Result<Token, LexicalError> {
    let (token_type, value) = match token_type {
        TokenType::Number => {
            let number = decode_number(lexeme).ok_or_else(|| {
                LexicalError::new(
                    LexicalErrorKind::NumberOutOfRange(lexeme.to_string()),
                    line,
                    column,
                    span.clone(),
                )
            })?;
            (TokenType::Number, TokenValue::Number(number))
        }
        TokenType::Identifier if is_keyword(lexeme) => {
            (TokenType::Keyword, TokenValue::Text(lexeme.to_string()))
        }
        other => (other, TokenValue::Text(lexeme.to_string())),
    };
    Ok(Token {
        token_type,
        value,
        lexeme: lexeme.to_string(),
        line,
        column,
        span,
    })
}

fn decode_number(lexeme: &str) -> Option<Number> {
    let ascii: String = lexeme
        .chars()
        .map(|ch| match ch {
            '.' => Some('.'),
            _ => digit_value(ch).and_then(|d| char::from_digit(d, 10)),
        })
        .collect::<Option<String>>()?;
    if ascii.contains('.') {
        ascii.parse::<f64>().ok().map(Number::Float)
    } else {
        ascii.parse::<i64>().ok().map(Number::Int)
    }
}

fn is_decimal_digit(ch: char) -> bool {
    let mut buf = [0u8; 4];
    DECIMAL_DIGIT.is_match(ch.encode_utf8(&mut buf))
}

/// Value of a decimal digit from any script.
///
/// Unicode encodes every decimal digit set as contiguous runs of ten starting
/// at zero, so the value is the distance from the start of the run, mod 10.
fn digit_value(ch: char) -> Option<u32> {
    if let Some(d) = ch.to_digit(10) {
        return Some(d);
    }
    if !is_decimal_digit(ch) {
        return None;
    }
    let mut offset = 0;
    let mut code = ch as u32;
    while let Some(prev) = code
        .checked_sub(1)
        .and_then(char::from_u32)
        .filter(|c| is_decimal_digit(*c))
    {
        offset += 1;
        code = prev as u32;
    }
    Some(offset % 10)
}
