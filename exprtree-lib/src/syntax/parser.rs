//! Parser for arithmetic expressions.
//!
//! ```text
//! expression := term (('+' | '-') term)*
//! term       := factor (('*' | '/') factor)*
//! factor     := NUMBER | '(' expression ')'
//! ```
//!
//! Each precedence level folds its operands left to right, so `10 - 3 - 2`
//! groups as `(10 - 3) - 2`. Open parentheses are kept on an explicit stack
//! of groups instead of the call stack, so neither operator chains nor
//! nesting depth are limited by recursion.

use super::{
    ast::{BinaryOperator, Node},
    error::SyntaxError,
    keywords::{DELIM_LPAREN, DELIM_RPAREN},
    reader::{expect, TokenReader},
    token::{Token, TokenType},
};

/// Parses a complete token stream into a single expression tree.
///
/// Tokens left over after the expression are rejected.
pub fn parse(tokens: &[Token]) -> Result<Node, SyntaxError> {
    let mut parser = ExpressionParser {
        r: TokenReader::new(tokens),
        open: Vec::new(),
    };
    let node = parser.parse_expression()?;
    if let Some(tok) = parser.r.cur() {
        return Err(SyntaxError::at_token(
            "expected an operator or end of input".into(),
            tok,
        ));
    }
    Ok(node)
}

/// Operands waiting for their right-hand side inside one parenthesized group.
#[derive(Default)]
struct Group {
    sum: Option<(Node, BinaryOperator)>,
    product: Option<(Node, BinaryOperator)>,
}

struct ExpressionParser<'a> {
    r: TokenReader<'a>,
    open: Vec<Group>,
}

impl ExpressionParser<'_> {
    fn parse_expression(&mut self) -> Result<Node, SyntaxError> {
        let mut group = Group::default();
        loop {
            let mut operand = match self.parse_factor()? {
                Some(literal) => literal,
                None => {
                    self.open.push(std::mem::take(&mut group));
                    continue;
                }
            };

            loop {
                if let Some((left, op)) = group.product.take() {
                    operand = Node::binary(op, left, operand);
                }
                if let Some(op) = self.binary_operator(&[BinaryOperator::Mul, BinaryOperator::Div]) {
                    self.r.advance();
                    group.product = Some((operand, op));
                    break;
                }

                if let Some((left, op)) = group.sum.take() {
                    operand = Node::binary(op, left, operand);
                }
                if let Some(op) = self.binary_operator(&[BinaryOperator::Add, BinaryOperator::Sub]) {
                    self.r.advance();
                    group.sum = Some((operand, op));
                    break;
                }

                // The group is complete; it becomes a factor of the enclosing one.
                let Some(outer) = self.open.pop() else {
                    return Ok(operand);
                };
                expect(
                    &self.r,
                    |t| t.is(TokenType::Delimiter, DELIM_RPAREN),
                    format!("expected '{DELIM_RPAREN}'"),
                )?;
                self.r.advance();
                group = outer;
            }
        }
    }

    /// Consumes a number and returns it as a literal, or consumes `(` and
    /// returns `None` to open a new group.
    fn parse_factor(&mut self) -> Result<Option<Node>, SyntaxError> {
        let tok = expect(
            &self.r,
            |t| t.token_type == TokenType::Number || t.is(TokenType::Delimiter, DELIM_LPAREN),
            "expected a number or '('",
        )?;
        self.r.advance();
        Ok(tok.number().map(Node::literal))
    }

    /// The current token as one of `allowed`, if it is one.
    fn binary_operator(&self, allowed: &[BinaryOperator]) -> Option<BinaryOperator> {
        let tok = self.r.cur()?;
        if tok.token_type != TokenType::Operator {
            return None;
        }
        BinaryOperator::from_symbol(&tok.lexeme).filter(|op| allowed.contains(op))
    }
}
