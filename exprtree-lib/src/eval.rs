//! Arithmetic evaluation of parsed expressions.
//!
//! Integer operands stay integers for `+`, `-` and `*`; a float on either side
//! promotes the operation to floating point. Division always produces a float.

use crate::syntax::{BinaryOperator, Node, Number};
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum EvalError {
    DivisionByZero,
    Overflow { operator: BinaryOperator },
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EvalError::DivisionByZero => write!(f, "Evaluation error: division by zero"),
            EvalError::Overflow { operator } => {
                write!(f, "Evaluation error: integer overflow in '{operator}'")
            }
        }
    }
}

impl std::error::Error for EvalError {}

enum Step<'a> {
    Visit(&'a Node),
    Apply(BinaryOperator),
}

pub fn evaluate(node: &Node) -> Result<Number, EvalError> {
    let mut steps = vec![Step::Visit(node)];
    let mut values: Vec<Number> = Vec::new();

    while let Some(step) = steps.pop() {
        match step {
            Step::Visit(Node::Literal { value }) => values.push(*value),
            Step::Visit(Node::BinaryOp {
                operator,
                left,
                right,
            }) => {
                steps.push(Step::Apply(*operator));
                steps.push(Step::Visit(right.as_ref()));
                steps.push(Step::Visit(left.as_ref()));
            }
            Step::Apply(operator) => {
                let rhs = values.pop();
                let lhs = values.pop();
                match (lhs, rhs) {
                    (Some(lhs), Some(rhs)) => values.push(apply(operator, lhs, rhs)?),
                    _ => unreachable!("both operands are evaluated before their operator"),
                }
            }
        }
    }

    match values.pop() {
        Some(result) => Ok(result),
        None => unreachable!("a tree always yields a value"),
    }
}

pub fn apply(operator: BinaryOperator, lhs: Number, rhs: Number) -> Result<Number, EvalError> {
    if operator == BinaryOperator::Div {
        if rhs.is_zero() {
            return Err(EvalError::DivisionByZero);
        }
        return Ok(Number::Float(lhs.as_f64() / rhs.as_f64()));
    }

    match (lhs, rhs) {
        (Number::Int(a), Number::Int(b)) => {
            let result = match operator {
                BinaryOperator::Add => a.checked_add(b),
                BinaryOperator::Sub => a.checked_sub(b),
                BinaryOperator::Mul => a.checked_mul(b),
                BinaryOperator::Div => unreachable!("division handled above"),
            };
            result
                .map(Number::Int)
                .ok_or(EvalError::Overflow { operator })
        }
        (lhs, rhs) => {
            let (a, b) = (lhs.as_f64(), rhs.as_f64());
            let result = match operator {
                BinaryOperator::Add => a + b,
                BinaryOperator::Sub => a - b,
                BinaryOperator::Mul => a * b,
                BinaryOperator::Div => a / b,
            };
            Ok(Number::Float(result))
        }
    }
}
