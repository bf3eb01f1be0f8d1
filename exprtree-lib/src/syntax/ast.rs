use super::keywords::{OP_ADD, OP_DIV, OP_MUL, OP_SUB};
use serde::Serialize;
use std::fmt;

/// A numeric value, either decoded from a literal or produced by evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Number {
    Int(i64),
    Float(f64),
}

impl Number {
    pub fn as_f64(&self) -> f64 {
        match *self {
            Number::Int(n) => n as f64,
            Number::Float(x) => x,
        }
    }

    pub fn is_zero(&self) -> bool {
        match *self {
            Number::Int(n) => n == 0,
            Number::Float(x) => x == 0.0,
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Int(n) => write!(f, "{n}"),
            // Debug keeps the fractional part: 10.0 rather than 10.
            Number::Float(x) => write!(f, "{x:?}"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum BinaryOperator {
    #[serde(rename = "+")]
    Add,
    #[serde(rename = "-")]
    Sub,
    #[serde(rename = "*")]
    Mul,
    #[serde(rename = "/")]
    Div,
}

impl BinaryOperator {
    pub fn symbol(&self) -> &'static str {
        match self {
            BinaryOperator::Add => OP_ADD,
            BinaryOperator::Sub => OP_SUB,
            BinaryOperator::Mul => OP_MUL,
            BinaryOperator::Div => OP_DIV,
        }
    }

    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            OP_ADD => Some(BinaryOperator::Add),
            OP_SUB => Some(BinaryOperator::Sub),
            OP_MUL => Some(BinaryOperator::Mul),
            OP_DIV => Some(BinaryOperator::Div),
            _ => None,
        }
    }
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Expression tree produced by the parser.
///
/// Parentheses do not survive parsing; grouping is encoded by the shape of
/// the tree. Each `BinaryOp` owns its operands.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Node {
    Literal {
        value: Number,
    },
    BinaryOp {
        operator: BinaryOperator,
        left: Box<Node>,
        right: Box<Node>,
    },
}

impl Node {
    pub fn literal(value: Number) -> Self {
        Node::Literal { value }
    }

    pub fn binary(operator: BinaryOperator, left: Node, right: Node) -> Self {
        Node::BinaryOp {
            operator,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    /// Number of nodes in the tree.
    pub fn size(&self) -> usize {
        let mut count = 0;
        let mut pending = vec![self];
        while let Some(node) = pending.pop() {
            count += 1;
            if let Node::BinaryOp { left, right, .. } = node {
                pending.push(left);
                pending.push(right);
            }
        }
        count
    }
}

// Left-deep trees from long operator chains would otherwise be dropped
// recursively, one stack frame per level.
impl Drop for Node {
    fn drop(&mut self) {
        let mut pending = Vec::new();
        detach_children(self, &mut pending);
        while let Some(mut node) = pending.pop() {
            detach_children(&mut node, &mut pending);
        }
    }
}

fn detach_children(node: &mut Node, pending: &mut Vec<Node>) {
    if let Node::BinaryOp { left, right, .. } = node {
        let leaf = || Node::literal(Number::Int(0));
        pending.push(std::mem::replace(left.as_mut(), leaf()));
        pending.push(std::mem::replace(right.as_mut(), leaf()));
    }
}
