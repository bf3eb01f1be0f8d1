pub const KW_IF: &str = "if";
pub const KW_ELIF: &str = "elif";
pub const KW_ELSE: &str = "else";
pub const KW_FOR: &str = "for";
pub const KW_RANGE: &str = "range";
pub const KW_IN: &str = "in";
pub const KW_WHILE: &str = "while";
pub const KW_RETURN: &str = "return";
pub const KW_BREAK: &str = "break";
pub const KW_FUNCTION: &str = "function";
pub const KW_INT: &str = "int";
pub const KW_DOUBLE: &str = "double";
pub const KW_FLOAT: &str = "float";
pub const KW_IMPORT: &str = "import";
pub const KW_INPUT: &str = "input";
pub const KW_PRINT: &str = "print";
pub const ALL_KEYWORDS: &[&str] = &[
    KW_IF, KW_ELIF, KW_ELSE, KW_FOR, KW_RANGE, KW_IN, KW_WHILE, KW_RETURN, KW_BREAK, KW_FUNCTION,
    KW_INT, KW_DOUBLE, KW_FLOAT, KW_IMPORT, KW_INPUT, KW_PRINT,
];

pub const DELIM_LPAREN: &str = "(";
pub const DELIM_RPAREN: &str = ")";

pub const OP_ADD: &str = "+";
pub const OP_SUB: &str = "-";
pub const OP_MUL: &str = "*";
pub const OP_DIV: &str = "/";
pub const OP_MOD: &str = "%";
pub const ALL_OPERATORS: &[&str] = &[OP_ADD, OP_SUB, OP_MUL, OP_DIV, OP_MOD];

pub fn is_keyword(word: &str) -> bool {
    ALL_KEYWORDS.contains(&word)
}
