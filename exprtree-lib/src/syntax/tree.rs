use super::ast::Node;

const INDENT_STEP: usize = 4;

/// Renders the tree one node per line, children indented under their parent.
pub fn render_tree(node: &Node) -> String {
    let mut out = String::new();
    let mut pending = vec![(node, 0usize)];
    while let Some((node, indent)) = pending.pop() {
        out.push_str(&" ".repeat(indent));
        match node {
            Node::Literal { value } => out.push_str(&value.to_string()),
            Node::BinaryOp {
                operator,
                left,
                right,
            } => {
                out.push_str(operator.symbol());
                pending.push((right.as_ref(), indent + INDENT_STEP));
                pending.push((left.as_ref(), indent + INDENT_STEP));
            }
        }
        out.push('\n');
    }
    out
}
