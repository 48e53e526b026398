use crate::ast::Node;

/// Return a copy of `node` with variables rewritten by `f`.
///
/// `f` is called for every variable; `Some(replacement)` splices the replacement in,
/// `None` keeps the variable. The input tree is left untouched.
///
/// # Examples
/// ```
/// use bitexp::{parse, transform::map_vars, Node};
///
/// let tree = parse("off + x").unwrap();
/// let upper = map_vars(&tree, &mut |name| Some(Node::var(name.to_uppercase())));
/// assert_eq!(upper.to_string(), "(OFF + X)");
/// ```
pub fn map_vars<F>(node: &Node, f: &mut F) -> Node
where
    F: FnMut(&str) -> Option<Node>,
{
    match node {
        Node::Imm(_) => node.clone(),
        Node::Var(name) => f(name).unwrap_or_else(|| node.clone()),
        Node::Call { name, args } => Node::Call {
            name: name.clone(),
            args: args.iter().map(|arg| map_vars(arg, f)).collect(),
        },
        Node::Unary { op, child } => Node::unary(*op, map_vars(child, f)),
        Node::Binary { op, left, right } => {
            let left = map_vars(left, f);
            let right = map_vars(right, f);
            Node::binary(*op, left, right)
        }
    }
}

/// Replace every `Var(name)` with a copy of `replacement`.
///
/// # Examples
/// ```
/// use bitexp::{parse, transform::substitute_var};
///
/// // A driver splicing its own offset expression in before rendering
/// let tree = parse("off >> 2").unwrap();
/// let spliced = substitute_var(&tree, "off", &parse("disp - 8").unwrap());
/// assert_eq!(spliced.to_string(), "((disp - 8) >> 2)");
/// ```
pub fn substitute_var(node: &Node, name: &str, replacement: &Node) -> Node {
    map_vars(node, &mut |var| (var == name).then(|| replacement.clone()))
}
