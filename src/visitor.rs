//! Tree traversal and occurrence counting.
//!
//! ```
//! use bitexp::{collect_calls, collect_vars, parse};
//!
//! let tree = parse("a + a * f(a, b)").unwrap();
//! let vars = collect_vars(&tree);
//! assert_eq!(vars["a"], 3);
//! assert_eq!(vars["b"], 1);
//! assert_eq!(collect_calls(&tree)["f"], 1);
//! ```

use std::collections::BTreeMap;

use crate::ast::{Node, NodeKind};

/// Name to number of occurrences.
pub type Counts = BTreeMap<String, usize>;

/// A tree walker. Override [`Visitor::visit`] to act on nodes and call [`walk`] to
/// continue into the children.
pub trait Visitor {
    fn visit(&mut self, node: &Node) {
        walk(self, node);
    }
}

/// Visits the children of `node`: call arguments in order, the unary operand, or the
/// left then right side of a binary operation.
pub fn walk<V: Visitor + ?Sized>(visitor: &mut V, node: &Node) {
    match node {
        Node::Imm(_) | Node::Var(_) => {}
        Node::Call { args, .. } => {
            for arg in args {
                visitor.visit(arg);
            }
        }
        Node::Unary { child, .. } => visitor.visit(child),
        Node::Binary { left, right, .. } => {
            visitor.visit(left);
            visitor.visit(right);
        }
    }
}

/// Counts the names of all nodes of one kind (variables or calls).
pub struct Collector<'a> {
    kind: NodeKind,
    counts: &'a mut Counts,
}

impl<'a> Collector<'a> {
    pub fn new(kind: NodeKind, counts: &'a mut Counts) -> Self {
        Collector { kind, counts }
    }
}

impl Visitor for Collector<'_> {
    fn visit(&mut self, node: &Node) {
        walk(self, node);

        if node.kind() == self.kind
            && let Some(name) = node.name()
        {
            *self.counts.entry(name.to_string()).or_insert(0) += 1;
        }
    }
}

/// Variable name occurrence counts.
pub fn collect_vars(node: &Node) -> Counts {
    let mut counts = Counts::new();
    collect_vars_into(node, &mut counts);
    counts
}

/// Call name occurrence counts. Bit access counts as a call to `$bit`.
pub fn collect_calls(node: &Node) -> Counts {
    let mut counts = Counts::new();
    collect_calls_into(node, &mut counts);
    counts
}

/// Adds this tree's variable counts to `counts`.
pub fn collect_vars_into(node: &Node, counts: &mut Counts) {
    Collector::new(NodeKind::Var, counts).visit(node);
}

/// Adds this tree's call counts to `counts`.
pub fn collect_calls_into(node: &Node, counts: &mut Counts) {
    Collector::new(NodeKind::Call, counts).visit(node);
}
