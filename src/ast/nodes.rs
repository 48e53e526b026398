use crate::ast::{BinaryOp, UnaryOp};

/// Name of the reserved call produced by `name[index]` bit access.
pub const BIT_CALL: &str = "$bit";

/// Expression tree node.
///
/// Trees are plain owned values: cloning produces an independent deep copy, so a
/// caller can rewrite a clone without touching the original.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// Numeric literal
    ///
    /// # Example
    /// ```text
    /// 19
    /// ```
    Imm(f64),

    /// Variable reference
    ///
    /// # Example
    /// ```text
    /// relS
    /// ```
    Var(String),

    /// Function call
    ///
    /// `name[index]` is parsed as a call to [`BIT_CALL`] with the variable and the
    /// index as arguments.
    ///
    /// # Examples
    /// ```text
    /// ImmA(immA)
    /// off[4]        // Call("$bit", [Var("off"), Imm(4)])
    /// ```
    Call { name: String, args: Vec<Node> },

    /// Prefix operation
    ///
    /// # Example
    /// ```text
    /// ~mask
    /// ```
    Unary { op: UnaryOp, child: Box<Node> },

    /// Infix operation, including both halves of a ternary
    ///
    /// # Examples
    /// ```text
    /// a + b
    /// c ? t : f     // Binary(Cond, c, Binary(Else, t, f))
    /// ```
    Binary {
        op: BinaryOp,
        left: Box<Node>,
        right: Box<Node>,
    },
}

/// Variant tag of a [`Node`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Imm,
    Var,
    Call,
    Unary,
    Binary,
}

impl Node {
    pub fn imm(value: f64) -> Node {
        Node::Imm(value)
    }

    pub fn var(name: impl Into<String>) -> Node {
        Node::Var(name.into())
    }

    pub fn call(name: impl Into<String>, args: Vec<Node>) -> Node {
        Node::Call {
            name: name.into(),
            args,
        }
    }

    /// Single-bit extraction, the tree behind `name[index]`.
    pub fn bit(name: impl Into<String>, index: u32) -> Node {
        Node::call(BIT_CALL, vec![Node::var(name), Node::imm(f64::from(index))])
    }

    pub fn unary(op: UnaryOp, child: Node) -> Node {
        Node::Unary {
            op,
            child: Box::new(child),
        }
    }

    pub fn binary(op: BinaryOp, left: Node, right: Node) -> Node {
        Node::Binary {
            op,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    /// `cond ? taken : not_taken`
    pub fn ternary(cond: Node, taken: Node, not_taken: Node) -> Node {
        Node::binary(
            BinaryOp::Cond,
            cond,
            Node::binary(BinaryOp::Else, taken, not_taken),
        )
    }

    pub fn kind(&self) -> NodeKind {
        match self {
            Node::Imm(_) => NodeKind::Imm,
            Node::Var(_) => NodeKind::Var,
            Node::Call { .. } => NodeKind::Call,
            Node::Unary { .. } => NodeKind::Unary,
            Node::Binary { .. } => NodeKind::Binary,
        }
    }

    pub fn is_operator(&self) -> bool {
        matches!(self, Node::Unary { .. } | Node::Binary { .. })
    }

    /// Precedence of the operator at the root, `None` for operands.
    pub fn precedence(&self) -> Option<u8> {
        match self {
            Node::Unary { op, .. } => Some(op.info().precedence),
            Node::Binary { op, .. } => Some(op.info().precedence),
            Node::Imm(_) | Node::Var(_) | Node::Call { .. } => None,
        }
    }

    /// Name of a variable or call, `None` for other nodes.
    pub fn name(&self) -> Option<&str> {
        match self {
            Node::Var(name) | Node::Call { name, .. } => Some(name),
            _ => None,
        }
    }
}
