//! Shorthand constructors for building trees in code.
//!
//! ```
//! use bitexp::ast::build::*;
//!
//! // (imm >> 2) & 0xFF
//! let tree = bit_and(shr(var("imm"), imm(2.0)), imm(255.0));
//! assert_eq!(tree.to_string(), "((imm >> 2) & 255)");
//! ```

use crate::ast::{BinaryOp, Node, UnaryOp};

pub fn imm(value: f64) -> Node {
    Node::imm(value)
}

pub fn var(name: impl Into<String>) -> Node {
    Node::var(name)
}

pub fn call(name: impl Into<String>, args: Vec<Node>) -> Node {
    Node::call(name, args)
}

pub fn bit(name: impl Into<String>, index: u32) -> Node {
    Node::bit(name, index)
}

pub fn neg(child: Node) -> Node {
    Node::unary(UnaryOp::Neg, child)
}

pub fn bit_not(child: Node) -> Node {
    Node::unary(UnaryOp::BitNot, child)
}

pub fn not(child: Node) -> Node {
    Node::unary(UnaryOp::Not, child)
}

macro_rules! binary_builders {
    ($($name:ident => $op:ident),* $(,)?) => {
        $(
            pub fn $name(left: Node, right: Node) -> Node {
                Node::binary(BinaryOp::$op, left, right)
            }
        )*
    };
}

binary_builders! {
    add => Add,
    sub => Sub,
    mul => Mul,
    div => Div,
    rem => Rem,
    shl => Shl,
    shr => Shr,
    bit_and => BitAnd,
    bit_or => BitOr,
    bit_xor => BitXor,
    eq => Eq,
    ne => Ne,
    lt => Lt,
    le => Le,
    gt => Gt,
    ge => Ge,
    and => And,
    or => Or,
}

pub fn cond(condition: Node, taken: Node, not_taken: Node) -> Node {
    Node::ternary(condition, taken, not_taken)
}
