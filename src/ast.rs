//! # bitexp - Abstract Syntax Tree
//!
//! This module defines the tokens and tree nodes of the bitexp formula language, the
//! small expression language instruction-encoding tables use to describe how operand
//! values map onto opcode bits.
//!
//! ## Architecture Overview
//!
//! - **[operators]** - Operator tables (precedence, associativity, emit templates)
//! - **[tokens]** - Lexical tokens produced by the lexer
//! - **[nodes]** - The five node kinds of a parsed formula
//! - **[build]** - Shorthand constructors for building trees in code
//!
//! ## Quick Start
//!
//! ```text
//! relS[19] ^ relS[18] ^ 1
//! ```
//!
//! This formula xors bits 19 and 18 of `relS` and flips the result.
//!
//! ## Core Concepts
//!
//! ### Bit Access
//!
//! `name[index]` extracts a single bit and is sugar for a call to the reserved
//! function `$bit`:
//!
//! ```text
//! off[4]  →  $bit(off, 4)  →  ((off >> 4) & 1)
//! ```
//!
//! ### Operators
//!
//! Tightest to loosest: unary `- ~ !`, `* / %`, `+ -`, `<< >>`, `< > <= >=`,
//! `== !=`, `&`, `^`, `|`, `&&`, `||`, and the right-associative ternary `?:`.
//!
//! ### Ternary
//!
//! `c ? t : f` is stored as two binary nodes, `Cond(c, Else(t, f))`, so the tree
//! keeps exactly five node kinds.
pub mod build;
pub mod nodes;
pub mod operators;
pub mod tokens;

pub use nodes::{BIT_CALL, Node, NodeKind};
pub use operators::{BinaryOp, MAX_OPERATOR_LEN, OperatorInfo, UnaryOp, is_operator_symbol};
pub use tokens::{Token, TokenKind};
