//! bitexp parses the small bit-manipulation formulas found in instruction-encoding
//! tables (`relS[19] ^ relS[18] ^ 1`, `ImmA(immA)`), lets callers inspect which
//! variables and functions they reference, and re-renders them as code for another
//! language. Formulas are never evaluated.
//!
//! ```
//! use bitexp::{MappedContext, collect_vars, parse};
//!
//! let tree = parse("relS[19] ^ relS[18] ^ 1").unwrap();
//! assert_eq!(collect_vars(&tree)["relS"], 2);
//!
//! let ctx = MappedContext::new().with_variable("relS", "off");
//! assert_eq!(tree.render(&ctx), "((((off >> 19) & 1) ^ ((off >> 18) & 1)) ^ 1)");
//! ```
pub mod ast;
#[cfg(feature = "cli")]
pub mod cli;
pub mod error;
pub mod lexer;
pub mod output;
pub mod parser;
pub mod render;
pub mod transform;
pub mod visitor;

pub use ast::{BinaryOp, Node, NodeKind, Token, TokenKind, UnaryOp};
pub use error::{ErrorKind, ExpressionError, Result};
pub use lexer::{Lexer, tokenize};
pub use parser::{Parser, parse};
pub use render::{LiteralContext, MappedContext, RenderContext};
pub use visitor::{
    Collector, Counts, Visitor, collect_calls, collect_calls_into, collect_vars,
    collect_vars_into, walk,
};
