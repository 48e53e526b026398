//! Code generation: turning a tree back into source text for a target language.
//!
//! The output is conservatively parenthesised rather than minimal: every binary
//! operation is wrapped in its own parentheses, and unary operands that are
//! themselves unary operations are wrapped too.
//!
//! ```
//! use bitexp::{MappedContext, parse};
//!
//! let tree = parse("relS[19] ^ relS[18] ^ 1").unwrap();
//! let ctx = MappedContext::new().with_variable("relS", "off");
//! assert_eq!(
//!     tree.render(&ctx),
//!     "((((off >> 19) & 1) ^ ((off >> 18) & 1)) ^ 1)"
//! );
//! ```

use std::collections::HashMap;
use std::fmt;

use crate::ast::{BIT_CALL, BinaryOp, Node};

/// Caller-supplied naming strategy for rendering.
///
/// Every method defaults to the literal source text, so an implementation only
/// overrides what it needs to change.
pub trait RenderContext {
    fn stringify_immediate(&self, value: f64) -> String {
        value.to_string()
    }

    fn stringify_variable(&self, name: &str) -> String {
        name.to_string()
    }

    fn stringify_function(&self, name: &str) -> String {
        name.to_string()
    }
}

/// Renders every name and number as written.
#[derive(Debug, Clone, Copy, Default)]
pub struct LiteralContext;

impl RenderContext for LiteralContext {}

/// A context driven by lookup tables.
///
/// Variables and functions found in the maps are replaced by their mapped text;
/// anything else renders literally. Immediates get `immediate_suffix` appended
/// (e.g. `"u"` for unsigned C++ literals).
#[derive(Debug, Clone, Default)]
pub struct MappedContext {
    pub variables: HashMap<String, String>,
    pub functions: HashMap<String, String>,
    pub immediate_suffix: String,
}

impl MappedContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_variable(mut self, name: impl Into<String>, code: impl Into<String>) -> Self {
        self.variables.insert(name.into(), code.into());
        self
    }

    pub fn with_function(mut self, name: impl Into<String>, code: impl Into<String>) -> Self {
        self.functions.insert(name.into(), code.into());
        self
    }

    pub fn with_immediate_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.immediate_suffix = suffix.into();
        self
    }
}

impl RenderContext for MappedContext {
    fn stringify_immediate(&self, value: f64) -> String {
        format!("{}{}", value, self.immediate_suffix)
    }

    fn stringify_variable(&self, name: &str) -> String {
        self.variables
            .get(name)
            .cloned()
            .unwrap_or_else(|| name.to_string())
    }

    fn stringify_function(&self, name: &str) -> String {
        self.functions
            .get(name)
            .cloned()
            .unwrap_or_else(|| name.to_string())
    }
}

/// Substitutes `@1`/`@2` in an operator template in a single pass, so operand text
/// is never rescanned.
fn expand(template: &str, first: &str, second: &str) -> String {
    let mut out = String::with_capacity(template.len() + first.len() + second.len());
    let mut rest = template;
    while let Some(at) = rest.find('@') {
        out.push_str(&rest[..at]);
        match rest.as_bytes().get(at + 1) {
            Some(b'1') => out.push_str(first),
            Some(b'2') => out.push_str(second),
            _ => {
                out.push('@');
                rest = &rest[at + 1..];
                continue;
            }
        }
        rest = &rest[at + 2..];
    }
    out.push_str(rest);
    out
}

impl Node {
    /// Renders the tree as target code using `ctx` for names and numbers.
    pub fn render<C: RenderContext + ?Sized>(&self, ctx: &C) -> String {
        match self {
            Node::Imm(value) => ctx.stringify_immediate(*value),
            Node::Var(name) => ctx.stringify_variable(name),
            Node::Call { name, args } if name == BIT_CALL && args.len() == 2 => {
                format!(
                    "(({} >> {}) & 1)",
                    args[0].render_operand(ctx),
                    args[1].render_operand(ctx)
                )
            }
            Node::Call { name, args } => {
                let args: Vec<String> = args.iter().map(|arg| arg.render(ctx)).collect();
                format!("{}({})", ctx.stringify_function(name), args.join(", "))
            }
            Node::Unary { op, child } => expand(op.info().emit, &child.render_operand(ctx), ""),
            Node::Binary { op, left, right } => {
                let code = expand(
                    op.info().emit,
                    &left.render_operand(ctx),
                    &right.render_operand(ctx),
                );
                // The `:` half sits inside its `?` parent's parentheses.
                if *op == BinaryOp::Else {
                    code
                } else {
                    format!("({code})")
                }
            }
        }
    }

    /// Renders a child of an operator; unary children get parentheses, binary
    /// children already carry their own.
    fn render_operand<C: RenderContext + ?Sized>(&self, ctx: &C) -> String {
        match self {
            Node::Unary { .. } => format!("({})", self.render(ctx)),
            _ => self.render(ctx),
        }
    }
}

/// Literal rendering, as if by [`LiteralContext`].
impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(&LiteralContext))
    }
}
