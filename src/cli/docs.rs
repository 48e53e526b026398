//! Documentation content for the bitexp CLI

use super::CliError;
use crate::ast::{BinaryOp, UnaryOp};

/// Available documentation topics
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocTopic {
    Syntax,
    Operators,
    Rendering,
}

impl DocTopic {
    /// Parse topic name from string
    pub fn from_name(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "syntax" => Some(Self::Syntax),
            "operators" | "ops" => Some(Self::Operators),
            "rendering" | "render" | "codegen" => Some(Self::Rendering),
            _ => None,
        }
    }
}

/// Get the docs overview (topic listing)
pub fn get_docs_overview() -> &'static str {
    r#"BITEXP DOCUMENTATION

bitexp formulas describe how instruction operands map onto opcode bits. They are
parsed into a tree and re-rendered as code; they are never evaluated.

DOCUMENTATION TOPICS

  syntax            Literals, identifiers, calls, and bit access
  operators         Operator table with precedence and associativity
  rendering         How formulas are turned into target code

QUICK REFERENCE

  19, 0.5, 1e3      Numbers
  relS              Variable
  ImmA(immA)        Function call
  off[4]            Bit 4 of off, rendered ((off >> 4) & 1)
  c ? t : f         Ternary

Run 'bitexp doc <topic>' for detailed documentation.
"#
}

/// Get documentation for a specific topic
pub fn get_doc_topic(name: &str) -> Result<String, CliError> {
    match DocTopic::from_name(name) {
        Some(DocTopic::Syntax) => Ok(SYNTAX_DOC.to_string()),
        Some(DocTopic::Operators) => Ok(operators_doc()),
        Some(DocTopic::Rendering) => Ok(RENDERING_DOC.to_string()),
        None => Err(CliError::UnknownTopic(name.to_string())),
    }
}

/// Built from the operator tables so it cannot drift from the parser.
fn operators_doc() -> String {
    let mut doc = String::from(
        "OPERATORS - lower precedence binds tighter\n\n  SYMBOL  PRECEDENCE  ASSOCIATIVITY\n",
    );
    let unary = UnaryOp::ALL.iter().map(|op| (op.symbol(), op.info(), "prefix"));
    let binary = BinaryOp::ALL.iter().map(|op| {
        let info = op.info();
        (op.symbol(), info, if info.right_assoc { "right" } else { "left" })
    });
    for (symbol, info, assoc) in unary.chain(binary) {
        doc.push_str(&format!("  {symbol:<6}  {:<10}  {assoc}\n", info.precedence));
    }
    doc.push_str("\n  '?' and ':' always appear together as c ? t : f.\n");
    doc
}

const SYNTAX_DOC: &str = r#"SYNTAX

NUMBERS
  19   0.5   .5   1e3   2.5E-1
    Always non-negative; write -1 as the unary minus applied to 1.

IDENTIFIERS
  relS   immA   _tmp0
    A letter or underscore, then letters, digits, or underscores.

CALLS
  ImmA(immA)   f()   g(a, b + 1)
    Zero or more comma-separated arguments.

BIT ACCESS
  off[4]
    Bit 4 of off. The index must be an integer literal.

GROUPING
  (a + b) * c
"#;

const RENDERING_DOC: &str = r#"RENDERING

Every binary operation is wrapped in parentheses, so the output never depends on
the target language's precedence rules:

  1 + 2 * 3            =>  (1 + (2 * 3))
  relS[19] ^ 1         =>  (((relS >> 19) & 1) ^ 1)
  a ? b : c            =>  (a ? b : c)

Names and numbers can be remapped:

  bitexp check 'relS[19] ^ 1' --var relS=off --imm-suffix u
  =>  (((off >> 19u) & 1) ^ 1u)
"#;
