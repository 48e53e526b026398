//! JSON dumps of trees, tokens and occurrence counts.
//!
//! These are debugging views: the shapes are stable enough for tests and tooling
//! but are not an interchange format.
//!
//! # Examples
//!
//! ```
//! use bitexp::output::{node_to_json, to_json};
//! use bitexp::parse;
//!
//! let tree = parse("x[3]").unwrap();
//! assert_eq!(
//!     to_json(&node_to_json(&tree)),
//!     r#"{"args":[{"name":"x","type":"var"},{"type":"imm","value":3}],"name":"$bit","type":"call"}"#
//! );
//! ```

use serde_json::{Map, Value, json};

use crate::ast::{Node, Token, TokenKind};
use crate::visitor::Counts;

/// Largest magnitude below which every integer is exactly representable in f64.
const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_992.0;

/// Whole numbers are written as JSON integers (`3`, not `3.0`).
fn number(value: f64) -> Value {
    if value.fract() == 0.0 && value.abs() < MAX_EXACT_INTEGER {
        Value::from(value as i64)
    } else {
        serde_json::Number::from_f64(value)
            .map(Value::Number)
            .unwrap_or(Value::Null)
    }
}

pub fn node_to_json(node: &Node) -> Value {
    match node {
        Node::Imm(value) => json!({ "type": "imm", "value": number(*value) }),
        Node::Var(name) => json!({ "type": "var", "name": name }),
        Node::Call { name, args } => json!({
            "type": "call",
            "name": name,
            "args": args.iter().map(node_to_json).collect::<Vec<_>>(),
        }),
        Node::Unary { op, child } => json!({
            "type": "unary",
            "op": op.symbol(),
            "child": node_to_json(child),
        }),
        Node::Binary { op, left, right } => json!({
            "type": "binary",
            "op": op.symbol(),
            "left": node_to_json(left),
            "right": node_to_json(right),
        }),
    }
}

fn kind_name(kind: TokenKind) -> &'static str {
    match kind {
        TokenKind::Value => "value",
        TokenKind::Identifier => "identifier",
        TokenKind::Punctuation => "punctuation",
        TokenKind::End => "end",
    }
}

pub fn tokens_to_json(tokens: &[Token]) -> Value {
    Value::Array(
        tokens
            .iter()
            .map(|token| {
                let mut obj = Map::new();
                obj.insert("kind".into(), kind_name(token.kind).into());
                obj.insert("position".into(), token.position.into());
                obj.insert("text".into(), token.text.clone().into());
                if let Some(value) = token.value {
                    obj.insert("value".into(), number(value));
                }
                Value::Object(obj)
            })
            .collect(),
    )
}

pub fn counts_to_json(counts: &Counts) -> Value {
    Value::Object(
        counts
            .iter()
            .map(|(name, count)| (name.clone(), Value::from(*count)))
            .collect(),
    )
}

/// Compact JSON text.
pub fn to_json(value: &Value) -> String {
    value.to_string()
}

/// JSON text with 2-space indentation.
pub fn to_json_pretty(value: &Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
}
