//! Parse a formula and report what a generator would see

use serde_json::Value;

use super::CliError;
use crate::output::{counts_to_json, node_to_json, to_json, to_json_pretty, tokens_to_json};
use crate::{ExpressionError, MappedContext, collect_calls, collect_vars, parse, tokenize};

/// Options for the check command
#[derive(Debug, Clone, Default)]
pub struct CheckOptions {
    /// The formula to check
    pub formula: String,
    /// Variable renames, `(name, code)`
    pub variables: Vec<(String, String)>,
    /// Function renames, `(name, code)`
    pub functions: Vec<(String, String)>,
    /// Appended to every rendered number
    pub immediate_suffix: String,
    /// Include the token list
    pub tokens: bool,
    /// Include the tree as JSON
    pub json: bool,
    /// Include variable and call counts
    pub collect: bool,
}

/// Result of a successful check
#[derive(Debug, Clone, PartialEq)]
pub struct CheckReport {
    /// The formula rendered with the configured context
    pub code: String,
    pub tokens: Option<Value>,
    pub ast: Option<Value>,
    pub vars: Option<Value>,
    pub calls: Option<Value>,
}

impl CheckReport {
    /// Human-readable report: the rendered code first, then each requested section.
    pub fn to_text(&self, pretty: bool) -> String {
        let dump = |value: &Value| {
            if pretty {
                to_json_pretty(value)
            } else {
                to_json(value)
            }
        };

        let mut out = self.code.clone();
        let sections = [
            ("tokens", &self.tokens),
            ("ast", &self.ast),
            ("vars", &self.vars),
            ("calls", &self.calls),
        ];
        for (label, section) in sections {
            if let Some(value) = section {
                out.push_str(&format!("\n{label}: {}", dump(value)));
            }
        }
        out
    }
}

/// Split a `NAME=TEXT` command-line mapping.
pub fn parse_assignment(s: &str) -> Result<(String, String), CliError> {
    match s.split_once('=') {
        Some((name, code)) if !name.is_empty() => Ok((name.to_string(), code.to_string())),
        _ => Err(CliError::InvalidMapping(s.to_string())),
    }
}

/// Error message plus the formula with a caret under the offending offset.
pub fn format_error(formula: &str, error: &ExpressionError) -> String {
    match error.position {
        Some(position) => format!(
            "error: {error}\n  {formula}\n  {}^",
            " ".repeat(formula[..position.min(formula.len())].chars().count())
        ),
        None => format!("error: {error}"),
    }
}

/// Execute a bitexp check operation
pub fn execute_check(options: &CheckOptions) -> Result<CheckReport, CliError> {
    let formula = options.formula.trim_end_matches(['\n', '\r']);
    let tree = parse(formula)?;

    let mut ctx = MappedContext::new().with_immediate_suffix(options.immediate_suffix.as_str());
    for (name, code) in &options.variables {
        ctx = ctx.with_variable(name.as_str(), code.as_str());
    }
    for (name, code) in &options.functions {
        ctx = ctx.with_function(name.as_str(), code.as_str());
    }

    let tokens = if options.tokens {
        Some(tokens_to_json(&tokenize(formula)?))
    } else {
        None
    };

    Ok(CheckReport {
        code: tree.render(&ctx),
        tokens,
        ast: options.json.then(|| node_to_json(&tree)),
        vars: options.collect.then(|| counts_to_json(&collect_vars(&tree))),
        calls: options.collect.then(|| counts_to_json(&collect_calls(&tree))),
    })
}
