// tests/output_tests.rs

use bitexp::output::{counts_to_json, node_to_json, to_json, to_json_pretty, tokens_to_json};
use bitexp::{collect_vars, parse, tokenize};
use serde_json::json;

#[test]
fn test_node_json_shapes() {
    let tree = parse("-a + f(0.5)").unwrap();
    assert_eq!(
        node_to_json(&tree),
        json!({
            "type": "binary",
            "op": "+",
            "left": { "type": "unary", "op": "-", "child": { "type": "var", "name": "a" } },
            "right": { "type": "call", "name": "f", "args": [{ "type": "imm", "value": 0.5 }] },
        })
    );
}

#[test]
fn test_whole_numbers_are_integers() {
    let value = node_to_json(&parse("19").unwrap());
    assert_eq!(to_json(&value), r#"{"type":"imm","value":19}"#);
}

#[test]
fn test_ternary_json() {
    let value = node_to_json(&parse("c ? 1 : 2").unwrap());
    assert_eq!(value["op"], "?");
    assert_eq!(value["right"]["op"], ":");
    assert_eq!(value["right"]["right"]["value"], 2);
}

#[test]
fn test_tokens_json() {
    let value = tokens_to_json(&tokenize("x[3]").unwrap());
    assert_eq!(
        value,
        json!([
            { "kind": "identifier", "position": 0, "text": "x" },
            { "kind": "punctuation", "position": 1, "text": "[" },
            { "kind": "value", "position": 2, "text": "3", "value": 3 },
            { "kind": "punctuation", "position": 3, "text": "]" },
        ])
    );
}

#[test]
fn test_counts_json() {
    let counts = collect_vars(&parse("b + a + b").unwrap());
    assert_eq!(to_json(&counts_to_json(&counts)), r#"{"a":1,"b":2}"#);
}

#[test]
fn test_pretty_output() {
    let value = json!({ "a": 1 });
    assert_eq!(to_json_pretty(&value), "{\n  \"a\": 1\n}");
}
