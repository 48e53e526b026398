// tests/parser_tests.rs

use bitexp::ast::build::*;
use bitexp::ast::{BinaryOp, Node, UnaryOp};
use bitexp::error::ErrorKind;
use bitexp::lexer::tokenize;
use bitexp::parser::{MAX_DEPTH, Parser, parse};

// ============================================================================
// Primaries
// ============================================================================

#[test]
fn test_number() {
    assert_eq!(parse("19").unwrap(), Node::Imm(19.0));
    assert_eq!(parse("1.5").unwrap(), Node::Imm(1.5));
}

#[test]
fn test_variable() {
    assert_eq!(parse("relS").unwrap(), Node::Var("relS".into()));
}

#[test]
fn test_call() {
    assert_eq!(
        parse("ImmA(immA)").unwrap(),
        Node::call("ImmA", vec![Node::var("immA")])
    );
}

#[test]
fn test_call_without_arguments() {
    assert_eq!(parse("f()").unwrap(), Node::call("f", vec![]));
}

#[test]
fn test_call_with_expression_arguments() {
    let expr = parse("g(a, b + 1, h(c))").unwrap();
    assert_eq!(
        expr,
        call(
            "g",
            vec![var("a"), add(var("b"), imm(1.0)), call("h", vec![var("c")])]
        )
    );
}

#[test]
fn test_bit_access() {
    assert_eq!(
        parse("x[3]").unwrap(),
        Node::call("$bit", vec![Node::var("x"), Node::imm(3.0)])
    );
    assert_eq!(parse("x[3]").unwrap(), Node::bit("x", 3));
}

#[test]
fn test_parentheses() {
    assert_eq!(parse("((a))").unwrap(), var("a"));
    assert_eq!(
        parse("(1 + 2) * 3").unwrap(),
        mul(add(imm(1.0), imm(2.0)), imm(3.0))
    );
}

#[test]
fn test_parser_struct() {
    let source = "a + 1";
    let mut parser = Parser::new(tokenize(source).unwrap(), source.len());
    assert_eq!(parser.parse().unwrap(), add(var("a"), imm(1.0)));
}

// ============================================================================
// Unary operators
// ============================================================================

#[test]
fn test_unary_chain_is_not_folded() {
    assert_eq!(
        parse("--a").unwrap(),
        Node::unary(UnaryOp::Neg, Node::unary(UnaryOp::Neg, Node::var("a")))
    );
}

#[test]
fn test_first_unary_is_outermost() {
    assert_eq!(parse("- ~ x").unwrap(), neg(bit_not(var("x"))));
    assert_eq!(parse("!~-x").unwrap(), not(bit_not(neg(var("x")))));
}

#[test]
fn test_unary_binds_tighter_than_binary() {
    assert_eq!(parse("-a * b").unwrap(), mul(neg(var("a")), var("b")));
    assert_eq!(parse("~x[3]").unwrap(), bit_not(bit("x", 3)));
}

#[test]
fn test_unary_on_group() {
    assert_eq!(parse("!(a && b)").unwrap(), not(and(var("a"), var("b"))));
}

// ============================================================================
// Precedence
// ============================================================================

#[test]
fn test_multiplication_before_addition() {
    assert_eq!(
        parse("1 + 2 * 3").unwrap(),
        add(imm(1.0), mul(imm(2.0), imm(3.0)))
    );
    assert_eq!(
        parse("1 * 2 + 3").unwrap(),
        add(mul(imm(1.0), imm(2.0)), imm(3.0))
    );
}

#[test]
fn test_shift_between_additive_and_relational() {
    assert_eq!(
        parse("a << 1 + 2 < b").unwrap(),
        lt(shl(var("a"), add(imm(1.0), imm(2.0))), var("b"))
    );
}

#[test]
fn test_relational_before_equality() {
    assert_eq!(
        parse("a < b == c >= d").unwrap(),
        eq(lt(var("a"), var("b")), ge(var("c"), var("d")))
    );
}

#[test]
fn test_bitwise_ladder() {
    assert_eq!(
        parse("a & b ^ c | d").unwrap(),
        bit_or(bit_xor(bit_and(var("a"), var("b")), var("c")), var("d"))
    );
    assert_eq!(
        parse("a | b ^ c & d").unwrap(),
        bit_or(var("a"), bit_xor(var("b"), bit_and(var("c"), var("d"))))
    );
}

#[test]
fn test_logical_ladder() {
    assert_eq!(
        parse("a || b && c").unwrap(),
        or(var("a"), and(var("b"), var("c")))
    );
    assert_eq!(
        parse("a == 1 && b | c").unwrap(),
        and(eq(var("a"), imm(1.0)), bit_or(var("b"), var("c")))
    );
}

// ============================================================================
// Associativity
// ============================================================================

#[test]
fn test_subtraction_is_left_associative() {
    assert_eq!(
        parse("a - b - c").unwrap(),
        sub(sub(var("a"), var("b")), var("c"))
    );
}

#[test]
fn test_mixed_equal_precedence_is_left_associative() {
    assert_eq!(
        parse("a / b * c % d").unwrap(),
        rem(mul(div(var("a"), var("b")), var("c")), var("d"))
    );
    assert_eq!(
        parse("a == b != c").unwrap(),
        ne(eq(var("a"), var("b")), var("c"))
    );
}

#[test]
fn test_xor_chain() {
    assert_eq!(
        parse("relS[19] ^ relS[18] ^ 1").unwrap(),
        Node::binary(
            BinaryOp::BitXor,
            Node::binary(BinaryOp::BitXor, Node::bit("relS", 19), Node::bit("relS", 18)),
            Node::imm(1.0),
        )
    );
}

// ============================================================================
// Ternary
// ============================================================================

#[test]
fn test_ternary_keeps_both_branches() {
    assert_eq!(
        parse("a ? b : c").unwrap(),
        Node::binary(
            BinaryOp::Cond,
            var("a"),
            Node::binary(BinaryOp::Else, var("b"), var("c"))
        )
    );
}

#[test]
fn test_ternary_is_right_associative() {
    assert_eq!(
        parse("a ? b : c ? d : e").unwrap(),
        cond(var("a"), var("b"), cond(var("c"), var("d"), var("e")))
    );
}

#[test]
fn test_ternary_in_taken_branch() {
    assert_eq!(
        parse("a ? b ? c : d : e").unwrap(),
        cond(var("a"), cond(var("b"), var("c"), var("d")), var("e"))
    );
}

#[test]
fn test_ternary_is_loosest() {
    assert_eq!(
        parse("a || b ? c + 1 : d & e").unwrap(),
        cond(
            or(var("a"), var("b")),
            add(var("c"), imm(1.0)),
            bit_and(var("d"), var("e"))
        )
    );
    assert_eq!(
        parse("a + b ? c : d").unwrap(),
        cond(add(var("a"), var("b")), var("c"), var("d"))
    );
}

#[test]
fn test_ternary_inside_call_arguments() {
    assert_eq!(
        parse("f(a ? b : c, d)").unwrap(),
        call("f", vec![cond(var("a"), var("b"), var("c")), var("d")])
    );
}

#[test]
fn test_ternary_inside_parentheses() {
    assert_eq!(
        parse("(a ? b : c) + 1").unwrap(),
        add(cond(var("a"), var("b"), var("c")), imm(1.0))
    );
}

// ============================================================================
// Error Cases
// ============================================================================

#[test]
fn test_empty_input() {
    let err = parse("").unwrap_err();
    assert_eq!(err.position, Some(0));
    assert_eq!(err.kind, ErrorKind::Syntax);
    assert_eq!(err.message, "Expression cannot be empty");

    assert_eq!(parse("   ").unwrap_err().position, Some(0));
}

#[test]
fn test_missing_close_paren() {
    let err = parse("(1+").unwrap_err();
    assert_eq!(err.position, Some(3));

    let err = parse("(a + b").unwrap_err();
    assert_eq!(err.position, Some(6));
    assert!(err.message.contains("<end>"));
}

#[test]
fn test_trailing_tokens() {
    let err = parse("1 2").unwrap_err();
    assert_eq!(err.position, Some(2));
    assert_eq!(err.message, "Unexpected token '2'");

    assert_eq!(parse("a)").unwrap_err().position, Some(1));
}

#[test]
fn test_unknown_punctuation() {
    let err = parse("a $ b").unwrap_err();
    assert_eq!(err.position, Some(2));
    assert_eq!(err.message, "Unexpected token '$'");
}

#[test]
fn test_binary_operator_in_operand_position() {
    let err = parse("*a").unwrap_err();
    assert_eq!(err.position, Some(0));
    assert_eq!(parse("a + * b").unwrap_err().position, Some(4));
}

#[test]
fn test_colon_outside_ternary() {
    let err = parse("a : b").unwrap_err();
    assert_eq!(err.position, Some(2));
    assert_eq!(err.message, "Unexpected token ':'");
}

#[test]
fn test_unterminated_ternary() {
    let err = parse("a ? b").unwrap_err();
    assert_eq!(err.position, Some(2));
    assert!(err.message.contains("Unterminated ternary"));

    assert!(parse("a ? b c").is_err());
}

#[test]
fn test_bad_call_syntax() {
    assert_eq!(parse("f(a b)").unwrap_err().position, Some(4));
    assert_eq!(parse("f(a").unwrap_err().position, Some(3));
    assert_eq!(parse("f(,)").unwrap_err().position, Some(2));
    assert_eq!(parse("f(a,)").unwrap_err().position, Some(4));
}

#[test]
fn test_bad_bit_access() {
    // Index must be a literal
    assert_eq!(parse("x[y]").unwrap_err().position, Some(2));
    assert_eq!(parse("x[1 + 2]").unwrap_err().position, Some(4));
    assert_eq!(parse("x[-1]").unwrap_err().position, Some(2));
    // Unterminated
    assert_eq!(parse("x[3").unwrap_err().position, Some(3));

    let err = parse("x[1.5]").unwrap_err();
    assert_eq!(err.position, Some(2));
    assert!(err.message.contains("must be an integer"));
}

#[test]
fn test_lexical_error_surfaces_from_parse() {
    let err = parse("a ± b").unwrap_err();
    assert_eq!(err.kind, ErrorKind::Lexical);
    assert_eq!(err.position, Some(2));
}

#[test]
fn test_error_display() {
    let err = parse("(1+").unwrap_err();
    assert_eq!(err.to_string(), "Unexpected token '<end>' at offset 3");
}

// ============================================================================
// Nesting limits
// ============================================================================

#[test]
fn test_moderate_nesting_parses() {
    let source = format!("{}a{}", "(".repeat(200), ")".repeat(200));
    assert_eq!(parse(&source).unwrap(), var("a"));

    let tree = parse(&format!("{}a", "~".repeat(200))).unwrap();
    let mut depth = 0;
    let mut node = &tree;
    while let Node::Unary { op, child } = node {
        assert_eq!(*op, UnaryOp::BitNot);
        depth += 1;
        node = child.as_ref();
    }
    assert_eq!(depth, 200);
    assert_eq!(*node, var("a"));
}

#[test]
fn test_deep_parentheses_are_rejected() {
    let source = format!("{}a{}", "(".repeat(1000), ")".repeat(1000));
    let err = parse(&source).unwrap_err();
    assert_eq!(err.kind, ErrorKind::Syntax);
    assert_eq!(err.message, "Expression nested too deeply");
    assert_eq!(err.position, Some(MAX_DEPTH));
}

#[test]
fn test_long_unary_chain_is_rejected() {
    let err = parse(&format!("{}a", "~".repeat(10_000))).unwrap_err();
    assert_eq!(err.message, "Expression nested too deeply");
    assert_eq!(err.position, Some(MAX_DEPTH - 1));
}

#[test]
fn test_deep_ternary_chain_is_rejected() {
    let source = format!("{}z", "a ? b : ".repeat(1000));
    let err = parse(&source).unwrap_err();
    assert_eq!(err.message, "Expression nested too deeply");
}

#[test]
fn test_parser_reused_after_depth_error() {
    let source = "(".repeat(MAX_DEPTH + 1);
    let mut parser = Parser::new(tokenize(&source).unwrap(), source.len());
    assert_eq!(parser.parse().unwrap_err().message, "Expression nested too deeply");

    // The depth count restarts; only the last '(' is left to parse
    let err = parser.parse().unwrap_err();
    assert_eq!(err.message, "Unexpected token '<end>'");
    assert_eq!(err.position, Some(MAX_DEPTH + 1));
}

// ============================================================================
// Node queries
// ============================================================================

#[test]
fn test_node_queries() {
    let tree = parse("-a + f(b)").unwrap();
    assert!(tree.is_operator());
    assert_eq!(tree.precedence(), Some(6));

    if let Node::Binary { left, right, .. } = &tree {
        assert!(left.is_operator());
        assert_eq!(left.precedence(), Some(3));
        assert!(!right.is_operator());
        assert_eq!(right.precedence(), None);
        assert_eq!(right.name(), Some("f"));
    } else {
        panic!("Expected binary root");
    }
}

// ============================================================================
// Logging
// ============================================================================

#[test]
fn test_parse_with_subscriber_installed() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_test_writer()
        .try_init();

    assert!(parse("a +").is_err());
    assert_eq!(parse("a + 1").unwrap(), add(var("a"), imm(1.0)));
}
