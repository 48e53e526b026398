use std::iter::Peekable;
use std::vec::IntoIter;

use crate::{
    ast::{BIT_CALL, BinaryOp, Node, Token, TokenKind, UnaryOp},
    error::{ExpressionError, Result},
    lexer,
};

/// Deepest operand nesting accepted before parsing gives up. Counts groups,
/// call arguments, right-hand operands and unary prefixes.
pub const MAX_DEPTH: usize = 256;

pub struct Parser {
    tokens: Peekable<IntoIter<Token>>,
    /// Returned once the tokens run out; positioned one past the source.
    end: Token,
    depth: usize,
}

impl Parser {
    /// `source_len` positions the end-of-input token.
    pub fn new(tokens: Vec<Token>, source_len: usize) -> Self {
        Parser {
            tokens: tokens.into_iter().peekable(),
            end: Token::end(source_len),
            depth: 0,
        }
    }

    fn peek(&mut self) -> &Token {
        self.tokens.peek().unwrap_or(&self.end)
    }

    fn next(&mut self) -> Token {
        self.tokens.next().unwrap_or_else(|| self.end.clone())
    }

    fn expect(&mut self, symbol: &str) -> Result<Token> {
        let token = self.next();
        if token.is_punct(symbol) {
            Ok(token)
        } else {
            Err(ExpressionError::unexpected(&token))
        }
    }

    fn too_deep(position: usize) -> ExpressionError {
        ExpressionError::syntax("Expression nested too deeply", Some(position))
    }

    /// The binary operator at the cursor, if any. `:` is never returned: it only
    /// closes the taken branch of a ternary, which stops every enclosing loop there.
    fn peek_binary_op(&mut self) -> Option<BinaryOp> {
        let token = self.peek();
        if token.kind != TokenKind::Punctuation {
            return None;
        }
        BinaryOp::from_symbol(&token.text).filter(|op| *op != BinaryOp::Else)
    }

    /// Parse primary expressions: numbers, variables, calls, bit access, '(' ')'
    fn parse_primary(&mut self) -> Result<Node> {
        let token = self.next();
        match token.kind {
            TokenKind::Value => Ok(Node::Imm(token.value.unwrap_or_default())),
            TokenKind::Identifier => {
                if self.peek().is_punct("(") {
                    self.parse_call(token.text)
                } else if self.peek().is_punct("[") {
                    self.parse_bit_access(token.text)
                } else {
                    Ok(Node::Var(token.text))
                }
            }
            TokenKind::Punctuation if token.text == "(" => {
                let expr = self.parse_expression()?;
                self.expect(")")?;
                Ok(expr)
            }
            _ => Err(ExpressionError::unexpected(&token)),
        }
    }

    fn peek_unary_op(&mut self) -> Option<UnaryOp> {
        let token = self.peek();
        match token.kind {
            TokenKind::Punctuation => UnaryOp::from_symbol(&token.text),
            _ => None,
        }
    }

    /// Unary prefixes nest right to left: `- ~ x` is `-(~(x))`.
    fn parse_unary(&mut self) -> Result<Node> {
        let mut ops = vec![];
        while let Some(op) = self.peek_unary_op() {
            let token = self.next();
            ops.push(op);
            if self.depth + ops.len() > MAX_DEPTH {
                return Err(Self::too_deep(token.position));
            }
        }

        let primary = self.parse_primary()?;
        Ok(ops
            .into_iter()
            .rev()
            .fold(primary, |child, op| Node::unary(op, child)))
    }

    fn parse_call(&mut self, name: String) -> Result<Node> {
        self.expect("(")?;

        let mut args = vec![];
        while !self.peek().is_punct(")") {
            if !args.is_empty() {
                self.expect(",")?;
            }
            args.push(self.parse_expression()?);
        }

        self.next(); // consume ')'
        Ok(Node::call(name, args))
    }

    /// `name[INDEX]`, where INDEX must be a literal integer.
    fn parse_bit_access(&mut self, name: String) -> Result<Node> {
        self.expect("[")?;

        let token = self.next();
        let index = match token.value {
            Some(v) if token.kind == TokenKind::Value && v.fract() == 0.0 => v,
            Some(_) => {
                return Err(ExpressionError::syntax(
                    format!("Bit index '{}' must be an integer", token.text),
                    Some(token.position),
                ));
            }
            None => return Err(ExpressionError::unexpected(&token)),
        };

        self.expect("]")?;
        Ok(Node::call(BIT_CALL, vec![Node::Var(name), Node::Imm(index)]))
    }

    /// Folds operators into `lhs` for as long as `parent` (the operator whose right
    /// operand is being built) yields to them.
    fn parse_binary(&mut self, mut lhs: Node, parent: Option<BinaryOp>) -> Result<Node> {
        while let Some(op) = self.peek_binary_op() {
            if parent.is_some_and(|parent| !parent.yields_to(op)) {
                break;
            }
            let op_token = self.next();

            lhs = if op == BinaryOp::Cond {
                let taken = self.parse_expression()?;
                if !self.next().is_punct(":") {
                    return Err(ExpressionError::syntax(
                        format!("Unterminated ternary if '{}'", op_token.text),
                        Some(op_token.position),
                    ));
                }
                let not_taken = self.parse_operand(Some(BinaryOp::Cond))?;
                Node::ternary(lhs, taken, not_taken)
            } else {
                let rhs = self.parse_operand(Some(op))?;
                Node::binary(op, lhs, rhs)
            };
        }
        Ok(lhs)
    }

    /// One operand together with every operator that binds tighter than `parent`.
    fn parse_operand(&mut self, parent: Option<BinaryOp>) -> Result<Node> {
        self.depth += 1;
        if self.depth > MAX_DEPTH {
            let position = self.peek().position;
            return Err(Self::too_deep(position));
        }

        let first = self.parse_unary()?;
        let node = self.parse_binary(first, parent)?;
        self.depth -= 1;
        Ok(node)
    }

    pub fn parse_expression(&mut self) -> Result<Node> {
        self.parse_operand(None)
    }

    /// Parse one complete expression; the input must not be empty and must be
    /// consumed entirely.
    pub fn parse(&mut self) -> Result<Node> {
        self.depth = 0;
        if self.peek().kind == TokenKind::End {
            return Err(ExpressionError::syntax("Expression cannot be empty", Some(0)));
        }

        let expr = self.parse_expression()?;

        let token = self.peek();
        if token.kind != TokenKind::End {
            return Err(ExpressionError::unexpected(token));
        }
        Ok(expr)
    }
}

/// Parses `source` into a tree.
#[tracing::instrument(level = "trace", skip_all, fields(len = source.len()))]
pub fn parse(source: &str) -> Result<Node> {
    let tokens = lexer::tokenize(source)?;
    let result = Parser::new(tokens, source.len()).parse();
    if let Err(e) = &result {
        tracing::debug!(error = %e, "rejected expression");
    }
    result
}
