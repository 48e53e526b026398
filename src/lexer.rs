use std::sync::LazyLock;

use regex::Regex;

use crate::ast::{MAX_OPERATOR_LEN, Token, is_operator_symbol};
use crate::error::{ExpressionError, Result};

/// Numeric literal: integer or decimal digits, optional exponent. Anchored, and
/// matched against a fresh slice each time, so it carries no scan state between calls.
static NUMBER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:\d*\.\d+|\d+)(?:[eE][+-]?\d+)?").expect("numeric literal pattern")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CharClass {
    Space,
    Alpha,
    Digit,
    Punct,
    Invalid,
}

fn classify(ch: char) -> CharClass {
    match ch {
        '\t'..='\r' | ' ' => CharClass::Space,
        'A'..='Z' | 'a'..='z' | '_' => CharClass::Alpha,
        '0'..='9' => CharClass::Digit,
        c if c.is_ascii_punctuation() => CharClass::Punct,
        _ => CharClass::Invalid,
    }
}

pub struct Lexer<'a> {
    input: &'a str,
    position: usize,
    tokens: Vec<Token>,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Lexer {
            input,
            position: 0,
            tokens: Vec::new(),
        }
    }

    fn current_char(&self) -> Option<char> {
        self.input[self.position..].chars().next()
    }

    fn class_at(&self, position: usize) -> Option<CharClass> {
        self.input[position..].chars().next().map(classify)
    }

    fn read_number(&mut self) -> Result<()> {
        // `.5` arrives as a `.` token followed by a digit run; fold them back together.
        if let Some(last) = self.tokens.last()
            && last.is_punct(".")
            && last.position + 1 == self.position
        {
            self.tokens.pop();
            self.position -= 1;
        }

        let start = self.position;
        let text = NUMBER
            .find(&self.input[start..])
            .map(|m| m.as_str())
            .ok_or_else(|| ExpressionError::lexical("Invalid numeric literal", start))?;

        let value = text.parse::<f64>().map_err(|e| {
            ExpressionError::lexical(format!("Invalid numeric literal '{text}': {e}"), start)
        })?;
        if !value.is_finite() {
            return Err(ExpressionError::lexical(
                format!("Invalid numeric literal '{text}': out of range"),
                start,
            ));
        }

        self.tokens.push(Token::value(start, text, value));
        self.position += text.len();
        Ok(())
    }

    fn read_identifier(&mut self) {
        let start = self.position;
        while matches!(
            self.class_at(self.position),
            Some(CharClass::Alpha | CharClass::Digit)
        ) {
            self.position += 1;
        }
        self.tokens
            .push(Token::identifier(start, &self.input[start..self.position]));
    }

    /// Splits a run of punctuation by longest operator match, falling back to
    /// single characters.
    fn read_punctuation(&mut self) {
        let mut start = self.position;
        let mut end = start;
        while self.class_at(end) == Some(CharClass::Punct) {
            end += 1;
        }

        while start < end {
            let longest = (end - start).min(MAX_OPERATOR_LEN);
            let len = (1..=longest)
                .rev()
                .find(|&len| is_operator_symbol(&self.input[start..start + len]))
                .unwrap_or(1);

            self.tokens
                .push(Token::punctuation(start, &self.input[start..start + len]));
            start += len;
        }

        self.position = end;
    }

    pub fn tokenize(mut self) -> Result<Vec<Token>> {
        while let Some(ch) = self.current_char() {
            match classify(ch) {
                CharClass::Space => self.position += 1,
                CharClass::Digit => self.read_number()?,
                CharClass::Alpha => self.read_identifier(),
                CharClass::Punct => self.read_punctuation(),
                CharClass::Invalid => {
                    return Err(ExpressionError::lexical(
                        format!("Unrecognized character '0x{:x}'", ch as u32),
                        self.position,
                    ));
                }
            }
        }
        Ok(self.tokens)
    }
}

/// Turns `source` into tokens, in source order.
#[tracing::instrument(level = "trace", skip_all, fields(len = source.len()))]
pub fn tokenize(source: &str) -> Result<Vec<Token>> {
    let tokens = Lexer::new(source).tokenize()?;
    tracing::trace!(count = tokens.len(), "tokenized");
    Ok(tokens)
}

#[cfg(test)]
fn texts(source: &str) -> Vec<String> {
    tokenize(source)
        .unwrap()
        .into_iter()
        .map(|t| t.text)
        .collect()
}

#[test]
fn test_operator_runs() {
    assert_eq!(texts("a<=-b"), ["a", "<=", "-", "b"]);
    assert_eq!(texts("x>>~y"), ["x", ">>", "~", "y"]);
    assert_eq!(texts("--a"), ["-", "-", "a"]);
    assert_eq!(texts("f(-1)"), ["f", "(", "-", "1", ")"]);
}

#[test]
fn test_decimal_folding() {
    let tokens = tokenize("..5").unwrap();
    assert_eq!(tokens.len(), 2);
    assert!(tokens[0].is_punct("."));
    assert_eq!(tokens[1].value, Some(0.5));
    assert_eq!(tokens[1].position, 1);
}

#[test]
fn test_vertical_tab_is_space() {
    assert_eq!(texts("a\x0b+\x0cb"), ["a", "+", "b"]);
}
