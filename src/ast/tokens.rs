/// Token category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// Numeric literal
    ///
    /// # Examples
    /// ```text
    /// 19
    /// 0.5
    /// .5
    /// 1e3
    /// ```
    Value,

    /// Identifier, used for variables and function names
    ///
    /// Must start with a letter or underscore, followed by letters, digits, or
    /// underscores.
    ///
    /// # Examples
    /// ```text
    /// relS
    /// immA
    /// _tmp0
    /// ```
    Identifier,

    /// Operator or other punctuation
    ///
    /// Operators are split by longest match (`<=` is one token). Any other
    /// punctuation character becomes a single-character token and is judged by the
    /// parser.
    Punctuation,

    /// End of input
    End,
}

/// A token with its source offset.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    /// Byte offset of the first character.
    pub position: usize,
    /// Source text of the token.
    pub text: String,
    /// Parsed value, only set for [`TokenKind::Value`].
    pub value: Option<f64>,
}

impl Token {
    pub fn value(position: usize, text: impl Into<String>, value: f64) -> Self {
        Token {
            kind: TokenKind::Value,
            position,
            text: text.into(),
            value: Some(value),
        }
    }

    pub fn identifier(position: usize, text: impl Into<String>) -> Self {
        Token {
            kind: TokenKind::Identifier,
            position,
            text: text.into(),
            value: None,
        }
    }

    pub fn punctuation(position: usize, text: impl Into<String>) -> Self {
        Token {
            kind: TokenKind::Punctuation,
            position,
            text: text.into(),
            value: None,
        }
    }

    pub fn end(position: usize) -> Self {
        Token {
            kind: TokenKind::End,
            position,
            text: "<end>".to_string(),
            value: None,
        }
    }

    /// True for a punctuation token spelled exactly `symbol`.
    pub fn is_punct(&self, symbol: &str) -> bool {
        self.kind == TokenKind::Punctuation && self.text == symbol
    }
}
