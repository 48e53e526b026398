/// Longest operator symbol, in characters.
pub const MAX_OPERATOR_LEN: usize = 4;

/// Static description of an operator.
///
/// Lower `precedence` binds tighter. `emit` is the code template, with `@1` and `@2`
/// standing for the rendered operands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OperatorInfo {
    pub precedence: u8,
    pub right_assoc: bool,
    pub emit: &'static str,
}

const fn info(precedence: u8, right_assoc: bool, emit: &'static str) -> OperatorInfo {
    OperatorInfo {
        precedence,
        right_assoc,
        emit,
    }
}

/// Prefix operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnaryOp {
    /// Negation (`-`)
    Neg,
    /// Bitwise complement (`~`)
    BitNot,
    /// Logical not (`!`)
    Not,
}

impl UnaryOp {
    pub const ALL: [UnaryOp; 3] = [UnaryOp::Neg, UnaryOp::BitNot, UnaryOp::Not];

    pub fn from_symbol(symbol: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|op| op.symbol() == symbol)
    }

    pub fn symbol(self) -> &'static str {
        match self {
            UnaryOp::Neg => "-",
            UnaryOp::BitNot => "~",
            UnaryOp::Not => "!",
        }
    }

    pub fn info(self) -> OperatorInfo {
        match self {
            UnaryOp::Neg => info(3, true, "-@1"),
            UnaryOp::BitNot => info(3, true, "~@1"),
            UnaryOp::Not => info(3, true, "!@1"),
        }
    }
}

/// Infix operators.
///
/// `Cond` (`?`) and `Else` (`:`) only ever appear together: a ternary `c ? t : f` is
/// `Cond(c, Else(t, f))`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    // Multiplicative
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
    /// Remainder (`%`)
    Rem,

    // Additive
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,

    // Shifts
    /// Shift right (`>>`)
    Shr,
    /// Shift left (`<<`)
    Shl,

    // Relational
    /// Less than (`<`)
    Lt,
    /// Greater than (`>`)
    Gt,
    /// Less than or equal (`<=`)
    Le,
    /// Greater than or equal (`>=`)
    Ge,

    // Equality
    /// Equal (`==`)
    Eq,
    /// Not equal (`!=`)
    Ne,

    // Bitwise
    /// Bitwise and (`&`)
    BitAnd,
    /// Bitwise exclusive or (`^`)
    BitXor,
    /// Bitwise or (`|`)
    BitOr,

    // Logical
    /// Logical and (`&&`)
    And,
    /// Logical or (`||`)
    Or,

    // Ternary
    /// Ternary condition (`?`)
    Cond,
    /// Ternary alternatives (`:`)
    Else,
}

impl BinaryOp {
    pub const ALL: [BinaryOp; 20] = [
        BinaryOp::Mul,
        BinaryOp::Div,
        BinaryOp::Rem,
        BinaryOp::Add,
        BinaryOp::Sub,
        BinaryOp::Shr,
        BinaryOp::Shl,
        BinaryOp::Lt,
        BinaryOp::Gt,
        BinaryOp::Le,
        BinaryOp::Ge,
        BinaryOp::Eq,
        BinaryOp::Ne,
        BinaryOp::BitAnd,
        BinaryOp::BitXor,
        BinaryOp::BitOr,
        BinaryOp::And,
        BinaryOp::Or,
        BinaryOp::Cond,
        BinaryOp::Else,
    ];

    pub fn from_symbol(symbol: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|op| op.symbol() == symbol)
    }

    pub fn symbol(self) -> &'static str {
        match self {
            BinaryOp::Mul => "*",
            BinaryOp::Div => "/",
            BinaryOp::Rem => "%",
            BinaryOp::Add => "+",
            BinaryOp::Sub => "-",
            BinaryOp::Shr => ">>",
            BinaryOp::Shl => "<<",
            BinaryOp::Lt => "<",
            BinaryOp::Gt => ">",
            BinaryOp::Le => "<=",
            BinaryOp::Ge => ">=",
            BinaryOp::Eq => "==",
            BinaryOp::Ne => "!=",
            BinaryOp::BitAnd => "&",
            BinaryOp::BitXor => "^",
            BinaryOp::BitOr => "|",
            BinaryOp::And => "&&",
            BinaryOp::Or => "||",
            BinaryOp::Cond => "?",
            BinaryOp::Else => ":",
        }
    }

    pub fn info(self) -> OperatorInfo {
        match self {
            BinaryOp::Mul => info(5, false, "@1 * @2"),
            BinaryOp::Div => info(5, false, "@1 / @2"),
            BinaryOp::Rem => info(5, false, "@1 % @2"),
            BinaryOp::Add => info(6, false, "@1 + @2"),
            BinaryOp::Sub => info(6, false, "@1 - @2"),
            BinaryOp::Shr => info(7, false, "@1 >> @2"),
            BinaryOp::Shl => info(7, false, "@1 << @2"),
            BinaryOp::Lt => info(9, false, "@1 < @2"),
            BinaryOp::Gt => info(9, false, "@1 > @2"),
            BinaryOp::Le => info(9, false, "@1 <= @2"),
            BinaryOp::Ge => info(9, false, "@1 >= @2"),
            BinaryOp::Eq => info(10, false, "@1 == @2"),
            BinaryOp::Ne => info(10, false, "@1 != @2"),
            BinaryOp::BitAnd => info(11, false, "@1 & @2"),
            BinaryOp::BitXor => info(12, false, "@1 ^ @2"),
            BinaryOp::BitOr => info(13, false, "@1 | @2"),
            BinaryOp::And => info(14, false, "@1 && @2"),
            BinaryOp::Or => info(15, false, "@1 || @2"),
            BinaryOp::Cond => info(16, true, "@1 ? @2"),
            BinaryOp::Else => info(16, true, "@1 : @2"),
        }
    }

    /// True when `self`, seen to the left of `next`, must keep its right operand
    /// open for `next` (i.e. `next` groups first).
    pub fn yields_to(self, next: BinaryOp) -> bool {
        let (a, b) = (self.info(), next.info());
        a.precedence > b.precedence || (a.precedence == b.precedence && a.right_assoc)
    }
}

/// Whether `symbol` is any registered unary or binary operator.
pub fn is_operator_symbol(symbol: &str) -> bool {
    UnaryOp::from_symbol(symbol).is_some() || BinaryOp::from_symbol(symbol).is_some()
}

#[test]
fn test_symbols_round_trip_through_lookup() {
    for op in BinaryOp::ALL {
        assert_eq!(BinaryOp::from_symbol(op.symbol()), Some(op));
        assert!(op.symbol().len() <= MAX_OPERATOR_LEN);
    }
    for op in UnaryOp::ALL {
        assert_eq!(UnaryOp::from_symbol(op.symbol()), Some(op));
    }
}

#[test]
fn test_precedence_bands() {
    assert!(BinaryOp::Mul.info().precedence < BinaryOp::Add.info().precedence);
    assert!(BinaryOp::Shl.info().precedence < BinaryOp::Lt.info().precedence);
    assert!(BinaryOp::BitAnd.info().precedence < BinaryOp::BitXor.info().precedence);
    assert!(BinaryOp::BitXor.info().precedence < BinaryOp::BitOr.info().precedence);
    assert!(BinaryOp::Or.info().precedence < BinaryOp::Cond.info().precedence);
    assert!(UnaryOp::Neg.info().precedence < BinaryOp::Mul.info().precedence);
}

#[test]
fn test_yields_to() {
    // `a + b * c`: `+` keeps its right side open for `*`
    assert!(BinaryOp::Add.yields_to(BinaryOp::Mul));
    // `a - b - c`: left-associative, no yielding at equal precedence
    assert!(!BinaryOp::Sub.yields_to(BinaryOp::Sub));
    // `a ? b : c ? d : e`: right-associative
    assert!(BinaryOp::Cond.yields_to(BinaryOp::Cond));
}

#[test]
fn test_unknown_symbols() {
    assert!(!is_operator_symbol("$"));
    assert!(!is_operator_symbol("--"));
    assert!(is_operator_symbol("<="));
    assert!(is_operator_symbol("~"));
}
