use crate::interpreter::lexer::Token;

/// Represents a binary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
    /// Remainder (`%`)
    Mod,
    /// Equal to (`==`)
    Equal,
    /// Not equal to (`!=`)
    NotEqual,
    /// Logical and (`&&`)
    And,
    /// Logical or (`||`)
    Or,
}

/// Represents a unary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum UnaryOperator {
    /// Logical NOT (`!x`).
    Not,
    /// Two's complement negation (`-x`).
    Negate,
    /// Memory read (`*x`).
    Deref,
}

/// An operator found in a token range.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Operator {
    /// Takes the operand to its right.
    Unary(UnaryOperator),
    /// Takes operands on both sides.
    Binary(BinaryOperator),
}

impl Operator {
    /// Classifies a token. Operands and parentheses are not operators.
    #[must_use]
    pub const fn from_token(token: &Token) -> Option<Self> {
        use BinaryOperator::{Add, And, Div, Equal, Mod, Mul, NotEqual, Or, Sub};

        Some(match token {
            Token::Bang => Self::Unary(UnaryOperator::Not),
            Token::Neg => Self::Unary(UnaryOperator::Negate),
            Token::Deref => Self::Unary(UnaryOperator::Deref),
            Token::Plus => Self::Binary(Add),
            Token::Minus => Self::Binary(Sub),
            Token::Star => Self::Binary(Mul),
            Token::Slash => Self::Binary(Div),
            Token::Percent => Self::Binary(Mod),
            Token::EqualEqual => Self::Binary(Equal),
            Token::BangEqual => Self::Binary(NotEqual),
            Token::AndAnd => Self::Binary(And),
            Token::PipePipe => Self::Binary(Or),
            Token::Number(_) | Token::Register(_) | Token::LParen | Token::RParen => return None,
        })
    }

    /// Precedence rank. Lower binds tighter; the operator with the highest rank
    /// in a range is applied last.
    ///
    /// The gaps between ranks only keep the relative order readable.
    #[must_use]
    pub const fn precedence(self) -> u8 {
        use BinaryOperator::{Add, And, Div, Equal, Mod, Mul, NotEqual, Or, Sub};

        match self {
            Self::Unary(_) => 0,
            Self::Binary(Mul | Div | Mod) => 1,
            Self::Binary(Add | Sub) => 2,
            Self::Binary(Equal | NotEqual) => 4,
            Self::Binary(And) => 8,
            Self::Binary(Or) => 9,
        }
    }

    /// Unary operators group right to left, binary operators left to right.
    #[must_use]
    pub const fn is_right_associative(self) -> bool {
        matches!(self, Self::Unary(_))
    }
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use BinaryOperator::{Add, And, Div, Equal, Mod, Mul, NotEqual, Or, Sub};
        let operator = match self {
            Add => "+",
            Sub => "-",
            Mul => "*",
            Div => "/",
            Mod => "%",
            Equal => "==",
            NotEqual => "!=",
            And => "&&",
            Or => "||",
        };
        write!(f, "{operator}")
    }
}

impl std::fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let operator = match self {
            Self::Not => "!",
            Self::Negate => "-",
            Self::Deref => "*",
        };
        write!(f, "{operator}")
    }
}
