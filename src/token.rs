use crate::function::Function;
use std::fmt::{self, Display, Formatter};

/// Possible tokens to find in the input string
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    /// A numeric literal
    Number(f64),
    /// The variable `x`
    Variable,
    /// A named function, which must be followed by a parenthesized argument
    Function(Function),
    /// An operator
    Op(Op),
    /// Left parenthesis
    LParen,
    /// Right parenthesis
    RParen,
}

impl Display for Token {
    fn fmt(&self, fmt: &mut Formatter) -> fmt::Result {
        match *self {
            Self::Number(value) => write!(fmt, "{}", value),
            Self::Variable => write!(fmt, "{}", crate::util::VARIABLE),
            Self::Function(func) => write!(fmt, "{}", func.name()),
            Self::Op(op) => write!(fmt, "{}", op.symbol()),
            Self::LParen => write!(fmt, "("),
            Self::RParen => write!(fmt, ")"),
        }
    }
}

/// Allowed operators in the algorithm
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Op {
    Plus,
    Minus,
    Mul,
    Div,
    Exp,
    /// Unary minus
    Neg,
}

impl Op {
    /// Get the operator precedence. Operators with higher precedence should be
    /// evaluated first.
    pub fn precedence(self) -> u8 {
        match self {
            Self::Plus | Self::Minus => 1,
            Self::Mul | Self::Div => 2,
            Self::Neg => 3,
            Self::Exp => 4,
        }
    }

    /// Check if the operator is left associative
    pub fn is_left_associative(self) -> bool {
        match self {
            Self::Plus | Self::Minus | Self::Mul | Self::Div => true,
            Self::Exp | Self::Neg => false,
        }
    }

    /// Check if the operator is right associative
    pub fn is_right_associative(self) -> bool {
        !self.is_left_associative()
    }

    /// Check if the operator takes a single operand
    pub fn is_unary(self) -> bool {
        self == Self::Neg
    }

    pub fn symbol(self) -> char {
        match self {
            Self::Plus => '+',
            Self::Minus | Self::Neg => '-',
            Self::Mul => '*',
            Self::Div => '/',
            Self::Exp => '^',
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Op;

    #[test]
    fn precedence() {
        assert!(Op::Plus.precedence() < Op::Mul.precedence());
        assert!(Op::Mul.precedence() < Op::Neg.precedence());
        // -x^2 is -(x^2)
        assert!(Op::Neg.precedence() < Op::Exp.precedence());
        assert!(Op::Exp.is_right_associative());
        assert!(Op::Minus.is_left_associative());
        assert!(Op::Neg.is_unary());
        assert!(!Op::Minus.is_unary());
    }
}
