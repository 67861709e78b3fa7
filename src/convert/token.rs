//! Classifying input characters.
//!
//! Every token is exactly one character. Anything that isn't an operator or a paren
//! is an operand, whitespace included.

/// A binary operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Add,
    Sub,
    Mul,
    Div,
    Pow,
}

/// How tightly an operator binds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Precedence {
    Low,
    Mid,
    High,
}

impl Operator {
    pub fn from_char(ch: char) -> Option<Self> {
        match ch {
            '+' => Some(Operator::Add),
            '-' => Some(Operator::Sub),
            '*' => Some(Operator::Mul),
            '/' => Some(Operator::Div),
            '^' => Some(Operator::Pow),
            _ => None,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Sub => '-',
            Operator::Mul => '*',
            Operator::Div => '/',
            Operator::Pow => '^',
        }
    }

    pub fn precedence(self) -> Precedence {
        match self {
            Operator::Add | Operator::Sub => Precedence::Low,
            Operator::Mul | Operator::Div => Precedence::Mid,
            Operator::Pow => Precedence::High,
        }
    }

    /// Whether a pending `top` operator gets emitted before `self` is pushed.
    ///
    /// `^` never unwinds anything, not even another `^`;
    /// it always layers over what's already pending.
    pub fn unwinds(self, top: Operator) -> bool {
        match self.precedence() {
            Precedence::High => false,
            incoming => top.precedence() >= incoming,
        }
    }
}

/// A classified input character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    Open,
    Close,
    Operator(Operator),
    Operand(char),
}

impl From<char> for Token {
    fn from(ch: char) -> Self {
        match ch {
            '(' => Token::Open,
            ')' => Token::Close,
            ch => Operator::from_char(ch)
                .map(Token::Operator)
                .unwrap_or(Token::Operand(ch)),
        }
    }
}
