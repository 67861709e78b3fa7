//! The operator stack used while converting an expression.
//!
//! Holds operators (and open-paren markers) whose right operand has not been closed yet.
//! Operands never land here; they go straight to the output.

use crate::convert::token::Operator;

/// An entry on the operator stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Entry {
    /// The marker left by an opening paren.
    Open,
    Operator(Operator),
}

impl Entry {
    /// The character this entry is written as, if it ends up in the output.
    pub fn symbol(self) -> char {
        match self {
            Entry::Open => '(',
            Entry::Operator(op) => op.symbol(),
        }
    }
}

impl std::fmt::Display for Entry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl From<Operator> for Entry {
    fn from(value: Operator) -> Self {
        Entry::Operator(value)
    }
}

/// LIFO stack of pending entries.
///
/// Popping an empty stack is not an error: `pop` returns `None`,
/// which the converter uses to stop unwinding.
#[derive(Debug, Default, Clone)]
pub struct OperatorStack {
    entries: Vec<Entry>,
}

impl OperatorStack {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn push(&mut self, entry: impl Into<Entry>) {
        self.entries.push(entry.into());
    }

    pub fn pop(&mut self) -> Option<Entry> {
        self.entries.pop()
    }

    /// The current top, without removing it.
    pub fn peek(&self) -> Option<Entry> {
        self.entries.last().copied()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Pop every remaining entry, top first.
    ///
    /// The stack is empty once the iterator is exhausted;
    /// dropping the iterator early leaves the unpopped entries in place.
    pub fn drain(&mut self) -> impl Iterator<Item = Entry> + '_ {
        std::iter::from_fn(move || self.pop())
    }
}
