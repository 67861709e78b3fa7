//! The single left-to-right pass.

use super::token::{Operator, Token};
use super::{Config, ConvertErr, ConvertResult};
use crate::stack::{Entry, OperatorStack};

/// Scan `infix`, producing postfix output.
///
/// The stack is local to the call. Each input character is either written once
/// or consumed as a paren, so the output never outgrows the input.
pub(super) fn scan(infix: &str, config: &Config) -> ConvertResult<String> {
    let mut output = String::with_capacity(infix.len() + 1);
    let mut stack = OperatorStack::new();

    for (position, ch) in infix.chars().enumerate() {
        let token = Token::from(ch);
        tracing::trace!(column = position + 1, ?token, depth = stack.len());
        match token {
            Token::Open => stack.push(Entry::Open),
            Token::Operator(op) => {
                unwind(&mut stack, &mut output, op);
                stack.push(op);
            }
            Token::Close => close(&mut stack, &mut output)
                .ok_or(ConvertErr::UnmatchedClose {
                    column: position + 1,
                })?,
            Token::Operand(ch) => output.push(ch),
        }
    }

    let mut unclosed = 0;
    for entry in stack.drain() {
        if entry == Entry::Open {
            unclosed += 1;
        }
        output.push(entry.symbol());
    }
    if config.strict_parens && unclosed > 0 {
        return Err(ConvertErr::UnclosedOpen { count: unclosed });
    }

    Ok(output)
}

/// Emit the pending operators that `incoming` doesn't bind tighter than.
///
/// Stops at an open paren, or at an operator `incoming` doesn't unwind, leaving it in place.
/// With `^` nothing is ever emitted.
fn unwind(stack: &mut OperatorStack, output: &mut String, incoming: Operator) {
    while let Some(Entry::Operator(top)) = stack.peek() {
        if !incoming.unwinds(top) {
            break;
        }
        stack.pop();
        output.push(top.symbol());
    }
}

/// Emit everything down to the nearest open paren, discarding the paren.
/// Returns None if the stack ran out first.
fn close(stack: &mut OperatorStack, output: &mut String) -> Option<()> {
    loop {
        match stack.pop()? {
            Entry::Open => return Some(()),
            entry => output.push(entry.symbol()),
        }
    }
}
