//! Postfix evaluation for infixcalc
//!
//! Numbers push themselves; operators pop their right operand, then their
//! left operand, and push the result. A well-formed sequence leaves exactly
//! one value behind.

use crate::error::CalcError;
use crate::lexer::{Operator, Token};
use log::trace;

/// Stack machine for a single postfix sequence
pub struct Evaluator {
    stack: Vec<f64>,
}

impl Evaluator {
    pub fn new() -> Self {
        Evaluator { stack: Vec::new() }
    }

    /// Run the sequence to completion, consuming the evaluator
    pub fn eval(mut self, postfix: &[Token]) -> Result<f64, CalcError> {
        for token in postfix {
            match *token {
                Token::Number(n) => self.stack.push(n),
                Token::Operator(op) => self.apply(op)?,
                Token::OpenParen | Token::CloseParen => {
                    return Err(CalcError::EvaluationError(
                        "parenthesis in postfix sequence".into(),
                    ));
                }
            }
            trace!("{} -> {:?}", token, self.stack);
        }

        match self.stack.as_slice() {
            [result] => Ok(*result),
            leftover => Err(CalcError::InvalidExpression(format!(
                "expected one value, found {}",
                leftover.len()
            ))),
        }
    }

    fn apply(&mut self, op: Operator) -> Result<(), CalcError> {
        if self.stack.len() < 2 {
            return Err(CalcError::InsufficientOperands(op));
        }
        let rhs = self.pop_number()?;
        let lhs = self.pop_number()?;
        self.stack.push(op.apply(lhs, rhs)?);
        Ok(())
    }

    fn pop_number(&mut self) -> Result<f64, CalcError> {
        self.stack
            .pop()
            .ok_or_else(|| CalcError::EvaluationError("evaluation stack underflow".into()))
    }
}

impl Default for Evaluator {
    fn default() -> Self {
        Self::new()
    }
}

/// Evaluate a postfix (Reverse Polish) token sequence
pub fn evaluate_postfix(postfix: &[Token]) -> Result<f64, CalcError> {
    Evaluator::new().eval(postfix)
}
