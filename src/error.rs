//! Error taxonomy for infixcalc
//!
//! Every failure of the pipeline is expression-level and recoverable: the
//! caller reports it and moves on to the next line.

use crate::lexer::Operator;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CalcError {
    #[error("Empty expression")]
    EmptyExpression,
    #[error("Invalid character '{ch}' at position {position}")]
    InvalidCharacter { ch: char, position: usize },
    #[error("Malformed number: '{0}'")]
    MalformedNumber(String),
    #[error("Mismatched parentheses")]
    MismatchedParentheses,
    #[error("Insufficient operands for '{0}'")]
    InsufficientOperands(Operator),
    #[error("Division by zero")]
    DivisionByZero,
    #[error("Invalid expression: {0}")]
    InvalidExpression(String),
    #[error("Evaluation error: {0}")]
    EvaluationError(String),
}
