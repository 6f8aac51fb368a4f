//! Expression engine: string in, number out
//!
//! Runs lexer -> parser -> evaluator. Each stage is pure, so an `Engine`
//! carries no state and can be copied or created freely.

use crate::display::{format_number, format_tokens};
use crate::error::CalcError;
use crate::eval::evaluate_postfix;
use crate::lexer::{lex, Token};
use crate::parser::to_postfix;
use log::debug;

#[derive(Debug, Default, Clone, Copy)]
pub struct Engine;

impl Engine {
    pub fn new() -> Self {
        Engine
    }

    /// Evaluate an infix expression
    pub fn evaluate(&self, expression: &str) -> Result<f64, CalcError> {
        let postfix = self.postfix(expression)?;
        let result = evaluate_postfix(&postfix)?;
        debug!("result: {}", format_number(result));
        Ok(result)
    }

    /// Tokenize and convert an expression without evaluating it
    pub fn postfix(&self, expression: &str) -> Result<Vec<Token>, CalcError> {
        if expression.trim().is_empty() {
            return Err(CalcError::EmptyExpression);
        }

        let tokens = lex(expression)?;
        if tokens.is_empty() {
            return Err(CalcError::EmptyExpression);
        }
        debug!("tokens: {}", format_tokens(&tokens));

        let postfix = to_postfix(&tokens)?;
        debug!("postfix: {}", format_tokens(&postfix));
        Ok(postfix)
    }
}
