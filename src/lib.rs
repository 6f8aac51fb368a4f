//! infixcalc - an evaluator for infix arithmetic
//!
//! # Overview
//!
//! Expressions over real numbers with `+ - * /`, parentheses and a leading
//! minus sign on numerals. Standard precedence applies (`*` and `/` bind
//! tighter than `+` and `-`) and equal precedence groups left to right.
//!
//! # Pipeline
//!
//! ```text
//! "3 + 4 * 2"                      # input
//! [3, +, 4, *, 2]                  # lex:        tokens
//! [3, 4, 2, *, +]                  # to_postfix: shunting-yard
//! 11.0                             # evaluate:   stack machine
//! ```
//!
//! Every stage is a pure function and fails fast with a [`CalcError`].
//!
//! # Example
//!
//! ```rust
//! use infixcalc::{CalcError, Engine};
//!
//! let engine = Engine::new();
//! assert_eq!(engine.evaluate("(3 + 4) * 2"), Ok(14.0));
//! assert_eq!(engine.evaluate("4 / 0"), Err(CalcError::DivisionByZero));
//! ```

pub mod display;
pub mod engine;
pub mod error;
pub mod eval;
pub mod lexer;
pub mod parser;

// Re-export commonly used items
pub use display::{format_number, format_tokens};
pub use engine::Engine;
pub use error::CalcError;
pub use eval::{evaluate_postfix, Evaluator};
pub use lexer::{lex, Associativity, Operator, Token};
pub use parser::{to_postfix, Parser};

/// Convenience function to evaluate an infix expression
pub fn eval(input: &str) -> Result<f64, CalcError> {
    Engine::new().evaluate(input)
}
