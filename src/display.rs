//! Text forms of results and token sequences

use crate::lexer::Token;
use std::fmt;

/// Format a result the way floats are conventionally shown: `7.0`, `-3.5`
pub fn format_number(n: f64) -> String {
    format!("{:?}", n)
}

/// Space separated rendering of a token sequence, e.g. `3.0 4.0 +`
pub fn format_tokens(tokens: &[Token]) -> String {
    tokens
        .iter()
        .map(|t| t.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Number(n) => write!(f, "{}", format_number(*n)),
            Token::Operator(op) => write!(f, "{}", op),
            Token::OpenParen => write!(f, "("),
            Token::CloseParen => write!(f, ")"),
        }
    }
}
