//! Tokenization for infixcalc
//!
//! Turns an expression string into numbers, operators and parentheses.
//! A `-` in operand position (start of input, after an operator, after `(`)
//! is a sign and becomes part of the numeral that immediately follows it.

use crate::error::CalcError;
use nom::{
    branch::alt,
    bytes::complete::{take_while, take_while1},
    character::complete::char,
    combinator::{map, opt, recognize, value},
    sequence::pair,
    IResult,
};
use std::fmt;

/// Grouping direction for operators of equal precedence.
///
/// Part of the static operator table; every operator in the table is
/// currently `Left`, and the converter handles both directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Associativity {
    Left,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Add, // +
    Sub, // -
    Mul, // *
    Div, // /
}

impl Operator {
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '+' => Some(Operator::Add),
            '-' => Some(Operator::Sub),
            '*' => Some(Operator::Mul),
            '/' => Some(Operator::Div),
            _ => None,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Sub => '-',
            Operator::Mul => '*',
            Operator::Div => '/',
        }
    }

    /// Binding strength; higher binds tighter
    pub fn precedence(self) -> u8 {
        match self {
            Operator::Add | Operator::Sub => 1,
            Operator::Mul | Operator::Div => 2,
        }
    }

    pub fn associativity(self) -> Associativity {
        Associativity::Left
    }

    /// Apply the operator to two operands.
    ///
    /// Division by exactly zero (either sign) is the only rejected case.
    pub fn apply(self, lhs: f64, rhs: f64) -> Result<f64, CalcError> {
        match self {
            Operator::Add => Ok(lhs + rhs),
            Operator::Sub => Ok(lhs - rhs),
            Operator::Mul => Ok(lhs * rhs),
            Operator::Div => {
                if rhs == 0.0 {
                    Err(CalcError::DivisionByZero)
                } else {
                    Ok(lhs / rhs)
                }
            }
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Token {
    /// A finite real, sign already folded in
    Number(f64),
    /// A binary operator
    Operator(Operator),
    /// (
    OpenParen,
    /// )
    CloseParen,
}

/// Lexemes as they appear in the text, before numerals are parsed
#[derive(Debug, Clone, PartialEq)]
enum Lexeme<'a> {
    Numeral(&'a str),
    Operator(Operator),
    OpenParen,
    CloseParen,
}

fn whitespace(input: &str) -> IResult<&str, &str> {
    take_while(|c: char| c.is_whitespace())(input)
}

/// Digits and decimal points; validity is checked when the numeral is parsed
fn numeral(input: &str) -> IResult<&str, &str> {
    take_while1(|c: char| c.is_ascii_digit() || c == '.')(input)
}

/// A sign glued to the numeral after it: -5, -.5, or a bare -
fn signed_numeral(input: &str) -> IResult<&str, &str> {
    recognize(pair(char('-'), opt(numeral)))(input)
}

fn operator(input: &str) -> IResult<&str, Operator> {
    alt((
        value(Operator::Add, char('+')),
        value(Operator::Sub, char('-')),
        value(Operator::Mul, char('*')),
        value(Operator::Div, char('/')),
    ))(input)
}

fn lexeme(input: &str) -> IResult<&str, Lexeme<'_>> {
    alt((
        map(numeral, Lexeme::Numeral),
        map(operator, Lexeme::Operator),
        value(Lexeme::OpenParen, char('(')),
        value(Lexeme::CloseParen, char(')')),
    ))(input)
}

/// True when the next token must be an operand, so `-` is a sign
fn expects_operand(tokens: &[Token]) -> bool {
    matches!(
        tokens.last(),
        None | Some(Token::Operator(_)) | Some(Token::OpenParen)
    )
}

fn parse_number(text: &str) -> Result<f64, CalcError> {
    match text.parse::<f64>() {
        Ok(n) if n.is_finite() => Ok(n),
        _ => Err(CalcError::MalformedNumber(text.to_string())),
    }
}

fn internal(err: nom::Err<nom::error::Error<&str>>) -> CalcError {
    CalcError::EvaluationError(format!("{:?}", err))
}

/// Tokenize a complete expression
pub fn lex(input: &str) -> Result<Vec<Token>, CalcError> {
    let mut tokens = Vec::new();
    let mut rest = input;

    loop {
        let (remaining, _) = whitespace(rest).map_err(internal)?;
        rest = remaining;
        if rest.is_empty() {
            break;
        }

        if rest.starts_with('-') && expects_operand(&tokens) {
            let (remaining, text) = signed_numeral(rest).map_err(internal)?;
            tokens.push(Token::Number(parse_number(text)?));
            rest = remaining;
            continue;
        }

        match lexeme(rest) {
            Ok((remaining, lexeme)) => {
                tokens.push(match lexeme {
                    Lexeme::Numeral(text) => Token::Number(parse_number(text)?),
                    Lexeme::Operator(op) => Token::Operator(op),
                    Lexeme::OpenParen => Token::OpenParen,
                    Lexeme::CloseParen => Token::CloseParen,
                });
                rest = remaining;
            }
            Err(nom::Err::Error(_)) => {
                let consumed = &input[..input.len() - rest.len()];
                return Err(CalcError::InvalidCharacter {
                    ch: rest.chars().next().unwrap_or_default(),
                    position: consumed.chars().count(),
                });
            }
            Err(err) => return Err(internal(err)),
        }
    }

    Ok(tokens)
}
