//! Infix to postfix conversion for infixcalc
//!
//! A single left-to-right shunting-yard pass. Operators wait on a stack until
//! something of lower binding strength (or a closing parenthesis) arrives.
//! Parentheses only steer the pass and never reach the output.
//!
//! The pass also checks that operands and operators alternate, so input such
//! as `3 4 +` is rejected instead of being read as postfix. Unbalanced
//! parentheses take priority over that check: the first alternation error is
//! held until the whole pass has finished.

use crate::error::CalcError;
use crate::lexer::{Associativity, Operator, Token};

/// Entries waiting on the operator stack
#[derive(Debug, Clone, Copy, PartialEq)]
enum Pending {
    Operator(Operator),
    OpenParen,
}

/// Parser state
pub struct Parser<'a> {
    tokens: &'a [Token],
    output: Vec<Token>,
    stack: Vec<Pending>,
    /// Next token must start an operand: number or `(`
    expect_operand: bool,
    /// First alternation error, reported if the parentheses balance
    misplaced: Option<CalcError>,
}

impl<'a> Parser<'a> {
    pub fn new(tokens: &'a [Token]) -> Self {
        Parser {
            tokens,
            output: Vec::with_capacity(tokens.len()),
            stack: Vec::new(),
            expect_operand: true,
            misplaced: None,
        }
    }

    /// Convert the whole infix sequence into postfix order
    pub fn parse(mut self) -> Result<Vec<Token>, CalcError> {
        for &token in self.tokens {
            match token {
                Token::Number(_) | Token::OpenParen if !self.expect_operand => {
                    self.misplaced.get_or_insert_with(|| {
                        CalcError::InvalidExpression(format!(
                            "missing operator before '{}'",
                            token
                        ))
                    });
                }
                Token::Operator(op) if self.expect_operand => {
                    self.misplaced
                        .get_or_insert(CalcError::InsufficientOperands(op));
                }
                _ => {}
            }

            match token {
                Token::Number(_) => {
                    self.output.push(token);
                    self.expect_operand = false;
                }
                Token::Operator(op) => {
                    self.push_operator(op);
                    self.expect_operand = true;
                }
                Token::OpenParen => self.stack.push(Pending::OpenParen),
                Token::CloseParen => {
                    self.close_group()?;
                    self.expect_operand = false;
                }
            }
        }

        self.finish()
    }

    /// Pop everything that binds at least as tightly as `op`, then push `op`
    fn push_operator(&mut self, op: Operator) {
        while let Some(&Pending::Operator(top)) = self.stack.last() {
            let yields = match op.associativity() {
                Associativity::Left => top.precedence() >= op.precedence(),
                Associativity::Right => top.precedence() > op.precedence(),
            };
            if !yields {
                break;
            }
            self.stack.pop();
            self.output.push(Token::Operator(top));
        }
        self.stack.push(Pending::Operator(op));
    }

    /// Unwind to the matching open parenthesis and discard it
    fn close_group(&mut self) -> Result<(), CalcError> {
        loop {
            match self.stack.pop() {
                Some(Pending::Operator(op)) => self.output.push(Token::Operator(op)),
                Some(Pending::OpenParen) => return Ok(()),
                None => return Err(CalcError::MismatchedParentheses),
            }
        }
    }

    /// Flush the stack; any open parenthesis left here was never closed
    fn finish(mut self) -> Result<Vec<Token>, CalcError> {
        while let Some(pending) = self.stack.pop() {
            match pending {
                Pending::Operator(op) => self.output.push(Token::Operator(op)),
                Pending::OpenParen => return Err(CalcError::MismatchedParentheses),
            }
        }
        match self.misplaced {
            Some(err) => Err(err),
            None => Ok(self.output),
        }
    }
}

/// Convert an infix token sequence into postfix (Reverse Polish) order
pub fn to_postfix(tokens: &[Token]) -> Result<Vec<Token>, CalcError> {
    Parser::new(tokens).parse()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::lex;

    fn rpn(input: &str) -> Result<Vec<Token>, CalcError> {
        to_postfix(&lex(input).unwrap())
    }

    fn n(value: f64) -> Token {
        Token::Number(value)
    }

    fn op(c: char) -> Token {
        Token::Operator(Operator::from_char(c).unwrap())
    }

    #[test]
    fn precedence_orders_output() {
        assert_eq!(
            rpn("3 + 4 * 2").unwrap(),
            vec![n(3.0), n(4.0), n(2.0), op('*'), op('+')]
        );
    }

    #[test]
    fn parentheses_override_precedence() {
        assert_eq!(
            rpn("(3 + 4) * 2").unwrap(),
            vec![n(3.0), n(4.0), op('+'), n(2.0), op('*')]
        );
    }

    #[test]
    fn equal_precedence_is_left_associative() {
        assert_eq!(
            rpn("10 / 2 / 5").unwrap(),
            vec![n(10.0), n(2.0), op('/'), n(5.0), op('/')]
        );
        assert_eq!(
            rpn("1 - 2 + 3").unwrap(),
            vec![n(1.0), n(2.0), op('-'), n(3.0), op('+')]
        );
    }

    #[test]
    fn nested_groups() {
        assert_eq!(
            rpn("((1 + 2) * (3 - 4))").unwrap(),
            vec![n(1.0), n(2.0), op('+'), n(3.0), n(4.0), op('-'), op('*')]
        );
    }

    #[test]
    fn output_never_contains_parentheses() {
        let out = rpn("(((2)))*((3+(4)))").unwrap();
        assert!(out
            .iter()
            .all(|t| !matches!(t, Token::OpenParen | Token::CloseParen)));
    }

    #[test]
    fn unclosed_open_paren() {
        assert_eq!(rpn("(1 + 2"), Err(CalcError::MismatchedParentheses));
    }

    #[test]
    fn stray_close_paren() {
        assert_eq!(rpn("1 + 2)"), Err(CalcError::MismatchedParentheses));
        assert_eq!(rpn(")("), Err(CalcError::MismatchedParentheses));
    }

    #[test]
    fn imbalance_wins_over_misplaced_tokens() {
        for input in ["(3 4", "3 4 )", "* (1", "(2)(3", "(1 + 2 3"] {
            assert_eq!(rpn(input), Err(CalcError::MismatchedParentheses), "{}", input);
        }
    }

    #[test]
    fn first_misplaced_token_is_reported() {
        assert_eq!(
            rpn("1 2 * * 3"),
            Err(CalcError::InvalidExpression("missing operator before '2.0'".into()))
        );
    }

    #[test]
    fn adjacent_operands_are_rejected() {
        assert_eq!(
            rpn("3 4 +"),
            Err(CalcError::InvalidExpression("missing operator before '4.0'".into()))
        );
        assert_eq!(
            rpn("2 (3)"),
            Err(CalcError::InvalidExpression("missing operator before '('".into()))
        );
    }

    #[test]
    fn operator_without_left_operand() {
        assert_eq!(
            rpn("* 2"),
            Err(CalcError::InsufficientOperands(Operator::Mul))
        );
        assert_eq!(
            rpn("1 + / 2"),
            Err(CalcError::InsufficientOperands(Operator::Div))
        );
        assert_eq!(
            rpn("(+ 1)"),
            Err(CalcError::InsufficientOperands(Operator::Add))
        );
    }

    #[test]
    fn trailing_operator_is_left_for_evaluation() {
        assert_eq!(rpn("3 +").unwrap(), vec![n(3.0), op('+')]);
    }

    #[test]
    fn empty_group_yields_nothing() {
        assert!(rpn("()").unwrap().is_empty());
    }

    #[test]
    fn input_tokens_untouched() {
        let tokens = lex("1 + 2").unwrap();
        let before = tokens.clone();
        let _ = to_postfix(&tokens).unwrap();
        assert_eq!(tokens, before);
    }
}
