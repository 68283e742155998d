use super::error::{ParseError, ParseErrorKind};
use super::lexer::{Token, Tokenizer};
use crate::common::*;
use logos::Span;

type PResult<T = ()> = crate::Result<T>;

/// One step of a postfix program.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Instruction {
    Push(Int),
    Apply(Application),
}

/// An operator together with the operands the parser found for it.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Application {
    pub op: Operator,
    pub left: bool,
    pub right: bool,
}

impl Application {
    pub const fn new(op: Operator, left: bool, right: bool) -> Self {
        Self { op, left, right }
    }
}

enum Held {
    Paren(Span),
    Op(Application, Span),
}

/// Shunting-yard conversion from infix tokens to a postfix [Instruction] sequence.
///
/// Besides ordering, the parser decides which optional operands are present, so that
/// `3d20kh` and `3d20kh2` reach the evaluator as distinct applications.
pub struct Parser<'a> {
    tokens: Tokenizer<'a>,
    output: Vec<Instruction>,
    held: Vec<Held>,
    expect_operand: bool,
}

impl<'a> Parser<'a> {
    pub fn new(s: &'a str) -> Self {
        Self {
            tokens: Tokenizer::new(s),
            output: Vec::new(),
            held: Vec::new(),
            expect_operand: true,
        }
    }

    pub fn parse(mut self) -> PResult<Vec<Instruction>> {
        while let Some(next) = self.tokens.next() {
            let (token, span) = next?;
            match token {
                Token::Integer(x) => {
                    self.operand(&span)?;
                    self.output.push(Instruction::Push(x));
                    self.expect_operand = false;
                }
                Token::LeftParen => {
                    self.operand(&span)?;
                    self.held.push(Held::Paren(span));
                }
                Token::RightParen => self.close_paren(span)?,
                Token::Operator(op) => self.operator(op, span)?,
            }
        }
        self.finish()
    }

    fn error<T>(&self, kind: ParseErrorKind, span: Span) -> PResult<T> {
        let slice = self.tokens.slice_at(&span).to_string();
        Err(ParseError { kind, span, slice }.into())
    }

    /// Checks that an operand may start here.
    fn operand(&self, span: &Span) -> PResult {
        if self.expect_operand {
            Ok(())
        } else {
            self.error(ParseErrorKind::UnexpectedOperand, span.clone())
        }
    }

    /// Marks the right operand of the most recent operator as absent, if it is optional.
    fn skip_optional_right(&mut self) -> bool {
        match self.held.last_mut() {
            Some(Held::Op(app, _)) if app.right && app.op.operands().1 == Operand::Optional => {
                app.right = false;
                self.expect_operand = false;
                true
            }
            _ => false,
        }
    }

    /// Error for an operand that was expected where something else was found.
    fn missing_operand<T>(&self, span: Span) -> PResult<T> {
        match self.held.last() {
            Some(Held::Op(app, op_span)) => self.error(
                ParseErrorKind::MissingOperand {
                    op: app.op,
                    side: Side::Right,
                },
                op_span.clone(),
            ),
            Some(Held::Paren(paren)) => self.error(ParseErrorKind::EmptyExpression, paren.clone()),
            None => self.error(ParseErrorKind::EmptyExpression, span),
        }
    }

    fn operator(&mut self, op: Operator, span: Span) -> PResult {
        let (left, right) = op.operands();

        let has_left = if !self.expect_operand {
            true
        } else if left == Operand::Required {
            if !self.skip_optional_right() {
                return match self.held.last() {
                    Some(Held::Op(..)) => self.missing_operand(span),
                    _ => self.error(
                        ParseErrorKind::MissingOperand {
                            op,
                            side: Side::Left,
                        },
                        span,
                    ),
                };
            }
            true
        } else {
            false
        };

        // Without a left operand the operator is a prefix and owns nothing held so far.
        if has_left {
            while let Some(Held::Op(held, _)) = self.held.last() {
                if held.op.precedence() < op.precedence() {
                    break;
                }
                let held = *held;
                self.held.pop();
                self.output.push(Instruction::Apply(held));
            }
        }

        let has_right = right != Operand::Absent;
        self.held
            .push(Held::Op(Application::new(op, has_left, has_right), span));
        self.expect_operand = has_right;
        Ok(())
    }

    fn close_paren(&mut self, span: Span) -> PResult {
        if self.expect_operand && !self.skip_optional_right() {
            return match self.held.last() {
                None => self.error(ParseErrorKind::UnbalancedParen, span),
                _ => self.missing_operand(span),
            };
        }

        loop {
            match self.held.pop() {
                Some(Held::Op(app, _)) => self.output.push(Instruction::Apply(app)),
                Some(Held::Paren(_)) => break,
                None => return self.error(ParseErrorKind::UnbalancedParen, span),
            }
        }
        self.expect_operand = false;
        Ok(())
    }

    fn finish(mut self) -> PResult<Vec<Instruction>> {
        let end = self.tokens.end();
        if self.expect_operand && !self.skip_optional_right() {
            return match self.held.last() {
                Some(Held::Paren(paren)) => {
                    self.error(ParseErrorKind::UnbalancedParen, paren.clone())
                }
                _ => self.missing_operand(end),
            };
        }

        while let Some(held) = self.held.pop() {
            match held {
                Held::Op(app, _) => self.output.push(Instruction::Apply(app)),
                Held::Paren(paren) => return self.error(ParseErrorKind::UnbalancedParen, paren),
            }
        }
        Ok(self.output)
    }
}
