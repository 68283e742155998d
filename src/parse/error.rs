use crate::common::{Operator, Side};
use logos::Span;
use std::fmt;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq)]
pub struct SourcePosition {
    pub span: Span,
    pub slice: String,
}

impl SourcePosition {
    pub(crate) fn new(span: Span, slice: &str) -> Self {
        Self {
            span,
            slice: slice.to_string(),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum LexError {
    #[error("unrecognized input {:?} at position {}", .0.slice, .0.span.start)]
    Unrecognized(SourcePosition),
    #[error("integer {:?} at position {} is too large", .0.slice, .0.span.start)]
    IntegerTooLarge(SourcePosition),
}

#[derive(Error, Debug, Clone, PartialEq)]
#[error("error at position {} ({slice:?}): {kind}", .span.start)]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub span: Span,
    pub slice: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ParseErrorKind {
    UnbalancedParen,
    MissingOperand { op: Operator, side: Side },
    UnexpectedOperand,
    EmptyExpression,
}

impl fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnbalancedParen => f.write_str("unbalanced parenthesis"),
            Self::MissingOperand { op, side } => {
                write!(f, "{} is missing its {} operand", op, side)
            }
            Self::UnexpectedOperand => f.write_str("expected an operator before this operand"),
            Self::EmptyExpression => f.write_str("nothing to roll"),
        }
    }
}
