use crate::common::Operator;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum EvalError {
    #[error("{op} has nothing to operate on")]
    StackUnderflow { op: Operator },
    #[error("{op} cannot operate on a {found}")]
    Incompatible { op: Operator, found: &'static str },
    #[error("{op} is missing an operand")]
    MissingOperand { op: Operator },
    #[error("nothing was rolled")]
    EmptyStack,
    #[error("{0} values were left over; join them with an operator")]
    LeftoverOperands(usize),
}
