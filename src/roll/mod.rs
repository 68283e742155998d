mod ctx;
mod error;
mod library;
mod num;
mod roller;
mod value;

use crate::outcome::Outcome;
use crate::parse::Instruction;

type RResult<T> = Result<T, EvalError>;

pub use ctx::RollContext;
pub use error::EvalError;
pub use num::Number;
pub use roller::{FnRoller, Roller, SequenceRoller};
pub use value::{NarrativeRoll, Roll, Value, Valued};

/// Runs a postfix program to completion, drawing dice from `roller`.
///
/// `command` is the expression the program was compiled from, reported back in the [Outcome].
pub fn eval<R: Roller>(
    program: &[Instruction],
    command: &str,
    comment: &str,
    roller: R,
) -> RResult<Outcome> {
    RollContext::new(roller, command, comment).eval(program)
}
