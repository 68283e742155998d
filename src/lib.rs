//! Evaluates chat-style dice commands such as `4d6kh3 + 2; stats` or `2swa + 1swd`.
//!
//! A command is split into an expression and a free-text comment, the expression is compiled to a
//! postfix program, and the program is run against a [Roller].

pub mod comment;
mod common;
pub mod error;
pub mod narrative;
pub mod oracle;
pub mod outcome;
pub mod parse;
pub mod roll;

pub use common::{Float, Int, NonEmpty, Operand, Operator, Side, MAX_DICE, MAX_ORACLE_DICE};
pub use error::{Result, RollError};
pub use outcome::{Die, Outcome};
pub use roll::{Number, Roller};

use tracing::debug;

/// Rolls a command with the thread-local random number generator.
pub fn roll(command: &str) -> Result<Outcome> {
    roll_with(command, rand::thread_rng())
}

/// Rolls a command, drawing every die from `roller`.
pub fn roll_with<R: Roller>(command: &str, roller: R) -> Result<Outcome> {
    let (expression, comment) = comment::split_comment(command);
    debug!(expression, comment, "rolling");
    let program = parse::parse(expression)?;
    Ok(roll::eval(&program, expression, comment, roller)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roll::SequenceRoller;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_roll_with_comment() {
        let out = roll_with("2d20 + 1; to hit", SequenceRoller::new([11, 19])).unwrap();
        assert_eq!(out.value, Number::Int(31));
        assert_eq!(out.comment, "to hit");
        assert_eq!(out.to_string(), "rolled *31* for to hit\nDice: 2d20 + 1\nRolls: 11 19");
    }

    #[test]
    fn test_roll_errors() {
        assert!(matches!(roll("2d6 +"), Err(RollError::Parse(_))));
        assert!(matches!(roll("2d6 $ 1"), Err(RollError::Lex(_))));
        assert!(matches!(roll("3d6kh(1d6)"), Err(RollError::Eval(_))));
    }

    #[test]
    fn test_roll_only_comment() {
        assert!(roll("; nothing here").is_err());
    }
}
