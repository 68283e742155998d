use super::{error::EvalError, num::Number, roller::Roller, value::*, RResult};
use crate::common::*;
use crate::narrative::{self, Face, Tally};
use crate::outcome::{Die, Outcome};
use crate::parse::Instruction;
use tracing::{debug, trace};

/// State of a single evaluation: the operand stack plus everything reported afterwards.
pub struct RollContext<R> {
    roller: R,
    command: String,
    pub(super) stack: Vec<Value>,
    rolls: Vec<Die>,
    pub(super) kept: Vec<Int>,
    pub(super) narrative: Vec<Face>,
    pub(super) comment: String,
    pub(super) oracle: Vec<&'static str>,
}

impl<R: Roller> RollContext<R> {
    pub fn new(roller: R, command: &str, comment: &str) -> Self {
        Self {
            roller,
            command: command.trim().to_ascii_lowercase(),
            stack: Vec::new(),
            rolls: Vec::new(),
            kept: Vec::new(),
            narrative: Vec::new(),
            comment: comment.to_string(),
            oracle: Vec::new(),
        }
    }

    /// Draws one die in `min..=max` and records it.
    pub fn roll_one(&mut self, min: Int, max: Int) -> Int {
        let result = self.roller.roll(min, max);
        trace!(min, max, result, "rolled die");
        self.rolls.push(Die {
            result,
            sides: max - min + 1,
        });
        result
    }

    /// Draws `num` dice in `min..=max`. At least one die is always drawn.
    pub fn roll(&mut self, num: usize, min: Int, max: Int) -> NonEmpty<Int> {
        let mut dice = NonEmpty::new(self.roll_one(min, max));
        for _ in 1..num {
            let die = self.roll_one(min, max);
            dice.push(die);
        }
        dice
    }

    pub fn eval(mut self, program: &[Instruction]) -> RResult<Outcome> {
        for instruction in program {
            self.exec(*instruction)?;
        }
        self.finish()
    }

    fn exec(&mut self, instruction: Instruction) -> RResult<()> {
        match instruction {
            Instruction::Push(x) => self.stack.push(Number::Int(x).into()),
            Instruction::Apply(app) => {
                let right = if app.right {
                    Some(self.pop(app.op)?)
                } else {
                    None
                };
                let left = if app.left {
                    Some(self.pop(app.op)?)
                } else {
                    None
                };
                debug!(op = %app.op, ?left, ?right, "applying operator");
                let value = self.apply(app.op, left, right)?;
                debug!(op = %app.op, result = %value.number(), "applied operator");
                self.stack.push(value);
            }
        }
        Ok(())
    }

    fn pop(&mut self, op: Operator) -> RResult<Value> {
        self.stack.pop().ok_or(EvalError::StackUnderflow { op })
    }

    fn finish(mut self) -> RResult<Outcome> {
        let value = match (self.stack.pop(), self.stack.len()) {
            (Some(value), 0) => value.number(),
            (Some(_), rest) => return Err(EvalError::LeftoverOperands(rest + 1)),
            (None, _) => return Err(EvalError::EmptyStack),
        };

        let is_narrative = !self.rolls.is_empty() && self.rolls.len() == self.narrative.len();
        let tally = is_narrative.then(|| Tally::of_faces(&self.narrative));
        let gm_phrase = if self.oracle.is_empty() {
            None
        } else {
            Some(self.oracle.iter().rev().copied().collect::<Vec<_>>().join(" "))
        };

        Ok(Outcome {
            value,
            command: self.command,
            rolls: self.rolls,
            kept: self.kept,
            comment: self.comment.trim().to_string(),
            is_narrative,
            narrative_tally: tally,
            narrative_description: tally.map(narrative::describe),
            narrative_faces: is_narrative.then(|| narrative::render_faces(&self.narrative)),
            gm_phrase,
        })
    }
}
