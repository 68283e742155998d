use super::{ctx::RollContext, error::EvalError, num::Number, roller::Roller, value::*, RResult};
use crate::common::*;
use crate::narrative::Pool;
use crate::oracle;

fn required(op: Operator, value: Option<Value>) -> RResult<Value> {
    value.ok_or(EvalError::MissingOperand { op })
}

fn expect_roll(op: Operator, value: Option<Value>) -> RResult<Roll> {
    match required(op, value)? {
        Value::Roll(roll) => Ok(roll),
        other => Err(EvalError::Incompatible {
            op,
            found: other.kind(),
        }),
    }
}

fn count_or(value: Option<Value>, default: Int) -> Int {
    value.map_or(default, |x| x.number().as_int())
}

fn arithmetic(
    op: Operator,
    left: Option<Value>,
    right: Option<Value>,
    f: fn(Number, Number) -> Number,
) -> RResult<Value> {
    let l = required(op, left)?.number();
    let r = required(op, right)?.number();
    Ok(f(l, r).into())
}

impl<R: Roller> RollContext<R> {
    pub(super) fn apply(
        &mut self,
        op: Operator,
        left: Option<Value>,
        right: Option<Value>,
    ) -> RResult<Value> {
        use Operator::*;
        match op {
            Dice => Ok(self.dice(left, right)),
            Fudge => Ok(self.fudge(left)),
            Explode => self.explode(expect_roll(op, left)?),
            KeepHighest | KeepLowest => {
                let (roll, count) = self.rebind(left, right);
                self.keep(expect_roll(op, roll)?, count, op == KeepHighest)
            }
            GreaterThan => {
                let (roll, threshold) = self.rebind(left, right);
                let threshold = required(op, threshold)?.number().as_float();
                self.select(expect_roll(op, roll)?, |die| (die as Float) > threshold)
            }
            Equal => {
                let (roll, target) = self.rebind(left, right);
                let target = required(op, target)?.number().as_float();
                self.select(expect_roll(op, roll)?, |die| (die as Float) == target)
            }
            Narrative(pool) => Ok(self.narrative(pool, required(op, left)?)),
            Oracle => Ok(self.oracle(left)),
            Add => arithmetic(op, left, right, |l, r| l + r),
            Sub => arithmetic(op, left, right, |l, r| l - r),
            Mul => arithmetic(op, left, right, |l, r| l * r),
            Div => arithmetic(op, left, right, |l, r| l / r),
        }
    }

    /// When a selecting operator finds a roll where its argument belongs, the left value
    /// goes back on the stack and the roll becomes the operand, with no argument.
    fn rebind(
        &mut self,
        left: Option<Value>,
        right: Option<Value>,
    ) -> (Option<Value>, Option<Value>) {
        match (left, right) {
            (Some(left @ (Value::Roll(_) | Value::Integer(_))), Some(right @ Value::Roll(_))) => {
                self.stack.push(left);
                (Some(right), None)
            }
            pair => pair,
        }
    }

    fn dice(&mut self, count: Option<Value>, sides: Option<Value>) -> Value {
        let count = clamp_count(count_or(count, 1), MAX_DICE);
        let sides = count_or(sides, 6).clamp(1, MAX_DICE);
        Roll::new(1, sides, self.roll(count, 1, sides)).into()
    }

    fn fudge(&mut self, count: Option<Value>) -> Value {
        let count = clamp_count(count_or(count, 1), MAX_DICE);
        Roll::new(-1, 1, self.roll(count, -1, 1)).into()
    }

    fn explode(&mut self, mut roll: Roll) -> RResult<Value> {
        let (min, max) = (roll.min, roll.max);
        let cap = MAX_DICE as usize;
        let mut pending = roll.dice.iter().filter(|&&die| die == max).count();
        while pending > 0 && roll.dice.len() < cap {
            let batch = pending.min(cap - roll.dice.len());
            pending = 0;
            for _ in 0..batch {
                let die = self.roll_one(min, max);
                if die == max {
                    pending += 1;
                }
                roll.value += die;
                roll.dice.push(die);
            }
        }
        Ok(roll.into())
    }

    fn keep(&mut self, roll: Roll, count: Option<Value>, highest: bool) -> RResult<Value> {
        let mut dice = roll.dice.into_vec();
        let count = count_or(count, 1).clamp(0, dice.len() as Int) as usize;
        if highest {
            dice.sort_unstable_by(|a, b| b.cmp(a));
        } else {
            dice.sort_unstable();
        }
        dice.truncate(count);
        let total = dice.iter().sum::<Int>();
        self.kept.extend(dice);
        Ok(Number::Int(total).into())
    }

    fn select(&mut self, roll: Roll, pred: impl Fn(Int) -> bool) -> RResult<Value> {
        let before = self.kept.len();
        self.kept.extend(roll.dice.iter().copied().filter(|&die| pred(die)));
        let count = (self.kept.len() - before) as Int;
        Ok(Number::Int(count).into())
    }

    fn narrative(&mut self, pool: Pool, count: Value) -> Value {
        let faces = pool.faces();
        let last = faces.len() as Int - 1;
        let count = clamp_count(count.number().as_int(), MAX_DICE);
        let shown = self
            .roll(count, 0, last)
            .mapped(|index| faces[index.clamp(0, last) as usize]);
        self.narrative.extend(shown.iter().copied());
        NarrativeRoll::new(shown).into()
    }

    fn oracle(&mut self, count: Option<Value>) -> Value {
        let count = clamp_count(count_or(count, 1), MAX_ORACLE_DICE);
        let sum: Int = self.roll(count, 0, oracle::MAX_FACE).iter().sum();
        let phrase = oracle::phrase(sum);
        self.comment = format!("{} {}", phrase, self.comment);
        self.oracle.push(phrase);
        Number::Int(sum).into()
    }
}
