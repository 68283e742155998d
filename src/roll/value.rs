use super::num::Number;
use crate::common::*;
use crate::narrative::Face;

#[enum_dispatch::enum_dispatch]
pub trait Valued {
    /// The number this value contributes to arithmetic.
    fn number(&self) -> Number;

    /// A short name for error messages.
    fn kind(&self) -> &'static str;
}

/// Anything that can sit on the evaluation stack.
#[derive(Debug, Clone, PartialEq)]
#[enum_dispatch::enum_dispatch(Valued)]
pub enum Value {
    Integer(Number),
    Roll(Roll),
    Narrative(NarrativeRoll),
}

impl Valued for Number {
    fn number(&self) -> Number {
        *self
    }

    fn kind(&self) -> &'static str {
        "number"
    }
}

/// A group of numeric dice rolled together.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Roll {
    pub min: Int,
    pub max: Int,
    pub sides: Int,
    pub dice: NonEmpty<Int>,
    pub value: Int,
}

impl Roll {
    pub fn new(min: Int, max: Int, dice: NonEmpty<Int>) -> Self {
        let value = dice.iter().sum();
        Self {
            min,
            max,
            sides: max - min + 1,
            dice,
            value,
        }
    }
}

impl Valued for Roll {
    fn number(&self) -> Number {
        self.value.into()
    }

    fn kind(&self) -> &'static str {
        "dice roll"
    }
}

/// A group of narrative dice rolled together.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct NarrativeRoll {
    pub faces: NonEmpty<Face>,
    pub value: Int,
}

impl NarrativeRoll {
    pub fn new(faces: NonEmpty<Face>) -> Self {
        let value = faces
            .iter()
            .flat_map(|face| face.iter())
            .map(|effect| effect.tally().value)
            .sum();
        Self { faces, value }
    }
}

impl Valued for NarrativeRoll {
    fn number(&self) -> Number {
        self.value.into()
    }

    fn kind(&self) -> &'static str {
        "narrative roll"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::narrative::Effect;
    use vec1::vec1;

    #[test]
    fn test_roll_value() {
        let roll = Roll::new(1, 20, vec1![11, 19, 1]);
        assert_eq!(roll.sides, 20);
        assert_eq!(roll.value, 31);
        assert_eq!(Value::from(roll).number(), Number::Int(31));

        let fudge = Roll::new(-1, 1, vec1![-1, 0, -1]);
        assert_eq!(fudge.sides, 3);
        assert_eq!(fudge.value, -2);
    }

    #[test]
    fn test_narrative_value() {
        const TRIUMPH: Face = &[Effect::Triumph];
        const BLANK: Face = &[];
        const THREATS: Face = &[Effect::Threat, Effect::Threat];

        let roll = NarrativeRoll::new(vec1![TRIUMPH, BLANK, THREATS]);
        assert_eq!(roll.value, -1);
        assert_eq!(Value::from(roll).kind(), "narrative roll");
    }

    #[test]
    fn test_integer_value() {
        let value: Value = Number::Float(2.5).into();
        assert_eq!(value.number(), Number::Float(2.5));
        assert_eq!(value.kind(), "number");
    }
}
