use crate::common::Int;
use rand::Rng;

/// A source of die results.
///
/// `roll` returns a value in `min..=max`. Every [`rand::Rng`] is a roller; closures can be
/// used through [FnRoller] and fixed sequences through [SequenceRoller].
pub trait Roller {
    fn roll(&mut self, min: Int, max: Int) -> Int;
}

impl<R: Rng> Roller for R {
    fn roll(&mut self, min: Int, max: Int) -> Int {
        self.gen_range(min..=max)
    }
}

/// Adapts a `(min, max) -> result` closure into a [Roller].
#[derive(Debug, Copy, Clone)]
pub struct FnRoller<F>(pub F);

impl<F: FnMut(Int, Int) -> Int> Roller for FnRoller<F> {
    fn roll(&mut self, min: Int, max: Int) -> Int {
        (self.0)(min, max)
    }
}

/// Replays a fixed list of results, starting over once it runs out.
///
/// Results are returned as given, whatever range is asked for. An empty list always
/// rolls the minimum.
#[derive(Debug, Clone, Default)]
pub struct SequenceRoller {
    values: Vec<Int>,
    next: usize,
}

impl SequenceRoller {
    pub fn new(values: impl Into<Vec<Int>>) -> Self {
        Self {
            values: values.into(),
            next: 0,
        }
    }
}

impl Roller for SequenceRoller {
    fn roll(&mut self, min: Int, _: Int) -> Int {
        if self.values.is_empty() {
            return min;
        }
        let ret = self.values[self.next % self.values.len()];
        self.next += 1;
        ret
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn test_sequence_roller_cycles() {
        let mut roller = SequenceRoller::new([11, 19, 1]);
        let rolled: Vec<_> = (0..5).map(|_| roller.roll(1, 20)).collect();
        assert_eq!(rolled, vec![11, 19, 1, 11, 19]);
        assert_eq!(SequenceRoller::default().roll(-1, 1), -1);
    }

    #[test]
    fn test_fn_roller() {
        let mut roller = FnRoller(|min: Int, max: Int| max - min);
        assert_eq!(roller.roll(1, 20), 19);
    }

    #[test]
    fn test_rng_roller_stays_in_range() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..1000 {
            let x = rng.roll(-1, 1);
            assert!((-1..=1).contains(&x));
        }
        assert_eq!(rng.roll(5, 5), 5);
    }
}
