//! Narrative dice: symbol faces, their tallies and how they read.

use crate::common::Int;
use serde::Serialize;
use std::fmt;
use std::ops::Add;

/// A symbol printed on a narrative die face.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Effect {
    Success,
    Failure,
    Advantage,
    Threat,
    Triumph,
    Despair,
}

impl Effect {
    pub const fn tally(self) -> Tally {
        match self {
            Self::Success => Tally::new(1, 0, 0),
            Self::Failure => Tally::new(0, 0, -1),
            Self::Advantage => Tally::new(0, 0, 1),
            Self::Threat => Tally::new(-1, 0, 0),
            Self::Triumph => Tally::new(1, 1, 0),
            Self::Despair => Tally::new(-1, -1, 0),
        }
    }
}

/// The effects shown on one rolled face. Blank faces are empty.
pub type Face = &'static [Effect];

/// Summed `(value, consequence, side effect)` of any number of effects.
#[derive(Debug, Default, Copy, Clone, Eq, PartialEq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Tally {
    pub value: Int,
    pub consequence: Int,
    pub side_effect: Int,
}

impl Tally {
    pub const fn new(value: Int, consequence: Int, side_effect: Int) -> Self {
        Self {
            value,
            consequence,
            side_effect,
        }
    }

    pub fn of_faces(faces: &[Face]) -> Self {
        faces
            .iter()
            .flat_map(|face| face.iter())
            .map(|effect| effect.tally())
            .sum()
    }

    const fn components(self) -> [Int; 3] {
        [self.value, self.consequence, self.side_effect]
    }
}

impl Add for Tally {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self::new(
            self.value + rhs.value,
            self.consequence + rhs.consequence,
            self.side_effect + rhs.side_effect,
        )
    }
}

impl std::iter::Sum for Tally {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::default(), Add::add)
    }
}

// (singular, plural) names of each tally component, positive side first.
const NAMES: [[(&str, &str); 2]; 3] = [
    [("Success", "Successes"), ("Failure", "Failures")],
    [("Triumph", "Triumphs"), ("Despair", "Despairs")],
    [("Advantage", "Advantages"), ("Threat", "Threats")],
];

fn named(component: Int, names: [(&'static str, &'static str); 2]) -> (&'static str, &'static str) {
    if component > 0 {
        names[0]
    } else {
        names[1]
    }
}

fn nonzero_components(tally: Tally) -> impl Iterator<Item = (Int, (&'static str, &'static str))> {
    tally
        .components()
        .into_iter()
        .zip(NAMES)
        .filter(|(n, _)| *n != 0)
        .map(|(n, names)| (n, named(n, names)))
}

/// Reads a tally aloud, e.g. `"3 Successes, 1 Threat"`.
pub fn describe(tally: Tally) -> String {
    let parts: Vec<String> = nonzero_components(tally)
        .map(|(n, (singular, plural))| {
            let count = n.abs();
            format!("{} {}", count, if count > 1 { plural } else { singular })
        })
        .collect();
    if parts.is_empty() {
        "No effect".to_string()
    } else {
        parts.join(", ")
    }
}

/// Lists every rolled face in order, e.g. `"(Success, Advantage), (Nothing)"`.
pub fn render_faces(faces: &[Face]) -> String {
    faces
        .iter()
        .map(|face| {
            let names: Vec<&str> = face
                .iter()
                .flat_map(|effect| nonzero_components(effect.tally()))
                .flat_map(|(n, (singular, _))| {
                    std::iter::repeat(singular).take(n.unsigned_abs() as usize)
                })
                .collect();
            if names.is_empty() {
                "(Nothing)".to_string()
            } else {
                format!("({})", names.join(", "))
            }
        })
        .collect::<Vec<_>>()
        .join(", ")
}

/// The narrative dice pools, one per operator keyword.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Pool {
    Ability,
    Difficulty,
    Proficiency,
    Challenge,
    Boost,
    Setback,
}

use Effect::*;

const ABILITY: [Face; 8] = [
    &[Success],
    &[Advantage],
    &[Success, Advantage],
    &[Success, Success],
    &[Advantage],
    &[Success],
    &[Advantage, Advantage],
    &[],
];

const DIFFICULTY: [Face; 8] = [
    &[Threat],
    &[Failure],
    &[Threat, Failure],
    &[Threat, Threat],
    &[Failure],
    &[Threat],
    &[Failure, Failure],
    &[],
];

const PROFICIENCY: [Face; 12] = [
    &[Advantage, Advantage],
    &[Advantage],
    &[Advantage, Advantage],
    &[Triumph],
    &[Success],
    &[Success, Advantage],
    &[Success],
    &[Success, Advantage],
    &[Success, Success],
    &[Success, Advantage],
    &[Success, Success],
    &[],
];

const CHALLENGE: [Face; 12] = [
    &[Threat, Threat],
    &[Threat],
    &[Threat, Threat],
    &[Threat],
    &[Threat, Failure],
    &[Failure],
    &[Threat, Failure],
    &[Failure],
    &[Failure, Failure],
    &[Despair],
    &[Failure, Failure],
    &[],
];

const BOOST: [Face; 6] = [&[Threat], &[Threat], &[Failure], &[Failure], &[], &[]];

const SETBACK: [Face; 6] = [
    &[Success],
    &[Success, Advantage],
    &[Advantage, Advantage],
    &[Advantage],
    &[],
    &[],
];

impl Pool {
    /// Faces of one die of this pool, indexed by the rolled face number.
    pub const fn faces(self) -> &'static [Face] {
        match self {
            Self::Ability => &ABILITY,
            Self::Difficulty => &DIFFICULTY,
            Self::Proficiency => &PROFICIENCY,
            Self::Challenge => &CHALLENGE,
            Self::Boost => &BOOST,
            Self::Setback => &SETBACK,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ability => "swa",
            Self::Difficulty => "swd",
            Self::Proficiency => "swp",
            Self::Challenge => "swc",
            Self::Boost => "swb",
            Self::Setback => "sws",
        }
    }
}

impl fmt::Display for Pool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_face_counts() {
        assert_eq!(Pool::Ability.faces().len(), 8);
        assert_eq!(Pool::Difficulty.faces().len(), 8);
        assert_eq!(Pool::Proficiency.faces().len(), 12);
        assert_eq!(Pool::Challenge.faces().len(), 12);
        assert_eq!(Pool::Boost.faces().len(), 6);
        assert_eq!(Pool::Setback.faces().len(), 6);
    }

    #[test]
    fn test_triumph_and_despair_are_exclusive() {
        let has = |pool: Pool, effect: Effect| {
            pool.faces().iter().any(|face| face.contains(&effect))
        };
        for pool in [
            Pool::Ability,
            Pool::Difficulty,
            Pool::Proficiency,
            Pool::Challenge,
            Pool::Boost,
            Pool::Setback,
        ] {
            assert_eq!(has(pool, Triumph), pool == Pool::Proficiency);
            assert_eq!(has(pool, Despair), pool == Pool::Challenge);
        }
    }

    #[test]
    fn test_tally() {
        let faces = &Pool::Ability.faces()[..4];
        assert_eq!(Tally::of_faces(faces), Tally::new(4, 0, 2));
        assert_eq!(Tally::of_faces(&[]), Tally::default());
        assert_eq!(Triumph.tally() + Despair.tally(), Tally::default());
    }

    #[test]
    fn test_describe() {
        assert_eq!(describe(Tally::new(4, 0, 2)), "4 Successes, 2 Advantages");
        assert_eq!(describe(Tally::new(1, 1, -1)), "1 Success, 1 Triumph, 1 Threat");
        assert_eq!(describe(Tally::new(-2, -2, 0)), "2 Failures, 2 Despairs");
        assert_eq!(describe(Tally::new(-1, -1, -3)), "1 Failure, 1 Despair, 3 Threats");
        assert_eq!(describe(Tally::default()), "No effect");
    }

    #[test]
    fn test_render_faces() {
        let faces: Vec<Face> = Pool::Ability.faces().iter().copied().collect();
        assert_eq!(
            render_faces(&faces),
            "(Success), (Advantage), (Success, Advantage), (Success, Success), \
             (Advantage), (Success), (Advantage, Advantage), (Nothing)"
        );
        assert_eq!(render_faces(&[&[Triumph]]), "(Success, Triumph)");
        assert_eq!(render_faces(&[&[Threat, Failure]]), "(Failure, Threat)");
        assert_eq!(render_faces(&[]), "");
    }
}
