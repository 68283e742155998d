use crate::common::Int;

/// Prompts for the game master, indexed by the sum rolled with `gm`.
pub const PHRASES: [&str; 30] = [
    "Separate them",
    "Put them together",
    "Show their connection",
    "Show their connection increasing",
    "Show their connection strained",
    "The weather obstructs you",
    "The landscape obstructs you",
    "The enviroment obstructs you",
    "A beast obstructs you",
    "An NPC obstructs you",
    "Your past obstructs you",
    "Your equipment obstructs you",
    "An old friend makes contact",
    "An old enemy reappears",
    "Something bad on the horizon",
    "Something you believe in happens",
    "Something good happens",
    "Something useful happens",
    "You lose some equipment",
    "You lose a resource",
    "You find a trap",
    "Tensions escalate",
    "Show what your character is good at",
    "Show what your character likes",
    "Show what your character thinks of another character",
    "Someone has a job for you",
    "Someone has an offer for you",
    "Someone has something you want",
    "It is valuable, but the price is high",
    "Lose something, or another character is hurt",
];

/// Highest face of an oracle die.
pub const MAX_FACE: Int = PHRASES.len() as Int - 1;

/// The phrase for a rolled sum; sums outside the table read its nearest end.
pub fn phrase(sum: Int) -> &'static str {
    PHRASES[sum.clamp(0, MAX_FACE) as usize]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phrase_lookup() {
        assert_eq!(phrase(0), "Separate them");
        assert_eq!(phrase(12), "An old friend makes contact");
        assert_eq!(phrase(29), "Lose something, or another character is hurt");
    }

    #[test]
    fn test_phrase_clamps() {
        assert_eq!(phrase(-4), PHRASES[0]);
        assert_eq!(phrase(30), PHRASES[29]);
        assert_eq!(phrase(290), PHRASES[29]);
    }
}
