use crate::common::Int;
use crate::narrative::Tally;
use crate::roll::Number;
use serde::Serialize;
use std::fmt;

/// One random draw made while rolling.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize)]
pub struct Die {
    pub result: Int,
    pub sides: Int,
}

/// Everything a finished roll reports.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Outcome {
    pub value: Number,
    /// The expression that was rolled, lowercased, without its comment.
    pub command: String,
    pub rolls: Vec<Die>,
    pub kept: Vec<Int>,
    pub comment: String,
    pub is_narrative: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub narrative_tally: Option<Tally>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub narrative_description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub narrative_faces: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gm_phrase: Option<String>,
}

fn join<T: ToString>(items: impl IntoIterator<Item = T>) -> String {
    items
        .into_iter()
        .map(|x| x.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.narrative_description {
            Some(description) => write!(f, "rolled *{}*", description)?,
            None => write!(f, "rolled *{}*", self.value)?,
        }
        if !self.comment.is_empty() {
            write!(f, " for {}", self.comment)?;
        }

        if let Some(faces) = &self.narrative_faces {
            return write!(f, "\nRolls: {}", faces);
        }
        write!(f, "\nDice: {}", self.command)?;
        write!(f, "\nRolls: {}", join(self.rolls.iter().map(|die| die.result)))?;
        if !self.kept.is_empty() {
            write!(f, "\nKept: {}: {}", self.kept.len(), join(&self.kept))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn outcome() -> Outcome {
        Outcome {
            value: Number::Int(30),
            command: "3d20kh2".to_string(),
            rolls: vec![
                Die { result: 11, sides: 20 },
                Die { result: 19, sides: 20 },
                Die { result: 1, sides: 20 },
            ],
            kept: vec![19, 11],
            comment: String::new(),
            is_narrative: false,
            narrative_tally: None,
            narrative_description: None,
            narrative_faces: None,
            gm_phrase: None,
        }
    }

    #[test]
    fn test_display_numeric() {
        let mut out = outcome();
        assert_eq!(
            out.to_string(),
            "rolled *30*\nDice: 3d20kh2\nRolls: 11 19 1\nKept: 2: 19 11"
        );
        out.comment = "to hit".to_string();
        out.kept.clear();
        assert_eq!(out.to_string(), "rolled *30* for to hit\nDice: 3d20kh2\nRolls: 11 19 1");
    }

    #[test]
    fn test_display_narrative() {
        let out = Outcome {
            value: Number::Int(1),
            command: "1swa".to_string(),
            rolls: vec![Die { result: 0, sides: 8 }],
            kept: vec![],
            comment: "sneak".to_string(),
            is_narrative: true,
            narrative_tally: Some(Tally::new(1, 0, 0)),
            narrative_description: Some("1 Success".to_string()),
            narrative_faces: Some("(Success)".to_string()),
            gm_phrase: None,
        };
        assert_eq!(out.to_string(), "rolled *1 Success* for sneak\nRolls: (Success)");
    }

    #[test]
    fn test_serialize() {
        let json = serde_json::to_value(outcome()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "value": 30,
                "command": "3d20kh2",
                "rolls": [
                    {"result": 11, "sides": 20},
                    {"result": 19, "sides": 20},
                    {"result": 1, "sides": 20},
                ],
                "kept": [19, 11],
                "comment": "",
                "isNarrative": false,
            })
        );
    }
}
