// Interview domain: rounds, prompt construction, API handlers.
// All LLM calls go through llm_client — no direct HTTP calls here.

pub mod handlers;
pub mod prompts;

use serde::{Deserialize, Serialize};

/// One of the three interview rounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Round {
    Behavioral,
    Technical,
    #[serde(rename = "HR Round")]
    HrRound,
}

impl Round {
    /// Display name — embedded verbatim in prompts and shown in the UI selector.
    pub fn as_str(&self) -> &'static str {
        match self {
            Round::Behavioral => "Behavioral",
            Round::Technical => "Technical",
            Round::HrRound => "HR Round",
        }
    }
}

impl std::fmt::Display for Round {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_serde_behavioral() {
        let round: Round = serde_json::from_str(r#""Behavioral""#).unwrap();
        assert_eq!(round, Round::Behavioral);
    }

    #[test]
    fn test_round_serde_technical() {
        let round: Round = serde_json::from_str(r#""Technical""#).unwrap();
        assert_eq!(round, Round::Technical);
    }

    #[test]
    fn test_round_serde_hr_round_uses_display_name() {
        let round: Round = serde_json::from_str(r#""HR Round""#).unwrap();
        assert_eq!(round, Round::HrRound);
        assert_eq!(serde_json::to_string(&round).unwrap(), r#""HR Round""#);
    }

    #[test]
    fn test_round_display_matches_as_str() {
        for round in [Round::Behavioral, Round::Technical, Round::HrRound] {
            assert_eq!(round.to_string(), round.as_str());
        }
    }
}
