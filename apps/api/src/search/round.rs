//! Round normalization — maps free-form round descriptions onto the canonical vocabulary.
//!
//! Rule order is significant: "final onsite" or "hm phone screen" match several rules,
//! and the first match wins. Both the quick parser and the LLM post-processor go through
//! `normalize_round`, so there is exactly one copy of this table.

use std::fmt;

use serde::{Serialize, Serializer};

/// Canonical interview round labels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Round {
    RecruiterScreen,
    Behavioral,
    HiringManager,
    SystemDesign,
    Onsite,
    #[default]
    Technical,
}

impl Round {
    pub fn label(self) -> &'static str {
        match self {
            Round::RecruiterScreen => "Recruiter Screen",
            Round::Behavioral => "Behavioral",
            Round::HiringManager => "Hiring Manager",
            Round::SystemDesign => "System Design",
            Round::Onsite => "Onsite",
            Round::Technical => "Technical",
        }
    }
}

impl fmt::Display for Round {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl Serialize for Round {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

/// Ordered (needles, round) rules. Evaluated top to bottom; `Technical` is the catch-all.
const ROUND_RULES: &[(&[&str], Round)] = &[
    (&["hr", "phone", "recruiter"], Round::RecruiterScreen),
    (&["behav", "cultur", "fit"], Round::Behavioral),
    (&["manager", "hm"], Round::HiringManager),
    (&["design", "arch"], Round::SystemDesign),
    (&["site", "final"], Round::Onsite),
];

/// Maps any round description to a canonical `Round`. Never fails.
pub fn normalize_round(input: &str) -> Round {
    let lowered = input.to_lowercase();
    ROUND_RULES
        .iter()
        .find(|(needles, _)| needles.iter().any(|n| lowered.contains(n)))
        .map(|(_, round)| *round)
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recruiter_keywords() {
        assert_eq!(normalize_round("HR screen"), Round::RecruiterScreen);
        assert_eq!(normalize_round("phone"), Round::RecruiterScreen);
        assert_eq!(normalize_round("Recruiter call"), Round::RecruiterScreen);
    }

    #[test]
    fn test_behavioral_keywords() {
        assert_eq!(normalize_round("Behavioral Round"), Round::Behavioral);
        assert_eq!(normalize_round("culture"), Round::Behavioral);
        assert_eq!(normalize_round("team fit"), Round::Behavioral);
    }

    #[test]
    fn test_manager_design_onsite_keywords() {
        assert_eq!(normalize_round("manager"), Round::HiringManager);
        assert_eq!(normalize_round("HM"), Round::HiringManager);
        assert_eq!(normalize_round("system design"), Round::SystemDesign);
        assert_eq!(normalize_round("architecture"), Round::SystemDesign);
        assert_eq!(normalize_round("onsite"), Round::Onsite);
        assert_eq!(normalize_round("Final loop"), Round::Onsite);
    }

    #[test]
    fn test_default_is_technical() {
        assert_eq!(normalize_round(""), Round::Technical);
        assert_eq!(normalize_round("coding"), Round::Technical);
        assert_eq!(normalize_round("leetcode"), Round::Technical);
    }

    #[test]
    fn test_first_rule_wins() {
        // "hm phone" hits the recruiter rule before the manager rule
        assert_eq!(normalize_round("hm phone"), Round::RecruiterScreen);
        // "final design" hits design before onsite
        assert_eq!(normalize_round("final design"), Round::SystemDesign);
        // "hiring" does not contain "hr"
        assert_eq!(normalize_round("Hiring Manager"), Round::HiringManager);
    }

    #[test]
    fn test_canonical_labels_are_fixed_points() {
        let all = [
            Round::RecruiterScreen,
            Round::Behavioral,
            Round::HiringManager,
            Round::SystemDesign,
            Round::Onsite,
            Round::Technical,
        ];
        for round in all {
            assert_eq!(normalize_round(round.label()), round, "{round}");
        }
    }

    #[test]
    fn test_normalize_is_idempotent_on_keyword_inputs() {
        let inputs = [
            "recruiter", "behav", "cultur", "fit", "manager", "hm", "design", "arch", "site",
            "final", "technical", "onsite interview", "Culture Fit",
        ];
        for input in inputs {
            let once = normalize_round(input);
            assert_eq!(normalize_round(once.label()), once, "{input}");
        }
    }

    #[test]
    fn test_round_serializes_as_label() {
        let json = serde_json::to_string(&Round::SystemDesign).unwrap();
        assert_eq!(json, r#""System Design""#);
    }
}
