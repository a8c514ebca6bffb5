//! Ability keyword detection
//!
//! Scans raw wikitext for the fixed DM-01 ability vocabulary. Matches are
//! whole-word and case-insensitive, so "Supercharge" never reports "Charge".

use regex::{Regex, RegexBuilder};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::fmt;

/// Ability keywords in the DM-01 base set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Ability {
    Blocker,
    Charger,
    Charge,
    #[serde(rename = "Speed Attacker")]
    SpeedAttacker,
    #[serde(rename = "Double Breaker")]
    DoubleBreaker,
    #[serde(rename = "Triple Breaker")]
    TripleBreaker,
    #[serde(rename = "Shield Trigger")]
    ShieldTrigger,
    Slayer,
    /// Sentinel for cards with no detected keyword
    None,
}

impl Ability {
    pub fn as_str(&self) -> &'static str {
        match self {
            Ability::Blocker => "Blocker",
            Ability::Charger => "Charger",
            Ability::Charge => "Charge",
            Ability::SpeedAttacker => "Speed Attacker",
            Ability::DoubleBreaker => "Double Breaker",
            Ability::TripleBreaker => "Triple Breaker",
            Ability::ShieldTrigger => "Shield Trigger",
            Ability::Slayer => "Slayer",
            Ability::None => "None",
        }
    }
}

impl fmt::Display for Ability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Detection order. "Charger" is listed before "Charge" so catalog output
/// mirrors the vocabulary order cards were scanned with.
pub const ABILITY_VOCABULARY: [Ability; 8] = [
    Ability::Blocker,
    Ability::Charger,
    Ability::Charge,
    Ability::SpeedAttacker,
    Ability::DoubleBreaker,
    Ability::TripleBreaker,
    Ability::ShieldTrigger,
    Ability::Slayer,
];

/// A set of abilities as stored on a card record. Never empty: cards with no
/// detected keyword carry the single `Ability::None` sentinel.
pub type AbilitySet = SmallVec<[Ability; 4]>;

/// Keyword detector with per-entry compiled patterns
pub struct AbilityDetector {
    patterns: Vec<(Ability, Regex)>,
}

impl AbilityDetector {
    pub fn new() -> Self {
        let patterns = ABILITY_VOCABULARY
            .iter()
            .map(|&ability| {
                let pattern = format!(r"\b{}\b", regex::escape(ability.as_str()));
                let re = RegexBuilder::new(&pattern)
                    .case_insensitive(true)
                    .build()
                    .expect("vocabulary patterns are valid");
                (ability, re)
            })
            .collect();
        AbilityDetector { patterns }
    }

    /// Detect which vocabulary keywords occur in the wikitext.
    ///
    /// The result preserves vocabulary order; when nothing matches it is the
    /// singleton `[Ability::None]`.
    pub fn detect(&self, wikitext: &str) -> AbilitySet {
        let mut found: AbilitySet = self
            .patterns
            .iter()
            .filter(|(_, re)| re.is_match(wikitext))
            .map(|&(ability, _)| ability)
            .collect();

        if found.is_empty() {
            found.push(Ability::None);
        }
        found
    }
}

impl Default for AbilityDetector {
    fn default() -> Self {
        Self::new()
    }
}
