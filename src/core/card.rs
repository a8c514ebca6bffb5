//! Card record type
//!
//! The unit of catalog output. Field names in the serialized form match the
//! static data file consumed by the browser prototype (`type`, `img`).

use crate::core::{CardId, CardName};
use crate::wikitext::{Ability, AbilitySet};
use serde::{Deserialize, Serialize};

/// One catalog entry, built from an image file name and the card page's
/// wikitext. Constructed once, immutable thereafter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardRecord {
    /// Unique within a catalog by convention (duplicates are not rejected)
    pub id: CardId,

    pub name: CardName,

    /// Relative path of the stored card image, e.g. "dm01_images/Aqua_Hulcus.jpg"
    pub img: String,

    /// Mana cost; 0 when the infobox had no resolvable value
    pub cost: u32,

    /// Creature power; 0 when the infobox had no resolvable value
    pub power: u32,

    #[serde(rename = "type")]
    pub card_type: String,

    pub civilization: String,

    pub tribe: String,

    /// Rule text, cleaned of wiki markup
    pub text: String,

    /// Detected ability keywords, in vocabulary order; `["None"]` when no
    /// keyword matched
    pub abilities: AbilitySet,
}

impl CardRecord {
    pub fn has_ability(&self, ability: Ability) -> bool {
        self.abilities.contains(&ability)
    }

    /// True when no ability keyword was detected for this card
    pub fn is_vanilla(&self) -> bool {
        self.abilities.as_slice() == [Ability::None]
    }
}
