//! Wikitext parsing: infobox field extraction and ability keyword detection

pub mod abilities;
pub mod field;

pub use abilities::{Ability, AbilityDetector, AbilitySet, ABILITY_VOCABULARY};
pub use field::FieldExtractor;
