//! Catalog assembly and serialization
//!
//! An ordered collection of card records, serialized wholesale as the static
//! data file the browser prototype loads. Input order is preserved; nothing
//! is deduplicated or sorted here.

use crate::core::{CardId, CardRecord};
use crate::Result;

/// Header line for the generated ES module form
const JS_MODULE_HEADER: &str = "// AUTO-GENERATED by dmcat";

/// Ordered card catalog
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    cards: Vec<CardRecord>,
}

impl Catalog {
    pub fn new() -> Self {
        Catalog { cards: Vec::new() }
    }

    pub fn from_records(cards: Vec<CardRecord>) -> Self {
        Catalog { cards }
    }

    pub fn push(&mut self, record: CardRecord) {
        self.cards.push(record);
    }

    pub fn cards(&self) -> &[CardRecord] {
        &self.cards
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CardRecord> {
        self.cards.iter()
    }

    /// Look up a card by id. Linear scan; catalogs are a few hundred entries.
    pub fn get(&self, id: &str) -> Option<&CardRecord> {
        self.cards.iter().find(|c| c.id.as_str() == id)
    }

    /// Ids of every card, in catalog order
    pub fn ids(&self) -> Vec<CardId> {
        self.cards.iter().map(|c| c.id.clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Serialize as the pretty-printed JSON array written to cardData.json
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.cards)?)
    }

    /// Parse a catalog back from its JSON form
    pub fn from_json(json: &str) -> Result<Self> {
        let cards: Vec<CardRecord> = serde_json::from_str(json)?;
        Ok(Catalog { cards })
    }

    /// Serialize as an ES module exporting the card array (the cardData.js
    /// form consumed directly by a `<script type="module">` front end)
    pub fn to_js_module(&self) -> Result<String> {
        let json = self.to_json()?;
        Ok(format!(
            "{JS_MODULE_HEADER}\nexport const cards = {json};\n"
        ))
    }
}

impl IntoIterator for Catalog {
    type Item = CardRecord;
    type IntoIter = std::vec::IntoIter<CardRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.into_iter()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a CardRecord;
    type IntoIter = std::slice::Iter<'a, CardRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.iter()
    }
}

impl FromIterator<CardRecord> for Catalog {
    fn from_iter<I: IntoIterator<Item = CardRecord>>(iter: I) -> Self {
        Catalog {
            cards: iter.into_iter().collect(),
        }
    }
}
