//! Card record construction
//!
//! Merges the file-name-derived identity with infobox extraction and keyword
//! detection. Building never fails: the upstream wikitext is uncurated, so
//! absent or malformed fields degrade to defaults and the anomaly is surfaced
//! through the accompanying report instead of an error.

use crate::catalog::titles::split_image_extension;
use crate::core::{CardId, CardName, CardRecord};
use crate::wikitext::{AbilityDetector, FieldExtractor};

/// Default directory name joined onto image paths
pub const DEFAULT_IMAGES_DIR: &str = "dm01_images";

/// Infobox key synonyms, tried in order
const COST_KEYS: &[&str] = &["cost", "mana cost"];
const POWER_KEYS: &[&str] = &["power", "power value"];
const TYPE_KEYS: &[&str] = &["type", "card type"];
const CIVILIZATION_KEYS: &[&str] = &["civilization", "civil"];
const TRIBE_KEYS: &[&str] = &["tribe", "race", "subtype"];
const TEXT_KEYS: &[&str] = &["ability text", "text", "power text", "effect"];

/// Per-record anomaly report for the caller to log; the builder itself
/// stays silent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordReport {
    /// Fields with no matching infobox key
    pub missing: Vec<&'static str>,
    /// Numeric fields whose matched value did not parse, with the raw text
    pub malformed: Vec<(&'static str, String)>,
}

impl RecordReport {
    pub fn is_clean(&self) -> bool {
        self.missing.is_empty() && self.malformed.is_empty()
    }
}

/// Builds normalized card records from (file name, wikitext) pairs.
///
/// Holds the compiled extraction machinery so repeated builds share it;
/// each build is pure and idempotent.
pub struct RecordBuilder {
    extractor: FieldExtractor,
    detector: AbilityDetector,
    images_dir: String,
}

impl RecordBuilder {
    pub fn new() -> Self {
        Self::with_images_dir(DEFAULT_IMAGES_DIR)
    }

    pub fn with_images_dir(images_dir: impl Into<String>) -> Self {
        RecordBuilder {
            extractor: FieldExtractor::new(),
            detector: AbilityDetector::new(),
            images_dir: images_dir.into(),
        }
    }

    pub fn images_dir(&self) -> &str {
        &self.images_dir
    }

    pub fn build(&self, file_name: &str, wikitext: &str) -> CardRecord {
        self.build_reporting(file_name, wikitext).0
    }

    /// Build a record plus the anomaly report for it.
    pub fn build_reporting(&self, file_name: &str, wikitext: &str) -> (CardRecord, RecordReport) {
        let mut report = RecordReport::default();

        let name = card_name_from_file(file_name);
        let id = card_id_from_name(&name);

        let cost = self.numeric_field(wikitext, "cost", COST_KEYS, &mut report);
        let power = self.numeric_field(wikitext, "power", POWER_KEYS, &mut report);
        let card_type = self.text_field(wikitext, "type", TYPE_KEYS, &mut report);
        let civilization = self.text_field(wikitext, "civilization", CIVILIZATION_KEYS, &mut report);
        let tribe = self.text_field(wikitext, "tribe", TRIBE_KEYS, &mut report);
        let text = self.text_field(wikitext, "text", TEXT_KEYS, &mut report);

        let record = CardRecord {
            id: CardId::new(id),
            name: CardName::new(name),
            img: format!("{}/{}", self.images_dir, file_name),
            cost,
            power,
            card_type,
            civilization,
            tribe,
            text,
            abilities: self.detector.detect(wikitext),
        };
        (record, report)
    }

    fn text_field(
        &self,
        wikitext: &str,
        label: &'static str,
        keys: &[&str],
        report: &mut RecordReport,
    ) -> String {
        match self.extractor.field(wikitext, keys) {
            Some(value) => value,
            None => {
                report.missing.push(label);
                String::new()
            }
        }
    }

    /// An absent field and a matched-but-empty value both resolve to 0; a
    /// matched non-numeric value resolves to 0 and is reported as malformed.
    fn numeric_field(
        &self,
        wikitext: &str,
        label: &'static str,
        keys: &[&str],
        report: &mut RecordReport,
    ) -> u32 {
        match self.extractor.field(wikitext, keys) {
            Some(value) => {
                let trimmed = value.trim();
                if trimmed.is_empty() {
                    0
                } else {
                    match trimmed.parse::<u32>() {
                        Ok(n) => n,
                        Err(_) => {
                            report.malformed.push((label, value));
                            0
                        }
                    }
                }
            }
            None => {
                report.missing.push(label);
                0
            }
        }
    }
}

impl Default for RecordBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// "Aqua_Hulcus.jpg" -> "Aqua Hulcus"
fn card_name_from_file(file_name: &str) -> String {
    let stem = split_image_extension(file_name).map_or(file_name, |(stem, _)| stem);
    stem.replace('_', " ")
}

/// "Aqua  Hulcus" -> "Aqua_Hulcus" (whitespace runs become one underscore)
fn card_id_from_name(name: &str) -> String {
    let mut id = String::with_capacity(name.len());
    let mut in_whitespace = false;
    for c in name.chars() {
        if c.is_whitespace() {
            if !in_whitespace {
                id.push('_');
            }
            in_whitespace = true;
        } else {
            id.push(c);
            in_whitespace = false;
        }
    }
    id
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wikitext::Ability;

    const AQUA_HULCUS: &str = "\
{{Cardtable
| image = Aqua_Hulcus.jpg
| civilization = [[Water]]
| type = Creature
| cost = 7
| race = [[Liquid People]]
| power = 3
| text = ■ Blocker\nWhen you put this creature into the battle zone,\nyou may draw a card.
| flavor = None can escape its grasp.
}}";

    #[test]
    fn test_build_full_record() {
        let builder = RecordBuilder::new();
        let (record, report) = builder.build_reporting("Aqua_Hulcus.jpg", AQUA_HULCUS);

        assert_eq!(record.id.as_str(), "Aqua_Hulcus");
        assert_eq!(record.name.as_str(), "Aqua Hulcus");
        assert_eq!(record.img, "dm01_images/Aqua_Hulcus.jpg");
        assert_eq!(record.cost, 7);
        assert_eq!(record.power, 3);
        assert_eq!(record.card_type, "Creature");
        assert_eq!(record.civilization, "Water");
        assert_eq!(record.tribe, "Liquid People");
        assert!(record.text.starts_with("■ Blocker"));
        assert_eq!(record.abilities.as_slice(), &[Ability::Blocker]);
        assert!(report.is_clean());
    }

    #[test]
    fn test_missing_fields_degrade_to_defaults() {
        let builder = RecordBuilder::new();
        let (record, report) = builder.build_reporting("Mystery_Card.png", "no infobox here");

        assert_eq!(record.id.as_str(), "Mystery_Card");
        assert_eq!(record.name.as_str(), "Mystery Card");
        assert_eq!(record.cost, 0);
        assert_eq!(record.power, 0);
        assert_eq!(record.card_type, "");
        assert_eq!(record.civilization, "");
        assert_eq!(record.tribe, "");
        assert_eq!(record.text, "");
        assert_eq!(record.abilities.as_slice(), &[Ability::None]);
        assert_eq!(
            report.missing,
            vec!["cost", "power", "type", "civilization", "tribe", "text"]
        );
        assert!(report.malformed.is_empty());
    }

    #[test]
    fn test_malformed_numeric_falls_back_to_zero() {
        let builder = RecordBuilder::new();
        let (record, report) =
            builder.build_reporting("Gatling_Skyterror.jpg", "| cost = 6\n| power = 7000+");

        assert_eq!(record.cost, 6);
        assert_eq!(record.power, 0);
        assert_eq!(report.malformed, vec![("power", "7000+".to_string())]);
    }

    #[test]
    fn test_empty_numeric_value_is_zero_without_report() {
        let builder = RecordBuilder::new();
        let (record, report) = builder.build_reporting("Blank.jpg", "| cost =\n| power = 2");

        assert_eq!(record.cost, 0);
        assert_eq!(record.power, 2);
        assert!(report.malformed.is_empty());
        assert!(!report.missing.contains(&"cost"));
    }

    #[test]
    fn test_uppercase_extension_and_jpeg() {
        let builder = RecordBuilder::new();
        let record = builder.build("Bolshack_Dragon.JPEG", "");
        assert_eq!(record.name.as_str(), "Bolshack Dragon");
        assert_eq!(record.img, "dm01_images/Bolshack_Dragon.JPEG");
    }

    #[test]
    fn test_unrecognized_extension_is_kept_in_name() {
        let builder = RecordBuilder::new();
        let record = builder.build("Strange_Scan.webp", "");
        assert_eq!(record.name.as_str(), "Strange Scan.webp");
    }

    #[test]
    fn test_custom_images_dir() {
        let builder = RecordBuilder::with_images_dir("assets/cards");
        let record = builder.build("Aqua_Hulcus.jpg", "");
        assert_eq!(record.img, "assets/cards/Aqua_Hulcus.jpg");
    }

    #[test]
    fn test_build_is_idempotent() {
        let builder = RecordBuilder::new();
        let first = builder.build("Aqua_Hulcus.jpg", AQUA_HULCUS);
        let second = builder.build("Aqua_Hulcus.jpg", AQUA_HULCUS);
        assert_eq!(first, second);
    }

    #[test]
    fn test_id_collapses_whitespace_runs() {
        assert_eq!(card_id_from_name("Aqua  Hulcus"), "Aqua_Hulcus");
        assert_eq!(card_id_from_name("Aqua Hulcus"), "Aqua_Hulcus");
    }
}
