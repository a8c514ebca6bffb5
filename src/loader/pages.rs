//! Page store loader
//!
//! A page store is a directory of saved wiki documents, one per card image,
//! named `<image file name>.wikitext` (e.g. `Aqua_Hulcus.jpg.wikitext`).
//! Loading walks the store and builds one record per document. An optional
//! manifest file (one image file name per line, `#` comments) pins the
//! catalog order explicitly; without it, records are ordered by file name so
//! repeated runs over the same store agree.

use crate::catalog::{Catalog, RecordBuilder, RecordReport};
use crate::core::{CardName, CardRecord};
use crate::{CatalogError, Result};
use std::fs;
use std::path::Path;

/// File extension of stored wiki documents
pub const PAGE_EXTENSION: &str = "wikitext";

/// One card's worth of loader trouble, for the caller to log
#[derive(Debug, Clone)]
pub struct Anomaly {
    pub name: CardName,
    /// The manifest named a card with no stored page; the record was built
    /// from empty wikitext
    pub missing_page: bool,
    pub report: RecordReport,
}

/// A loaded catalog plus everything worth warning about
#[derive(Debug, Clone)]
pub struct LoadOutcome {
    pub catalog: Catalog,
    pub anomalies: Vec<Anomaly>,
}

/// Synchronous page store loader
pub struct PageLoader {
    builder: RecordBuilder,
}

impl PageLoader {
    pub fn new() -> Self {
        Self::with_builder(RecordBuilder::new())
    }

    pub fn with_builder(builder: RecordBuilder) -> Self {
        PageLoader { builder }
    }

    /// Load every stored page under `dir` (recursively), ordered by image
    /// file name.
    pub fn load_dir(&self, dir: &Path) -> Result<LoadOutcome> {
        if !dir.exists() {
            return Err(CatalogError::IoError(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("Page store not found: {dir:?}"),
            )));
        }

        let mut rows = Vec::new();
        self.load_directory(dir, &mut rows)?;
        rows.sort_by(|a, b| a.0.cmp(&b.0));
        Ok(outcome_from_rows(rows))
    }

    fn load_directory(&self, dir: &Path, rows: &mut Vec<LoadedRow>) -> Result<()> {
        if !dir.is_dir() {
            return Ok(());
        }

        for entry in fs::read_dir(dir)? {
            let entry = entry?;
            let path = entry.path();

            if path.is_dir() {
                self.load_directory(&path, rows)?;
            } else if path.extension().and_then(|s| s.to_str()) == Some(PAGE_EXTENSION) {
                let file_name = image_file_name(&path)?;
                let content = fs::read_to_string(&path)?;
                let (record, report) = self.builder.build_reporting(&file_name, &content);
                rows.push((file_name, record, report, false));
            }
        }

        Ok(())
    }

    /// Load cards in manifest order. A manifest line naming a card with no
    /// stored page still yields a record (built from empty wikitext), flagged
    /// in the outcome; the generator is best-effort by design.
    pub fn load_manifest(&self, dir: &Path, manifest: &Path) -> Result<LoadOutcome> {
        let content = fs::read_to_string(manifest)?;

        let mut rows = Vec::new();
        for line in content.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let page_path = dir.join(format!("{line}.{PAGE_EXTENSION}"));
            let (wikitext, missing_page) = match fs::read_to_string(&page_path) {
                Ok(text) => (text, false),
                Err(_) => (String::new(), true),
            };

            let (record, report) = self.builder.build_reporting(line, &wikitext);
            rows.push((line.to_string(), record, report, missing_page));
        }

        if rows.is_empty() {
            return Err(CatalogError::InvalidManifestFormat(format!(
                "No card entries in {manifest:?}"
            )));
        }

        Ok(outcome_from_rows(rows))
    }
}

impl Default for PageLoader {
    fn default() -> Self {
        Self::new()
    }
}

/// (image file name, record, report, missing_page)
pub(crate) type LoadedRow = (String, CardRecord, RecordReport, bool);

pub(crate) fn outcome_from_rows(rows: Vec<LoadedRow>) -> LoadOutcome {
    let mut catalog = Catalog::new();
    let mut anomalies = Vec::new();

    for (_, record, report, missing_page) in rows {
        if missing_page || !report.is_clean() {
            anomalies.push(Anomaly {
                name: record.name.clone(),
                missing_page,
                report,
            });
        }
        catalog.push(record);
    }

    LoadOutcome { catalog, anomalies }
}

/// "pages/Aqua_Hulcus.jpg.wikitext" -> "Aqua_Hulcus.jpg"
pub(crate) fn image_file_name(path: &Path) -> Result<String> {
    path.file_stem()
        .and_then(|s| s.to_str())
        .map(|s| s.to_string())
        .ok_or_else(|| CatalogError::InvalidPageFile(format!("{path:?}")))
}
