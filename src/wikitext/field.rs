//! Infobox field extraction
//!
//! Pulls named values out of a wiki page's infobox block. A field is a
//! pipe-prefixed key followed by `=` and a value that may run across lines,
//! ending at the next pipe-prefixed line or the end of the document.

use regex::{Regex, RegexBuilder};

/// Extractor with compiled-once cleanup patterns.
///
/// Per-key match patterns are built on demand since callers supply their own
/// synonym lists; the key text is escaped before compilation.
pub struct FieldExtractor {
    /// `[[target]]` or `[[target|display]]`
    link: Regex,
    line_break: Regex,
}

impl FieldExtractor {
    pub fn new() -> Self {
        FieldExtractor {
            link: Regex::new(r"\[\[(?:[^\]|]*\|)?([^\]]*)\]\]").expect("valid link pattern"),
            line_break: Regex::new(r"\r?\n").expect("valid line break pattern"),
        }
    }

    /// Extract the first matching field among `keys`, tried in order.
    ///
    /// Returns `None` when no key matches anywhere in the document. A key
    /// that matches an empty value region yields `Some("")` — callers that
    /// care can tell "absent" from "present but empty".
    pub fn field(&self, wikitext: &str, keys: &[&str]) -> Option<String> {
        for key in keys {
            let pattern = format!(
                r"\|[ \t]*{}[ \t]*=[ \t]*(.*?)(?:\n\||\z)",
                regex::escape(key)
            );
            let Ok(re) = RegexBuilder::new(&pattern)
                .case_insensitive(true)
                .dot_matches_new_line(true)
                .build()
            else {
                continue;
            };

            if let Some(caps) = re.captures(wikitext) {
                let raw = caps.get(1).map_or("", |m| m.as_str());
                return Some(self.clean(raw));
            }
        }
        None
    }

    /// Collapse line breaks to spaces, rewrite link markup to its display
    /// text, and trim.
    fn clean(&self, raw: &str) -> String {
        let flat = self.line_break.replace_all(raw, " ");
        let unlinked = self.link.replace_all(&flat, "$1");
        unlinked.trim().to_string()
    }
}

impl Default for FieldExtractor {
    fn default() -> Self {
        Self::new()
    }
}
