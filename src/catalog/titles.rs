//! Gallery title and image URL handling
//!
//! The gallery page lists image titles in wiki order; only recognized image
//! files become cards, and repeated titles are collapsed to their first
//! occurrence. Image URLs from the wiki CDN carry revision suffixes and
//! cache-buster query strings that must be stripped before the bare file
//! name can be recovered.

use rustc_hash::FxHashSet;

/// Extensions recognized as card images
const IMAGE_EXTENSIONS: [&str; 3] = [".png", ".jpg", ".jpeg"];

/// Split a recognized image extension off a file name, case-insensitively.
///
/// "Aqua_Hulcus.JPG" -> Some(("Aqua_Hulcus", ".JPG")); None when the name
/// has no recognized extension.
pub fn split_image_extension(file_name: &str) -> Option<(&str, &str)> {
    for ext in IMAGE_EXTENSIONS {
        if file_name.len() > ext.len() {
            let (stem, tail) = file_name.split_at(file_name.len() - ext.len());
            if tail.eq_ignore_ascii_case(ext) {
                return Some((stem, tail));
            }
        }
    }
    None
}

pub fn has_image_extension(title: &str) -> bool {
    split_image_extension(title).is_some()
}

/// Keep only titles with a recognized image extension, dropping repeats
/// while preserving first-seen order.
pub fn filter_image_titles<I, S>(titles: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut seen = FxHashSet::default();
    titles
        .into_iter()
        .map(Into::into)
        .filter(|t| has_image_extension(t))
        .filter(|t| seen.insert(t.clone()))
        .collect()
}

/// Recover the stored file name from a wiki CDN image URL.
///
/// Strips the query string and any "/revision/latest" suffix, then takes the
/// final path segment:
/// ".../images/a/ab/Aqua_Hulcus.jpg/revision/latest?cb=123" -> "Aqua_Hulcus.jpg"
pub fn file_name_from_url(url: &str) -> Option<String> {
    let no_query = url.split_once('?').map_or(url, |(base, _)| base);
    let base = match no_query.find("/revision/latest") {
        Some(idx) => &no_query[..idx],
        None => no_query,
    };

    base.rsplit('/')
        .next()
        .filter(|segment| !segment.is_empty())
        .map(|segment| segment.to_string())
}
