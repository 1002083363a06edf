//! Slug validation and heading anchor generation.

#[cfg(test)]
#[path = "slug_test.rs"]
mod slug_test;

use std::collections::HashMap;

use crate::error::ContentError;

/// Check that `slug` is lowercase kebab-case (`a-z`, `0-9`, single dashes).
///
/// # Errors
///
/// Returns [`ContentError::InvalidSlug`] when the slug is empty, starts or
/// ends with a dash, contains `--`, or has any other character.
pub fn validate(slug: &str) -> Result<(), ContentError> {
    let is_valid = !slug.is_empty()
        && !slug.starts_with('-')
        && !slug.ends_with('-')
        && !slug.contains("--")
        && slug
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-');

    if is_valid { Ok(()) } else { Err(ContentError::InvalidSlug(slug.to_owned())) }
}

/// Lowercase `text` and collapse every run of non-alphanumerics into one dash.
#[must_use]
pub fn slugify(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut pending_dash = false;
    for c in text.chars() {
        if c.is_alphanumeric() {
            if pending_dash && !out.is_empty() {
                out.push('-');
            }
            pending_dash = false;
            out.extend(c.to_lowercase());
        } else {
            pending_dash = true;
        }
    }
    out
}

/// Hands out unique anchor ids for a sequence of headings.
///
/// Repeated heading text gets `-2`, `-3`, ... suffixes so in-page links stay
/// unambiguous. Feed every heading through one instance in document order.
#[derive(Debug, Default)]
pub struct Anchors {
    seen: HashMap<String, usize>,
}

impl Anchors {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next(&mut self, heading: &str) -> String {
        let mut base = slugify(heading);
        if base.is_empty() {
            base.push_str("section");
        }
        let count = self.seen.entry(base.clone()).or_insert(0);
        *count += 1;
        if *count == 1 { base } else { format!("{base}-{count}") }
    }
}
