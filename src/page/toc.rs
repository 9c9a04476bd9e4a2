//! Table of contents extraction.

use std::collections::HashMap;

use serde::Serialize;

use super::descriptor::{ContentElement, ContentNode};

/// Heading levels included in the table of contents.
const TOC_LEVELS: std::ops::RangeInclusive<u8> = 2..=3;

/// One table-of-contents entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TocEntry {
    /// Heading text.
    pub value: String,
    /// Anchor id.
    pub id: String,
    /// Heading level (2 or 3).
    pub level: u8,
}

/// Collects `h2`/`h3` headings in document order.
///
/// Anchors come from the heading's `id` property when present, otherwise
/// from a slug of its text; repeated slugs get `-1`, `-2`, ... suffixes.
/// The body is not modified; see [`anchor_headings`] for the variant that
/// writes generated ids back so they resolve in the rendered page.
#[must_use]
pub fn extract_toc(body: &[ContentNode]) -> Vec<TocEntry> {
    let mut body = body.to_vec();
    anchor_headings(&mut body)
}

/// Gives every `h2`/`h3` heading without an `id` a generated one and
/// returns the table of contents.
///
/// Explicit ids of any heading level are reserved first-come, so a later
/// generated slug never repeats one.
pub fn anchor_headings(body: &mut [ContentNode]) -> Vec<TocEntry> {
    let mut slugger = Slugger::default();
    let mut entries = Vec::new();
    collect(body, &mut slugger, &mut entries);
    entries
}

fn collect(nodes: &mut [ContentNode], slugger: &mut Slugger, entries: &mut Vec<TocEntry>) {
    for node in nodes {
        let ContentNode::Element(element) = node else {
            continue;
        };
        let Some(level) = heading_level(&element.kind) else {
            collect(&mut element.children, slugger, entries);
            continue;
        };

        let id = match explicit_id(element) {
            Some(id) => {
                slugger.reserve(&id);
                Some(id)
            }
            None if TOC_LEVELS.contains(&level) => {
                let id = slugger.slug(&element.text_content());
                element.props.insert("id", id.clone());
                Some(id)
            }
            None => None,
        };

        if let Some(id) = id.filter(|_| TOC_LEVELS.contains(&level)) {
            entries.push(TocEntry {
                value: element.text_content(),
                id,
                level,
            });
        }
    }
}

fn heading_level(kind: &str) -> Option<u8> {
    let level = kind.strip_prefix('h')?.parse::<u8>().ok()?;
    (1..=6).contains(&level).then_some(level)
}

fn explicit_id(element: &ContentElement) -> Option<String> {
    element.props.get_str("id").map(str::to_string)
}

/// Produces unique, URL-friendly anchors.
///
/// `seen` holds every anchor handed out or reserved; for base slugs it
/// also counts how many suffixes were tried.
#[derive(Debug, Default)]
pub struct Slugger {
    seen: HashMap<String, usize>,
}

impl Slugger {
    /// Slugs `text`, suffixing repeats and skipping reserved anchors.
    pub fn slug(&mut self, text: &str) -> String {
        let base = slugify(text);
        let mut slug = base.clone();
        while self.seen.contains_key(&slug) {
            let count = self.seen.entry(base.clone()).or_insert(0);
            *count += 1;
            slug = format!("{base}-{count}");
        }
        self.seen.insert(slug.clone(), 0);
        slug
    }

    /// Marks `id` as taken so generated slugs avoid it.
    pub fn reserve(&mut self, id: &str) {
        self.seen.entry(id.to_string()).or_insert(0);
    }
}

/// Lowercases, keeps letters and digits (any script), and joins words
/// with `-`.
#[must_use]
pub fn slugify(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    let mut pending_dash = false;
    for c in text.trim().chars() {
        if c.is_alphanumeric() || c == '_' {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.extend(c.to_lowercase());
        } else if c.is_whitespace() || c == '-' {
            pending_dash = true;
        }
    }
    slug
}
