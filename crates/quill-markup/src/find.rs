//! Enumeration of constructs in a document.
//!
//! Each scan runs left to right and never reuses characters consumed by an
//! earlier match, so the results of one kind are in document order. The
//! composite finders concatenate single-kind scans; they do not re-sort, so
//! document order holds only within each kind's run.

use crate::grammar::{self, Capture, ConstructKind, ConstructMatch};

/// Every match of `kind` in `text`, as the matched substrings.
#[must_use]
pub fn find(text: &str, kind: ConstructKind) -> Vec<&str> {
    let rule = grammar::rule(kind);
    rule.captures_iter(text)
        .filter_map(|caps| caps.get(0).map(|whole| whole.as_str()))
        .collect()
}

/// Every match of `kind` in `text`, with its named regions.
#[must_use]
pub fn find_matches(text: &str, kind: ConstructKind) -> Vec<ConstructMatch<'_>> {
    grammar::rule(kind).find_matches(text)
}

/// One region of every match of `kind` in `text`.
///
/// Matches where the region is absent (a doctype without a public
/// identifier asked for its `Url`, say) are skipped.
#[must_use]
pub fn find_captures(text: &str, kind: ConstructKind, capture: Capture) -> Vec<&str> {
    find_matches(text, kind)
        .iter()
        .filter_map(|found| found.capture(capture))
        .collect()
}

/// Every tag: self-closing tags, then open tags, then close tags.
#[must_use]
pub fn find_tags(text: &str) -> Vec<&str> {
    [
        ConstructKind::SelfClosingTag,
        ConstructKind::OpenTag,
        ConstructKind::CloseTag,
    ]
    .into_iter()
    .flat_map(|kind| find(text, kind))
    .collect()
}

/// Every entity mnemonic: named, then decimal, then hexadecimal.
#[must_use]
pub fn find_entities(text: &str) -> Vec<&str> {
    [
        ConstructKind::EntityName,
        ConstructKind::EntityNumeric,
        ConstructKind::EntityUnicode,
    ]
    .into_iter()
    .flat_map(|kind| find(text, kind))
    .collect()
}
