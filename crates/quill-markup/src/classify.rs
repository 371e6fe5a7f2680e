//! Whole-string classification.
//!
//! A text is classified as a construct only if the construct spans all of
//! it: `"<b>"` is an open tag, `" <b>"` is not. Classification never fails;
//! empty, partial and malformed input is simply not a construct.

use crate::grammar::{self, ConstructKind};

/// Returns true if `text` is exactly one instance of `kind`.
#[must_use]
pub fn is_construct(text: &str, kind: ConstructKind) -> bool {
    grammar::rule(kind).is_whole_match(text)
}

/// Returns the kind `text` is exactly one instance of, if any.
///
/// The kinds are mutually exclusive, so at most one can match.
#[must_use]
pub fn classify(text: &str) -> Option<ConstructKind> {
    use strum::IntoEnumIterator;

    ConstructKind::iter().find(|kind| is_construct(text, *kind))
}

/// `<!-- text -->`
#[must_use]
pub fn is_comment(text: &str) -> bool {
    is_construct(text, ConstructKind::Comment)
}

/// `<![CDATA[ text ]]>`
#[must_use]
pub fn is_cdata(text: &str) -> bool {
    is_construct(text, ConstructKind::CData)
}

/// `<!DOCTYPE html>`
#[must_use]
pub fn is_doctype(text: &str) -> bool {
    is_construct(text, ConstructKind::Doctype)
}

/// `<p class="x">`
#[must_use]
pub fn is_open_tag(text: &str) -> bool {
    is_construct(text, ConstructKind::OpenTag)
}

/// `</p>`
#[must_use]
pub fn is_close_tag(text: &str) -> bool {
    is_construct(text, ConstructKind::CloseTag)
}

/// `<br />`
#[must_use]
pub fn is_self_closing_tag(text: &str) -> bool {
    is_construct(text, ConstructKind::SelfClosingTag)
}

/// `&amp;`
#[must_use]
pub fn is_entity_name(text: &str) -> bool {
    is_construct(text, ConstructKind::EntityName)
}

/// `&#38;`
#[must_use]
pub fn is_entity_numeric(text: &str) -> bool {
    is_construct(text, ConstructKind::EntityNumeric)
}

/// `&#X26;`
#[must_use]
pub fn is_entity_unicode(text: &str) -> bool {
    is_construct(text, ConstructKind::EntityUnicode)
}
