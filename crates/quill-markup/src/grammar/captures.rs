//! Structured match records.
//!
//! A match is reported as a [`ConstructMatch`] whose [`Parts`] carry one field
//! per named region of the kind's grammar, instead of leaving callers to look
//! up capture groups by name.

use std::ops::Range;
use std::sync::LazyLock;

use regex::{Captures, Regex};

use super::{ConstructKind, patterns};

/// Splits a matched `params` region into attributes.
static ATTRIBUTE_PARTS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!("{}{}", patterns::FLAGS, patterns::ATTRIBUTE_PARTS)).unwrap()
});

/// Splits a doctype's public identifier into its four fields.
static PUBLIC_TEXT_PARTS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!("{}{}", patterns::FLAGS, patterns::PUBLIC_TEXT_PARTS)).unwrap()
});

/// [§ 13.1.2.3 Attributes](https://html.spec.whatwg.org/multipage/syntax.html#attributes-2)
///
/// One attribute of an open or self-closing tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Attribute<'t> {
    /// "Attribute names must consist of one or more characters"
    pub name: &'t str,
    /// The value without its quotes; `None` for an empty attribute such as
    /// `disabled`.
    pub value: Option<&'t str>,
}

/// The formal public identifier clause of a doctype, e.g.
/// `PUBLIC "-//W3C//DTD XHTML 1.0 Transitional//EN" "http://…"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PublicId<'t> {
    /// The keyword before the quoted text, normally `PUBLIC`.
    pub keyword: &'t str,
    /// `+` for a registered owner, `-` otherwise.
    pub registration: &'t str,
    /// The owner, e.g. `W3C`.
    pub organization: &'t str,
    /// The described document type, e.g. `DTD XHTML 1.0 Transitional`.
    pub document_type: &'t str,
    /// The language code, e.g. `EN`.
    pub language: &'t str,
    /// The system identifier without its quotes.
    pub url: &'t str,
}

/// The named regions of one match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Parts<'t> {
    /// Comment or CDATA section text between the delimiters.
    Text {
        /// the `value` region
        value: &'t str,
    },
    /// A doctype declaration.
    Doctype {
        /// The root element name.
        name: &'t str,
        /// The optional public identifier clause.
        public_id: Option<PublicId<'t>>,
    },
    /// An open, close or self-closing tag.
    Tag {
        /// The tag name as written.
        name: &'t str,
        /// Everything between the name and the closing delimiter, leading
        /// whitespace included. Always empty for close tags.
        params: &'t str,
        /// `params` split into attributes, in source order.
        attributes: Vec<Attribute<'t>>,
    },
    /// A named entity such as `&amp;`.
    EntityName {
        /// The mnemonic between `&` and `;`.
        name: &'t str,
    },
    /// A decimal or hexadecimal entity such as `&#038;` or `&#X26;`.
    EntityDigits {
        /// The digits as written.
        digits: &'t str,
        /// The digits with leading zeros stripped (at least one digit kept).
        least: &'t str,
    },
}

/// Which region of a match to report from
/// [`find_captures`](crate::find::find_captures).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Capture {
    /// The whole match.
    Whole,
    /// Comment or CDATA text.
    Value,
    /// Tag, doctype or entity name.
    Name,
    /// Tag attribute text.
    Params,
    /// Doctype public clause keyword.
    Keyword,
    /// Doctype public identifier registration mark.
    Registration,
    /// Doctype public identifier owner.
    Organization,
    /// Doctype public identifier document type.
    DocumentType,
    /// Doctype public identifier language.
    Language,
    /// Doctype system identifier.
    Url,
    /// Decimal digits without leading zeros.
    NumericLeast,
    /// Hexadecimal digits without leading zeros.
    UnicodeLeast,
}

/// One occurrence of a construct in a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstructMatch<'t> {
    /// What was matched.
    pub kind: ConstructKind,
    /// Byte range of the match in the scanned text.
    pub span: Range<usize>,
    /// The matched text (the primary capture).
    pub text: &'t str,
    /// The named regions.
    pub parts: Parts<'t>,
}

impl<'t> ConstructMatch<'t> {
    /// Build a record from raw regex captures for `kind`.
    #[must_use]
    pub fn from_captures(kind: ConstructKind, caps: &Captures<'t>) -> Option<Self> {
        let whole = caps.get(0)?;
        let region = |name: &str| caps.name(name).map_or("", |m| m.as_str());

        let parts = match kind {
            ConstructKind::Comment | ConstructKind::CData => Parts::Text {
                value: region("value"),
            },
            ConstructKind::Doctype => Parts::Doctype {
                name: region("name"),
                public_id: public_id(caps),
            },
            ConstructKind::OpenTag | ConstructKind::CloseTag | ConstructKind::SelfClosingTag => {
                let params = region("params");
                Parts::Tag {
                    name: region("name"),
                    params,
                    attributes: parse_attributes(params),
                }
            }
            ConstructKind::EntityName => Parts::EntityName {
                name: region("name"),
            },
            ConstructKind::EntityNumeric | ConstructKind::EntityUnicode => {
                let digits = region("digits");
                Parts::EntityDigits {
                    digits,
                    least: least_digits(digits),
                }
            }
        };

        Some(Self {
            kind,
            span: whole.range(),
            text: whole.as_str(),
            parts,
        })
    }

    /// The text of one region, or `None` if this kind has no such region or
    /// the region did not participate in the match.
    #[must_use]
    pub fn capture(&self, capture: Capture) -> Option<&'t str> {
        let public = match &self.parts {
            Parts::Doctype { public_id, .. } => *public_id,
            _ => None,
        };
        match (capture, &self.parts) {
            (Capture::Whole, _) => Some(self.text),
            (Capture::Value, Parts::Text { value }) => Some(*value),
            (
                Capture::Name,
                Parts::Doctype { name, .. } | Parts::Tag { name, .. } | Parts::EntityName { name },
            ) => Some(*name),
            (Capture::Params, Parts::Tag { params, .. }) => Some(*params),
            (Capture::Keyword, _) => public.map(|p| p.keyword),
            (Capture::Registration, _) => public.map(|p| p.registration),
            (Capture::Organization, _) => public.map(|p| p.organization),
            (Capture::DocumentType, _) => public.map(|p| p.document_type),
            (Capture::Language, _) => public.map(|p| p.language),
            (Capture::Url, _) => public.map(|p| p.url),
            (Capture::NumericLeast, Parts::EntityDigits { least, .. })
                if self.kind == ConstructKind::EntityNumeric =>
            {
                Some(*least)
            }
            (Capture::UnicodeLeast, Parts::EntityDigits { least, .. })
                if self.kind == ConstructKind::EntityUnicode =>
            {
                Some(*least)
            }
            _ => None,
        }
    }

    /// The attributes of a tag match; empty for every other kind.
    #[must_use]
    pub fn attributes(&self) -> &[Attribute<'t>] {
        match &self.parts {
            Parts::Tag { attributes, .. } => attributes,
            _ => &[],
        }
    }
}

fn public_id<'t>(caps: &Captures<'t>) -> Option<PublicId<'t>> {
    let keyword = caps.name("keyword")?.as_str();
    let quoted = caps.name("public_id")?.as_str();
    let url = caps.name("url")?.as_str();
    let fields = PUBLIC_TEXT_PARTS.captures(strip_quotes(quoted))?;
    let field = |name: &str| fields.name(name).map_or("", |m| m.as_str());

    Some(PublicId {
        keyword,
        registration: field("registration"),
        organization: field("organization"),
        document_type: field("document_type"),
        language: field("language"),
        url: strip_quotes(url),
    })
}

fn parse_attributes(params: &str) -> Vec<Attribute<'_>> {
    ATTRIBUTE_PARTS
        .captures_iter(params)
        .filter_map(|caps| {
            let name = caps.name("name")?.as_str();
            let value = caps
                .name("double")
                .or_else(|| caps.name("single"))
                .or_else(|| caps.name("bare"))
                .map(|m| m.as_str());
            Some(Attribute { name, value })
        })
        .collect()
}

/// `"text"` or `'text'` to `text`.
fn strip_quotes(quoted: &str) -> &str {
    quoted
        .get(1..quoted.len().saturating_sub(1))
        .unwrap_or(quoted)
}

/// `0038` to `38`; `000` to `0`.
fn least_digits(digits: &str) -> &str {
    let trimmed = digits.trim_start_matches('0');
    if trimmed.is_empty() {
        digits.get(digits.len().saturating_sub(1)..).unwrap_or(digits)
    } else {
        trimmed
    }
}
