//! The grammar catalog.
//!
//! Each [`ConstructKind`] owns exactly one rule. A [`Rule`] is compiled twice:
//! once for scanning a larger document and once anchored to the whole input,
//! so classification and enumeration always agree on what is valid.
//!
//! Rules that target one tag or one entity are built by [`specialize`], which
//! swaps the generic name region for a literal while keeping every structural
//! constraint around it.

/// Structured match records.
pub mod captures;
/// Pattern text for each construct kind.
pub mod patterns;

use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, LazyLock, Mutex, PoisonError};

use quill_common::MarkupError;
use regex::{Captures, Regex};
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumCount, EnumIter};

pub use captures::{Attribute, Capture, ConstructMatch, Parts, PublicId};

/// The lexical constructs the engine recognizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, EnumCount)]
pub enum ConstructKind {
    /// `<!-- text -->`
    Comment,
    /// `<![CDATA[ text ]]>`
    CData,
    /// `<!DOCTYPE html>` with an optional public identifier
    Doctype,
    /// `<div class="x">`
    OpenTag,
    /// `</div>`
    CloseTag,
    /// `<br />`
    SelfClosingTag,
    /// `&amp;`
    EntityName,
    /// `&#38;`
    EntityNumeric,
    /// `&#X26;`
    EntityUnicode,
}

impl ConstructKind {
    /// The generic pattern for this kind's name region, or `None` if the kind
    /// has nothing to specialize.
    #[must_use]
    pub const fn name_pattern(self) -> Option<&'static str> {
        match self {
            Self::Comment | Self::CData => None,
            Self::Doctype | Self::OpenTag | Self::CloseTag | Self::SelfClosingTag => {
                Some(patterns::TAG_NAME)
            }
            Self::EntityName => Some(patterns::ENTITY_NAME),
            Self::EntityNumeric => Some(patterns::DECIMAL_DIGITS),
            Self::EntityUnicode => Some(patterns::HEX_DIGITS),
        }
    }

    /// Returns true for the three tag shapes.
    #[must_use]
    pub const fn is_tag(self) -> bool {
        matches!(
            self,
            Self::OpenTag | Self::CloseTag | Self::SelfClosingTag
        )
    }

    /// Returns true for the three entity encodings.
    #[must_use]
    pub const fn is_entity(self) -> bool {
        matches!(
            self,
            Self::EntityName | Self::EntityNumeric | Self::EntityUnicode
        )
    }
}

/// Pattern text standing in for a rule's name region.
///
/// Always built from escaped literals, so a specialized rule can only ever
/// match that one name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NamePattern(String);

impl NamePattern {
    /// Match `name` literally (ASCII case-insensitive, like every rule).
    #[must_use]
    pub fn literal(name: &str) -> Self {
        Self(regex::escape(name))
    }

    /// Match `name` with its exact letter case.
    #[must_use]
    pub fn exact_case(name: &str) -> Self {
        Self(format!("(?-i:{})", regex::escape(name)))
    }

    /// Match the minimal digit string `digits` with any number of leading
    /// zeros, e.g. `38` also matches `0038`.
    #[must_use]
    pub fn digits(digits: &str) -> Self {
        Self(format!("0*{}", regex::escape(digits)))
    }

    /// The pattern text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NamePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One compiled grammar rule.
#[derive(Debug)]
pub struct Rule {
    kind: ConstructKind,
    scan: Regex,
    anchored: Regex,
}

impl Rule {
    fn compile(kind: ConstructKind, name: &str) -> Result<Self, regex::Error> {
        let body = patterns::body(kind, name);
        let flags = patterns::FLAGS;
        Ok(Self {
            kind,
            scan: Regex::new(&format!("{flags}{body}"))?,
            anchored: Regex::new(&format!(r"{flags}\A(?:{body})\z"))?,
        })
    }

    /// The kind this rule recognizes.
    #[must_use]
    pub const fn kind(&self) -> ConstructKind {
        self.kind
    }

    /// Returns true if `text` is, in its entirety, one instance of the
    /// construct.
    #[must_use]
    pub fn is_whole_match(&self, text: &str) -> bool {
        self.anchored
            .captures(text)
            .is_some_and(|caps| accepts(self.kind, &caps))
    }

    /// Iterate over the leftmost non-overlapping matches in `text`.
    #[must_use]
    pub const fn captures_iter<'r, 't>(&'r self, text: &'t str) -> RuleMatches<'r, 't> {
        RuleMatches {
            rule: self,
            text,
            pos: 0,
        }
    }

    /// Collect every match as a structured record.
    #[must_use]
    pub fn find_matches<'t>(&self, text: &'t str) -> Vec<ConstructMatch<'t>> {
        self.captures_iter(text)
            .filter_map(|caps| ConstructMatch::from_captures(self.kind, &caps))
            .collect()
    }

    /// Replace every match with `replacement`, returning the new text.
    #[must_use]
    pub fn replace_all(&self, text: &str, replacement: &str) -> String {
        let mut out = String::with_capacity(text.len());
        let mut last = 0;
        for caps in self.captures_iter(text) {
            let Some(whole) = caps.get(0) else {
                continue;
            };
            out.push_str(&text[last..whole.start()]);
            out.push_str(replacement);
            last = whole.end();
        }
        out.push_str(&text[last..]);
        out
    }
}

/// Checks the constraints a rule's regex cannot express on its own.
fn accepts(kind: ConstructKind, caps: &Captures<'_>) -> bool {
    match kind {
        ConstructKind::Comment => caps
            .name("value")
            .is_some_and(|value| patterns::comment_text_is_valid(value.as_str())),
        // Lazy matching keeps `]]>` out of a scanned section, but an anchored
        // match can stretch across one.
        ConstructKind::CData => caps
            .name("value")
            .is_some_and(|value| !value.as_str().contains("]]>")),
        ConstructKind::Doctype
        | ConstructKind::OpenTag
        | ConstructKind::CloseTag
        | ConstructKind::SelfClosingTag
        | ConstructKind::EntityName
        | ConstructKind::EntityNumeric
        | ConstructKind::EntityUnicode => true,
    }
}

/// Iterator over the matches of a [`Rule`] in a text.
///
/// A candidate the rule rejects does not consume input: scanning resumes one
/// character after the candidate's start, so a valid construct nested inside
/// a rejected one is still found.
#[derive(Debug)]
pub struct RuleMatches<'r, 't> {
    rule: &'r Rule,
    text: &'t str,
    pos: usize,
}

impl<'t> Iterator for RuleMatches<'_, 't> {
    type Item = Captures<'t>;

    fn next(&mut self) -> Option<Self::Item> {
        while self.pos <= self.text.len() {
            let caps = self.rule.scan.captures_at(self.text, self.pos)?;
            let whole = caps.get(0)?;
            if accepts(self.rule.kind, &caps) {
                self.pos = whole.end();
                return Some(caps);
            }
            let step = self.text[whole.start()..]
                .chars()
                .next()
                .map_or(1, char::len_utf8);
            self.pos = whole.start() + step;
        }
        None
    }
}

/// The generic rules, indexed by `ConstructKind as usize`.
///
/// The patterns are fixed; failing to compile one is a bug in this module.
static CATALOG: LazyLock<Vec<Arc<Rule>>> = LazyLock::new(|| {
    ConstructKind::iter()
        .map(|kind| {
            let name = kind.name_pattern().unwrap_or_default();
            Arc::new(Rule::compile(kind, name).unwrap())
        })
        .collect()
});

type SpecializationKey = (ConstructKind, NamePattern);

/// Specialized rules compiled so far.
static SPECIALIZED: LazyLock<Mutex<HashMap<SpecializationKey, Arc<Rule>>>> =
    LazyLock::new(|| Mutex::new(HashMap::new()));

/// The generic rule for `kind`.
///
/// # Panics
///
/// Panics on first use if a built-in pattern fails to compile.
#[must_use]
pub fn rule(kind: ConstructKind) -> Arc<Rule> {
    Arc::clone(&CATALOG[kind as usize])
}

/// The rule for `kind` with its name region replaced by `name`.
///
/// Kinds without a name region return their generic rule. Compiled rules are
/// cached per `(kind, name)`.
///
/// # Errors
///
/// Returns [`MarkupError::Pattern`] if the specialized pattern fails to
/// compile.
pub fn specialize(kind: ConstructKind, name: &NamePattern) -> Result<Arc<Rule>, MarkupError> {
    if kind.name_pattern().is_none() {
        return Ok(rule(kind));
    }

    let key = (kind, name.clone());
    let cached = SPECIALIZED
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .get(&key)
        .cloned();
    if let Some(rule) = cached {
        return Ok(rule);
    }

    let compiled = Arc::new(Rule::compile(kind, name.as_str())?);
    let _ = SPECIALIZED
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .insert(key, Arc::clone(&compiled));
    Ok(compiled)
}
