//! Character entities and their three mnemonic encodings.
//!
//! [§ 13.1.4 Character references](https://html.spec.whatwg.org/multipage/syntax.html#character-references)
//!
//! "Character references must start with a U+0026 AMPERSAND character (&).
//! Following this, there are three possible kinds of character references:
//! named character references, decimal numeric character references and
//! hexadecimal numeric character references."
//!
//! Each [`Entity`] links one character to all three forms, e.g. `&` to
//! `&amp;`, `&#38;` and `&#X26;`.

/// The static table of known entities.
pub mod table;

use std::collections::HashMap;
use std::fmt;
use std::sync::LazyLock;

use quill_common::MarkupError;
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString};

use crate::grammar::{ConstructKind, NamePattern};

pub use table::{ENTITIES, ENTITY_COUNT};

/// The three mnemonic encodings of an entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum EntityType {
    /// `&amp;`
    Name,
    /// `&#38;`
    Numeric,
    /// `&#X26;`
    Unicode,
}

impl EntityType {
    /// The construct kind whose grammar recognizes this encoding.
    #[must_use]
    pub const fn construct_kind(self) -> ConstructKind {
        match self {
            Self::Name => ConstructKind::EntityName,
            Self::Numeric => ConstructKind::EntityNumeric,
            Self::Unicode => ConstructKind::EntityUnicode,
        }
    }

    /// `Some(ty)` selects one encoding; `None` selects all three in
    /// declaration order.
    #[must_use]
    pub fn selection(ty: Option<Self>) -> Vec<Self> {
        ty.map_or_else(|| Self::iter().collect(), |ty| vec![ty])
    }

    /// Parse `name`, `numeric` or `unicode` (any case).
    ///
    /// # Errors
    ///
    /// Returns [`MarkupError::UnknownEntityType`] for anything else.
    pub fn parse(text: &str) -> Result<Self, MarkupError> {
        text.parse()
            .map_err(|_| MarkupError::UnknownEntityType(text.to_string()))
    }
}

/// One row of the entity table.
///
/// Only the character and its mnemonic name are stored; the decimal and
/// hexadecimal forms are derived from the code point, so they are always
/// minimal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Entity {
    symbol: char,
    name: &'static str,
}

/// The syntax characters of every mnemonic. Encoding must handle these before
/// any other entity, and decoding after.
pub static CONTROL_ENTITIES: [Entity; 3] = [
    Entity::new('&', "amp"),
    Entity::new('#', "num"),
    Entity::new(';', "semi"),
];

/// Entity lookup by exact mnemonic name.
static BY_NAME: LazyLock<HashMap<&'static str, &'static Entity>> =
    LazyLock::new(|| ENTITIES.iter().map(|entity| (entity.name, entity)).collect());

/// Entity lookup by character.
static BY_SYMBOL: LazyLock<HashMap<char, &'static Entity>> =
    LazyLock::new(|| ENTITIES.iter().map(|entity| (entity.symbol, entity)).collect());

impl Entity {
    pub(crate) const fn new(symbol: char, name: &'static str) -> Self {
        Self { symbol, name }
    }

    /// The character this entity stands for.
    #[must_use]
    pub const fn symbol(&self) -> char {
        self.symbol
    }

    /// The mnemonic name, e.g. `amp`.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Decimal code point without leading zeros, e.g. `38`.
    #[must_use]
    pub fn numeric(&self) -> String {
        u32::from(self.symbol).to_string()
    }

    /// Uppercase hexadecimal code point without leading zeros, e.g. `26`.
    #[must_use]
    pub fn unicode(&self) -> String {
        format!("{:X}", u32::from(self.symbol))
    }

    /// The full mnemonic for one encoding: `&amp;`, `&#38;` or `&#X26;`.
    #[must_use]
    pub fn mnemonic(&self, ty: EntityType) -> String {
        match ty {
            EntityType::Name => format!("&{};", self.name),
            EntityType::Numeric => format!("&#{};", self.numeric()),
            EntityType::Unicode => format!("&#X{};", self.unicode()),
        }
    }

    /// Returns true for `&`, `#` and `;`.
    #[must_use]
    pub fn is_control(&self) -> bool {
        CONTROL_ENTITIES.contains(self)
    }

    /// Returns true if another entity's name differs from this one only in
    /// letter case (`Agrave` and `agrave`).
    #[must_use]
    pub fn has_case_twin(&self) -> bool {
        ENTITIES
            .iter()
            .any(|other| other.name != self.name && other.name.eq_ignore_ascii_case(self.name))
    }

    /// The name region that matches exactly this entity in `ty` form.
    ///
    /// Encoded names match case-insensitively unless a case twin exists, in
    /// which case the exact case is required so each twin stays addressable.
    #[must_use]
    pub fn name_pattern(&self, ty: EntityType) -> NamePattern {
        match ty {
            EntityType::Name if self.has_case_twin() => NamePattern::exact_case(self.name),
            EntityType::Name => NamePattern::literal(self.name),
            EntityType::Numeric => NamePattern::digits(&self.numeric()),
            EntityType::Unicode => NamePattern::digits(&self.unicode()),
        }
    }

    /// Look up an entity by mnemonic name.
    ///
    /// An exact match wins; otherwise a case-insensitive match is accepted if
    /// it is unambiguous, so `AMP` finds `amp` but `AGRAVE` finds nothing.
    ///
    /// # Errors
    ///
    /// Returns [`MarkupError::UnknownEntity`] if no entity matches.
    pub fn from_name(name: &str) -> Result<&'static Self, MarkupError> {
        if let Some(entity) = BY_NAME.get(name).copied() {
            return Ok(entity);
        }

        let mut candidates = ENTITIES
            .iter()
            .filter(|entity| entity.name.eq_ignore_ascii_case(name));
        match (candidates.next(), candidates.next()) {
            (Some(entity), None) => Ok(entity),
            _ => Err(MarkupError::UnknownEntity(name.to_string())),
        }
    }

    /// Look up the entity for a character.
    #[must_use]
    pub fn from_symbol(symbol: char) -> Option<&'static Self> {
        BY_SYMBOL.get(&symbol).copied()
    }

    /// Every known entity, in table order.
    #[must_use]
    pub fn all() -> &'static [Self] {
        &ENTITIES
    }
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "&{};", self.name)
    }
}
