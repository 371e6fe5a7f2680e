//! Deletion, entity encoding and entity decoding.
//!
//! Every operation takes the current text and returns a new one. Operations
//! are total: a document without matches comes back unchanged.
//!
//! Bulk operations are sequences of single-name passes in a fixed order:
//! tags in [`HtmlTag`] order, each in self-closing, open, close shape;
//! entities in table order, each in name, numeric, unicode form.

use quill_common::warning::warn_once;

use crate::entities::{CONTROL_ENTITIES, ENTITIES, Entity, EntityType};
use crate::grammar::{self, ConstructKind, NamePattern};
use crate::tags::{HtmlTag, TagSpec, TagType};

// =============================================================================
// Construct Deletion
// =============================================================================

/// Remove every match of `kind`'s generic rule.
#[must_use]
pub fn delete_construct(text: &str, kind: ConstructKind) -> String {
    grammar::rule(kind).replace_all(text, "")
}

/// Remove every comment.
#[must_use]
pub fn delete_comments(text: &str) -> String {
    delete_construct(text, ConstructKind::Comment)
}

/// Remove every CDATA section.
#[must_use]
pub fn delete_cdata(text: &str) -> String {
    delete_construct(text, ConstructKind::CData)
}

/// Remove every doctype declaration.
#[must_use]
pub fn delete_doctype(text: &str) -> String {
    delete_construct(text, ConstructKind::Doctype)
}

/// Replace every match of `kind` specialized to `name` with `replacement`.
///
/// A pattern that fails to compile leaves the text unchanged and is reported
/// once on stderr.
fn replace_specialized(
    text: &str,
    kind: ConstructKind,
    name: &NamePattern,
    replacement: &str,
) -> String {
    match grammar::specialize(kind, name) {
        Ok(rule) => rule.replace_all(text, replacement),
        Err(err) => {
            warn_once(
                "Mutator",
                &format!("skipping {kind} rule for `{name}`: {err}"),
            );
            text.to_string()
        }
    }
}

// =============================================================================
// Tag Deletion
// =============================================================================

/// Remove every occurrence of one tag in one shape.
#[must_use]
pub fn delete_tag_spec(text: &str, spec: &TagSpec) -> String {
    replace_specialized(text, spec.construct_kind(), &spec.name_pattern(), "")
}

/// Remove every occurrence of `tag`, in one shape or (with `None`) all three.
#[must_use]
pub fn delete_tag(text: &str, tag: HtmlTag, tag_type: Option<TagType>) -> String {
    TagType::selection(tag_type)
        .into_iter()
        .fold(text.to_string(), |current, ty| {
            delete_tag_spec(&current, &TagSpec::known(tag, ty))
        })
}

/// Remove every known tag except those in `exclude`, in one shape or (with
/// `None`) all three. Excluded tags are left intact.
#[must_use]
pub fn delete_tags(text: &str, tag_type: Option<TagType>, exclude: &[HtmlTag]) -> String {
    HtmlTag::all()
        .filter(|tag| !exclude.contains(tag))
        .fold(text.to_string(), |current, tag| {
            delete_tag(&current, tag, tag_type)
        })
}

// =============================================================================
// Entity Deletion
// =============================================================================

/// Remove every mnemonic of `entity`, in one form or (with `None`) all three.
#[must_use]
pub fn delete_entity(text: &str, entity: &Entity, ty: Option<EntityType>) -> String {
    replace_entity(text, entity, ty, "")
}

/// Remove every mnemonic of every entity except those in `exclude`, in one
/// form or (with `None`) all three.
#[must_use]
pub fn delete_entities(text: &str, ty: Option<EntityType>, exclude: &[&Entity]) -> String {
    selected_entities(exclude).fold(text.to_string(), |current, entity| {
        delete_entity(&current, entity, ty)
    })
}

/// Replace every mnemonic of `entity` in the selected forms.
fn replace_entity(text: &str, entity: &Entity, ty: Option<EntityType>, replacement: &str) -> String {
    EntityType::selection(ty)
        .into_iter()
        .fold(text.to_string(), |current, ty| {
            replace_specialized(
                &current,
                ty.construct_kind(),
                &entity.name_pattern(ty),
                replacement,
            )
        })
}

/// Table entities not listed in `exclude`.
fn selected_entities<'a>(exclude: &'a [&'a Entity]) -> impl Iterator<Item = &'static Entity> + 'a {
    ENTITIES
        .iter()
        .filter(move |entity| !exclude.contains(entity))
}

// =============================================================================
// Entity Encoding
// =============================================================================

/// Replace every literal `entity` character with its `ty` mnemonic.
#[must_use]
pub fn encode_entity(text: &str, entity: &Entity, ty: EntityType) -> String {
    if text.contains(entity.symbol()) {
        text.replace(entity.symbol(), &entity.mnemonic(ty))
    } else {
        text.to_string()
    }
}

/// Replace every character of the entity table, except those of `exclude`,
/// with its `ty` mnemonic.
///
/// `&`, `#` and `;` are encoded first, in a single pass, so the mnemonics
/// produced for them and for every later entity are never re-encoded.
#[must_use]
pub fn encode_entities(text: &str, ty: EntityType, exclude: &[&Entity]) -> String {
    let controls: Vec<&Entity> = CONTROL_ENTITIES
        .iter()
        .filter(|entity| !exclude.contains(entity))
        .collect();

    let mut encoded = String::with_capacity(text.len());
    for c in text.chars() {
        match controls.iter().find(|entity| entity.symbol() == c) {
            Some(entity) => encoded.push_str(&entity.mnemonic(ty)),
            None => encoded.push(c),
        }
    }

    selected_entities(exclude)
        .filter(|entity| !entity.is_control())
        .fold(encoded, |current, entity| encode_entity(&current, entity, ty))
}

// =============================================================================
// Entity Decoding
// =============================================================================

/// Replace every mnemonic of `entity`, in one form or (with `None`) all
/// three, with its character.
#[must_use]
pub fn decode_entity(text: &str, entity: &Entity, ty: Option<EntityType>) -> String {
    replace_entity(text, entity, ty, entity.symbol().encode_utf8(&mut [0; 4]))
}

/// Replace every mnemonic of every entity except those of `exclude`, in one
/// form or (with `None`) all three, with its character.
///
/// `&`, `#` and `;` are decoded last, `;` last of all: until then every
/// mnemonic terminator in text produced by [`encode_entities`] is still
/// encoded, so decoding one entity can never complete a mnemonic for
/// another.
#[must_use]
pub fn decode_entities(text: &str, ty: Option<EntityType>, exclude: &[&Entity]) -> String {
    let decoded = selected_entities(exclude)
        .filter(|entity| !entity.is_control())
        .fold(text.to_string(), |current, entity| {
            decode_entity(&current, entity, ty)
        });

    CONTROL_ENTITIES
        .iter()
        .filter(|entity| !exclude.contains(entity))
        .fold(decoded, |current, entity| decode_entity(&current, entity, ty))
}
