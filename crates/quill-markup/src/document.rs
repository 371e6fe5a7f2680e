//! A document under rewrite.
//!
//! [`Document`] owns the text and exposes every classification, enumeration
//! and rewrite operation as a method. A rewrite consumes the document and
//! returns a new one, so rewrites chain:
//!
//! ```ignore
//! let doc = Document::new("<!-- note --><p>caf&eacute;</p>")
//!     .delete_comments()
//!     .delete_tags(None, &[])
//!     .decode_entities(None, &[]);
//! assert_eq!(doc.text(), "café");
//! ```

use core::fmt;

use crate::classify;
use crate::entities::{Entity, EntityType};
use crate::find::{find, find_matches};
use crate::grammar::{ConstructKind, ConstructMatch};
use crate::mutate;
use crate::tags::{HtmlTag, TagSpec, TagType};

/// The text being processed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    text: String,
}

impl Document {
    /// Create a document holding `text`.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// Replace the whole text.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    /// The current text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Consume the document, returning its text.
    #[must_use]
    pub fn into_text(self) -> String {
        self.text
    }

    fn rewrite(self, f: impl FnOnce(&str) -> String) -> Self {
        Self {
            text: f(&self.text),
        }
    }
}

// =============================================================================
// Deletion
// =============================================================================

impl Document {
    /// Remove every comment.
    #[must_use]
    pub fn delete_comments(self) -> Self {
        self.rewrite(mutate::delete_comments)
    }

    /// Remove every CDATA section.
    #[must_use]
    pub fn delete_cdata(self) -> Self {
        self.rewrite(mutate::delete_cdata)
    }

    /// Remove every doctype declaration.
    #[must_use]
    pub fn delete_doctype(self) -> Self {
        self.rewrite(mutate::delete_doctype)
    }

    /// Remove `tag` in one shape, or in every shape with `None`.
    #[must_use]
    pub fn delete_tag(self, tag: HtmlTag, tag_type: Option<TagType>) -> Self {
        self.rewrite(|text| mutate::delete_tag(text, tag, tag_type))
    }

    /// Remove the tag described by `spec`.
    #[must_use]
    pub fn delete_tag_spec(self, spec: &TagSpec) -> Self {
        self.rewrite(|text| mutate::delete_tag_spec(text, spec))
    }

    /// Remove every known tag except `exclude`, in one shape or every shape.
    #[must_use]
    pub fn delete_tags(self, tag_type: Option<TagType>, exclude: &[HtmlTag]) -> Self {
        self.rewrite(|text| mutate::delete_tags(text, tag_type, exclude))
    }

    /// Remove the mnemonics of `entity`, in one form or every form.
    #[must_use]
    pub fn delete_entity(self, entity: &Entity, ty: Option<EntityType>) -> Self {
        self.rewrite(|text| mutate::delete_entity(text, entity, ty))
    }

    /// Remove the mnemonics of every entity except `exclude`, in one form or
    /// every form.
    #[must_use]
    pub fn delete_entities(self, ty: Option<EntityType>, exclude: &[&Entity]) -> Self {
        self.rewrite(|text| mutate::delete_entities(text, ty, exclude))
    }
}

// =============================================================================
// Encoding and Decoding
// =============================================================================

impl Document {
    /// Replace each `entity` character with its `ty` mnemonic.
    #[must_use]
    pub fn encode_entity(self, entity: &Entity, ty: EntityType) -> Self {
        self.rewrite(|text| mutate::encode_entity(text, entity, ty))
    }

    /// Replace each table character except `exclude` with its `ty` mnemonic.
    #[must_use]
    pub fn encode_entities(self, ty: EntityType, exclude: &[&Entity]) -> Self {
        self.rewrite(|text| mutate::encode_entities(text, ty, exclude))
    }

    /// Replace the mnemonics of `entity`, in one form or every form, with its
    /// character.
    #[must_use]
    pub fn decode_entity(self, entity: &Entity, ty: Option<EntityType>) -> Self {
        self.rewrite(|text| mutate::decode_entity(text, entity, ty))
    }

    /// Replace the mnemonics of every entity except `exclude`, in one form or
    /// every form, with their characters.
    #[must_use]
    pub fn decode_entities(self, ty: Option<EntityType>, exclude: &[&Entity]) -> Self {
        self.rewrite(|text| mutate::decode_entities(text, ty, exclude))
    }
}

// =============================================================================
// Classification
// =============================================================================

impl Document {
    /// Is the whole text one comment?
    #[must_use]
    pub fn is_comment(&self) -> bool {
        classify::is_comment(&self.text)
    }

    /// Is the whole text one CDATA section?
    #[must_use]
    pub fn is_cdata(&self) -> bool {
        classify::is_cdata(&self.text)
    }

    /// Is the whole text one doctype?
    #[must_use]
    pub fn is_doctype(&self) -> bool {
        classify::is_doctype(&self.text)
    }

    /// Is the whole text one open tag?
    #[must_use]
    pub fn is_open_tag(&self) -> bool {
        classify::is_open_tag(&self.text)
    }

    /// Is the whole text one close tag?
    #[must_use]
    pub fn is_close_tag(&self) -> bool {
        classify::is_close_tag(&self.text)
    }

    /// Is the whole text one self-closing tag?
    #[must_use]
    pub fn is_self_closing_tag(&self) -> bool {
        classify::is_self_closing_tag(&self.text)
    }

    /// Is the whole text one named entity?
    #[must_use]
    pub fn is_entity_name(&self) -> bool {
        classify::is_entity_name(&self.text)
    }

    /// Is the whole text one decimal entity?
    #[must_use]
    pub fn is_entity_numeric(&self) -> bool {
        classify::is_entity_numeric(&self.text)
    }

    /// Is the whole text one hexadecimal entity?
    #[must_use]
    pub fn is_entity_unicode(&self) -> bool {
        classify::is_entity_unicode(&self.text)
    }
}

// =============================================================================
// Enumeration
// =============================================================================

impl Document {
    /// Every match of `kind`, with its named regions.
    #[must_use]
    pub fn find_matches(&self, kind: ConstructKind) -> Vec<ConstructMatch<'_>> {
        find_matches(&self.text, kind)
    }

    /// Every comment.
    #[must_use]
    pub fn find_comment(&self) -> Vec<&str> {
        find(&self.text, ConstructKind::Comment)
    }

    /// Every CDATA section.
    #[must_use]
    pub fn find_cdata(&self) -> Vec<&str> {
        find(&self.text, ConstructKind::CData)
    }

    /// Every doctype.
    #[must_use]
    pub fn find_doctype(&self) -> Vec<&str> {
        find(&self.text, ConstructKind::Doctype)
    }

    /// Every open tag.
    #[must_use]
    pub fn find_open_tag(&self) -> Vec<&str> {
        find(&self.text, ConstructKind::OpenTag)
    }

    /// Every close tag.
    #[must_use]
    pub fn find_close_tag(&self) -> Vec<&str> {
        find(&self.text, ConstructKind::CloseTag)
    }

    /// Every self-closing tag.
    #[must_use]
    pub fn find_self_closing_tag(&self) -> Vec<&str> {
        find(&self.text, ConstructKind::SelfClosingTag)
    }

    /// Every named entity.
    #[must_use]
    pub fn find_entity_name(&self) -> Vec<&str> {
        find(&self.text, ConstructKind::EntityName)
    }

    /// Every decimal entity.
    #[must_use]
    pub fn find_entity_numeric(&self) -> Vec<&str> {
        find(&self.text, ConstructKind::EntityNumeric)
    }

    /// Every hexadecimal entity.
    #[must_use]
    pub fn find_entity_unicode(&self) -> Vec<&str> {
        find(&self.text, ConstructKind::EntityUnicode)
    }
}

impl From<&str> for Document {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for Document {
    fn from(text: String) -> Self {
        Self::new(text)
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
