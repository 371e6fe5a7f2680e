//! HTML micro-syntax recognition and rewriting for Quill.
//!
//! # Scope
//!
//! This crate works on raw HTML text, one construct at a time:
//! - **Grammar catalog** - one rule per construct: comments, CDATA sections,
//!   doctypes, open / close / self-closing tags, and named, decimal and
//!   hexadecimal character references
//! - **Classification** - is a string exactly one construct?
//! - **Enumeration** - every occurrence of a construct, left to right
//! - **Rewriting** - delete constructs, encode characters as entity
//!   mnemonics, decode mnemonics back to characters
//!
//! # Not Implemented
//!
//! - Tree construction or any DOM
//! - Well-formedness beyond a single construct (nesting is never checked)
//! - Streaming input
//! - Character references outside the fixed entity table

/// Whole-string classification.
pub mod classify;
/// The rewrite surface over an owned text.
pub mod document;
/// The character entity table.
pub mod entities;
/// Enumeration of constructs in a document.
pub mod find;
/// The grammar catalog.
pub mod grammar;
/// Deletion, encoding and decoding.
pub mod mutate;
/// The known tag-name set.
pub mod tags;

pub use classify::{classify, is_construct};
pub use document::Document;
pub use entities::{CONTROL_ENTITIES, ENTITIES, Entity, EntityType};
pub use find::{find, find_captures, find_entities, find_matches, find_tags};
pub use grammar::{Attribute, Capture, ConstructKind, ConstructMatch, Parts, PublicId};
pub use quill_common::MarkupError;
pub use tags::{HtmlTag, TagSpec, TagType};
