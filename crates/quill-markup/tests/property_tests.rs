//! Property-based tests for the grammar and the entity rewrites.
//!
//! Inputs are built from fragments that sit near the grammar's edges
//! (delimiters, quotes, mnemonic syntax) so matches and near-misses both show
//! up often.

use proptest::prelude::*;
use quill_markup::classify::is_construct;
use quill_markup::find::find;
use quill_markup::mutate::{decode_entities, delete_comments, encode_entities};
use quill_markup::{ConstructKind, Entity, EntityType};

/// Pieces of markup, valid and broken.
fn fragment_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("<!--".to_string()),
        Just("-->".to_string()),
        Just("--!>".to_string()),
        Just("<![CDATA[".to_string()),
        Just("]]>".to_string()),
        Just("<!DOCTYPE html>".to_string()),
        Just(" PUBLIC \"-//W3C//DTD HTML 4.01//EN\" ".to_string()),
        Just("<".to_string()),
        Just("</".to_string()),
        Just(">".to_string()),
        Just("/>".to_string()),
        Just("&".to_string()),
        Just("&#".to_string()),
        Just("&#x".to_string()),
        Just(";".to_string()),
        Just("\"".to_string()),
        Just("'".to_string()),
        "[a-zA-Z]{1,6}",
        "[0-9a-fA-F]{1,4}",
        "[ =\n]{1,2}",
        "[a-z]{1,4}=\"[a-z <>]{0,4}\"",
    ]
}

fn markup_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(fragment_strategy(), 0..12).prop_map(|parts| parts.concat())
}

fn kind_strategy() -> impl Strategy<Value = ConstructKind> {
    prop_oneof![
        Just(ConstructKind::Comment),
        Just(ConstructKind::CData),
        Just(ConstructKind::Doctype),
        Just(ConstructKind::OpenTag),
        Just(ConstructKind::CloseTag),
        Just(ConstructKind::SelfClosingTag),
        Just(ConstructKind::EntityName),
        Just(ConstructKind::EntityNumeric),
        Just(ConstructKind::EntityUnicode),
    ]
}

fn entity_type_strategy() -> impl Strategy<Value = EntityType> {
    prop_oneof![
        Just(EntityType::Name),
        Just(EntityType::Numeric),
        Just(EntityType::Unicode),
    ]
}

#[cfg(test)]
mod proptest_tests {
    use super::*;

    proptest! {
        #[test]
        fn test_every_found_match_classifies(text in markup_strategy(), kind in kind_strategy()) {
            for found in find(&text, kind) {
                prop_assert!(
                    is_construct(found, kind),
                    "{kind} match {found:?} in {text:?} does not classify"
                );
            }
        }

        #[test]
        fn test_delete_comments_without_comments_is_identity(text in markup_strategy()) {
            if find(&text, ConstructKind::Comment).is_empty() {
                prop_assert_eq!(delete_comments(&text), text);
            }
        }

        #[test]
        fn test_encode_then_decode_restores_markup(
            text in markup_strategy(),
            ty in entity_type_strategy(),
        ) {
            let encoded = encode_entities(&text, ty, &[]);
            prop_assert_eq!(decode_entities(&encoded, Some(ty), &[]), text);
        }

        #[test]
        fn test_encode_then_decode_restores_any_text(text in "\\PC{0,40}", ty in entity_type_strategy()) {
            let encoded = encode_entities(&text, ty, &[]);
            prop_assert_eq!(decode_entities(&encoded, Some(ty), &[]), text);
        }

        #[test]
        fn test_name_encoding_leaves_only_known_mnemonics(text in markup_strategy()) {
            let encoded = encode_entities(&text, EntityType::Name, &[]);
            prop_assert!(!encoded.contains('#'));
            for found in find(&encoded, ConstructKind::EntityName) {
                let name = &found[1..found.len() - 1];
                prop_assert!(Entity::from_name(name).is_ok(), "{name}");
            }
        }
    }
}
