//! Tests for the character entity table and entity lookup.

use std::collections::HashSet;

use quill_markup::entities::ENTITY_COUNT;
use quill_markup::{CONTROL_ENTITIES, ENTITIES, Entity, EntityType, MarkupError, classify};

#[test]
fn test_table_size() {
    assert_eq!(ENTITIES.len(), ENTITY_COUNT);
    assert!(ENTITY_COUNT >= 252);
    assert_eq!(Entity::all().len(), ENTITY_COUNT);
}

#[test]
fn test_symbols_are_unique() {
    let symbols: HashSet<char> = ENTITIES.iter().map(Entity::symbol).collect();
    assert_eq!(symbols.len(), ENTITIES.len());
}

#[test]
fn test_names_are_unique() {
    let names: HashSet<&str> = ENTITIES.iter().map(Entity::name).collect();
    assert_eq!(names.len(), ENTITIES.len());
}

#[test]
fn test_every_mnemonic_is_recognized() {
    for entity in &ENTITIES {
        assert!(
            classify::is_entity_name(&entity.mnemonic(EntityType::Name)),
            "{entity}"
        );
        assert!(
            classify::is_entity_numeric(&entity.mnemonic(EntityType::Numeric)),
            "{entity}"
        );
        assert!(
            classify::is_entity_unicode(&entity.mnemonic(EntityType::Unicode)),
            "{entity}"
        );
    }
}

#[test]
fn test_digits_are_minimal() {
    for entity in &ENTITIES {
        assert!(!entity.numeric().starts_with('0'), "{entity}");
        assert!(!entity.unicode().starts_with('0'), "{entity}");
        assert_eq!(entity.unicode(), entity.unicode().to_uppercase());
    }
}

#[test]
fn test_control_entities_are_in_table() {
    for control in &CONTROL_ENTITIES {
        assert!(ENTITIES.contains(control));
        assert!(control.is_control());
    }
    let symbols: Vec<char> = CONTROL_ENTITIES.iter().map(Entity::symbol).collect();
    assert_eq!(symbols, vec!['&', '#', ';']);
}

#[test]
fn test_mnemonic_forms() {
    let amp = Entity::from_name("amp").unwrap();
    assert_eq!(amp.symbol(), '&');
    assert_eq!(amp.mnemonic(EntityType::Name), "&amp;");
    assert_eq!(amp.mnemonic(EntityType::Numeric), "&#38;");
    assert_eq!(amp.mnemonic(EntityType::Unicode), "&#X26;");
    assert_eq!(amp.to_string(), "&amp;");

    let deg = Entity::from_symbol('°').unwrap();
    assert_eq!(deg.name(), "deg");
    assert_eq!(deg.mnemonic(EntityType::Unicode), "&#XB0;");

    let euro = Entity::from_name("euro").unwrap();
    assert_eq!(euro.numeric(), "8364");
    assert_eq!(euro.unicode(), "20AC");
}

#[test]
fn test_from_name_case_handling() {
    assert_eq!(Entity::from_name("AMP").unwrap().symbol(), '&');
    assert_eq!(Entity::from_name("Agrave").unwrap().symbol(), 'À');
    assert_eq!(Entity::from_name("agrave").unwrap().symbol(), 'à');
    assert!(matches!(
        Entity::from_name("AGRAVE"),
        Err(MarkupError::UnknownEntity(name)) if name == "AGRAVE"
    ));
    assert!(Entity::from_name("nosuch").is_err());
}

#[test]
fn test_from_symbol_outside_table() {
    assert!(Entity::from_symbol('a').is_none());
    assert!(Entity::from_symbol('\u{1F600}').is_none());
}

#[test]
fn test_case_twins() {
    assert!(Entity::from_name("Agrave").unwrap().has_case_twin());
    assert!(Entity::from_name("sigma").unwrap().has_case_twin());
    assert!(!Entity::from_name("amp").unwrap().has_case_twin());
}

#[test]
fn test_entity_type_parse() {
    assert_eq!(EntityType::parse("name").unwrap(), EntityType::Name);
    assert_eq!(EntityType::parse("UNICODE").unwrap(), EntityType::Unicode);
    assert!(matches!(
        EntityType::parse("octal"),
        Err(MarkupError::UnknownEntityType(name)) if name == "octal"
    ));
    assert_eq!(EntityType::Numeric.to_string(), "numeric");
}

#[test]
fn test_entity_type_selection() {
    assert_eq!(
        EntityType::selection(None),
        vec![EntityType::Name, EntityType::Numeric, EntityType::Unicode]
    );
    assert_eq!(
        EntityType::selection(Some(EntityType::Numeric)),
        vec![EntityType::Numeric]
    );
}
