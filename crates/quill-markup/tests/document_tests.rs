//! Tests for the `Document` rewrite surface.

use quill_markup::{ConstructKind, Document, Entity, EntityType, HtmlTag, TagSpec, TagType};

#[test]
fn test_cleanup_pipeline() {
    let doc = Document::new("<!-- note --><p>caf&eacute;</p>")
        .delete_comments()
        .delete_tags(None, &[])
        .decode_entities(None, &[]);
    assert_eq!(doc.text(), "café");
}

#[test]
fn test_rewrite_returns_new_document() {
    let original = Document::new("a<!-- x -->b");
    let rewritten = original.clone().delete_comments();
    assert_eq!(original.text(), "a<!-- x -->b");
    assert_eq!(rewritten.text(), "ab");
}

#[test]
fn test_delete_doctype_and_cdata() {
    let doc = Document::from("<!DOCTYPE html>\n<![CDATA[x]]>Text")
        .delete_doctype()
        .delete_cdata();
    assert_eq!(doc.text().trim(), "Text");
}

#[test]
fn test_delete_comments_twice() {
    let once = Document::new("a<!-- x -->b").delete_comments();
    let twice = once.clone().delete_comments();
    assert_eq!(twice, once);
    assert_eq!(twice.text(), "ab");
}

#[test]
fn test_tag_methods() {
    let doc = Document::new("<b>bold</b><hr/><x-note>").delete_tag(HtmlTag::B, None);
    assert_eq!(doc.text(), "bold<hr/><x-note>");

    let doc = doc.delete_tag_spec(&TagSpec::known(HtmlTag::Hr, TagType::SelfClosing));
    assert_eq!(doc.text(), "bold<x-note>");
}

#[test]
fn test_entity_methods() {
    let amp = Entity::from_name("amp").unwrap();
    let doc = Document::new("R&D").encode_entity(amp, EntityType::Numeric);
    assert_eq!(doc.text(), "R&#38;D");
    let doc = doc.decode_entity(amp, Some(EntityType::Numeric));
    assert_eq!(doc.text(), "R&D");

    let doc = doc.encode_entities(EntityType::Name, &[]);
    assert_eq!(doc.text(), "R&amp;D");
    let mut doc = doc.delete_entity(amp, None);
    assert_eq!(doc.text(), "RD");

    doc.set_text("&lt;&copy;");
    let doc = doc.delete_entities(Some(EntityType::Name), &[Entity::from_name("copy").unwrap()]);
    assert_eq!(doc.text(), "&copy;");
}

#[test]
fn test_classification_methods() {
    assert!(Document::new("<!-- x -->").is_comment());
    assert!(Document::new("<![CDATA[x]]>").is_cdata());
    assert!(Document::new("<!DOCTYPE html>").is_doctype());
    assert!(Document::new("<p class=a>").is_open_tag());
    assert!(Document::new("</p>").is_close_tag());
    assert!(Document::new("<br/>").is_self_closing_tag());
    assert!(Document::new("&amp;").is_entity_name());
    assert!(Document::new("&#38;").is_entity_numeric());
    assert!(Document::new("&#X26;").is_entity_unicode());
    assert!(!Document::new("<p>text</p>").is_open_tag());
}

#[test]
fn test_find_methods() {
    let doc = Document::new(
        "<!DOCTYPE html><!-- c --><![CDATA[d]]><p>&amp;&#38;&#x26;<br/></p>",
    );
    assert_eq!(doc.find_doctype(), vec!["<!DOCTYPE html>"]);
    assert_eq!(doc.find_comment(), vec!["<!-- c -->"]);
    assert_eq!(doc.find_cdata(), vec!["<![CDATA[d]]>"]);
    assert_eq!(doc.find_open_tag(), vec!["<p>"]);
    assert_eq!(doc.find_close_tag(), vec!["</p>"]);
    assert_eq!(doc.find_self_closing_tag(), vec!["<br/>"]);
    assert_eq!(doc.find_entity_name(), vec!["&amp;"]);
    assert_eq!(doc.find_entity_numeric(), vec!["&#38;"]);
    assert_eq!(doc.find_entity_unicode(), vec!["&#x26;"]);
    assert_eq!(doc.find_matches(ConstructKind::OpenTag).len(), 1);
}

#[test]
fn test_text_accessors() {
    let doc = Document::from(String::from("<i>x</i>"));
    assert_eq!(doc.to_string(), "<i>x</i>");
    assert_eq!(doc.into_text(), "<i>x</i>");
    assert_eq!(Document::default().text(), "");
}
