//! Integration tests for enumerating constructs in a document.

use quill_markup::find::find;
use quill_markup::{
    Attribute, Capture, ConstructKind, Parts, find_captures, find_entities, find_matches,
    find_tags,
};

const PAGE: &str = "<!DOCTYPE html PUBLIC \"-//W3C//DTD XHTML 1.0 Transitional//EN\" \"http://www.w3.org/TR/xhtml1/DTD/xhtml1-transitional.dtd\">
<html>
<!-- header -->
<body class=\"main\">
<p>Fish &amp; chips &#0163;5 &#xB0;</p>
<br/>
<![CDATA[raw <b>]]>
<!-- footer -->
</body>
</html>";

#[test]
fn test_find_comments_in_order() {
    assert_eq!(
        find(PAGE, ConstructKind::Comment),
        vec!["<!-- header -->", "<!-- footer -->"]
    );
}

#[test]
fn test_find_skips_invalid_comment() {
    let text = "<!--<b>--> then <!-- ok -->";
    assert_eq!(find(text, ConstructKind::Comment), vec!["<!-- ok -->"]);
}

#[test]
fn test_find_nothing() {
    assert!(find("plain text", ConstructKind::OpenTag).is_empty());
    assert!(find("", ConstructKind::Comment).is_empty());
}

#[test]
fn test_find_tags_by_shape() {
    assert_eq!(
        find(PAGE, ConstructKind::OpenTag),
        vec!["<html>", "<body class=\"main\">", "<p>", "<b>"]
    );
    assert_eq!(
        find(PAGE, ConstructKind::CloseTag),
        vec!["</p>", "</body>", "</html>"]
    );
    assert_eq!(find(PAGE, ConstructKind::SelfClosingTag), vec!["<br/>"]);
}

#[test]
fn test_find_tags_inside_cdata() {
    // Tags are scanned without regard to the surrounding construct.
    assert_eq!(
        find("<![CDATA[raw <b>]]>", ConstructKind::OpenTag),
        vec!["<b>"]
    );
}

#[test]
fn test_find_tags_composite_order() {
    let text = "<p>a</p><br/><i>b</i>";
    assert_eq!(
        find_tags(text),
        vec!["<br/>", "<p>", "<i>", "</p>", "</i>"]
    );
}

#[test]
fn test_find_entities_composite_order() {
    assert_eq!(
        find_entities(PAGE),
        vec!["&amp;", "&#0163;", "&#xB0;"]
    );
}

#[test]
fn test_doctype_public_identifier_regions() {
    let matches = find_matches(PAGE, ConstructKind::Doctype);
    assert_eq!(matches.len(), 1);
    let doctype = &matches[0];
    assert_eq!(doctype.span.start, 0);

    let Parts::Doctype { name, public_id } = &doctype.parts else {
        panic!("expected doctype parts, got {:?}", doctype.parts);
    };
    assert_eq!(*name, "html");
    let public_id = public_id.expect("public identifier");
    assert_eq!(public_id.keyword, "PUBLIC");
    assert_eq!(public_id.registration, "-");
    assert_eq!(public_id.organization, "W3C");
    assert_eq!(public_id.document_type, "DTD XHTML 1.0 Transitional");
    assert_eq!(public_id.language, "EN");
    assert_eq!(
        public_id.url,
        "http://www.w3.org/TR/xhtml1/DTD/xhtml1-transitional.dtd"
    );
}

#[test]
fn test_doctype_without_public_identifier() {
    let matches = find_matches("<!DOCTYPE html>", ConstructKind::Doctype);
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].capture(Capture::Name), Some("html"));
    assert_eq!(matches[0].capture(Capture::Url), None);
    assert!(find_captures("<!DOCTYPE html>", ConstructKind::Doctype, Capture::Url).is_empty());
}

#[test]
fn test_find_captures() {
    assert_eq!(
        find_captures(PAGE, ConstructKind::Comment, Capture::Value),
        vec![" header ", " footer "]
    );
    assert_eq!(
        find_captures(PAGE, ConstructKind::CData, Capture::Value),
        vec!["raw <b>"]
    );
    assert_eq!(
        find_captures(PAGE, ConstructKind::OpenTag, Capture::Name),
        vec!["html", "body", "p", "b"]
    );
    assert_eq!(
        find_captures(PAGE, ConstructKind::Doctype, Capture::Organization),
        vec!["W3C"]
    );
}

#[test]
fn test_least_digits() {
    assert_eq!(
        find_captures(PAGE, ConstructKind::EntityNumeric, Capture::NumericLeast),
        vec!["163"]
    );
    assert_eq!(
        find_captures(PAGE, ConstructKind::EntityUnicode, Capture::UnicodeLeast),
        vec!["B0"]
    );
    assert!(find_captures(PAGE, ConstructKind::EntityUnicode, Capture::NumericLeast).is_empty());
}

#[test]
fn test_tag_attributes() {
    let text = "<input type=\"text\" name='q' size=10 disabled/>";
    let matches = find_matches(text, ConstructKind::SelfClosingTag);
    assert_eq!(matches.len(), 1);
    assert_eq!(
        matches[0].attributes(),
        &[
            Attribute {
                name: "type",
                value: Some("text"),
            },
            Attribute {
                name: "name",
                value: Some("q"),
            },
            Attribute {
                name: "size",
                value: Some("10"),
            },
            Attribute {
                name: "disabled",
                value: None,
            },
        ]
    );
    assert_eq!(
        matches[0].capture(Capture::Params),
        Some(" type=\"text\" name='q' size=10 disabled")
    );
}

#[test]
fn test_match_spans() {
    let text = "ab<i>cd";
    let matches = find_matches(text, ConstructKind::OpenTag);
    assert_eq!(matches[0].span, 2..5);
    assert_eq!(&text[matches[0].span.clone()], matches[0].text);
    assert!(find_matches(text, ConstructKind::Comment).is_empty());
}
