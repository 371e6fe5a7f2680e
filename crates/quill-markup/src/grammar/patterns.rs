//! Pattern text for each construct kind.
//!
//! Patterns are stored compact. Every rule is compiled with [`FLAGS`], so
//! keywords and names compare ASCII case-insensitively and `.` crosses line
//! breaks.

use super::ConstructKind;

/// Flags shared by every rule.
pub const FLAGS: &str = "(?is)";

/// Generic tag and doctype root-element name.
pub const TAG_NAME: &str = "[a-z]+";

/// Generic entity mnemonic name: never starts with a digit, at least two
/// characters, so `&xy;` is the shortest named entity.
pub const ENTITY_NAME: &str = "[a-z][0-9a-z]+";

/// Generic decimal digits: two or more, so `&#12;` is the shortest numeric
/// entity.
pub const DECIMAL_DIGITS: &str = "[0-9]{2,}";

/// Generic hexadecimal digits: two or more, so `&#x1F;` is the shortest
/// unicode entity.
pub const HEX_DIGITS: &str = "[0-9a-f]{2,}";

/// [§ 13.1.2.3 Attributes](https://html.spec.whatwg.org/multipage/syntax.html#attributes-2)
///
/// One attribute: whitespace, a name, and an optional value that is
/// double-quoted, single-quoted or bare. A bare value never contains `/` so
/// it cannot swallow the `/>` of a self-closing tag.
pub const ATTRIBUTE: &str = r#"\s+[0-9a-z_-]+(?:=(?:"[^"]*"|'[^']*'|[^\s"'<>`/]+))?"#;

/// [`ATTRIBUTE`] with its regions named, used to split a matched `params`
/// region into [`Attribute`](super::Attribute) records.
pub const ATTRIBUTE_PARTS: &str = r#"\s+(?P<name>[0-9a-z_-]+)(?:=(?:"(?P<double>[^"]*)"|'(?P<single>[^']*)'|(?P<bare>[^\s"'<>`/]+)))?"#;

/// Unquoted body of a formal public identifier, e.g.
/// `-//W3C//DTD XHTML 1.0 Transitional//EN`.
const PUBLIC_TEXT: &str = r"[+-]//[0-9a-z .-]+//[0-9a-z .]+//[a-z]+";

/// [`PUBLIC_TEXT`] with its regions named, anchored to the whole text.
pub const PUBLIC_TEXT_PARTS: &str = r"\A(?P<registration>[+-])//(?P<organization>[0-9a-z .-]+)//(?P<document_type>[0-9a-z .]+)//(?P<language>[a-z]+)\z";

/// Build the unanchored pattern for `kind`, with `name` substituted for the
/// kind's name region. Kinds without a name region ignore it.
#[must_use]
pub fn body(kind: ConstructKind, name: &str) -> String {
    match kind {
        // [§ 13.1.6 Comments](https://html.spec.whatwg.org/multipage/syntax.html#comments)
        ConstructKind::Comment => r"<!--(?P<value>.*?)-->".to_string(),
        // [§ 13.1.5 CDATA sections](https://html.spec.whatwg.org/multipage/syntax.html#cdata-sections)
        ConstructKind::CData => r"<!\[CDATA\[(?P<value>.*?)\]\]>".to_string(),
        // [§ 13.1.1 The DOCTYPE](https://html.spec.whatwg.org/multipage/syntax.html#the-doctype)
        ConstructKind::Doctype => format!(
            r#"<!DOCTYPE\s+(?P<name>{name})(?:\s+(?P<keyword>[a-z]+)\s+(?P<public_id>"{PUBLIC_TEXT}"|'{PUBLIC_TEXT}')\s+(?P<url>"[^"]*"|'[^']*'))?\s*>"#
        ),
        // [§ 13.1.2.1 Start tags](https://html.spec.whatwg.org/multipage/syntax.html#start-tags)
        ConstructKind::OpenTag => format!(r"<(?P<name>{name})(?P<params>(?:{ATTRIBUTE})*)\s*>"),
        // [§ 13.1.2.2 End tags](https://html.spec.whatwg.org/multipage/syntax.html#end-tags)
        ConstructKind::CloseTag => format!(r"</(?P<name>{name})\s*>"),
        ConstructKind::SelfClosingTag => {
            format!(r"<(?P<name>{name})(?P<params>(?:{ATTRIBUTE})*)\s*/>")
        }
        // [§ 13.1.4 Character references](https://html.spec.whatwg.org/multipage/syntax.html#character-references)
        ConstructKind::EntityName => format!("&(?P<name>{name});"),
        ConstructKind::EntityNumeric => format!("&#(?P<digits>{name});"),
        ConstructKind::EntityUnicode => format!("&#x(?P<digits>{name});"),
    }
}

/// [§ 13.1.6 Comments](https://html.spec.whatwg.org/multipage/syntax.html#comments)
///
/// "Optionally, text, with the additional restriction that the text must not
/// start with the string ">", nor start with the string "->", nor contain the
/// strings "<!--", "-->", or "--!>", nor end with the string "<!-"."
///
/// This grammar rejects a leading `<` instead of `>`.
#[must_use]
pub fn comment_text_is_valid(text: &str) -> bool {
    !text.starts_with('<')
        && !text.starts_with("->")
        && !text.contains("<!--")
        && !text.contains("-->")
        && !text.contains("--!>")
        && !text.ends_with("<!-")
}
