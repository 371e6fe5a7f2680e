//! The character entity table.
//!
//! [§ 13.5 Named character references](https://html.spec.whatwg.org/multipage/named-characters.html#named-character-references)
//!
//! Every character from the HTML 4.01 entity set (Latin-1, symbols and Greek,
//! special characters) plus `apos`, `num` and `semi`. Rows are ordered by code
//! point; the order is the iteration order used by the rewrite passes.

use super::Entity;

/// Number of rows in [`ENTITIES`].
pub const ENTITY_COUNT: usize = 255;

/// All known character entities.
pub static ENTITIES: [Entity; ENTITY_COUNT] = [
    // ASCII syntax characters
    Entity::new('\u{0022}', "quot"), // "
    Entity::new('\u{0023}', "num"), // #
    Entity::new('\u{0026}', "amp"), // &
    Entity::new('\u{0027}', "apos"), // '
    Entity::new('\u{003B}', "semi"), // ;
    Entity::new('\u{003C}', "lt"), // <
    Entity::new('\u{003E}', "gt"), // >
    // Latin-1 supplement
    Entity::new('\u{00A0}', "nbsp"),
    Entity::new('\u{00A1}', "iexcl"), // ¡
    Entity::new('\u{00A2}', "cent"), // ¢
    Entity::new('\u{00A3}', "pound"), // £
    Entity::new('\u{00A4}', "curren"), // ¤
    Entity::new('\u{00A5}', "yen"), // ¥
    Entity::new('\u{00A6}', "brvbar"), // ¦
    Entity::new('\u{00A7}', "sect"), // §
    Entity::new('\u{00A8}', "uml"), // ¨
    Entity::new('\u{00A9}', "copy"), // ©
    Entity::new('\u{00AA}', "ordf"), // ª
    Entity::new('\u{00AB}', "laquo"), // «
    Entity::new('\u{00AC}', "not"), // ¬
    Entity::new('\u{00AD}', "shy"),
    Entity::new('\u{00AE}', "reg"), // ®
    Entity::new('\u{00AF}', "macr"), // ¯
    Entity::new('\u{00B0}', "deg"), // °
    Entity::new('\u{00B1}', "plusmn"), // ±
    Entity::new('\u{00B2}', "sup2"), // ²
    Entity::new('\u{00B3}', "sup3"), // ³
    Entity::new('\u{00B4}', "acute"), // ´
    Entity::new('\u{00B5}', "micro"), // µ
    Entity::new('\u{00B6}', "para"), // ¶
    Entity::new('\u{00B7}', "middot"), // ·
    Entity::new('\u{00B8}', "cedil"), // ¸
    Entity::new('\u{00B9}', "sup1"), // ¹
    Entity::new('\u{00BA}', "ordm"), // º
    Entity::new('\u{00BB}', "raquo"), // »
    Entity::new('\u{00BC}', "frac14"), // ¼
    Entity::new('\u{00BD}', "frac12"), // ½
    Entity::new('\u{00BE}', "frac34"), // ¾
    Entity::new('\u{00BF}', "iquest"), // ¿
    Entity::new('\u{00C0}', "Agrave"), // À
    Entity::new('\u{00C1}', "Aacute"), // Á
    Entity::new('\u{00C2}', "Acirc"), // Â
    Entity::new('\u{00C3}', "Atilde"), // Ã
    Entity::new('\u{00C4}', "Auml"), // Ä
    Entity::new('\u{00C5}', "Aring"), // Å
    Entity::new('\u{00C6}', "AElig"), // Æ
    Entity::new('\u{00C7}', "Ccedil"), // Ç
    Entity::new('\u{00C8}', "Egrave"), // È
    Entity::new('\u{00C9}', "Eacute"), // É
    Entity::new('\u{00CA}', "Ecirc"), // Ê
    Entity::new('\u{00CB}', "Euml"), // Ë
    Entity::new('\u{00CC}', "Igrave"), // Ì
    Entity::new('\u{00CD}', "Iacute"), // Í
    Entity::new('\u{00CE}', "Icirc"), // Î
    Entity::new('\u{00CF}', "Iuml"), // Ï
    Entity::new('\u{00D0}', "ETH"), // Ð
    Entity::new('\u{00D1}', "Ntilde"), // Ñ
    Entity::new('\u{00D2}', "Ograve"), // Ò
    Entity::new('\u{00D3}', "Oacute"), // Ó
    Entity::new('\u{00D4}', "Ocirc"), // Ô
    Entity::new('\u{00D5}', "Otilde"), // Õ
    Entity::new('\u{00D6}', "Ouml"), // Ö
    Entity::new('\u{00D7}', "times"), // ×
    Entity::new('\u{00D8}', "Oslash"), // Ø
    Entity::new('\u{00D9}', "Ugrave"), // Ù
    Entity::new('\u{00DA}', "Uacute"), // Ú
    Entity::new('\u{00DB}', "Ucirc"), // Û
    Entity::new('\u{00DC}', "Uuml"), // Ü
    Entity::new('\u{00DD}', "Yacute"), // Ý
    Entity::new('\u{00DE}', "THORN"), // Þ
    Entity::new('\u{00DF}', "szlig"), // ß
    Entity::new('\u{00E0}', "agrave"), // à
    Entity::new('\u{00E1}', "aacute"), // á
    Entity::new('\u{00E2}', "acirc"), // â
    Entity::new('\u{00E3}', "atilde"), // ã
    Entity::new('\u{00E4}', "auml"), // ä
    Entity::new('\u{00E5}', "aring"), // å
    Entity::new('\u{00E6}', "aelig"), // æ
    Entity::new('\u{00E7}', "ccedil"), // ç
    Entity::new('\u{00E8}', "egrave"), // è
    Entity::new('\u{00E9}', "eacute"), // é
    Entity::new('\u{00EA}', "ecirc"), // ê
    Entity::new('\u{00EB}', "euml"), // ë
    Entity::new('\u{00EC}', "igrave"), // ì
    Entity::new('\u{00ED}', "iacute"), // í
    Entity::new('\u{00EE}', "icirc"), // î
    Entity::new('\u{00EF}', "iuml"), // ï
    Entity::new('\u{00F0}', "eth"), // ð
    Entity::new('\u{00F1}', "ntilde"), // ñ
    Entity::new('\u{00F2}', "ograve"), // ò
    Entity::new('\u{00F3}', "oacute"), // ó
    Entity::new('\u{00F4}', "ocirc"), // ô
    Entity::new('\u{00F5}', "otilde"), // õ
    Entity::new('\u{00F6}', "ouml"), // ö
    Entity::new('\u{00F7}', "divide"), // ÷
    Entity::new('\u{00F8}', "oslash"), // ø
    Entity::new('\u{00F9}', "ugrave"), // ù
    Entity::new('\u{00FA}', "uacute"), // ú
    Entity::new('\u{00FB}', "ucirc"), // û
    Entity::new('\u{00FC}', "uuml"), // ü
    Entity::new('\u{00FD}', "yacute"), // ý
    Entity::new('\u{00FE}', "thorn"), // þ
    Entity::new('\u{00FF}', "yuml"), // ÿ
    // Latin Extended and spacing modifiers
    Entity::new('\u{0152}', "OElig"), // Œ
    Entity::new('\u{0153}', "oelig"), // œ
    Entity::new('\u{0160}', "Scaron"), // Š
    Entity::new('\u{0161}', "scaron"), // š
    Entity::new('\u{0178}', "Yuml"), // Ÿ
    Entity::new('\u{0192}', "fnof"), // ƒ
    Entity::new('\u{02C6}', "circ"), // ˆ
    Entity::new('\u{02DC}', "tilde"), // ˜
    // Greek
    Entity::new('\u{0391}', "Alpha"), // Α
    Entity::new('\u{0392}', "Beta"), // Β
    Entity::new('\u{0393}', "Gamma"), // Γ
    Entity::new('\u{0394}', "Delta"), // Δ
    Entity::new('\u{0395}', "Epsilon"), // Ε
    Entity::new('\u{0396}', "Zeta"), // Ζ
    Entity::new('\u{0397}', "Eta"), // Η
    Entity::new('\u{0398}', "Theta"), // Θ
    Entity::new('\u{0399}', "Iota"), // Ι
    Entity::new('\u{039A}', "Kappa"), // Κ
    Entity::new('\u{039B}', "Lambda"), // Λ
    Entity::new('\u{039C}', "Mu"), // Μ
    Entity::new('\u{039D}', "Nu"), // Ν
    Entity::new('\u{039E}', "Xi"), // Ξ
    Entity::new('\u{039F}', "Omicron"), // Ο
    Entity::new('\u{03A0}', "Pi"), // Π
    Entity::new('\u{03A1}', "Rho"), // Ρ
    Entity::new('\u{03A3}', "Sigma"), // Σ
    Entity::new('\u{03A4}', "Tau"), // Τ
    Entity::new('\u{03A5}', "Upsilon"), // Υ
    Entity::new('\u{03A6}', "Phi"), // Φ
    Entity::new('\u{03A7}', "Chi"), // Χ
    Entity::new('\u{03A8}', "Psi"), // Ψ
    Entity::new('\u{03A9}', "Omega"), // Ω
    Entity::new('\u{03B1}', "alpha"), // α
    Entity::new('\u{03B2}', "beta"), // β
    Entity::new('\u{03B3}', "gamma"), // γ
    Entity::new('\u{03B4}', "delta"), // δ
    Entity::new('\u{03B5}', "epsilon"), // ε
    Entity::new('\u{03B6}', "zeta"), // ζ
    Entity::new('\u{03B7}', "eta"), // η
    Entity::new('\u{03B8}', "theta"), // θ
    Entity::new('\u{03B9}', "iota"), // ι
    Entity::new('\u{03BA}', "kappa"), // κ
    Entity::new('\u{03BB}', "lambda"), // λ
    Entity::new('\u{03BC}', "mu"), // μ
    Entity::new('\u{03BD}', "nu"), // ν
    Entity::new('\u{03BE}', "xi"), // ξ
    Entity::new('\u{03BF}', "omicron"), // ο
    Entity::new('\u{03C0}', "pi"), // π
    Entity::new('\u{03C1}', "rho"), // ρ
    Entity::new('\u{03C2}', "sigmaf"), // ς
    Entity::new('\u{03C3}', "sigma"), // σ
    Entity::new('\u{03C4}', "tau"), // τ
    Entity::new('\u{03C5}', "upsilon"), // υ
    Entity::new('\u{03C6}', "phi"), // φ
    Entity::new('\u{03C7}', "chi"), // χ
    Entity::new('\u{03C8}', "psi"), // ψ
    Entity::new('\u{03C9}', "omega"), // ω
    Entity::new('\u{03D1}', "thetasym"), // ϑ
    Entity::new('\u{03D2}', "upsih"), // ϒ
    Entity::new('\u{03D6}', "piv"), // ϖ
    // General punctuation
    Entity::new('\u{2002}', "ensp"),
    Entity::new('\u{2003}', "emsp"),
    Entity::new('\u{2009}', "thinsp"),
    Entity::new('\u{200C}', "zwnj"),
    Entity::new('\u{200D}', "zwj"),
    Entity::new('\u{200E}', "lrm"),
    Entity::new('\u{200F}', "rlm"),
    Entity::new('\u{2013}', "ndash"), // –
    Entity::new('\u{2014}', "mdash"), // —
    Entity::new('\u{2018}', "lsquo"), // ‘
    Entity::new('\u{2019}', "rsquo"), // ’
    Entity::new('\u{201A}', "sbquo"), // ‚
    Entity::new('\u{201C}', "ldquo"), // “
    Entity::new('\u{201D}', "rdquo"), // ”
    Entity::new('\u{201E}', "bdquo"), // „
    Entity::new('\u{2020}', "dagger"), // †
    Entity::new('\u{2021}', "Dagger"), // ‡
    Entity::new('\u{2022}', "bull"), // •
    Entity::new('\u{2026}', "hellip"), // …
    Entity::new('\u{2030}', "permil"), // ‰
    Entity::new('\u{2032}', "prime"), // ′
    Entity::new('\u{2033}', "Prime"), // ″
    Entity::new('\u{2039}', "lsaquo"), // ‹
    Entity::new('\u{203A}', "rsaquo"), // ›
    Entity::new('\u{203E}', "oline"), // ‾
    Entity::new('\u{2044}', "frasl"), // ⁄
    Entity::new('\u{20AC}', "euro"), // €
    // Letterlike symbols and arrows
    Entity::new('\u{2111}', "image"), // ℑ
    Entity::new('\u{2118}', "weierp"), // ℘
    Entity::new('\u{211C}', "real"), // ℜ
    Entity::new('\u{2122}', "trade"), // ™
    Entity::new('\u{2135}', "alefsym"), // ℵ
    Entity::new('\u{2190}', "larr"), // ←
    Entity::new('\u{2191}', "uarr"), // ↑
    Entity::new('\u{2192}', "rarr"), // →
    Entity::new('\u{2193}', "darr"), // ↓
    Entity::new('\u{2194}', "harr"), // ↔
    Entity::new('\u{21B5}', "crarr"), // ↵
    Entity::new('\u{21D0}', "lArr"), // ⇐
    Entity::new('\u{21D1}', "uArr"), // ⇑
    Entity::new('\u{21D2}', "rArr"), // ⇒
    Entity::new('\u{21D3}', "dArr"), // ⇓
    Entity::new('\u{21D4}', "hArr"), // ⇔
    // Mathematical operators
    Entity::new('\u{2200}', "forall"), // ∀
    Entity::new('\u{2202}', "part"), // ∂
    Entity::new('\u{2203}', "exist"), // ∃
    Entity::new('\u{2205}', "empty"), // ∅
    Entity::new('\u{2207}', "nabla"), // ∇
    Entity::new('\u{2208}', "isin"), // ∈
    Entity::new('\u{2209}', "notin"), // ∉
    Entity::new('\u{220B}', "ni"), // ∋
    Entity::new('\u{220F}', "prod"), // ∏
    Entity::new('\u{2211}', "sum"), // ∑
    Entity::new('\u{2212}', "minus"), // −
    Entity::new('\u{2217}', "lowast"), // ∗
    Entity::new('\u{221A}', "radic"), // √
    Entity::new('\u{221D}', "prop"), // ∝
    Entity::new('\u{221E}', "infin"), // ∞
    Entity::new('\u{2220}', "ang"), // ∠
    Entity::new('\u{2227}', "and"), // ∧
    Entity::new('\u{2228}', "or"), // ∨
    Entity::new('\u{2229}', "cap"), // ∩
    Entity::new('\u{222A}', "cup"), // ∪
    Entity::new('\u{222B}', "int"), // ∫
    Entity::new('\u{2234}', "there4"), // ∴
    Entity::new('\u{223C}', "sim"), // ∼
    Entity::new('\u{2245}', "cong"), // ≅
    Entity::new('\u{2248}', "asymp"), // ≈
    Entity::new('\u{2260}', "ne"), // ≠
    Entity::new('\u{2261}', "equiv"), // ≡
    Entity::new('\u{2264}', "le"), // ≤
    Entity::new('\u{2265}', "ge"), // ≥
    Entity::new('\u{2282}', "sub"), // ⊂
    Entity::new('\u{2283}', "sup"), // ⊃
    Entity::new('\u{2284}', "nsub"), // ⊄
    Entity::new('\u{2286}', "sube"), // ⊆
    Entity::new('\u{2287}', "supe"), // ⊇
    Entity::new('\u{2295}', "oplus"), // ⊕
    Entity::new('\u{2297}', "otimes"), // ⊗
    Entity::new('\u{22A5}', "perp"), // ⊥
    Entity::new('\u{22C5}', "sdot"), // ⋅
    // Technical, geometric and miscellaneous symbols
    Entity::new('\u{2308}', "lceil"), // ⌈
    Entity::new('\u{2309}', "rceil"), // ⌉
    Entity::new('\u{230A}', "lfloor"), // ⌊
    Entity::new('\u{230B}', "rfloor"), // ⌋
    Entity::new('\u{2329}', "lang"), // 〈
    Entity::new('\u{232A}', "rang"), // 〉
    Entity::new('\u{25CA}', "loz"), // ◊
    Entity::new('\u{2660}', "spades"), // ♠
    Entity::new('\u{2663}', "clubs"), // ♣
    Entity::new('\u{2665}', "hearts"), // ♥
    Entity::new('\u{2666}', "diams"), // ♦
];
