//! Named character reference lookup table.
//!
//! [§ 13.2.5.73 Named character reference state](https://html.spec.whatwg.org/multipage/parsing.html#named-character-reference-state)
//!
//! The full standard defines 2,231 entities; the common ones are listed here.
//! Unknown references are left in the text untouched.

use std::collections::HashMap;
use std::sync::LazyLock;

/// Maps entity names (without the leading '&') to their replacement strings.
///
/// Names ending in `;` require the semicolon; the few legacy names without it
/// are matched bare as browsers do (e.g. `&amp` for `&amp;`).
static NAMED_ENTITIES: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    HashMap::from([
        ("amp;", "&"),
        ("amp", "&"),
        ("lt;", "<"),
        ("lt", "<"),
        ("gt;", ">"),
        ("gt", ">"),
        ("quot;", "\""),
        ("quot", "\""),
        ("apos;", "'"),
        ("nbsp;", "\u{00A0}"),
        ("nbsp", "\u{00A0}"),
        ("copy;", "\u{00A9}"),
        ("copy", "\u{00A9}"),
        ("reg;", "\u{00AE}"),
        ("reg", "\u{00AE}"),
        ("trade;", "\u{2122}"),
        ("mdash;", "\u{2014}"),
        ("ndash;", "\u{2013}"),
        ("hellip;", "\u{2026}"),
        ("bull;", "\u{2022}"),
        ("middot;", "\u{00B7}"),
        ("lsquo;", "\u{2018}"),
        ("rsquo;", "\u{2019}"),
        ("ldquo;", "\u{201C}"),
        ("rdquo;", "\u{201D}"),
        ("laquo;", "\u{00AB}"),
        ("raquo;", "\u{00BB}"),
        ("cent;", "\u{00A2}"),
        ("pound;", "\u{00A3}"),
        ("euro;", "\u{20AC}"),
        ("yen;", "\u{00A5}"),
        ("times;", "\u{00D7}"),
        ("divide;", "\u{00F7}"),
        ("deg;", "\u{00B0}"),
        ("zwnj;", "\u{200C}"),
        ("zwj;", "\u{200D}"),
        ("shy;", "\u{00AD}"),
    ])
});

/// Look up a named reference, e.g. `"amp;"` -> `"&"`.
#[must_use]
pub fn lookup(name: &str) -> Option<&'static str> {
    NAMED_ENTITIES.get(name).copied()
}

/// [§ 13.2.5.80 Numeric character reference end state](https://html.spec.whatwg.org/multipage/parsing.html#numeric-character-reference-end-state)
///
/// "If the number is 0x00 ... greater than 0x10FFFF ... or a surrogate,
/// set the character reference code to 0xFFFD."
#[must_use]
pub fn numeric_reference(code: u32) -> char {
    if code == 0 || (0xD800..=0xDFFF).contains(&code) {
        return '\u{FFFD}';
    }
    char::from_u32(code).unwrap_or('\u{FFFD}')
}
