//! Markup normalization ahead of the event reader.
//!
//! Real-world static pages carry named HTML entities, bare ampersands and
//! raw-text elements, none of which an XML event reader tolerates. This
//! module rewrites the markup into something the reader accepts without
//! changing its visible content.

use std::sync::LazyLock;

use regex::Regex;

static RAW_TEXT_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)<(script|style)\b[^>]*>.*?</(script|style)\s*>").expect("invalid raw-text regex")
});

static ENTITY_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"&([a-zA-Z]+);").expect("invalid entity regex"));

/// Prepare raw page markup for the event reader.
///
/// Strips `<script>`/`<style>` bodies, converts named HTML entities to
/// Unicode (the five XML core entities stay as references) and escapes
/// ampersands that do not start a reference.
pub(crate) fn prepare_markup(html: &str) -> String {
    let stripped = RAW_TEXT_PATTERN.replace_all(html, "");
    let converted = convert_named_entities(&stripped);
    escape_stray_ampersands(&converted)
}

/// Replace named HTML entities with their Unicode characters.
///
/// XML core entities (`amp`, `lt`, `gt`, `quot`, `apos`) are left as
/// references for the reader to resolve; unknown names are preserved
/// verbatim.
fn convert_named_entities(html: &str) -> String {
    ENTITY_PATTERN
        .replace_all(html, |caps: &regex::Captures| {
            let name = &caps[1];
            entity_to_unicode(name)
                .map(String::from)
                .unwrap_or_else(|| caps[0].to_owned())
        })
        .into_owned()
}

/// Map an HTML entity name to its Unicode character.
fn entity_to_unicode(name: &str) -> Option<&'static str> {
    Some(match name {
        "nbsp" => "\u{00a0}",
        "mdash" => "\u{2014}",
        "ndash" => "\u{2013}",
        "ldquo" => "\u{201c}",
        "rdquo" => "\u{201d}",
        "lsquo" => "\u{2018}",
        "rsquo" => "\u{2019}",
        "bull" => "\u{2022}",
        "hellip" => "\u{2026}",
        "copy" => "\u{00a9}",
        "reg" => "\u{00ae}",
        "trade" => "\u{2122}",
        "deg" => "\u{00b0}",
        "laquo" => "\u{00ab}",
        "raquo" => "\u{00bb}",
        "times" => "\u{00d7}",
        "middot" => "\u{00b7}",
        _ => return None,
    })
}

/// Escape `&` characters that do not begin an entity reference.
fn escape_stray_ampersands(html: &str) -> String {
    let bytes = html.as_bytes();
    let mut out = String::with_capacity(html.len());

    for (i, c) in html.char_indices() {
        if c == '&' && !starts_reference(&bytes[i + 1..]) {
            out.push_str("&amp;");
        } else {
            out.push(c);
        }
    }
    out
}

/// True when the bytes after `&` form `name;`, `#digits;` or `#xhex;`.
fn starts_reference(rest: &[u8]) -> bool {
    let mut i = 0;
    if rest.first() == Some(&b'#') {
        i += 1;
        if matches!(rest.get(i), Some(b'x' | b'X')) {
            i += 1;
            let start = i;
            while matches!(rest.get(i), Some(b) if b.is_ascii_hexdigit()) {
                i += 1;
            }
            return i > start && rest.get(i) == Some(&b';');
        }
        let start = i;
        while matches!(rest.get(i), Some(b) if b.is_ascii_digit()) {
            i += 1;
        }
        return i > start && rest.get(i) == Some(&b';');
    }

    let start = i;
    while matches!(rest.get(i), Some(b) if b.is_ascii_alphabetic()) {
        i += 1;
    }
    i > start && rest.get(i) == Some(&b';')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_named_entities_become_unicode() {
        let out = convert_named_entities("Hello&nbsp;World&mdash;Test");
        assert_eq!(out, "Hello\u{00a0}World\u{2014}Test");
    }

    #[test]
    fn test_core_entities_preserved() {
        let out = convert_named_entities("a &amp; b &lt;c&gt;");
        assert_eq!(out, "a &amp; b &lt;c&gt;");
    }

    #[test]
    fn test_unknown_entity_preserved() {
        let out = convert_named_entities("&zzgl;");
        assert_eq!(out, "&zzgl;");
    }

    #[test]
    fn test_stray_ampersand_escaped() {
        assert_eq!(escape_stray_ampersands("Train & Play"), "Train &amp; Play");
        assert_eq!(escape_stray_ampersands("a & b & c"), "a &amp; b &amp; c");
    }

    #[test]
    fn test_references_not_double_escaped() {
        assert_eq!(escape_stray_ampersands("&amp; &#169; &#x2014;"), "&amp; &#169; &#x2014;");
    }

    #[test]
    fn test_trailing_ampersand_escaped() {
        assert_eq!(escape_stray_ampersands("ends with &"), "ends with &amp;");
    }

    #[test]
    fn test_script_and_style_stripped() {
        let html = "<p>a</p><script>if (x < 1) {}</script><style>p { color: red }</style><p>b</p>";
        let out = prepare_markup(html);
        assert_eq!(out, "<p>a</p><p>b</p>");
    }
}
