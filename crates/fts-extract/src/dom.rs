//! Parsed document tree.
//!
//! [`parse_document`] turns page markup into an owned [`Element`] tree via
//! a quick-xml event reader. Text between elements is stored ElementTree
//! style: an element owns its direct `text` plus the `tail` that follows
//! its closing tag, which keeps mixed content addressable without a node
//! enum.

use std::collections::HashMap;
use std::io::BufRead;

use quick_xml::events::{BytesStart, Event};
use quick_xml::reader::Reader;

use crate::entities::prepare_markup;
use crate::error::ExtractError;

/// HTML elements that never have content and close themselves.
const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param", "source",
    "track", "wbr",
];

fn is_void(tag: &str) -> bool {
    VOID_ELEMENTS.contains(&tag)
}

/// Node in the parsed document tree.
#[derive(Debug, Clone, Default)]
pub struct Element {
    /// Lowercased tag name.
    pub tag: String,
    /// Direct text content before the first child.
    pub text: String,
    /// Text after this element's closing tag.
    pub tail: String,
    /// Attributes, names as written (values unescaped).
    pub attrs: HashMap<String, String>,
    /// Child elements in document order.
    pub children: Vec<Element>,
}

impl Element {
    /// Create a new element with the given tag.
    #[must_use]
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            ..Self::default()
        }
    }

    /// Set direct text content.
    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    /// Set tail content.
    #[must_use]
    pub fn with_tail(mut self, tail: impl Into<String>) -> Self {
        self.tail = tail.into();
        self
    }

    /// Set a single attribute.
    #[must_use]
    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.insert(name.into(), value.into());
        self
    }

    /// Set children.
    #[must_use]
    pub fn with_children(mut self, children: Vec<Element>) -> Self {
        self.children = children;
        self
    }

    /// Attribute value, if present.
    #[must_use]
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs.get(name).map(String::as_str)
    }

    /// Whether the `class` attribute contains the given class.
    #[must_use]
    pub fn has_class(&self, name: &str) -> bool {
        self.attr("class")
            .is_some_and(|classes| classes.split_whitespace().any(|c| c == name))
    }

    /// Visit every descendant in document order.
    ///
    /// The callback receives the node and its ancestor chain, outermost
    /// first; `self` is the first ancestor and is not itself visited.
    pub fn walk<'a>(&'a self, f: &mut dyn FnMut(&'a Element, &[&'a Element])) {
        fn inner<'a>(
            node: &'a Element,
            stack: &mut Vec<&'a Element>,
            f: &mut dyn FnMut(&'a Element, &[&'a Element]),
        ) {
            for child in &node.children {
                f(child, stack);
                stack.push(child);
                inner(child, stack, f);
                stack.pop();
            }
        }

        let mut stack = vec![self];
        inner(self, &mut stack, f);
    }

    /// All descendants carrying the given class, in document order.
    #[must_use]
    pub fn find_class<'a>(&'a self, name: &str) -> Vec<&'a Element> {
        let mut out = Vec::new();
        self.walk(&mut |node, _| {
            if node.has_class(name) {
                out.push(node);
            }
        });
        out
    }

    /// First descendant carrying the given class.
    #[must_use]
    pub fn find_first_class(&self, name: &str) -> Option<&Element> {
        let mut found = None;
        self.walk(&mut |node, _| {
            if found.is_none() && node.has_class(name) {
                found = Some(node);
            }
        });
        found
    }

    /// All descendants with the given tag, in document order.
    #[must_use]
    pub fn find_tag<'a>(&'a self, tag: &str) -> Vec<&'a Element> {
        let mut out = Vec::new();
        self.walk(&mut |node, _| {
            if node.tag == tag {
                out.push(node);
            }
        });
        out
    }

    /// First descendant with the given tag.
    #[must_use]
    pub fn find_first_tag(&self, tag: &str) -> Option<&Element> {
        let mut found = None;
        self.walk(&mut |node, _| {
            if found.is_none() && node.tag == tag {
                found = Some(node);
            }
        });
        found
    }

    /// Concatenated text of this node and all descendants.
    #[must_use]
    pub fn text_content(&self) -> String {
        fn collect(node: &Element, out: &mut String) {
            out.push_str(&node.text);
            for child in &node.children {
                collect(child, out);
                out.push_str(&child.tail);
            }
        }

        let mut out = String::new();
        collect(self, &mut out);
        out
    }

    /// Text belonging directly to this node: its own text plus the tails
    /// of its children (everything not inside a child element).
    #[must_use]
    pub fn own_text(&self) -> String {
        let mut out = self.text.clone();
        for child in &self.children {
            out.push_str(&child.tail);
        }
        out
    }
}

/// Parse page markup into an [`Element`] tree.
///
/// The markup is normalized first (entities, raw-text elements, stray
/// ampersands) and wrapped in a synthetic root element, so a full page or
/// a fragment both parse. Void elements (`<br>`, `<img>`, ...) close
/// themselves whether or not the markup self-closes them.
///
/// # Errors
///
/// Returns [`ExtractError`] if the markup cannot be read as a tag stream.
pub fn parse_document(html: &str) -> Result<Element, ExtractError> {
    let prepared = prepare_markup(html);
    let wrapped = format!("<root>{prepared}</root>");

    let mut reader = Reader::from_str(&wrapped);
    let config = reader.config_mut();
    config.trim_text(false);
    config.check_end_names = false;

    // Consume the synthetic root start tag.
    let mut buf = Vec::new();
    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Start(e) if e.name().as_ref() == b"root" => break,
            Event::Eof => return Ok(Element::new("root")),
            _ => {}
        }
        buf.clear();
    }

    let mut root = parse_children(&mut reader, "root")?;
    root.tag = "root".to_owned();
    Ok(root)
}

/// Parse the children of `parent_tag` until its end tag or EOF.
fn parse_children<R: BufRead>(
    reader: &mut Reader<R>,
    parent_tag: &str,
) -> Result<Element, ExtractError> {
    let mut buf = Vec::new();
    let mut node = Element::default();

    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Start(e) => {
                let child_tag = decode_tag(reader, &e);
                let child_attrs = decode_attrs(reader, &e);
                if is_void(&child_tag) {
                    // Not self-closed in the markup, but void in HTML.
                    node.children.push(Element {
                        tag: child_tag,
                        attrs: child_attrs,
                        ..Element::default()
                    });
                } else {
                    let mut child = parse_children(reader, &child_tag)?;
                    child.tag = child_tag;
                    child.attrs = child_attrs;
                    node.children.push(child);
                }
            }
            Event::Empty(e) => {
                node.children.push(Element {
                    tag: decode_tag(reader, &e),
                    attrs: decode_attrs(reader, &e),
                    ..Element::default()
                });
            }
            Event::Text(e) => {
                let text = reader.decoder().decode(&e)?.into_owned();
                append_text(&mut node, &text);
            }
            Event::GeneralRef(e) => {
                let entity = reader.decoder().decode(&e)?.into_owned();
                append_text(&mut node, &decode_entity(&entity));
            }
            Event::CData(e) => {
                let text = String::from_utf8_lossy(&e).into_owned();
                append_text(&mut node, &text);
            }
            Event::End(e) => {
                let end_tag = decode_tag_bytes(reader, e.name().as_ref());
                if end_tag == parent_tag {
                    return Ok(node);
                }
                // Stray end tag (e.g. `</br>`) - ignore.
            }
            Event::Eof => return Ok(node),
            Event::Comment(_) | Event::Decl(_) | Event::PI(_) | Event::DocType(_) => {}
        }
        buf.clear();
    }
}

fn decode_tag<R: BufRead>(reader: &Reader<R>, e: &BytesStart) -> String {
    decode_tag_bytes(reader, e.name().as_ref())
}

fn decode_tag_bytes<R: BufRead>(reader: &Reader<R>, name: &[u8]) -> String {
    reader
        .decoder()
        .decode(name)
        .map_or_else(
            |_| String::from_utf8_lossy(name).into_owned(),
            std::borrow::Cow::into_owned,
        )
        .to_ascii_lowercase()
}

fn decode_attrs<R: BufRead>(reader: &Reader<R>, e: &BytesStart) -> HashMap<String, String> {
    let mut attrs = HashMap::new();
    for attr in e.attributes().flatten() {
        let key = reader.decoder().decode(attr.key.as_ref()).map_or_else(
            |_| String::from_utf8_lossy(attr.key.as_ref()).into_owned(),
            std::borrow::Cow::into_owned,
        );

        let value = attr.unescape_value().map_or_else(
            |_| String::from_utf8_lossy(&attr.value).into_owned(),
            std::borrow::Cow::into_owned,
        );

        attrs.insert(key, value);
    }
    attrs
}

/// Append text to the node's direct text or the last child's tail.
fn append_text(node: &mut Element, text: &str) {
    if let Some(last_child) = node.children.last_mut() {
        last_child.tail.push_str(text);
    } else {
        node.text.push_str(text);
    }
}

/// Decode an entity reference left in place by the normalization pass.
fn decode_entity(entity: &str) -> String {
    match entity {
        "lt" => "<".to_owned(),
        "gt" => ">".to_owned(),
        "amp" => "&".to_owned(),
        "apos" => "'".to_owned(),
        "quot" => "\"".to_owned(),
        s if s.starts_with('#') => {
            let code = if s.starts_with("#x") || s.starts_with("#X") {
                u32::from_str_radix(&s[2..], 16).ok()
            } else {
                s[1..].parse::<u32>().ok()
            };
            code.and_then(char::from_u32)
                .map_or_else(|| format!("&{entity};"), |c| c.to_string())
        }
        _ => format!("&{entity};"),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_parse_simple_element() {
        let tree = parse_document("<p>Hello</p>").unwrap();

        assert_eq!(tree.children.len(), 1);
        assert_eq!(tree.children[0].tag, "p");
        assert_eq!(tree.children[0].text, "Hello");
    }

    #[test]
    fn test_parse_nested_with_tail() {
        let tree = parse_document("<p><strong>Bold</strong> text</p>").unwrap();

        let p = &tree.children[0];
        assert!(p.text.is_empty());
        assert_eq!(p.children[0].tag, "strong");
        assert_eq!(p.children[0].text, "Bold");
        assert_eq!(p.children[0].tail, " text");
    }

    #[test]
    fn test_parse_unclosed_void_elements() {
        let tree = parse_document("<p>Before<br>After <img src=\"a.jpg\"></p>").unwrap();

        let p = &tree.children[0];
        assert_eq!(p.text, "Before");
        assert_eq!(p.children.len(), 2);
        assert_eq!(p.children[0].tag, "br");
        assert_eq!(p.children[0].tail, "After ");
        assert_eq!(p.children[1].tag, "img");
        assert_eq!(p.children[1].attr("src"), Some("a.jpg"));
    }

    #[test]
    fn test_parse_self_closed_void_element() {
        let tree = parse_document("<p>Before<br />After</p>").unwrap();

        let p = &tree.children[0];
        assert_eq!(p.children[0].tag, "br");
        assert_eq!(p.children[0].tail, "After");
    }

    #[test]
    fn test_parse_entities_and_ampersands() {
        let tree = parse_document("<p>Strength &amp; Conditioning&nbsp;&mdash; Open & Free</p>")
            .unwrap();

        let p = &tree.children[0];
        assert_eq!(
            p.text,
            "Strength & Conditioning\u{00a0}\u{2014} Open & Free"
        );
    }

    #[test]
    fn test_parse_full_page_with_doctype() {
        let html = "<!DOCTYPE html><html><head><title>T</title></head><body><p>x</p></body></html>";
        let tree = parse_document(html).unwrap();

        assert_eq!(tree.find_first_tag("title").unwrap().text, "T");
        assert_eq!(tree.find_first_tag("p").unwrap().text, "x");
    }

    #[test]
    fn test_parse_script_stripped() {
        let tree =
            parse_document("<div><script>let a = 1 < 2;</script><p>kept</p></div>").unwrap();

        assert!(tree.find_first_tag("script").is_none());
        assert_eq!(tree.find_first_tag("p").unwrap().text, "kept");
    }

    #[test]
    fn test_has_class_matches_whole_words() {
        let el = Element::new("div").with_attr("class", "btn btn--yellow");

        assert!(el.has_class("btn"));
        assert!(el.has_class("btn--yellow"));
        assert!(!el.has_class("yellow"));
    }

    #[test]
    fn test_find_class_document_order() {
        let tree = parse_document(
            "<div><span class=\"x\">1</span><p><span class=\"x\">2</span></p></div>",
        )
        .unwrap();

        let found = tree.find_class("x");
        assert_eq!(found.len(), 2);
        assert_eq!(found[0].text, "1");
        assert_eq!(found[1].text, "2");
    }

    #[test]
    fn test_text_content_deep() {
        let tree = parse_document("<div>a<span>b<em>c</em>d</span>e</div>").unwrap();

        assert_eq!(tree.children[0].text_content(), "abcde");
    }

    #[test]
    fn test_own_text_excludes_children() {
        let tree = parse_document("<h4>Morning Strength <span class=\"tag\">All</span> 6AM</h4>")
            .unwrap();

        let h4 = &tree.children[0];
        assert_eq!(h4.own_text(), "Morning Strength  6AM");
        assert_eq!(h4.text_content(), "Morning Strength All 6AM");
    }

    #[test]
    fn test_walk_reports_ancestors() {
        let tree = parse_document("<section class=\"section\"><div class=\"grid\"></div></section>")
            .unwrap();

        let mut seen = Vec::new();
        tree.walk(&mut |node, ancestors| {
            if node.has_class("grid") {
                seen.push(ancestors.iter().any(|a| a.has_class("section")));
            }
        });
        assert_eq!(seen, vec![true]);
    }

    #[test]
    fn test_builder_constructors() {
        let el = Element::new("p")
            .with_text("hi")
            .with_tail(" there")
            .with_attr("class", "lede")
            .with_children(vec![Element::new("br")]);

        assert_eq!(el.tag, "p");
        assert_eq!(el.text, "hi");
        assert_eq!(el.tail, " there");
        assert!(el.has_class("lede"));
        assert_eq!(el.children.len(), 1);
    }
}
