//! Minimal element tree over well-formed markup, used for SMI/SAMI.
//!
//! Only elements are kept; each element remembers its raw inner markup so
//! callers can run their own tag cleaning over it.

use crate::error::{Error, Result};
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

/// A parsed markup document.
#[derive(Debug, Clone)]
pub struct Document {
    /// The single top-level element.
    pub root: Element,
}

impl Document {
    /// All elements with the given local name, in document order.
    ///
    /// Names are compared ASCII case-insensitively.
    pub fn elements_named(&self, name: &str) -> Vec<&Element> {
        let mut found = Vec::new();
        self.root.collect_named(name, &mut found);
        found
    }
}

/// An element with its raw inner markup and child elements.
#[derive(Debug, Clone, Default)]
pub struct Element {
    /// Local name (namespace prefix removed).
    pub name: String,

    /// Source text between the start and end tags, unmodified.
    pub inner_markup: String,

    /// Child elements in order.
    pub children: Vec<Element>,
}

impl Element {
    /// Whether this element has the given local name (ASCII case-insensitive).
    pub fn is_named(&self, name: &str) -> bool {
        self.name.eq_ignore_ascii_case(name)
    }

    /// The first descendant (not self) with the given name, depth-first.
    pub fn first_descendant(&self, name: &str) -> Option<&Element> {
        for child in &self.children {
            if child.is_named(name) {
                return Some(child);
            }
            if let Some(found) = child.first_descendant(name) {
                return Some(found);
            }
        }
        None
    }

    fn collect_named<'a>(&'a self, name: &str, found: &mut Vec<&'a Element>) {
        if self.is_named(name) {
            found.push(self);
        }
        for child in &self.children {
            child.collect_named(name, found);
        }
    }
}

/// Parse well-formed markup into a [`Document`].
///
/// Fails on mismatched or unclosed elements, malformed attributes, text or
/// elements outside the root, and documents without a root element.
pub fn parse(text: &str) -> Result<Document> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);

    let mut reader = Reader::from_str(text);
    reader.trim_text(false);
    reader.check_end_names(true);

    // Open elements with the byte offset where their inner markup starts.
    let mut stack: Vec<(Element, usize)> = Vec::new();
    let mut root: Option<Element> = None;

    loop {
        match reader.read_event() {
            Ok(Event::Start(ref e)) => {
                if root.is_some() {
                    return Err(markup_error("content after the root element", &reader));
                }
                check_attributes(e, &reader)?;
                let element = Element {
                    name: element_name(e),
                    ..Element::default()
                };
                stack.push((element, reader.buffer_position()));
            }
            Ok(Event::Empty(ref e)) => {
                if root.is_some() {
                    return Err(markup_error("content after the root element", &reader));
                }
                check_attributes(e, &reader)?;
                let element = Element {
                    name: element_name(e),
                    ..Element::default()
                };
                match stack.last_mut() {
                    Some((parent, _)) => parent.children.push(element),
                    None => root = Some(element),
                }
            }
            Ok(Event::End(ref e)) => {
                let end = reader.buffer_position();
                let (mut element, inner_start) = stack.pop().ok_or_else(|| {
                    markup_error(
                        &format!(
                            "unexpected closing tag </{}>",
                            String::from_utf8_lossy(e.name().as_ref())
                        ),
                        &reader,
                    )
                })?;

                // The end tag is the last "</" before the reader position.
                let inner_end = text[..end].rfind("</").unwrap_or(end);
                element.inner_markup = text
                    .get(inner_start..inner_end)
                    .unwrap_or_default()
                    .to_string();

                match stack.last_mut() {
                    Some((parent, _)) => parent.children.push(element),
                    None => root = Some(element),
                }
            }
            Ok(Event::Text(ref e)) => {
                if stack.is_empty() && !e.iter().all(|b| b.is_ascii_whitespace()) {
                    return Err(markup_error("text outside the root element", &reader));
                }
            }
            Ok(Event::CData(_)) => {
                if stack.is_empty() {
                    return Err(markup_error("CDATA outside the root element", &reader));
                }
            }
            Ok(Event::Eof) => break,
            Err(e) => {
                log::warn!("Markup parsing failed at byte {}: {}", reader.buffer_position(), e);
                return Err(Error::MarkupParseError(format!(
                    "{} (at byte {})",
                    e,
                    reader.buffer_position()
                )));
            }
            // Declarations, comments, processing instructions and doctypes
            _ => {}
        }
    }

    if let Some((open, _)) = stack.last() {
        return Err(Error::MarkupParseError(format!(
            "unclosed element <{}> at end of input",
            open.name
        )));
    }

    root.map(|root| Document { root })
        .ok_or_else(|| Error::MarkupParseError("no root element".to_string()))
}

fn element_name(e: &BytesStart) -> String {
    let name = e.name();
    String::from_utf8_lossy(local_name(name.as_ref())).to_string()
}

/// Reject duplicated or unquoted attributes.
fn check_attributes(e: &BytesStart, reader: &Reader<&[u8]>) -> Result<()> {
    for attr in e.attributes() {
        if let Err(err) = attr {
            return Err(markup_error(
                &format!("bad attribute in <{}>: {}", element_name(e), err),
                reader,
            ));
        }
    }
    Ok(())
}

fn markup_error(message: &str, reader: &Reader<&[u8]>) -> Error {
    Error::MarkupParseError(format!("{} (at byte {})", message, reader.buffer_position()))
}

/// Extract the local name from a potentially namespaced element name.
fn local_name(name: &[u8]) -> &[u8] {
    if let Some(pos) = name.iter().position(|&b| b == b':') {
        &name[pos + 1..]
    } else {
        name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inner_markup_is_verbatim() {
        let doc = parse("<doc><p class=\"x\">Hello <b>bold</b><br/>next</p></doc>").unwrap();
        let paragraphs = doc.elements_named("p");
        assert_eq!(paragraphs.len(), 1);
        assert_eq!(paragraphs[0].inner_markup, "Hello <b>bold</b><br/>next");
        assert_eq!(paragraphs[0].children.len(), 2);
    }

    #[test]
    fn test_elements_in_document_order() {
        let doc = parse("<a><s>1</s><x><s>2</s></x><s>3</s></a>").unwrap();
        let inner: Vec<&str> = doc
            .elements_named("S")
            .iter()
            .map(|e| e.inner_markup.as_str())
            .collect();
        assert_eq!(inner, vec!["1", "2", "3"]);
    }

    #[test]
    fn test_first_descendant() {
        let doc = parse("<a><b><c>deep</c></b><c>shallow</c></a>").unwrap();
        let c = doc.root.first_descendant("c").unwrap();
        assert_eq!(c.inner_markup, "deep");
        assert!(doc.root.first_descendant("missing").is_none());
    }

    #[test]
    fn test_declarations_and_comments_are_skipped() {
        let doc = parse("<?xml version=\"1.0\"?>\n<!-- note -->\n<root/>\n").unwrap();
        assert_eq!(doc.root.name, "root");
    }

    #[test]
    fn test_local_name() {
        assert_eq!(local_name(b"smil:p"), b"p");
        assert_eq!(local_name(b"p"), b"p");
    }

    #[test]
    fn test_unclosed_element_fails() {
        let result = parse("<doc><p>Hello</doc>");
        assert!(matches!(result, Err(Error::MarkupParseError(_))));

        let result = parse("<doc><p>Hello");
        assert!(matches!(result, Err(Error::MarkupParseError(_))));
    }

    #[test]
    fn test_unterminated_tag_fails() {
        let result = parse("<doc><p");
        assert!(matches!(result, Err(Error::MarkupParseError(_))));
    }

    #[test]
    fn test_unquoted_attribute_fails() {
        let result = parse("<doc><p class=x>Hi</p></doc>");
        assert!(matches!(result, Err(Error::MarkupParseError(_))));
    }

    #[test]
    fn test_no_root_fails() {
        assert!(matches!(parse(""), Err(Error::MarkupParseError(_))));
        assert!(matches!(parse("just text"), Err(Error::MarkupParseError(_))));
    }

    #[test]
    fn test_second_root_fails() {
        let result = parse("<a></a><b></b>");
        assert!(matches!(result, Err(Error::MarkupParseError(_))));
    }
}
