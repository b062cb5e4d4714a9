//! In-memory element tree built from quick-xml events
//!
//! PAW-XML datasets are small (a few hundred kilobytes once decompressed) and
//! the decoder needs "first descendant named X" lookups in arbitrary order, so
//! the pull events are folded into a tree instead of being consumed in one
//! streaming pass.

use std::borrow::Cow;

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

use super::PawError;

/// Deepest element nesting accepted by [`parse_document`]
pub const MAX_DEPTH: usize = 1024;

/// A single XML element with its attributes, direct text and child elements
#[derive(Debug, Clone, Default, PartialEq)]
pub struct XmlElement {
    name: String,
    attributes: Vec<(String, String)>,
    text: String,
    children: Vec<XmlElement>,
}

impl XmlElement {
    /// Qualified tag name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Unescaped value of the named attribute, if present
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Text and CDATA that sit directly inside this element
    ///
    /// Separate pieces (split by comments, processing instructions or CDATA
    /// boundaries) are joined with a single space.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Direct child elements in document order
    pub fn children(&self) -> &[XmlElement] {
        &self.children
    }

    /// All elements below this one, depth-first in document order
    pub fn descendants(&self) -> Descendants<'_> {
        Descendants {
            stack: self.children.iter().rev().collect(),
        }
    }

    /// First descendant with the given tag name
    pub fn find(&self, name: &str) -> Option<&XmlElement> {
        self.descendants().find(|e| e.name == name)
    }

    /// Every descendant with the given tag name, in document order
    pub fn find_all<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a XmlElement> + 'a {
        self.descendants().filter(move |e| e.name == name)
    }

    fn from_start<R>(reader: &Reader<R>, start: &BytesStart) -> Result<Self, PawError> {
        let decoder = reader.decoder();
        let name = decoder
            .decode(start.name().as_ref())
            .map_err(quick_xml::Error::from)?
            .into_owned();

        let mut attributes = Vec::new();
        for attr in start.attributes() {
            let attr = attr.map_err(quick_xml::Error::from)?;
            let key = decoder
                .decode(attr.key.as_ref())
                .map_err(quick_xml::Error::from)?
                .into_owned();
            let raw = decoder.decode(&attr.value).map_err(quick_xml::Error::from)?;
            let value = quick_xml::escape::unescape(&raw)
                .map_err(quick_xml::Error::from)?
                .into_owned();
            attributes.push((key, value));
        }

        Ok(Self {
            name,
            attributes,
            text: String::new(),
            children: Vec::new(),
        })
    }
}

/// Pre-order iterator over the descendants of an element
pub struct Descendants<'a> {
    stack: Vec<&'a XmlElement>,
}

impl<'a> Iterator for Descendants<'a> {
    type Item = &'a XmlElement;

    fn next(&mut self) -> Option<Self::Item> {
        let element = self.stack.pop()?;
        self.stack.extend(element.children.iter().rev());
        Some(element)
    }
}

/// Parse a complete XML document and return its root element
///
/// The character encoding is taken from the byte order mark or the XML
/// declaration, falling back to UTF-8.
pub fn parse_document(bytes: &[u8]) -> Result<XmlElement, PawError> {
    let mut reader = Reader::from_reader(bytes);

    let mut stack: Vec<XmlElement> = Vec::new();
    let mut root: Option<XmlElement> = None;
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Start(ref e) => {
                if stack.is_empty() && root.is_some() {
                    return Err(PawError::Malformed(
                        "multiple root elements".to_string(),
                    ));
                }
                if stack.len() >= MAX_DEPTH {
                    return Err(PawError::Malformed(format!(
                        "elements nested deeper than {} levels",
                        MAX_DEPTH
                    )));
                }
                stack.push(XmlElement::from_start(&reader, e)?);
            }
            Event::Empty(ref e) => {
                let element = XmlElement::from_start(&reader, e)?;
                attach(&mut stack, &mut root, element)?;
            }
            Event::End(ref e) => {
                let element = stack.pop().ok_or_else(|| {
                    PawError::Malformed(format!(
                        "unexpected closing tag </{}>",
                        String::from_utf8_lossy(e.name().as_ref())
                    ))
                })?;
                attach(&mut stack, &mut root, element)?;
            }
            Event::Text(ref t) => {
                let text = t.unescape()?;
                push_text(&mut stack, text)?;
            }
            Event::CData(ref c) => {
                let text = reader.decoder().decode(c).map_err(quick_xml::Error::from)?;
                push_text(&mut stack, text)?;
            }
            Event::Eof => break,
            // declaration, comments, processing instructions, doctype
            _ => {}
        }
        buf.clear();
    }

    if let Some(open) = stack.last() {
        return Err(PawError::Malformed(format!(
            "unclosed element <{}>",
            open.name
        )));
    }

    root.ok_or_else(|| PawError::Malformed("document has no root element".to_string()))
}

fn attach(
    stack: &mut [XmlElement],
    root: &mut Option<XmlElement>,
    element: XmlElement,
) -> Result<(), PawError> {
    match stack.last_mut() {
        Some(parent) => parent.children.push(element),
        None if root.is_none() => *root = Some(element),
        None => {
            return Err(PawError::Malformed("multiple root elements".to_string()));
        }
    }
    Ok(())
}

fn push_text(stack: &mut [XmlElement], text: Cow<'_, str>) -> Result<(), PawError> {
    match stack.last_mut() {
        Some(element) => {
            // pieces split by comments or CDATA never merge into one token
            if !element.text.is_empty() {
                element.text.push(' ');
            }
            element.text.push_str(&text);
        }
        None => {
            if !text
                .trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}')
                .is_empty()
            {
                return Err(PawError::Malformed(
                    "text content outside the root element".to_string(),
                ));
            }
        }
    }
    Ok(())
}
