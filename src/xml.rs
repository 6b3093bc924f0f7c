//! XML element tree
//!
//! A small owned tree built from `quick_xml` reader events. Namespace
//! prefixes are dropped from element and attribute names, namespace
//! declarations are skipped and text is whitespace-trimmed.
//!
//! Repeated children are always read back as a list through
//! [`XmlNode::children_named`], so a list that happens to hold a single
//! element is handled the same as a longer one.

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

use crate::error::{Result, WitsmlError};

/// One element with its attributes, text and child elements
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct XmlNode {
    name: String,
    attributes: Vec<(String, String)>,
    text: String,
    children: Vec<XmlNode>,
}

impl XmlNode {
    /// Parse a document (or fragment with a single root) into its root element
    pub fn parse(xml: &str) -> Result<XmlNode> {
        let mut reader = Reader::from_str(xml);
        reader.config_mut().trim_text(true);

        let mut stack: Vec<XmlNode> = Vec::new();
        let mut root: Option<XmlNode> = None;

        loop {
            match reader.read_event().map_err(xml_error)? {
                Event::Start(start) => stack.push(Self::from_start(&start)?),
                Event::Empty(start) => {
                    let node = Self::from_start(&start)?;
                    attach(&mut stack, &mut root, node)?;
                }
                Event::End(_) => {
                    let node = stack
                        .pop()
                        .ok_or_else(|| WitsmlError::Xml("unexpected closing tag".to_string()))?;
                    attach(&mut stack, &mut root, node)?;
                }
                Event::Text(text) => {
                    if let Some(node) = stack.last_mut() {
                        node.text.push_str(&text.unescape().map_err(xml_error)?);
                    }
                }
                Event::CData(data) => {
                    if let Some(node) = stack.last_mut() {
                        node.text.push_str(&String::from_utf8_lossy(&data));
                    }
                }
                Event::Eof => break,
                _ => {}
            }
        }

        if let Some(open) = stack.last() {
            return Err(WitsmlError::Xml(format!(
                "unexpected end of document inside <{}>",
                open.name
            )));
        }

        root.ok_or_else(|| WitsmlError::Xml("document has no root element".to_string()))
    }

    fn from_start(start: &BytesStart<'_>) -> Result<XmlNode> {
        let mut node = XmlNode {
            name: String::from_utf8_lossy(start.local_name().as_ref()).into_owned(),
            ..XmlNode::default()
        };

        for attribute in start.attributes() {
            let attribute = attribute.map_err(xml_error)?;
            if attribute.key.as_namespace_binding().is_some() {
                continue;
            }
            let key = String::from_utf8_lossy(attribute.key.local_name().as_ref()).into_owned();
            let value = attribute.unescape_value().map_err(xml_error)?.into_owned();
            node.attributes.push((key, value));
        }

        Ok(node)
    }

    // =========================================================================
    // Navigation
    // =========================================================================

    /// Local element name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Trimmed text content
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// All child elements in document order
    pub fn children(&self) -> &[XmlNode] {
        &self.children
    }

    /// First child element called `name`
    pub fn child(&self, name: &str) -> Option<&XmlNode> {
        self.children.iter().find(|c| c.name == name)
    }

    /// Every child element called `name`, as a list regardless of count
    pub fn children_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a XmlNode> + 'a {
        self.children.iter().filter(move |c| c.name == name)
    }

    /// Text of the first child called `name`, empty when absent
    pub fn child_text(&self, name: &str) -> &str {
        self.child(name).map_or("", XmlNode::text)
    }

    /// Follow a chain of child names
    pub fn path(&self, names: &[&str]) -> Option<&XmlNode> {
        names.iter().try_fold(self, |node, name| node.child(name))
    }

    /// Take ownership of the first child called `name`
    pub fn into_child(self, name: &str) -> Option<XmlNode> {
        self.children.into_iter().find(|c| c.name == name)
    }
}

/// Attach a finished element to its parent, or make it the root
fn attach(stack: &mut [XmlNode], root: &mut Option<XmlNode>, node: XmlNode) -> Result<()> {
    if let Some(parent) = stack.last_mut() {
        parent.children.push(node);
        return Ok(());
    }

    if root.is_some() {
        return Err(WitsmlError::Xml(format!(
            "multiple root elements, second is <{}>",
            node.name
        )));
    }

    *root = Some(node);
    Ok(())
}

fn xml_error(err: impl std::fmt::Display) -> WitsmlError {
    WitsmlError::Xml(err.to_string())
}
