// xml.rs — Minimal element tree over quick-xml.
//
// The workspace format only uses elements and attributes, so the tree keeps
// exactly that: text, comments, processing instructions and doctypes are
// dropped on read and never produced on write. Both directions of the codec
// go through XmlNode so the model types never touch quick-xml directly.

use std::io::Cursor;

use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::{Reader, Writer};

use crate::config::FormatConfig;
use crate::error::WorkspaceError;

/// An XML element: name, attributes in document order, child elements.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct XmlNode {
    pub name: String,
    pub attributes: Vec<(String, String)>,
    pub children: Vec<XmlNode>,
}

impl XmlNode {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Builder-style attribute setter. Replaces an existing attribute of the
    /// same name, otherwise appends.
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_attribute(name, value);
        self
    }

    pub fn set_attribute(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.attributes.iter_mut().find(|(k, _)| *k == name) {
            Some(slot) => slot.1 = value,
            None => self.attributes.push((name, value)),
        }
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn push_child(&mut self, child: XmlNode) -> &mut Self {
        self.children.push(child);
        self
    }

    /// Direct children with the given element name.
    pub fn children_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a XmlNode> + 'a {
        self.children.iter().filter(move |c| c.name == name)
    }

    fn from_start(start: &BytesStart<'_>) -> Result<Self, WorkspaceError> {
        let mut node = XmlNode::new(String::from_utf8_lossy(start.name().as_ref()).into_owned());
        for attr in start.attributes() {
            let attr = attr.map_err(WorkspaceError::xml)?;
            let key = String::from_utf8_lossy(attr.key.as_ref()).into_owned();
            let value = attr.unescape_value().map_err(WorkspaceError::xml)?;
            node.attributes.push((key, value.into_owned()));
        }
        Ok(node)
    }
}

/// Parse a document into its root element.
///
/// Fails on anything that is not well-formed: mismatched or unclosed tags,
/// bad attributes, or a document with zero or several root elements.
pub fn parse_document(input: &str) -> Result<XmlNode, WorkspaceError> {
    let mut reader = Reader::from_str(input);
    reader.config_mut().trim_text(true);

    let mut stack: Vec<XmlNode> = Vec::new();
    let mut root: Option<XmlNode> = None;

    loop {
        match reader.read_event().map_err(WorkspaceError::xml)? {
            Event::Start(start) => {
                if stack.is_empty() && root.is_some() {
                    return Err(multiple_roots());
                }
                stack.push(XmlNode::from_start(&start)?);
            }
            Event::Empty(start) => {
                let node = XmlNode::from_start(&start)?;
                attach(&mut stack, &mut root, node)?;
            }
            Event::End(_) => {
                let node = stack
                    .pop()
                    .ok_or_else(|| WorkspaceError::Xml("unexpected closing tag".to_string()))?;
                attach(&mut stack, &mut root, node)?;
            }
            Event::Eof => break,
            // Text, CDATA, comments, declarations, PIs and doctypes carry
            // nothing the workspace format uses.
            _ => {}
        }
    }

    if let Some(open) = stack.last() {
        return Err(WorkspaceError::Xml(format!(
            "unclosed element <{}>",
            open.name
        )));
    }
    root.ok_or_else(|| WorkspaceError::MalformedDocument {
        reason: "document has no root element".to_string(),
    })
}

fn attach(
    stack: &mut [XmlNode],
    root: &mut Option<XmlNode>,
    node: XmlNode,
) -> Result<(), WorkspaceError> {
    match stack.last_mut() {
        Some(parent) => {
            parent.children.push(node);
            Ok(())
        }
        None if root.is_none() => {
            *root = Some(node);
            Ok(())
        }
        None => Err(multiple_roots()),
    }
}

fn multiple_roots() -> WorkspaceError {
    WorkspaceError::MalformedDocument {
        reason: "document has more than one root element".to_string(),
    }
}

/// Serialize `root` as a standalone document with an XML declaration.
///
/// Childless elements are written as an explicit start/end pair, matching
/// what Xcode produces (`<FileRef location="..."></FileRef>`).
pub fn write_document(root: &XmlNode, format: &FormatConfig) -> Result<String, WorkspaceError> {
    let mut writer = Writer::new_with_indent(Cursor::new(Vec::new()), b' ', format.indent_width);
    writer
        .write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))
        .map_err(WorkspaceError::xml)?;
    write_node(&mut writer, root)?;

    let bytes = writer.into_inner().into_inner();
    let mut out = String::from_utf8(bytes).map_err(WorkspaceError::xml)?;
    if format.trailing_newline {
        out.push('\n');
    }
    Ok(out)
}

fn write_node(writer: &mut Writer<Cursor<Vec<u8>>>, node: &XmlNode) -> Result<(), WorkspaceError> {
    let mut start = BytesStart::new(node.name.as_str());
    for (key, value) in &node.attributes {
        start.push_attribute((key.as_str(), value.as_str()));
    }
    writer
        .write_event(Event::Start(start))
        .map_err(WorkspaceError::xml)?;

    if node.children.is_empty() {
        // An empty text event keeps the closing tag on the same line.
        writer
            .write_event(Event::Text(BytesText::new("")))
            .map_err(WorkspaceError::xml)?;
    } else {
        for child in &node.children {
            write_node(writer, child)?;
        }
    }

    writer
        .write_event(Event::End(BytesEnd::new(node.name.as_str())))
        .map_err(WorkspaceError::xml)?;
    Ok(())
}
