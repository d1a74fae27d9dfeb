// item.rs — Workspace tree nodes: groups and file references.
//
// The tree is a closed sum type. A Group owns its children outright; no node
// is ever shared between two parents. Equality is scoped to the variant:
// FileRefs compare location type and path, Groups compare only their name
// (contents are deliberately ignored), and a Group never equals a FileRef.

use std::slice;

use serde::{Deserialize, Serialize};

use crate::error::WorkspaceError;
use crate::location::LocationType;
use crate::xml::XmlNode;

/// A node in the workspace tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "isa")]
pub enum WorkspaceItem {
    Group(Group),
    FileRef(FileRef),
}

impl WorkspaceItem {
    /// Variant tag, also used as the XML element name.
    pub fn isa(&self) -> &'static str {
        match self {
            WorkspaceItem::Group(_) => Group::ISA,
            WorkspaceItem::FileRef(_) => FileRef::ISA,
        }
    }

    pub fn location_type(&self) -> LocationType {
        match self {
            WorkspaceItem::Group(g) => g.location_type,
            WorkspaceItem::FileRef(f) => f.location_type,
        }
    }

    pub fn set_location_type(&mut self, location_type: LocationType) {
        match self {
            WorkspaceItem::Group(g) => g.set_location_type(location_type),
            WorkspaceItem::FileRef(f) => f.set_location_type(location_type),
        }
    }

    /// Parse and assign a location type (token or descriptive name, any
    /// ASCII case, no surrounding whitespace). On error the item is left
    /// unchanged.
    pub fn try_set_location_type(&mut self, value: &str) -> Result<(), WorkspaceError> {
        self.set_location_type(value.parse()?);
        Ok(())
    }

    /// True if a FileRef with `path` is this node or anywhere below it.
    pub fn contains_path(&self, path: &str) -> bool {
        match self {
            WorkspaceItem::Group(g) => g.contains_path(path),
            WorkspaceItem::FileRef(f) => f.contains_path(path),
        }
    }

    pub fn to_xml_node(&self) -> XmlNode {
        match self {
            WorkspaceItem::Group(g) => g.to_xml_node(),
            WorkspaceItem::FileRef(f) => f.to_xml_node(),
        }
    }

    pub fn as_group(&self) -> Option<&Group> {
        match self {
            WorkspaceItem::Group(g) => Some(g),
            WorkspaceItem::FileRef(_) => None,
        }
    }

    pub fn as_file_ref(&self) -> Option<&FileRef> {
        match self {
            WorkspaceItem::FileRef(f) => Some(f),
            WorkspaceItem::Group(_) => None,
        }
    }

    /// Convert an element into an item. Returns `None` for anything that
    /// isn't a recognizable Group or FileRef; those are logged and skipped.
    pub(crate) fn from_xml_node(node: &XmlNode) -> Option<Self> {
        match node.name.as_str() {
            Group::ISA => Some(WorkspaceItem::Group(Group::from_xml_node(node))),
            FileRef::ISA => FileRef::from_xml_node(node).map(WorkspaceItem::FileRef),
            other => {
                tracing::warn!("skipping unrecognized workspace element <{}>", other);
                None
            }
        }
    }
}

impl From<FileRef> for WorkspaceItem {
    fn from(file_ref: FileRef) -> Self {
        WorkspaceItem::FileRef(file_ref)
    }
}

impl From<Group> for WorkspaceItem {
    fn from(group: Group) -> Self {
        WorkspaceItem::Group(group)
    }
}

/// A bare path becomes a FileRef with the default location type.
impl From<&str> for WorkspaceItem {
    fn from(path: &str) -> Self {
        WorkspaceItem::FileRef(FileRef::new(path))
    }
}

impl From<String> for WorkspaceItem {
    fn from(path: String) -> Self {
        WorkspaceItem::FileRef(FileRef::new(path))
    }
}

/// Leaf reference to a file (usually an `.xcodeproj` bundle).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileRef {
    path: Option<String>,
    #[serde(default)]
    location_type: LocationType,
}

impl FileRef {
    pub const ISA: &'static str = "FileRef";

    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: Some(path.into()),
            location_type: LocationType::default(),
        }
    }

    /// A reference with no path.
    pub fn unset() -> Self {
        Self::default()
    }

    pub fn with_location_type(mut self, location_type: LocationType) -> Self {
        self.location_type = location_type;
        self
    }

    pub fn path(&self) -> Option<&str> {
        self.path.as_deref()
    }

    pub fn set_path(&mut self, path: Option<String>) {
        self.path = path;
    }

    pub fn location_type(&self) -> LocationType {
        self.location_type
    }

    pub fn set_location_type(&mut self, location_type: LocationType) {
        self.location_type = location_type;
    }

    /// Parse and assign a location type (token or descriptive name, any
    /// ASCII case, no surrounding whitespace). On error the reference is left
    /// unchanged.
    pub fn try_set_location_type(&mut self, value: &str) -> Result<(), WorkspaceError> {
        self.location_type = value.parse()?;
        Ok(())
    }

    pub fn contains_path(&self, path: &str) -> bool {
        self.path.as_deref() == Some(path)
    }

    /// `location` attribute value. An unset path renders as an empty
    /// segment, e.g. `group:`, and an empty segment reads back as unset,
    /// so `FileRef::new("")` comes back from a document as `FileRef::unset()`.
    pub fn location(&self) -> String {
        format!(
            "{}:{}",
            self.location_type.token(),
            self.path.as_deref().unwrap_or("")
        )
    }

    pub fn to_xml_node(&self) -> XmlNode {
        XmlNode::new(Self::ISA).with_attribute("location", self.location())
    }

    fn from_xml_node(node: &XmlNode) -> Option<Self> {
        let Some(location) = node.attribute("location") else {
            tracing::warn!("skipping <FileRef> without a location attribute");
            return None;
        };
        let (location_type, path) = parse_location(Self::ISA, location)?;
        Some(Self {
            path: (!path.is_empty()).then(|| path.to_string()),
            location_type,
        })
    }
}

/// Split a `location` attribute into its type and path segment. Logs and
/// returns `None` when the prefix is missing or unknown.
fn parse_location<'a>(element: &str, location: &'a str) -> Option<(LocationType, &'a str)> {
    let Some((prefix, path)) = location.split_once(':') else {
        tracing::warn!("<{}> has unprefixed location '{}'", element, location);
        return None;
    };
    let Some(location_type) = LocationType::from_token(prefix) else {
        tracing::warn!(
            "<{}> has unknown location type '{}' in '{}'",
            element,
            prefix,
            location
        );
        return None;
    };
    Some((location_type, path))
}

/// Organizational container of child items.
///
/// A group may carry its own `location` (Xcode writes `container:` or
/// `group:<folder>`). `path` is `None` when the document declared no
/// location; the attribute is then only written if the location type was
/// changed from the default.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Group {
    name: Option<String>,
    #[serde(default)]
    location_type: LocationType,
    #[serde(default)]
    path: Option<String>,
    #[serde(default)]
    contents: Vec<WorkspaceItem>,
}

impl Group {
    pub const ISA: &'static str = "Group";

    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    pub fn unnamed() -> Self {
        Self::default()
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn set_name(&mut self, name: Option<String>) {
        self.name = name;
    }

    pub fn location_type(&self) -> LocationType {
        self.location_type
    }

    pub fn set_location_type(&mut self, location_type: LocationType) {
        self.location_type = location_type;
    }

    /// Parse and assign a location type (token or descriptive name, any
    /// ASCII case, no surrounding whitespace). On error the group is left
    /// unchanged.
    pub fn try_set_location_type(&mut self, value: &str) -> Result<(), WorkspaceError> {
        self.location_type = value.parse()?;
        Ok(())
    }

    /// Path segment of the group's own location (`Some("")` for `container:`).
    pub fn path(&self) -> Option<&str> {
        self.path.as_deref()
    }

    pub fn set_path(&mut self, path: Option<String>) {
        self.path = path;
    }

    /// `location` attribute value, or `None` when the group has no location
    /// of its own.
    pub fn location(&self) -> Option<String> {
        if self.path.is_none() && self.location_type == LocationType::default() {
            return None;
        }
        Some(format!(
            "{}:{}",
            self.location_type.token(),
            self.path.as_deref().unwrap_or("")
        ))
    }

    pub fn contents(&self) -> &[WorkspaceItem] {
        &self.contents
    }

    pub fn contents_mut(&mut self) -> &mut Vec<WorkspaceItem> {
        &mut self.contents
    }

    /// Append an item and return the group for chaining.
    pub fn push(&mut self, item: impl Into<WorkspaceItem>) -> &mut Self {
        self.contents.push(item.into());
        self
    }

    pub fn contains_path(&self, path: &str) -> bool {
        self.contents.iter().any(|item| item.contains_path(path))
    }

    /// Every FileRef below this group, depth-first in document order.
    pub fn file_refs(&self) -> FileRefs<'_> {
        FileRefs::new(&self.contents)
    }

    pub fn to_xml_node(&self) -> XmlNode {
        let mut node = XmlNode::new(Self::ISA);
        if let Some(location) = self.location() {
            node.set_attribute("location", location);
        }
        if let Some(name) = &self.name {
            node.set_attribute("name", name.as_str());
        }
        node.children = self.contents.iter().map(WorkspaceItem::to_xml_node).collect();
        node
    }

    fn from_xml_node(node: &XmlNode) -> Self {
        // A bad location drops the attribute, not the group and its contents.
        let (location_type, path) = match node
            .attribute("location")
            .and_then(|location| parse_location(Self::ISA, location))
        {
            Some((location_type, path)) => (location_type, Some(path.to_string())),
            None => (LocationType::default(), None),
        };
        Self {
            name: node.attribute("name").map(str::to_string),
            location_type,
            path,
            contents: items_from_xml_nodes(&node.children),
        }
    }
}

/// Groups are identified by name alone; their contents are not compared.
impl PartialEq for Group {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

pub(crate) fn items_from_xml_nodes(nodes: &[XmlNode]) -> Vec<WorkspaceItem> {
    nodes.iter().filter_map(WorkspaceItem::from_xml_node).collect()
}

/// Depth-first, pre-order iterator over the FileRefs of a subtree.
pub struct FileRefs<'a> {
    stack: Vec<slice::Iter<'a, WorkspaceItem>>,
}

impl<'a> FileRefs<'a> {
    pub(crate) fn new(items: &'a [WorkspaceItem]) -> Self {
        Self {
            stack: vec![items.iter()],
        }
    }
}

impl<'a> Iterator for FileRefs<'a> {
    type Item = &'a FileRef;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let level = self.stack.last_mut()?;
            match level.next() {
                Some(WorkspaceItem::FileRef(f)) => return Some(f),
                Some(WorkspaceItem::Group(g)) => self.stack.push(g.contents.iter()),
                None => {
                    self.stack.pop();
                }
            }
        }
    }
}
