// workspace.rs — The Workspace root aggregate.
//
// A Workspace is an ordered list of top-level items with no implicit root
// group. It is persisted as `contents.xcworkspacedata`, normally inside a
// `*.xcworkspace` bundle directory.
//
// Loading is deliberately total: `from_file` turns every I/O or parse
// failure into an empty workspace, so "no workspace yet" and "empty
// workspace" look the same to callers. `read` is the strict variant it is
// built on.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::config::FormatConfig;
use crate::error::WorkspaceError;
use crate::item::{items_from_xml_nodes, FileRef, FileRefs, WorkspaceItem};
use crate::xml::{self, XmlNode};

/// Name of the document inside a `*.xcworkspace` bundle.
pub const CONTENTS_FILE: &str = "contents.xcworkspacedata";

/// Value written to the root element's `version` attribute.
pub const FORMAT_VERSION: &str = "1.0";

const ROOT_ELEMENT: &str = "Workspace";

/// An Xcode workspace: the ordered top-level items of the document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Workspace {
    #[serde(default)]
    contents: Vec<WorkspaceItem>,
}

impl Workspace {
    /// An empty workspace.
    pub fn new() -> Self {
        Self::default()
    }

    /// A workspace referencing each project path with a default FileRef, in order.
    pub fn from_paths<I, S>(paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        paths
            .into_iter()
            .map(|p| WorkspaceItem::FileRef(FileRef::new(p)))
            .collect()
    }

    pub fn contents(&self) -> &[WorkspaceItem] {
        &self.contents
    }

    pub fn contents_mut(&mut self) -> &mut Vec<WorkspaceItem> {
        &mut self.contents
    }

    pub fn is_empty(&self) -> bool {
        self.contents.is_empty()
    }

    /// Append a top-level item. A bare path string becomes a default FileRef.
    pub fn push(&mut self, item: impl Into<WorkspaceItem>) -> &mut Self {
        self.contents.push(item.into());
        self
    }

    /// Every FileRef in the tree, depth-first in document order.
    pub fn file_refs(&self) -> FileRefs<'_> {
        FileRefs::new(&self.contents)
    }

    /// Every project path in the tree, in document order. Duplicates are
    /// kept; references without a path are skipped.
    pub fn project_paths(&self) -> impl Iterator<Item = &str> + '_ {
        self.file_refs().filter_map(FileRef::path)
    }

    /// True if any FileRef at any depth references `path`.
    pub fn contains(&self, path: &str) -> bool {
        self.contents.iter().any(|item| item.contains_path(path))
    }

    /// Root `<Workspace version="1.0">` element with one child per top-level item.
    pub fn to_xml_node(&self) -> XmlNode {
        let mut root = XmlNode::new(ROOT_ELEMENT).with_attribute("version", FORMAT_VERSION);
        root.children = self.contents.iter().map(WorkspaceItem::to_xml_node).collect();
        root
    }

    /// Serialize with the default (Xcode) layout.
    pub fn to_xml_string(&self) -> Result<String, WorkspaceError> {
        self.to_xml_string_with(&FormatConfig::default())
    }

    pub fn to_xml_string_with(&self, format: &FormatConfig) -> Result<String, WorkspaceError> {
        xml::write_document(&self.to_xml_node(), format)
    }

    /// Parse a document. Malformed XML or a non-`Workspace` root is an
    /// error; unrecognized nodes inside a valid document are skipped.
    pub fn from_xml_str(input: &str) -> Result<Self, WorkspaceError> {
        let root = xml::parse_document(input)?;
        if root.name != ROOT_ELEMENT {
            return Err(WorkspaceError::MalformedDocument {
                reason: format!("expected <{}> root, found <{}>", ROOT_ELEMENT, root.name),
            });
        }
        if let Some(version) = root.attribute("version") {
            if version != FORMAT_VERSION {
                tracing::debug!("reading workspace document version {}", version);
            }
        }
        Ok(Self {
            contents: items_from_xml_nodes(&root.children),
        })
    }

    /// Read and parse a workspace. `path` may be the document itself or the
    /// `*.xcworkspace` bundle containing it.
    pub fn read(path: impl AsRef<Path>) -> Result<Self, WorkspaceError> {
        let document = document_path(path.as_ref());
        let content = fs::read_to_string(&document).map_err(|source| WorkspaceError::IoError {
            path: document.clone(),
            source,
        })?;
        let workspace = Self::from_xml_str(&content)?;
        tracing::debug!(
            "loaded {} ({} top-level items)",
            document.display(),
            workspace.contents.len()
        );
        Ok(workspace)
    }

    /// Like [`Workspace::read`], but any failure yields an empty workspace.
    pub fn from_file(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match Self::read(path) {
            Ok(workspace) => workspace,
            Err(WorkspaceError::IoError { path, source })
                if source.kind() == std::io::ErrorKind::NotFound =>
            {
                tracing::debug!("no workspace at {}, starting empty", path.display());
                Self::new()
            }
            Err(e) => {
                tracing::warn!("treating {} as empty: {}", path.display(), e);
                Self::new()
            }
        }
    }

    /// Write the document with the default layout. Returns the file written.
    pub fn save_as(&self, path: impl AsRef<Path>) -> Result<PathBuf, WorkspaceError> {
        self.save_as_with(path, &FormatConfig::default())
    }

    /// Write the document. A bundle path (directory or `*.xcworkspace`) is
    /// created if needed and the document is written inside it.
    pub fn save_as_with(
        &self,
        path: impl AsRef<Path>,
        format: &FormatConfig,
    ) -> Result<PathBuf, WorkspaceError> {
        let document = document_path(path.as_ref());
        if let Some(parent) = document.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|source| WorkspaceError::IoError {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        let content = self.to_xml_string_with(format)?;
        fs::write(&document, content).map_err(|source| WorkspaceError::IoError {
            path: document.clone(),
            source,
        })?;
        tracing::debug!("wrote {}", document.display());
        Ok(document)
    }
}

impl FromIterator<WorkspaceItem> for Workspace {
    fn from_iter<T: IntoIterator<Item = WorkspaceItem>>(iter: T) -> Self {
        Self {
            contents: iter.into_iter().collect(),
        }
    }
}

impl fmt::Display for Workspace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let xml = self.to_xml_string().map_err(|_| fmt::Error)?;
        f.write_str(&xml)
    }
}

/// Resolve a bundle path to the document inside it.
fn document_path(path: &Path) -> PathBuf {
    let is_bundle =
        path.is_dir() || path.extension().is_some_and(|ext| ext == "xcworkspace");
    if is_bundle {
        path.join(CONTENTS_FILE)
    } else {
        path.to_path_buf()
    }
}
