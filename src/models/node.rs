use std::borrow::Borrow;
use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::config::ROOT_ID;

// =============================================================================
// Node Identifiers
// =============================================================================

/// Unique identifier of a node in the hierarchy.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize, Serialize)]
#[serde(transparent)]
pub struct NodeId(String);

impl NodeId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for NodeId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for NodeId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for NodeId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl PartialEq<str> for NodeId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for NodeId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// =============================================================================
// File Kinds
// =============================================================================

/// Document category of a file, used for icon selection.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(from = "String", rename_all = "lowercase")]
pub enum FileKind {
    Document,
    Spreadsheet,
    Presentation,
    Pdf,
    Archive,
    #[default]
    Other,
}

impl FileKind {
    /// Parse a dataset tag. Unknown tags map to [`FileKind::Other`].
    pub fn from_tag(tag: &str) -> Self {
        match tag.to_ascii_lowercase().as_str() {
            "document" => Self::Document,
            "spreadsheet" => Self::Spreadsheet,
            "presentation" => Self::Presentation,
            "pdf" => Self::Pdf,
            "archive" => Self::Archive,
            _ => Self::Other,
        }
    }

    /// Detect the kind from a file name extension.
    pub fn from_name(name: &str) -> Self {
        let Some((_, ext)) = name.rsplit_once('.') else {
            return Self::Other;
        };
        match ext.to_ascii_lowercase().as_str() {
            "doc" | "docx" | "odt" | "txt" | "md" | "rtf" => Self::Document,
            "xls" | "xlsx" | "ods" | "csv" => Self::Spreadsheet,
            "ppt" | "pptx" | "odp" | "key" => Self::Presentation,
            "pdf" => Self::Pdf,
            "zip" | "tar" | "gz" | "tgz" | "7z" | "rar" => Self::Archive,
            _ => Self::Other,
        }
    }
}

impl From<String> for FileKind {
    fn from(tag: String) -> Self {
        Self::from_tag(&tag)
    }
}

// =============================================================================
// Nodes
// =============================================================================

/// A folder with its children in display order.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct FolderNode {
    pub name: String,
    #[serde(default)]
    pub children: Vec<NodeId>,
}

/// A file with human-readable metadata.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FileNode {
    pub name: String,
    /// Human-readable size (e.g. "245 KB")
    pub size: String,
    /// Human-readable modification date (e.g. "May 12, 2023")
    pub modified: String,
    pub file_type: FileKind,
}

/// Raw file record; `fileType` falls back to extension detection when absent.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawFileNode {
    name: String,
    #[serde(default)]
    size: String,
    #[serde(default)]
    modified: String,
    file_type: Option<FileKind>,
}

impl<'de> Deserialize<'de> for FileNode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = RawFileNode::deserialize(deserializer)?;
        let file_type = raw
            .file_type
            .unwrap_or_else(|| FileKind::from_name(&raw.name));
        Ok(FileNode {
            name: raw.name,
            size: raw.size,
            modified: raw.modified,
            file_type,
        })
    }
}

/// Entry in the hierarchy.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Node {
    Folder(FolderNode),
    File(FileNode),
}

/// Kind discriminant, used when reporting lookups of the wrong kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NodeKind {
    Folder,
    File,
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Folder => write!(f, "folder"),
            Self::File => write!(f, "file"),
        }
    }
}

impl Node {
    /// Create a folder node.
    pub fn folder<I, S>(name: &str, children: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<NodeId>,
    {
        Node::Folder(FolderNode {
            name: name.to_string(),
            children: children.into_iter().map(Into::into).collect(),
        })
    }

    /// Create a file node.
    pub fn file(name: &str, size: &str, modified: &str, file_type: FileKind) -> Self {
        Node::File(FileNode {
            name: name.to_string(),
            size: size.to_string(),
            modified: modified.to_string(),
            file_type,
        })
    }

    pub fn name(&self) -> &str {
        match self {
            Node::Folder(folder) => &folder.name,
            Node::File(file) => &file.name,
        }
    }

    pub fn kind(&self) -> NodeKind {
        match self {
            Node::Folder(_) => NodeKind::Folder,
            Node::File(_) => NodeKind::File,
        }
    }

    pub fn is_folder(&self) -> bool {
        matches!(self, Node::Folder(_))
    }

    pub fn as_folder(&self) -> Option<&FolderNode> {
        match self {
            Node::Folder(folder) => Some(folder),
            Node::File(_) => None,
        }
    }

    pub fn as_file(&self) -> Option<&FileNode> {
        match self {
            Node::File(file) => Some(file),
            Node::Folder(_) => None,
        }
    }
}

/// A node resolved through the store, annotated with its id.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ListedNode {
    pub id: NodeId,
    pub node: Node,
}

// =============================================================================
// Manifest
// =============================================================================

fn default_root() -> NodeId {
    NodeId::from(ROOT_ID)
}

/// Serialized dataset: root id plus every node keyed by id.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Manifest {
    #[serde(default = "default_root")]
    pub root: NodeId,
    pub nodes: HashMap<NodeId, Node>,
}
