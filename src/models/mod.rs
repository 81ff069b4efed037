//! Data models and types for the application.
//!
//! Contains domain types for:
//! - [`Node`], [`NodeId`], [`FileKind`], [`Manifest`] - Hierarchy representation
//! - [`LocationState`], [`Crumb`] - Current folder and breadcrumb trail
//! - [`ViewType`], [`Listing`] - View management

mod explorer;
mod node;

pub use explorer::{Crumb, Listing, LocationState, ViewType};
pub use node::{FileKind, FileNode, FolderNode, ListedNode, Manifest, Node, NodeId, NodeKind};
