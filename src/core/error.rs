//! Error types for the drive core.
//!
//! - [`StoreError`] - Dataset construction failures
//! - [`NavError`] - Lookups that do not resolve to the expected node
//! - [`ConfigError`] - Browser configuration parsing

use thiserror::Error;

use crate::models::{NodeId, NodeKind};

/// Errors raised while building a [`HierarchyStore`](super::HierarchyStore).
#[derive(Debug, Error)]
pub enum StoreError {
    /// Dataset is not valid JSON or does not match the manifest layout
    #[error("failed to parse dataset: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("root node '{0}' is missing")]
    MissingRoot(NodeId),
    #[error("root node '{0}' is not a folder")]
    RootNotFolder(NodeId),
    #[error("root node '{root}' is listed as a child of '{parent}'")]
    RootHasParent { root: NodeId, parent: NodeId },
    /// Same node listed under two folders (not a tree)
    #[error("node '{id}' is a child of both '{first}' and '{second}'")]
    MultipleParents {
        id: NodeId,
        first: NodeId,
        second: NodeId,
    },
}

/// Navigation and lookup failures.
///
/// The browser absorbs these as no-ops; they exist so the pure layer can say
/// why a request was ignored.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NavError {
    #[error("node '{0}' does not exist")]
    NotFound(NodeId),
    #[error("node '{id}' is not a {expected}")]
    WrongKind { id: NodeId, expected: NodeKind },
    /// Folder exists but has no parent chain back to root
    #[error("folder '{0}' is not reachable from root")]
    Unreachable(NodeId),
}

/// Browser configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid browser config: {0}")]
    Parse(#[from] toml::de::Error),
}
