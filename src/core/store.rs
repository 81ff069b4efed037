use std::collections::hash_map::Entry;
use std::collections::{HashMap, HashSet, VecDeque};

use crate::config::{DEFAULT_ROOT_NAME, ROOT_ID, SAMPLE_DATASET};
use crate::core::error::{NavError, StoreError};
use crate::models::{Crumb, FileNode, FolderNode, ListedNode, Manifest, Node, NodeId, NodeKind};

/// Read-only hierarchy of folders and files keyed by id.
///
/// Folders list their children by id in display order. A child-to-parent
/// index is computed once at construction so ancestor chains can be rebuilt
/// without walking the whole tree.
///
/// # Tolerated defects
///
/// - Child ids that do not resolve are kept in the folder but skipped when
///   listing.
/// - Nodes unreachable from root are kept but can never be navigated to.
///
/// Both are logged as warnings when the store is built.
#[derive(Clone, Debug)]
pub struct HierarchyStore {
    root: NodeId,
    nodes: HashMap<NodeId, Node>,
    parents: HashMap<NodeId, NodeId>,
}

impl HierarchyStore {
    /// Build a store from a parsed manifest, validating the tree shape.
    pub fn from_manifest(manifest: Manifest) -> Result<Self, StoreError> {
        let Manifest { root, mut nodes } = manifest;

        // A child listed twice under one folder keeps its first position
        for (folder_id, node) in nodes.iter_mut() {
            if let Node::Folder(folder) = node {
                let mut seen = HashSet::new();
                folder.children.retain(|child| {
                    let first = seen.insert(child.clone());
                    if !first {
                        tracing::warn!(folder = %folder_id, child = %child, "repeated child reference");
                    }
                    first
                });
            }
        }

        match nodes.get(&root) {
            None => return Err(StoreError::MissingRoot(root)),
            Some(Node::File(_)) => return Err(StoreError::RootNotFolder(root)),
            Some(Node::Folder(_)) => {}
        }

        // Visit folders in id order so errors are reported deterministically
        let mut folders: Vec<(&NodeId, &FolderNode)> = nodes
            .iter()
            .filter_map(|(id, node)| node.as_folder().map(|folder| (id, folder)))
            .collect();
        folders.sort_by(|a, b| a.0.cmp(b.0));

        let mut parents: HashMap<NodeId, NodeId> = HashMap::new();
        for (folder_id, folder) in folders {
            for child in &folder.children {
                if *child == root {
                    return Err(StoreError::RootHasParent {
                        root: root.clone(),
                        parent: folder_id.clone(),
                    });
                }
                if !nodes.contains_key(child) {
                    tracing::warn!(folder = %folder_id, child = %child, "dangling child reference");
                    continue;
                }
                match parents.entry(child.clone()) {
                    Entry::Occupied(existing) => {
                        return Err(StoreError::MultipleParents {
                            id: child.clone(),
                            first: existing.get().clone(),
                            second: folder_id.clone(),
                        });
                    }
                    Entry::Vacant(slot) => {
                        slot.insert(folder_id.clone());
                    }
                }
            }
        }

        let store = Self {
            root,
            nodes,
            parents,
        };

        let unreachable = store.unreachable_ids();
        if !unreachable.is_empty() {
            tracing::warn!(count = unreachable.len(), ids = ?unreachable, "nodes unreachable from root");
        }

        Ok(store)
    }

    /// Parse a JSON manifest and build the store.
    pub fn from_json(json: &str) -> Result<Self, StoreError> {
        let manifest: Manifest = serde_json::from_str(json)?;
        let store = Self::from_manifest(manifest)?;
        tracing::info!(root = %store.root, nodes = store.len(), "hierarchy loaded");
        Ok(store)
    }

    /// The bundled demo drive.
    pub fn sample() -> Result<Self, StoreError> {
        Self::from_json(SAMPLE_DATASET)
    }

    /// Store holding only an empty root folder (fallback when loading fails).
    pub fn empty() -> Self {
        let root = NodeId::from(ROOT_ID);
        let mut nodes = HashMap::new();
        nodes.insert(
            root.clone(),
            Node::folder(DEFAULT_ROOT_NAME, Vec::<NodeId>::new()),
        );
        Self {
            root,
            nodes,
            parents: HashMap::new(),
        }
    }

    pub fn root_id(&self) -> &NodeId {
        &self.root
    }

    /// Display name of the root folder.
    pub fn root_name(&self) -> &str {
        self.nodes
            .get(&self.root)
            .map(Node::name)
            .unwrap_or(DEFAULT_ROOT_NAME)
    }

    pub fn root_crumb(&self) -> Crumb {
        Crumb::new(self.root.clone(), self.root_name())
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Look up a node. Unknown ids return `None`.
    pub fn get_node(&self, id: &str) -> Option<&Node> {
        self.nodes.get(id)
    }

    /// Resolve a folder's children in stored order.
    ///
    /// Children that do not resolve are omitted. Returns an empty list when
    /// `folder_id` is not a folder.
    pub fn get_children(&self, folder_id: &str) -> Vec<ListedNode> {
        let Some(Node::Folder(folder)) = self.nodes.get(folder_id) else {
            return Vec::new();
        };

        folder
            .children
            .iter()
            .filter_map(|id| {
                self.nodes.get(id).map(|node| ListedNode {
                    id: id.clone(),
                    node: node.clone(),
                })
            })
            .collect()
    }

    /// Look up a node that must be a folder.
    pub fn folder(&self, id: &str) -> Result<&FolderNode, NavError> {
        match self.nodes.get(id) {
            Some(Node::Folder(folder)) => Ok(folder),
            Some(Node::File(_)) => Err(NavError::WrongKind {
                id: NodeId::from(id),
                expected: NodeKind::Folder,
            }),
            None => Err(NavError::NotFound(NodeId::from(id))),
        }
    }

    /// Look up a node that must be a file.
    pub fn file(&self, id: &str) -> Result<&FileNode, NavError> {
        match self.nodes.get(id) {
            Some(Node::File(file)) => Ok(file),
            Some(Node::Folder(_)) => Err(NavError::WrongKind {
                id: NodeId::from(id),
                expected: NodeKind::File,
            }),
            None => Err(NavError::NotFound(NodeId::from(id))),
        }
    }

    /// Parent folder of a node. `None` for root, orphans and unknown ids.
    pub fn parent_of(&self, id: &str) -> Option<&NodeId> {
        self.parents.get(id)
    }

    /// Root-first chain of crumbs ending at `id`.
    ///
    /// Returns `None` if `id` is unknown or has no parent chain to root.
    pub fn ancestry(&self, id: &str) -> Option<Vec<Crumb>> {
        let (mut cursor, _) = self.nodes.get_key_value(id)?;
        let mut chain = Vec::new();

        loop {
            let node = self.nodes.get(cursor)?;
            chain.push(Crumb::new(cursor.clone(), node.name()));
            if *cursor == self.root {
                break;
            }
            // A parent cycle among orphans would never reach root
            if chain.len() > self.nodes.len() {
                return None;
            }
            cursor = self.parents.get(cursor)?;
        }

        chain.reverse();
        Some(chain)
    }

    /// Ids that cannot be reached from root by following children.
    fn unreachable_ids(&self) -> Vec<NodeId> {
        let mut seen: HashSet<&NodeId> = HashSet::new();
        let mut queue: VecDeque<&NodeId> = VecDeque::new();
        seen.insert(&self.root);
        queue.push_back(&self.root);

        while let Some(id) = queue.pop_front() {
            if let Some(Node::Folder(folder)) = self.nodes.get(id) {
                for child in &folder.children {
                    if self.nodes.contains_key(child) && seen.insert(child) {
                        queue.push_back(child);
                    }
                }
            }
        }

        let mut missing: Vec<NodeId> = self
            .nodes
            .keys()
            .filter(|id| !seen.contains(id))
            .cloned()
            .collect();
        missing.sort();
        missing
    }
}

impl Default for HierarchyStore {
    fn default() -> Self {
        Self::empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::FileKind;

    fn manifest(root: &str, nodes: Vec<(&str, Node)>) -> Manifest {
        Manifest {
            root: NodeId::from(root),
            nodes: nodes
                .into_iter()
                .map(|(id, node)| (NodeId::from(id), node))
                .collect(),
        }
    }

    fn create_test_store() -> HierarchyStore {
        HierarchyStore::from_manifest(manifest(
            "root",
            vec![
                ("root", Node::folder("Home", ["docs", "ghost", "readme"])),
                ("docs", Node::folder("Docs", ["guide", "archive"])),
                ("archive", Node::folder("Archive", Vec::<NodeId>::new())),
                (
                    "readme",
                    Node::file("README.md", "2 KB", "Jan 1, 2024", FileKind::Document),
                ),
                (
                    "guide",
                    Node::file("Guide.pdf", "1.1 MB", "Feb 2, 2024", FileKind::Pdf),
                ),
            ],
        ))
        .expect("test store should build")
    }

    fn child_ids(children: &[ListedNode]) -> Vec<&str> {
        children.iter().map(|c| c.id.as_str()).collect()
    }

    #[test]
    fn test_empty_store() {
        let store = HierarchyStore::empty();
        assert_eq!(store.root_id(), &NodeId::from("root"));
        assert_eq!(store.root_name(), "My Drive");
        assert!(store.get_children("root").is_empty());
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_get_node() {
        let store = create_test_store();
        assert_eq!(store.get_node("docs").map(Node::name), Some("Docs"));
        assert!(store.get_node("nope").is_none());
    }

    #[test]
    fn test_children_preserve_order_and_skip_dangling() {
        let store = create_test_store();
        let children = store.get_children("root");
        assert_eq!(child_ids(&children), ["docs", "readme"]);

        let children = store.get_children("docs");
        assert_eq!(child_ids(&children), ["guide", "archive"]);
    }

    #[test]
    fn test_children_of_non_folder_is_empty() {
        let store = create_test_store();
        assert!(store.get_children("readme").is_empty());
        assert!(store.get_children("missing").is_empty());
    }

    #[test]
    fn test_typed_lookups() {
        let store = create_test_store();
        assert_eq!(store.folder("docs").unwrap().name, "Docs");
        assert_eq!(store.file("guide").unwrap().size, "1.1 MB");

        assert_eq!(
            store.folder("guide"),
            Err(NavError::WrongKind {
                id: NodeId::from("guide"),
                expected: NodeKind::Folder,
            })
        );
        assert_eq!(
            store.file("docs"),
            Err(NavError::WrongKind {
                id: NodeId::from("docs"),
                expected: NodeKind::File,
            })
        );
        assert_eq!(
            store.file("ghost"),
            Err(NavError::NotFound(NodeId::from("ghost")))
        );
    }

    #[test]
    fn test_parent_and_ancestry() {
        let store = create_test_store();
        assert_eq!(store.parent_of("archive"), Some(&NodeId::from("docs")));
        assert!(store.parent_of("root").is_none());

        let chain = store.ancestry("archive").unwrap();
        let ids: Vec<&str> = chain.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, ["root", "docs", "archive"]);
        assert_eq!(chain[0].name, "Home");

        assert_eq!(store.ancestry("root").unwrap().len(), 1);
        assert!(store.ancestry("ghost").is_none());
    }

    #[test]
    fn test_orphans_are_unreachable() {
        let store = HierarchyStore::from_manifest(manifest(
            "root",
            vec![
                ("root", Node::folder("Home", ["a"])),
                ("a", Node::folder("A", Vec::<NodeId>::new())),
                ("lost", Node::folder("Lost", ["lost-child"])),
                ("lost-child", Node::folder("Lost Child", Vec::<NodeId>::new())),
            ],
        ))
        .unwrap();

        assert!(store.ancestry("lost").is_none());
        assert!(store.ancestry("lost-child").is_none());
        assert_eq!(
            store.unreachable_ids(),
            vec![NodeId::from("lost"), NodeId::from("lost-child")]
        );
    }

    #[test]
    fn test_missing_root() {
        let err = HierarchyStore::from_manifest(manifest(
            "root",
            vec![("other", Node::folder("Other", Vec::<NodeId>::new()))],
        ))
        .unwrap_err();
        assert!(matches!(err, StoreError::MissingRoot(id) if id == "root"));
    }

    #[test]
    fn test_root_must_be_folder() {
        let err = HierarchyStore::from_manifest(manifest(
            "root",
            vec![("root", Node::file("root.txt", "1 KB", "", FileKind::Document))],
        ))
        .unwrap_err();
        assert!(matches!(err, StoreError::RootNotFolder(_)));
    }

    #[test]
    fn test_root_cannot_be_a_child() {
        let err = HierarchyStore::from_manifest(manifest(
            "root",
            vec![
                ("root", Node::folder("Home", ["a"])),
                ("a", Node::folder("A", ["root"])),
            ],
        ))
        .unwrap_err();
        assert!(matches!(err, StoreError::RootHasParent { parent, .. } if parent == "a"));
    }

    #[test]
    fn test_repeated_child_listed_once() {
        let store = HierarchyStore::from_manifest(manifest(
            "root",
            vec![
                ("root", Node::folder("Home", ["a", "f", "a"])),
                ("a", Node::folder("A", Vec::<NodeId>::new())),
                ("f", Node::file("f.txt", "1 KB", "", FileKind::Document)),
            ],
        ))
        .expect("repeated child should not reject the dataset");

        assert_eq!(child_ids(&store.get_children("root")), ["a", "f"]);
        assert_eq!(store.parent_of("a"), Some(&NodeId::from("root")));
    }

    #[test]
    fn test_multiple_parents_rejected() {
        let err = HierarchyStore::from_manifest(manifest(
            "root",
            vec![
                ("root", Node::folder("Home", ["a", "b"])),
                ("a", Node::folder("A", ["shared"])),
                ("b", Node::folder("B", ["shared"])),
                (
                    "shared",
                    Node::file("shared.zip", "1 MB", "", FileKind::Archive),
                ),
            ],
        ))
        .unwrap_err();

        match err {
            StoreError::MultipleParents { id, first, second } => {
                assert_eq!(id, "shared");
                assert_eq!(first, "a");
                assert_eq!(second, "b");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_from_json_parse_error() {
        let err = HierarchyStore::from_json("{ not json").unwrap_err();
        assert!(matches!(err, StoreError::Parse(_)));
    }

    #[test]
    fn test_sample_dataset() {
        let store = HierarchyStore::sample().expect("bundled dataset should load");
        assert_eq!(store.root_name(), "My Drive");
        assert_eq!(store.len(), 13);
        assert_eq!(
            child_ids(&store.get_children("root")),
            ["folder1", "folder2", "file1", "file2", "file3"]
        );
        assert_eq!(
            store.file("file2").unwrap().file_type,
            FileKind::Presentation
        );
    }
}
