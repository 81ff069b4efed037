//! Explorer-related data types for the drive view.

use serde::{Deserialize, Serialize};

use super::node::{ListedNode, NodeId};

/// Listing presentation (list or grid).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewType {
    /// Table with name, modified and size columns (default)
    #[default]
    List,
    /// Tiles with icon and name
    Grid,
}

/// One breadcrumb segment.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Crumb {
    pub id: NodeId,
    pub name: String,
}

impl Crumb {
    pub fn new(id: impl Into<NodeId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// Current folder plus the breadcrumb trail that led to it.
///
/// The trail always starts at the root crumb and ends at the current folder,
/// so the current folder id is derived from the trail rather than stored
/// separately.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LocationState {
    root: Crumb,
    /// Crumbs below root, ordered by depth
    path: Vec<Crumb>,
}

impl LocationState {
    /// State positioned at the root folder.
    pub fn at_root(root: Crumb) -> Self {
        Self {
            root,
            path: Vec::new(),
        }
    }

    /// Build a state from a full root-first chain. Returns `None` when empty.
    pub fn from_chain(chain: Vec<Crumb>) -> Option<Self> {
        let mut crumbs = chain.into_iter();
        let root = crumbs.next()?;
        Some(Self {
            root,
            path: crumbs.collect(),
        })
    }

    pub fn current(&self) -> &Crumb {
        self.path.last().unwrap_or(&self.root)
    }

    pub fn current_id(&self) -> &NodeId {
        &self.current().id
    }

    pub fn root(&self) -> &Crumb {
        &self.root
    }

    pub fn is_at_root(&self) -> bool {
        self.path.is_empty()
    }

    /// Number of crumbs including root.
    pub fn len(&self) -> usize {
        self.path.len() + 1
    }

    pub fn crumbs(&self) -> impl Iterator<Item = &Crumb> {
        std::iter::once(&self.root).chain(self.path.iter())
    }

    pub fn trail(&self) -> Vec<Crumb> {
        self.crumbs().cloned().collect()
    }

    /// Index of `id` in the trail (root is index 0).
    pub fn position(&self, id: &str) -> Option<usize> {
        self.crumbs().position(|crumb| crumb.id == id)
    }

    /// Keep the first `len` crumbs. Root is always kept.
    pub fn truncated(&self, len: usize) -> Self {
        Self {
            root: self.root.clone(),
            path: self
                .path
                .iter()
                .take(len.saturating_sub(1))
                .cloned()
                .collect(),
        }
    }

    /// Append a crumb below the current folder.
    pub fn descended(&self, crumb: Crumb) -> Self {
        let mut path = self.path.clone();
        path.push(crumb);
        Self {
            root: self.root.clone(),
            path,
        }
    }
}

/// Snapshot of the current folder handed to the view for rendering.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Listing {
    pub folder: NodeId,
    pub entries: Vec<ListedNode>,
    pub trail: Vec<Crumb>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(state: &LocationState) -> Vec<&str> {
        state.crumbs().map(|c| c.id.as_str()).collect()
    }

    #[test]
    fn test_view_type_default() {
        assert_eq!(ViewType::default(), ViewType::List);
    }

    #[test]
    fn test_at_root() {
        let state = LocationState::at_root(Crumb::new("root", "My Drive"));
        assert!(state.is_at_root());
        assert_eq!(state.current_id(), &NodeId::from("root"));
        assert_eq!(state.len(), 1);
    }

    #[test]
    fn test_descend_and_truncate() {
        let state = LocationState::at_root(Crumb::new("root", "My Drive"))
            .descended(Crumb::new("a", "A"))
            .descended(Crumb::new("b", "B"))
            .descended(Crumb::new("c", "C"));
        assert_eq!(ids(&state), ["root", "a", "b", "c"]);
        assert_eq!(state.current().name, "C");
        assert_eq!(state.position("b"), Some(2));

        let back = state.truncated(2);
        assert_eq!(ids(&back), ["root", "a"]);
        assert_eq!(back.current_id(), &NodeId::from("a"));

        // Root survives even a zero-length truncation
        assert_eq!(ids(&state.truncated(0)), ["root"]);
    }

    #[test]
    fn test_from_chain() {
        assert!(LocationState::from_chain(Vec::new()).is_none());
        let state = LocationState::from_chain(vec![
            Crumb::new("root", "My Drive"),
            Crumb::new("folder1", "Work Documents"),
        ])
        .unwrap();
        assert_eq!(ids(&state), ["root", "folder1"]);
    }
}
