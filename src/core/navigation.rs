//! Location transitions.
//!
//! [`transition`] is a pure function from the current [`LocationState`] and
//! a target folder id to the next state. It never mutates its inputs; the
//! browser swaps the returned state in whole.

use serde::Deserialize;

use crate::core::error::NavError;
use crate::core::HierarchyStore;
use crate::models::{Crumb, LocationState};

/// How a forward navigation to a folder that is not on the trail is checked.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrailPolicy {
    /// Append when the target is a child of the current folder, otherwise
    /// rebuild the trail from the hierarchy's parent chain.
    #[default]
    Verified,
    /// Append any folder that is not already on the trail.
    Permissive,
}

/// Compute the state after navigating to `target`.
///
/// - Root resets the trail to `[root]`.
/// - A folder already on the trail truncates the trail after it.
/// - Any other folder is appended (subject to `policy`).
///
/// Errors leave the caller's state untouched.
pub fn transition(
    state: &LocationState,
    store: &HierarchyStore,
    target: &str,
    policy: TrailPolicy,
) -> Result<LocationState, NavError> {
    let folder = store.folder(target)?;

    if store.root_id() == target {
        return Ok(LocationState::at_root(store.root_crumb()));
    }

    if let Some(index) = state.position(target) {
        return Ok(state.truncated(index + 1));
    }

    let crumb = Crumb::new(target, folder.name.as_str());
    match policy {
        TrailPolicy::Permissive => Ok(state.descended(crumb)),
        TrailPolicy::Verified => {
            if store.parent_of(target) == Some(state.current_id()) {
                return Ok(state.descended(crumb));
            }
            store
                .ancestry(target)
                .and_then(LocationState::from_chain)
                .ok_or_else(|| NavError::Unreachable(crumb.id))
        }
    }
}
