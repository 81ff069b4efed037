//! Drive browser controller.
//!
//! Owns the [`LocationState`] and the [`ViewType`], turns user actions into
//! transitions and notifies subscribers through [`BrowserEvent`]s.
//!
//! Invalid requests (unknown ids, files where folders are expected and the
//! reverse) are absorbed: the state is left as it was and nothing is emitted.

use std::fmt;
use std::sync::Arc;

use crate::config::BrowserConfig;
use crate::core::navigation::{transition, TrailPolicy};
use crate::core::HierarchyStore;
use crate::models::{
    Crumb, FileKind, ListedNode, Listing, LocationState, Node, NodeId, NodeKind, ViewType,
};

// =============================================================================
// Events
// =============================================================================

/// File metadata forwarded to the presentation layer on open.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OpenRequest {
    pub id: NodeId,
    pub name: String,
    pub size: String,
    pub modified: String,
    pub file_type: FileKind,
}

/// Files picked in the upload form, targeted at a folder.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UploadRequest {
    pub folder: NodeId,
    pub files: Vec<String>,
}

/// Notifications emitted by [`DriveBrowser`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BrowserEvent {
    /// Location changed; carries the new folder, its children and the trail
    ListingChanged(Listing),
    OpenRequested(OpenRequest),
    UploadRequested(UploadRequest),
    ViewTypeChanged(ViewType),
}

/// Handle returned by [`DriveBrowser::subscribe`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(usize);

type Observer = Box<dyn FnMut(&BrowserEvent)>;

// =============================================================================
// DriveBrowser
// =============================================================================

/// Navigation controller over a shared, read-only [`HierarchyStore`].
pub struct DriveBrowser {
    store: Arc<HierarchyStore>,
    location: LocationState,
    view_type: ViewType,
    policy: TrailPolicy,
    observers: Vec<(SubscriptionId, Observer)>,
    next_subscription: usize,
}

impl DriveBrowser {
    /// Create a browser positioned at the store's root.
    pub fn new(store: Arc<HierarchyStore>, config: &BrowserConfig) -> Self {
        let location = LocationState::at_root(store.root_crumb());
        Self {
            store,
            location,
            view_type: config.view_type,
            policy: config.trail_policy,
            observers: Vec::new(),
            next_subscription: 0,
        }
    }

    pub fn store(&self) -> &Arc<HierarchyStore> {
        &self.store
    }

    pub fn location(&self) -> &LocationState {
        &self.location
    }

    pub fn current_folder(&self) -> &NodeId {
        self.location.current_id()
    }

    pub fn view_type(&self) -> ViewType {
        self.view_type
    }

    /// Breadcrumb trail from root to the current folder.
    pub fn breadcrumb_trail(&self) -> Vec<Crumb> {
        self.location.trail()
    }

    /// Children of the current folder in stored order.
    pub fn list_current_folder(&self) -> Vec<ListedNode> {
        self.store.get_children(self.location.current_id().as_str())
    }

    /// Snapshot of the current folder for rendering.
    pub fn listing(&self) -> Listing {
        Listing {
            folder: self.location.current_id().clone(),
            entries: self.list_current_folder(),
            trail: self.breadcrumb_trail(),
        }
    }

    // =========================================================================
    // Actions
    // =========================================================================

    /// Navigate to a folder from the listing or the breadcrumb bar.
    ///
    /// Ids that are not folders leave the location unchanged.
    pub fn navigate_to(&mut self, target: &str) -> &LocationState {
        match transition(&self.location, &self.store, target, self.policy) {
            Ok(next) if next == self.location => {}
            Ok(next) => {
                tracing::debug!(from = %self.location.current_id(), to = %target, depth = next.len(), "navigate");
                self.location = next;
                let listing = self.listing();
                self.emit(&BrowserEvent::ListingChanged(listing));
            }
            Err(err) => tracing::debug!(%err, "navigation ignored"),
        }
        &self.location
    }

    /// Request that a file be opened. Returns whether an event was emitted.
    pub fn open_file(&mut self, file_id: &str) -> bool {
        let request = match self.store.file(file_id) {
            Ok(file) => OpenRequest {
                id: NodeId::from(file_id),
                name: file.name.clone(),
                size: file.size.clone(),
                modified: file.modified.clone(),
                file_type: file.file_type,
            },
            Err(err) => {
                tracing::debug!(%err, "open ignored");
                return false;
            }
        };

        tracing::info!(file = %request.id, name = %request.name, "open requested");
        self.emit(&BrowserEvent::OpenRequested(request));
        true
    }

    /// Dispatch a click on a listing entry by its kind.
    pub fn activate(&mut self, id: &str) {
        match self.store.get_node(id).map(Node::kind) {
            Some(NodeKind::Folder) => {
                self.navigate_to(id);
            }
            Some(NodeKind::File) => {
                self.open_file(id);
            }
            None => tracing::debug!(id, "activate ignored: unknown node"),
        }
    }

    pub fn set_view_type(&mut self, view_type: ViewType) {
        if self.view_type == view_type {
            return;
        }
        self.view_type = view_type;
        self.emit(&BrowserEvent::ViewTypeChanged(view_type));
    }

    /// Simulate an upload into the current folder. The store is not modified.
    pub fn request_upload(&mut self, files: Vec<String>) {
        let request = UploadRequest {
            folder: self.location.current_id().clone(),
            files,
        };
        tracing::info!(folder = %request.folder, count = request.files.len(), "upload requested");
        self.emit(&BrowserEvent::UploadRequested(request));
    }

    // =========================================================================
    // Observers
    // =========================================================================

    /// Register an observer. Observers run synchronously, in subscription
    /// order, after the state has been replaced.
    pub fn subscribe<F>(&mut self, observer: F) -> SubscriptionId
    where
        F: FnMut(&BrowserEvent) + 'static,
    {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.observers.push((id, Box::new(observer)));
        id
    }

    /// Remove an observer. Returns `false` if it was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(existing, _)| *existing != id);
        self.observers.len() != before
    }

    fn emit(&mut self, event: &BrowserEvent) {
        for (_, observer) in self.observers.iter_mut() {
            observer(event);
        }
    }
}

impl fmt::Debug for DriveBrowser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DriveBrowser")
            .field("location", &self.location)
            .field("view_type", &self.view_type)
            .field("policy", &self.policy)
            .field("observers", &self.observers.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;

    fn create_test_browser() -> DriveBrowser {
        let store = HierarchyStore::sample().expect("bundled dataset should load");
        DriveBrowser::new(Arc::new(store), &BrowserConfig::default())
    }

    /// Subscribe a recorder and return the shared event log.
    fn record(browser: &mut DriveBrowser) -> Rc<RefCell<Vec<BrowserEvent>>> {
        let events = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&events);
        browser.subscribe(move |event| sink.borrow_mut().push(event.clone()));
        events
    }

    fn trail_ids(browser: &DriveBrowser) -> Vec<String> {
        browser
            .breadcrumb_trail()
            .into_iter()
            .map(|c| c.id.to_string())
            .collect()
    }

    fn listing_ids(browser: &DriveBrowser) -> Vec<String> {
        browser
            .list_current_folder()
            .into_iter()
            .map(|entry| entry.id.to_string())
            .collect()
    }

    #[test]
    fn test_initial_state() {
        let browser = create_test_browser();
        assert_eq!(browser.current_folder(), &NodeId::from("root"));
        assert_eq!(
            browser.breadcrumb_trail(),
            vec![Crumb::new("root", "My Drive")]
        );
        assert_eq!(browser.view_type(), ViewType::List);
        assert_eq!(
            listing_ids(&browser),
            ["folder1", "folder2", "file1", "file2", "file3"]
        );
    }

    #[test]
    fn test_navigate_emits_listing() {
        let mut browser = create_test_browser();
        let events = record(&mut browser);

        browser.navigate_to("folder1");

        let events = events.borrow();
        assert_eq!(events.len(), 1);
        match &events[0] {
            BrowserEvent::ListingChanged(listing) => {
                assert_eq!(listing.folder, "folder1");
                let ids: Vec<&str> = listing.entries.iter().map(|e| e.id.as_str()).collect();
                assert_eq!(ids, ["file4", "file5", "folder3"]);
                assert_eq!(
                    listing.trail,
                    vec![
                        Crumb::new("root", "My Drive"),
                        Crumb::new("folder1", "Work Documents"),
                    ]
                );
            }
            other => panic!("unexpected event: {other:?}"),
        }
    }

    #[test]
    fn test_invalid_navigation_is_silent() {
        let mut browser = create_test_browser();
        browser.navigate_to("folder1");
        let before = browser.location().clone();
        let events = record(&mut browser);

        browser.navigate_to("does-not-exist");
        browser.navigate_to("file4");

        assert_eq!(browser.location(), &before);
        assert!(events.borrow().is_empty());
    }

    #[test]
    fn test_navigate_to_current_does_not_emit() {
        let mut browser = create_test_browser();
        let events = record(&mut browser);
        browser.navigate_to("root");
        assert!(events.borrow().is_empty());
    }

    #[test]
    fn test_root_navigation_resets_trail() {
        let mut browser = create_test_browser();
        browser.navigate_to("folder1");
        browser.navigate_to("folder3");
        let state = browser.navigate_to("root");
        assert!(state.is_at_root());
        assert_eq!(trail_ids(&browser), ["root"]);
    }

    #[test]
    fn test_listing_tracks_current_folder() {
        let mut browser = create_test_browser();
        browser.navigate_to("folder2");
        assert_eq!(listing_ids(&browser), ["file6", "file7"]);

        let listing = browser.listing();
        assert_eq!(listing.folder, "folder2");
        assert_eq!(listing.entries, browser.list_current_folder());
    }

    #[test]
    fn test_open_file_emits_metadata() {
        let mut browser = create_test_browser();
        let events = record(&mut browser);

        assert!(browser.open_file("file1"));

        assert_eq!(
            *events.borrow(),
            vec![BrowserEvent::OpenRequested(OpenRequest {
                id: NodeId::from("file1"),
                name: "Budget 2023.xlsx".to_string(),
                size: "245 KB".to_string(),
                modified: "May 12, 2023".to_string(),
                file_type: FileKind::Spreadsheet,
            })]
        );
    }

    #[test]
    fn test_open_folder_or_missing_is_ignored() {
        let mut browser = create_test_browser();
        let events = record(&mut browser);

        assert!(!browser.open_file("folder1"));
        assert!(!browser.open_file("missing"));
        assert!(events.borrow().is_empty());
        assert_eq!(browser.current_folder(), &NodeId::from("root"));
    }

    #[test]
    fn test_activate_dispatches_by_kind() {
        let mut browser = create_test_browser();
        let events = record(&mut browser);

        browser.activate("folder2");
        assert_eq!(trail_ids(&browser), ["root", "folder2"]);

        browser.activate("file7");
        browser.activate("nothing");

        let events = events.borrow();
        assert_eq!(events.len(), 2);
        assert!(matches!(events[0], BrowserEvent::ListingChanged(_)));
        assert!(matches!(&events[1], BrowserEvent::OpenRequested(req) if req.name == "Resume.pdf"));
    }

    #[test]
    fn test_view_type_changes() {
        let mut browser = create_test_browser();
        let events = record(&mut browser);

        browser.set_view_type(ViewType::List);
        browser.set_view_type(ViewType::Grid);
        browser.set_view_type(ViewType::List);

        assert_eq!(browser.view_type(), ViewType::List);
        assert_eq!(
            *events.borrow(),
            vec![
                BrowserEvent::ViewTypeChanged(ViewType::Grid),
                BrowserEvent::ViewTypeChanged(ViewType::List),
            ]
        );
    }

    #[test]
    fn test_view_type_independent_of_location() {
        let mut browser = create_test_browser();
        browser.set_view_type(ViewType::Grid);
        browser.navigate_to("folder2");
        browser.navigate_to("root");
        assert_eq!(browser.view_type(), ViewType::Grid);
    }

    #[test]
    fn test_upload_targets_current_folder() {
        let mut browser = create_test_browser();
        browser.navigate_to("folder2");
        let events = record(&mut browser);

        browser.request_upload(vec!["a.txt".to_string(), "b.png".to_string()]);

        assert_eq!(
            *events.borrow(),
            vec![BrowserEvent::UploadRequested(UploadRequest {
                folder: NodeId::from("folder2"),
                files: vec!["a.txt".to_string(), "b.png".to_string()],
            })]
        );
        // Simulated only: the listing is unchanged
        assert_eq!(listing_ids(&browser), ["file6", "file7"]);
    }

    #[test]
    fn test_unsubscribe_stops_delivery() {
        let mut browser = create_test_browser();
        let first = record(&mut browser);
        let second_events = Rc::new(RefCell::new(0usize));
        let counter = Rc::clone(&second_events);
        let second = browser.subscribe(move |_| *counter.borrow_mut() += 1);

        browser.navigate_to("folder1");
        assert!(browser.unsubscribe(second));
        assert!(!browser.unsubscribe(second));
        browser.navigate_to("folder3");

        assert_eq!(first.borrow().len(), 2);
        assert_eq!(*second_events.borrow(), 1);
    }

    #[test]
    fn test_config_selects_policy_and_view() {
        let store = Arc::new(HierarchyStore::sample().unwrap());
        let config = BrowserConfig {
            view_type: ViewType::Grid,
            trail_policy: TrailPolicy::Permissive,
            ..BrowserConfig::default()
        };
        let mut browser = DriveBrowser::new(store, &config);
        assert_eq!(browser.view_type(), ViewType::Grid);

        // Permissive: folder3 is appended directly under root
        browser.navigate_to("folder3");
        assert_eq!(trail_ids(&browser), ["root", "folder3"]);
    }

    #[test]
    fn test_verified_policy_rebuilds_trail() {
        let mut browser = create_test_browser();
        browser.navigate_to("folder3");
        assert_eq!(trail_ids(&browser), ["root", "folder1", "folder3"]);
    }
}
