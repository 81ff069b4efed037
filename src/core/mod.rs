//! Core business logic for the drive view.
//!
//! This module provides:
//! - [`HierarchyStore`] read-only folder/file hierarchy
//! - [`transition`] pure location transitions with [`TrailPolicy`]
//! - [`DriveBrowser`] navigation controller and [`BrowserEvent`] notifications

mod browser;
pub mod error;
mod navigation;
mod store;

pub use browser::{BrowserEvent, DriveBrowser, OpenRequest, SubscriptionId, UploadRequest};
pub use error::{ConfigError, NavError, StoreError};
pub use navigation::{transition, TrailPolicy};
pub use store::HierarchyStore;
