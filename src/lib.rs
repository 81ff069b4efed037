//! Drive-style file browser over a fixed, in-memory hierarchy.
//!
//! The [`core`] module holds the read-only [`HierarchyStore`](core::HierarchyStore)
//! and the [`DriveBrowser`](core::DriveBrowser) navigation controller; the
//! [`app`] and [`components`] modules render it with Leptos.

pub mod app;
pub mod components;
pub mod config;
pub mod core;
pub mod models;
pub mod utils;
