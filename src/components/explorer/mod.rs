//! File explorer UI components.
//!
//! Components:
//! - [`Explorer`] - Main explorer view
//! - [`Header`] - Search box, view toggle and upload button
//! - [`PathBar`] - Breadcrumb trail
//! - [`FileList`] - List or grid of the current folder's entries
//! - [`UploadDialog`] - Simulated upload form

#[allow(clippy::module_inception)]
mod explorer;
mod file_list;
mod header;
mod pathbar;
mod upload;

pub use explorer::Explorer;
pub use file_list::FileList;
pub use header::Header;
pub use pathbar::PathBar;
pub use upload::UploadDialog;
