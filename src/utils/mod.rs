//! Utility modules for the browser, formatting and logging.
//!
//! Provides:
//! - [`dom`] - Window access, alerts and file input helpers
//! - [`format`] - Listing column and notification text
//! - [`logging`] - Tracing subscriber setup with a console layer

pub mod dom;
pub mod format;
pub mod logging;
