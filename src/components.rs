//! Reusable HTML components for the outline display
//!
//! Maud component functions for the result panel, its toolbar, status
//! alerts and the standalone page wrapper used when an outline is written
//! to disk.

pub mod alert;
pub mod layout;
pub mod result;
