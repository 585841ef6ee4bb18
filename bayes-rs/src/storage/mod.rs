//! Document storage module
//!
//! Provides access to on-disk corpora:
//! - [`directory`]: directory listing and display ordering

pub mod directory;

pub use directory::{display_order, list_documents};
