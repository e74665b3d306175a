//! # Publications Directory
//!
//! The interactivity controller for an academic publications directory:
//! free-text search, year filtering, per-category sorting and "reveal more"
//! pagination over a fixed set of publication records, exposed to any
//! rendering layer as an ordered view-model per category.
//!
//! ## Architecture
//!
//! The library is organized into several modules:
//!
//! - [`models`]: Core data structures (PublicationRecord, SortKey, ViewEntry)
//! - [`directory`]: The controller state, its input events, and document loading
//! - [`ui`]: Terminal rendering for the `pubdir` binary
//! - [`config`]: Configuration management

pub mod config;
pub mod directory;
pub mod error;
pub mod models;
pub mod ui;

// Re-export commonly used types
pub use directory::{DirectoryEvent, DirectoryState};
pub use error::DirectoryError;
pub use models::{Category, PublicationRecord, SortKey};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
