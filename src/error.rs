//! Error types for directory loading.
//!
//! The controller itself never fails; only reading and parsing a directory
//! document can, and those errors surface here.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading a directory document.
#[derive(Debug, Error)]
pub enum DirectoryError {
    /// The document file could not be read
    #[error("failed to read directory document {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The document extension is not a supported format
    #[error("unsupported document format '{0}' (expected .toml or .json)")]
    UnsupportedFormat(String),

    /// The document content did not parse
    #[error("failed to parse directory document: {0}")]
    Parse(String),

    /// A publication names a category the directory does not have
    #[error("unknown category '{category}' for publication '{title}'")]
    UnknownCategory { title: String, category: String },

    /// A publication has no title
    #[error("publication at index {0} has an empty title")]
    EmptyTitle(usize),
}
