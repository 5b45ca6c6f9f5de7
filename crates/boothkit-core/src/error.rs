//! Error handling for BoothKit
//!
//! Provides the error taxonomy shared by every layer of the editor:
//! - Layout errors (document lookups, preconditions, resources, export)
//! - The umbrella [`Error`] used by application-level code
//!
//! Most editing operations never surface `NotFound` or `InvalidState` to the
//! caller: they log and no-op. The variants still exist so lower layers can
//! describe why a call was ignored.
//!
//! All error types use `thiserror` for ergonomic error handling.

use std::path::PathBuf;
use thiserror::Error;
use uuid::Uuid;

/// Layout error type
///
/// Represents failures of the document model, the asset collaborators and
/// the export pipeline.
#[derive(Error, Debug)]
pub enum LayoutError {
    /// Element or group ID did not resolve
    #[error("Element {id} not found")]
    NotFound {
        /// The unresolved element ID.
        id: Uuid,
    },

    /// Operation preconditions were not met
    #[error("Invalid state: {0}")]
    InvalidState(String),

    /// A referenced file does not exist
    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),

    /// Image bytes could not be decoded
    #[error("Failed to decode image: {0}")]
    Decode(String),

    /// A font family could not be resolved
    #[error("Font unavailable: {family}")]
    FontUnavailable {
        /// The requested family name.
        family: String,
    },

    /// A serialized document is missing fields or has an unknown tag
    #[error("Malformed document: {0}")]
    MalformedDocument(String),

    /// Rasterizing or encoding the output failed
    #[error("Export failed: {0}")]
    Export(String),

    /// Standard I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl LayoutError {
    /// Create a malformed-document error from any message
    pub fn malformed(msg: impl Into<String>) -> Self {
        LayoutError::MalformedDocument(msg.into())
    }

    /// Create an invalid-state error from any message
    pub fn invalid_state(msg: impl Into<String>) -> Self {
        LayoutError::InvalidState(msg.into())
    }

    /// Errors that callers treat as a silent no-op
    pub fn is_benign(&self) -> bool {
        matches!(
            self,
            LayoutError::NotFound { .. } | LayoutError::InvalidState(_)
        )
    }
}

/// Main error type for BoothKit
#[derive(Error, Debug)]
pub enum Error {
    /// Layout error
    #[error(transparent)]
    Layout(#[from] LayoutError),

    /// Standard I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create an error from a string message
    pub fn other(msg: impl Into<String>) -> Self {
        Error::Other(msg.into())
    }

    /// Check if this is a layout error
    pub fn is_layout_error(&self) -> bool {
        matches!(self, Error::Layout(_))
    }
}

/// Result type using Error
pub type Result<T> = std::result::Result<T, Error>;
