//! Event type definitions for the event bus.
//!
//! Events are emitted by the editing session after a mutation has been
//! committed, so observers always see a consistent document.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use uuid::Uuid;

/// Root event enum for all editor events
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum EditorEvent {
    /// Document content changed
    Document(DocumentEvent),
    /// Selection set or primary changed
    Selection(SelectionEvent),
    /// Undo history moved
    History(HistoryEvent),
    /// Export progress
    Export(ExportEvent),
}

impl EditorEvent {
    /// Get the category of this event
    pub fn category(&self) -> EventCategory {
        match self {
            EditorEvent::Document(_) => EventCategory::Document,
            EditorEvent::Selection(_) => EventCategory::Selection,
            EditorEvent::History(_) => EventCategory::History,
            EditorEvent::Export(_) => EventCategory::Export,
        }
    }

    /// Get a short description of this event for logging
    pub fn description(&self) -> String {
        match self {
            EditorEvent::Document(e) => e.description(),
            EditorEvent::Selection(e) => e.description(),
            EditorEvent::History(e) => e.description(),
            EditorEvent::Export(e) => e.description(),
        }
    }
}

/// Event category for filtering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventCategory {
    /// Document content events.
    Document,
    /// Selection events.
    Selection,
    /// Undo/redo events.
    History,
    /// Export events.
    Export,
}

impl std::fmt::Display for EventCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EventCategory::Document => write!(f, "Document"),
            EventCategory::Selection => write!(f, "Selection"),
            EventCategory::History => write!(f, "History"),
            EventCategory::Export => write!(f, "Export"),
        }
    }
}

/// Document-related events
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DocumentEvent {
    /// A document was opened or created.
    Loaded {
        /// Number of elements in the new document.
        element_count: usize,
    },
    /// An element was appended.
    ElementAdded {
        /// The new element.
        id: Uuid,
    },
    /// An element was removed.
    ElementRemoved {
        /// The removed element.
        id: Uuid,
    },
    /// An element's geometry or properties changed.
    ElementChanged {
        /// The changed element.
        id: Uuid,
    },
    /// Several elements or layout-level properties changed at once.
    LayoutChanged,
    /// The document was replaced by an undo/redo snapshot.
    Restored,
}

impl DocumentEvent {
    fn description(&self) -> String {
        match self {
            DocumentEvent::Loaded { element_count } => {
                format!("Document loaded ({} elements)", element_count)
            }
            DocumentEvent::ElementAdded { id } => format!("Element added: {}", id),
            DocumentEvent::ElementRemoved { id } => format!("Element removed: {}", id),
            DocumentEvent::ElementChanged { id } => format!("Element changed: {}", id),
            DocumentEvent::LayoutChanged => "Layout changed".to_string(),
            DocumentEvent::Restored => "Document restored from history".to_string(),
        }
    }
}

/// Selection events
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SelectionEvent {
    /// The selection changed.
    Changed {
        /// All selected IDs.
        selected: Vec<Uuid>,
        /// The primary selection.
        primary: Option<Uuid>,
    },
}

impl SelectionEvent {
    fn description(&self) -> String {
        match self {
            SelectionEvent::Changed { selected, primary } => match primary {
                Some(id) => format!("Selection: {} element(s), primary {}", selected.len(), id),
                None => "Selection cleared".to_string(),
            },
        }
    }
}

/// History events
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum HistoryEvent {
    /// A snapshot was committed.
    Checkpoint {
        /// Number of snapshots after the commit.
        len: usize,
        /// Cursor after the commit.
        cursor: usize,
    },
    /// Undo moved the cursor back.
    Undone {
        /// Cursor after undo.
        cursor: usize,
    },
    /// Redo moved the cursor forward.
    Redone {
        /// Cursor after redo.
        cursor: usize,
    },
    /// History was reset for a new document.
    Reset,
}

impl HistoryEvent {
    fn description(&self) -> String {
        match self {
            HistoryEvent::Checkpoint { len, cursor } => {
                format!("Checkpoint {} of {}", cursor + 1, len)
            }
            HistoryEvent::Undone { cursor } => format!("Undo to {}", cursor),
            HistoryEvent::Redone { cursor } => format!("Redo to {}", cursor),
            HistoryEvent::Reset => "History reset".to_string(),
        }
    }
}

/// Export events
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ExportEvent {
    /// Rendering began.
    Started {
        /// Output path.
        path: PathBuf,
    },
    /// The PNG was written.
    Finished {
        /// Output path.
        path: PathBuf,
    },
    /// Export was aborted; no file was left behind.
    Failed {
        /// Output path.
        path: PathBuf,
        /// Error message.
        reason: String,
    },
}

impl ExportEvent {
    fn description(&self) -> String {
        match self {
            ExportEvent::Started { path } => format!("Export started: {}", path.display()),
            ExportEvent::Finished { path } => format!("Export finished: {}", path.display()),
            ExportEvent::Failed { path, reason } => {
                format!("Export to {} failed: {}", path.display(), reason)
            }
        }
    }
}
