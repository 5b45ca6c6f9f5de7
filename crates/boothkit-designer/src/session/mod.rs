//! Editing session.
//!
//! [`EditorSession`] owns the live document, the selection, the undo
//! history, the clipboard and transient gesture state. All mutation goes
//! through it, one operation at a time; the operations are split across
//! the submodules by concern.
//!
//! Lookup misses (`NotFound`) and unmet preconditions (`InvalidState`) are
//! logged and ignored: operations report whether they changed anything
//! instead of returning an error. Use the predicates (`can_undo`,
//! `can_group`, ...) to decide what to offer the user.

use boothkit_core::{
    DocumentEvent, EditorEvent, EventBus, HistoryEvent, LayoutError, SelectionEvent,
};
use boothkit_settings::EditorSettings;
use std::sync::Arc;

use crate::history::HistoryManager;
use crate::layout::Layout;
use crate::model::{ColorValue, Element, ElementId};
use crate::selection_manager::SelectionManager;
use crate::serialization;

mod arrange;
mod assets;
mod clipboard;
mod commands;
mod elements;
mod grouping;
mod properties;
mod selection;
mod transforms;

pub use arrange::AlignMode;
pub use commands::{EditorCommand, Key, KeyCombo};

/// Continuous interaction in progress. Updates made while one is active do
/// not checkpoint; the checkpoint is taken when it ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gesture {
    Drag,
    Resize,
    Rotate,
}

/// What the clipboard holds: one element, plus the children of a group.
#[derive(Debug, Clone)]
pub(crate) struct ClipboardEntry {
    pub(crate) element: Element,
    pub(crate) children: Vec<Element>,
}

pub struct EditorSession {
    document: Option<Layout>,
    selection: SelectionManager,
    history: HistoryManager,
    clipboard: Option<ClipboardEntry>,
    gesture: Option<Gesture>,
    settings: EditorSettings,
    events: Arc<EventBus>,
}

impl EditorSession {
    /// Create a session with no document loaded.
    pub fn new(settings: EditorSettings) -> Self {
        Self::with_event_bus(settings, Arc::new(EventBus::new()))
    }

    /// Create a session publishing on an existing bus.
    pub fn with_event_bus(settings: EditorSettings, events: Arc<EventBus>) -> Self {
        Self {
            document: None,
            selection: SelectionManager::new(),
            history: HistoryManager::new(settings.history_capacity),
            clipboard: None,
            gesture: None,
            settings,
            events,
        }
    }

    /// Replace the document, reset history and checkpoint the initial state.
    pub fn open(&mut self, layout: Layout) {
        let element_count = layout.len();
        self.document = Some(layout);
        self.selection.clear();
        self.gesture = None;
        self.history.reset();
        self.emit(EditorEvent::History(HistoryEvent::Reset));
        self.emit(EditorEvent::Document(DocumentEvent::Loaded { element_count }));
        self.emit_selection();
        self.checkpoint();
        tracing::info!("Opened layout with {} elements", element_count);
    }

    /// Open a blank document with the configured background.
    pub fn new_document(&mut self, width: f64, height: f64) {
        let background = self
            .settings
            .default_background
            .parse()
            .unwrap_or(ColorValue::WHITE);
        let min = self.settings.min_element_size;
        self.open(Layout::new(width.max(min), height.max(min), background));
    }

    /// Open a blank document at the configured default canvas size.
    pub fn new_default_document(&mut self) {
        self.new_document(
            self.settings.default_canvas_width,
            self.settings.default_canvas_height,
        );
    }

    /// Close the document. History and selection are dropped with it.
    pub fn close(&mut self) -> Option<Layout> {
        self.selection.clear();
        self.gesture = None;
        self.history.reset();
        self.document.take()
    }

    pub fn document(&self) -> Option<&Layout> {
        self.document.as_ref()
    }

    pub fn settings(&self) -> &EditorSettings {
        &self.settings
    }

    pub fn settings_mut(&mut self) -> &mut EditorSettings {
        &mut self.settings
    }

    pub fn selection(&self) -> &SelectionManager {
        &self.selection
    }

    pub fn history(&self) -> &HistoryManager {
        &self.history
    }

    pub fn events(&self) -> &Arc<EventBus> {
        &self.events
    }

    pub fn gesture(&self) -> Option<Gesture> {
        self.gesture
    }

    /// Look up an element of the live document.
    pub fn element(&self, id: ElementId) -> Option<&Element> {
        self.document.as_ref()?.get(id)
    }

    /// The primary selected element.
    pub fn primary_element(&self) -> Option<&Element> {
        self.element(self.selection.selected_id()?)
    }

    /// Capture the current document in history.
    ///
    /// No-op without a document, during undo/redo replay, or when nothing
    /// changed since the last checkpoint.
    pub fn checkpoint(&mut self) -> bool {
        let Some(document) = &self.document else {
            return false;
        };
        if self.history.is_replaying() {
            tracing::debug!("Checkpoint ignored during replay");
            return false;
        }
        let snapshot = match serialization::layout_to_string(document) {
            Ok(snapshot) => snapshot,
            Err(e) => {
                tracing::warn!("Failed to snapshot layout: {}", e);
                return false;
            }
        };
        if !self.history.record(snapshot) {
            return false;
        }
        tracing::debug!(
            "Checkpoint {} of {}",
            self.history.cursor() + 1,
            self.history.len()
        );
        self.emit(EditorEvent::History(HistoryEvent::Checkpoint {
            len: self.history.len(),
            cursor: self.history.cursor(),
        }));
        true
    }

    pub fn can_undo(&self) -> bool {
        self.document.is_some() && self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.document.is_some() && self.history.can_redo()
    }

    /// Restore the previous snapshot.
    ///
    /// A snapshot that fails to decode leaves the document and cursor
    /// untouched and returns false.
    pub fn undo(&mut self) -> bool {
        if self.document.is_none() {
            return false;
        }
        let Some(snapshot) = self.history.previous().map(str::to_owned) else {
            return false;
        };
        if let Err(e) = self.restore(&snapshot) {
            tracing::error!("Undo aborted: {}", e);
            return false;
        }
        self.history.step_back();
        tracing::debug!("Undo to {}", self.history.cursor());
        self.emit(EditorEvent::History(HistoryEvent::Undone {
            cursor: self.history.cursor(),
        }));
        true
    }

    /// Restore the next snapshot.
    pub fn redo(&mut self) -> bool {
        if self.document.is_none() {
            return false;
        }
        let Some(snapshot) = self.history.next().map(str::to_owned) else {
            return false;
        };
        if let Err(e) = self.restore(&snapshot) {
            tracing::error!("Redo aborted: {}", e);
            return false;
        }
        self.history.step_forward();
        tracing::debug!("Redo to {}", self.history.cursor());
        self.emit(EditorEvent::History(HistoryEvent::Redone {
            cursor: self.history.cursor(),
        }));
        true
    }

    fn restore(&mut self, snapshot: &str) -> Result<(), LayoutError> {
        self.history.begin_replay();
        let decoded = serialization::layout_from_str(snapshot);
        let result = decoded.map(|layout| {
            self.document = Some(layout);
            self.gesture = None;
            self.resolve_selection();
            self.emit(EditorEvent::Document(DocumentEvent::Restored));
        });
        self.history.end_replay();
        result
    }

    /// Drop selected IDs that no longer resolve.
    fn resolve_selection(&mut self) {
        let Some(document) = &self.document else {
            self.selection.clear();
            return;
        };
        self.selection.retain(|id| document.contains(id));
        self.emit_selection();
    }

    /// Checkpoint unless a continuous gesture is in progress.
    pub(crate) fn commit(&mut self) {
        if self.gesture.is_none() {
            self.checkpoint();
        }
    }

    pub(crate) fn document_mut(&mut self) -> Option<&mut Layout> {
        self.document.as_mut()
    }

    pub(crate) fn emit(&self, event: EditorEvent) {
        // No subscribers is the normal headless case
        let _ = self.events.publish(event);
    }

    pub(crate) fn emit_selection(&self) {
        self.emit(EditorEvent::Selection(SelectionEvent::Changed {
            selected: self.selection.selected_ids().to_vec(),
            primary: self.selection.selected_id(),
        }));
    }

    pub(crate) fn emit_changed(&self, id: ElementId) {
        self.emit(EditorEvent::Document(DocumentEvent::ElementChanged { id }));
    }
}

impl Default for EditorSession {
    fn default() -> Self {
        Self::new(EditorSettings::default())
    }
}

impl std::fmt::Debug for EditorSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EditorSession")
            .field("elements", &self.document.as_ref().map(Layout::len))
            .field("selection", &self.selection)
            .field("history_len", &self.history.len())
            .field("history_cursor", &self.history.cursor())
            .field("gesture", &self.gesture)
            .finish()
    }
}
