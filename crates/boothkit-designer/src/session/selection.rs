//! Selection operations.

use crate::model::ElementId;

use super::EditorSession;

impl EditorSession {
    /// Select an element.
    ///
    /// `None` clears the selection. Without `extend` the element replaces
    /// the selection; with it, the element's membership is toggled.
    /// Unknown IDs are ignored.
    pub fn select(&mut self, id: Option<ElementId>, extend: bool) {
        let Some(id) = id else {
            self.clear_selection();
            return;
        };
        if self.element(id).is_none() {
            tracing::debug!("Select ignored: element {} not found", id);
            return;
        }
        if extend {
            self.selection.toggle(id);
        } else {
            self.selection.select_only(id);
        }
        self.emit_selection();
    }

    pub fn clear_selection(&mut self) {
        if self.selection.is_empty() {
            return;
        }
        self.selection.clear();
        self.emit_selection();
    }

    /// Select every element; the back-most becomes primary.
    pub fn select_all(&mut self) {
        let Some(document) = &self.document else {
            return;
        };
        let ids: Vec<ElementId> = document.elements().iter().map(|e| e.id).collect();
        self.selection.set_many(ids);
        self.emit_selection();
    }

    /// Replace the selection; the first resolvable ID becomes primary.
    pub fn select_many(&mut self, ids: &[ElementId]) {
        let Some(document) = &self.document else {
            return;
        };
        let resolved: Vec<ElementId> = ids
            .iter()
            .copied()
            .filter(|id| document.contains(*id))
            .collect();
        self.selection.set_many(resolved);
        self.emit_selection();
    }

    pub fn has_multiple_elements_selected(&self) -> bool {
        self.selection.len() > 1
    }

    pub fn selected_ids(&self) -> Vec<ElementId> {
        self.selection.selected_ids().to_vec()
    }

    /// Front-most visible element containing (x, y).
    pub fn element_at(&self, x: f64, y: f64) -> Option<ElementId> {
        self.document
            .as_ref()?
            .elements()
            .iter()
            .rev()
            .find(|e| e.visible && e.contains_point(x, y))
            .map(|e| e.id)
    }

    /// Click selection: select whatever is under the point, or clear.
    pub fn select_at(&mut self, x: f64, y: f64, extend: bool) -> Option<ElementId> {
        let hit = self.element_at(x, y);
        match hit {
            Some(id) => self.select(Some(id), extend),
            None if !extend => self.clear_selection(),
            None => {}
        }
        hit
    }
}
