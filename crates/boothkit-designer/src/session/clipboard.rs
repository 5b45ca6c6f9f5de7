//! Single-slot copy and paste.

use boothkit_core::{DocumentEvent, EditorEvent};
use std::collections::HashMap;
use uuid::Uuid;

use crate::model::{Element, ElementId, ElementKind};

use super::{ClipboardEntry, EditorSession};

impl EditorSession {
    /// Copy an element. The previous clipboard content is replaced.
    ///
    /// A group is copied together with its children.
    pub fn copy_element(&mut self, id: ElementId) -> bool {
        let Some(document) = &self.document else {
            return false;
        };
        let Some(element) = document.get(id) else {
            tracing::debug!("Copy ignored: element {} not found", id);
            return false;
        };
        let children = element
            .group_children()
            .unwrap_or_default()
            .iter()
            .filter_map(|child| document.get(*child))
            .cloned()
            .collect();
        self.clipboard = Some(ClipboardEntry {
            element: element.clone(),
            children,
        });
        true
    }

    /// Copy the primary selected element.
    pub fn copy_selected(&mut self) -> bool {
        match self.selection.selected_id() {
            Some(id) => self.copy_element(id),
            None => false,
        }
    }

    pub fn can_paste(&self) -> bool {
        self.document.is_some() && self.clipboard.is_some()
    }

    /// Paste the clipboard as a new element, offset from the original.
    ///
    /// The copy gets a fresh ID; cameras are relabeled after the current
    /// camera count. A pasted group gets fresh copies of its children. The
    /// pasted element becomes the selection.
    pub fn paste(&mut self) -> Option<ElementId> {
        let entry = self.clipboard.clone()?;
        let offset = self.settings.paste_offset;
        let document = self.document.as_mut()?;

        let prepare_copy = |element: &mut Element, cameras: usize| {
            element.id = Uuid::new_v4();
            element.translate(offset, offset);
            if let ElementKind::Camera(camera) = &mut element.kind {
                camera.label = format!("Camera {}", cameras + 1);
            }
        };

        let mut added = Vec::new();
        let mut id_map = HashMap::new();
        for child in &entry.children {
            let mut copy = child.clone();
            prepare_copy(&mut copy, document.camera_count());
            let new_id = document.add(copy);
            id_map.insert(child.id, new_id);
            added.push(new_id);
        }

        let mut element = entry.element;
        prepare_copy(&mut element, document.camera_count());
        if let ElementKind::Group(group) = &mut element.kind {
            group.children = group
                .children
                .iter()
                .filter_map(|old| id_map.get(old).copied())
                .collect();
        }
        let new_id = document.add(element);
        added.push(new_id);

        for id in added {
            self.emit(EditorEvent::Document(DocumentEvent::ElementAdded { id }));
        }
        self.selection.select_only(new_id);
        self.emit_selection();
        self.commit();
        Some(new_id)
    }
}
