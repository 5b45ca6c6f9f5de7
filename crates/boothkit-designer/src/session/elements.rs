//! Adding and deleting elements.

use boothkit_core::{DocumentEvent, EditorEvent};
use std::collections::HashSet;
use std::path::PathBuf;

use crate::model::{Element, ElementId, ElementKind};

use super::EditorSession;

impl EditorSession {
    /// Append an element on top, select it and checkpoint.
    pub fn add_element(&mut self, element: Element) -> Option<ElementId> {
        let document = self.document.as_mut()?;
        let id = document.add(element);
        self.selection.select_only(id);
        self.emit(EditorEvent::Document(DocumentEvent::ElementAdded { id }));
        self.emit_selection();
        self.commit();
        Some(id)
    }

    /// Add an image centered on the canvas at the placeholder size.
    ///
    /// The real size arrives later through
    /// [`apply_image_size`](Self::apply_image_size).
    pub fn add_image(&mut self, path: impl Into<PathBuf>) -> Option<ElementId> {
        let mut element = Element::image(path, 0.0, 0.0);
        self.center_on_canvas(&mut element)?;
        self.add_element(element)
    }

    /// Add a text box centered on the canvas.
    pub fn add_text(&mut self, content: &str) -> Option<ElementId> {
        let mut element = Element::text(content, 0.0, 0.0);
        self.center_on_canvas(&mut element)?;
        self.add_element(element)
    }

    /// Add a camera slot labeled after the current camera count.
    pub fn add_camera(&mut self) -> Option<ElementId> {
        let count = self.document.as_ref()?.camera_count();
        let mut element = Element::camera(format!("Camera {}", count + 1), 0.0, 0.0);
        self.center_on_canvas(&mut element)?;
        self.add_element(element)
    }

    fn center_on_canvas(&self, element: &mut Element) -> Option<()> {
        let document = self.document.as_ref()?;
        element.x = (document.width - element.width) / 2.0;
        element.y = (document.height - element.height) / 2.0;
        Some(())
    }

    /// Delete an element.
    ///
    /// Deleting a group deletes its children too. The ID is scrubbed from
    /// any group listing it, and a group left without children is removed.
    pub fn delete_element(&mut self, id: ElementId) -> bool {
        self.delete_elements(&[id]) > 0
    }

    /// Delete every selected element. Returns how many were removed.
    pub fn delete_selected(&mut self) -> usize {
        let ids = self.selection.selected_ids().to_vec();
        self.delete_elements(&ids)
    }

    fn delete_elements(&mut self, ids: &[ElementId]) -> usize {
        let padding = self.settings.group_padding;
        let Some(document) = self.document.as_mut() else {
            return 0;
        };

        let mut doomed: HashSet<ElementId> = HashSet::new();
        for id in ids {
            let Some(element) = document.get(*id) else {
                tracing::debug!("Delete ignored: element {} not found", id);
                continue;
            };
            doomed.insert(*id);
            if let Some(children) = element.group_children() {
                doomed.extend(children.iter().copied());
            }
        }
        if doomed.is_empty() {
            return 0;
        }

        let mut removed = Vec::new();
        let mut touched: HashSet<ElementId> = HashSet::new();
        loop {
            for id in &doomed {
                if document.remove(*id).is_some() {
                    removed.push(*id);
                }
            }

            // Scrub memberships; groups left empty go too
            let mut emptied = HashSet::new();
            for element in &mut document.elements {
                if let ElementKind::Group(group) = &mut element.kind {
                    let before = group.children.len();
                    group.children.retain(|c| !doomed.contains(c));
                    if group.children.len() != before {
                        touched.insert(element.id);
                    }
                    if group.children.is_empty() {
                        emptied.insert(element.id);
                    }
                }
            }
            if emptied.is_empty() {
                break;
            }
            doomed = emptied;
        }
        for group in &touched {
            document.recompute_group_bounds(*group, padding);
        }

        let document = &*document;
        self.selection.retain(|id| document.contains(id));
        for id in &removed {
            self.emit(EditorEvent::Document(DocumentEvent::ElementRemoved { id: *id }));
        }
        self.emit_selection();
        self.commit();
        tracing::debug!("Deleted {} element(s)", removed.len());
        removed.len()
    }
}
