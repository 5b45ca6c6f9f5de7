//! Group creation and dissolution.

use boothkit_core::{DocumentEvent, EditorEvent};

use crate::model::{Element, ElementId};

use super::EditorSession;

impl EditorSession {
    /// Two or more selected elements, none a group or already grouped.
    pub fn can_group(&self) -> bool {
        let Some(document) = &self.document else {
            return false;
        };
        let ids = self.selection.selected_ids();
        ids.len() >= 2
            && ids.iter().all(|id| {
                document
                    .get(*id)
                    .is_some_and(|e| !e.is_group() && document.parent_group_of(*id).is_none())
            })
    }

    /// Exactly one selected element and it is a group.
    pub fn can_ungroup(&self) -> bool {
        self.selection.len() == 1 && self.primary_element().is_some_and(Element::is_group)
    }

    /// Group the selection.
    ///
    /// The group's box starts as the unpadded union of its children; padding
    /// is applied from the first recomputation on. The new group is
    /// appended on top and selected.
    pub fn group(&mut self) -> Option<ElementId> {
        if !self.can_group() {
            tracing::debug!("Group ignored: needs two or more ungrouped elements");
            return None;
        }
        self.checkpoint();

        let children = self.selection.selected_ids().to_vec();
        let document = self.document.as_mut()?;
        let bounds = document.bounds_of(&children)?;
        let name = format!(
            "Group {}",
            document.elements().iter().filter(|e| e.is_group()).count() + 1
        );
        let group_id = document.add(Element::group(name, children, bounds));

        self.selection.select_only(group_id);
        self.emit(EditorEvent::Document(DocumentEvent::ElementAdded {
            id: group_id,
        }));
        self.emit_selection();
        self.checkpoint();
        Some(group_id)
    }

    /// Dissolve the selected group and select its former children.
    pub fn ungroup(&mut self) -> bool {
        if !self.can_ungroup() {
            tracing::debug!("Ungroup ignored: selection is not a single group");
            return false;
        }
        let Some(group_id) = self.selection.selected_id() else {
            return false;
        };
        self.checkpoint();

        let Some(document) = self.document.as_mut() else {
            return false;
        };
        let Some(group) = document.remove(group_id) else {
            return false;
        };
        let children: Vec<ElementId> = group
            .group_children()
            .unwrap_or_default()
            .iter()
            .copied()
            .filter(|id| document.contains(*id))
            .collect();

        self.selection.set_many(children);
        self.emit(EditorEvent::Document(DocumentEvent::ElementRemoved {
            id: group_id,
        }));
        self.emit_selection();
        self.checkpoint();
        true
    }

    /// The group listing `id` as a child.
    pub fn parent_group_of(&self, id: ElementId) -> Option<ElementId> {
        self.document.as_ref()?.parent_group_of(id)
    }
}
