//! The layout document: canvas size, background and the z-ordered element
//! list (index 0 is the back).

use uuid::Uuid;

use crate::geometry::{union_bounds, Bounds};
use crate::model::{ColorValue, Element, ElementId, ElementKind};

#[derive(Debug, Clone, PartialEq)]
pub struct Layout {
    pub width: f64,
    pub height: f64,
    pub background: ColorValue,
    pub(crate) elements: Vec<Element>,
}

impl Layout {
    pub fn new(width: f64, height: f64, background: ColorValue) -> Self {
        Self {
            width,
            height,
            background,
            elements: Vec::new(),
        }
    }

    /// Elements back to front.
    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Append an element at the front. A colliding ID is replaced by a
    /// fresh one; the ID actually stored is returned.
    pub fn add(&mut self, mut element: Element) -> ElementId {
        if self.contains(element.id) {
            element.id = Uuid::new_v4();
        }
        let id = element.id;
        self.elements.push(element);
        id
    }

    pub fn remove(&mut self, id: ElementId) -> Option<Element> {
        let index = self.index_of(id)?;
        Some(self.elements.remove(index))
    }

    pub fn get(&self, id: ElementId) -> Option<&Element> {
        self.elements.iter().find(|e| e.id == id)
    }

    pub fn get_mut(&mut self, id: ElementId) -> Option<&mut Element> {
        self.elements.iter_mut().find(|e| e.id == id)
    }

    pub fn contains(&self, id: ElementId) -> bool {
        self.index_of(id).is_some()
    }

    pub fn index_of(&self, id: ElementId) -> Option<usize> {
        self.elements.iter().position(|e| e.id == id)
    }

    /// The group listing `id` as a child. First match wins.
    pub fn parent_group_of(&self, id: ElementId) -> Option<ElementId> {
        self.elements
            .iter()
            .find(|e| e.group_children().is_some_and(|c| c.contains(&id)))
            .map(|e| e.id)
    }

    pub fn camera_count(&self) -> usize {
        self.elements.iter().filter(|e| e.is_camera()).count()
    }

    /// Move the element at `from` to `to`. Out-of-range indices are ignored.
    pub fn move_element(&mut self, from: usize, to: usize) -> bool {
        let len = self.elements.len();
        if from >= len || to >= len || from == to {
            return false;
        }
        let element = self.elements.remove(from);
        self.elements.insert(to, element);
        true
    }

    /// Re-derive a group's box as the padded union of its visible children.
    ///
    /// Child IDs that no longer resolve are dropped from the group first.
    /// With no visible children the box is left as is.
    pub fn recompute_group_bounds(&mut self, group_id: ElementId, padding: f64) -> bool {
        let Some(children) = self.get(group_id).and_then(|g| g.group_children()) else {
            return false;
        };
        let children = children.to_vec();

        let live: Vec<ElementId> = children
            .iter()
            .copied()
            .filter(|id| self.contains(*id))
            .collect();
        if live.len() != children.len() {
            tracing::debug!(
                "Group {} dropped {} dangling child id(s)",
                group_id,
                children.len() - live.len()
            );
        }

        let union = union_bounds(
            live.iter()
                .filter_map(|id| self.get(*id))
                .filter(|child| child.visible && !child.is_group())
                .map(Element::bounds),
        );

        let Some(group) = self.get_mut(group_id) else {
            return false;
        };
        if let ElementKind::Group(g) = &mut group.kind {
            g.children = live;
        }
        if let Some(bounds) = union.map(|b| b.padded(padding)) {
            group.x = bounds.min_x;
            group.y = bounds.min_y;
            group.width = bounds.width();
            group.height = bounds.height();
        }
        true
    }

    /// Union of the given elements' boxes.
    pub fn bounds_of(&self, ids: &[ElementId]) -> Option<Bounds> {
        union_bounds(ids.iter().filter_map(|id| self.get(*id)).map(Element::bounds))
    }
}
