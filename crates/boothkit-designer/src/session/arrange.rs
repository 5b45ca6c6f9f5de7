//! Alignment, distribution and z-order.

use boothkit_core::{DocumentEvent, EditorEvent};

use crate::model::{Element, ElementId};

use super::transforms::translate_element;
use super::EditorSession;

/// Edge or center to align on. `Start` is left/top, `End` is right/bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlignMode {
    Start,
    Center,
    End,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Axis {
    Horizontal,
    Vertical,
}

fn span(element: &Element, axis: Axis) -> (f64, f64) {
    match axis {
        Axis::Horizontal => (element.x, element.width),
        Axis::Vertical => (element.y, element.height),
    }
}

impl EditorSession {
    /// Align the selection along the x axis.
    pub fn align_elements_horizontally(&mut self, mode: AlignMode) -> bool {
        self.align(Axis::Horizontal, mode)
    }

    /// Align the selection along the y axis.
    pub fn align_elements_vertically(&mut self, mode: AlignMode) -> bool {
        self.align(Axis::Vertical, mode)
    }

    /// Space the selection evenly along the x axis.
    pub fn distribute_elements_horizontally(&mut self) -> bool {
        self.distribute(Axis::Horizontal)
    }

    /// Space the selection evenly along the y axis.
    pub fn distribute_elements_vertically(&mut self) -> bool {
        self.distribute(Axis::Vertical)
    }

    /// Selected elements moved as units: a child whose group is also
    /// selected travels with the group and is left out.
    fn arrange_units(&self) -> Vec<Element> {
        let Some(document) = &self.document else {
            return Vec::new();
        };
        self.selection
            .selected_ids()
            .iter()
            .filter(|id| {
                document
                    .parent_group_of(**id)
                    .is_none_or(|parent| !self.selection.contains(parent))
            })
            .filter_map(|id| document.get(*id))
            .cloned()
            .collect()
    }

    fn align(&mut self, axis: Axis, mode: AlignMode) -> bool {
        let members = self.arrange_units();
        if members.len() < 2 {
            tracing::debug!("Align ignored: needs two or more selected elements");
            return false;
        }

        let min = members
            .iter()
            .map(|e| span(e, axis).0)
            .fold(f64::INFINITY, f64::min);
        let max = members
            .iter()
            .map(|e| {
                let (start, size) = span(e, axis);
                start + size
            })
            .fold(f64::NEG_INFINITY, f64::max);
        let center = (min + max) / 2.0;

        let moves: Vec<(ElementId, f64)> = members
            .iter()
            .filter(|e| !e.locked)
            .map(|e| {
                let (start, size) = span(e, axis);
                let target = match mode {
                    AlignMode::Start => min,
                    AlignMode::Center => center - size / 2.0,
                    AlignMode::End => max - size,
                };
                (e.id, target - start)
            })
            .collect();

        self.checkpoint();
        self.apply_axis_moves(axis, &moves);
        self.checkpoint();
        true
    }

    fn distribute(&mut self, axis: Axis) -> bool {
        let mut members = self.arrange_units();
        if members.len() < 3 {
            tracing::debug!("Distribute ignored: needs three or more selected elements");
            return false;
        }
        members.sort_by(|a, b| span(a, axis).0.total_cmp(&span(b, axis).0));

        let (first_start, first_size) = span(&members[0], axis);
        let (last_start, last_size) = span(&members[members.len() - 1], axis);
        let total: f64 = members.iter().map(|e| span(e, axis).1).sum();
        // May be negative; members then overlap evenly
        let gap = (last_start + last_size - first_start - total) / (members.len() - 1) as f64;

        let mut moves = Vec::new();
        let mut cursor = first_start + first_size + gap;
        for member in &members[1..members.len() - 1] {
            let (start, size) = span(member, axis);
            if !member.locked {
                moves.push((member.id, cursor - start));
            }
            cursor += size + gap;
        }

        self.checkpoint();
        self.apply_axis_moves(axis, &moves);
        self.checkpoint();
        true
    }

    fn apply_axis_moves(&mut self, axis: Axis, moves: &[(ElementId, f64)]) {
        let padding = self.settings.group_padding;
        let Some(document) = self.document.as_mut() else {
            return;
        };
        for (id, delta) in moves {
            let (dx, dy) = match axis {
                Axis::Horizontal => (*delta, 0.0),
                Axis::Vertical => (0.0, *delta),
            };
            translate_element(document, *id, dx, dy, padding);
        }
        self.emit(EditorEvent::Document(DocumentEvent::LayoutChanged));
    }

    /// Move an element to the top of the stack.
    pub fn bring_to_front(&mut self, id: ElementId) -> bool {
        let Some(document) = &self.document else {
            return false;
        };
        let Some(from) = document.index_of(id) else {
            return false;
        };
        let last = document.len() - 1;
        self.reorder_element(from, last)
    }

    /// Move an element to the bottom of the stack.
    pub fn send_to_back(&mut self, id: ElementId) -> bool {
        let Some(from) = self.document.as_ref().and_then(|d| d.index_of(id)) else {
            return false;
        };
        self.reorder_element(from, 0)
    }

    /// Swap an element with the one above it.
    pub fn bring_forward(&mut self, id: ElementId) -> bool {
        let Some(from) = self.document.as_ref().and_then(|d| d.index_of(id)) else {
            return false;
        };
        self.reorder_element(from, from + 1)
    }

    /// Swap an element with the one below it.
    pub fn send_backward(&mut self, id: ElementId) -> bool {
        let Some(from) = self.document.as_ref().and_then(|d| d.index_of(id)) else {
            return false;
        };
        match from.checked_sub(1) {
            Some(to) => self.reorder_element(from, to),
            None => false,
        }
    }

    /// Move the element at index `from` to index `to`.
    ///
    /// Out-of-range indices are ignored.
    pub fn reorder_element(&mut self, from: usize, to: usize) -> bool {
        let Some(document) = self.document.as_mut() else {
            return false;
        };
        if !document.move_element(from, to) {
            return false;
        }
        self.emit(EditorEvent::Document(DocumentEvent::LayoutChanged));
        self.commit();
        true
    }
}
