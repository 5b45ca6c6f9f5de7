//! Move, resize and rotate, plus the gesture brackets that defer their
//! checkpoints.

use boothkit_core::constants::GROUP_SCALE_TOLERANCE;

use crate::geometry::{aspect_resize, snap_to_grid};
use crate::layout::Layout;
use crate::model::{ElementId, ElementKind};

use super::{EditorSession, Gesture};

/// Translate an element; a group carries its children along, a child
/// refreshes its parent's box.
pub(crate) fn translate_element(
    document: &mut Layout,
    id: ElementId,
    dx: f64,
    dy: f64,
    padding: f64,
) {
    let children = match document.get_mut(id) {
        Some(element) => {
            element.translate(dx, dy);
            element.group_children().map(<[ElementId]>::to_vec)
        }
        None => return,
    };

    match children {
        Some(children) => {
            for child in children {
                if let Some(child) = document.get_mut(child) {
                    child.translate(dx, dy);
                }
            }
        }
        None => {
            if let Some(parent) = document.parent_group_of(id) {
                document.recompute_group_bounds(parent, padding);
            }
        }
    }
}

impl EditorSession {
    /// Move an element so its top-left corner lands on (x, y).
    pub fn update_element_position(&mut self, id: ElementId, x: f64, y: f64) -> bool {
        let snap = self.settings.snap_to_grid;
        let grid = self.settings.grid_size;
        let padding = self.settings.group_padding;

        if !x.is_finite() || !y.is_finite() {
            tracing::debug!("Move ignored: non-finite position ({}, {})", x, y);
            return false;
        }
        let Some(document) = self.document.as_mut() else {
            return false;
        };
        let Some(element) = document.get(id) else {
            tracing::debug!("Move ignored: element {} not found", id);
            return false;
        };
        if element.locked {
            tracing::debug!("Move ignored: element {} is locked", id);
            return false;
        }

        let (x, y) = if snap {
            (snap_to_grid(x, grid), snap_to_grid(y, grid))
        } else {
            (x, y)
        };
        let (dx, dy) = (x - element.x, y - element.y);
        if dx == 0.0 && dy == 0.0 {
            return false;
        }

        translate_element(document, id, dx, dy, padding);
        self.emit_changed(id);
        self.commit();
        true
    }

    /// Move an element by a delta.
    pub fn move_element_by(&mut self, id: ElementId, dx: f64, dy: f64) -> bool {
        let Some((x, y)) = self.element(id).map(|e| (e.x, e.y)) else {
            return false;
        };
        self.update_element_position(id, x + dx, y + dy)
    }

    /// Resize an element.
    ///
    /// Snaps to the grid when enabled, enforces the minimum size, and keeps
    /// the aspect ratio of locked images from whichever dimension changed.
    /// A group scales its children about its center.
    pub fn update_element_size(&mut self, id: ElementId, width: f64, height: f64) -> bool {
        let snap = self.settings.snap_to_grid;
        let grid = self.settings.grid_size;
        let min = self.settings.min_element_size;
        let padding = self.settings.group_padding;

        if !width.is_finite() || !height.is_finite() {
            tracing::debug!("Resize ignored: non-finite size {}x{}", width, height);
            return false;
        }
        let Some(document) = self.document.as_mut() else {
            return false;
        };
        let Some(element) = document.get(id) else {
            tracing::debug!("Resize ignored: element {} not found", id);
            return false;
        };
        if element.locked {
            tracing::debug!("Resize ignored: element {} is locked", id);
            return false;
        }

        let (mut w, mut h) = if snap {
            (snap_to_grid(width, grid), snap_to_grid(height, grid))
        } else {
            (width, height)
        };
        w = w.max(min);
        h = h.max(min);
        if let ElementKind::Image(image) = &element.kind {
            if image.aspect_locked {
                (w, h) = aspect_resize(element.width, element.height, w, h);
                w = w.max(min);
                h = h.max(min);
            }
        }
        if w == element.width && h == element.height {
            return false;
        }

        let old = element.bounds();
        let children = element.group_children().map(<[ElementId]>::to_vec);

        match children {
            Some(children) => {
                let sx = w / old.width();
                let sy = h / old.height();
                let scale_changed = (sx - 1.0).abs() > GROUP_SCALE_TOLERANCE
                    || (sy - 1.0).abs() > GROUP_SCALE_TOLERANCE;
                if !scale_changed || !sx.is_finite() || !sy.is_finite() {
                    tracing::debug!("Group resize ignored: scale {}x{} leaves children as they are", sx, sy);
                    return false;
                }
                let (cx, cy) = old.center();
                for child in &children {
                    if let Some(child) = document.get_mut(*child) {
                        child.x = cx + (child.x - cx) * sx;
                        child.y = cy + (child.y - cy) * sy;
                        child.width = (child.width * sx).max(min);
                        child.height = (child.height * sy).max(min);
                    }
                }
                if let Some(group) = document.get_mut(id) {
                    group.width = w;
                    group.height = h;
                }
                document.recompute_group_bounds(id, padding);
            }
            None => {
                if let Some(element) = document.get_mut(id) {
                    element.width = w;
                    element.height = h;
                }
                if let Some(parent) = document.parent_group_of(id) {
                    document.recompute_group_bounds(parent, padding);
                }
            }
        }

        self.emit_changed(id);
        self.commit();
        true
    }

    /// Set rotation in degrees.
    ///
    /// Checkpoints on every call unless a rotate gesture is active.
    pub fn rotate_element(&mut self, id: ElementId, degrees: f64) -> bool {
        if !degrees.is_finite() {
            tracing::debug!("Rotate ignored: non-finite angle {}", degrees);
            return false;
        }
        let Some(document) = self.document.as_mut() else {
            return false;
        };
        let Some(element) = document.get_mut(id) else {
            tracing::debug!("Rotate ignored: element {} not found", id);
            return false;
        };
        if element.locked {
            tracing::debug!("Rotate ignored: element {} is locked", id);
            return false;
        }
        element.rotation = degrees;

        self.emit_changed(id);
        self.commit();
        true
    }

    pub fn begin_drag(&mut self) {
        self.begin_gesture(Gesture::Drag);
    }

    pub fn end_drag(&mut self) {
        self.end_gesture(Gesture::Drag);
    }

    pub fn begin_resize(&mut self) {
        self.begin_gesture(Gesture::Resize);
    }

    pub fn end_resize(&mut self) {
        self.end_gesture(Gesture::Resize);
    }

    pub fn begin_rotate(&mut self) {
        self.begin_gesture(Gesture::Rotate);
    }

    pub fn end_rotate(&mut self) {
        self.end_gesture(Gesture::Rotate);
    }

    fn begin_gesture(&mut self, gesture: Gesture) {
        // Make sure the pre-gesture state is the undo target
        self.checkpoint();
        self.gesture = Some(gesture);
    }

    fn end_gesture(&mut self, gesture: Gesture) {
        if self.gesture != Some(gesture) {
            tracing::debug!("End of {:?} ignored: no such gesture in progress", gesture);
            return;
        }
        self.gesture = None;
        self.checkpoint();
    }
}
