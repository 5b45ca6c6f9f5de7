//! Property setters and the majority toggles.

use boothkit_core::{DocumentEvent, EditorEvent};
use std::path::PathBuf;

use crate::model::{
    CameraElement, ColorValue, ElementId, ElementKind, GroupElement, ImageElement,
    TextAlignment, TextElement,
};

use super::EditorSession;

impl EditorSession {
    /// Apply `update` to an element's payload when `select` matches its
    /// variant. Wrong variant or unknown ID is a no-op.
    fn update_kind<T, S, F>(&mut self, id: ElementId, what: &str, select: S, update: F) -> bool
    where
        S: FnOnce(&mut ElementKind) -> Option<&mut T>,
        F: FnOnce(&mut T),
    {
        let padding = self.settings.group_padding;
        let Some(document) = self.document.as_mut() else {
            return false;
        };
        let Some(element) = document.get_mut(id) else {
            tracing::debug!("Set {} ignored: element {} not found", what, id);
            return false;
        };
        let Some(payload) = select(&mut element.kind) else {
            tracing::debug!("Set {} ignored: element {} has the wrong type", what, id);
            return false;
        };
        update(payload);
        if element.is_group() {
            document.recompute_group_bounds(id, padding);
        }
        self.emit_changed(id);
        self.commit();
        true
    }

    fn update_text<F: FnOnce(&mut TextElement)>(&mut self, id: ElementId, what: &str, f: F) -> bool {
        self.update_kind(
            id,
            what,
            |kind| match kind {
                ElementKind::Text(text) => Some(text),
                _ => None,
            },
            f,
        )
    }

    fn update_image<F: FnOnce(&mut ImageElement)>(&mut self, id: ElementId, what: &str, f: F) -> bool {
        self.update_kind(
            id,
            what,
            |kind| match kind {
                ElementKind::Image(image) => Some(image),
                _ => None,
            },
            f,
        )
    }

    pub fn set_text_content(&mut self, id: ElementId, content: &str) -> bool {
        let content = content.to_string();
        self.update_text(id, "text content", |t| t.content = content)
    }

    pub fn set_font_family(&mut self, id: ElementId, family: &str, remote: bool) -> bool {
        let family = family.to_string();
        self.update_text(id, "font family", |t| {
            t.font_family = family;
            t.remote_font = remote;
        })
    }

    pub fn set_font_size(&mut self, id: ElementId, size: f64) -> bool {
        if !(size > 0.0) {
            tracing::debug!("Set font size ignored: {} is not positive", size);
            return false;
        }
        self.update_text(id, "font size", |t| t.font_size = size)
    }

    /// Set the text color from a CSS color string.
    pub fn set_text_color(&mut self, id: ElementId, color: &str) -> bool {
        let Ok(color) = color.parse::<ColorValue>() else {
            tracing::debug!("Set text color ignored: cannot parse '{}'", color);
            return false;
        };
        self.update_text(id, "text color", |t| t.color = color)
    }

    /// Set the text background; `transparent` removes it.
    pub fn set_text_background(&mut self, id: ElementId, color: &str) -> bool {
        let Ok(color) = color.parse::<ColorValue>() else {
            tracing::debug!("Set text background ignored: cannot parse '{}'", color);
            return false;
        };
        self.update_text(id, "text background", |t| t.background = color)
    }

    pub fn set_text_style(&mut self, id: ElementId, bold: bool, italic: bool) -> bool {
        self.update_text(id, "text style", |t| {
            t.bold = bold;
            t.italic = italic;
        })
    }

    pub fn set_text_alignment(&mut self, id: ElementId, alignment: TextAlignment) -> bool {
        self.update_text(id, "text alignment", |t| t.alignment = alignment)
    }

    pub fn set_image_path(&mut self, id: ElementId, path: impl Into<PathBuf>) -> bool {
        let path = path.into();
        self.update_image(id, "image path", |i| i.path = path)
    }

    /// Set image opacity, clamped to [0, 1].
    pub fn set_image_opacity(&mut self, id: ElementId, opacity: f64) -> bool {
        if opacity.is_nan() {
            return false;
        }
        let opacity = opacity.clamp(0.0, 1.0);
        self.update_image(id, "image opacity", |i| i.opacity = opacity)
    }

    pub fn set_image_aspect_lock(&mut self, id: ElementId, locked: bool) -> bool {
        self.update_image(id, "aspect lock", |i| i.aspect_locked = locked)
    }

    pub fn set_camera_label(&mut self, id: ElementId, label: &str) -> bool {
        let label = label.to_string();
        self.update_kind(
            id,
            "camera label",
            |kind| match kind {
                ElementKind::Camera(camera) => Some(camera),
                _ => None,
            },
            |c: &mut CameraElement| c.label = label,
        )
    }

    pub fn set_group_name(&mut self, id: ElementId, name: &str) -> bool {
        let name = name.to_string();
        self.update_kind(
            id,
            "group name",
            |kind| match kind {
                ElementKind::Group(group) => Some(group),
                _ => None,
            },
            |g: &mut GroupElement| g.name = name,
        )
    }

    /// Show or hide one element.
    pub fn set_element_visibility(&mut self, id: ElementId, visible: bool) -> bool {
        let padding = self.settings.group_padding;
        let Some(document) = self.document.as_mut() else {
            return false;
        };
        let Some(element) = document.get_mut(id) else {
            return false;
        };
        if element.visible == visible {
            return false;
        }
        element.visible = visible;
        if let Some(parent) = document.parent_group_of(id) {
            document.recompute_group_bounds(parent, padding);
        }
        self.emit_changed(id);
        self.commit();
        true
    }

    /// Lock or unlock one element.
    pub fn set_element_locked(&mut self, id: ElementId, locked: bool) -> bool {
        let Some(element) = self.document.as_mut().and_then(|d| d.get_mut(id)) else {
            return false;
        };
        if element.locked == locked {
            return false;
        }
        element.locked = locked;
        self.emit_changed(id);
        self.commit();
        true
    }

    /// Toggle visibility of every element by majority vote.
    ///
    /// If more than half are visible all become hidden, otherwise all
    /// become visible. With mixed states repeated calls need not alternate.
    pub fn toggle_all_elements_visibility(&mut self) -> bool {
        let padding = self.settings.group_padding;
        let Some(document) = self.document.as_mut() else {
            return false;
        };
        if document.is_empty() {
            return false;
        }
        let visible = document.elements().iter().filter(|e| e.visible).count();
        let target = visible * 2 <= document.len();
        let mut flipped = Vec::new();
        for element in &mut document.elements {
            if element.visible != target {
                element.visible = target;
                flipped.push(element.id);
            }
        }
        // Only groups with a child that changed visibility need a new box
        let mut parents: Vec<ElementId> = flipped
            .iter()
            .filter_map(|id| document.parent_group_of(*id))
            .collect();
        parents.dedup();
        for parent in parents {
            document.recompute_group_bounds(parent, padding);
        }

        self.emit(EditorEvent::Document(DocumentEvent::LayoutChanged));
        self.commit();
        true
    }

    /// Toggle the lock of every element by majority vote.
    pub fn toggle_all_elements_lock(&mut self) -> bool {
        let Some(document) = self.document.as_mut() else {
            return false;
        };
        if document.is_empty() {
            return false;
        }
        let locked = document.elements().iter().filter(|e| e.locked).count();
        let target = locked * 2 <= document.len();
        for element in &mut document.elements {
            element.locked = target;
        }

        self.emit(EditorEvent::Document(DocumentEvent::LayoutChanged));
        self.commit();
        true
    }

    /// Set the layout background from a CSS color string or `transparent`.
    pub fn set_background(&mut self, color: &str) -> bool {
        let Ok(color) = color.parse::<ColorValue>() else {
            tracing::debug!("Set background ignored: cannot parse '{}'", color);
            return false;
        };
        let Some(document) = self.document.as_mut() else {
            return false;
        };
        document.background = color;
        self.emit(EditorEvent::Document(DocumentEvent::LayoutChanged));
        self.commit();
        true
    }

    /// Resize the canvas; elements are left where they are.
    pub fn set_canvas_size(&mut self, width: f64, height: f64) -> bool {
        let min = self.settings.min_element_size;
        let Some(document) = self.document.as_mut() else {
            return false;
        };
        document.width = width.max(min);
        document.height = height.max(min);
        self.emit(EditorEvent::Document(DocumentEvent::LayoutChanged));
        self.commit();
        true
    }
}
