//! Layout element model.
//!
//! An [`Element`] carries the geometry every variant shares; the
//! variant-specific payload lives in [`ElementKind`], a closed set matched
//! exhaustively by the editing and rendering code.

use std::path::PathBuf;
use uuid::Uuid;

use crate::geometry::Bounds;

mod color;
mod text;

pub use color::ColorValue;
pub use text::{HorizontalAnchor, TextAlignment, TextElement, VerticalAnchor};

/// Stable element identity. Generated once, never reused.
pub type ElementId = Uuid;

/// Default size of a freshly added image, before its real size is known.
pub const DEFAULT_IMAGE_SIZE: (f64, f64) = (200.0, 200.0);
/// Default size of a freshly added text box.
pub const DEFAULT_TEXT_SIZE: (f64, f64) = (300.0, 80.0);
/// Default size of a freshly added camera slot.
pub const DEFAULT_CAMERA_SIZE: (f64, f64) = (400.0, 300.0);

/// An image placeholder backed by a file on disk.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageElement {
    pub path: PathBuf,
    /// Multiplicative opacity in [0, 1].
    pub opacity: f64,
    pub aspect_locked: bool,
}

impl ImageElement {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            opacity: 1.0,
            aspect_locked: true,
        }
    }
}

/// A camera capture slot.
#[derive(Debug, Clone, PartialEq)]
pub struct CameraElement {
    pub label: String,
}

/// A non-owning aggregation of other elements.
///
/// Children stay top-level entries of the layout at absolute coordinates;
/// the group only lists their IDs.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupElement {
    pub name: String,
    pub children: Vec<ElementId>,
}

/// Variant payload of an element.
#[derive(Debug, Clone, PartialEq)]
pub enum ElementKind {
    Image(ImageElement),
    Text(TextElement),
    Camera(CameraElement),
    Group(GroupElement),
}

impl ElementKind {
    /// Discriminant used by the document format.
    pub fn type_tag(&self) -> &'static str {
        match self {
            ElementKind::Image(_) => "image",
            ElementKind::Text(_) => "text",
            ElementKind::Camera(_) => "camera",
            ElementKind::Group(_) => "group",
        }
    }
}

/// One placeable unit of a layout.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    pub id: ElementId,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    /// Degrees, unconstrained.
    pub rotation: f64,
    pub visible: bool,
    pub locked: bool,
    pub kind: ElementKind,
}

impl Element {
    /// Create an element with a fresh ID.
    pub fn new(kind: ElementKind, x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            x,
            y,
            width,
            height,
            rotation: 0.0,
            visible: true,
            locked: false,
            kind,
        }
    }

    pub fn image(path: impl Into<PathBuf>, x: f64, y: f64) -> Self {
        let (w, h) = DEFAULT_IMAGE_SIZE;
        Self::new(ElementKind::Image(ImageElement::new(path)), x, y, w, h)
    }

    pub fn text(content: impl Into<String>, x: f64, y: f64) -> Self {
        let (w, h) = DEFAULT_TEXT_SIZE;
        Self::new(ElementKind::Text(TextElement::new(content)), x, y, w, h)
    }

    pub fn camera(label: impl Into<String>, x: f64, y: f64) -> Self {
        let (w, h) = DEFAULT_CAMERA_SIZE;
        Self::new(
            ElementKind::Camera(CameraElement {
                label: label.into(),
            }),
            x,
            y,
            w,
            h,
        )
    }

    pub fn group(name: impl Into<String>, children: Vec<ElementId>, bounds: Bounds) -> Self {
        Self::new(
            ElementKind::Group(GroupElement {
                name: name.into(),
                children,
            }),
            bounds.min_x,
            bounds.min_y,
            bounds.width(),
            bounds.height(),
        )
    }

    /// Unrotated box.
    pub fn bounds(&self) -> Bounds {
        Bounds::from_rect(self.x, self.y, self.width, self.height)
    }

    pub fn center(&self) -> (f64, f64) {
        (self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    pub fn is_group(&self) -> bool {
        matches!(self.kind, ElementKind::Group(_))
    }

    pub fn is_camera(&self) -> bool {
        matches!(self.kind, ElementKind::Camera(_))
    }

    /// Child IDs if this is a group.
    pub fn group_children(&self) -> Option<&[ElementId]> {
        match &self.kind {
            ElementKind::Group(group) => Some(&group.children),
            _ => None,
        }
    }

    /// Hit test in layout coordinates, honoring rotation.
    pub fn contains_point(&self, x: f64, y: f64) -> bool {
        let (cx, cy) = self.center();
        let (lx, ly) = if self.rotation == 0.0 {
            (x, y)
        } else {
            crate::geometry::rotate_point(x, y, cx, cy, -self.rotation)
        };
        self.bounds().contains(lx, ly)
    }

    pub(crate) fn translate(&mut self, dx: f64, dy: f64) {
        self.x += dx;
        self.y += dy;
    }
}
