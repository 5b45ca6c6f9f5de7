//! Geometry helpers shared by the editing engine and the renderer.
//!
//! Everything here is pure: grid snapping, aspect-preserving resize and
//! axis-aligned bounding boxes.

/// Axis-aligned bounding box in layout coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl Bounds {
    pub fn new(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
        Self {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }

    /// Box of an element at (x, y) with the given size.
    pub fn from_rect(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self::new(x, y, x + width, y + height)
    }

    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    pub fn center(&self) -> (f64, f64) {
        (
            (self.min_x + self.max_x) / 2.0,
            (self.min_y + self.max_y) / 2.0,
        )
    }

    /// Smallest box containing both.
    pub fn union(&self, other: &Bounds) -> Bounds {
        Bounds::new(
            self.min_x.min(other.min_x),
            self.min_y.min(other.min_y),
            self.max_x.max(other.max_x),
            self.max_y.max(other.max_y),
        )
    }

    /// Grow the box by `padding` on every side.
    pub fn padded(&self, padding: f64) -> Bounds {
        Bounds::new(
            self.min_x - padding,
            self.min_y - padding,
            self.max_x + padding,
            self.max_y + padding,
        )
    }

    /// Inclusive point containment.
    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.min_x && x <= self.max_x && y >= self.min_y && y <= self.max_y
    }
}

/// Union of any number of boxes; `None` for an empty input.
pub fn union_bounds<I>(boxes: I) -> Option<Bounds>
where
    I: IntoIterator<Item = Bounds>,
{
    boxes.into_iter().reduce(|acc, b| acc.union(&b))
}

/// Round `value` to the nearest multiple of `grid`.
pub fn snap_to_grid(value: f64, grid: f64) -> f64 {
    if grid <= 0.0 {
        return value;
    }
    (value / grid).round() * grid
}

/// Resolve a resize request for an aspect-locked element.
///
/// The dimension that differs from the current one is taken as the user's
/// intent and the other is derived from `current_w / current_h`. When both
/// changed, width wins.
pub fn aspect_resize(
    current_w: f64,
    current_h: f64,
    requested_w: f64,
    requested_h: f64,
) -> (f64, f64) {
    if current_w <= 0.0 || current_h <= 0.0 {
        return (requested_w, requested_h);
    }
    let ratio = current_w / current_h;
    let width_changed = (requested_w - current_w).abs() > f64::EPSILON;
    let height_changed = (requested_h - current_h).abs() > f64::EPSILON;

    if width_changed {
        (requested_w, requested_w / ratio)
    } else if height_changed {
        (requested_h * ratio, requested_h)
    } else {
        (requested_w, requested_h)
    }
}

/// Rotate (x, y) about (cx, cy) by `degrees`.
pub fn rotate_point(x: f64, y: f64, cx: f64, cy: f64, degrees: f64) -> (f64, f64) {
    let (sin, cos) = degrees.to_radians().sin_cos();
    let dx = x - cx;
    let dy = y - cy;
    (cx + dx * cos - dy * sin, cy + dx * sin + dy * cos)
}
