//! Editor-wide constants.
//!
//! These are the defaults; most of them can be overridden through
//! `boothkit-settings`.

/// Grid spacing used by snap-to-grid, in canvas units.
pub const GRID_SIZE: f64 = 10.0;

/// Smallest width or height an element may have.
pub const MIN_ELEMENT_SIZE: f64 = 10.0;

/// Padding applied around the union of a group's visible children.
pub const GROUP_PADDING: f64 = 10.0;

/// Maximum number of snapshots kept by the undo history.
pub const HISTORY_CAPACITY: usize = 50;

/// Offset applied to pasted elements on both axes.
pub const PASTE_OFFSET: f64 = 20.0;

/// Relative scale change below which a group resize leaves children alone.
pub const GROUP_SCALE_TOLERANCE: f64 = 0.01;

/// Color sentinel meaning "draw nothing".
pub const TRANSPARENT: &str = "transparent";

/// Default canvas size (4x6 inch print at 300 dpi).
pub const DEFAULT_CANVAS_WIDTH: f64 = 1200.0;
pub const DEFAULT_CANVAS_HEIGHT: f64 = 1800.0;
