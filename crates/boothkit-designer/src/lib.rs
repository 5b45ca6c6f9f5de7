//! # BoothKit Designer
//!
//! Layout editing engine for photo-booth print templates. A layout is a
//! fixed-size canvas holding an ordered stack of elements: images, text
//! boxes, camera slots (where the booth inserts the live photo) and groups.
//!
//! ## Core Components
//!
//! - **Model**: [`Layout`] and [`Element`] with its four variants
//! - **Session**: [`EditorSession`], the single mutation point, covering
//!   selection, grouping, transforms, arrangement, clipboard and
//!   properties
//! - **History**: snapshot undo/redo with bounded capacity
//! - **Serialization**: the JSON document format, also used for snapshots
//! - **Rendering**: deterministic PNG export with tiny-skia
//! - **Assets**: font resolution and image decoding behind collaborator
//!   traits, with async variants on the tokio blocking pool
//!
//! ## Architecture
//!
//! ```text
//! EditorSession
//!   ├── Layout (ordered elements, back to front)
//!   ├── SelectionManager (ordered IDs, primary)
//!   ├── HistoryManager (serialized snapshots)
//!   └── EventBus (document / selection / history / export events)
//!
//! Renderer
//!   ├── FontCache -> FontResolver (fontdb + rusttype)
//!   └── ImageDecoder (image crate)
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use boothkit_designer::{EditorSession, RenderOptions, Renderer};
//! use boothkit_settings::{EditorSettings, FontSettings};
//!
//! let mut session = EditorSession::new(EditorSettings::default());
//! session.new_document(1200.0, 1800.0);
//! session.add_text("Smile!");
//! session.add_camera();
//!
//! let renderer = Renderer::from_settings(&FontSettings::default());
//! if let Some(layout) = session.document() {
//!     renderer
//!         .export_png(layout, std::path::Path::new("strip.png"), &RenderOptions::default())
//!         .unwrap();
//! }
//! ```

pub mod font_manager;
pub mod geometry;
pub mod history;
pub mod image_loader;
pub mod layout;
pub mod model;
pub mod renderer;
pub mod selection_manager;
pub mod serialization;
pub mod session;

pub use font_manager::{FontCache, FontKey, FontResolver, SystemFontResolver};
pub use geometry::Bounds;
pub use history::HistoryManager;
pub use image_loader::{
    load_image, resolve_image_size, DecodedImage, ImageDecoder, ImageSizeResolution,
    RasterDecoder,
};
pub use layout::Layout;
pub use model::{
    CameraElement, ColorValue, Element, ElementId, ElementKind, GroupElement, ImageElement,
    TextAlignment, TextElement,
};
pub use renderer::{RenderOptions, Renderer};
pub use selection_manager::SelectionManager;
pub use serialization::{LayoutData, LayoutFile, LayoutMetadata};
pub use session::{AlignMode, EditorCommand, EditorSession, Gesture, Key, KeyCombo};
