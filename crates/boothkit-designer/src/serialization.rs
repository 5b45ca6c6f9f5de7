//! Serialization and deserialization for layout documents.
//!
//! The document format is a JSON object tree. Every element carries a
//! `type` discriminant (`image`, `text`, `camera`, `group`) and the fields
//! of that variant; decoding rebuilds the variant from the tag and rejects
//! unknown tags or missing fields as [`LayoutError::MalformedDocument`].
//!
//! Layout files wrap the document with a format version and metadata.

use anyhow::{Context, Result};
use boothkit_core::LayoutError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::{Path, PathBuf};

use crate::layout::Layout;
use crate::model::{
    CameraElement, ColorValue, Element, ElementId, ElementKind, GroupElement, ImageElement,
    TextAlignment, TextElement,
};

/// Layout file format version
const FILE_FORMAT_VERSION: &str = "1.0";

/// Serialized layout
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutData {
    pub width: f64,
    pub height: f64,
    pub background: String,
    pub elements: Vec<ElementData>,
}

/// Serialized element
///
/// Common geometry is always present; variant fields are optional at the
/// serde level and checked against the `type` tag on decode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElementData {
    pub id: ElementId,
    #[serde(rename = "type")]
    pub element_type: String,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub rotation: f64,
    pub visible: bool,
    pub locked: bool,

    // image
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aspect_locked: Option<bool>,

    // text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remote_font: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_size: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bold: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub italic: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alignment: Option<String>,

    // camera
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,

    // group
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<ElementId>>,
}

fn required<T>(value: Option<T>, field: &str, tag: &str, id: ElementId) -> Result<T, LayoutError> {
    value.ok_or_else(|| {
        LayoutError::malformed(format!(
            "{} element {} is missing field `{}`",
            tag, id, field
        ))
    })
}

fn parse_color(value: &str, id: ElementId) -> Result<ColorValue, LayoutError> {
    value
        .parse()
        .map_err(|e| LayoutError::malformed(format!("element {}: {}", id, e)))
}

impl ElementData {
    /// Convert from an element
    pub fn from_element(element: &Element) -> Self {
        let mut data = ElementData {
            id: element.id,
            element_type: element.kind.type_tag().to_string(),
            x: element.x,
            y: element.y,
            width: element.width,
            height: element.height,
            rotation: element.rotation,
            visible: element.visible,
            locked: element.locked,
            path: None,
            opacity: None,
            aspect_locked: None,
            content: None,
            font_family: None,
            remote_font: None,
            font_size: None,
            color: None,
            background: None,
            bold: None,
            italic: None,
            alignment: None,
            label: None,
            name: None,
            children: None,
        };

        match &element.kind {
            ElementKind::Image(image) => {
                data.path = Some(image.path.clone());
                data.opacity = Some(image.opacity);
                data.aspect_locked = Some(image.aspect_locked);
            }
            ElementKind::Text(text) => {
                data.content = Some(text.content.clone());
                data.font_family = Some(text.font_family.clone());
                data.remote_font = Some(text.remote_font);
                data.font_size = Some(text.font_size);
                data.color = Some(text.color.to_string());
                data.background = Some(text.background.to_string());
                data.bold = Some(text.bold);
                data.italic = Some(text.italic);
                data.alignment = Some(text.alignment.to_string());
            }
            ElementKind::Camera(camera) => {
                data.label = Some(camera.label.clone());
            }
            ElementKind::Group(group) => {
                data.name = Some(group.name.clone());
                data.children = Some(group.children.clone());
            }
        }

        data
    }

    /// Convert to an element
    pub fn to_element(&self) -> Result<Element, LayoutError> {
        let tag = self.element_type.as_str();
        let id = self.id;

        let kind = match tag {
            "image" => ElementKind::Image(ImageElement {
                path: required(self.path.clone(), "path", tag, id)?,
                opacity: required(self.opacity, "opacity", tag, id)?,
                aspect_locked: required(self.aspect_locked, "aspect_locked", tag, id)?,
            }),
            "text" => {
                let alignment = required(self.alignment.as_deref(), "alignment", tag, id)?
                    .parse::<TextAlignment>()
                    .map_err(|e| LayoutError::malformed(format!("element {}: {}", id, e)))?;
                ElementKind::Text(TextElement {
                    content: required(self.content.clone(), "content", tag, id)?,
                    font_family: required(self.font_family.clone(), "font_family", tag, id)?,
                    remote_font: required(self.remote_font, "remote_font", tag, id)?,
                    font_size: required(self.font_size, "font_size", tag, id)?,
                    color: parse_color(required(self.color.as_deref(), "color", tag, id)?, id)?,
                    background: parse_color(
                        required(self.background.as_deref(), "background", tag, id)?,
                        id,
                    )?,
                    bold: required(self.bold, "bold", tag, id)?,
                    italic: required(self.italic, "italic", tag, id)?,
                    alignment,
                })
            }
            "camera" => ElementKind::Camera(CameraElement {
                label: required(self.label.clone(), "label", tag, id)?,
            }),
            "group" => ElementKind::Group(GroupElement {
                name: required(self.name.clone(), "name", tag, id)?,
                children: required(self.children.clone(), "children", tag, id)?,
            }),
            other => {
                return Err(LayoutError::malformed(format!(
                    "unknown element type '{}'",
                    other
                )))
            }
        };

        Ok(Element {
            id,
            x: self.x,
            y: self.y,
            width: self.width,
            height: self.height,
            rotation: self.rotation,
            visible: self.visible,
            locked: self.locked,
            kind,
        })
    }
}

impl LayoutData {
    /// Convert from a layout
    pub fn from_layout(layout: &Layout) -> Self {
        Self {
            width: layout.width,
            height: layout.height,
            background: layout.background.to_string(),
            elements: layout.elements().iter().map(ElementData::from_element).collect(),
        }
    }

    /// Convert to a layout, checking element ID uniqueness
    pub fn to_layout(&self) -> Result<Layout, LayoutError> {
        let background = self
            .background
            .parse()
            .map_err(|e| LayoutError::malformed(format!("layout background: {}", e)))?;
        let mut layout = Layout::new(self.width, self.height, background);

        let mut seen = HashSet::new();
        for data in &self.elements {
            if !seen.insert(data.id) {
                return Err(LayoutError::malformed(format!(
                    "duplicate element id {}",
                    data.id
                )));
            }
            layout.elements.push(data.to_element()?);
        }

        Ok(layout)
    }
}

/// Encode a layout as a JSON value.
pub fn layout_to_value(layout: &Layout) -> Result<serde_json::Value, LayoutError> {
    serde_json::to_value(LayoutData::from_layout(layout))
        .map_err(|e| LayoutError::malformed(e.to_string()))
}

/// Decode a layout from a JSON value.
pub fn layout_from_value(value: serde_json::Value) -> Result<Layout, LayoutError> {
    let data: LayoutData =
        serde_json::from_value(value).map_err(|e| LayoutError::malformed(e.to_string()))?;
    data.to_layout()
}

/// Encode a layout as compact JSON text, the form kept in undo history.
pub fn layout_to_string(layout: &Layout) -> Result<String, LayoutError> {
    serde_json::to_string(&LayoutData::from_layout(layout))
        .map_err(|e| LayoutError::malformed(e.to_string()))
}

/// Decode a layout from JSON text.
pub fn layout_from_str(json: &str) -> Result<Layout, LayoutError> {
    let data: LayoutData =
        serde_json::from_str(json).map_err(|e| LayoutError::malformed(e.to_string()))?;
    data.to_layout()
}

/// Layout file metadata
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutMetadata {
    pub name: String,
    pub created: DateTime<Utc>,
    pub modified: DateTime<Utc>,
}

/// Complete layout file structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutFile {
    pub version: String,
    pub metadata: LayoutMetadata,
    pub layout: LayoutData,
}

impl LayoutFile {
    /// Create a new layout file for `layout`
    pub fn new(name: impl Into<String>, layout: &Layout) -> Self {
        let now = Utc::now();
        Self {
            version: FILE_FORMAT_VERSION.to_string(),
            metadata: LayoutMetadata {
                name: name.into(),
                created: now,
                modified: now,
            },
            layout: LayoutData::from_layout(layout),
        }
    }

    /// Replace the stored layout and bump the modification time
    pub fn update(&mut self, layout: &Layout) {
        self.layout = LayoutData::from_layout(layout);
        self.metadata.modified = Utc::now();
    }

    /// Decode the stored layout
    pub fn to_layout(&self) -> Result<Layout, LayoutError> {
        self.layout.to_layout()
    }

    /// Save layout to file
    pub fn save_to_file(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let json =
            serde_json::to_string_pretty(self).context("Failed to serialize layout to JSON")?;

        std::fs::write(path, json)
            .with_context(|| format!("Failed to write layout to {}", path.display()))?;

        tracing::info!("Saved layout to {}", path.display());
        Ok(())
    }

    /// Load layout from file
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read layout from {}", path.display()))?;

        let file: LayoutFile = serde_json::from_str(&content)
            .map_err(|e| LayoutError::malformed(e.to_string()))
            .with_context(|| format!("Failed to parse layout {}", path.display()))?;

        if file.version != FILE_FORMAT_VERSION {
            tracing::warn!(
                "Layout {} has format version {}, expected {}",
                path.display(),
                file.version,
                FILE_FORMAT_VERSION
            );
        }

        // Surface variant errors at load time rather than on first use
        file.to_layout()
            .with_context(|| format!("Invalid layout in {}", path.display()))?;

        Ok(file)
    }
}
