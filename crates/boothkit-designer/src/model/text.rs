use std::fmt;
use std::str::FromStr;

use super::ColorValue;

/// Placement of text inside its box.
///
/// The nine combinations of {top, center, bottom} x {left, center, right}.
/// The middle one is spelled plain `center`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextAlignment {
    TopLeft,
    TopCenter,
    TopRight,
    CenterLeft,
    #[default]
    Center,
    CenterRight,
    BottomLeft,
    BottomCenter,
    BottomRight,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HorizontalAnchor {
    Left,
    Center,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerticalAnchor {
    Top,
    Center,
    Bottom,
}

impl TextAlignment {
    pub const ALL: [TextAlignment; 9] = [
        TextAlignment::TopLeft,
        TextAlignment::TopCenter,
        TextAlignment::TopRight,
        TextAlignment::CenterLeft,
        TextAlignment::Center,
        TextAlignment::CenterRight,
        TextAlignment::BottomLeft,
        TextAlignment::BottomCenter,
        TextAlignment::BottomRight,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TextAlignment::TopLeft => "top-left",
            TextAlignment::TopCenter => "top-center",
            TextAlignment::TopRight => "top-right",
            TextAlignment::CenterLeft => "center-left",
            TextAlignment::Center => "center",
            TextAlignment::CenterRight => "center-right",
            TextAlignment::BottomLeft => "bottom-left",
            TextAlignment::BottomCenter => "bottom-center",
            TextAlignment::BottomRight => "bottom-right",
        }
    }

    /// Horizontal anchor, read from the `left`/`right` token of the tag.
    pub fn horizontal(&self) -> HorizontalAnchor {
        let tag = self.as_str();
        if tag.contains("left") {
            HorizontalAnchor::Left
        } else if tag.contains("right") {
            HorizontalAnchor::Right
        } else {
            HorizontalAnchor::Center
        }
    }

    /// Vertical anchor, read from the `top`/`bottom` token of the tag.
    pub fn vertical(&self) -> VerticalAnchor {
        let tag = self.as_str();
        if tag.contains("top") {
            VerticalAnchor::Top
        } else if tag.contains("bottom") {
            VerticalAnchor::Bottom
        } else {
            VerticalAnchor::Center
        }
    }
}

impl FromStr for TextAlignment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TextAlignment::ALL
            .into_iter()
            .find(|a| a.as_str() == s)
            .ok_or_else(|| format!("unknown text alignment '{}'", s))
    }
}

impl fmt::Display for TextAlignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A text label.
#[derive(Debug, Clone, PartialEq)]
pub struct TextElement {
    pub content: String,
    pub font_family: String,
    /// Family must come from the remote font collaborator rather than the
    /// system font database.
    pub remote_font: bool,
    pub font_size: f64,
    pub color: ColorValue,
    pub background: ColorValue,
    pub bold: bool,
    pub italic: bool,
    pub alignment: TextAlignment,
}

impl TextElement {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            font_family: "Sans".to_string(),
            remote_font: false,
            font_size: 32.0,
            color: ColorValue::BLACK,
            background: ColorValue::Transparent,
            bold: false,
            italic: false,
            alignment: TextAlignment::Center,
        }
    }
}
