use boothkit_core::constants::TRANSPARENT;
use std::fmt;
use std::str::FromStr;

/// A CSS-style color, or the "transparent" sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorValue {
    Transparent,
    Rgba([u8; 4]),
}

impl ColorValue {
    pub const BLACK: ColorValue = ColorValue::Rgba([0, 0, 0, 255]);
    pub const WHITE: ColorValue = ColorValue::Rgba([255, 255, 255, 255]);

    pub fn is_transparent(&self) -> bool {
        match self {
            ColorValue::Transparent => true,
            ColorValue::Rgba([_, _, _, a]) => *a == 0,
        }
    }

    /// RGBA channels; transparent maps to all zeros.
    pub fn to_rgba8(&self) -> [u8; 4] {
        match self {
            ColorValue::Transparent => [0, 0, 0, 0],
            ColorValue::Rgba(rgba) => *rgba,
        }
    }
}

impl FromStr for ColorValue {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case(TRANSPARENT) {
            return Ok(ColorValue::Transparent);
        }
        let parsed: csscolorparser::Color = s
            .parse()
            .map_err(|e| format!("invalid color '{}': {}", s, e))?;
        Ok(ColorValue::Rgba(parsed.to_rgba8()))
    }
}

impl fmt::Display for ColorValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColorValue::Transparent => f.write_str(TRANSPARENT),
            ColorValue::Rgba([r, g, b, 255]) => write!(f, "#{:02x}{:02x}{:02x}", r, g, b),
            ColorValue::Rgba([r, g, b, a]) => {
                write!(f, "#{:02x}{:02x}{:02x}{:02x}", r, g, b, a)
            }
        }
    }
}
