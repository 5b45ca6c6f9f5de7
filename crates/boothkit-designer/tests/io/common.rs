use boothkit_core::LayoutError;
use boothkit_designer::{FontCache, FontKey, FontResolver, RasterDecoder, Renderer};
use image::{Rgba, RgbaImage};
use parking_lot::Mutex;
use rusttype::Font;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Resolver with no fonts at all, so output never depends on the host.
pub struct NoFonts;

impl FontResolver for NoFonts {
    fn resolve(&self, key: &FontKey) -> Result<Font<'static>, LayoutError> {
        Err(LayoutError::FontUnavailable {
            family: key.family.clone(),
        })
    }
}

/// Public-domain Tuffy face, served for the local family "Tuffy" only.
pub const TUFFY: &[u8] = include_bytes!("../fixtures/Tuffy.ttf");

#[derive(Default)]
pub struct FixtureFonts {
    pub requests: Mutex<Vec<FontKey>>,
}

impl FontResolver for FixtureFonts {
    fn resolve(&self, key: &FontKey) -> Result<Font<'static>, LayoutError> {
        self.requests.lock().push(key.clone());
        if key.family == "Tuffy" && !key.remote {
            if let Some(font) = Font::try_from_vec(TUFFY.to_vec()) {
                return Ok(font);
            }
        }
        Err(LayoutError::FontUnavailable {
            family: key.family.clone(),
        })
    }
}

/// Renderer whose fonts all resolve to the fixture face.
pub fn text_renderer(fonts: Arc<FixtureFonts>) -> Renderer {
    Renderer::new(
        Arc::new(FontCache::new(fonts, "Tuffy")),
        Arc::new(RasterDecoder),
    )
}

pub fn renderer() -> Renderer {
    Renderer::new(
        Arc::new(FontCache::new(Arc::new(NoFonts), "Sans")),
        Arc::new(RasterDecoder),
    )
}

/// Write a solid-color PNG.
pub fn write_png(dir: &Path, name: &str, width: u32, height: u32, rgba: [u8; 4]) -> PathBuf {
    let path = dir.join(name);
    RgbaImage::from_pixel(width, height, Rgba(rgba))
        .save(&path)
        .expect("png written");
    path
}
