//! Image decoding collaborator.
//!
//! Decoding is behind [`ImageDecoder`] so the editor and renderer can be
//! driven with synthetic images. A missing file is reported as
//! `FileNotFound` before any decode is attempted.

use boothkit_core::LayoutError;
use image::RgbaImage;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::model::ElementId;

/// A decoded raster, straight (non-premultiplied) RGBA.
#[derive(Debug, Clone)]
pub struct DecodedImage {
    pub width: u32,
    pub height: u32,
    pub pixels: RgbaImage,
}

pub trait ImageDecoder: Send + Sync {
    /// Decode raw file bytes.
    fn decode(&self, bytes: &[u8]) -> Result<DecodedImage, LayoutError>;
}

/// Decoder backed by the `image` crate, for every format it is built with.
#[derive(Debug, Clone, Copy, Default)]
pub struct RasterDecoder;

impl ImageDecoder for RasterDecoder {
    fn decode(&self, bytes: &[u8]) -> Result<DecodedImage, LayoutError> {
        let pixels = image::load_from_memory(bytes)
            .map_err(|e| LayoutError::Decode(e.to_string()))?
            .to_rgba8();
        Ok(DecodedImage {
            width: pixels.width(),
            height: pixels.height(),
            pixels,
        })
    }
}

/// Read and decode an image file.
pub fn load_image(path: &Path, decoder: &dyn ImageDecoder) -> Result<DecodedImage, LayoutError> {
    if !path.is_file() {
        return Err(LayoutError::FileNotFound(path.to_path_buf()));
    }
    let bytes = std::fs::read(path)?;
    decoder.decode(&bytes)
}

/// Decoded size of an image element's file.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ImageSizeResolution {
    pub element_id: ElementId,
    pub width: u32,
    pub height: u32,
}

/// Decode an image on the blocking pool to learn its size.
///
/// The result is keyed by element ID; the caller commits it with
/// `EditorSession::apply_image_size`, which tolerates the element having
/// been deleted meanwhile.
pub async fn resolve_image_size(
    element_id: ElementId,
    path: PathBuf,
    decoder: Arc<dyn ImageDecoder>,
) -> Result<ImageSizeResolution, LayoutError> {
    let decoded = tokio::task::spawn_blocking(move || load_image(&path, decoder.as_ref()))
        .await
        .map_err(|e| LayoutError::Decode(format!("decode task failed: {}", e)))?;

    match decoded {
        Ok(image) => Ok(ImageSizeResolution {
            element_id,
            width: image.width,
            height: image.height,
        }),
        Err(e) => {
            tracing::warn!("Could not resolve size of image {}: {}", element_id, e);
            Err(e)
        }
    }
}
