//! Offline layout renderer.
//!
//! Rasterizes a [`Layout`] with tiny-skia, independent of any interactive
//! view: output size is the canvas size times the resolution multiplier.
//!
//! Features:
//! - Anti-aliased rendering
//! - Per-element rotation about the element's own center
//! - Image opacity, text alignment and camera placeholders
//! - Atomic PNG export (no partial files on failure)

use boothkit_core::LayoutError;
use boothkit_settings::{ExportSettings, FontSettings};
use rusttype::{point as rt_point, Font, Scale};
use std::collections::HashMap;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tiny_skia::{
    Color, ColorU8, FillRule, FilterQuality, Paint, PathBuilder, Pattern, Pixmap, PixmapPaint,
    PremultipliedColorU8, Rect, SpreadMode, Stroke, Transform,
};

use crate::font_manager::{FontCache, FontKey};
use crate::image_loader::{load_image, DecodedImage, ImageDecoder, RasterDecoder};
use crate::layout::Layout;
use crate::model::{
    CameraElement, Element, ElementKind, HorizontalAnchor, ImageElement, TextElement,
    VerticalAnchor,
};

const CAMERA_TINT: [u8; 4] = [52, 152, 219, 64];
const CAMERA_OUTLINE: [u8; 4] = [52, 152, 219, 255];
const LABEL_COLOR: [u8; 4] = [255, 255, 255, 255];
const SHADOW_COLOR: [u8; 4] = [0, 0, 0, 160];
const SAMPLE_SIZE: (u32, u32) = (640, 480);

/// Export options
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderOptions {
    /// Output pixels per layout unit
    pub multiplier: f32,
    /// Fill the layout background
    pub include_background: bool,
    /// Put a sample photo into camera slots
    pub include_sample_photos: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self::from(&ExportSettings::default())
    }
}

impl From<&ExportSettings> for RenderOptions {
    fn from(settings: &ExportSettings) -> Self {
        Self {
            multiplier: settings.multiplier,
            include_background: settings.include_background,
            include_sample_photos: settings.include_sample_photos,
        }
    }
}

fn skia_color(rgba: [u8; 4]) -> Color {
    Color::from_rgba8(rgba[0], rgba[1], rgba[2], rgba[3])
}

fn solid_paint(rgba: [u8; 4]) -> Paint<'static> {
    let mut paint = Paint::default();
    paint.set_color(skia_color(rgba));
    paint.anti_alias = true;
    paint
}

/// Straight RGBA raster to a premultiplied pixmap.
fn to_pixmap(image: &DecodedImage) -> Option<Pixmap> {
    let mut pixmap = Pixmap::new(image.width, image.height)?;
    for (dst, src) in pixmap.pixels_mut().iter_mut().zip(image.pixels.pixels()) {
        let [r, g, b, a] = src.0;
        *dst = ColorU8::from_rgba(r, g, b, a).premultiply();
    }
    Some(pixmap)
}

/// Source-over one pixel of `color` at `coverage`.
fn blend_pixel(pixmap: &mut Pixmap, x: i32, y: i32, color: [u8; 4], coverage: f32) {
    if x < 0 || y < 0 || x >= pixmap.width() as i32 || y >= pixmap.height() as i32 {
        return;
    }
    let sa = (color[3] as f32 / 255.0) * coverage.clamp(0.0, 1.0);
    if sa <= 0.0 {
        return;
    }
    let idx = (y as u32 * pixmap.width() + x as u32) as usize;
    let Some(dst) = pixmap.pixels_mut().get_mut(idx) else {
        return;
    };

    let inv = 1.0 - sa;
    let a = sa * 255.0 + dst.alpha() as f32 * inv;
    let channel = |src: u8, dst: u8| (src as f32 * sa + dst as f32 * inv).min(a);
    let r = channel(color[0], dst.red());
    let g = channel(color[1], dst.green());
    let b = channel(color[2], dst.blue());

    let a = a.round().clamp(0.0, 255.0) as u8;
    let clamp = |v: f32| (v.round().clamp(0.0, 255.0) as u8).min(a);
    if let Some(blended) = PremultipliedColorU8::from_rgba(clamp(r), clamp(g), clamp(b), a) {
        *dst = blended;
    }
}

/// Deterministic stand-in photo for camera slots.
fn synthesize_sample_photo() -> Option<Pixmap> {
    let (w, h) = SAMPLE_SIZE;
    let mut pixmap = Pixmap::new(w, h)?;
    for (i, px) in pixmap.pixels_mut().iter_mut().enumerate() {
        let x = (i as u32 % w) as f32 / w as f32;
        let y = (i as u32 / w) as f32 / h as f32;
        let r = (90.0 + 110.0 * y) as u8;
        let g = (120.0 + 50.0 * y + 20.0 * x) as u8;
        let b = (170.0 - 40.0 * y) as u8;
        *px = ColorU8::from_rgba(r, g, b, 255).premultiply();
    }
    Some(pixmap)
}

/// Measured block of text lines.
struct TextBlock<'a> {
    lines: Vec<(&'a str, f32)>,
    line_height: f32,
    ascent: f32,
}

impl<'a> TextBlock<'a> {
    fn measure(font: &Font<'static>, scale: Scale, content: &'a str) -> Self {
        let v_metrics = font.v_metrics(scale);
        let lines = content
            .lines()
            .map(|line| {
                let width = font
                    .layout(line, scale, rt_point(0.0, 0.0))
                    .last()
                    .map(|g| g.position().x + g.unpositioned().h_metrics().advance_width)
                    .unwrap_or(0.0);
                (line, width)
            })
            .collect();
        Self {
            lines,
            line_height: v_metrics.ascent - v_metrics.descent + v_metrics.line_gap,
            ascent: v_metrics.ascent,
        }
    }

    fn height(&self) -> f32 {
        self.lines.len() as f32 * self.line_height
    }
}

/// Draw `content` into `pixmap` anchored inside `area`. No wrapping; the
/// pixmap bounds clip anything that overflows.
#[allow(clippy::too_many_arguments)]
fn draw_text(
    pixmap: &mut Pixmap,
    font: &Font<'static>,
    content: &str,
    size: f32,
    color: [u8; 4],
    area: Rect,
    horizontal: HorizontalAnchor,
    vertical: VerticalAnchor,
) {
    let scale = Scale::uniform(size);
    let block = TextBlock::measure(font, scale, content);

    let top = match vertical {
        VerticalAnchor::Top => area.top(),
        VerticalAnchor::Center => area.top() + (area.height() - block.height()) / 2.0,
        VerticalAnchor::Bottom => area.bottom() - block.height(),
    };

    for (i, (line, width)) in block.lines.iter().enumerate() {
        let left = match horizontal {
            HorizontalAnchor::Left => area.left(),
            HorizontalAnchor::Center => area.left() + (area.width() - width) / 2.0,
            HorizontalAnchor::Right => area.right() - width,
        };
        let baseline = top + i as f32 * block.line_height + block.ascent;

        for glyph in font.layout(line, scale, rt_point(left, baseline)) {
            if let Some(bb) = glyph.pixel_bounding_box() {
                glyph.draw(|gx, gy, v| {
                    blend_pixel(
                        pixmap,
                        gx as i32 + bb.min.x,
                        gy as i32 + bb.min.y,
                        color,
                        v,
                    );
                });
            }
        }
    }
}

/// State shared by all elements of one render pass.
struct RenderPass<'a> {
    renderer: &'a Renderer,
    multiplier: f32,
    images: HashMap<PathBuf, Option<Arc<Pixmap>>>,
    sample_photo: Option<Arc<Pixmap>>,
}

impl<'a> RenderPass<'a> {
    fn image(&mut self, path: &Path) -> Option<Arc<Pixmap>> {
        if let Some(cached) = self.images.get(path) {
            return cached.clone();
        }
        let loaded = match load_image(path, self.renderer.decoder.as_ref()) {
            Ok(decoded) => to_pixmap(&decoded).map(Arc::new),
            Err(e) => {
                tracing::warn!("Skipping image {}: {}", path.display(), e);
                None
            }
        };
        self.images.insert(path.to_path_buf(), loaded.clone());
        loaded
    }

    /// Photo for camera slots: the first decodable image of the layout,
    /// else a synthesized one.
    fn prepare_sample_photo(&mut self, layout: &Layout) {
        let first_image = layout.elements().iter().find_map(|e| match &e.kind {
            ElementKind::Image(image) => Some(image.path.clone()),
            _ => None,
        });
        let photo = first_image.and_then(|path| self.image(&path));
        self.sample_photo = photo.or_else(|| synthesize_sample_photo().map(Arc::new));
    }

    fn label_font(&self) -> Option<Arc<Font<'static>>> {
        let family = self.renderer.fallback_family.clone();
        self.renderer
            .fonts
            .get_or_fallback(&FontKey::new(family, false, true, false))
    }

    /// Draw one element into its own pixmap, then composite it rotated
    /// about its center.
    fn draw_element(&mut self, target: &mut Pixmap, element: &Element) {
        let m = self.multiplier;
        let (x, y) = (element.x as f32 * m, element.y as f32 * m);
        let (w, h) = (element.width as f32 * m, element.height as f32 * m);
        if !(w >= 1.0 && h >= 1.0) {
            return;
        }
        let Some(mut local) = Pixmap::new(w.ceil() as u32, h.ceil() as u32) else {
            tracing::warn!("Element {} too large to rasterize", element.id);
            return;
        };
        let Some(area) = Rect::from_xywh(0.0, 0.0, w, h) else {
            return;
        };

        match &element.kind {
            ElementKind::Image(image) => self.draw_image(&mut local, area, image),
            ElementKind::Text(text) => self.draw_text_element(&mut local, area, text),
            ElementKind::Camera(camera) => self.draw_camera(&mut local, area, camera),
            ElementKind::Group(_) => return,
        }

        let rotated = element.rotation != 0.0;
        let transform = if rotated {
            Transform::from_rotate_at(element.rotation as f32, x + w / 2.0, y + h / 2.0)
                .pre_translate(x, y)
        } else {
            Transform::from_translate(x, y)
        };
        let paint = PixmapPaint {
            quality: if rotated || x.fract() != 0.0 || y.fract() != 0.0 {
                FilterQuality::Bilinear
            } else {
                FilterQuality::Nearest
            },
            ..PixmapPaint::default()
        };
        target.draw_pixmap(0, 0, local.as_ref(), &paint, transform, None);
    }

    fn draw_image(&mut self, local: &mut Pixmap, area: Rect, image: &ImageElement) {
        let Some(source) = self.image(&image.path) else {
            return;
        };
        let sx = area.width() / source.width() as f32;
        let sy = area.height() / source.height() as f32;
        let paint = Paint {
            shader: Pattern::new(
                Pixmap::as_ref(&source),
                SpreadMode::Pad,
                FilterQuality::Bilinear,
                image.opacity.clamp(0.0, 1.0) as f32,
                Transform::from_scale(sx, sy),
            ),
            anti_alias: true,
            ..Paint::default()
        };
        local.fill_rect(area, &paint, Transform::identity(), None);
    }

    fn draw_text_element(&mut self, local: &mut Pixmap, area: Rect, text: &TextElement) {
        if !text.background.is_transparent() {
            local.fill_rect(
                area,
                &solid_paint(text.background.to_rgba8()),
                Transform::identity(),
                None,
            );
        }
        if text.content.is_empty() || text.color.is_transparent() {
            return;
        }

        let key = FontKey::new(text.font_family.clone(), text.remote_font, text.bold, text.italic);
        let Some(font) = self.renderer.fonts.get_or_fallback(&key) else {
            tracing::warn!("No font available, text '{}' not drawn", text.content);
            return;
        };
        draw_text(
            local,
            &font,
            &text.content,
            text.font_size as f32 * self.multiplier,
            text.color.to_rgba8(),
            area,
            text.alignment.horizontal(),
            text.alignment.vertical(),
        );
    }

    fn draw_camera(&mut self, local: &mut Pixmap, area: Rect, camera: &CameraElement) {
        let m = self.multiplier;
        let photo = self.sample_photo.clone();
        let font = self.label_font();

        match photo {
            Some(photo) => {
                // Cover fit, centered
                let scale = (area.width() / photo.width() as f32)
                    .max(area.height() / photo.height() as f32);
                let tx = (area.width() - photo.width() as f32 * scale) / 2.0;
                let ty = (area.height() - photo.height() as f32 * scale) / 2.0;
                let paint = Paint {
                    shader: Pattern::new(
                        Pixmap::as_ref(&photo),
                        SpreadMode::Pad,
                        FilterQuality::Bilinear,
                        1.0,
                        Transform::from_row(scale, 0.0, 0.0, scale, tx, ty),
                    ),
                    anti_alias: true,
                    ..Paint::default()
                };
                local.fill_rect(area, &paint, Transform::identity(), None);

                let border = 4.0 * m;
                if let Some(inset) = Rect::from_xywh(
                    border / 2.0,
                    border / 2.0,
                    area.width() - border,
                    area.height() - border,
                ) {
                    let path = PathBuilder::from_rect(inset);
                    let stroke = Stroke {
                        width: border,
                        ..Stroke::default()
                    };
                    local.stroke_path(
                        &path,
                        &solid_paint(LABEL_COLOR),
                        &stroke,
                        Transform::identity(),
                        None,
                    );
                }

                if let Some(font) = font {
                    let pad = 12.0 * m;
                    let size = 24.0 * m;
                    let shadow = 2.0 * m;
                    if let Some(label_area) = Rect::from_xywh(
                        pad,
                        pad,
                        (area.width() - 2.0 * pad).max(1.0),
                        (area.height() - 2.0 * pad).max(1.0),
                    ) {
                        if let Some(shadow_area) = Rect::from_xywh(
                            label_area.x() + shadow,
                            label_area.y() + shadow,
                            label_area.width(),
                            label_area.height(),
                        ) {
                            draw_text(
                                local,
                                &font,
                                &camera.label,
                                size,
                                SHADOW_COLOR,
                                shadow_area,
                                HorizontalAnchor::Left,
                                VerticalAnchor::Bottom,
                            );
                        }
                        draw_text(
                            local,
                            &font,
                            &camera.label,
                            size,
                            LABEL_COLOR,
                            label_area,
                            HorizontalAnchor::Left,
                            VerticalAnchor::Bottom,
                        );
                    }
                }
            }
            None => {
                local.fill_rect(area, &solid_paint(CAMERA_TINT), Transform::identity(), None);
                let stroke = Stroke {
                    width: 2.0 * m,
                    ..Stroke::default()
                };
                local.stroke_path(
                    &PathBuilder::from_rect(area),
                    &solid_paint(CAMERA_OUTLINE),
                    &stroke,
                    Transform::identity(),
                    None,
                );
                draw_camera_icon(local, area);

                if let Some(font) = font {
                    let icon_bottom = area.height() / 2.0 + area.height().min(area.width()) * 0.15;
                    if let Some(label_area) = Rect::from_xywh(
                        0.0,
                        icon_bottom,
                        area.width(),
                        (area.height() - icon_bottom).max(1.0),
                    ) {
                        draw_text(
                            local,
                            &font,
                            &camera.label,
                            20.0 * m,
                            CAMERA_OUTLINE,
                            label_area,
                            HorizontalAnchor::Center,
                            VerticalAnchor::Center,
                        );
                    }
                }
            }
        }
    }
}

/// Camera pictogram: body, viewfinder bump and lens.
fn draw_camera_icon(local: &mut Pixmap, area: Rect) {
    let unit = area.width().min(area.height()) * 0.15;
    let (cx, cy) = (area.width() / 2.0, area.height() / 2.0);
    let paint = solid_paint(CAMERA_OUTLINE);

    let mut pb = PathBuilder::new();
    if let Some(body) = Rect::from_xywh(cx - unit, cy - unit * 0.7, unit * 2.0, unit * 1.4) {
        pb.push_rect(body);
    }
    if let Some(bump) = Rect::from_xywh(cx - unit * 0.4, cy - unit * 0.95, unit * 0.8, unit * 0.3) {
        pb.push_rect(bump);
    }
    if let Some(path) = pb.finish() {
        local.fill_path(&path, &paint, FillRule::Winding, Transform::identity(), None);
    }
    if let Some(lens) = PathBuilder::from_circle(cx, cy, unit * 0.45) {
        local.fill_path(
            &lens,
            &solid_paint([255, 255, 255, 255]),
            FillRule::Winding,
            Transform::identity(),
            None,
        );
    }
}

/// Layout renderer
pub struct Renderer {
    fonts: Arc<FontCache>,
    decoder: Arc<dyn ImageDecoder>,
    fallback_family: String,
}

impl Renderer {
    pub fn new(fonts: Arc<FontCache>, decoder: Arc<dyn ImageDecoder>) -> Self {
        Self {
            fonts,
            decoder,
            fallback_family: FontSettings::default().fallback_family,
        }
    }

    /// Renderer over system fonts and the `image` crate decoder.
    pub fn from_settings(settings: &FontSettings) -> Self {
        Self {
            fonts: Arc::new(FontCache::from_settings(settings)),
            decoder: Arc::new(RasterDecoder),
            fallback_family: settings.fallback_family.clone(),
        }
    }

    pub fn fonts(&self) -> &Arc<FontCache> {
        &self.fonts
    }

    /// Output size in pixels for `layout` at `multiplier`.
    pub fn output_size(layout: &Layout, multiplier: f32) -> (u32, u32) {
        (
            (layout.width as f32 * multiplier).round().max(0.0) as u32,
            (layout.height as f32 * multiplier).round().max(0.0) as u32,
        )
    }

    /// Rasterize the layout.
    ///
    /// Groups are not drawn themselves; their children are drawn in their
    /// own list position. Invisible elements are skipped.
    pub fn render(&self, layout: &Layout, options: &RenderOptions) -> Result<Pixmap, LayoutError> {
        if !(options.multiplier > 0.0) || !options.multiplier.is_finite() {
            return Err(LayoutError::Export(format!(
                "invalid resolution multiplier {}",
                options.multiplier
            )));
        }
        let (width, height) = Self::output_size(layout, options.multiplier);
        let mut pixmap = Pixmap::new(width, height).ok_or_else(|| {
            LayoutError::Export(format!("cannot allocate a {}x{} canvas", width, height))
        })?;

        if options.include_background && !layout.background.is_transparent() {
            pixmap.fill(skia_color(layout.background.to_rgba8()));
        }

        let mut pass = RenderPass {
            renderer: self,
            multiplier: options.multiplier,
            images: HashMap::new(),
            sample_photo: None,
        };
        if options.include_sample_photos && layout.elements().iter().any(Element::is_camera) {
            pass.prepare_sample_photo(layout);
        }

        for element in layout.elements() {
            if !element.visible || element.is_group() {
                continue;
            }
            pass.draw_element(&mut pixmap, element);
        }

        Ok(pixmap)
    }

    /// Render and encode as PNG.
    pub fn encode_png(&self, layout: &Layout, options: &RenderOptions) -> Result<Vec<u8>, LayoutError> {
        self.render(layout, options)?
            .encode_png()
            .map_err(|e| LayoutError::Export(e.to_string()))
    }

    /// Render and write a PNG to `path`.
    ///
    /// The file is written next to its destination and moved into place
    /// only once complete; on any failure no file is left behind.
    pub fn export_png(
        &self,
        layout: &Layout,
        path: &Path,
        options: &RenderOptions,
    ) -> Result<(), LayoutError> {
        tracing::info!("Exporting layout to {}", path.display());
        let result = self.write_png(layout, path, options);
        match &result {
            Ok(()) => tracing::info!("Export finished: {}", path.display()),
            Err(e) => tracing::error!("Export to {} failed: {}", path.display(), e),
        }
        result
    }

    fn write_png(&self, layout: &Layout, path: &Path, options: &RenderOptions) -> Result<(), LayoutError> {
        let png = self.encode_png(layout, options)?;

        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let mut tmp = tempfile::NamedTempFile::new_in(dir)?;
        tmp.write_all(&png)?;
        tmp.as_file().sync_all()?;
        tmp.persist(path).map_err(|e| LayoutError::Io(e.error))?;
        Ok(())
    }
}

impl std::fmt::Debug for Renderer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Renderer")
            .field("fonts", &self.fonts)
            .field("fallback_family", &self.fallback_family)
            .finish()
    }
}
