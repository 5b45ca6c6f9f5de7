//! Completion of asynchronous asset work: decoded image sizes and
//! background PNG export.

use boothkit_core::{EditorEvent, ExportEvent, LayoutError};
use std::path::PathBuf;
use std::sync::Arc;
use tokio::task::JoinHandle;

use crate::image_loader::ImageSizeResolution;
use crate::model::ElementKind;
use crate::renderer::{RenderOptions, Renderer};

use super::EditorSession;

impl EditorSession {
    /// Commit a decoded image size to its element.
    ///
    /// The width is kept and the height follows the image's aspect ratio.
    /// The element may have been deleted or replaced while decoding ran;
    /// that case is logged and ignored.
    pub fn apply_image_size(&mut self, resolution: ImageSizeResolution) -> bool {
        let ImageSizeResolution {
            element_id,
            width,
            height,
        } = resolution;
        if width == 0 || height == 0 {
            tracing::warn!("Ignoring empty image size for {}", element_id);
            return false;
        }

        let padding = self.settings.group_padding;
        let min = self.settings.min_element_size;
        let Some(document) = self.document.as_mut() else {
            return false;
        };
        let Some(element) = document.get_mut(element_id) else {
            tracing::debug!("Image {} was removed before its size resolved", element_id);
            return false;
        };
        if !matches!(element.kind, ElementKind::Image(_)) {
            tracing::debug!("Element {} is no longer an image", element_id);
            return false;
        }

        element.height = (element.width * height as f64 / width as f64).max(min);
        if let Some(parent) = document.parent_group_of(element_id) {
            document.recompute_group_bounds(parent, padding);
        }
        self.emit_changed(element_id);
        self.commit();
        true
    }

    /// Export a snapshot of the document on the blocking pool.
    ///
    /// Later edits do not affect the running export. Progress is published
    /// as [`ExportEvent`]s. Must be called from within a tokio runtime.
    pub fn export_png_async(
        &self,
        renderer: Arc<Renderer>,
        path: PathBuf,
        options: RenderOptions,
    ) -> Result<JoinHandle<Result<(), LayoutError>>, LayoutError> {
        let snapshot = self
            .document
            .clone()
            .ok_or_else(|| LayoutError::invalid_state("no document to export"))?;
        let events = self.events.clone();

        let _ = events.publish(EditorEvent::Export(ExportEvent::Started { path: path.clone() }));
        Ok(tokio::task::spawn_blocking(move || {
            let result = renderer.export_png(&snapshot, &path, &options);
            let event = match &result {
                Ok(()) => ExportEvent::Finished { path },
                Err(e) => ExportEvent::Failed {
                    path,
                    reason: e.to_string(),
                },
            };
            let _ = events.publish(EditorEvent::Export(event));
            result
        }))
    }
}
