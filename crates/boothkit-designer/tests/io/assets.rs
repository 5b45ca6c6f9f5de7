use boothkit_core::{EditorEvent, ExportEvent, LayoutError};
use boothkit_designer::{
    resolve_image_size, EditorSession, ElementKind, ImageDecoder, ImageSizeResolution,
    RasterDecoder, RenderOptions,
};
use std::sync::Arc;
use tempfile::TempDir;

use crate::common::{renderer, write_png};

fn decoder() -> Arc<dyn ImageDecoder> {
    Arc::new(RasterDecoder)
}

fn session() -> EditorSession {
    let mut session = EditorSession::default();
    session.new_document(1200.0, 1800.0);
    session
}

#[tokio::test]
async fn test_resolved_size_sets_aspect_height() {
    let dir = TempDir::new().unwrap();
    let path = write_png(dir.path(), "wide.png", 40, 20, [0, 0, 255, 255]);
    let mut session = session();
    let id = session.add_image(&path).unwrap();

    let resolution = resolve_image_size(id, path, decoder()).await.unwrap();
    assert_eq!((resolution.width, resolution.height), (40, 20));
    assert!(session.apply_image_size(resolution));

    let e = session.element(id).unwrap();
    assert_eq!((e.width, e.height), (200.0, 100.0));
    assert!(matches!(e.kind, ElementKind::Image(_)));
}

#[tokio::test]
async fn test_resolution_for_deleted_element_is_ignored() {
    let dir = TempDir::new().unwrap();
    let path = write_png(dir.path(), "tall.png", 10, 30, [0, 255, 0, 255]);
    let mut session = session();
    let id = session.add_image(&path).unwrap();

    let pending = tokio::spawn(resolve_image_size(id, path, decoder()));
    session.delete_element(id);
    let history = session.history().len();

    let resolution = pending.await.unwrap().unwrap();
    assert!(!session.apply_image_size(resolution));
    assert_eq!(session.history().len(), history);
}

#[tokio::test]
async fn test_missing_image_reports_not_found() {
    let err = resolve_image_size(uuid::Uuid::new_v4(), "/no/such/file.png".into(), decoder())
        .await
        .unwrap_err();
    assert!(matches!(err, LayoutError::FileNotFound(_)));
}

#[test]
fn test_apply_rejects_non_images_and_empty_sizes() {
    let mut session = session();
    let camera = session.add_camera().unwrap();
    assert!(!session.apply_image_size(ImageSizeResolution {
        element_id: camera,
        width: 10,
        height: 10,
    }));

    let image = session.add_image("x.png").unwrap();
    assert!(!session.apply_image_size(ImageSizeResolution {
        element_id: image,
        width: 0,
        height: 10,
    }));
}

#[tokio::test]
async fn test_async_export_uses_snapshot() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("strip.png");
    let mut session = session();
    session.set_canvas_size(80.0, 40.0);
    let mut events = session.events().receiver();

    let handle = session
        .export_png_async(Arc::new(renderer()), out.clone(), RenderOptions::default())
        .unwrap();
    // Later edits do not reach the running export
    session.set_canvas_size(500.0, 500.0);
    handle.await.unwrap().unwrap();

    let decoded = image::open(&out).unwrap();
    assert_eq!((decoded.width(), decoded.height()), (80, 40));

    let mut export_events = Vec::new();
    while let Ok(event) = events.try_recv() {
        if let EditorEvent::Export(e) = event {
            export_events.push(e);
        }
    }
    assert!(matches!(export_events.first(), Some(ExportEvent::Started { .. })));
    assert!(matches!(export_events.last(), Some(ExportEvent::Finished { path }) if *path == out));
}

#[test]
fn test_async_export_needs_document() {
    let session = EditorSession::default();
    let result = session.export_png_async(
        Arc::new(renderer()),
        "out.png".into(),
        RenderOptions::default(),
    );
    assert!(matches!(result, Err(LayoutError::InvalidState(_))));
}
