use boothkit_core::LayoutError;
use boothkit_designer::model::CameraElement;
use boothkit_designer::serialization::{layout_from_str, layout_from_value, layout_to_string, layout_to_value};
use boothkit_designer::{
    Bounds, ColorValue, Element, ElementKind, Layout, LayoutFile, TextAlignment,
};
use tempfile::TempDir;

fn sample_layout() -> Layout {
    let mut layout = Layout::new(1200.0, 1800.0, ColorValue::Transparent);

    let mut image = Element::image("/photos/bg.jpg", 0.0, 0.0);
    image.width = 1200.0;
    image.height = 1800.0;
    if let ElementKind::Image(data) = &mut image.kind {
        data.opacity = 0.75;
        data.aspect_locked = false;
    }
    layout.add(image);

    let mut text = Element::text("Jan & Sam", 100.0, 1500.0);
    text.rotation = -7.5;
    if let ElementKind::Text(data) = &mut text.kind {
        data.font_family = "Pacifico".to_string();
        data.remote_font = true;
        data.font_size = 64.0;
        data.color = "#ff8800".parse().unwrap();
        data.background = ColorValue::Rgba([0, 0, 0, 128]);
        data.italic = true;
        data.alignment = TextAlignment::BottomLeft;
    }
    layout.add(text);

    let a = layout.add(Element::new(
        ElementKind::Camera(CameraElement {
            label: "Camera 1".to_string(),
        }),
        100.0,
        100.0,
        400.0,
        300.0,
    ));
    let mut hidden = Element::camera("Camera 2", 600.0, 100.0);
    hidden.visible = false;
    hidden.locked = true;
    let b = layout.add(hidden);
    layout.add(Element::group(
        "Group 1",
        vec![a, b],
        Bounds::new(90.0, 90.0, 1010.0, 410.0),
    ));
    layout
}

#[test]
fn test_round_trip_preserves_every_variant() {
    let layout = sample_layout();
    let json = layout_to_string(&layout).unwrap();
    let decoded = layout_from_str(&json).unwrap();
    assert_eq!(decoded, layout);
    assert!(decoded.background.is_transparent());
}

#[test]
fn test_document_shape() {
    let value = layout_to_value(&sample_layout()).unwrap();
    assert_eq!(value["background"], "transparent");
    let elements = value["elements"].as_array().unwrap();
    let tags: Vec<&str> = elements.iter().map(|e| e["type"].as_str().unwrap()).collect();
    assert_eq!(tags, ["image", "text", "camera", "camera", "group"]);
    assert_eq!(elements[1]["alignment"], "bottom-left");
    assert_eq!(elements[1]["color"], "#ff8800");
    assert_eq!(elements[4]["children"].as_array().unwrap().len(), 2);
    // Variant fields stay with their variant
    assert!(elements[2].get("content").is_none());
}

#[test]
fn test_duplicate_ids_are_rejected() {
    let mut value = layout_to_value(&sample_layout()).unwrap();
    let id = value["elements"][2]["id"].clone();
    value["elements"][3]["id"] = id;
    assert!(matches!(
        layout_from_value(value),
        Err(LayoutError::MalformedDocument(_))
    ));
}

#[test]
fn test_bad_color_is_malformed() {
    let mut value = layout_to_value(&sample_layout()).unwrap();
    value["elements"][1]["color"] = "octarine".into();
    assert!(matches!(
        layout_from_value(value),
        Err(LayoutError::MalformedDocument(_))
    ));
}

#[test]
fn test_missing_common_field_is_malformed() {
    for field in ["rotation", "visible", "x"] {
        let mut value = layout_to_value(&sample_layout()).unwrap();
        value["elements"][0]
            .as_object_mut()
            .unwrap()
            .remove(field);
        assert!(
            matches!(layout_from_value(value), Err(LayoutError::MalformedDocument(_))),
            "missing {} accepted",
            field
        );
    }
}

#[test]
fn test_not_json_is_malformed() {
    assert!(matches!(
        layout_from_str("{ not json"),
        Err(LayoutError::MalformedDocument(_))
    ));
}

#[test]
fn test_layout_file_save_and_load() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("wedding.json");
    let layout = sample_layout();

    let mut file = LayoutFile::new("Wedding strip", &layout);
    let created = file.metadata.created;
    file.update(&layout);
    assert!(file.metadata.modified >= created);
    file.save_to_file(&path).unwrap();

    let loaded = LayoutFile::load_from_file(&path).unwrap();
    assert_eq!(loaded.version, "1.0");
    assert_eq!(loaded.metadata.name, "Wedding strip");
    assert_eq!(loaded.to_layout().unwrap(), layout);
}

#[test]
fn test_layout_file_rejects_invalid_content() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("broken.json");
    std::fs::write(
        &path,
        r##"{"version":"1.0","metadata":{"name":"x","created":"2024-01-01T00:00:00Z","modified":"2024-01-01T00:00:00Z"},
           "layout":{"width":10,"height":10,"background":"#fff","elements":[
             {"id":"00000000-0000-0000-0000-000000000001","type":"sticker","x":0,"y":0,"width":1,"height":1,"rotation":0,"visible":true,"locked":false}]}}"##,
    )
    .unwrap();
    assert!(LayoutFile::load_from_file(&path).is_err());
    assert!(LayoutFile::load_from_file(dir.path().join("absent.json")).is_err());
}
