use boothkit_designer::{ColorValue, Element, ElementKind, TextAlignment};

use crate::common::{element, session_with, slot};

#[test]
fn test_majority_visibility_toggle() {
    let (mut session, ids) = session_with((0..5).map(|i| slot(i as f64 * 60.0, 0.0, 50.0, 50.0)).collect());
    session.set_element_visibility(ids[0], false);
    session.set_element_visibility(ids[1], false);

    // 3 of 5 visible: everything hides
    assert!(session.toggle_all_elements_visibility());
    assert!(ids.iter().all(|id| !element(&session, *id).visible));

    // none visible: everything shows
    assert!(session.toggle_all_elements_visibility());
    assert!(ids.iter().all(|id| element(&session, *id).visible));
}

#[test]
fn test_majority_lock_toggle_with_tie() {
    let (mut session, ids) = session_with((0..4).map(|i| slot(i as f64 * 60.0, 0.0, 50.0, 50.0)).collect());
    session.set_element_locked(ids[0], true);
    session.set_element_locked(ids[1], true);

    // Exactly half locked is not a majority
    assert!(session.toggle_all_elements_lock());
    assert!(ids.iter().all(|id| element(&session, *id).locked));
    assert!(session.toggle_all_elements_lock());
    assert!(ids.iter().all(|id| !element(&session, *id).locked));
}

#[test]
fn test_toggles_leave_untouched_groups_alone() {
    let (mut session, ids) = session_with(vec![
        slot(100.0, 100.0, 100.0, 50.0),
        slot(300.0, 200.0, 50.0, 100.0),
        slot(600.0, 600.0, 50.0, 50.0),
        slot(700.0, 600.0, 50.0, 50.0),
        slot(800.0, 600.0, 50.0, 50.0),
        slot(900.0, 600.0, 50.0, 50.0),
    ]);
    session.select_many(&ids[..2]);
    let group = session.group().unwrap();
    for id in &ids[2..] {
        session.set_element_visibility(*id, false);
    }
    let before = element(&session, group);

    // 3 of 7 visible: the loose slots show, the grouped children already do
    assert!(session.toggle_all_elements_visibility());
    assert!(ids.iter().all(|id| element(&session, *id).visible));
    assert_eq!(element(&session, group), before);

    assert!(session.toggle_all_elements_lock());
    let after = element(&session, group);
    assert!(after.locked);
    assert_eq!((after.x, after.y, after.width, after.height), (before.x, before.y, before.width, before.height));
}

#[test]
fn test_text_properties() {
    let (mut session, ids) = session_with(vec![Element::text("Hi", 0.0, 0.0)]);
    let id = ids[0];

    assert!(session.set_text_content(id, "Cheese!"));
    assert!(session.set_font_family(id, "Lobster", true));
    assert!(session.set_font_size(id, 48.0));
    assert!(!session.set_font_size(id, 0.0));
    assert!(session.set_text_color(id, "red"));
    assert!(!session.set_text_color(id, "not-a-color"));
    assert!(session.set_text_background(id, "transparent"));
    assert!(session.set_text_style(id, true, false));
    assert!(session.set_text_alignment(id, TextAlignment::BottomRight));

    let ElementKind::Text(text) = element(&session, id).kind else {
        panic!("expected text");
    };
    assert_eq!(text.content, "Cheese!");
    assert_eq!((text.font_family.as_str(), text.remote_font), ("Lobster", true));
    assert_eq!(text.font_size, 48.0);
    assert_eq!(text.color, ColorValue::Rgba([255, 0, 0, 255]));
    assert!(text.background.is_transparent());
    assert!(text.bold && !text.italic);
    assert_eq!(text.alignment, TextAlignment::BottomRight);
}

#[test]
fn test_wrong_variant_is_noop() {
    let (mut session, ids) = session_with(vec![Element::image("a.png", 0.0, 0.0)]);
    let before = session.history().len();
    assert!(!session.set_font_size(ids[0], 20.0));
    assert!(!session.set_camera_label(ids[0], "Cam"));
    assert!(!session.set_group_name(ids[0], "G"));
    assert_eq!(session.history().len(), before);
}

#[test]
fn test_image_properties() {
    let (mut session, ids) = session_with(vec![Element::image("a.png", 0.0, 0.0)]);
    assert!(session.set_image_opacity(ids[0], 1.5));
    assert!(session.set_image_path(ids[0], "b.png"));
    let ElementKind::Image(image) = element(&session, ids[0]).kind else {
        panic!("expected image");
    };
    assert_eq!(image.opacity, 1.0);
    assert_eq!(image.path, std::path::PathBuf::from("b.png"));
}

#[test]
fn test_camera_and_group_names() {
    let (mut session, ids) = session_with(vec![
        slot(0.0, 0.0, 50.0, 50.0),
        slot(100.0, 0.0, 50.0, 50.0),
    ]);
    assert!(session.set_camera_label(ids[0], "Left"));
    session.select_many(&ids);
    let group = session.group().unwrap();
    assert!(session.set_group_name(group, "Pair"));

    assert!(matches!(&element(&session, ids[0]).kind, ElementKind::Camera(c) if c.label == "Left"));
    assert!(matches!(&element(&session, group).kind, ElementKind::Group(g) if g.name == "Pair"));
}

#[test]
fn test_background_and_canvas() {
    let (mut session, _) = session_with(Vec::new());
    assert!(session.set_background("transparent"));
    assert!(session.document().unwrap().background.is_transparent());
    assert!(session.set_background("#336699"));
    assert_eq!(
        session.document().unwrap().background,
        ColorValue::Rgba([0x33, 0x66, 0x99, 0xff])
    );
    assert!(!session.set_background("#zzzzzz"));

    assert!(session.set_canvas_size(600.0, 400.0));
    let doc = session.document().unwrap();
    assert_eq!((doc.width, doc.height), (600.0, 400.0));
}
