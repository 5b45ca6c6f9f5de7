use boothkit_designer::model::{DEFAULT_IMAGE_SIZE, DEFAULT_TEXT_SIZE};
use boothkit_designer::ElementKind;

use crate::common::{element, session_with, slot};

#[test]
fn test_added_elements_are_centered_and_selected() {
    let (mut session, _) = session_with(Vec::new());

    let image = session.add_image("photo.jpg").unwrap();
    let e = element(&session, image);
    assert_eq!((e.width, e.height), DEFAULT_IMAGE_SIZE);
    assert_eq!(e.center(), (600.0, 900.0));
    assert_eq!(session.selected_ids(), vec![image]);

    let text = session.add_text("Hello").unwrap();
    let e = element(&session, text);
    assert_eq!((e.width, e.height), DEFAULT_TEXT_SIZE);
    assert!(matches!(&e.kind, ElementKind::Text(t) if t.content == "Hello"));
    assert_eq!(session.document().unwrap().elements().last().unwrap().id, text);
}

#[test]
fn test_camera_labels_count_up() {
    let (mut session, _) = session_with(Vec::new());
    let labels: Vec<String> = (0..3)
        .map(|_| {
            let id = session.add_camera().unwrap();
            match &element(&session, id).kind {
                ElementKind::Camera(camera) => camera.label.clone(),
                _ => unreachable!(),
            }
        })
        .collect();
    assert_eq!(labels, ["Camera 1", "Camera 2", "Camera 3"]);
}

#[test]
fn test_nothing_happens_without_document() {
    let mut session = boothkit_designer::EditorSession::default();
    assert!(session.add_text("x").is_none());
    assert!(!session.checkpoint());
    assert!(!session.undo());
}

#[test]
fn test_delete_group_takes_children() {
    let (mut session, ids) = session_with(vec![
        slot(0.0, 0.0, 50.0, 50.0),
        slot(100.0, 0.0, 50.0, 50.0),
        slot(300.0, 0.0, 50.0, 50.0),
    ]);
    session.select_many(&ids[..2]);
    let group = session.group().unwrap();

    assert!(session.delete_element(group));
    let remaining: Vec<_> = session.document().unwrap().elements().iter().map(|e| e.id).collect();
    assert_eq!(remaining, vec![ids[2]]);
    assert!(session.selected_ids().is_empty());
}

#[test]
fn test_deleting_children_scrubs_and_removes_empty_group() {
    let (mut session, ids) = session_with(vec![
        slot(0.0, 0.0, 50.0, 50.0),
        slot(100.0, 0.0, 50.0, 50.0),
    ]);
    session.select_many(&ids);
    let group = session.group().unwrap();

    assert!(session.delete_element(ids[0]));
    let g = element(&session, group);
    assert_eq!(g.group_children().unwrap(), &[ids[1]]);
    let padding = session.settings().group_padding;
    assert_eq!((g.x, g.width), (100.0 - padding, 50.0 + 2.0 * padding));

    assert!(session.delete_element(ids[1]));
    assert!(session.element(group).is_none());
    assert!(session.document().unwrap().is_empty());
}

#[test]
fn test_delete_selected_counts() {
    let (mut session, ids) = session_with(vec![
        slot(0.0, 0.0, 50.0, 50.0),
        slot(100.0, 0.0, 50.0, 50.0),
        slot(200.0, 0.0, 50.0, 50.0),
    ]);
    session.select_many(&ids[1..]);
    assert_eq!(session.delete_selected(), 2);
    assert_eq!(session.document().unwrap().len(), 1);
    assert_eq!(session.delete_selected(), 0);
    assert!(!session.delete_element(uuid::Uuid::new_v4()));
}

#[test]
fn test_delete_leaves_unrelated_groups_alone() {
    let (mut session, ids) = session_with(vec![
        slot(100.0, 100.0, 100.0, 50.0),
        slot(300.0, 200.0, 50.0, 100.0),
        slot(600.0, 600.0, 50.0, 50.0),
    ]);
    session.select_many(&ids[..2]);
    let group = session.group().unwrap();
    let before = element(&session, group);
    // Unpadded box from creation
    assert_eq!((before.x, before.y, before.width, before.height), (100.0, 100.0, 250.0, 200.0));

    assert!(session.delete_element(ids[2]));
    assert_eq!(element(&session, group), before);
}
