use boothkit_designer::Element;

use crate::common::{element, session_with, slot};

#[test]
fn test_move_and_locked_rejection() {
    let (mut session, ids) = session_with(vec![slot(0.0, 0.0, 100.0, 100.0)]);
    assert!(session.update_element_position(ids[0], 40.0, 60.0));
    let e = element(&session, ids[0]);
    assert_eq!((e.x, e.y), (40.0, 60.0));

    // Same position is not a change
    assert!(!session.update_element_position(ids[0], 40.0, 60.0));

    session.set_element_locked(ids[0], true);
    assert!(!session.update_element_position(ids[0], 0.0, 0.0));
    assert!(!session.update_element_size(ids[0], 300.0, 300.0));
    assert!(!session.rotate_element(ids[0], 45.0));
    assert_eq!(element(&session, ids[0]).x, 40.0);
}

#[test]
fn test_snap_to_grid() {
    let (mut session, ids) = session_with(vec![slot(0.0, 0.0, 100.0, 100.0)]);
    session.settings_mut().snap_to_grid = true;

    session.update_element_position(ids[0], 23.0, 27.0);
    let e = element(&session, ids[0]);
    assert_eq!((e.x, e.y), (20.0, 30.0));

    session.update_element_size(ids[0], 144.0, 156.0);
    let e = element(&session, ids[0]);
    assert_eq!((e.width, e.height), (140.0, 160.0));
}

#[test]
fn test_minimum_size() {
    let (mut session, ids) = session_with(vec![slot(0.0, 0.0, 100.0, 100.0)]);
    let min = session.settings().min_element_size;
    assert!(session.update_element_size(ids[0], 2.0, -5.0));
    let e = element(&session, ids[0]);
    assert_eq!((e.width, e.height), (min, min));
}

#[test]
fn test_aspect_locked_image_resize() {
    let (mut session, ids) = session_with(vec![Element::image("photo.png", 0.0, 0.0)]);

    // Width changed: height follows
    assert!(session.update_element_size(ids[0], 400.0, 200.0));
    let e = element(&session, ids[0]);
    assert_eq!((e.width, e.height), (400.0, 400.0));

    // Only height changed: width follows
    assert!(session.update_element_size(ids[0], 400.0, 100.0));
    let e = element(&session, ids[0]);
    assert_eq!((e.width, e.height), (100.0, 100.0));

    session.set_image_aspect_lock(ids[0], false);
    assert!(session.update_element_size(ids[0], 300.0, 50.0));
    let e = element(&session, ids[0]);
    assert_eq!((e.width, e.height), (300.0, 50.0));
}

#[test]
fn test_rotation_checkpoints_per_call() {
    let (mut session, ids) = session_with(vec![slot(0.0, 0.0, 100.0, 100.0)]);
    let before = session.history().len();

    session.rotate_element(ids[0], 10.0);
    session.rotate_element(ids[0], 20.0);
    assert_eq!(session.history().len(), before + 2);

    session.begin_rotate();
    for deg in [30.0, 40.0, 50.0] {
        session.rotate_element(ids[0], deg);
    }
    session.end_rotate();
    assert_eq!(session.history().len(), before + 3);
    assert_eq!(element(&session, ids[0]).rotation, 50.0);

    session.undo();
    assert_eq!(element(&session, ids[0]).rotation, 20.0);
}

#[test]
fn test_mismatched_gesture_end_is_ignored() {
    let (mut session, ids) = session_with(vec![slot(0.0, 0.0, 100.0, 100.0)]);
    session.begin_resize();
    session.end_drag();
    assert!(session.gesture().is_some());

    session.update_element_size(ids[0], 200.0, 200.0);
    session.end_resize();
    assert!(session.gesture().is_none());
    assert!(session.undo());
    assert_eq!(element(&session, ids[0]).width, 100.0);
}

#[test]
fn test_unknown_id_is_noop() {
    let (mut session, _) = session_with(vec![slot(0.0, 0.0, 100.0, 100.0)]);
    let before = session.history().len();
    let ghost = uuid::Uuid::new_v4();
    assert!(!session.update_element_position(ghost, 1.0, 1.0));
    assert!(!session.update_element_size(ghost, 50.0, 50.0));
    assert!(!session.rotate_element(ghost, 5.0));
    assert_eq!(session.history().len(), before);
}

#[test]
fn test_non_finite_input_is_rejected() {
    let (mut session, ids) = session_with(vec![slot(0.0, 0.0, 100.0, 100.0)]);
    assert!(session.move_element_by(ids[0], 10.0, 0.0));
    let before = session.history().len();

    assert!(!session.update_element_position(ids[0], f64::NAN, 0.0));
    assert!(!session.update_element_position(ids[0], 0.0, f64::INFINITY));
    assert!(!session.update_element_size(ids[0], f64::NAN, 50.0));
    assert!(!session.update_element_size(ids[0], 50.0, f64::NEG_INFINITY));
    assert!(!session.rotate_element(ids[0], f64::NAN));
    assert!(!session.rotate_element(ids[0], f64::INFINITY));
    assert_eq!(session.history().len(), before);

    let e = element(&session, ids[0]);
    assert_eq!((e.x, e.y, e.width, e.height, e.rotation), (10.0, 0.0, 100.0, 100.0, 0.0));

    // History stays decodable
    assert!(session.rotate_element(ids[0], 45.0));
    assert!(session.undo());
    assert!(session.undo());
    assert_eq!(element(&session, ids[0]).x, 0.0);
}
