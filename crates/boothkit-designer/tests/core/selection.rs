use crate::common::{session_with, slot};

#[test]
fn test_select_replaces_and_extend_toggles() {
    let (mut session, ids) = session_with(vec![
        slot(0.0, 0.0, 100.0, 100.0),
        slot(200.0, 0.0, 100.0, 100.0),
    ]);

    session.select(Some(ids[0]), false);
    assert_eq!(session.selected_ids(), vec![ids[0]]);

    session.select(Some(ids[1]), true);
    assert_eq!(session.selected_ids(), vec![ids[0], ids[1]]);
    assert!(session.has_multiple_elements_selected());

    session.select(Some(ids[0]), true);
    assert_eq!(session.selected_ids(), vec![ids[1]]);
    assert_eq!(session.selection().selected_id(), Some(ids[1]));

    session.select(None, false);
    assert!(session.selected_ids().is_empty());
}

#[test]
fn test_unknown_id_is_ignored() {
    let (mut session, ids) = session_with(vec![slot(0.0, 0.0, 100.0, 100.0)]);
    session.select(Some(ids[0]), false);
    session.select(Some(uuid::Uuid::new_v4()), false);
    assert_eq!(session.selected_ids(), vec![ids[0]]);
}

#[test]
fn test_select_all_and_many() {
    let (mut session, ids) = session_with(vec![
        slot(0.0, 0.0, 10.0, 10.0),
        slot(20.0, 0.0, 10.0, 10.0),
        slot(40.0, 0.0, 10.0, 10.0),
    ]);
    session.select_all();
    assert_eq!(session.selected_ids(), ids);
    assert_eq!(session.selection().selected_id(), Some(ids[0]));

    session.select_many(&[ids[2], uuid::Uuid::new_v4(), ids[1]]);
    assert_eq!(session.selected_ids(), vec![ids[2], ids[1]]);
    assert_eq!(session.selection().selected_id(), Some(ids[2]));
}

#[test]
fn test_hit_testing_prefers_front_most_visible() {
    let (mut session, ids) = session_with(vec![
        slot(0.0, 0.0, 100.0, 100.0),
        slot(50.0, 50.0, 100.0, 100.0),
    ]);
    assert_eq!(session.element_at(75.0, 75.0), Some(ids[1]));
    assert_eq!(session.element_at(10.0, 10.0), Some(ids[0]));
    assert_eq!(session.element_at(500.0, 500.0), None);

    session.set_element_visibility(ids[1], false);
    assert_eq!(session.element_at(75.0, 75.0), Some(ids[0]));
}

#[test]
fn test_select_at_empty_space_clears() {
    let (mut session, ids) = session_with(vec![slot(0.0, 0.0, 100.0, 100.0)]);
    assert_eq!(session.select_at(50.0, 50.0, false), Some(ids[0]));
    assert_eq!(session.select_at(900.0, 900.0, false), None);
    assert!(session.selected_ids().is_empty());
}

#[test]
fn test_rotated_hit_test() {
    let (mut session, ids) = session_with(vec![slot(0.0, 40.0, 100.0, 20.0)]);
    session.rotate_element(ids[0], 90.0);
    // Now spans x 40..60, y 0..100
    assert_eq!(session.element_at(50.0, 5.0), Some(ids[0]));
    assert_eq!(session.element_at(5.0, 50.0), None);
}
