use boothkit_designer::HistoryManager;

use crate::common::{element, session_with, slot, snapshot};

#[test]
fn test_record_deduplicates_against_cursor() {
    let mut history = HistoryManager::new(50);
    assert!(history.record("a".to_string()));
    assert!(!history.record("a".to_string()));
    assert!(history.record("b".to_string()));
    assert_eq!(history.len(), 2);
    assert_eq!(history.cursor(), 1);
}

#[test]
fn test_record_after_undo_discards_redo_branch() {
    let mut history = HistoryManager::new(50);
    for s in ["a", "b", "c"] {
        history.record(s.to_string());
    }
    assert_eq!(history.previous(), Some("b"));
    assert!(history.step_back());
    assert!(history.can_redo());

    history.record("d".to_string());
    assert!(!history.can_redo());
    assert_eq!(history.entries(), &["a", "b", "d"]);
}

#[test]
fn test_capacity_evicts_oldest() {
    let mut history = HistoryManager::new(50);
    for i in 0..60 {
        history.record(format!("s{}", i));
    }
    assert_eq!(history.len(), 50);
    assert_eq!(history.cursor(), 49);
    assert_eq!(history.entries()[0], "s10");
    assert_eq!(history.current(), Some("s59"));
}

#[test]
fn test_replay_suppresses_records() {
    let mut history = HistoryManager::new(50);
    history.record("a".to_string());
    history.begin_replay();
    assert!(!history.record("b".to_string()));
    history.end_replay();
    assert!(history.record("b".to_string()));
}

#[test]
fn test_undo_redo_walks_snapshots() {
    let (mut session, _) = session_with(Vec::new());
    let mut states = vec![snapshot(&session)];
    for i in 0..5 {
        session.add_text(&format!("line {}", i));
        states.push(snapshot(&session));
    }
    assert_eq!(session.document().unwrap().len(), 5);

    for expected in states.iter().rev().skip(1) {
        assert!(session.undo());
        assert_eq!(&snapshot(&session), expected);
    }
    assert!(!session.undo());
    assert!(session.document().unwrap().is_empty());

    for expected in states.iter().skip(1) {
        assert!(session.redo());
        assert_eq!(&snapshot(&session), expected);
    }
    assert!(!session.redo());
}

#[test]
fn test_undo_does_not_grow_history() {
    let (mut session, ids) = session_with(vec![slot(0.0, 0.0, 100.0, 100.0)]);
    session.move_element_by(ids[0], 10.0, 0.0);
    let len = session.history().len();

    assert!(session.undo());
    assert_eq!(session.history().len(), len);
    assert!(session.can_redo());
    assert_eq!(element(&session, ids[0]).x, 0.0);
}

#[test]
fn test_new_edit_clears_redo() {
    let (mut session, ids) = session_with(vec![slot(0.0, 0.0, 100.0, 100.0)]);
    session.move_element_by(ids[0], 10.0, 0.0);
    session.undo();
    assert!(session.can_redo());

    session.move_element_by(ids[0], 0.0, 10.0);
    assert!(!session.can_redo());
}

#[test]
fn test_session_history_is_bounded() {
    let (mut session, ids) = session_with(vec![slot(0.0, 0.0, 100.0, 100.0)]);
    for _ in 0..60 {
        session.move_element_by(ids[0], 1.0, 0.0);
    }
    assert_eq!(session.history().len(), 50);

    let mut undos = 0;
    while session.undo() {
        undos += 1;
    }
    assert_eq!(undos, 49);
    // Oldest retained state: 11 moves in
    assert_eq!(element(&session, ids[0]).x, 11.0);
}

#[test]
fn test_drag_gesture_is_one_step() {
    let (mut session, ids) = session_with(vec![slot(0.0, 0.0, 100.0, 100.0)]);
    let before = session.history().len();

    session.begin_drag();
    for _ in 0..10 {
        session.move_element_by(ids[0], 5.0, 5.0);
    }
    assert_eq!(session.history().len(), before);
    session.end_drag();
    assert_eq!(session.history().len(), before + 1);

    assert!(session.undo());
    let e = element(&session, ids[0]);
    assert_eq!((e.x, e.y), (0.0, 0.0));
}

#[test]
fn test_undo_drops_stale_selection() {
    let (mut session, _) = session_with(Vec::new());
    let id = session.add_camera().unwrap();
    assert_eq!(session.selection().selected_id(), Some(id));

    assert!(session.undo());
    assert!(session.element(id).is_none());
    assert!(session.selection().is_empty());
}
