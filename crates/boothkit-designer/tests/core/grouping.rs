use boothkit_designer::geometry::union_bounds;
use boothkit_designer::{EditorSession, Element, ElementId};

use crate::common::{element, session_with, slot, EPS};

fn grouped_pair() -> (EditorSession, ElementId, ElementId, ElementId) {
    let (mut session, ids) = session_with(vec![
        slot(100.0, 100.0, 100.0, 50.0),
        slot(300.0, 200.0, 50.0, 100.0),
    ]);
    session.select_many(&ids);
    let group = session.group().expect("grouped");
    (session, group, ids[0], ids[1])
}

fn assert_box_is_padded_union(session: &EditorSession, group: ElementId, padding: f64) {
    let g = element(session, group);
    let children = g.group_children().unwrap().to_vec();
    let union = union_bounds(
        children
            .iter()
            .map(|id| element(session, *id))
            .filter(|c| c.visible)
            .map(|c| c.bounds()),
    )
    .unwrap()
    .padded(padding);
    assert!((g.x - union.min_x).abs() < EPS);
    assert!((g.y - union.min_y).abs() < EPS);
    assert!((g.width - union.width()).abs() < EPS);
    assert!((g.height - union.height()).abs() < EPS);
}

#[test]
fn test_group_requires_two_ungrouped_elements() {
    let (mut session, ids) = session_with(vec![
        slot(0.0, 0.0, 10.0, 10.0),
        slot(20.0, 0.0, 10.0, 10.0),
        slot(40.0, 0.0, 10.0, 10.0),
    ]);
    session.select(Some(ids[0]), false);
    assert!(!session.can_group());
    assert!(session.group().is_none());

    session.select_many(&[ids[0], ids[1]]);
    assert!(session.can_group());
    let group = session.group().unwrap();

    // Already grouped members cannot be grouped again
    session.select_many(&[ids[1], ids[2]]);
    assert!(!session.can_group());
    // Nor can a group itself
    session.select_many(&[group, ids[2]]);
    assert!(!session.can_group());
}

#[test]
fn test_group_creation() {
    let (session, group, a, b) = grouped_pair();
    let g = element(&session, group);

    assert_eq!(g.group_children().unwrap(), &[a, b]);
    assert_eq!(session.selected_ids(), vec![group]);
    assert_eq!(session.document().unwrap().elements().last().unwrap().id, group);
    assert_eq!(session.parent_group_of(a), Some(group));
    // Initial box is the unpadded union
    assert_eq!((g.x, g.y, g.width, g.height), (100.0, 100.0, 250.0, 200.0));
    assert!(matches!(&g.kind, boothkit_designer::ElementKind::Group(data) if data.name == "Group 1"));
}

#[test]
fn test_ungroup_selects_children() {
    let (mut session, group, a, b) = grouped_pair();
    assert!(session.can_ungroup());
    assert!(session.ungroup());

    assert!(session.element(group).is_none());
    assert_eq!(session.selected_ids(), vec![a, b]);
    assert_eq!(session.parent_group_of(a), None);
    assert!(!session.can_ungroup());
}

#[test]
fn test_child_edit_refreshes_group_box() {
    let (mut session, group, a, b) = grouped_pair();
    let padding = session.settings().group_padding;

    session.update_element_position(a, 0.0, 0.0);
    assert_box_is_padded_union(&session, group, padding);

    session.update_element_size(b, 300.0, 400.0);
    assert_box_is_padded_union(&session, group, padding);

    session.set_element_visibility(b, false);
    assert_box_is_padded_union(&session, group, padding);
}

#[test]
fn test_group_moves_rigidly() {
    let (mut session, group, a, b) = grouped_pair();
    let before: Vec<Element> = [group, a, b].iter().map(|id| element(&session, *id)).collect();

    assert!(session.move_element_by(group, 30.0, -40.0));

    for old in &before {
        let new = element(&session, old.id);
        assert_eq!((new.x, new.y), (old.x + 30.0, old.y - 40.0));
        assert_eq!((new.width, new.height), (old.width, old.height));
    }
}

#[test]
fn test_group_resize_scales_children_about_center() {
    let (mut session, ids) = session_with(vec![
        slot(0.0, 0.0, 100.0, 100.0),
        slot(200.0, 0.0, 100.0, 100.0),
    ]);
    session.select_many(&ids);
    let group = session.group().unwrap();

    assert!(session.update_element_size(group, 600.0, 200.0));

    let a = element(&session, ids[0]);
    let b = element(&session, ids[1]);
    assert_eq!((a.x, a.y, a.width, a.height), (-150.0, -50.0, 200.0, 200.0));
    assert_eq!((b.x, b.y, b.width, b.height), (250.0, -50.0, 200.0, 200.0));
    assert_box_is_padded_union(&session, group, session.settings().group_padding);
}

#[test]
fn test_group_is_undoable() {
    let (mut session, group, a, _) = grouped_pair();
    assert!(session.undo());
    assert!(session.element(group).is_none());
    assert!(session.element(a).is_some());
    assert!(session.redo());
    assert!(session.element(group).is_some());
}

#[test]
fn test_group_resize_within_tolerance_is_ignored() {
    let (mut session, group, a, b) = grouped_pair();
    let before: Vec<Element> = [group, a, b].iter().map(|id| element(&session, *id)).collect();
    let history = session.history().len();

    // 250 -> 251 is a 0.4% change
    assert!(!session.update_element_size(group, 251.0, 200.0));

    for old in &before {
        assert_eq!(&element(&session, old.id), old);
    }
    assert_eq!(session.history().len(), history);
}
