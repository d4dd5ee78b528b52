use touch_flow::Vector2;
use touch_flow::touch::event::{PointerAction, PointerEvent};
use touch_flow::touch::mapper::{NotificationPolicy, TouchMapper};

use crate::common::test_utils::{down, init_logger, move_one, sample, up_one};

mod common;

#[test]
fn active_points_track_downs_and_ups() {
    init_logger();
    let mapper = TouchMapper::new();

    mapper.map(&down(1, 10.0, 10.0));
    assert_eq!(mapper.active_points().len(), 1);

    mapper.map(&PointerEvent::new(
        PointerAction::PointerDown,
        1,
        vec![sample(1, 10.0, 10.0), sample(2, 50.0, 50.0)],
    ));
    assert_eq!(mapper.active_points().len(), 2);
    assert!(mapper.point(1).is_some());
    assert!(mapper.point(2).is_some());

    mapper.map(&PointerEvent::new(
        PointerAction::PointerUp,
        0,
        vec![sample(1, 10.0, 10.0), sample(2, 50.0, 50.0)],
    ));
    assert_eq!(mapper.active_points().len(), 1);
    assert!(mapper.point(1).is_none());

    mapper.map(&up_one(2, 50.0, 50.0));
    assert!(mapper.active_points().is_empty());
}

#[test]
fn first_contact_after_idle_is_primary() {
    init_logger();
    let mapper = TouchMapper::new();

    mapper.map(&down(1, 0.0, 0.0));
    mapper.map(&PointerEvent::new(
        PointerAction::PointerDown,
        1,
        vec![sample(1, 0.0, 0.0), sample(2, 5.0, 5.0)],
    ));

    let points = mapper.active_points();
    assert!(points[0].is_primary());
    assert!(!points[1].is_primary());
    assert_eq!(mapper.primary_point().map(|point| point.id()), Some(1));

    // Drain the set empty; the next burst gets a fresh primary point.
    mapper.map(&PointerEvent::new(
        PointerAction::PointerUp,
        0,
        vec![sample(1, 0.0, 0.0), sample(2, 5.0, 5.0)],
    ));
    mapper.map(&up_one(2, 5.0, 5.0));
    assert!(mapper.primary_point().is_none());

    mapper.map(&down(2, 7.0, 7.0));
    let primary = mapper.primary_point().unwrap();
    assert_eq!(primary.id(), 2);
    assert!(primary.is_primary());
}

#[test]
fn tap_lifecycle_reports_add_then_remove() {
    init_logger();
    let mapper = TouchMapper::with_policies(NotificationPolicy::Collapse, NotificationPolicy::Collapse);

    mapper.map(&down(1, 10.0, 10.0));
    let update = mapper.frame_update();
    let added = update.added().unwrap();
    assert_eq!(added.id(), 1);
    assert_eq!(added.position(), Vector2::new(10.0, 10.0));
    assert_eq!(update.active().len(), 1);

    mapper.map(&move_one(1, 20.0, 10.0));
    mapper.map(&up_one(1, 20.0, 10.0));

    let update = mapper.frame_update();
    assert!(update.added().is_none());
    let removed = update.removed().unwrap();
    assert_eq!(removed.id(), 1);
    // The batch that lifted the contact applied its position first.
    assert_eq!(removed.position(), Vector2::new(20.0, 10.0));
    assert!(update.active().is_empty());
}

#[test]
fn frame_update_is_idempotent_without_events() {
    init_logger();
    let mapper = TouchMapper::new();

    mapper.map(&down(1, 0.0, 0.0));
    mapper.map(&move_one(1, 8.0, 6.0));

    let first = mapper.frame_update();
    assert_eq!(first.active()[0].speed(), Vector2::new(8.0, 6.0));

    // No events in between: same point set, but the baseline was reset so
    // the second drain reports no further movement.
    let second = mapper.frame_update();
    assert_eq!(second.active().len(), 1);
    assert_eq!(second.active()[0].id(), 1);
    assert_eq!(second.active()[0].position(), Vector2::new(8.0, 6.0));
    assert_eq!(second.active()[0].speed(), Vector2::new(0.0, 0.0));
    assert!(second.added().is_none());
}

#[test]
fn added_point_reports_current_position_at_drain() {
    init_logger();
    let mapper = TouchMapper::new();

    mapper.map(&down(1, 10.0, 10.0));
    mapper.map(&move_one(1, 30.0, 10.0));

    let update = mapper.frame_update();
    let added = update.added().unwrap();
    assert_eq!(added.first_position(), Vector2::new(10.0, 10.0));
    assert_eq!(added.position(), Vector2::new(30.0, 10.0));
}

#[test]
fn collapse_mode_keeps_only_the_latest_add() {
    init_logger();
    let mapper = TouchMapper::with_policies(NotificationPolicy::Collapse, NotificationPolicy::Collapse);

    mapper.map(&down(1, 1.0, 1.0));
    mapper.map(&PointerEvent::new(
        PointerAction::PointerDown,
        1,
        vec![sample(1, 1.0, 1.0), sample(2, 2.0, 2.0)],
    ));

    let update = mapper.frame_update();
    assert_eq!(update.added().map(|point| point.id()), Some(2));
    assert!(mapper.frame_update().added().is_none());
}

#[test]
fn queue_mode_keeps_every_add_in_order() {
    init_logger();
    let mapper = TouchMapper::new();

    mapper.map(&down(1, 1.0, 1.0));
    mapper.map(&PointerEvent::new(
        PointerAction::PointerDown,
        1,
        vec![sample(1, 1.0, 1.0), sample(2, 2.0, 2.0)],
    ));

    assert_eq!(mapper.frame_update().added().map(|point| point.id()), Some(1));
    assert_eq!(mapper.frame_update().added().map(|point| point.id()), Some(2));
    assert!(mapper.frame_update().added().is_none());
}

#[test]
fn vanished_contact_counts_as_removed() {
    init_logger();
    let mapper = TouchMapper::new();

    mapper.map(&down(1, 1.0, 1.0));
    mapper.map(&PointerEvent::new(
        PointerAction::PointerDown,
        1,
        vec![sample(1, 1.0, 1.0), sample(2, 2.0, 2.0)],
    ));

    // The platform stopped reporting contact 1 without an explicit up.
    mapper.map(&move_one(2, 3.0, 3.0));

    assert_eq!(mapper.active_points().len(), 1);
    assert!(mapper.point(1).is_none());
}

#[test]
fn cancel_ends_every_contact_in_the_batch() {
    init_logger();
    let mapper = TouchMapper::new();

    mapper.map(&down(1, 1.0, 1.0));
    mapper.map(&PointerEvent::new(
        PointerAction::PointerDown,
        1,
        vec![sample(1, 1.0, 1.0), sample(2, 2.0, 2.0)],
    ));
    mapper.map(&PointerEvent::new(
        PointerAction::Cancel,
        0,
        vec![sample(1, 1.0, 1.0), sample(2, 2.0, 2.0)],
    ));

    assert!(mapper.active_points().is_empty());
}

#[test]
fn empty_batch_is_a_noop() {
    init_logger();
    let mapper = TouchMapper::new();

    mapper.map(&down(1, 1.0, 1.0));
    mapper.map(&PointerEvent::new(PointerAction::Move, 0, Vec::new()));

    assert_eq!(mapper.active_points().len(), 1);
}

#[test]
fn unknown_contact_updates_are_ignored() {
    init_logger();
    let mapper = TouchMapper::new();

    mapper.map(&move_one(9, 1.0, 1.0));
    mapper.map(&up_one(9, 1.0, 1.0));

    assert!(mapper.active_points().is_empty());
    let update = mapper.frame_update();
    assert!(update.added().is_none());
    assert!(update.removed().is_none());
}

#[test]
fn reused_id_is_a_new_contact() {
    init_logger();
    let mapper = TouchMapper::new();

    mapper.map(&down(1, 1.0, 1.0));
    let first = mapper.frame_update().take_added().unwrap();

    mapper.map(&up_one(1, 1.0, 1.0));
    // Creation timestamps come from a monotonic clock; give the reused id
    // a measurably later birth.
    std::thread::sleep(std::time::Duration::from_millis(2));
    mapper.map(&down(1, 9.0, 9.0));

    let second = mapper.frame_update().take_added().unwrap();
    assert_eq!(first.id(), second.id());
    assert!(first != second);
}

#[test]
fn sub_frame_tap_keeps_its_add_in_queue_mode() {
    init_logger();
    let mapper = TouchMapper::new();

    mapper.map(&down(1, 1.0, 1.0));
    mapper.map(&up_one(1, 1.0, 1.0));

    let update = mapper.frame_update();
    assert_eq!(update.added().map(|point| point.id()), Some(1));
    assert_eq!(update.removed().map(|point| point.id()), Some(1));
}

#[test]
fn sub_frame_tap_cancels_its_add_in_collapse_mode() {
    init_logger();
    let mapper = TouchMapper::with_policies(NotificationPolicy::Collapse, NotificationPolicy::Collapse);

    mapper.map(&down(1, 1.0, 1.0));
    mapper.map(&up_one(1, 1.0, 1.0));

    let update = mapper.frame_update();
    assert!(update.added().is_none());
    assert_eq!(update.removed().map(|point| point.id()), Some(1));
}

#[test]
fn flush_clears_without_notifications() {
    init_logger();
    let mapper = TouchMapper::new();

    mapper.map(&down(1, 1.0, 1.0));
    mapper.flush();

    let update = mapper.frame_update();
    assert!(update.added().is_none());
    assert!(update.removed().is_none());
    assert!(update.active().is_empty());
}
