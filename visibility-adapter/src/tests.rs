use crate::*;

use std::vec::Vec;
use visibility::{
    ItemGeometry, ShownState, Size, Threshold, VisibilityChange, VisibilityHandle,
    VisibilityItem, VisibilityState,
};

#[derive(Debug, Default)]
struct Recorder {
    states: Vec<VisibilityState>,
    changes: Vec<VisibilityChange>,
}

impl VisibilityHandle for Recorder {
    fn visibility_state_changed(&mut self, state: VisibilityState) {
        self.states.push(state);
    }

    fn visibility_changed(&mut self, change: VisibilityChange) {
        self.changes.push(change);
    }
}

const VIEWPORT: Size = Size::new(100, 100);
const ROW: Size = Size::new(100, 40);

fn shown(visible_height: u32) -> ItemGeometry {
    let visible = (visible_height > 0).then_some(Size::new(ROW.width, visible_height));
    ItemGeometry::new(ROW, visible, ShownState::Visible)
}

fn bound(tracker: &Tracker<u32>) -> Vec<(u32, Option<usize>)> {
    let mut out: Vec<_> = tracker.iter().map(|(s, it)| (*s, it.index())).collect();
    out.sort();
    out
}

#[test]
fn process_item_runs_enabled_policies_in_order() {
    let options =
        TrackerOptions::default().with_partial_impression_threshold(Some(Threshold::HALF));
    let mut item = VisibilityItem::with_index(0);
    let mut h = Recorder::default();

    assert!(process_item(&mut item, shown(40), VIEWPORT, &mut h, false, &options));
    assert_eq!(
        h.states,
        [
            VisibilityState::Visible,
            VisibilityState::FocusedVisible,
            VisibilityState::PartialImpressionVisible,
            VisibilityState::FullImpressionVisible,
        ]
    );
    assert_eq!(h.changes.len(), 1);

    assert!(!process_item(&mut item, shown(40), VIEWPORT, &mut h, false, &options));
    assert_eq!(h.states.len(), 4);
    assert_eq!(h.changes.len(), 1);
}

#[test]
fn process_item_skips_disabled_policies() {
    let options = TrackerOptions::default()
        .with_track_focus(false)
        .with_track_full_impression(false)
        .with_measurement_enabled(false);
    let mut item = VisibilityItem::with_index(0);
    let mut h = Recorder::default();

    assert!(process_item(&mut item, shown(40), VIEWPORT, &mut h, false, &options));
    assert_eq!(h.states, [VisibilityState::Visible]);
    assert!(h.changes.is_empty());
    assert!(!item.is_focused_visible());
    assert!(!item.is_partially_visible());
}

#[test]
fn process_item_skips_unmeasured_items() {
    let mut item = VisibilityItem::with_index(0);
    let mut h = Recorder::default();
    let geometry = ItemGeometry::fully_visible(Size::new(100, 0));

    assert!(!process_item(
        &mut item,
        geometry,
        VIEWPORT,
        &mut h,
        false,
        &TrackerOptions::default()
    ));
    assert!(h.states.is_empty());
    assert!(h.changes.is_empty());
}

#[test]
fn disabled_tracker_is_a_no_op() {
    let mut tracker = Tracker::<u32>::new(TrackerOptions::default().with_enabled(false));
    let mut h = Recorder::default();
    assert!(!tracker.process(1, 0, shown(40), VIEWPORT, &mut h, false));
    assert!(tracker.is_empty());
    assert!(h.states.is_empty());
}

#[test]
fn tracker_binds_new_slots_and_dedups_passes() {
    let mut tracker = Tracker::<u32>::default();
    let mut h = Recorder::default();

    assert!(tracker.process(1, 5, shown(20), VIEWPORT, &mut h, false));
    assert_eq!(tracker.len(), 1);
    assert_eq!(tracker.item(&1).and_then(VisibilityItem::index), Some(5));
    assert_eq!(h.states, [VisibilityState::Visible]);

    assert!(!tracker.process(1, 5, shown(20), VIEWPORT, &mut h, false));
    assert_eq!(h.states.len(), 1);

    assert!(tracker.process(1, 5, shown(40), VIEWPORT, &mut h, false));
    assert_eq!(
        h.states,
        [
            VisibilityState::Visible,
            VisibilityState::FocusedVisible,
            VisibilityState::FullImpressionVisible,
        ]
    );
}

#[test]
fn recycled_slot_is_reset_for_the_new_index() {
    let mut tracker = Tracker::<u32>::default();
    let mut h = Recorder::default();

    tracker.process(1, 0, shown(40), VIEWPORT, &mut h, false);
    h.states.clear();
    h.changes.clear();

    // Same slot, same geometry, different logical item: notifications start over.
    assert!(tracker.process(1, 9, shown(40), VIEWPORT, &mut h, false));
    assert_eq!(tracker.item(&1).and_then(VisibilityItem::index), Some(9));
    assert_eq!(h.states.len(), 3);
    assert_eq!(h.changes.len(), 1);
}

#[test]
fn detach_pass_reports_leaving_and_drops_the_slot() {
    let mut tracker = Tracker::<u32>::default();
    let mut h = Recorder::default();

    tracker.process(1, 0, shown(40), VIEWPORT, &mut h, false);
    h.states.clear();

    assert!(tracker.process(1, 0, shown(40), VIEWPORT, &mut h, true));
    assert_eq!(
        h.states,
        [VisibilityState::Invisible, VisibilityState::UnfocusedVisible]
    );
    assert_eq!(h.changes.last().map(|c| c.visible_height), Some(0));
    assert!(tracker.item(&1).is_none());

    // Unknown slot: nothing to report.
    assert!(!tracker.process(1, 0, shown(40), VIEWPORT, &mut h, true));
}

#[test]
fn inserted_items_shift_following_indexes() {
    let mut tracker = Tracker::<u32>::default();
    let mut h = Recorder::default();
    for slot in 0..4u32 {
        tracker.process(slot, slot as usize, shown(10), VIEWPORT, &mut h, false);
    }

    tracker.on_items_inserted(2, 3);
    assert_eq!(
        bound(&tracker),
        [(0, Some(0)), (1, Some(1)), (2, Some(5)), (3, Some(6))]
    );
}

#[test]
fn removed_items_unbind_and_shift() {
    let mut tracker = Tracker::<u32>::default();
    let mut h = Recorder::default();
    for slot in 0..5u32 {
        tracker.process(slot, slot as usize, shown(10), VIEWPORT, &mut h, false);
    }

    tracker.on_items_removed(1, 2);
    assert_eq!(
        bound(&tracker),
        [
            (0, Some(0)),
            (1, None),
            (2, None),
            (3, Some(1)),
            (4, Some(2)),
        ]
    );
    assert!(!tracker.item(&1).is_some_and(VisibilityItem::is_visible));
}

#[test]
fn moved_item_shifts_the_items_in_between() {
    let mut tracker = Tracker::<u32>::default();
    let mut h = Recorder::default();
    for slot in 0..5u32 {
        tracker.process(slot, slot as usize, shown(10), VIEWPORT, &mut h, false);
    }

    tracker.on_item_moved(1, 3);
    assert_eq!(
        bound(&tracker),
        [
            (0, Some(0)),
            (1, Some(3)),
            (2, Some(1)),
            (3, Some(2)),
            (4, Some(4)),
        ]
    );

    tracker.on_item_moved(3, 1);
    assert_eq!(
        bound(&tracker),
        [
            (0, Some(0)),
            (1, Some(1)),
            (2, Some(2)),
            (3, Some(3)),
            (4, Some(4)),
        ]
    );
}

#[test]
fn index_shifts_keep_visibility_state() {
    let mut tracker = Tracker::<u32>::default();
    let mut h = Recorder::default();
    tracker.process(7, 3, shown(40), VIEWPORT, &mut h, false);
    h.states.clear();

    tracker.on_items_inserted(0, 2);
    // Bound index already matches: no reset, no repeated notifications.
    assert!(!tracker.process(7, 5, shown(40), VIEWPORT, &mut h, false));
    assert!(h.states.is_empty());
    assert!(tracker.item(&7).is_some_and(VisibilityItem::is_fully_visible));
}

#[test]
fn clear_and_remove_forget_slots() {
    let mut tracker = Tracker::<u32>::default();
    let mut h = Recorder::default();
    tracker.process(1, 0, shown(10), VIEWPORT, &mut h, false);
    tracker.process(2, 1, shown(10), VIEWPORT, &mut h, false);

    assert_eq!(tracker.remove(&1).and_then(|it| it.index()), Some(0));
    assert_eq!(tracker.len(), 1);
    tracker.clear();
    assert!(tracker.is_empty());
}
