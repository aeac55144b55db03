// Example: a vertical list of fixed-height rows scrolled through a viewport.
use visibility::{
    ItemGeometry, ShownState, Size, Threshold, VisibilityChange, VisibilityHandle,
    VisibilityState,
};
use visibility_adapter::{Tracker, TrackerOptions};

const ROW_HEIGHT: u32 = 60;
const ROW_COUNT: usize = 20;
const VIEWPORT: Size = Size::new(200, 150);

struct Row(usize);

impl VisibilityHandle for Row {
    fn visibility_state_changed(&mut self, state: VisibilityState) {
        println!("  row {}: {state:?}", self.0);
    }

    fn visibility_changed(&mut self, change: VisibilityChange) {
        println!(
            "  row {}: {:.0}% visible",
            self.0, change.percent_visible_height
        );
    }
}

fn row_visible_height(index: usize, scroll_offset: u32) -> u32 {
    let top = index as u32 * ROW_HEIGHT;
    let bottom = top + ROW_HEIGHT;
    let view_bottom = scroll_offset + VIEWPORT.height;
    bottom.min(view_bottom).saturating_sub(top.max(scroll_offset))
}

fn main() {
    let options =
        TrackerOptions::default().with_partial_impression_threshold(Some(Threshold::HALF));
    // Slots are recycled: slot = index % 4.
    let mut tracker = Tracker::<usize>::new(options);
    let row = Size::new(VIEWPORT.width, ROW_HEIGHT);

    for scroll_offset in [0u32, 45, 90, 180] {
        println!("scroll_offset={scroll_offset}");
        for index in 0..ROW_COUNT {
            let visible_height = row_visible_height(index, scroll_offset);
            let slot = index % 4;
            let attached = tracker.item(&slot).and_then(|it| it.index()) == Some(index);
            if visible_height == 0 {
                if attached {
                    let geometry = ItemGeometry::clipped(row);
                    tracker.process(slot, index, geometry, VIEWPORT, &mut Row(index), true);
                }
                continue;
            }
            let visible = Size::new(row.width, visible_height);
            let geometry = ItemGeometry::new(row, Some(visible), ShownState::Visible);
            tracker.process(slot, index, geometry, VIEWPORT, &mut Row(index), false);
        }
    }

    // Two rows inserted at the top: bound indexes follow.
    tracker.on_items_inserted(0, 2);
    let mut bound: Vec<_> = tracker.iter().map(|(s, it)| (*s, it.index())).collect();
    bound.sort();
    println!("after insert: {bound:?}");
}
