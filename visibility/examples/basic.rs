// Example: drive a single item through a scroll sequence and print its notifications.
use visibility::{
    ItemGeometry, ShownState, Size, Threshold, VisibilityChange, VisibilityHandle,
    VisibilityItem, VisibilityState,
};

struct Printer;

impl VisibilityHandle for Printer {
    fn visibility_state_changed(&mut self, state: VisibilityState) {
        println!("  state: {state:?}");
    }

    fn visibility_changed(&mut self, change: VisibilityChange) {
        println!(
            "  changed: {:.0}% x {:.0}% ({}x{} px)",
            change.percent_visible_width,
            change.percent_visible_height,
            change.visible_width,
            change.visible_height
        );
    }
}

fn main() {
    let viewport = Size::new(320, 480);
    let size = Size::new(320, 200);
    let mut item = VisibilityItem::with_index(0);
    let mut handle = Printer;

    // Visible height of the item as it scrolls in, sits, and scrolls out.
    for visible_height in [0, 40, 100, 200, 200, 120, 0] {
        println!("visible_height={visible_height}");
        let visible = (visible_height > 0).then_some(Size::new(size.width, visible_height));
        let geometry = ItemGeometry::new(size, visible, ShownState::Visible);
        if !item.update(geometry, viewport, false) {
            continue;
        }
        item.handle_visible(&mut handle, false);
        item.handle_focus(&mut handle, false);
        item.handle_partial_impression(&mut handle, false, Threshold::HALF);
        item.handle_full_impression(&mut handle, false);
        item.handle_changed(&mut handle, true);
    }
}
