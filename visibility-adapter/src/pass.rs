use visibility::{ItemGeometry, Size, VisibilityHandle, VisibilityItem};

use crate::TrackerOptions;

/// Runs one recomputation pass for a single item.
///
/// Order: `update`, then (only if the item is measured) the visible, focus, partial-impression
/// and full-impression evaluators enabled by `options`, then `handle_changed`.
///
/// Returns whether the visible area or shown state changed since the last pass.
pub fn process_item<H: VisibilityHandle + ?Sized>(
    item: &mut VisibilityItem,
    geometry: ItemGeometry,
    viewport: Size,
    handle: &mut H,
    detach_event: bool,
    options: &TrackerOptions,
) -> bool {
    if !options.enabled {
        return false;
    }
    if !item.update(geometry, viewport, detach_event) {
        vtrace!(index = ?item.index(), "process_item: item not measured yet");
        return false;
    }

    item.handle_visible(handle, detach_event);
    if options.track_focus {
        item.handle_focus(handle, detach_event);
    }
    if let Some(threshold) = options.partial_impression_threshold {
        item.handle_partial_impression(handle, detach_event, threshold);
    }
    if options.track_full_impression {
        item.handle_full_impression(handle, detach_event);
    }
    item.handle_changed(handle, options.measurement_enabled)
}
