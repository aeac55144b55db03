use crate::{
    ItemGeometry, ShownState, Size, Threshold, VisibilityChange, VisibilityHandle,
    VisibilityState,
};

/// Values last reported through [`VisibilityHandle::visibility_changed`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Notified {
    visible_height: u32,
    visible_width: u32,
    shown: ShownState,
}

/// Visibility state of one container slot.
///
/// A container keeps one `VisibilityItem` per attached child and reuses it as the slot is
/// recycled for different logical items (see [`VisibilityItem::reset`]). Each layout/scroll pass
/// drives it the same way:
///
/// 1. [`update`](Self::update) with the freshly measured geometry.
/// 2. If `update` returned `true`, any of the `handle_*` evaluators the container cares about.
/// 3. [`handle_changed`](Self::handle_changed) to emit the continuous measurement.
///
/// The four policies (visible, focused, partial impression, full impression) latch
/// independently; an item can be fully visible without being focused, and so on.
///
/// All operations are O(1) and allocation-free.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct VisibilityItem {
    index: Option<usize>,

    height: u32,
    width: u32,
    viewport_height: u32,
    viewport_width: u32,
    visible_height: u32,
    visible_width: u32,
    shown: ShownState,

    visible: bool,
    focused_visible: bool,
    partially_visible: bool,
    fully_visible: bool,

    last_notified: Option<Notified>,
}

impl VisibilityItem {
    /// Creates an unbound item with an empty snapshot.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_index(index: usize) -> Self {
        let mut item = Self::new();
        item.reset(Some(index));
        item
    }

    /// Refreshes the geometry snapshot.
    ///
    /// `detach_event` marks a pass triggered by the item leaving the container: the visible
    /// area is treated as zero regardless of `item.visible`.
    ///
    /// Returns `true` when the item has real layout bounds (both dimensions non-zero). Callers
    /// should skip the evaluators otherwise.
    pub fn update(&mut self, item: ItemGeometry, viewport: Size, detach_event: bool) -> bool {
        self.height = item.size.height;
        self.width = item.size.width;
        self.viewport_height = viewport.height;
        self.viewport_width = viewport.width;

        let visible = match item.visible {
            Some(visible) if !detach_event => visible,
            _ => Size::ZERO,
        };
        if visible.height > self.height || visible.width > self.width {
            vwarn!(
                index = ?self.index,
                visible_height = visible.height,
                visible_width = visible.width,
                height = self.height,
                width = self.width,
                "VisibilityItem::update: visible box exceeds item box"
            );
        }
        self.visible_height = visible.height.min(self.height);
        self.visible_width = visible.width.min(self.width);
        self.shown = item.shown;

        self.is_measured()
    }

    /// Rebinds the slot to another logical item.
    ///
    /// Clears the four policy latches and the measurement de-dup cache. Geometry is kept until
    /// the next [`update`](Self::update).
    pub fn reset(&mut self, index: Option<usize>) {
        vdebug!(from = ?self.index, to = ?index, "VisibilityItem::reset");
        self.index = index;
        self.visible = false;
        self.focused_visible = false;
        self.partially_visible = false;
        self.fully_visible = false;
        self.last_notified = None;
    }

    /// Moves the bound index by `offset` (items inserted or removed ahead of this slot).
    ///
    /// Unbound items stay unbound.
    pub fn shift_by(&mut self, offset: isize) {
        if let Some(index) = self.index.as_mut() {
            *index = index.saturating_add_signed(offset);
        }
    }

    pub fn index(&self) -> Option<usize> {
        self.index
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    pub fn viewport(&self) -> Size {
        Size::new(self.viewport_width, self.viewport_height)
    }

    pub fn visible_size(&self) -> Size {
        Size::new(self.visible_width, self.visible_height)
    }

    pub fn shown(&self) -> ShownState {
        self.shown
    }

    pub fn is_measured(&self) -> bool {
        self.height > 0 && self.width > 0
    }

    /// Last reported state of the visible/invisible policy.
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn is_focused_visible(&self) -> bool {
        self.focused_visible
    }

    pub fn is_partially_visible(&self) -> bool {
        self.partially_visible
    }

    pub fn is_fully_visible(&self) -> bool {
        self.fully_visible
    }

    /// Drawn, with at least one visible pixel.
    pub fn is_plain_visible(&self) -> bool {
        self.shown.is_drawn() && self.visible_height > 0 && self.visible_width > 0
    }

    /// Whether the item is in the focus range.
    ///
    /// An item at least as large as half the viewport is focused once it covers half the
    /// viewport. A smaller item has to be entirely visible.
    pub fn is_focus_visible(&self) -> bool {
        let half_viewport_area = self.viewport().area() / 2;
        let total_area = self.size().area();
        let visible_area = self.visible_size().area();
        self.shown.is_drawn()
            && if total_area >= half_viewport_area {
                visible_area >= half_viewport_area
            } else {
                total_area == visible_area
            }
    }

    /// Whether at least `threshold` percent of the item area is visible (inclusive).
    ///
    /// A zero threshold is the same as [`is_plain_visible`](Self::is_plain_visible). An item
    /// with zero area never reaches a non-zero threshold.
    pub fn is_partial_visible(&self, threshold: Threshold) -> bool {
        if threshold == Threshold::ZERO {
            return self.is_plain_visible();
        }

        let total_area = self.size().area();
        if total_area == 0 {
            return false;
        }
        let visible_area = self.visible_size().area();
        let visible_percent = visible_area as f64 * 100.0 / total_area as f64;
        self.shown.is_drawn() && visible_percent >= f64::from(threshold.percent())
    }

    /// Drawn and exactly 100% visible on both axes.
    pub fn is_full_visible(&self) -> bool {
        self.shown.is_drawn()
            && self.visible_height == self.height
            && self.visible_width == self.width
    }

    /// Emits [`VisibilityState::Visible`]/[`VisibilityState::Invisible`] when the plain
    /// visibility flips.
    pub fn handle_visible<H: VisibilityHandle + ?Sized>(
        &mut self,
        handle: &mut H,
        detach_event: bool,
    ) {
        let next = !detach_event && self.is_plain_visible();
        match flip(&mut self.visible, next) {
            Some(true) => self.notify(handle, VisibilityState::Visible),
            Some(false) => self.notify(handle, VisibilityState::Invisible),
            None => {}
        }
    }

    pub fn handle_focus<H: VisibilityHandle + ?Sized>(
        &mut self,
        handle: &mut H,
        detach_event: bool,
    ) {
        let next = !detach_event && self.is_focus_visible();
        match flip(&mut self.focused_visible, next) {
            Some(true) => self.notify(handle, VisibilityState::FocusedVisible),
            Some(false) => self.notify(handle, VisibilityState::UnfocusedVisible),
            None => {}
        }
    }

    pub fn handle_partial_impression<H: VisibilityHandle + ?Sized>(
        &mut self,
        handle: &mut H,
        detach_event: bool,
        threshold: Threshold,
    ) {
        let next = !detach_event && self.is_partial_visible(threshold);
        match flip(&mut self.partially_visible, next) {
            Some(true) => self.notify(handle, VisibilityState::PartialImpressionVisible),
            Some(false) => self.notify(handle, VisibilityState::PartialImpressionInvisible),
            None => {}
        }
    }

    /// Emits [`VisibilityState::FullImpressionVisible`] when the item becomes fully visible.
    ///
    /// Leaving the fully visible state re-arms the latch silently; there is no matching
    /// "left" notification.
    pub fn handle_full_impression<H: VisibilityHandle + ?Sized>(
        &mut self,
        handle: &mut H,
        detach_event: bool,
    ) {
        let next = !detach_event && self.is_full_visible();
        if flip(&mut self.fully_visible, next) == Some(true) {
            self.notify(handle, VisibilityState::FullImpressionVisible);
        }
    }

    /// Emits a [`VisibilityChange`] if the visible size or shown state changed since the last
    /// call.
    ///
    /// The de-dup cache advances even when `measurement_enabled` is `false`, so the return
    /// value always reflects a physical change.
    pub fn handle_changed<H: VisibilityHandle + ?Sized>(
        &mut self,
        handle: &mut H,
        measurement_enabled: bool,
    ) -> bool {
        let current = Notified {
            visible_height: self.visible_height,
            visible_width: self.visible_width,
            shown: self.shown,
        };
        if self.last_notified == Some(current) {
            return false;
        }

        if measurement_enabled {
            let change = self.measurement();
            vtrace!(index = ?self.index, ?change, "visibility changed");
            handle.visibility_changed(change);
        }
        self.last_notified = Some(current);
        true
    }

    /// The measurement payload for the current snapshot.
    ///
    /// All zero when the item is not drawn.
    pub fn measurement(&self) -> VisibilityChange {
        if !self.shown.is_drawn() {
            return VisibilityChange::HIDDEN;
        }
        VisibilityChange {
            percent_visible_height: percent(self.visible_height, self.height),
            percent_visible_width: percent(self.visible_width, self.width),
            visible_height: self.visible_height,
            visible_width: self.visible_width,
        }
    }

    fn notify<H: VisibilityHandle + ?Sized>(&self, handle: &mut H, state: VisibilityState) {
        vtrace!(index = ?self.index, ?state, "visibility state changed");
        handle.visibility_state_changed(state);
    }
}

/// Stores `next` into `latch`, returning it if the value flipped.
fn flip(latch: &mut bool, next: bool) -> Option<bool> {
    (core::mem::replace(latch, next) != next).then_some(next)
}

fn percent(part: u32, whole: u32) -> f32 {
    if whole == 0 {
        return 0.0;
    }
    part as f32 * 100.0 / whole as f32
}
