use visibility::{ItemGeometry, Size, VisibilityHandle, VisibilityItem};

use crate::key::SlotMap;
use crate::{SlotKey, TrackerOptions, process_item};

/// Keeps one [`VisibilityItem`] per container slot and drives it on every pass.
///
/// This type does not hold any UI objects. Adapters call:
/// - `process` for each attached child on layout/scroll, and with `detach_event = true` when a
///   child leaves the container
/// - `on_items_inserted` / `on_items_removed` / `on_item_moved` when the data set changes, so
///   bound indexes stay in sync without recomputing visibility
#[derive(Clone, Debug)]
pub struct Tracker<S> {
    items: SlotMap<S, VisibilityItem>,
    options: TrackerOptions,
}

impl<S: SlotKey> Default for Tracker<S> {
    fn default() -> Self {
        Self::new(TrackerOptions::default())
    }
}

impl<S: SlotKey> Tracker<S> {
    pub fn new(options: TrackerOptions) -> Self {
        Self {
            items: SlotMap::new(),
            options,
        }
    }

    pub fn options(&self) -> &TrackerOptions {
        &self.options
    }

    pub fn set_options(&mut self, options: TrackerOptions) {
        vdebug!(?options, "Tracker::set_options");
        self.options = options;
    }

    /// Runs a pass for the child currently held by `slot`, bound to `index`.
    ///
    /// A slot seen for the first time gets a fresh item. A slot whose bound index differs from
    /// `index` was recycled, so its item is reset before the pass. A detach pass drops the
    /// slot's item afterwards.
    ///
    /// Returns whether the visible area or shown state changed.
    pub fn process<H: VisibilityHandle + ?Sized>(
        &mut self,
        slot: S,
        index: usize,
        geometry: ItemGeometry,
        viewport: Size,
        handle: &mut H,
        detach_event: bool,
    ) -> bool {
        if !self.options.enabled {
            return false;
        }

        if detach_event {
            let Some(mut item) = self.items.remove(&slot) else {
                return false;
            };
            rebind(&mut item, index);
            return process_item(&mut item, geometry, viewport, handle, true, &self.options);
        }

        let item = self
            .items
            .entry(slot)
            .or_insert_with(|| VisibilityItem::with_index(index));
        rebind(item, index);
        process_item(item, geometry, viewport, handle, false, &self.options)
    }

    pub fn item(&self, slot: &S) -> Option<&VisibilityItem> {
        self.items.get(slot)
    }

    /// Forgets a slot without running a pass.
    pub fn remove(&mut self, slot: &S) -> Option<VisibilityItem> {
        self.items.remove(slot)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&S, &VisibilityItem)> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// `count` items were inserted at `position`.
    pub fn on_items_inserted(&mut self, position: usize, count: usize) {
        vdebug!(position, count, "Tracker::on_items_inserted");
        let offset = signed(count);
        for item in self.items.values_mut() {
            if item.index().is_some_and(|i| i >= position) {
                item.shift_by(offset);
            }
        }
    }

    /// `count` items were removed starting at `position`.
    ///
    /// Items bound inside the removed range become unbound.
    pub fn on_items_removed(&mut self, position: usize, count: usize) {
        vdebug!(position, count, "Tracker::on_items_removed");
        let end = position.saturating_add(count);
        let offset = -signed(count);
        for item in self.items.values_mut() {
            match item.index() {
                Some(i) if i >= end => item.shift_by(offset),
                Some(i) if i >= position => item.reset(None),
                _ => {}
            }
        }
    }

    /// The item at `from` moved to `to`.
    pub fn on_item_moved(&mut self, from: usize, to: usize) {
        vdebug!(from, to, "Tracker::on_item_moved");
        if from == to {
            return;
        }
        for item in self.items.values_mut() {
            let Some(i) = item.index() else {
                continue;
            };
            if i == from {
                item.shift_by(signed(to) - signed(from));
            } else if from < to && i > from && i <= to {
                item.shift_by(-1);
            } else if to < from && i >= to && i < from {
                item.shift_by(1);
            }
        }
    }
}

fn rebind(item: &mut VisibilityItem, index: usize) {
    if item.index() != Some(index) {
        item.reset(Some(index));
    }
}

fn signed(n: usize) -> isize {
    isize::try_from(n).unwrap_or(isize::MAX)
}
