/// A pixel box (width × height).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Size {
    pub width: u32,
    pub height: u32,
}

impl Size {
    pub const ZERO: Self = Self {
        width: 0,
        height: 0,
    };

    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Area in square pixels, widened so it cannot overflow.
    pub const fn area(&self) -> u64 {
        self.width as u64 * self.height as u64
    }

    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

/// Drawing state of the underlying element.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ShownState {
    /// Actively drawn.
    Visible,
    /// Hidden but still occupying layout space.
    Invisible,
    /// Removed from layout.
    #[default]
    Gone,
}

impl ShownState {
    pub const fn is_drawn(self) -> bool {
        matches!(self, Self::Visible)
    }
}

/// The per-pass geometry of a tracked item, as measured by the container.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemGeometry {
    /// The item's own box.
    pub size: Size,
    /// Intersection of the item box with the container's visible region.
    ///
    /// `None` when the intersection did not produce a drawn rectangle (e.g. the item is fully
    /// clipped out).
    pub visible: Option<Size>,
    pub shown: ShownState,
}

impl ItemGeometry {
    pub const fn new(size: Size, visible: Option<Size>, shown: ShownState) -> Self {
        Self {
            size,
            visible,
            shown,
        }
    }

    /// A drawn item that is entirely inside the visible region.
    pub const fn fully_visible(size: Size) -> Self {
        Self::new(size, Some(size), ShownState::Visible)
    }

    /// A drawn item with no visible intersection.
    pub const fn clipped(size: Size) -> Self {
        Self::new(size, None, ShownState::Visible)
    }
}

/// Discrete visibility transitions delivered to a [`crate::VisibilityHandle`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum VisibilityState {
    /// At least one pixel of the item became visible.
    Visible,
    /// The item stopped having any visible pixel.
    Invisible,
    /// The item entered the focus range.
    FocusedVisible,
    /// The item left the focus range.
    UnfocusedVisible,
    /// The visible area reached the partial-impression threshold.
    PartialImpressionVisible,
    /// The visible area dropped below the partial-impression threshold.
    PartialImpressionInvisible,
    /// The item became 100% visible.
    FullImpressionVisible,
}

/// Continuous visibility measurement delivered to a [`crate::VisibilityHandle`].
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VisibilityChange {
    /// Visible height as a percentage (0.0..=100.0) of the item height.
    pub percent_visible_height: f32,
    /// Visible width as a percentage (0.0..=100.0) of the item width.
    pub percent_visible_width: f32,
    pub visible_height: u32,
    pub visible_width: u32,
}

impl VisibilityChange {
    pub const HIDDEN: Self = Self {
        percent_visible_height: 0.0,
        percent_visible_width: 0.0,
        visible_height: 0,
        visible_width: 0,
    };
}
