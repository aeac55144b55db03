use crate::{VisibilityChange, VisibilityState};

/// The receiving side of visibility notifications (typically the per-item view holder).
///
/// The tracker depends only on this trait and never on a concrete rendering object.
pub trait VisibilityHandle {
    /// Called once per discrete transition.
    fn visibility_state_changed(&mut self, state: VisibilityState);

    /// Called when the visible area changed since the last measurement.
    fn visibility_changed(&mut self, change: VisibilityChange);
}

impl<H: VisibilityHandle + ?Sized> VisibilityHandle for &mut H {
    fn visibility_state_changed(&mut self, state: VisibilityState) {
        (**self).visibility_state_changed(state);
    }

    fn visibility_changed(&mut self, change: VisibilityChange) {
        (**self).visibility_changed(change);
    }
}
