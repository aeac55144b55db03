use visibility::Threshold;

/// Selects which policies a [`crate::Tracker`] evaluates on every pass.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TrackerOptions {
    /// When disabled, passes are no-ops.
    pub enabled: bool,
    /// Partial-impression threshold. `None` disables the partial-impression policy.
    pub partial_impression_threshold: Option<Threshold>,
    pub track_focus: bool,
    pub track_full_impression: bool,
    /// Whether `visibility_changed` measurements are delivered to the handle.
    ///
    /// The de-dup cache advances either way.
    pub measurement_enabled: bool,
}

impl Default for TrackerOptions {
    fn default() -> Self {
        Self {
            enabled: true,
            partial_impression_threshold: None,
            track_focus: true,
            track_full_impression: true,
            measurement_enabled: true,
        }
    }
}

impl TrackerOptions {
    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub fn with_partial_impression_threshold(mut self, threshold: Option<Threshold>) -> Self {
        self.partial_impression_threshold = threshold;
        self
    }

    pub fn with_track_focus(mut self, track_focus: bool) -> Self {
        self.track_focus = track_focus;
        self
    }

    pub fn with_track_full_impression(mut self, track_full_impression: bool) -> Self {
        self.track_full_impression = track_full_impression;
        self
    }

    pub fn with_measurement_enabled(mut self, measurement_enabled: bool) -> Self {
        self.measurement_enabled = measurement_enabled;
        self
    }
}
