/// A partial-impression threshold, in percent of the item area.
///
/// Values are always within `0..=100`: [`Threshold::new`] clamps anything larger.
/// A threshold of zero means "any visible pixel".
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "u8", into = "u8"))]
pub struct Threshold(u8);

impl Threshold {
    pub const ZERO: Self = Self(0);
    pub const HALF: Self = Self(50);
    pub const FULL: Self = Self(100);

    pub fn new(percent: u8) -> Self {
        if percent > 100 {
            vwarn!(percent, "Threshold: clamping percentage above 100");
            return Self::FULL;
        }
        Self(percent)
    }

    pub const fn percent(self) -> u8 {
        self.0
    }
}

impl From<u8> for Threshold {
    fn from(percent: u8) -> Self {
        Self::new(percent)
    }
}

impl From<Threshold> for u8 {
    fn from(threshold: Threshold) -> Self {
        threshold.0
    }
}
