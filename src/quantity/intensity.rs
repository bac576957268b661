use std::fmt::{Display, Formatter};

/// Fractional dimmer level, kept within `0.0..=1.0`.
#[derive(Copy, Clone, Debug, Default, PartialEq, PartialOrd, serde::Serialize, serde::Deserialize)]
pub struct Intensity(f32);

impl Intensity {
    pub const OFF: Self = Self(0.0);

    /// Apply a relative adjustment, clamping the result to the valid range.
    #[must_use]
    pub fn saturating_add(self, change: f32) -> Self {
        Self((self.0 + change).clamp(0.0, 1.0))
    }

    pub const fn into_inner(self) -> f32 {
        self.0
    }
}

impl Display for Intensity {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.1}%", self.0 * 100.0)
    }
}
