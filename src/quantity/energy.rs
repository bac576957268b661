use std::fmt::{Debug, Display, Formatter};

use derive_more::{Add, AddAssign, Sum};

/// Accumulated energy in Watt-hours.
#[derive(Copy, Clone, PartialEq, PartialOrd, Add, AddAssign, Sum, serde::Serialize, serde::Deserialize)]
pub struct WattHours(pub f32);

impl WattHours {
    pub const ZERO: Self = Self(0.0);
}

impl Display for WattHours {
    /// Render with up to three fractional digits, trailing zeros trimmed.
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let rounded = format!("{:.3}", self.0);
        let trimmed = rounded.trim_end_matches('0').trim_end_matches('.');
        write!(f, "{trimmed} Wh")
    }
}

impl Debug for WattHours {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Debug::fmt(&self.0, f)?;
        write!(f, "Wh")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_trims_trailing_zeros() {
        assert_eq!(WattHours(5.625).to_string(), "5.625 Wh");
        assert_eq!(WattHours(5.0).to_string(), "5 Wh");
        assert_eq!(WattHours(2.5).to_string(), "2.5 Wh");
        assert_eq!(WattHours::ZERO.to_string(), "0 Wh");
    }

    #[test]
    fn test_display_rounds_to_three_digits() {
        assert_eq!(WattHours(0.000_1).to_string(), "0 Wh");
        assert_eq!(WattHours(1.234_567).to_string(), "1.235 Wh");
    }
}
