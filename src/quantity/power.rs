use std::ops::Mul;

use crate::quantity::{energy::WattHours, intensity::Intensity, time::Hours};

quantity!(Watts, "W");

impl Mul<Intensity> for Watts {
    type Output = Self;

    /// Scale the full-intensity draw down to the given dimmer level.
    fn mul(self, level: Intensity) -> Self::Output {
        Self(self.0 * level.into_inner())
    }
}

impl Mul<Hours> for Watts {
    type Output = WattHours;

    fn mul(self, hours: Hours) -> Self::Output {
        WattHours(self.0 * hours.0)
    }
}
