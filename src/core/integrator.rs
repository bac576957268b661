use std::{collections::BTreeMap, iter::once};

use itertools::Itertools;

use crate::{
    core::{Timestamp, interval::Interval},
    quantity::{energy::WattHours, intensity::Intensity, power::Watts, time::Hours},
};

/// Integrate the fixture's power draw over the closed query interval.
///
/// The history describes a right-continuous step function: each recorded
/// level holds from its own timestamp until the next sample. Time before the
/// first sample contributes nothing. The walk starts at the latest sample at
/// or before `interval.start` (the anchor), so a segment opened by an anchor
/// that lies before the interval is accounted from the anchor's own
/// timestamp. An inverted interval contains no time and yields zero.
pub fn energy_over(
    history: &BTreeMap<Timestamp, Intensity>,
    interval: Interval,
    full_power: Watts,
) -> WattHours {
    if interval.is_inverted() {
        return WattHours::ZERO;
    }
    let anchor = history.range(..=interval.start).next_back();
    anchor
        .into_iter()
        .chain(history.range(interval.start..=interval.end))
        .map(|(at, level)| (*at, *level))
        // The terminal pseudo-sample closes the tail segment;
        // its own level never contributes.
        .chain(once((interval.end, Intensity::OFF)))
        .tuple_windows()
        .map(|((from, level), (to, _))| full_power * level * Hours::from_seconds(to - from))
        .sum()
}
