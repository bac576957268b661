use std::collections::BTreeMap;

use crate::{
    core::{Timestamp, event::ControlEvent},
    quantity::intensity::Intensity,
};

/// Tracks the fixture's dimmer level and the full history of recorded levels
/// over the event clock.
#[derive(Debug, Default)]
pub struct Dimmer {
    level: Intensity,
    history: BTreeMap<Timestamp, Intensity>,
}

impl Dimmer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one control event and record the resulting level.
    ///
    /// A later event at an already-seen timestamp overwrites the recorded
    /// level, so the history never holds two samples for the same instant.
    pub fn apply(&mut self, event: ControlEvent) {
        match event {
            ControlEvent::TurnOff { at } => self.record(at, Intensity::OFF),
            ControlEvent::Delta { at, change } => {
                self.record(at, self.level.saturating_add(change));
            }
        }
    }

    fn record(&mut self, at: Timestamp, level: Intensity) {
        self.level = level;
        self.history.insert(at, level);
    }

    /// The most recently recorded level, off before any event.
    pub const fn level(&self) -> Intensity {
        self.level
    }

    /// Read-only view of the recorded `(timestamp, level)` samples.
    pub const fn history(&self) -> &BTreeMap<Timestamp, Intensity> {
        &self.history
    }
}
