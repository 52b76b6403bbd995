//! Sampling period shared between command contexts and the tick generator.

use core::sync::atomic::{AtomicU32, Ordering};

use crate::config::{PERIOD_DEFAULT_MS, PERIOD_MAX_MS, PERIOD_MIN_MS, PERIOD_STEP_MS};

/// Current sampling period in milliseconds, always inside
/// `[PERIOD_MIN_MS, PERIOD_MAX_MS]`.
///
/// The tick generator re-reads the period before every wait, so a store
/// here reprograms the cadence for the next fire without touching the
/// wait already in flight.
pub struct SamplePeriod(AtomicU32);

impl SamplePeriod {
    pub const fn new() -> Self {
        Self(AtomicU32::new(PERIOD_DEFAULT_MS))
    }

    pub fn millis(&self) -> u32 {
        self.0.load(Ordering::Relaxed)
    }

    /// Shorten the period by one step. Returns the new period, or
    /// `None` when already at the minimum (a silent no-op, not an
    /// error).
    pub fn faster(&self) -> Option<u32> {
        self.step(-(PERIOD_STEP_MS as i64))
    }

    /// Lengthen the period by one step, saturating at the maximum.
    pub fn slower(&self) -> Option<u32> {
        self.step(PERIOD_STEP_MS as i64)
    }

    fn step(&self, delta: i64) -> Option<u32> {
        let adjusted = |cur: u32| {
            (cur as i64 + delta).clamp(PERIOD_MIN_MS as i64, PERIOD_MAX_MS as i64) as u32
        };
        self.0
            .fetch_update(Ordering::Relaxed, Ordering::Relaxed, |cur| {
                let next = adjusted(cur);
                (next != cur).then_some(next)
            })
            .ok()
            .map(adjusted)
    }
}

impl Default for SamplePeriod {
    fn default() -> Self {
        Self::new()
    }
}
