//! Shared measurement mode flags.
//!
//! Mutated from button and UART command contexts, read once per cycle
//! by the acquisition task. Each flag lives in its own single-word
//! atomic, so a reader always sees a fully written value; there is no
//! linearizability across flags - a cycle may observe `enabled` from
//! after a toggle and `hold` from before a concurrent one. Each flag's
//! effect is well-defined on its own, so that is acceptable.

use core::sync::atomic::{AtomicBool, AtomicU8, Ordering};

/// Measurement unit for rendered and transmitted readings.
///
/// Affects only how a raw centimeter reading is converted before
/// presentation, never the measurement itself.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Unit {
    Centimeters = 0,
    Inches = 1,
}

impl Unit {
    fn from_u8(raw: u8) -> Self {
        if raw == Unit::Centimeters as u8 {
            Unit::Centimeters
        } else {
            Unit::Inches
        }
    }

    /// Convert a raw centimeter reading into this unit (1 in = 2.54 cm,
    /// truncated to whole units like the sensor's own inch mode).
    pub fn convert(self, raw_cm: u16) -> u16 {
        match self {
            Unit::Centimeters => raw_cm,
            Unit::Inches => ((raw_cm as u32 * 100) / 254) as u16,
        }
    }

    /// Suffix appended to transmitted and displayed values.
    pub fn suffix(self) -> &'static str {
        match self {
            Unit::Centimeters => "cm",
            Unit::Inches => "in",
        }
    }
}

/// Process-wide measurement mode flags.
pub struct ModeState {
    enabled: AtomicBool,
    hold: AtomicBool,
    unit: AtomicU8,
}

/// Copy of the flags taken at the start of a cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ModeSnapshot {
    /// Measuring is active; when false the sinks are forced off and no
    /// sampling occurs.
    pub enabled: bool,
    /// The rendered value is frozen; transmission is unaffected.
    pub hold: bool,
    /// Active presentation unit.
    pub unit: Unit,
}

impl ModeState {
    /// Boot defaults: measuring, not held, centimeters.
    pub const fn new() -> Self {
        Self {
            enabled: AtomicBool::new(true),
            hold: AtomicBool::new(false),
            unit: AtomicU8::new(Unit::Centimeters as u8),
        }
    }

    /// Flip the measuring flag; returns the new value.
    pub fn toggle_enabled(&self) -> bool {
        !self.enabled.fetch_xor(true, Ordering::Relaxed)
    }

    /// Flip the hold flag; returns the new value.
    pub fn toggle_hold(&self) -> bool {
        !self.hold.fetch_xor(true, Ordering::Relaxed)
    }

    /// Switch to the other unit; returns the new unit.
    pub fn toggle_unit(&self) -> Unit {
        Unit::from_u8(self.unit.fetch_xor(1, Ordering::Relaxed) ^ 1)
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled.load(Ordering::Relaxed)
    }

    /// One relaxed load per flag.
    pub fn snapshot(&self) -> ModeSnapshot {
        ModeSnapshot {
            enabled: self.enabled.load(Ordering::Relaxed),
            hold: self.hold.load(Ordering::Relaxed),
            unit: Unit::from_u8(self.unit.load(Ordering::Relaxed)),
        }
    }
}

impl Default for ModeState {
    fn default() -> Self {
        Self::new()
    }
}
