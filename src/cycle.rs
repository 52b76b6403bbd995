//! Per-cycle decision logic of the acquisition task.
//!
//! Pure counterpart of the worker loop in `acquire`: given a snapshot
//! of the mode flags and one raw reading, decide what (if anything) is
//! transmitted and what (if anything) is rendered. Transmission happens
//! whenever measuring is enabled, independent of hold; the visual sinks
//! are only updated when not held.

use heapless::String;

use crate::mode::{ModeSnapshot, Unit};
use crate::report::{format_report, REPORT_MAX_LEN};
use crate::ui::{range_level, RangeLevel};

/// A reading prepared for the visual sinks.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ShownReading {
    /// Value converted into the active unit.
    pub value: u16,
    pub unit: Unit,
    /// LED bar level, derived from the raw centimeter distance.
    pub level: RangeLevel,
}

/// What one accepted tick turns into.
#[derive(Debug, PartialEq, Eq, Default)]
pub struct CycleOutcome {
    /// Line for the serial link.
    pub transmit: Option<String<REPORT_MAX_LEN>>,
    /// New value for display and LEDs; absent while held.
    pub show: Option<ShownReading>,
}

impl CycleOutcome {
    /// Nothing to transmit, nothing to render.
    pub fn is_empty(&self) -> bool {
        self.transmit.is_none() && self.show.is_none()
    }
}

/// Turn one raw centimeter reading into the cycle's outputs.
///
/// `raw_cm == None` (failed read) produces an empty outcome: the cycle
/// degrades to "do nothing" rather than surfacing an error. A disabled
/// meter also produces an empty outcome - the caller never samples in
/// that case, but the guard keeps the function total.
pub fn plan_cycle(snapshot: ModeSnapshot, raw_cm: Option<u16>) -> CycleOutcome {
    if !snapshot.enabled {
        return CycleOutcome::default();
    }
    let Some(raw_cm) = raw_cm else {
        return CycleOutcome::default();
    };

    let value = snapshot.unit.convert(raw_cm);
    let transmit = Some(format_report(value, snapshot.unit));
    let show = (!snapshot.hold).then(|| ShownReading {
        value,
        unit: snapshot.unit,
        level: range_level(raw_cm),
    });

    CycleOutcome { transmit, show }
}
