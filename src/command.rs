//! Single-byte control protocol shared by the UART link and the board
//! buttons.
//!
//! | Byte | Action                                   |
//! |------|------------------------------------------|
//! | `O`  | start/stop measuring                     |
//! | `H`  | freeze/unfreeze the rendered value       |
//! | `I`  | switch between centimeters and inches    |
//! | `F`  | sample faster (shorter period)           |
//! | `S`  | sample slower (longer period)            |
//!
//! Anything else is dropped without an acknowledgement or an error.
//! The two physical buttons mirror `O` and `H` and dispatch through the
//! same [`apply`] path.

use crate::mode::ModeState;
use crate::period::SamplePeriod;

/// Control tokens understood by the meter.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Command {
    ToggleEnable,
    ToggleHold,
    ToggleUnit,
    Faster,
    Slower,
}

impl Command {
    /// Decode one wire byte. Unknown bytes decode to `None`.
    pub fn from_byte(byte: u8) -> Option<Self> {
        match byte {
            b'O' => Some(Self::ToggleEnable),
            b'H' => Some(Self::ToggleHold),
            b'I' => Some(Self::ToggleUnit),
            b'F' => Some(Self::Faster),
            b'S' => Some(Self::Slower),
            _ => None,
        }
    }
}

/// Outcome of applying a command to the shared control state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Applied {
    /// A mode flag changed; the next cycle picks it up.
    Mode,
    /// Measuring was just switched off. The caller must refresh the
    /// sinks so they clear immediately instead of on the next tick.
    ForceOff,
    /// The sampling period changed to the contained value (ms).
    Period(u32),
    /// The adjustment was already clamped; nothing changed.
    Unchanged,
}

/// Apply a decoded command to the shared control state.
///
/// Safe to call from any task context; only atomics are touched.
pub fn apply(cmd: Command, mode: &ModeState, period: &SamplePeriod) -> Applied {
    match cmd {
        Command::ToggleEnable => {
            if mode.toggle_enabled() {
                Applied::Mode
            } else {
                Applied::ForceOff
            }
        }
        Command::ToggleHold => {
            mode.toggle_hold();
            Applied::Mode
        }
        Command::ToggleUnit => {
            mode.toggle_unit();
            Applied::Mode
        }
        Command::Faster => match period.faster() {
            Some(ms) => Applied::Period(ms),
            None => Applied::Unchanged,
        },
        Command::Slower => match period.slower() {
            Some(ms) => Applied::Period(ms),
            None => Applied::Unchanged,
        },
    }
}
