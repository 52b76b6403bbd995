//! Local operator interface - range LEDs, OLED readout, board buttons.
//!
//! The pure range-banding logic lives here so it can be tested on the
//! host; the hardware-facing submodules are only built for the target.
//!
//! ## Components
//!
//! - **LEDs**: three-step bar graph of the measured distance
//! - **Display**: SSD1306 128×64 OLED via I²C showing the last reading
//! - **Buttons**: 2 tactile switches with debouncing (ON/OFF, HOLD)

#[cfg(feature = "embedded")]
pub mod buttons;
#[cfg(feature = "embedded")]
pub mod display;
#[cfg(feature = "embedded")]
pub mod leds;

use crate::config::{RANGE_FAR_CM, RANGE_MID_CM, RANGE_NEAR_CM};

/// How many range LEDs are lit for a distance band.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RangeLevel {
    /// Closer than the near threshold - everything dark.
    Near,
    /// One LED.
    Low,
    /// Two LEDs.
    Mid,
    /// Three LEDs.
    Far,
}

impl RangeLevel {
    /// Number of LEDs lit at this level.
    pub fn lit(self) -> usize {
        match self {
            RangeLevel::Near => 0,
            RangeLevel::Low => 1,
            RangeLevel::Mid => 2,
            RangeLevel::Far => 3,
        }
    }
}

/// Map a raw centimeter distance onto the LED bar.
///
/// Thresholds are always in centimeters, independent of the active
/// presentation unit.
pub fn range_level(raw_cm: u16) -> RangeLevel {
    if raw_cm < RANGE_NEAR_CM {
        RangeLevel::Near
    } else if raw_cm < RANGE_MID_CM {
        RangeLevel::Low
    } else if raw_cm < RANGE_FAR_CM {
        RangeLevel::Mid
    } else {
        RangeLevel::Far
    }
}
