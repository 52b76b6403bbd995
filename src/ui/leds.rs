//! Range indicator LEDs.
//!
//! Three LEDs form a bar graph of the measured distance; the board
//! LEDs on the nRF52840-DK are active-low.

use embassy_nrf::gpio::Output;

use crate::ui::RangeLevel;

pub struct RangeLeds {
    leds: [Output<'static>; 3],
}

impl RangeLeds {
    pub fn new(led1: Output<'static>, led2: Output<'static>, led3: Output<'static>) -> Self {
        Self {
            leds: [led1, led2, led3],
        }
    }

    /// Light the first `level.lit()` LEDs and clear the rest.
    pub fn show(&mut self, level: RangeLevel) {
        let lit = level.lit();
        for (i, led) in self.leds.iter_mut().enumerate() {
            if i < lit {
                led.set_low();
            } else {
                led.set_high();
            }
        }
    }

    pub fn all_off(&mut self) {
        for led in self.leds.iter_mut() {
            led.set_high();
        }
    }
}
