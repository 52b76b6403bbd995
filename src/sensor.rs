//! Ultrasonic ranger owned by the acquisition task.
//!
//! Wraps the HC-SR04 driver behind the one call the worker needs: "read
//! one centimeter distance, or tell me the cycle has no sample". With
//! the `replay` feature the stored ECG trace stands in for the hardware
//! so the full pipeline runs on a bare DK.

use embassy_nrf::gpio::{Input, Output};

use crate::error::Error;

#[cfg(not(feature = "replay"))]
mod live {
    use embassy_time::{Delay, Instant};
    use hcsr04_async::{Config, DistanceUnit, Hcsr04, Now, TemperatureUnit};

    /// Clock for the driver's pulse timing, backed by the Embassy
    /// monotonic.
    pub struct EmbassyClock;

    impl Now for EmbassyClock {
        fn now_micros(&self) -> u64 {
            Instant::now().as_micros()
        }
    }

    pub type Sensor = Hcsr04<
        embassy_nrf::gpio::Output<'static>,
        embassy_nrf::gpio::Input<'static>,
        EmbassyClock,
        Delay,
    >;

    pub fn build(
        trigger: embassy_nrf::gpio::Output<'static>,
        echo: embassy_nrf::gpio::Input<'static>,
    ) -> Sensor {
        let config = Config {
            distance_unit: DistanceUnit::Centimeters,
            temperature_unit: TemperatureUnit::Celsius,
        };
        Hcsr04::new(trigger, echo, config, EmbassyClock, Delay)
    }
}

/// The meter's single signal source.
pub struct Ranger {
    #[cfg(not(feature = "replay"))]
    sensor: live::Sensor,
    #[cfg(feature = "replay")]
    trace: crate::replay::ReplaySource,
}

impl Ranger {
    #[cfg(not(feature = "replay"))]
    pub fn new(trigger: Output<'static>, echo: Input<'static>) -> Self {
        Self {
            sensor: live::build(trigger, echo),
        }
    }

    /// Replay builds keep the pin arguments so `main` wires up either
    /// variant the same way; the pins are simply parked.
    #[cfg(feature = "replay")]
    pub fn new(_trigger: Output<'static>, _echo: Input<'static>) -> Self {
        Self {
            trace: crate::replay::ReplaySource::new(&crate::replay::ECG_WAVE),
        }
    }

    /// One raw centimeter reading.
    ///
    /// A failed measurement (no echo inside the driver's timeout) is
    /// logged and reported as [`Error::SensorRead`]; the caller treats
    /// it as "no sample this cycle".
    pub async fn read_cm(&mut self) -> Result<u16, Error> {
        #[cfg(not(feature = "replay"))]
        {
            match self.sensor.measure(crate::config::SENSOR_AMBIENT_C).await {
                Ok(cm) => Ok(cm as u16),
                Err(_) => {
                    defmt::warn!("sensor: measurement failed, cycle skipped");
                    Err(Error::SensorRead)
                }
            }
        }
        #[cfg(feature = "replay")]
        {
            Ok(self.trace.next())
        }
    }
}
