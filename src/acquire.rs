//! Timer-paced acquisition pipeline.
//!
//! A tick generator signals the wake latch once per sampling period;
//! the worker is the only code that touches the sensor and the output
//! sinks. Control contexts (buttons, UART reader) flip atomics and, at
//! most, nudge the same latch - they never perform pipeline I/O.

use defmt::{debug, info};
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::signal::Signal;
use embassy_time::{Duration, Timer};

use crate::cycle::plan_cycle;
use crate::mode::ModeState;
use crate::period::SamplePeriod;
use crate::sensor::Ranger;
use crate::serial::{self, TxFrame};
use crate::ui::display::{self, Oled};
use crate::ui::leds::RangeLeds;

/// Single-slot wake latch between the tick generator and the worker.
///
/// Multiple signals before the worker drains it coalesce into one
/// pending wake (at-least-one, not one-per-fire). Cycle work must stay
/// well under the minimum sampling period or fires are silently
/// dropped.
static SAMPLE_TICK: Signal<CriticalSectionRawMutex, ()> = Signal::new();

/// Wake the worker outside the timer cadence.
///
/// Used when measuring is switched off, so the sinks clear immediately
/// instead of waiting for the next fire. Non-blocking, callable from
/// any context.
pub fn request_refresh() {
    SAMPLE_TICK.signal(());
}

/// Fire the wake latch once per sampling period.
///
/// The period is re-read before every wait, so faster/slower commands
/// take effect on the next fire while the wait already in flight keeps
/// its old duration. This task performs no I/O. Spawn the worker
/// first - the latch holds one pending wake, so nothing is lost while
/// it parks.
pub async fn ticker_task(period: &'static SamplePeriod) -> ! {
    info!("tick generator started at {} ms", period.millis());

    loop {
        Timer::after(Duration::from_millis(period.millis() as u64)).await;
        SAMPLE_TICK.signal(());
    }
}

/// Wait/cycle loop of the meter.
///
/// Blocks on the wake latch, then runs one bounded cycle: snapshot the
/// mode flags, sample if measuring, push the report line to the serial
/// queue, and update display and LEDs unless held. Runs for the life
/// of the board.
pub async fn worker_task(
    mut ranger: Ranger,
    mut leds: RangeLeds,
    mut oled: Oled,
    mode: &'static ModeState,
) -> ! {
    info!("acquisition task started");

    // Whether the off state is already rendered, so a disabled meter
    // does not redraw on every wake.
    let mut sinks_cleared = false;

    loop {
        SAMPLE_TICK.wait().await;

        let snapshot = mode.snapshot();
        if !snapshot.enabled {
            if !sinks_cleared {
                leds.all_off();
                display::draw_off(&mut oled);
                sinks_cleared = true;
            }
            continue;
        }
        sinks_cleared = false;

        let raw_cm = ranger.read_cm().await.ok();
        let outcome = plan_cycle(snapshot, raw_cm);

        if let Some(line) = &outcome.transmit {
            let mut frame = TxFrame::new();
            let _ = frame.extend_from_slice(line.as_bytes());
            let _ = serial::send_frame(frame);
        }

        if let Some(shown) = outcome.show {
            debug!("cycle: {} {} (level {})", shown.value, shown.unit, shown.level);
            leds.show(shown.level);
            display::draw_reading(&mut oled, shown.value, shown.unit);
        }
    }
}
