//! GPIO button input with async debouncing.
//!
//! Two physical buttons (active-low with internal pull-up):
//!   - ON/OFF - start/stop measuring
//!   - HOLD   - freeze the rendered value
//!
//! Each button mirrors one UART command token: the press is debounced
//! and dispatched through the same `command::apply` path the serial
//! reader uses.

use defmt::info;
use embassy_nrf::gpio::{AnyPin, Input, Pull};
use embassy_time::{Duration, Timer};

use crate::acquire;
use crate::command::{self, Applied, Command};
use crate::config::BUTTON_DEBOUNCE_MS;
use crate::mode::ModeState;
use crate::period::SamplePeriod;

/// Run a single button loop.
///
/// Waits for the pin to go low (pressed), debounces, applies the bound
/// command, then waits for release before repeating.
pub async fn button_task(
    pin: AnyPin,
    cmd: Command,
    mode: &'static ModeState,
    period: &'static SamplePeriod,
) -> ! {
    let mut btn = Input::new(pin, Pull::Up);

    loop {
        // Wait for falling edge (button press, active-low).
        btn.wait_for_falling_edge().await;

        // Debounce: wait and re-check.
        Timer::after(Duration::from_millis(BUTTON_DEBOUNCE_MS)).await;

        if btn.is_low() {
            info!("button: {}", cmd);
            if let Applied::ForceOff = command::apply(cmd, mode, period) {
                // Sinks clear immediately, not on the next tick.
                acquire::request_refresh();
            }

            // Wait for release to avoid repeat triggers.
            btn.wait_for_rising_edge().await;
            Timer::after(Duration::from_millis(BUTTON_DEBOUNCE_MS)).await;
        }
    }
}
