//! Host-testable library interface for distmeter.
//!
//! The control and cycle logic (mode flags, period clamping, command
//! protocol, replay source, per-cycle planning) is pure and compiles
//! for the host; run it with `cargo test`.
//!
//! The hardware-facing modules (sensor, UART link, display, LEDs,
//! buttons, acquisition tasks) sit behind the `embedded` feature and
//! are only built for the nRF52840 target.
//!
//! Note: The embedded binary uses main.rs with #![no_std] and
//! #![no_main]; this library is its building blocks plus a separate
//! entry point for host-based testing.

#![cfg_attr(not(test), no_std)]

pub mod command;
pub mod config;
pub mod cycle;
pub mod error;
pub mod mode;
pub mod period;
pub mod replay;
pub mod report;
pub mod ui;

#[cfg(feature = "embedded")]
pub mod acquire;
#[cfg(feature = "embedded")]
pub mod sensor;
#[cfg(feature = "embedded")]
pub mod serial;

// ═══════════════════════════════════════════════════════════════════════════
// Unit Tests
// ═══════════════════════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::command::{apply, Applied, Command};
    use super::config::{PERIOD_DEFAULT_MS, PERIOD_MAX_MS, PERIOD_MIN_MS, PERIOD_STEP_MS};
    use super::cycle::plan_cycle;
    use super::mode::{ModeState, Unit};
    use super::period::SamplePeriod;
    use super::replay::{ReplaySource, ECG_WAVE};
    use super::report::format_report;
    use super::ui::{range_level, RangeLevel};

    // ════════════════════════════════════════════════════════════════════════
    // Mode State Tests
    // ════════════════════════════════════════════════════════════════════════

    #[test]
    fn mode_defaults() {
        let mode = ModeState::new();
        let snap = mode.snapshot();
        assert!(snap.enabled);
        assert!(!snap.hold);
        assert_eq!(snap.unit, Unit::Centimeters);
    }

    #[test]
    fn toggle_enabled_returns_new_value() {
        let mode = ModeState::new();
        assert!(!mode.toggle_enabled());
        assert!(!mode.is_enabled());
        assert!(mode.toggle_enabled());
        assert!(mode.is_enabled());
    }

    #[test]
    fn toggle_parity_matches_default_xor_count() {
        // After N toggles a flag equals its default XOR (N mod 2).
        let mode = ModeState::new();
        for n in 1..=8u32 {
            mode.toggle_hold();
            assert_eq!(mode.snapshot().hold, n % 2 == 1);
        }
        for n in 1..=8u32 {
            mode.toggle_enabled();
            assert_eq!(mode.snapshot().enabled, n % 2 == 0);
        }
    }

    #[test]
    fn toggle_unit_alternates() {
        let mode = ModeState::new();
        assert_eq!(mode.toggle_unit(), Unit::Inches);
        assert_eq!(mode.snapshot().unit, Unit::Inches);
        assert_eq!(mode.toggle_unit(), Unit::Centimeters);
        assert_eq!(mode.snapshot().unit, Unit::Centimeters);
    }

    #[test]
    fn unit_conversion() {
        assert_eq!(Unit::Centimeters.convert(42), 42);
        assert_eq!(Unit::Inches.convert(0), 0);
        assert_eq!(Unit::Inches.convert(254), 100);
        // Truncates like the sensor's own inch mode.
        assert_eq!(Unit::Inches.convert(100), 39);
        assert_eq!(Unit::Inches.convert(76), 29);
    }

    #[test]
    fn unit_suffixes() {
        assert_eq!(Unit::Centimeters.suffix(), "cm");
        assert_eq!(Unit::Inches.suffix(), "in");
    }

    // ════════════════════════════════════════════════════════════════════════
    // Sample Period Tests
    // ════════════════════════════════════════════════════════════════════════

    #[test]
    fn period_defaults() {
        let period = SamplePeriod::new();
        assert_eq!(period.millis(), PERIOD_DEFAULT_MS);
    }

    #[test]
    fn faster_steps_down() {
        let period = SamplePeriod::new();
        assert_eq!(period.faster(), Some(PERIOD_DEFAULT_MS - PERIOD_STEP_MS));
        assert_eq!(period.millis(), PERIOD_DEFAULT_MS - PERIOD_STEP_MS);
    }

    #[test]
    fn slower_saturates_at_maximum() {
        let period = SamplePeriod::new();
        let steps = (PERIOD_MAX_MS - PERIOD_DEFAULT_MS) / PERIOD_STEP_MS;
        for _ in 0..steps {
            assert!(period.slower().is_some());
        }
        assert_eq!(period.millis(), PERIOD_MAX_MS);
        // Already clamped: a no-op, not an error.
        assert_eq!(period.slower(), None);
        assert_eq!(period.millis(), PERIOD_MAX_MS);
    }

    #[test]
    fn faster_saturates_at_minimum() {
        let period = SamplePeriod::new();
        while period.faster().is_some() {}
        assert_eq!(period.millis(), PERIOD_MIN_MS);
        assert_eq!(period.faster(), None);
        assert_eq!(period.millis(), PERIOD_MIN_MS);
    }

    #[test]
    fn period_never_leaves_bounds() {
        let period = SamplePeriod::new();
        // Deterministic mixed sequence, heavier on one side then the other.
        for i in 0..200u32 {
            if i % 3 == 0 {
                period.slower();
            } else {
                period.faster();
            }
            let ms = period.millis();
            assert!((PERIOD_MIN_MS..=PERIOD_MAX_MS).contains(&ms));
        }
    }

    // ════════════════════════════════════════════════════════════════════════
    // Command Protocol Tests
    // ════════════════════════════════════════════════════════════════════════

    #[test]
    fn decode_known_bytes() {
        assert_eq!(Command::from_byte(b'O'), Some(Command::ToggleEnable));
        assert_eq!(Command::from_byte(b'H'), Some(Command::ToggleHold));
        assert_eq!(Command::from_byte(b'I'), Some(Command::ToggleUnit));
        assert_eq!(Command::from_byte(b'F'), Some(Command::Faster));
        assert_eq!(Command::from_byte(b'S'), Some(Command::Slower));
    }

    #[test]
    fn decode_unknown_bytes() {
        // Lower case is not accepted; neither is anything else.
        for byte in [b'o', b'h', b'x', b'0', 0u8, 0xFF, b' ', b'\r'] {
            assert_eq!(Command::from_byte(byte), None);
        }
    }

    #[test]
    fn apply_enable_reports_force_off_only_when_disabling() {
        let mode = ModeState::new();
        let period = SamplePeriod::new();
        // Default is enabled, so the first toggle disables.
        assert_eq!(apply(Command::ToggleEnable, &mode, &period), Applied::ForceOff);
        assert!(!mode.is_enabled());
        assert_eq!(apply(Command::ToggleEnable, &mode, &period), Applied::Mode);
        assert!(mode.is_enabled());
    }

    #[test]
    fn apply_hold_and_unit_touch_only_mode() {
        let mode = ModeState::new();
        let period = SamplePeriod::new();
        assert_eq!(apply(Command::ToggleHold, &mode, &period), Applied::Mode);
        assert!(mode.snapshot().hold);
        assert_eq!(apply(Command::ToggleUnit, &mode, &period), Applied::Mode);
        assert_eq!(mode.snapshot().unit, Unit::Inches);
        assert_eq!(period.millis(), PERIOD_DEFAULT_MS);
    }

    #[test]
    fn apply_period_commands_report_new_value() {
        let mode = ModeState::new();
        let period = SamplePeriod::new();
        assert_eq!(
            apply(Command::Faster, &mode, &period),
            Applied::Period(PERIOD_DEFAULT_MS - PERIOD_STEP_MS)
        );
        while period.faster().is_some() {}
        assert_eq!(apply(Command::Faster, &mode, &period), Applied::Unchanged);
        assert_eq!(period.millis(), PERIOD_MIN_MS);
    }

    // ════════════════════════════════════════════════════════════════════════
    // Replay Source Tests
    // ════════════════════════════════════════════════════════════════════════

    #[test]
    fn replay_starts_at_index_zero() {
        static TRACE: [u16; 4] = [10, 20, 30, 40];
        let mut source = ReplaySource::new(&TRACE);
        assert_eq!(source.next(), 10);
        assert_eq!(source.next(), 20);
    }

    #[test]
    fn replay_wraps_past_last_element() {
        static TRACE: [u16; 3] = [1, 2, 3];
        let mut source = ReplaySource::new(&TRACE);
        let collected: Vec<u16> = (0..7).map(|_| source.next()).collect();
        assert_eq!(collected, [1, 2, 3, 1, 2, 3, 1]);
    }

    #[test]
    fn replay_is_periodic_in_lap_length() {
        // len + k reads yield the same tail as k reads on a fresh source.
        static TRACE: [u16; 5] = [7, 8, 9, 10, 11];
        let mut lapped = ReplaySource::new(&TRACE);
        for _ in 0..lapped.lap_len() {
            lapped.next();
        }
        let mut fresh = ReplaySource::new(&TRACE);
        for _ in 0..11 {
            assert_eq!(lapped.next(), fresh.next());
        }
    }

    #[test]
    fn replay_single_element_repeats() {
        static TRACE: [u16; 1] = [99];
        let mut source = ReplaySource::new(&TRACE);
        assert_eq!(source.next(), 99);
        assert_eq!(source.next(), 99);
    }

    #[test]
    fn ecg_wave_shape() {
        assert_eq!(ECG_WAVE.len(), 231);
        assert_eq!(ECG_WAVE[0], 76);
        // R peak of the demo beat.
        assert_eq!(ECG_WAVE.iter().copied().max(), Some(253));
    }

    // ════════════════════════════════════════════════════════════════════════
    // Report Formatting Tests
    // ════════════════════════════════════════════════════════════════════════

    #[test]
    fn report_line_centimeters() {
        assert_eq!(format_report(42, Unit::Centimeters).as_str(), "Distancia: 42 cm\r\n");
    }

    #[test]
    fn report_line_inches() {
        assert_eq!(format_report(16, Unit::Inches).as_str(), "Distancia: 16 in\r\n");
    }

    #[test]
    fn report_line_fits_at_max_value() {
        let line = format_report(u16::MAX, Unit::Centimeters);
        assert_eq!(line.as_str(), "Distancia: 65535 cm\r\n");
    }

    // ════════════════════════════════════════════════════════════════════════
    // Range Level Tests
    // ════════════════════════════════════════════════════════════════════════

    #[test]
    fn range_level_boundaries() {
        assert_eq!(range_level(0), RangeLevel::Near);
        assert_eq!(range_level(9), RangeLevel::Near);
        assert_eq!(range_level(10), RangeLevel::Low);
        assert_eq!(range_level(19), RangeLevel::Low);
        assert_eq!(range_level(20), RangeLevel::Mid);
        assert_eq!(range_level(29), RangeLevel::Mid);
        assert_eq!(range_level(30), RangeLevel::Far);
        assert_eq!(range_level(400), RangeLevel::Far);
    }

    #[test]
    fn range_level_lit_counts() {
        assert_eq!(RangeLevel::Near.lit(), 0);
        assert_eq!(RangeLevel::Low.lit(), 1);
        assert_eq!(RangeLevel::Mid.lit(), 2);
        assert_eq!(RangeLevel::Far.lit(), 3);
    }

    // ════════════════════════════════════════════════════════════════════════
    // Cycle Planning Tests
    // ════════════════════════════════════════════════════════════════════════

    #[test]
    fn cycle_default_state_transmits_and_renders() {
        let mode = ModeState::new();
        let outcome = plan_cycle(mode.snapshot(), Some(25));
        assert_eq!(outcome.transmit.as_deref(), Some("Distancia: 25 cm\r\n"));
        let shown = outcome.show.expect("expected a rendered reading");
        assert_eq!(shown.value, 25);
        assert_eq!(shown.unit, Unit::Centimeters);
        assert_eq!(shown.level, RangeLevel::Mid);
    }

    #[test]
    fn cycle_disabled_is_empty() {
        let mode = ModeState::new();
        mode.toggle_enabled();
        let outcome = plan_cycle(mode.snapshot(), Some(25));
        assert!(outcome.is_empty());
    }

    #[test]
    fn cycle_disabled_stays_inert_under_other_toggles() {
        let mode = ModeState::new();
        mode.toggle_enabled();
        mode.toggle_hold();
        mode.toggle_unit();
        mode.toggle_hold();
        let outcome = plan_cycle(mode.snapshot(), Some(25));
        assert!(outcome.is_empty());
    }

    #[test]
    fn cycle_hold_transmits_without_rendering() {
        let mode = ModeState::new();
        mode.toggle_hold();
        let outcome = plan_cycle(mode.snapshot(), Some(25));
        assert_eq!(outcome.transmit.as_deref(), Some("Distancia: 25 cm\r\n"));
        assert!(outcome.show.is_none());
    }

    #[test]
    fn cycle_failed_read_is_empty() {
        let mode = ModeState::new();
        let outcome = plan_cycle(mode.snapshot(), None);
        assert!(outcome.is_empty());
    }

    #[test]
    fn cycle_converts_but_bands_on_raw_centimeters() {
        let mode = ModeState::new();
        mode.toggle_unit();
        let outcome = plan_cycle(mode.snapshot(), Some(76));
        assert_eq!(outcome.transmit.as_deref(), Some("Distancia: 29 in\r\n"));
        let shown = outcome.show.expect("expected a rendered reading");
        assert_eq!(shown.value, 29);
        assert_eq!(shown.unit, Unit::Inches);
        // LED thresholds stay in centimeters.
        assert_eq!(shown.level, RangeLevel::Far);
    }
}
