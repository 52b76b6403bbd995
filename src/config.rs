//! Application-wide constants and compile-time configuration.
//!
//! All hardware pin assignments, timing parameters, and protocol
//! constants live here so they can be tuned in one place.

// Sampling cadence

/// Sampling period at boot (ms).
pub const PERIOD_DEFAULT_MS: u32 = 1_000;

/// Shortest accepted sampling period (ms).
///
/// Cycle work (trigger + echo + render + enqueue) must finish well
/// inside this bound or timer fires coalesce and readings are skipped.
pub const PERIOD_MIN_MS: u32 = 100;

/// Longest accepted sampling period (ms).
pub const PERIOD_MAX_MS: u32 = 2_000;

/// Step applied by one faster/slower command (ms).
pub const PERIOD_STEP_MS: u32 = 100;

// Range indicator thresholds (centimeters)

/// Below this distance all LEDs stay dark.
pub const RANGE_NEAR_CM: u16 = 10;

/// One LED up to here, two LEDs beyond.
pub const RANGE_MID_CM: u16 = 20;

/// Three LEDs at or past this distance.
pub const RANGE_FAR_CM: u16 = 30;

// Serial link

/// Baud rate of the PC link (DK virtual COM port).
pub const UART_BAUD: u32 = 115_200;

/// Prefix of every measurement line sent to the PC.
pub const REPORT_LABEL: &str = "Distancia";

// Sensor

/// Ambient temperature assumed for the speed-of-sound correction (°C).
pub const SENSOR_AMBIENT_C: f64 = 21.5;

// GPIO pin assignments (nRF52840-DK defaults)
//
// These are logical names; actual `embassy_nrf::peripherals::*` pins are
// selected in `main.rs`.  Adjust for your custom PCB.
//
//   Button ON/OFF  → P0.11
//   Button HOLD    → P0.12
//   HC-SR04 TRIG   → P0.04
//   HC-SR04 ECHO   → P0.03 (through a 5 V → 3.3 V divider)
//   Range LED 1-3  → P0.13 / P0.14 / P0.15 (active-low board LEDs)
//   I²C SDA        → P0.26
//   I²C SCL        → P0.27
//   UART RX / TX   → P0.08 / P0.06

/// Button debounce time (ms).
pub const BUTTON_DEBOUNCE_MS: u64 = 50;
