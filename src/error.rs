//! Unified error type for distmeter.
//!
//! We avoid `alloc` - all error variants carry only fixed-size data.
//! Implements `defmt::Format` for efficient on-target logging.
//!
//! None of these are fatal: every failure path degrades to "skip this
//! cycle" or "drop this frame" rather than propagating upward.

/// Top-level error type used across the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    // Sensor
    /// The ultrasonic driver reported a failed measurement (no echo
    /// edge within its timeout). The reading is skipped.
    SensorRead,

    // Serial
    /// UART transfer failed.
    Uart,

    /// The outbound frame queue was full; the frame was dropped.
    TxQueueFull,

    // UI / Display
    /// I²C transaction to the display failed.
    Display,
}
