//! PC serial link - command input and measurement output over UARTE0.
//!
//! The reader half consumes one command byte at a time, echoes accepted
//! bytes back as the acknowledgement, and applies them to the shared
//! control state. The writer half drains the outbound frame queue. The
//! acquisition task never touches the UART directly - it enqueues
//! frames through [`send_frame`].

use defmt::{info, warn};
use embassy_nrf::peripherals::UARTE0;
use embassy_nrf::uarte::{UarteRx, UarteTx};
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Channel;
use heapless::Vec;

use crate::acquire;
use crate::command::{self, Applied, Command};
use crate::error::Error;
use crate::mode::ModeState;
use crate::period::SamplePeriod;
use crate::report::REPORT_MAX_LEN;

/// One outbound UART frame (report line or command echo).
pub type TxFrame = Vec<u8, REPORT_MAX_LEN>;

/// Outbound frame queue drained by the writer task.
static TX_FRAMES: Channel<CriticalSectionRawMutex, TxFrame, 4> = Channel::new();

/// Queue a frame for transmission without blocking.
///
/// The link is best-effort: a full queue drops the frame and the next
/// cycle produces a fresh value anyway.
pub fn send_frame(frame: TxFrame) -> Result<(), Error> {
    TX_FRAMES.try_send(frame).map_err(|_| {
        warn!("uart: tx queue full, frame dropped");
        Error::TxQueueFull
    })
}

/// Read command bytes from the PC and apply them.
pub async fn reader_task(
    mut rx: UarteRx<'static, UARTE0>,
    mode: &'static ModeState,
    period: &'static SamplePeriod,
) -> ! {
    info!("uart: reader task started");

    let mut buf = [0u8; 1];

    loop {
        if rx.read(&mut buf).await.is_err() {
            warn!("uart: read error, byte dropped");
            continue;
        }

        let byte = buf[0];
        let Some(cmd) = Command::from_byte(byte) else {
            // Unknown bytes are dropped silently, per the protocol.
            continue;
        };

        // Acknowledge before dispatch. No retry if the queue is busy.
        let mut echo = TxFrame::new();
        let _ = echo.push(byte);
        let _ = send_frame(echo);

        match command::apply(cmd, mode, period) {
            Applied::ForceOff => {
                info!("uart: measuring stopped");
                // Clear the sinks now instead of on the next tick.
                acquire::request_refresh();
            }
            Applied::Period(ms) => info!("uart: period set to {} ms", ms),
            Applied::Mode | Applied::Unchanged => {}
        }
    }
}

/// Drain the outbound queue into the UART.
pub async fn writer_task(mut tx: UarteTx<'static, UARTE0>) -> ! {
    info!("uart: writer task started");

    loop {
        let frame = TX_FRAMES.receive().await;
        if tx.write(&frame).await.is_err() {
            warn!("uart: write failed");
        }
    }
}
