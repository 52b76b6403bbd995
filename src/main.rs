//! Embedded entry point - nRF52840-DK ultrasonic distance meter.
//!
//! Wires the peripherals together and spawns the task set: acquisition
//! worker, tick generator, UART reader/writer and the two board
//! buttons. The worker is spawned before the tick generator so the
//! first fire always finds it parked on the wake latch.

#![no_std]
#![no_main]

use defmt::info;
use defmt_rtt as _;
use panic_probe as _;

use embassy_executor::Spawner;
use embassy_nrf::gpio::{AnyPin, Input, Level, Output, OutputDrive, Pin, Pull};
use embassy_nrf::peripherals::UARTE0;
use embassy_nrf::uarte::{self, UarteRx, UarteTx};
use embassy_nrf::{bind_interrupts, peripherals, twim};

use distmeter::acquire;
use distmeter::command::Command;
use distmeter::config;
use distmeter::mode::ModeState;
use distmeter::period::SamplePeriod;
use distmeter::sensor::Ranger;
use distmeter::serial;
use distmeter::ui::buttons;
use distmeter::ui::display::{self, Oled};
use distmeter::ui::leds::RangeLeds;

bind_interrupts!(struct Irqs {
    UARTE0_UART0 => uarte::InterruptHandler<peripherals::UARTE0>;
    SPIM0_SPIS0_TWIM0_TWIS0_SPI0_TWI0 => twim::InterruptHandler<peripherals::TWISPI0>;
});

/// Process-wide mode flags, written from button and UART contexts.
static MODE: ModeState = ModeState::new();

/// Process-wide sampling period.
static PERIOD: SamplePeriod = SamplePeriod::new();

#[embassy_executor::task]
async fn worker(ranger: Ranger, leds: RangeLeds, oled: Oled) -> ! {
    acquire::worker_task(ranger, leds, oled, &MODE).await
}

#[embassy_executor::task]
async fn ticker() -> ! {
    acquire::ticker_task(&PERIOD).await
}

#[embassy_executor::task]
async fn uart_reader(rx: UarteRx<'static, UARTE0>) -> ! {
    serial::reader_task(rx, &MODE, &PERIOD).await
}

#[embassy_executor::task]
async fn uart_writer(tx: UarteTx<'static, UARTE0>) -> ! {
    serial::writer_task(tx).await
}

#[embassy_executor::task(pool_size = 2)]
async fn button(pin: AnyPin, cmd: Command) -> ! {
    buttons::button_task(pin, cmd, &MODE, &PERIOD).await
}

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    let p = embassy_nrf::init(Default::default());

    info!("distmeter boot");

    // UART to the PC (DK virtual COM port).
    let mut uart_config = uarte::Config::default();
    uart_config.baudrate = uarte::Baudrate::BAUD115200;
    let uart = uarte::Uarte::new(p.UARTE0, Irqs, p.P0_08, p.P0_06, uart_config);
    let (uart_tx, uart_rx) = uart.split();

    // OLED on I²C.
    let i2c = twim::Twim::new(p.TWISPI0, Irqs, p.P0_26, p.P0_27, twim::Config::default());
    let mut oled = display::init(i2c);
    display::draw_splash(&mut oled);

    // Range LEDs (active-low on the DK, so boot them high = dark).
    let leds = RangeLeds::new(
        Output::new(p.P0_13.degrade(), Level::High, OutputDrive::Standard),
        Output::new(p.P0_14.degrade(), Level::High, OutputDrive::Standard),
        Output::new(p.P0_15.degrade(), Level::High, OutputDrive::Standard),
    );

    // HC-SR04 (parked pins in replay builds).
    let trigger = Output::new(p.P0_04.degrade(), Level::Low, OutputDrive::Standard);
    let echo = Input::new(p.P0_03.degrade(), Pull::None);
    let ranger = Ranger::new(trigger, echo);

    // Worker first: the wake latch must find it parked before the
    // first tick fires.
    spawner.must_spawn(worker(ranger, leds, oled));
    spawner.must_spawn(ticker());
    spawner.must_spawn(uart_reader(uart_rx));
    spawner.must_spawn(uart_writer(uart_tx));
    spawner.must_spawn(button(p.P0_11.degrade(), Command::ToggleEnable));
    spawner.must_spawn(button(p.P0_12.degrade(), Command::ToggleHold));

    info!(
        "distmeter ready: period {} ms, baud {}",
        PERIOD.millis(),
        config::UART_BAUD
    );
}
