//! SSD1306 OLED display wrapper.

use core::fmt::Write as _;

use embedded_graphics::mono_font::ascii::{FONT_10X20, FONT_6X10};
use embedded_graphics::mono_font::{MonoTextStyle, MonoTextStyleBuilder};
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::text::Text;
use ssd1306::mode::BufferedGraphicsMode;
use ssd1306::prelude::*;
use ssd1306::I2CDisplayInterface;
use ssd1306::Ssd1306;

use crate::mode::Unit;

/// Type alias for the concrete display driver.
///
/// Generic over the I²C implementation so callers pass in their HAL's
/// I²C peripheral.
pub type Display<I2C> =
    Ssd1306<I2CInterface<I2C>, DisplaySize128x64, BufferedGraphicsMode<DisplaySize128x64>>;

/// The display as wired on the DK (TWISPI0 on P0.26/P0.27).
pub type Oled = Display<embassy_nrf::twim::Twim<'static, embassy_nrf::peripherals::TWISPI0>>;

/// Initialise the SSD1306 display and clear the screen.
pub fn init<I2C>(i2c: I2C) -> Display<I2C>
where
    I2C: embedded_hal::i2c::I2c,
{
    let interface = I2CDisplayInterface::new(i2c);
    let mut display = Ssd1306::new(interface, DisplaySize128x64, DisplayRotation::Rotate0)
        .into_buffered_graphics_mode();
    let _ = display.init();
    display.clear_buffer();
    let _ = display.flush();
    display
}

fn small_style() -> MonoTextStyle<'static, BinaryColor> {
    MonoTextStyleBuilder::new()
        .font(&FONT_6X10)
        .text_color(BinaryColor::On)
        .build()
}

fn value_style() -> MonoTextStyle<'static, BinaryColor> {
    MonoTextStyleBuilder::new()
        .font(&FONT_10X20)
        .text_color(BinaryColor::On)
        .build()
}

/// Render the boot screen.
pub fn draw_splash<I2C>(display: &mut Display<I2C>)
where
    I2C: embedded_hal::i2c::I2c,
{
    display.clear_buffer();

    let _ = Text::new("distmeter", Point::new(0, 10), small_style()).draw(display);
    let _ = Text::new("waiting for first", Point::new(0, 30), small_style()).draw(display);
    let _ = Text::new("measurement...", Point::new(0, 42), small_style()).draw(display);

    let _ = display.flush();
}

/// Render the current reading in the active unit.
pub fn draw_reading<I2C>(display: &mut Display<I2C>, value: u16, unit: Unit)
where
    I2C: embedded_hal::i2c::I2c,
{
    display.clear_buffer();

    let _ = Text::new("distmeter", Point::new(0, 10), small_style()).draw(display);

    let mut line: heapless::String<12> = heapless::String::new();
    let _ = write!(line, "{} {}", value, unit.suffix());
    let _ = Text::new(line.as_str(), Point::new(0, 40), value_style()).draw(display);

    let _ = display.flush();
}

/// Blank the screen (measuring disabled).
pub fn draw_off<I2C>(display: &mut Display<I2C>)
where
    I2C: embedded_hal::i2c::I2c,
{
    display.clear_buffer();
    let _ = display.flush();
}
