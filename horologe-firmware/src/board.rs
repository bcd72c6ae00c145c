//! Pimoroni Pico Display wiring
//!
//! | Function      | GPIO |
//! |---------------|------|
//! | LCD DC        | 16   |
//! | LCD CS        | 17   |
//! | LCD SCK       | 18   |
//! | LCD MOSI      | 19   |
//! | Backlight     | 20 (PWM2 A) |
//! | Button A/B    | 12/13 (hour +/-)   |
//! | Button X/Y    | 14/15 (minute +/-) |
//! | LED R/G/B     | 6/7/8 (active low) |

use embassy_rp::gpio::Output;
use embassy_rp::peripherals::SPI0;
use embassy_rp::spi::{Blocking, Spi};
use embedded_graphics::pixelcolor::Rgb565;
use embedded_hal_bus::spi::{ExclusiveDevice, NoDelay};
use mipidsi::interface::SpiInterface;
use mipidsi::models::ST7789;
use mipidsi::NoResetPin;

use horologe_core::Controller;
use horologe_display::FramebufferDisplay;
use horologe_hal::led::DigitalRgbLed;
use horologe_hal_rp2040::{DigitalOutput, FlashStorage, PwmBacklight};

/// Panel size in landscape orientation
pub const WIDTH: usize = 240;
pub const HEIGHT: usize = 135;
pub const FRAME_LEN: usize = WIDTH * HEIGHT;

/// ST7789 RAM window of the 135x240 glass
pub const PANEL_OFFSET: (u16, u16) = (52, 40);

/// SPI clock for the panel
pub const SPI_FREQUENCY_HZ: u32 = 62_500_000;

pub type PanelSpi = ExclusiveDevice<Spi<'static, SPI0, Blocking>, Output<'static>, NoDelay>;

pub type Panel =
    mipidsi::Display<SpiInterface<'static, PanelSpi, Output<'static>>, ST7789, NoResetPin>;

pub type ClockDisplay = FramebufferDisplay<'static, Panel, PwmBacklight<'static>, FRAME_LEN>;

pub type ClockController = Controller<FlashStorage<'static>, ClockDisplay>;

pub type StatusLed =
    DigitalRgbLed<DigitalOutput<'static>, DigitalOutput<'static>, DigitalOutput<'static>>;

/// Framebuffer placed in .data so it never lives on the stack
pub type FrameBuffer = [Rgb565; FRAME_LEN];
