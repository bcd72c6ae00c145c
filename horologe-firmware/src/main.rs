//! Horologe - Pixel Clock Firmware
//!
//! Main firmware binary for RP2040 boards with a Pimoroni Pico Display.
//! Shows HH:MM with a blinking colon, keeps time across power cycles and
//! lets the four buttons nudge hours and minutes.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::gpio::{Input, Level, Output, Pull};
use embassy_rp::pwm::{Config as PwmConfig, Pwm};
use embassy_rp::spi::{Config as SpiConfig, Spi};
use embassy_time::Delay;
use embedded_graphics::pixelcolor::{Rgb565, RgbColor};
use embedded_hal_bus::spi::ExclusiveDevice;
use mipidsi::interface::SpiInterface;
use mipidsi::models::ST7789;
use mipidsi::options::{ColorInversion, Orientation, Rotation};
use mipidsi::Builder;
use static_cell::ConstStaticCell;
use {defmt_rtt as _, panic_probe as _};

use horologe_core::input::ButtonEvent;
use horologe_core::Controller;
use horologe_display::FramebufferDisplay;
use horologe_hal::led::DigitalRgbLed;
use horologe_hal_rp2040::{ButtonPin, DigitalOutput, FlashStorage, PwmBacklight};

use crate::board::{
    ClockController, FrameBuffer, StatusLed, FRAME_LEN, HEIGHT, PANEL_OFFSET, SPI_FREQUENCY_HZ,
    WIDTH,
};

mod board;
mod channels;
mod config;
mod tasks;

// Framebuffer and SPI scratch live in .data rather than on the stack
static FRAME: ConstStaticCell<FrameBuffer> = ConstStaticCell::new([Rgb565::BLACK; FRAME_LEN]);
static SPI_BUF: ConstStaticCell<[u8; 512]> = ConstStaticCell::new([0; 512]);

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Horologe firmware starting...");

    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    let config = config::load_config();

    // Status LED (common anode, so high = off)
    let mut led: StatusLed = DigitalRgbLed::new(
        DigitalOutput::new(Output::new(p.PIN_6, Level::High)),
        DigitalOutput::new(Output::new(p.PIN_7, Level::High)),
        DigitalOutput::new(Output::new(p.PIN_8, Level::High)),
        true,
    );

    // ST7789 over SPI0
    let mut spi_config = SpiConfig::default();
    spi_config.frequency = SPI_FREQUENCY_HZ;
    let spi = Spi::new_blocking_txonly(p.SPI0, p.PIN_18, p.PIN_19, spi_config);
    let cs = Output::new(p.PIN_17, Level::High);
    let dc = Output::new(p.PIN_16, Level::Low);
    let spi_device = ExclusiveDevice::new_no_delay(spi, cs).unwrap();

    let di = SpiInterface::new(spi_device, dc, SPI_BUF.take());
    let panel = match Builder::new(ST7789, di)
        .display_size(HEIGHT as u16, WIDTH as u16)
        .display_offset(PANEL_OFFSET.0, PANEL_OFFSET.1)
        .orientation(Orientation::new().rotate(Rotation::Deg90))
        .invert_colors(ColorInversion::Inverted)
        .init(&mut Delay)
    {
        Ok(panel) => panel,
        Err(_) => panic!("ST7789 init failed"),
    };
    info!("Display initialized");

    // Backlight on GPIO20 (PWM slice 2, channel A), dark until start()
    let backlight = PwmBacklight::new(Pwm::new_output_a(
        p.PWM_SLICE2,
        p.PIN_20,
        PwmConfig::default(),
    ));
    let display = match FramebufferDisplay::new(panel, backlight, FRAME.take(), WIDTH, HEIGHT) {
        Ok(display) => display,
        Err(e) => panic!("Framebuffer setup failed: {:?}", e),
    };

    // Restore the last committed minute
    let flash = FlashStorage::new(p.FLASH, p.DMA_CH0);
    let mut controller: ClockController = Controller::restore(flash, display, &config).await;
    let clock = controller.clock();
    info!("Starting at {:02}:{:02}", clock.hours(), clock.minutes());

    if let Err(e) = controller.start(&mut led) {
        warn!("First frame failed: {:?}", e);
    }

    // Buttons pull to ground when active-low, so pull the other way at rest
    let pull = if config.input.active_low {
        Pull::Up
    } else {
        Pull::Down
    };
    let buttons = [
        (ButtonPin::new(Input::new(p.PIN_12, pull)), ButtonEvent::HourUp),
        (ButtonPin::new(Input::new(p.PIN_13, pull)), ButtonEvent::HourDown),
        (ButtonPin::new(Input::new(p.PIN_14, pull)), ButtonEvent::MinuteUp),
        (ButtonPin::new(Input::new(p.PIN_15, pull)), ButtonEvent::MinuteDown),
    ];

    // Spawn tasks
    spawner.spawn(tasks::tick_task()).unwrap();
    for (pin, event) in buttons {
        spawner
            .spawn(tasks::button_task(pin, event, config.input))
            .unwrap();
    }
    spawner
        .spawn(tasks::controller_task(controller, config.render.blink_ms))
        .unwrap();

    info!("All tasks spawned, clock running");

    // Main task keeps the LED pins owned (and off) for the life of the program
    loop {
        embassy_time::Timer::after_secs(60).await;
        trace!("Main loop heartbeat");
    }
}
