//! Button polling
//!
//! One task per button samples its pin, debounces it and forwards each
//! press to the controller.

use defmt::*;
use embassy_time::{Duration, Instant, Ticker};

use horologe_core::config::InputConfig;
use horologe_core::input::{ButtonEvent, ButtonMonitor};
use horologe_hal_rp2040::ButtonPin;

use crate::channels::BUTTON_CHANNEL;

/// Number of buttons on the board
pub const BUTTON_COUNT: usize = 4;

/// Button task - polls one pin at `config.poll_ms`
#[embassy_executor::task(pool_size = BUTTON_COUNT)]
pub async fn button_task(pin: ButtonPin<'static>, event: ButtonEvent, config: InputConfig) {
    info!("Button task started for {:?}", event);

    let mut monitor = ButtonMonitor::new(event, &config);
    let mut ticker = Ticker::every(Duration::from_millis(config.poll_ms as u64));

    loop {
        ticker.next().await;

        let now_ms = Instant::now().as_millis() as u32;
        if let Some(pressed) = monitor.poll(&pin, now_ms) {
            debug!("Button pressed: {:?}", pressed);
            if BUTTON_CHANNEL.try_send(pressed).is_err() {
                warn!("Button channel full, dropping {:?}", pressed);
            }
        }
    }
}
