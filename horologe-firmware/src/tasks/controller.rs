//! Main controller task
//!
//! Owns the clock controller and serializes everything that touches the
//! clock: button presses, 1 Hz ticks and the colon blink cadence.

use defmt::*;
use embassy_futures::select::{select3, Either3};
use embassy_time::{Duration, Ticker};

use crate::board::ClockController;
use crate::channels::{BUTTON_CHANNEL, TICK_SIGNAL};

/// Controller task - main coordination loop
#[embassy_executor::task]
pub async fn controller_task(mut controller: ClockController, blink_ms: u32) {
    info!("Controller task started");

    let mut blink = Ticker::every(Duration::from_millis(blink_ms as u64));

    loop {
        match select3(BUTTON_CHANNEL.receive(), TICK_SIGNAL.wait(), blink.next()).await {
            Either3::First(event) => {
                if let Err(e) = controller.handle_button(event).await {
                    warn!("Redraw after {:?} failed: {:?}", event, e);
                }
            }

            Either3::Second(()) => {
                if controller.tick().await.minute_changed() {
                    let clock = controller.clock();
                    debug!("Minute rollover: {:02}:{:02}", clock.hours(), clock.minutes());
                }
            }

            Either3::Third(()) => {
                if let Err(e) = controller.render() {
                    warn!("Render failed: {:?}", e);
                }
            }
        }
    }
}
