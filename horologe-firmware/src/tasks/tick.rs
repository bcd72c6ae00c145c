//! 1 Hz clock tick

use defmt::*;
use embassy_time::{Duration, Ticker};

use crate::channels::TICK_SIGNAL;

/// Tick interval in milliseconds
pub const TICK_INTERVAL_MS: u64 = 1000;

/// Tick task - signals the controller once per second
///
/// `Ticker` schedules against absolute deadlines, so time spent handling a
/// tick does not accumulate as drift.
#[embassy_executor::task]
pub async fn tick_task() {
    info!("Tick task started");

    let mut ticker = Ticker::every(Duration::from_millis(TICK_INTERVAL_MS));

    loop {
        ticker.next().await;
        TICK_SIGNAL.signal(());
    }
}
