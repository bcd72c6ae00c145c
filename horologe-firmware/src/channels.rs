//! Inter-task communication channels
//!
//! Button tasks and the tick task feed the controller task. The controller
//! is the only consumer, so clock updates are applied one at a time.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Channel;
use embassy_sync::signal::Signal;

use horologe_core::input::ButtonEvent;

/// Channel capacity for button events
const BUTTON_CHANNEL_SIZE: usize = 8;

/// Debounced button presses from the button tasks
pub static BUTTON_CHANNEL: Channel<CriticalSectionRawMutex, ButtonEvent, BUTTON_CHANNEL_SIZE> =
    Channel::new();

/// One-second tick from the tick task
///
/// A `Signal` keeps only the latest value; the controller always drains it
/// well within a second, so no tick is lost in practice.
pub static TICK_SIGNAL: Signal<CriticalSectionRawMutex, ()> = Signal::new();
