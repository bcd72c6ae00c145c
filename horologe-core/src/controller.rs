//! Clock controller
//!
//! The controller is the only owner of the clock state. It:
//! - Applies 1 Hz ticks and commits every new minute to flash
//! - Turns button events into adjustments, commits them and redraws
//! - Drives the render scheduler on the blink cadence
//!
//! Every update is applied in full before anything is drawn, so a frame
//! never shows a half-carried time.

use horologe_display::{DisplayError, PixelDisplay};
use horologe_hal::{FlashStorage, RgbLed};

use crate::config::ClockConfig;
use crate::input::ButtonEvent;
use crate::persist::{PersistError, SnapshotStore};
use crate::render::{RenderScheduler, RenderStep};
use crate::time::{ClockState, Rollover};

/// Controller coordinating clock, persistence and display
pub struct Controller<S, D> {
    clock: ClockState,
    store: SnapshotStore<S>,
    renderer: RenderScheduler,
    display: D,
    backlight: u8,
}

impl<S: FlashStorage, D: PixelDisplay> Controller<S, D> {
    /// Create a controller starting at `clock`
    pub fn new(clock: ClockState, storage: S, display: D, config: &ClockConfig) -> Self {
        Self {
            clock,
            store: SnapshotStore::new(storage),
            renderer: RenderScheduler::new(config),
            display,
            backlight: config.display.backlight,
        }
    }

    /// Create a controller starting at the last committed minute
    ///
    /// Falls back to 00:00:00 when nothing usable is stored.
    pub async fn restore(storage: S, display: D, config: &ClockConfig) -> Self {
        let mut store = SnapshotStore::new(storage);
        let clock = store.load().await;
        Self {
            clock,
            store,
            renderer: RenderScheduler::new(config),
            display,
            backlight: config.display.backlight,
        }
    }

    /// Boot sequence: LED off, backlight on, clear and first full frame
    pub fn start<L: RgbLed>(&mut self, led: &mut L) -> Result<RenderStep, DisplayError> {
        led.off();
        self.display.set_backlight(self.backlight)?;
        self.renderer.force_full_redraw(&self.clock, &mut self.display)
    }

    /// Advance one second
    ///
    /// A new minute is committed to flash. A failed commit is logged and
    /// the clock keeps running.
    pub async fn tick(&mut self) -> Rollover {
        let rollover = self.clock.tick();
        if rollover.minute_changed() {
            let _ = self.commit().await;
        }
        rollover
    }

    /// Apply a button press
    ///
    /// Adjusts the clock, commits it, then clears and redraws immediately.
    /// A failed commit does not prevent the redraw.
    pub async fn handle_button(&mut self, event: ButtonEvent) -> Result<RenderStep, DisplayError> {
        event.adjustment().apply(&mut self.clock);

        #[cfg(feature = "defmt")]
        defmt::debug!(
            "{:?} -> {:02}:{:02}",
            event,
            self.clock.hours(),
            self.clock.minutes()
        );

        let _ = self.commit().await;
        self.renderer.force_full_redraw(&self.clock, &mut self.display)
    }

    /// Next blink phase
    pub fn render(&mut self) -> Result<RenderStep, DisplayError> {
        self.renderer.step(&self.clock, &mut self.display)
    }

    async fn commit(&mut self) -> Result<(), PersistError> {
        let result = self.store.save(&self.clock).await;
        if let Err(_e) = &result {
            #[cfg(feature = "defmt")]
            defmt::warn!("Failed to save clock: {:?}", _e);
        }
        result
    }

    pub fn clock(&self) -> &ClockState {
        &self.clock
    }

    pub fn renderer(&self) -> &RenderScheduler {
        &self.renderer
    }

    pub fn display(&self) -> &D {
        &self.display
    }

    pub fn display_mut(&mut self) -> &mut D {
        &mut self.display
    }

    pub fn store_mut(&mut self) -> &mut SnapshotStore<S> {
        &mut self.store
    }
}
