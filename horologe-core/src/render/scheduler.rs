//! Colon blink state machine

use heapless::String;
use horologe_display::{DisplayError, PixelDisplay};

use super::frame::{frame_text, MarkerTime};
use crate::config::{ClockConfig, DisplayConfig, MAX_SUFFIX_LEN};
use crate::time::ClockState;

/// Text drawn in the background colour to erase the colon of "HH:MM"
///
/// Spaces draw no pixels, so only the colon cell is touched.
const COLON_MASK: &str = "  :";

/// Phase currently on screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RenderState {
    /// Digits and colon visible
    FullDrawn,
    /// Digits visible, colon painted over
    ColonBlanked,
}

/// What a render step did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RenderStep {
    /// Drew the time; `cleared` when the screen was wiped first
    FullDrawn { cleared: bool },
    /// Erased the colon
    ColonBlanked,
}

/// Decides what to draw on each cadence tick
///
/// Starts in `ColonBlanked` with nothing rendered, so the first step is a
/// full frame with a clear.
pub struct RenderScheduler {
    state: RenderState,
    last_rendered: Option<(u8, u8)>,
    layout: DisplayConfig,
    marker: Option<(MarkerTime, String<MAX_SUFFIX_LEN>)>,
}

impl RenderScheduler {
    pub fn new(config: &ClockConfig) -> Self {
        Self {
            state: RenderState::ColonBlanked,
            last_rendered: None,
            layout: config.display.clone(),
            marker: config
                .render
                .marker_enabled
                .then(|| (config.render.marker, config.render.marker_suffix.clone())),
        }
    }

    pub fn state(&self) -> RenderState {
        self.state
    }

    /// Hours and minutes of the last full frame
    pub fn last_rendered(&self) -> Option<(u8, u8)> {
        self.last_rendered
    }

    /// Forget the last rendered minute so the next full frame clears
    pub fn invalidate(&mut self) {
        self.last_rendered = None;
    }

    /// Advance to the next phase and draw it
    pub fn step<D: PixelDisplay>(
        &mut self,
        clock: &ClockState,
        display: &mut D,
    ) -> Result<RenderStep, DisplayError> {
        match self.state {
            RenderState::ColonBlanked => self.draw_full(clock, display),
            RenderState::FullDrawn => self.blank_colon(display),
        }
    }

    /// Clear and draw a full frame right now, whatever the phase
    pub fn force_full_redraw<D: PixelDisplay>(
        &mut self,
        clock: &ClockState,
        display: &mut D,
    ) -> Result<RenderStep, DisplayError> {
        self.invalidate();
        self.draw_full(clock, display)
    }

    fn draw_full<D: PixelDisplay>(
        &mut self,
        clock: &ClockState,
        display: &mut D,
    ) -> Result<RenderStep, DisplayError> {
        let minute = (clock.hours(), clock.minutes());
        let cleared = self.last_rendered != Some(minute);

        if cleared {
            display.set_color(self.layout.background)?;
            display.clear()?;
        }

        let marker = self.marker.as_ref().map(|(time, suffix)| (*time, suffix.as_str()));
        let text = frame_text(clock, marker);

        display.set_color(self.layout.foreground)?;
        display.draw_text(
            &text,
            self.layout.text_x,
            self.layout.text_y,
            self.layout.wrap_width,
            self.layout.scale,
        )?;
        display.present()?;

        self.state = RenderState::FullDrawn;
        self.last_rendered = Some(minute);
        Ok(RenderStep::FullDrawn { cleared })
    }

    fn blank_colon<D: PixelDisplay>(&mut self, display: &mut D) -> Result<RenderStep, DisplayError> {
        display.set_color(self.layout.background)?;
        display.draw_text(
            COLON_MASK,
            self.layout.text_x + self.layout.colon_offset_x,
            self.layout.text_y,
            self.layout.wrap_width,
            self.layout.scale,
        )?;
        display.present()?;

        self.state = RenderState::ColonBlanked;
        Ok(RenderStep::ColonBlanked)
    }
}
