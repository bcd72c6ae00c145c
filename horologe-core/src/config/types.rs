//! Configuration type definitions

use heapless::String;
use horologe_display::Color;

use crate::render::MarkerTime;

/// Maximum marker suffix length in bytes
pub const MAX_SUFFIX_LEN: usize = 4;

/// Panel and layout settings
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DisplayConfig {
    /// Backlight level (0 = off, 255 = full)
    pub backlight: u8,
    /// Digit colour
    pub foreground: Color,
    /// Clear and colon-erase colour
    pub background: Color,
    /// Text origin
    pub text_x: i32,
    pub text_y: i32,
    /// Wrap width in pixels
    pub wrap_width: u32,
    /// Glyph magnification
    pub scale: u8,
    /// Extra x offset applied to the colon erase
    pub colon_offset_x: i32,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            backlight: 128,
            foreground: Color::GREEN,
            background: Color::BLACK,
            text_x: 7,
            text_y: 25,
            wrap_width: 240,
            scale: 6,
            colon_offset_x: 0,
        }
    }
}

/// Button sampling settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct InputConfig {
    /// Minimum time between accepted transitions of one button
    pub debounce_ms: u32,
    /// Sampling interval of the button tasks
    pub poll_ms: u32,
    /// Pressed reads as low (pull-up wiring)
    pub active_low: bool,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            debounce_ms: 50,
            poll_ms: 5,
            active_low: true,
        }
    }
}

/// Render cadence and marker settings
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RenderConfig {
    /// Time between colon phases
    pub blink_ms: u32,
    pub marker: MarkerTime,
    pub marker_suffix: String<MAX_SUFFIX_LEN>,
    pub marker_enabled: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        let mut marker_suffix = String::new();
        let _ = marker_suffix.push('!');
        Self {
            blink_ms: 500,
            marker: MarkerTime::DEFAULT,
            marker_suffix,
            marker_enabled: true,
        }
    }
}

/// Complete clock configuration
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ClockConfig {
    pub display: DisplayConfig,
    pub input: InputConfig,
    pub render: RenderConfig,
}
