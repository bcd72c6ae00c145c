//! Display capability trait
//!
//! Mirrors the small drawing surface the clock needs: pen colour, clear,
//! text, frame commit and backlight.

/// Display backend errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayError {
    /// Communication error with display
    Communication,
    /// Invalid coordinates or dimensions
    InvalidCoordinates,
    /// Buffer overflow
    BufferOverflow,
}

/// 24-bit colour
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::new(0, 0, 0);
    pub const WHITE: Color = Color::new(255, 255, 255);
    pub const MAGENTA: Color = Color::new(255, 0, 255);
    pub const YELLOW: Color = Color::new(255, 255, 0);
    pub const GREEN: Color = Color::new(0, 255, 0);

    /// Create a colour from its components
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `"#RRGGBB"` (the leading `#` is optional)
    pub fn from_hex(s: &str) -> Option<Self> {
        let s = s.strip_prefix('#').unwrap_or(s);
        if s.len() != 6 || !s.is_ascii() {
            return None;
        }

        let channel = |i: usize| u8::from_str_radix(&s[i..i + 2], 16).ok();
        Some(Self::new(channel(0)?, channel(2)?, channel(4)?))
    }

    /// Pack into RGB565 raw bits
    pub const fn to_rgb565(self) -> u16 {
        ((self.r as u16 & 0xF8) << 8) | ((self.g as u16 & 0xFC) << 3) | (self.b as u16 >> 3)
    }
}

/// Pixel display capability
///
/// The display keeps a current pen colour. `clear()` fills the whole frame
/// with it and `draw_text()` draws glyphs in it. Nothing becomes visible
/// until `present()` commits the frame.
pub trait PixelDisplay {
    /// Select the pen colour for subsequent `clear`/`draw_text` calls
    fn set_color(&mut self, color: Color) -> Result<(), DisplayError>;

    /// Fill the entire frame with the pen colour
    fn clear(&mut self) -> Result<(), DisplayError>;

    /// Draw text with its top-left corner at (`x`, `y`)
    ///
    /// - `wrap_width`: line width in pixels before wrapping to a new line
    /// - `scale`: integer glyph magnification (1 = native font size)
    fn draw_text(
        &mut self,
        text: &str,
        x: i32,
        y: i32,
        wrap_width: u32,
        scale: u8,
    ) -> Result<(), DisplayError>;

    /// Commit the frame to the panel as one observable step
    fn present(&mut self) -> Result<(), DisplayError>;

    /// Set backlight brightness (0 = off, 255 = full)
    fn set_backlight(&mut self, level: u8) -> Result<(), DisplayError>;
}
