//! embedded-graphics implementation of [`PixelDisplay`]
//!
//! Frames are composed in an RGB565 framebuffer and pushed to the panel
//! with a single `fill_contiguous` on `present()`, so partial draws never
//! show up on screen.

use embedded_graphics::mono_font::ascii::FONT_6X13;
use embedded_graphics::mono_font::{MonoFont, MonoTextStyle};
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use embedded_graphics::text::{Baseline, Text};
use embedded_graphics_framebuf::FrameBuf;

use horologe_hal::PwmChannel;

use crate::backend::{Color, DisplayError, PixelDisplay};

/// Font used for all clock text
///
/// 6x13 scaled by 6 fits "HH:MM!" in the 240px wide Pico Display.
pub const CLOCK_FONT: MonoFont<'static> = FONT_6X13;

/// Convert a palette colour to the panel format
pub fn to_rgb565(color: Color) -> Rgb565 {
    Rgb565::new(color.r >> 3, color.g >> 2, color.b >> 3)
}

/// Framebuffer-backed display
///
/// - `D`: the physical panel
/// - `BL`: backlight PWM channel
/// - `N`: framebuffer length, must equal `width * height`
pub struct FramebufferDisplay<'a, D, BL, const N: usize> {
    panel: D,
    backlight: BL,
    frame: FrameBuf<Rgb565, &'a mut [Rgb565; N]>,
    pen: Rgb565,
}

impl<'a, D, BL, const N: usize> FramebufferDisplay<'a, D, BL, N>
where
    D: DrawTarget<Color = Rgb565>,
    BL: PwmChannel,
{
    /// Create a display over `panel` using `buffer` as the frame store
    pub fn new(
        panel: D,
        backlight: BL,
        buffer: &'a mut [Rgb565; N],
        width: usize,
        height: usize,
    ) -> Result<Self, DisplayError> {
        if width * height != N {
            return Err(DisplayError::InvalidCoordinates);
        }

        Ok(Self {
            panel,
            backlight,
            frame: FrameBuf::new(buffer, width, height),
            pen: Rgb565::BLACK,
        })
    }

    /// Access the underlying panel
    pub fn panel(&mut self) -> &mut D {
        &mut self.panel
    }

    pub fn backlight(&self) -> &BL {
        &self.backlight
    }

    /// Read back a pixel of the composed (not necessarily presented) frame
    pub fn pixel(&self, x: usize, y: usize) -> Option<Rgb565> {
        let width = self.frame.width();
        if x >= width || y >= self.frame.height() {
            return None;
        }
        Some(self.frame.data[y * width + x])
    }
}

impl<'a, D, BL, const N: usize> PixelDisplay for FramebufferDisplay<'a, D, BL, N>
where
    D: DrawTarget<Color = Rgb565>,
    BL: PwmChannel,
{
    fn set_color(&mut self, color: Color) -> Result<(), DisplayError> {
        self.pen = to_rgb565(color);
        Ok(())
    }

    fn clear(&mut self) -> Result<(), DisplayError> {
        for pixel in self.frame.data.iter_mut() {
            *pixel = self.pen;
        }
        Ok(())
    }

    fn draw_text(
        &mut self,
        text: &str,
        x: i32,
        y: i32,
        wrap_width: u32,
        scale: u8,
    ) -> Result<(), DisplayError> {
        if scale == 0 {
            return Err(DisplayError::InvalidCoordinates);
        }

        let glyph = CLOCK_FONT.character_size;
        let per_line = (wrap_width / (glyph.width * scale as u32)).max(1) as usize;
        let style = MonoTextStyle::new(&CLOCK_FONT, self.pen);

        let mut scaled = Scaled {
            target: &mut self.frame,
            origin: Point::new(x, y),
            scale: scale as u32,
        };

        let mut utf8 = [0u8; 4];
        for (i, ch) in text.chars().enumerate() {
            let col = (i % per_line) as i32;
            let row = (i / per_line) as i32;
            let position = Point::new(col * glyph.width as i32, row * glyph.height as i32);

            Text::with_baseline(ch.encode_utf8(&mut utf8), position, style, Baseline::Top)
                .draw(&mut scaled)
                .map_err(|_| DisplayError::BufferOverflow)?;
        }

        Ok(())
    }

    fn present(&mut self) -> Result<(), DisplayError> {
        let area = Rectangle::new(Point::zero(), self.frame.size());
        self.panel
            .fill_contiguous(&area, self.frame.data.iter().copied())
            .map_err(|_| DisplayError::Communication)
    }

    fn set_backlight(&mut self, level: u8) -> Result<(), DisplayError> {
        self.backlight.set_level(level);
        Ok(())
    }
}

/// Draw target adapter that magnifies every pixel into a `scale`×`scale`
/// block anchored at `origin`
struct Scaled<'t, T> {
    target: &'t mut T,
    origin: Point,
    scale: u32,
}

impl<T: DrawTarget> Dimensions for Scaled<'_, T> {
    fn bounding_box(&self) -> Rectangle {
        let outer = self.target.bounding_box();
        let s = self.scale as i32;
        Rectangle::new(
            Point::new(
                (outer.top_left.x - self.origin.x) / s,
                (outer.top_left.y - self.origin.y) / s,
            ),
            Size::new(outer.size.width / self.scale + 1, outer.size.height / self.scale + 1),
        )
    }
}

impl<T: DrawTarget> DrawTarget for Scaled<'_, T> {
    type Color = T::Color;
    type Error = T::Error;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        let clip = self.target.bounding_box();
        let block = Size::new(self.scale, self.scale);

        for Pixel(point, color) in pixels {
            let area = Rectangle::new(self.origin + point * self.scale as i32, block)
                .intersection(&clip);
            if area.size.width == 0 || area.size.height == 0 {
                continue;
            }
            self.target.fill_solid(&area, color)?;
        }

        Ok(())
    }
}
