//! Recording display for host tests
//!
//! Records every call made through [`PixelDisplay`] so tests can assert on
//! the exact draw sequence (full clear vs. text-only vs. colon erase).

use heapless::{String, Vec};

use crate::backend::{Color, DisplayError, PixelDisplay};

/// Recorder capacity; calls beyond it fail with `BufferOverflow`
pub const MAX_OPS: usize = 32;

/// One recorded display call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DisplayOp {
    SetColor(Color),
    Clear,
    Text {
        text: String<16>,
        x: i32,
        y: i32,
        wrap_width: u32,
        scale: u8,
    },
    Present,
    Backlight(u8),
}

/// Display that records calls instead of drawing
#[derive(Debug, Default)]
pub struct RecordingDisplay {
    ops: Vec<DisplayOp, MAX_OPS>,
    /// When set, every call fails with this error
    pub fail_with: Option<DisplayError>,
}

impl RecordingDisplay {
    /// Create an empty recorder
    pub fn new() -> Self {
        Self::default()
    }

    /// Operations recorded since the last `take_ops`
    pub fn ops(&self) -> &[DisplayOp] {
        &self.ops
    }

    /// Return and forget the recorded operations
    pub fn take_ops(&mut self) -> Vec<DisplayOp, MAX_OPS> {
        core::mem::take(&mut self.ops)
    }

    /// Number of `clear()` calls recorded
    pub fn clear_count(&self) -> usize {
        self.ops.iter().filter(|op| **op == DisplayOp::Clear).count()
    }

    /// Number of `present()` calls recorded
    pub fn present_count(&self) -> usize {
        self.ops.iter().filter(|op| **op == DisplayOp::Present).count()
    }

    /// Texts drawn, in order
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.ops.iter().filter_map(|op| match op {
            DisplayOp::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }

    fn record(&mut self, op: DisplayOp) -> Result<(), DisplayError> {
        if let Some(err) = self.fail_with {
            return Err(err);
        }
        self.ops.push(op).map_err(|_| DisplayError::BufferOverflow)
    }
}

impl PixelDisplay for RecordingDisplay {
    fn set_color(&mut self, color: Color) -> Result<(), DisplayError> {
        self.record(DisplayOp::SetColor(color))
    }

    fn clear(&mut self) -> Result<(), DisplayError> {
        self.record(DisplayOp::Clear)
    }

    fn draw_text(
        &mut self,
        text: &str,
        x: i32,
        y: i32,
        wrap_width: u32,
        scale: u8,
    ) -> Result<(), DisplayError> {
        let text = String::try_from(text).map_err(|_| DisplayError::BufferOverflow)?;
        self.record(DisplayOp::Text {
            text,
            x,
            y,
            wrap_width,
            scale,
        })
    }

    fn present(&mut self) -> Result<(), DisplayError> {
        self.record(DisplayOp::Present)
    }

    fn set_backlight(&mut self, level: u8) -> Result<(), DisplayError> {
        self.record(DisplayOp::Backlight(level))
    }
}
