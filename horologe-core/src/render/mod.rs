//! Render scheduling
//!
//! Two alternating phases make the colon blink: a full frame with the time
//! and a frame where only the colon is painted over in the background
//! colour. The whole screen is cleared only when the visible minute changed.

pub mod frame;
pub mod scheduler;

pub use frame::{frame_text, FrameText, MarkerTime, FRAME_TEXT_LEN};
pub use scheduler::{RenderScheduler, RenderState, RenderStep};
