//! Button input
//!
//! Buttons are sampled, debounced and turned into one [`ButtonEvent`] per
//! physical press. The controller maps each event to a clock adjustment.

pub mod debounce;
pub mod events;

pub use debounce::ButtonMonitor;
pub use events::{Adjustment, ButtonEvent};
