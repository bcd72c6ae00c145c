//! Time model
//!
//! Hours, minutes and seconds with modulo wraparound. The model performs
//! no I/O; callers act on the [`Rollover`] returned by `tick()`.

pub mod clock;

pub use clock::{ClockError, ClockState, Rollover};
pub use clock::{HOURS_IN_DAY, MINUTES_IN_HOUR, SECONDS_IN_MINUTE};
