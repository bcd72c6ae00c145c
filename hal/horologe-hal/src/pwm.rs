//! PWM output abstraction

/// A single PWM channel driven by an 8-bit level
///
/// 0 is fully off and 255 fully on; levels in between scale linearly.
pub trait PwmChannel {
    fn set_level(&mut self, level: u8);
}

/// Compare value giving `level`/255 duty for a counter wrapping at `top`
///
/// `top` must be below `u16::MAX` so that full duty (`top + 1`) fits.
pub const fn compare_for_level(level: u8, top: u16) -> u16 {
    (level as u32 * (top as u32 + 1) / 255) as u16
}
