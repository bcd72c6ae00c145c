//! PWM binding for the display backlight

use embassy_rp::pwm::{Config as PwmConfig, Pwm};
use horologe_hal::pwm::{compare_for_level, PwmChannel};

/// Counter wrap value (125MHz / 1000 = 125kHz PWM)
pub const BACKLIGHT_TOP: u16 = 999;

/// Backlight on channel A of a PWM slice
pub struct PwmBacklight<'d> {
    pwm: Pwm<'d>,
    config: PwmConfig,
}

impl<'d> PwmBacklight<'d> {
    /// Take over `pwm` and start dark
    pub fn new(mut pwm: Pwm<'d>) -> Self {
        let mut config = PwmConfig::default();
        config.top = BACKLIGHT_TOP;
        config.compare_a = 0;
        pwm.set_config(&config);
        Self { pwm, config }
    }
}

impl<'d> PwmChannel for PwmBacklight<'d> {
    fn set_level(&mut self, level: u8) {
        self.config.compare_a = compare_for_level(level, BACKLIGHT_TOP);
        self.pwm.set_config(&self.config);
    }
}
