//! Status LED abstraction

use crate::gpio::OutputPin;

/// Write-only RGB status LED
pub trait RgbLed {
    /// Set the LED colour. `(0, 0, 0)` switches it off.
    fn set_rgb(&mut self, r: u8, g: u8, b: u8);

    /// Switch the LED off
    fn off(&mut self) {
        self.set_rgb(0, 0, 0);
    }
}

/// RGB LED built from three digital channels
///
/// Each channel is either fully on or off; any non-zero component lights
/// its channel. `active_low` covers common-anode parts where driving the
/// pin low lights the LED.
pub struct DigitalRgbLed<R, G, B> {
    red: R,
    green: G,
    blue: B,
    active_low: bool,
}

impl<R: OutputPin, G: OutputPin, B: OutputPin> DigitalRgbLed<R, G, B> {
    /// Create a new LED from its three channel pins
    pub fn new(red: R, green: G, blue: B, active_low: bool) -> Self {
        Self {
            red,
            green,
            blue,
            active_low,
        }
    }

    /// Consume the LED and return the channel pins
    pub fn release(self) -> (R, G, B) {
        (self.red, self.green, self.blue)
    }
}

impl<R: OutputPin, G: OutputPin, B: OutputPin> RgbLed for DigitalRgbLed<R, G, B> {
    fn set_rgb(&mut self, r: u8, g: u8, b: u8) {
        let level = |value: u8| (value > 0) != self.active_low;
        let (r, g, b) = (level(r), level(g), level(b));
        self.red.set_state(r);
        self.green.set_state(g);
        self.blue.set_state(b);
    }
}
