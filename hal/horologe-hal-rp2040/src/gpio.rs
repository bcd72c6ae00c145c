//! GPIO bindings for buttons and plain outputs
//!
//! Thin wrappers that let embassy-rp pins satisfy the `horologe-hal`
//! traits.

use embassy_rp::gpio::{Input, Output};

/// A push button read by polling
pub struct ButtonPin<'d> {
    input: Input<'d>,
}

impl<'d> ButtonPin<'d> {
    /// Wrap a configured input (pull-up expected for active-low buttons)
    pub fn new(input: Input<'d>) -> Self {
        Self { input }
    }
}

impl<'d> horologe_hal::InputPin for ButtonPin<'d> {
    fn is_high(&self) -> bool {
        self.input.is_high()
    }
}

/// Push-pull output (LED channels)
pub struct DigitalOutput<'d> {
    output: Output<'d>,
}

impl<'d> DigitalOutput<'d> {
    /// Wrap a configured output
    pub fn new(output: Output<'d>) -> Self {
        Self { output }
    }
}

impl<'d> horologe_hal::OutputPin for DigitalOutput<'d> {
    fn set_high(&mut self) {
        self.output.set_high();
    }

    fn set_low(&mut self) {
        self.output.set_low();
    }
}
