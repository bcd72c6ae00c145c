//! Button events and their effect on the clock

use crate::time::ClockState;

/// A button that was just pressed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ButtonEvent {
    HourUp,
    HourDown,
    MinuteUp,
    MinuteDown,
}

impl ButtonEvent {
    pub const ALL: [ButtonEvent; 4] = [
        ButtonEvent::HourUp,
        ButtonEvent::HourDown,
        ButtonEvent::MinuteUp,
        ButtonEvent::MinuteDown,
    ];

    /// Clock change requested by this button
    pub const fn adjustment(self) -> Adjustment {
        match self {
            ButtonEvent::HourUp => Adjustment::Hour(1),
            ButtonEvent::HourDown => Adjustment::Hour(-1),
            ButtonEvent::MinuteUp => Adjustment::Minute(1),
            ButtonEvent::MinuteDown => Adjustment::Minute(-1),
        }
    }
}

/// Signed change to one clock field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Adjustment {
    Hour(i8),
    Minute(i8),
}

impl Adjustment {
    pub fn apply(self, clock: &mut ClockState) {
        match self {
            Adjustment::Hour(delta) => clock.adjust_hour(delta),
            Adjustment::Minute(delta) => clock.adjust_minute(delta),
        }
    }
}
