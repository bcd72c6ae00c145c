//! Edge detection and debouncing for one button

use horologe_hal::InputPin;

use super::events::ButtonEvent;
use crate::config::InputConfig;

/// Debounced state of one button
///
/// A level change is accepted only if at least `debounce_ms` have passed
/// since the previous accepted change; anything faster is contact bounce.
/// An event fires on the accepted released → pressed edge only, so holding
/// a button produces exactly one event. The first sample only establishes
/// the starting level: a button already held at boot never fires until it
/// is released and pressed again.
#[derive(Debug, Clone)]
pub struct ButtonMonitor {
    event: ButtonEvent,
    active_low: bool,
    debounce_ms: u32,
    /// `None` until the first sample
    pressed: Option<bool>,
    last_change_ms: Option<u32>,
}

impl ButtonMonitor {
    pub fn new(event: ButtonEvent, config: &InputConfig) -> Self {
        Self {
            event,
            active_low: config.active_low,
            debounce_ms: config.debounce_ms,
            pressed: None,
            last_change_ms: None,
        }
    }

    /// Debounced pressed state
    pub fn is_pressed(&self) -> bool {
        self.pressed.unwrap_or(false)
    }

    /// Feed one raw sample taken at `now_ms`
    ///
    /// `now_ms` is a free-running millisecond counter; wraparound is fine.
    pub fn sample(&mut self, level_high: bool, now_ms: u32) -> Option<ButtonEvent> {
        let pressed = level_high != self.active_low;
        match self.pressed {
            None => {
                self.pressed = Some(pressed);
                return None;
            }
            Some(current) if current == pressed => return None,
            Some(_) => {}
        }

        if let Some(last) = self.last_change_ms {
            if now_ms.wrapping_sub(last) < self.debounce_ms {
                return None;
            }
        }

        self.pressed = Some(pressed);
        self.last_change_ms = Some(now_ms);
        pressed.then_some(self.event)
    }

    /// Sample `pin` at `now_ms`
    pub fn poll<P: InputPin>(&mut self, pin: &P, now_ms: u32) -> Option<ButtonEvent> {
        self.sample(pin.is_high(), now_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::cell::Cell;

    const LOW: bool = false;
    const HIGH: bool = true;

    fn monitor() -> ButtonMonitor {
        ButtonMonitor::new(ButtonEvent::HourUp, &InputConfig::default())
    }

    #[test]
    fn test_single_press_fires_once() {
        let mut m = monitor();
        assert_eq!(m.sample(HIGH, 0), None);
        assert_eq!(m.sample(LOW, 10), Some(ButtonEvent::HourUp));
        assert!(m.is_pressed());

        // Held down
        for t in (15..1000).step_by(5) {
            assert_eq!(m.sample(LOW, t), None);
        }
    }

    #[test]
    fn test_bounce_is_ignored() {
        let mut m = monitor();
        assert_eq!(m.sample(HIGH, 0), None);
        assert_eq!(m.sample(LOW, 100), Some(ButtonEvent::HourUp));
        // Contact chatter inside the window
        assert_eq!(m.sample(HIGH, 102), None);
        assert_eq!(m.sample(LOW, 104), None);
        assert_eq!(m.sample(HIGH, 120), None);
        assert!(m.is_pressed());

        // Release after the window, then a real second press
        assert_eq!(m.sample(HIGH, 200), None);
        assert!(!m.is_pressed());
        assert_eq!(m.sample(LOW, 220), None);
        assert_eq!(m.sample(LOW, 260), Some(ButtonEvent::HourUp));
    }

    #[test]
    fn test_release_never_fires() {
        let mut m = monitor();
        m.sample(HIGH, 0);
        m.sample(LOW, 100);
        assert_eq!(m.sample(HIGH, 500), None);
        assert!(!m.is_pressed());
    }

    #[test]
    fn test_held_at_boot_does_not_fire() {
        let mut m = monitor();
        assert_eq!(m.sample(LOW, 0), None);
        assert!(m.is_pressed());

        for t in (5..500).step_by(5) {
            assert_eq!(m.sample(LOW, t), None);
        }

        // Needs a real release and press
        assert_eq!(m.sample(HIGH, 500), None);
        assert_eq!(m.sample(LOW, 600), Some(ButtonEvent::HourUp));
    }

    #[test]
    fn test_first_press_after_boot_is_not_debounced() {
        let mut m = monitor();
        assert_eq!(m.sample(HIGH, 0), None);
        assert_eq!(m.sample(LOW, 5), Some(ButtonEvent::HourUp));
    }

    #[test]
    fn test_active_high_polarity() {
        let config = InputConfig {
            active_low: false,
            ..InputConfig::default()
        };
        let mut m = ButtonMonitor::new(ButtonEvent::MinuteDown, &config);
        assert_eq!(m.sample(LOW, 0), None);
        assert_eq!(m.sample(HIGH, 5), Some(ButtonEvent::MinuteDown));
    }

    #[test]
    fn test_timer_wraparound() {
        let mut m = monitor();
        assert_eq!(m.sample(HIGH, u32::MAX - 200), None);
        assert_eq!(m.sample(LOW, u32::MAX - 100), Some(ButtonEvent::HourUp));
        assert_eq!(m.sample(HIGH, u32::MAX - 80), None);
        assert!(m.is_pressed());
        assert_eq!(m.sample(HIGH, 20), None);
        assert!(!m.is_pressed());
    }

    struct FakePin(Cell<bool>);

    impl InputPin for FakePin {
        fn is_high(&self) -> bool {
            self.0.get()
        }
    }

    #[test]
    fn test_poll_reads_pin() {
        let pin = FakePin(Cell::new(HIGH));
        let mut m = monitor();
        assert_eq!(m.poll(&pin, 0), None);

        pin.0.set(LOW);
        assert_eq!(m.poll(&pin, 5), Some(ButtonEvent::HourUp));
    }
}
