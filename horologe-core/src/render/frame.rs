//! Text shown for one frame

use core::fmt::Write;

use heapless::String;

use crate::time::{ClockState, HOURS_IN_DAY, MINUTES_IN_HOUR};

/// Capacity of the frame text ("HH:MM" plus suffix)
pub const FRAME_TEXT_LEN: usize = 16;

pub type FrameText = String<FRAME_TEXT_LEN>;

/// Time of day that gets a suffix appended on screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MarkerTime {
    hours: u8,
    minutes: u8,
}

impl MarkerTime {
    pub const DEFAULT: MarkerTime = MarkerTime {
        hours: 22,
        minutes: 22,
    };

    pub fn new(hours: u8, minutes: u8) -> Option<Self> {
        (hours < HOURS_IN_DAY && minutes < MINUTES_IN_HOUR).then_some(Self { hours, minutes })
    }

    /// Parse `"HH:MM"` (24-hour, two digits each)
    pub fn parse(s: &str) -> Option<Self> {
        let (h, m) = s.split_once(':')?;
        if h.len() != 2 || m.len() != 2 {
            return None;
        }
        if !h.bytes().chain(m.bytes()).all(|b| b.is_ascii_digit()) {
            return None;
        }
        Self::new(h.parse().ok()?, m.parse().ok()?)
    }

    pub fn hours(&self) -> u8 {
        self.hours
    }

    pub fn minutes(&self) -> u8 {
        self.minutes
    }

    /// The clock currently shows this time (seconds ignored)
    pub fn matches(&self, clock: &ClockState) -> bool {
        clock.hours() == self.hours && clock.minutes() == self.minutes
    }
}

impl Default for MarkerTime {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Build the on-screen text: zero-padded `"HH:MM"`, plus the suffix when
/// the clock sits on the marker time
pub fn frame_text(clock: &ClockState, marker: Option<(MarkerTime, &str)>) -> FrameText {
    let mut text = FrameText::new();
    // Five digits and a colon always fit
    let _ = write!(text, "{:02}:{:02}", clock.hours(), clock.minutes());

    if let Some((time, suffix)) = marker {
        if time.matches(clock) {
            let _ = text.push_str(suffix);
        }
    }

    text
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(h: u8, m: u8) -> ClockState {
        ClockState::at(h, m).unwrap()
    }

    #[test]
    fn test_zero_padded() {
        assert_eq!(frame_text(&at(0, 0), None).as_str(), "00:00");
        assert_eq!(frame_text(&at(9, 5), None).as_str(), "09:05");
        assert_eq!(frame_text(&at(23, 59), None).as_str(), "23:59");
    }

    #[test]
    fn test_marker_suffix() {
        let marker = Some((MarkerTime::DEFAULT, "!"));
        assert_eq!(frame_text(&at(22, 22), marker).as_str(), "22:22!");
        assert_eq!(frame_text(&at(22, 0), marker).as_str(), "22:00");
        assert_eq!(frame_text(&at(22, 23), marker).as_str(), "22:23");
        assert_eq!(frame_text(&at(22, 22), None).as_str(), "22:22");
    }

    #[test]
    fn test_marker_ignores_seconds() {
        let clock = ClockState::new(22, 22, 41).unwrap();
        assert!(MarkerTime::DEFAULT.matches(&clock));
    }

    #[test]
    fn test_parse_marker() {
        assert_eq!(MarkerTime::parse("22:22"), Some(MarkerTime::DEFAULT));
        assert_eq!(MarkerTime::parse("07:30"), MarkerTime::new(7, 30));
        assert_eq!(MarkerTime::parse("7:30"), None);
        assert_eq!(MarkerTime::parse("24:00"), None);
        assert_eq!(MarkerTime::parse("12:60"), None);
        assert_eq!(MarkerTime::parse("+1:00"), None);
        assert_eq!(MarkerTime::parse("1230"), None);
    }
}
