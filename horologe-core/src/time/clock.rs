//! Clock state and its arithmetic

/// Hours per day
pub const HOURS_IN_DAY: u8 = 24;
/// Minutes per hour
pub const MINUTES_IN_HOUR: u8 = 60;
/// Seconds per minute
pub const SECONDS_IN_MINUTE: u8 = 60;

/// Raw values rejected when constructing a [`ClockState`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ClockError {
    /// Hours outside 0-23
    HoursOutOfRange(u8),
    /// Minutes outside 0-59
    MinutesOutOfRange(u8),
    /// Seconds outside 0-59
    SecondsOutOfRange(u8),
}

/// What a tick carried into
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Rollover {
    /// Only seconds advanced
    None,
    /// Seconds carried into minutes
    Minute,
    /// Seconds carried into minutes, and minutes into hours
    Hour,
}

impl Rollover {
    /// A new minute became current
    pub fn minute_changed(self) -> bool {
        !matches!(self, Rollover::None)
    }
}

/// Wall-clock time of day
///
/// All three fields are always in range. Hours and minutes wrap, seconds
/// only move forward (or reset to zero on adjustment).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ClockState {
    hours: u8,
    minutes: u8,
    seconds: u8,
}

impl ClockState {
    /// 00:00:00
    pub const fn midnight() -> Self {
        Self {
            hours: 0,
            minutes: 0,
            seconds: 0,
        }
    }

    /// Create a clock from explicit values
    pub fn new(hours: u8, minutes: u8, seconds: u8) -> Result<Self, ClockError> {
        if hours >= HOURS_IN_DAY {
            return Err(ClockError::HoursOutOfRange(hours));
        }
        if minutes >= MINUTES_IN_HOUR {
            return Err(ClockError::MinutesOutOfRange(minutes));
        }
        if seconds >= SECONDS_IN_MINUTE {
            return Err(ClockError::SecondsOutOfRange(seconds));
        }

        Ok(Self {
            hours,
            minutes,
            seconds,
        })
    }

    /// Create a clock at the top of the given minute
    pub fn at(hours: u8, minutes: u8) -> Result<Self, ClockError> {
        Self::new(hours, minutes, 0)
    }

    pub fn hours(&self) -> u8 {
        self.hours
    }

    pub fn minutes(&self) -> u8 {
        self.minutes
    }

    pub fn seconds(&self) -> u8 {
        self.seconds
    }

    /// Advance by one second
    ///
    /// Carries seconds into minutes and minutes into hours; hours wrap
    /// at midnight.
    pub fn tick(&mut self) -> Rollover {
        self.seconds += 1;
        if self.seconds < SECONDS_IN_MINUTE {
            return Rollover::None;
        }

        self.seconds = 0;
        self.minutes += 1;
        if self.minutes < MINUTES_IN_HOUR {
            return Rollover::Minute;
        }

        self.minutes = 0;
        self.hours = (self.hours + 1) % HOURS_IN_DAY;
        Rollover::Hour
    }

    /// Shift hours by `delta`, wrapping within the day
    ///
    /// Restarts the current minute (seconds = 0).
    pub fn adjust_hour(&mut self, delta: i8) {
        self.hours = wrap(self.hours, delta, HOURS_IN_DAY);
        self.seconds = 0;
    }

    /// Shift minutes by `delta`, wrapping within the hour
    ///
    /// Never carries into hours. Restarts the current minute (seconds = 0).
    pub fn adjust_minute(&mut self, delta: i8) {
        self.minutes = wrap(self.minutes, delta, MINUTES_IN_HOUR);
        self.seconds = 0;
    }
}

/// True modulo: the result is always in `0..modulus`
fn wrap(value: u8, delta: i8, modulus: u8) -> u8 {
    (value as i16 + delta as i16).rem_euclid(modulus as i16) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn clock(h: u8, m: u8, s: u8) -> ClockState {
        ClockState::new(h, m, s).unwrap()
    }

    #[test]
    fn test_default_is_midnight() {
        assert_eq!(ClockState::default(), ClockState::midnight());
        assert_eq!(ClockState::default(), clock(0, 0, 0));
    }

    #[test]
    fn test_new_rejects_out_of_range() {
        assert_eq!(ClockState::new(24, 0, 0), Err(ClockError::HoursOutOfRange(24)));
        assert_eq!(ClockState::new(0, 60, 0), Err(ClockError::MinutesOutOfRange(60)));
        assert_eq!(ClockState::new(0, 0, 60), Err(ClockError::SecondsOutOfRange(60)));
        assert!(ClockState::new(23, 59, 59).is_ok());
    }

    #[test]
    fn test_tick_seconds_only() {
        let mut c = clock(10, 15, 20);
        assert_eq!(c.tick(), Rollover::None);
        assert_eq!(c, clock(10, 15, 21));
    }

    #[test]
    fn test_tick_minute_rollover() {
        let mut c = clock(10, 15, 59);
        assert_eq!(c.tick(), Rollover::Minute);
        assert_eq!(c, clock(10, 16, 0));
    }

    #[test]
    fn test_tick_hour_rollover() {
        let mut c = clock(21, 59, 59);
        assert_eq!(c.tick(), Rollover::Hour);
        assert_eq!(c, clock(22, 0, 0));
    }

    #[test]
    fn test_tick_midnight_wrap() {
        let mut c = clock(23, 59, 59);
        assert_eq!(c.tick(), Rollover::Hour);
        assert_eq!(c, clock(0, 0, 0));
    }

    #[test]
    fn test_adjust_hour_wraps_both_ways() {
        let mut c = clock(23, 10, 30);
        c.adjust_hour(1);
        assert_eq!(c, clock(0, 10, 0));

        c.adjust_hour(-1);
        assert_eq!(c, clock(23, 10, 0));
    }

    #[test]
    fn test_adjust_minute_does_not_carry() {
        let mut c = clock(5, 59, 12);
        c.adjust_minute(1);
        assert_eq!(c, clock(5, 0, 0));

        c.adjust_minute(-1);
        assert_eq!(c, clock(5, 59, 0));
    }

    #[test]
    fn test_adjust_minute_down_from_half_past() {
        let mut c = clock(5, 30, 42);
        c.adjust_minute(-1);
        assert_eq!(c, clock(5, 29, 0));
    }

    #[test]
    fn test_rollover_minute_changed() {
        assert!(!Rollover::None.minute_changed());
        assert!(Rollover::Minute.minute_changed());
        assert!(Rollover::Hour.minute_changed());
    }

    proptest! {
        #[test]
        fn prop_hour_round_trip(h in 0u8..24, m in 0u8..60, s in 0u8..60) {
            let mut c = clock(h, m, s);
            c.adjust_hour(1);
            c.adjust_hour(-1);
            prop_assert_eq!(c, clock(h, m, 0));
        }

        #[test]
        fn prop_minute_round_trip(h in 0u8..24, m in 0u8..60, s in 0u8..60) {
            let mut c = clock(h, m, s);
            c.adjust_minute(-1);
            c.adjust_minute(1);
            prop_assert_eq!(c, clock(h, m, 0));
        }

        #[test]
        fn prop_adjustments_stay_in_range(
            h in 0u8..24,
            m in 0u8..60,
            deltas in proptest::collection::vec((any::<bool>(), -1i8..=1), 0..200),
        ) {
            let mut c = clock(h, m, 0);
            for (is_hour, delta) in deltas {
                if is_hour {
                    c.adjust_hour(delta);
                } else {
                    c.adjust_minute(delta);
                }
                prop_assert!(c.hours() < HOURS_IN_DAY);
                prop_assert!(c.minutes() < MINUTES_IN_HOUR);
                prop_assert_eq!(c.seconds(), 0);
            }
        }

        #[test]
        fn prop_hour_of_ticks_advances_one_hour(h in 0u8..24) {
            let mut c = clock(h, 0, 0);
            for _ in 0..3600 {
                c.tick();
            }
            prop_assert_eq!(c, clock((h + 1) % 24, 0, 0));
        }

        #[test]
        fn prop_minute_of_ticks_advances_one_minute(h in 0u8..24, m in 0u8..60) {
            let mut c = clock(h, m, 0);
            let mut rollovers = 0;
            for _ in 0..60 {
                if c.tick().minute_changed() {
                    rollovers += 1;
                }
            }

            let expected_hours = if m == 59 { (h + 1) % 24 } else { h };
            prop_assert_eq!(c, clock(expected_hours, (m + 1) % 60, 0));
            prop_assert_eq!(rollovers, 1);
        }
    }
}
