//! Time units.
//!
//! The SI unit is the second. Calendar units are fixed-length: a day is 86 400 s, a month 30 days and a year 365
//! days.

use crate::Quantity;
use measura_derive::Unit;

/// Dimension tag for [`Time`].
#[derive(Debug)]
pub enum TimeDim {}

/// Units of [`Time`].
#[derive(Clone, Copy, Debug, Unit)]
#[unit(dimension = TimeDim, name = "Time")]
pub enum TimeUnit {
    /// Second.
    #[unit(symbol = "s", alias = "sec", ratio = 1.0, si)]
    Second,
    /// Millisecond.
    #[unit(symbol = "ms", ratio = 1e-3)]
    Millisecond,
    /// Microsecond.
    #[unit(symbol = "µs", alias = "us", ratio = 1e-6)]
    Microsecond,
    /// Nanosecond.
    #[unit(symbol = "ns", ratio = 1e-9)]
    Nanosecond,
    /// Minute.
    #[unit(symbol = "min", ratio = 60.0)]
    Minute,
    /// Hour.
    #[unit(symbol = "h", alias = "hr", ratio = 3600.0)]
    Hour,
    /// Day of 86 400 s.
    #[unit(symbol = "d", ratio = 86_400.0)]
    Day,
    /// Week of seven days.
    #[unit(symbol = "wk", ratio = 604_800.0)]
    Week,
    /// Month of 30 days.
    #[unit(symbol = "mo", ratio = 2_592_000.0)]
    Month,
    /// Year of 365 days.
    #[unit(symbol = "yr", ratio = 31_536_000.0)]
    Year,
}

/// A duration, stored in seconds.
pub type Time = Quantity<TimeDim>;

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn calendar_units() {
        assert_eq!(Time::from_hours(1.5).minutes(), 90.0);
        assert_eq!(Time::from_weeks(2.0).days(), 14.0);
        assert_eq!(Time::from_years(1.0).days(), 365.0);
        assert_eq!(Time::from_months(12.0).days(), 360.0);
    }

    #[test]
    fn sub_second_units() {
        assert_relative_eq!(Time::from_milliseconds(1.0).microseconds(), 1000.0, max_relative = 1e-12);
        assert_relative_eq!(Time::from_nanoseconds(1e9).seconds(), 1.0, max_relative = 1e-12);
    }

    #[test]
    fn sum_of_durations() {
        let laps = [Time::from_seconds(61.5), Time::from_seconds(59.0), Time::from_minutes(1.0)];
        let total: Time = laps.iter().sum();
        assert_relative_eq!(total.seconds(), 180.5);
        assert_eq!(laps.iter().copied().fold(Time::ZERO, Time::max), Time::from_seconds(61.5));
    }
}
