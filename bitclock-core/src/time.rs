//! Time-of-day value
//!
//! A validated `hour:minute:second` snapshot and its decomposition into
//! the six decimal digits shown by the clock face.

use core::fmt::Write;

use heapless::String;

/// Reasons a time source could not deliver a time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TimeError {
    /// No time is available yet (not synchronised, clock stopped)
    Unavailable,
    /// The source produced a field outside its legal range
    InvalidValue,
}

/// Immutable time-of-day snapshot
///
/// Always holds `hour < 24`, `minute < 60`, `second < 60`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TimeOfDay {
    hour: u8,
    minute: u8,
    second: u8,
}

impl TimeOfDay {
    /// Midnight
    pub const MIDNIGHT: Self = Self {
        hour: 0,
        minute: 0,
        second: 0,
    };

    /// Create a time of day, rejecting out-of-range fields
    pub fn new(hour: u8, minute: u8, second: u8) -> Result<Self, TimeError> {
        if hour > 23 || minute > 59 || second > 59 {
            return Err(TimeError::InvalidValue);
        }
        Ok(Self {
            hour,
            minute,
            second,
        })
    }

    /// Create a time of day from seconds since midnight (wraps at 24h)
    pub const fn from_seconds_of_day(secs: u32) -> Self {
        let secs = secs % 86_400;
        Self {
            hour: (secs / 3600) as u8,
            minute: ((secs / 60) % 60) as u8,
            second: (secs % 60) as u8,
        }
    }

    pub const fn hour(&self) -> u8 {
        self.hour
    }

    pub const fn minute(&self) -> u8 {
        self.minute
    }

    pub const fn second(&self) -> u8 {
        self.second
    }

    /// Decimal digits in column order: hour tens/ones, minute tens/ones,
    /// second tens/ones
    pub const fn digits(&self) -> [u8; 6] {
        [
            self.hour / 10,
            self.hour % 10,
            self.minute / 10,
            self.minute % 10,
            self.second / 10,
            self.second % 10,
        ]
    }

    /// Format as `HH:MM:SS`
    pub fn format(&self) -> String<8> {
        let mut s = String::new();
        // 8 characters always fit
        let _ = write!(s, "{:02}:{:02}:{:02}", self.hour, self.minute, self.second);
        s
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_bounds() {
        assert!(TimeOfDay::new(0, 0, 0).is_ok());
        assert!(TimeOfDay::new(23, 59, 59).is_ok());
    }

    #[test]
    fn test_out_of_range() {
        assert_eq!(TimeOfDay::new(24, 0, 0), Err(TimeError::InvalidValue));
        assert_eq!(TimeOfDay::new(0, 60, 0), Err(TimeError::InvalidValue));
        assert_eq!(TimeOfDay::new(0, 0, 60), Err(TimeError::InvalidValue));
    }

    #[test]
    fn test_digits() {
        let t = TimeOfDay::new(9, 5, 47).unwrap();
        assert_eq!(t.digits(), [0, 9, 0, 5, 4, 7]);

        let t = TimeOfDay::new(23, 59, 58).unwrap();
        assert_eq!(t.digits(), [2, 3, 5, 9, 5, 8]);
    }

    #[test]
    fn test_format() {
        let t = TimeOfDay::new(9, 5, 47).unwrap();
        assert_eq!(t.format().as_str(), "09:05:47");
    }

    #[test]
    fn test_from_seconds_of_day() {
        assert_eq!(TimeOfDay::from_seconds_of_day(0), TimeOfDay::MIDNIGHT);
        assert_eq!(
            TimeOfDay::from_seconds_of_day(9 * 3600 + 5 * 60 + 47),
            TimeOfDay::new(9, 5, 47).unwrap()
        );
        // Wraps past midnight
        assert_eq!(
            TimeOfDay::from_seconds_of_day(86_400 + 61),
            TimeOfDay::new(0, 1, 1).unwrap()
        );
    }
}
