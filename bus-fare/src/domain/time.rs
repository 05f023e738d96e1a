//! Swipe-in time handling.
//!
//! Card readers report swipe times as "HH:MM" strings with no date
//! component. Fares depend only on the time of day, so this module keeps
//! a validated minute-precision time and nothing more.

use chrono::{NaiveTime, Timelike};
use std::fmt;

/// Error returned when parsing an invalid time string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid time: {reason}")]
pub struct TimeError {
    reason: &'static str,
}

impl TimeError {
    fn new(reason: &'static str) -> Self {
        Self { reason }
    }
}

/// A time of day at which a card was swiped in.
///
/// # Examples
///
/// ```
/// use bus_fare::domain::SwipeTime;
///
/// let time = SwipeTime::parse_hhmm("14:30").unwrap();
/// assert_eq!(time.to_string(), "14:30");
/// assert_eq!(time.hour(), 14);
/// assert_eq!(time.minute(), 30);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SwipeTime(NaiveTime);

impl SwipeTime {
    /// Create a time from hour and minute components.
    pub fn new(hour: u32, minute: u32) -> Result<Self, TimeError> {
        let time = NaiveTime::from_hms_opt(hour, minute, 0)
            .ok_or_else(|| TimeError::new("hour must be 0-23 and minute 0-59"))?;
        Ok(Self(time))
    }

    /// Parse a time from "HH:MM" 24-hour format.
    ///
    /// # Examples
    ///
    /// ```
    /// use bus_fare::domain::SwipeTime;
    ///
    /// // Valid times
    /// assert!(SwipeTime::parse_hhmm("00:00").is_ok());
    /// assert!(SwipeTime::parse_hhmm("23:59").is_ok());
    ///
    /// // Invalid formats
    /// assert!(SwipeTime::parse_hhmm("1430").is_err());
    /// assert!(SwipeTime::parse_hhmm("14:3").is_err());
    /// assert!(SwipeTime::parse_hhmm("25:00").is_err());
    /// ```
    pub fn parse_hhmm(s: &str) -> Result<Self, TimeError> {
        // Must be exactly 5 characters: HH:MM
        if s.len() != 5 {
            return Err(TimeError::new("expected HH:MM format"));
        }

        let bytes = s.as_bytes();

        if bytes[2] != b':' {
            return Err(TimeError::new("expected colon at position 2"));
        }

        let hour =
            parse_two_digits(&bytes[0..2]).ok_or_else(|| TimeError::new("invalid hour digits"))?;
        if hour > 23 {
            return Err(TimeError::new("hour must be 0-23"));
        }

        let minute = parse_two_digits(&bytes[3..5])
            .ok_or_else(|| TimeError::new("invalid minute digits"))?;
        if minute > 59 {
            return Err(TimeError::new("minute must be 0-59"));
        }

        let time = NaiveTime::from_hms_opt(hour, minute, 0)
            .ok_or_else(|| TimeError::new("invalid time"))?;

        Ok(Self(time))
    }

    /// Returns the hour (0-23).
    pub fn hour(&self) -> u32 {
        self.0.hour()
    }

    /// Returns the minute (0-59).
    pub fn minute(&self) -> u32 {
        self.0.minute()
    }

    /// Returns the underlying time of day.
    pub fn time(&self) -> NaiveTime {
        self.0
    }
}

impl fmt::Debug for SwipeTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SwipeTime({:02}:{:02})", self.hour(), self.minute())
    }
}

impl fmt::Display for SwipeTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

/// Parse two ASCII digit bytes into a u32.
fn parse_two_digits(bytes: &[u8]) -> Option<u32> {
    if bytes.len() != 2 {
        return None;
    }
    let d1 = (bytes[0] as char).to_digit(10)?;
    let d2 = (bytes[1] as char).to_digit(10)?;
    Some(d1 * 10 + d2)
}
