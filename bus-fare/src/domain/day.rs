//! Day-of-week type.

use serde::Serialize;
use std::fmt;

/// Error returned when parsing an invalid day name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid day: {reason}")]
pub struct InvalidDay {
    reason: &'static str,
}

/// A day of the week.
///
/// Parsed from the full English day name with a case-sensitive exact
/// match: "Monday" is accepted, "monday" and "Mon" are not.
///
/// # Examples
///
/// ```
/// use bus_fare::domain::Day;
///
/// let day = Day::parse("Saturday").unwrap();
/// assert!(day.is_weekend());
///
/// assert!(Day::parse("saturday").is_err());
/// assert!(Day::parse("Sat").is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Day {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Day {
    /// All seven days, Monday first.
    pub const ALL: [Day; 7] = [
        Day::Monday,
        Day::Tuesday,
        Day::Wednesday,
        Day::Thursday,
        Day::Friday,
        Day::Saturday,
        Day::Sunday,
    ];

    /// Parse a day from its full English name, case-sensitively.
    pub fn parse(s: &str) -> Result<Self, InvalidDay> {
        match s {
            "Monday" => Ok(Day::Monday),
            "Tuesday" => Ok(Day::Tuesday),
            "Wednesday" => Ok(Day::Wednesday),
            "Thursday" => Ok(Day::Thursday),
            "Friday" => Ok(Day::Friday),
            "Saturday" => Ok(Day::Saturday),
            "Sunday" => Ok(Day::Sunday),
            _ => Err(InvalidDay {
                reason: "expected a full English day name such as Monday",
            }),
        }
    }

    /// Returns the full English name of the day.
    pub fn as_str(&self) -> &'static str {
        match self {
            Day::Monday => "Monday",
            Day::Tuesday => "Tuesday",
            Day::Wednesday => "Wednesday",
            Day::Thursday => "Thursday",
            Day::Friday => "Friday",
            Day::Saturday => "Saturday",
            Day::Sunday => "Sunday",
        }
    }

    /// Returns true for Saturday and Sunday.
    pub fn is_weekend(&self) -> bool {
        matches!(self, Day::Saturday | Day::Sunday)
    }
}

impl fmt::Debug for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
