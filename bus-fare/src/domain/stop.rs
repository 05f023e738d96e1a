//! Bus stop types.
//!
//! The route is a flat numbered list of stops. Stop numbers are valid by
//! construction, so the fare calculation never needs to range-check them.

use std::fmt;

/// Number of stops on the route.
pub const STOP_COUNT: u8 = 15;

/// Error returned when a stop number is out of range.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid stop: {reason}")]
pub struct InvalidStop {
    reason: &'static str,
}

/// A stop number on the route, in the range 1 to [`STOP_COUNT`].
///
/// # Examples
///
/// ```
/// use bus_fare::domain::Stop;
///
/// let start = Stop::new(1).unwrap();
/// let end = Stop::new(4).unwrap();
/// assert_eq!(start.distance_to(end), 3);
/// assert_eq!(end.distance_to(start), 3);
///
/// // Out of range is rejected
/// assert!(Stop::new(0).is_err());
/// assert!(Stop::new(16).is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Stop(u8);

impl Stop {
    /// Create a stop from its number on the route.
    pub fn new(number: u8) -> Result<Self, InvalidStop> {
        if number == 0 {
            return Err(InvalidStop {
                reason: "stop numbers start at 1",
            });
        }
        if number > STOP_COUNT {
            return Err(InvalidStop {
                reason: "stop number exceeds the route length",
            });
        }
        Ok(Stop(number))
    }

    /// Returns the stop number (1-based).
    pub fn number(&self) -> u8 {
        self.0
    }

    /// Number of stops between this stop and `other`, direction-agnostic.
    pub fn distance_to(&self, other: Stop) -> u32 {
        u32::from(self.0.abs_diff(other.0))
    }
}

impl fmt::Debug for Stop {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Stop({})", self.0)
    }
}

impl fmt::Display for Stop {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Stop{}", self.0)
    }
}

/// The fixed route of numbered stops.
///
/// Holds the stop names ("Stop1" through "Stop15") for prompt context;
/// the fare formula itself only uses stop numbers.
#[derive(Debug, Clone)]
pub struct Route {
    names: Vec<String>,
}

impl Route {
    /// Create the route with its [`STOP_COUNT`] numbered stops.
    pub fn new() -> Self {
        let names = (1..=STOP_COUNT).map(|i| format!("Stop{i}")).collect();
        Self { names }
    }

    /// Number of stops on the route.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Returns true if the route has no stops.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Names of all stops, in route order.
    pub fn stop_names(&self) -> &[String] {
        &self.names
    }
}

impl Default for Route {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accept_full_range() {
        for n in 1..=STOP_COUNT {
            assert_eq!(Stop::new(n).unwrap().number(), n);
        }
    }

    #[test]
    fn reject_out_of_range() {
        assert!(Stop::new(0).is_err());
        assert!(Stop::new(STOP_COUNT + 1).is_err());
        assert!(Stop::new(u8::MAX).is_err());
    }

    #[test]
    fn distance_is_absolute_difference() {
        let a = Stop::new(1).unwrap();
        let b = Stop::new(15).unwrap();

        assert_eq!(a.distance_to(b), 14);
        assert_eq!(b.distance_to(a), 14);
        assert_eq!(a.distance_to(a), 0);
    }

    #[test]
    fn display() {
        assert_eq!(Stop::new(7).unwrap().to_string(), "Stop7");
        assert_eq!(format!("{:?}", Stop::new(7).unwrap()), "Stop(7)");
    }

    #[test]
    fn route_has_fifteen_stops() {
        let route = Route::new();

        assert_eq!(route.len(), 15);
        assert!(!route.is_empty());
        assert_eq!(route.stop_names()[0], "Stop1");
        assert_eq!(route.stop_names()[14], "Stop15");
    }
}
