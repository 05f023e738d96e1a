//! A single bus trip request.

use super::{Day, Stop, SwipeTime};

/// The parameters of one bus trip, as captured at swipe-in.
///
/// A trip is ephemeral: it exists only to ask the fare schedule what the
/// trip costs. All fields are validated types, so any `Trip` value is a
/// well-formed request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Trip {
    /// Time of day the card was swiped in.
    pub swipe_in_time: SwipeTime,
    /// Day of the week of the trip.
    pub swipe_in_day: Day,
    /// Stop where the trip starts.
    pub start: Stop,
    /// Stop where the trip ends.
    pub end: Stop,
}

impl Trip {
    /// Create a trip request.
    pub fn new(swipe_in_time: SwipeTime, swipe_in_day: Day, start: Stop, end: Stop) -> Self {
        Self {
            swipe_in_time,
            swipe_in_day,
            start,
            end,
        }
    }

    /// Number of stops travelled, regardless of direction.
    ///
    /// A trip that starts and ends at the same stop travels zero stops.
    pub fn stops_travelled(&self) -> u32 {
        self.start.distance_to(self.end)
    }
}
