//! Fare schedule configuration.

use crate::domain::SwipeTime;

/// The tariff applied to a single bus trip.
///
/// The default schedule is the one the route operates with; the fields
/// are public so tests can exercise other tariffs.
#[derive(Debug, Clone)]
pub struct FareSchedule {
    /// Per-stop rate during the night window.
    pub night_rate: f64,

    /// Per-stop rate outside the night window.
    pub day_rate: f64,

    /// Start of the night window (inclusive).
    pub night_start: SwipeTime,

    /// End of the night window (inclusive).
    ///
    /// The window wraps midnight: a time counts as night when it is at or
    /// after `night_start` or at or before `night_end`. Both boundaries
    /// are inclusive.
    pub night_end: SwipeTime,

    /// Stops billed at the full per-stop rate before the discount tier.
    pub full_rate_stops: u32,

    /// Multiplier for stops beyond the full-rate tier.
    pub tier_multiplier: f64,

    /// Multiplier applied on Saturdays and Sundays.
    pub weekend_multiplier: f64,

    /// Maximum chargeable fare per trip.
    pub fare_cap: f64,
}

impl FareSchedule {
    /// Returns the per-stop rate for a swipe-in time.
    ///
    /// # Examples
    ///
    /// ```
    /// use bus_fare::domain::SwipeTime;
    /// use bus_fare::fare::FareSchedule;
    ///
    /// let schedule = FareSchedule::default();
    ///
    /// let night = SwipeTime::parse_hhmm("02:00").unwrap();
    /// assert_eq!(schedule.fare_per_stop(night), 0.60);
    ///
    /// let day = SwipeTime::parse_hhmm("14:00").unwrap();
    /// assert_eq!(schedule.fare_per_stop(day), 0.80);
    /// ```
    pub fn fare_per_stop(&self, time: SwipeTime) -> f64 {
        if time >= self.night_start || time <= self.night_end {
            self.night_rate
        } else {
            self.day_rate
        }
    }
}

impl Default for FareSchedule {
    fn default() -> Self {
        Self {
            night_rate: 0.60,
            day_rate: 0.80,
            night_start: SwipeTime::new(23, 0).expect("23:00 is a valid time"),
            night_end: SwipeTime::new(6, 0).expect("06:00 is a valid time"),
            full_rate_stops: 5,
            tier_multiplier: 0.8,
            weekend_multiplier: 0.9,
            fare_cap: 10.0,
        }
    }
}
