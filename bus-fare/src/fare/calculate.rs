//! Fare calculation for a single trip.
//!
//! Pure: the fare is a function of the trip parameters and the schedule,
//! with no side effects.

use tracing::debug;

use crate::domain::Trip;

use super::schedule::FareSchedule;

/// Calculate the fare for a trip under a schedule.
///
/// The first `full_rate_stops` stops are billed at the full per-stop rate
/// and any further stops at the tier-discounted rate. Weekend trips are
/// then discounted, and the result is capped at `fare_cap`.
///
/// # Examples
///
/// ```
/// use bus_fare::domain::{Day, Stop, SwipeTime, Trip};
/// use bus_fare::fare::{FareSchedule, calculate_fare};
///
/// let trip = Trip::new(
///     SwipeTime::parse_hhmm("14:00").unwrap(),
///     Day::Monday,
///     Stop::new(1).unwrap(),
///     Stop::new(4).unwrap(),
/// );
///
/// let fare = calculate_fare(&FareSchedule::default(), &trip);
/// assert!((fare - 2.40).abs() < 1e-9);
/// ```
pub fn calculate_fare(schedule: &FareSchedule, trip: &Trip) -> f64 {
    let stops = trip.stops_travelled();
    let rate = schedule.fare_per_stop(trip.swipe_in_time);

    let base = if stops > schedule.full_rate_stops {
        let discounted = f64::from(stops - schedule.full_rate_stops);
        f64::from(schedule.full_rate_stops) * rate + discounted * rate * schedule.tier_multiplier
    } else {
        f64::from(stops) * rate
    };

    let weekend = trip.swipe_in_day.is_weekend();
    let discounted = if weekend {
        base * schedule.weekend_multiplier
    } else {
        base
    };

    let fare = discounted.min(schedule.fare_cap);

    debug!(
        stops,
        rate,
        weekend,
        fare,
        "calculated fare for trip from {} to {}",
        trip.start,
        trip.end
    );

    fare
}
