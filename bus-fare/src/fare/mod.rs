//! Fare calculation.
//!
//! The schedule holds the tariff constants; the calculation is a pure
//! function of a trip and a schedule.

mod calculate;
mod schedule;

pub use calculate::calculate_fare;
pub use schedule::FareSchedule;
