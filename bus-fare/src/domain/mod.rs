//! Domain types for the bus fare system.
//!
//! This module contains the core domain model types that represent
//! validated trip data. All types enforce their invariants at construction
//! time, so code that receives these types can trust their validity.

mod day;
mod error;
mod stop;
mod time;
mod trip;

pub use day::{Day, InvalidDay};
pub use error::CardError;
pub use stop::{InvalidStop, Route, STOP_COUNT, Stop};
pub use time::{SwipeTime, TimeError};
pub use trip::Trip;
