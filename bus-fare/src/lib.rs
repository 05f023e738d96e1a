//! Bus smart-card fare system.
//!
//! Models a single bus trip paid with a stored-value smart card: check
//! the card can enter, compute a fare from the time of day, day of week,
//! and distance travelled, then deduct it at swipe-out.

pub mod card;
pub mod cli;
pub mod domain;
pub mod fare;
