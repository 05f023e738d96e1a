//! The stored-value smart card.

use crate::domain::CardError;

/// Minimum balance required to swipe in.
pub const MIN_ENTRY_BALANCE: f64 = 10.0;

/// A smart card holding a stored monetary balance.
///
/// The balance is only mutated through [`SmartCard::deduct`], which
/// refuses to overdraw, so it never goes negative.
///
/// # Examples
///
/// ```
/// use bus_fare::card::SmartCard;
///
/// let mut card = SmartCard::new(15.0);
/// assert!(card.can_enter());
///
/// card.deduct(2.40).unwrap();
/// assert_eq!(card.balance(), 12.60);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct SmartCard {
    balance: f64,
}

impl SmartCard {
    /// Create a card with an initial balance.
    ///
    /// The caller is responsible for ensuring the initial balance meets
    /// [`MIN_ENTRY_BALANCE`]; a card below the minimum is constructible
    /// but will refuse entry.
    pub fn new(balance: f64) -> Self {
        Self { balance }
    }

    /// Returns the current balance.
    pub fn balance(&self) -> f64 {
        self.balance
    }

    /// Returns true if the balance meets the minimum required to swipe in.
    pub fn can_enter(&self) -> bool {
        self.balance >= MIN_ENTRY_BALANCE
    }

    /// Check the card in at the start of a trip.
    ///
    /// The error-typed form of [`SmartCard::can_enter`]. No side effects.
    pub fn swipe_in(&self) -> Result<(), CardError> {
        if self.can_enter() {
            Ok(())
        } else {
            Err(CardError::InsufficientEntryBalance {
                balance: self.balance,
                minimum: MIN_ENTRY_BALANCE,
            })
        }
    }

    /// Deduct a fare from the balance.
    ///
    /// Fails with [`CardError::InsufficientExitBalance`] if the balance
    /// cannot cover the fare, leaving the balance unchanged.
    pub fn deduct(&mut self, fare: f64) -> Result<(), CardError> {
        if self.balance >= fare {
            self.balance -= fare;
            Ok(())
        } else {
            Err(CardError::InsufficientExitBalance {
                fare,
                balance: self.balance,
            })
        }
    }
}
