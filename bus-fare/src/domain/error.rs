//! Domain error types.
//!
//! These errors are recoverable, caller-visible conditions: the prompt
//! loop reports them as user-facing messages. They are distinct from the
//! parse errors returned by the individual domain types.

/// Balance failures on a smart card.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CardError {
    /// Balance below the minimum required at swipe-in.
    #[error("insufficient balance to swipe in: {balance:.2} is below the minimum of {minimum:.2}")]
    InsufficientEntryBalance { balance: f64, minimum: f64 },

    /// Balance cannot cover the fare at swipe-out. The balance is left
    /// unchanged; the fare is never partially applied.
    #[error("insufficient balance to exit the bus: fare {fare:.2} exceeds balance {balance:.2}")]
    InsufficientExitBalance { fare: f64, balance: f64 },
}
