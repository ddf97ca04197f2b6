//! Error types for the ATM simulator.

use crate::money::Money;
use thiserror::Error;

/// Result type alias for session and terminal operations
pub type Result<T> = std::result::Result<T, AtmError>;

/// Errors that end a session abnormally.
#[derive(Error, Debug)]
pub enum AtmError {
    /// Failed to read from or write to the terminal
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Masked prompt failed
    #[error("prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    /// Input ended while the session was still waiting for a line
    #[error("input closed before the session ended")]
    InputClosed,

    /// The configured account could not be opened
    #[error("invalid account configuration: {0}")]
    Account(#[from] LedgerError),
}

/// Guard violations reported by the account ledger.
///
/// None of these mutate the account; they only explain why an operation was
/// refused.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LedgerError {
    /// Amount was zero or negative
    #[error("amount must be greater than zero")]
    NonPositiveAmount,

    /// Debit larger than the current balance
    #[error("insufficient funds: requested {requested}, available {available}")]
    InsufficientFunds { requested: Money, available: Money },

    /// New PIN is not exactly four decimal digits
    #[error("PIN must be exactly 4 digits")]
    MalformedPin,

    /// Balance cannot represent the result
    #[error("amount exceeds the supported balance range")]
    BalanceOverflow,

    /// Opening balance below zero
    #[error("opening balance {0} is negative")]
    NegativeOpeningBalance(Money),
}

/// Menu selection that does not name any option.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown menu option {0:?}")]
pub struct UnknownOption(pub String);

/// Text that cannot be used as a money amount.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AmountParseError {
    /// Not a decimal number
    #[error("not a number: {0}")]
    Invalid(#[from] rust_decimal::Error),

    /// More fractional digits than whole cents
    #[error("{0} has more than 2 decimal places")]
    TooPrecise(String),
}
