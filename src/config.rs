//! Settings for the simulated card, account and terminal.

use crate::money::Money;
use std::time::Duration;

/// Everything the simulator needs to open an account and drive a session.
///
/// The binary always runs with [`AtmConfig::default`]; other values exist so
/// tests can build independent accounts and skip the terminal pauses.
#[derive(Debug, Clone)]
pub struct AtmConfig {
    /// Identifier printed on the simulated card.
    pub card_number: String,

    /// PIN the account opens with. Must be 4 decimal digits.
    pub pin: String,

    /// Balance before any transaction.
    pub opening_balance: Money,

    /// Consecutive wrong PINs that block the card.
    pub max_pin_attempts: u32,

    /// Number of entries shown on the mini statement.
    pub statement_length: usize,

    /// How long the "insert your card" banner stays up.
    pub card_insert_delay: Duration,

    /// Wait for Enter after every menu action.
    pub pause_after_action: bool,
}

impl AtmConfig {
    pub const DEFAULT_CARD_NUMBER: &'static str = "1234";
    pub const DEFAULT_PIN: &'static str = "5472";
    pub const DEFAULT_OPENING_BALANCE_CENTS: i64 = 100_000;
    pub const DEFAULT_MAX_PIN_ATTEMPTS: u32 = 3;
    pub const DEFAULT_STATEMENT_LENGTH: usize = 5;
    pub const DEFAULT_CARD_INSERT_DELAY: Duration = Duration::from_secs(3);

    /// Same account settings with no banner delay and no pauses.
    pub fn instant(mut self) -> Self {
        self.card_insert_delay = Duration::ZERO;
        self.pause_after_action = false;
        self
    }
}

impl Default for AtmConfig {
    fn default() -> Self {
        AtmConfig {
            card_number: Self::DEFAULT_CARD_NUMBER.to_string(),
            pin: Self::DEFAULT_PIN.to_string(),
            opening_balance: Money::from_cents(Self::DEFAULT_OPENING_BALANCE_CENTS),
            max_pin_attempts: Self::DEFAULT_MAX_PIN_ATTEMPTS,
            statement_length: Self::DEFAULT_STATEMENT_LENGTH,
            card_insert_delay: Self::DEFAULT_CARD_INSERT_DELAY,
            pause_after_action: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AtmConfig::default();
        assert_eq!(config.card_number, "1234");
        assert_eq!(config.pin, "5472");
        assert_eq!(config.opening_balance.to_string(), "1000.00");
        assert_eq!(config.max_pin_attempts, 3);
        assert_eq!(config.statement_length, 5);
        assert_eq!(config.card_insert_delay, Duration::from_secs(3));
        assert!(config.pause_after_action);
    }

    #[test]
    fn test_instant_keeps_account_settings() {
        let config = AtmConfig::default().instant();
        assert_eq!(config.card_insert_delay, Duration::ZERO);
        assert!(!config.pause_after_action);
        assert_eq!(config.pin, "5472");
        assert_eq!(config.max_pin_attempts, 3);
    }
}
