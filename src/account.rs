//! Account ledger: balance, PIN, lockout counter and transaction history.
//!
//! Maintains the invariants:
//! - `balance >= 0` at all times
//! - every balance-affecting operation appends exactly one transaction whose
//!   `balance_after` equals the new balance

use crate::config::AtmConfig;
use crate::error::LedgerError;
use crate::money::Money;
use crate::transaction::{Transaction, TxKind};
use log::{debug, warn};

/// Number of characters in a valid PIN.
pub const PIN_LENGTH: usize = 4;

/// Authentication state of the account.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountState {
    /// Card usable; `attempts` wrong PINs entered since the last success.
    Active { attempts: u32 },

    /// Attempts exhausted. Sticky for the lifetime of the account.
    Blocked,
}

/// Result of a single PIN check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthOutcome {
    /// PIN matched; attempt counter reset.
    Granted,

    /// Wrong PIN, card still usable.
    Denied { remaining: u32 },

    /// Card is blocked, either by this attempt or an earlier one.
    Blocked,
}

/// The single simulated account.
///
/// # Invariants
///
/// - `pin_attempts <= max_pin_attempts`; once equal the account is blocked and
///   no PIN, correct or not, is accepted again
/// - `pin` is always exactly [`PIN_LENGTH`] ASCII digits
/// - `history` is append-only and in chronological order
#[derive(Debug, Clone)]
pub struct Account {
    card_number: String,
    pin: String,
    balance: Money,
    pin_attempts: u32,
    max_pin_attempts: u32,
    history: Vec<Transaction>,
}

impl Account {
    /// Opens an account from the configured card, PIN and opening balance.
    pub fn open(config: &AtmConfig) -> Result<Self, LedgerError> {
        if !is_valid_pin(&config.pin) {
            return Err(LedgerError::MalformedPin);
        }
        if config.opening_balance.is_negative() {
            return Err(LedgerError::NegativeOpeningBalance(config.opening_balance));
        }

        Ok(Account {
            card_number: config.card_number.clone(),
            pin: config.pin.clone(),
            balance: config.opening_balance,
            pin_attempts: 0,
            max_pin_attempts: config.max_pin_attempts,
            history: Vec::new(),
        })
    }

    pub fn card_number(&self) -> &str {
        &self.card_number
    }

    pub fn state(&self) -> AccountState {
        if self.is_blocked() {
            AccountState::Blocked
        } else {
            AccountState::Active {
                attempts: self.pin_attempts,
            }
        }
    }

    /// Returns `true` once the wrong-PIN limit has been reached.
    pub fn is_blocked(&self) -> bool {
        self.pin_attempts >= self.max_pin_attempts
    }

    /// Wrong PINs still allowed before the card is blocked.
    pub fn remaining_attempts(&self) -> u32 {
        self.max_pin_attempts.saturating_sub(self.pin_attempts)
    }

    /// Checks a PIN and updates the lockout counter.
    pub fn authenticate(&mut self, input: &str) -> AuthOutcome {
        if self.is_blocked() {
            warn!("Card {}: PIN entered on blocked card", self.card_number);
            return AuthOutcome::Blocked;
        }

        if input == self.pin {
            self.pin_attempts = 0;
            debug!("Card {}: PIN accepted", self.card_number);
            return AuthOutcome::Granted;
        }

        self.pin_attempts += 1;
        if self.is_blocked() {
            warn!(
                "Card {}: blocked after {} incorrect PINs",
                self.card_number, self.pin_attempts
            );
            AuthOutcome::Blocked
        } else {
            let remaining = self.remaining_attempts();
            warn!(
                "Card {}: incorrect PIN, {} attempts remaining",
                self.card_number, remaining
            );
            AuthOutcome::Denied { remaining }
        }
    }

    /// Boolean form of [`Account::authenticate`].
    pub fn validate_pin(&mut self, input: &str) -> bool {
        self.authenticate(input) == AuthOutcome::Granted
    }

    /// Current balance. No side effects.
    pub fn check_balance(&self) -> Money {
        self.balance
    }

    /// Credits `amount` to the account.
    ///
    /// Fails with [`LedgerError::NonPositiveAmount`] unless `amount > 0`.
    pub fn try_deposit(&mut self, amount: Money) -> Result<&Transaction, LedgerError> {
        if !amount.is_positive() {
            return Err(LedgerError::NonPositiveAmount);
        }
        let balance = self
            .balance
            .checked_add(amount)
            .ok_or(LedgerError::BalanceOverflow)?;

        self.balance = balance;
        debug!("Card {}: deposited {}", self.card_number, amount);
        Ok(self.record(TxKind::Deposit, amount))
    }

    pub fn deposit(&mut self, amount: Money) -> bool {
        self.try_deposit(amount).is_ok()
    }

    /// Debits `amount` as a cash withdrawal.
    ///
    /// Requires `0 < amount <= balance`.
    pub fn try_withdraw(&mut self, amount: Money) -> Result<&Transaction, LedgerError> {
        self.debit(TxKind::Withdrawal, amount)
    }

    pub fn withdraw(&mut self, amount: Money) -> bool {
        self.try_withdraw(amount).is_ok()
    }

    /// Debits `amount` towards `target`.
    ///
    /// Same guard as a withdrawal; the target identifier is not validated.
    pub fn try_transfer(&mut self, amount: Money, target: &str) -> Result<&Transaction, LedgerError> {
        self.debit(TxKind::TransferTo(target.to_string()), amount)
    }

    pub fn transfer(&mut self, amount: Money, target: &str) -> bool {
        self.try_transfer(amount, target).is_ok()
    }

    /// Replaces the PIN. The change is logged with a zero amount.
    pub fn try_change_pin(&mut self, new_pin: &str) -> Result<&Transaction, LedgerError> {
        if !is_valid_pin(new_pin) {
            return Err(LedgerError::MalformedPin);
        }

        self.pin = new_pin.to_string();
        debug!("Card {}: PIN changed", self.card_number);
        Ok(self.record(TxKind::PinChange, Money::ZERO))
    }

    pub fn change_pin(&mut self, new_pin: &str) -> bool {
        self.try_change_pin(new_pin).is_ok()
    }

    /// The last `n` transactions, oldest first.
    pub fn recent_transactions(&self, n: usize) -> &[Transaction] {
        let start = self.history.len().saturating_sub(n);
        &self.history[start..]
    }

    /// Full history in chronological order.
    pub fn transactions(&self) -> &[Transaction] {
        &self.history
    }

    fn debit(&mut self, kind: TxKind, amount: Money) -> Result<&Transaction, LedgerError> {
        if !amount.is_positive() {
            return Err(LedgerError::NonPositiveAmount);
        }
        if amount > self.balance {
            return Err(LedgerError::InsufficientFunds {
                requested: amount,
                available: self.balance,
            });
        }
        let balance = self
            .balance
            .checked_sub(amount)
            .ok_or(LedgerError::BalanceOverflow)?;

        self.balance = balance;
        debug!("Card {}: {} of {}", self.card_number, kind, amount);
        Ok(self.record(kind, -amount))
    }

    fn record(&mut self, kind: TxKind, amount: Money) -> &Transaction {
        let index = self.history.len();
        self.history.push(Transaction::new(kind, amount, self.balance));
        &self.history[index]
    }
}

/// Returns `true` if `pin` is exactly [`PIN_LENGTH`] decimal digits.
pub fn is_valid_pin(pin: &str) -> bool {
    pin.len() == PIN_LENGTH && pin.bytes().all(|b| b.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn money(s: &str) -> Money {
        Money::from_str(s).unwrap()
    }

    fn open() -> Account {
        Account::open(&AtmConfig::default()).unwrap()
    }

    #[test]
    fn test_new_account_defaults() {
        let account = open();
        assert_eq!(account.card_number(), "1234");
        assert_eq!(account.check_balance().to_string(), "1000.00");
        assert_eq!(account.state(), AccountState::Active { attempts: 0 });
        assert!(account.transactions().is_empty());
    }

    #[test]
    fn test_open_rejects_bad_config() {
        let config = AtmConfig {
            pin: "12345".into(),
            ..AtmConfig::default()
        };
        assert_eq!(Account::open(&config).unwrap_err(), LedgerError::MalformedPin);

        let config = AtmConfig {
            opening_balance: money("-1"),
            ..AtmConfig::default()
        };
        assert!(matches!(
            Account::open(&config),
            Err(LedgerError::NegativeOpeningBalance(_))
        ));
    }

    #[test]
    fn test_deposit_records_transaction() {
        let mut account = open();
        let tx = account.try_deposit(money("200")).unwrap().clone();

        assert_eq!(tx.kind, TxKind::Deposit);
        assert_eq!(tx.amount, money("200"));
        assert_eq!(tx.balance_after, money("1200"));
        assert_eq!(account.check_balance(), money("1200"));
        assert_eq!(account.transactions().len(), 1);
    }

    #[test]
    fn test_deposit_rejects_non_positive() {
        let mut account = open();
        assert_eq!(account.try_deposit(Money::ZERO).unwrap_err(), LedgerError::NonPositiveAmount);
        assert!(!account.deposit(money("-5")));
        assert_eq!(account.check_balance(), money("1000"));
        assert!(account.transactions().is_empty());
    }

    #[test]
    fn test_withdraw_guards() {
        let mut account = open();

        assert_eq!(
            account.try_withdraw(money("1000.01")).unwrap_err(),
            LedgerError::InsufficientFunds {
                requested: money("1000.01"),
                available: money("1000"),
            }
        );
        assert_eq!(account.try_withdraw(Money::ZERO).unwrap_err(), LedgerError::NonPositiveAmount);
        assert!(account.transactions().is_empty());

        let tx = account.try_withdraw(money("1000")).unwrap();
        assert_eq!(tx.amount, money("-1000"));
        assert_eq!(tx.balance_after, Money::ZERO);
        assert_eq!(account.check_balance(), Money::ZERO);
    }

    #[test]
    fn test_transfer_accepts_any_target() {
        let mut account = open();
        assert!(account.transfer(money("100"), ""));
        assert!(account.transfer(money("50.25"), "not an account"));
        assert!(!account.transfer(money("5000"), "1111"));

        let kinds: Vec<_> = account.transactions().iter().map(|t| t.kind.clone()).collect();
        assert_eq!(
            kinds,
            vec![
                TxKind::TransferTo(String::new()),
                TxKind::TransferTo("not an account".into()),
            ]
        );
        assert_eq!(account.check_balance(), money("849.75"));
    }

    #[test]
    fn test_change_pin_validation() {
        let mut account = open();
        for bad in ["", "123", "12345", "12a4", " 123", "١٢٣٤"] {
            assert_eq!(account.try_change_pin(bad).unwrap_err(), LedgerError::MalformedPin);
        }
        assert!(account.transactions().is_empty());

        let tx = account.try_change_pin("0000").unwrap();
        assert_eq!(tx.kind, TxKind::PinChange);
        assert_eq!(tx.amount, Money::ZERO);
        assert_eq!(tx.balance_after, money("1000"));
        assert!(account.validate_pin("0000"));
    }

    #[test]
    fn test_lockout_after_max_attempts() {
        let mut account = open();
        assert_eq!(account.authenticate("0000"), AuthOutcome::Denied { remaining: 2 });
        assert_eq!(account.authenticate("1111"), AuthOutcome::Denied { remaining: 1 });
        assert_eq!(account.state(), AccountState::Active { attempts: 2 });
        assert_eq!(account.authenticate("2222"), AuthOutcome::Blocked);
        assert_eq!(account.state(), AccountState::Blocked);

        assert_eq!(account.authenticate("5472"), AuthOutcome::Blocked);
        assert!(!account.validate_pin("5472"));
        assert_eq!(account.remaining_attempts(), 0);
    }

    #[test]
    fn test_success_resets_attempts() {
        let mut account = open();
        assert!(!account.validate_pin("0000"));
        assert!(!account.validate_pin("0000"));
        assert!(account.validate_pin("5472"));
        assert_eq!(account.state(), AccountState::Active { attempts: 0 });
        assert_eq!(account.remaining_attempts(), 3);
    }

    #[test]
    fn test_recent_transactions_window() {
        let mut account = open();
        assert!(account.recent_transactions(5).is_empty());

        for cents in 1..=7 {
            account.deposit(Money::from_cents(cents));
        }

        let recent = account.recent_transactions(5);
        assert_eq!(recent.len(), 5);
        let amounts: Vec<_> = recent.iter().map(|t| t.amount).collect();
        assert_eq!(amounts, (3..=7).map(Money::from_cents).collect::<Vec<_>>());
        assert_eq!(recent[4].balance_after, account.check_balance());

        assert_eq!(account.recent_transactions(100).len(), 7);
        assert!(account.recent_transactions(0).is_empty());
    }

    #[test]
    fn test_is_valid_pin() {
        assert!(is_valid_pin("0123"));
        assert!(!is_valid_pin("012"));
        assert!(!is_valid_pin("０１２３"));
    }
}
