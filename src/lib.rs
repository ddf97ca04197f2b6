//! # ATM Simulator
//!
//! A single-account ATM terminal: PIN entry with lockout, balance inquiry,
//! deposit, withdrawal, transfer, PIN change and a mini statement.
//!
//! ## Design Principles
//!
//! - **Fixed-point arithmetic**: amounts use 2 decimal places via `rust_decimal`
//! - **Guarded mutations**: the balance never drops below zero and every
//!   change is logged with the resulting balance
//! - **Sticky lockout**: once the PIN attempts are exhausted the card stays blocked
//! - **Pluggable terminal**: the session reads and writes through traits, so it
//!   runs the same against stdin/stdout or a script
//!
//! ## Example
//!
//! ```
//! use atm_simulator::{Account, AtmConfig, Money};
//!
//! let mut account = Account::open(&AtmConfig::default()).unwrap();
//! assert!(account.validate_pin("5472"));
//! assert!(account.deposit(Money::from_cents(20_000)));
//! assert!(!account.withdraw(Money::from_cents(150_000)));
//! assert_eq!(account.check_balance().to_string(), "1200.00");
//! ```

pub mod account;
pub mod config;
pub mod error;
pub mod menu;
pub mod money;
pub mod session;
pub mod terminal;
pub mod transaction;

pub use account::{Account, AccountState, AuthOutcome};
pub use config::AtmConfig;
pub use error::{AmountParseError, AtmError, LedgerError, Result, UnknownOption};
pub use menu::MenuOption;
pub use money::Money;
pub use session::{Session, SessionOutcome};
pub use terminal::{InputProvider, Presenter, TerminalInput, TerminalPresenter, Tone};
pub use transaction::{Transaction, TxKind};
