//! Transaction records kept in the account history.

use crate::money::Money;
use chrono::{DateTime, Local};
use serde::Serialize;
use std::fmt;

/// What a transaction did.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TxKind {
    /// Credit to the account.
    Deposit,

    /// Cash taken out of the account.
    Withdrawal,

    /// Debit sent to another account. The target is free text and never checked.
    TransferTo(String),

    /// PIN replaced. Logged with a zero amount.
    PinChange,
}

impl fmt::Display for TxKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TxKind::Deposit => write!(f, "Deposit"),
            TxKind::Withdrawal => write!(f, "Withdrawal"),
            TxKind::TransferTo(target) => write!(f, "Transfer to {}", target),
            TxKind::PinChange => write!(f, "PIN Change"),
        }
    }
}

/// An immutable entry in the account history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Transaction {
    /// Transaction type with associated data
    pub kind: TxKind,

    /// Signed amount: positive for credits, negative for debits, zero for PIN changes
    pub amount: Money,

    /// Balance right after this transaction was applied
    pub balance_after: Money,

    /// Local wall-clock time of creation
    pub timestamp: DateTime<Local>,
}

impl Transaction {
    /// Creates a transaction stamped with the current local time.
    pub fn new(kind: TxKind, amount: Money, balance_after: Money) -> Self {
        Transaction {
            kind,
            amount,
            balance_after,
            timestamp: Local::now(),
        }
    }

    /// Renders one mini statement line.
    ///
    /// Amounts are shown unsigned; the kind tells credits from debits.
    pub fn statement_line(&self) -> String {
        format!(
            "{} | {}: ${} | Balance: ${}",
            self.timestamp.format("%Y-%m-%d %H:%M"),
            self.kind,
            self.amount.abs(),
            self.balance_after
        )
    }
}
