//! Interactive session: PIN entry followed by the main menu loop.
//!
//! The session owns the account and talks to the user only through the
//! [`InputProvider`] and [`Presenter`] collaborators, so a whole session can
//! be scripted in tests.

use crate::account::{Account, AuthOutcome};
use crate::config::AtmConfig;
use crate::error::{AmountParseError, LedgerError, Result};
use crate::menu::MenuOption;
use crate::money::Money;
use crate::terminal::{InputProvider, Presenter, Tone};
use log::debug;
use std::thread;
use std::time::Duration;

const MENU_WIDTH: usize = 40;
const BANNER_WIDTH: usize = 60;

const PIN_PROMPT: &str = "ENTER THE PIN: ";
const MENU_PROMPT: &str = "Choose option: ";
const PAUSE_PROMPT: &str = "Press Enter to continue...";

/// How a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionOutcome {
    /// User chose Exit from the menu.
    Exited,

    /// Card blocked during PIN entry.
    Blocked,
}

/// Drives one ATM session against one account.
pub struct Session<I, P> {
    account: Account,
    input: I,
    presenter: P,
    statement_length: usize,
    card_insert_delay: Duration,
    pause_after_action: bool,
}

impl<I: InputProvider, P: Presenter> Session<I, P> {
    /// Opens the configured account and prepares a session for it.
    pub fn new(config: &AtmConfig, input: I, presenter: P) -> Result<Self> {
        let account = Account::open(config)?;
        Ok(Self::with_account(account, config, input, presenter))
    }

    /// Runs a session against an existing account, taking only the terminal
    /// settings from `config`.
    pub fn with_account(account: Account, config: &AtmConfig, input: I, presenter: P) -> Self {
        Session {
            account,
            input,
            presenter,
            statement_length: config.statement_length,
            card_insert_delay: config.card_insert_delay,
            pause_after_action: config.pause_after_action,
        }
    }

    pub fn account(&self) -> &Account {
        &self.account
    }

    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    /// Runs the session until the user exits or the card is blocked.
    pub fn run(&mut self) -> Result<SessionOutcome> {
        self.insert_card()?;

        loop {
            let pin = self.input.read_secret(PIN_PROMPT)?;
            match self.account.authenticate(&pin) {
                AuthOutcome::Granted => {
                    self.menu_loop()?;
                    return Ok(SessionOutcome::Exited);
                }
                AuthOutcome::Denied { remaining } => {
                    self.presenter.show(
                        Tone::Error,
                        &format!("Incorrect PIN. {} attempts remaining.", remaining),
                    )?;
                }
                AuthOutcome::Blocked => {
                    self.presenter
                        .show(Tone::Error, "Card blocked. Please contact customer support.")?;
                    return Ok(SessionOutcome::Blocked);
                }
            }
        }
    }

    fn insert_card(&mut self) -> Result<()> {
        self.presenter.clear()?;
        self.presenter.show(
            Tone::Success,
            &format!("{:^width$}", "INSERT YOUR CARD", width = BANNER_WIDTH),
        )?;
        if !self.card_insert_delay.is_zero() {
            thread::sleep(self.card_insert_delay);
        }
        Ok(())
    }

    fn menu_loop(&mut self) -> Result<()> {
        loop {
            self.presenter.clear()?;
            self.render_menu()?;

            let choice = self.input.read_line(MENU_PROMPT)?;
            match choice.parse::<MenuOption>() {
                Ok(MenuOption::Exit) => {
                    self.presenter.show(Tone::Success, "Thank you for using our ATM.")?;
                    return Ok(());
                }
                Ok(option) => {
                    debug!("Menu selection: {:?}", option);
                    self.dispatch(option)?;
                }
                Err(e) => {
                    debug!("{}", e);
                    self.presenter.show(Tone::Error, "Invalid option. Please try again.")?;
                }
            }

            if self.pause_after_action {
                self.input.read_line(PAUSE_PROMPT)?;
            }
        }
    }

    fn render_menu(&mut self) -> Result<()> {
        let rule = "=".repeat(MENU_WIDTH);
        self.presenter.show(Tone::Accent, &rule)?;
        self.presenter.show(
            Tone::Heading,
            &format!("{:^width$}", "ATM SERVICES", width = MENU_WIDTH),
        )?;
        self.presenter.show(Tone::Accent, &rule)?;
        for option in MenuOption::ALL {
            self.presenter
                .show(Tone::Success, &format!("  {}. {}", option.number(), option.label()))?;
        }
        self.presenter.show(Tone::Accent, &rule)
    }

    fn dispatch(&mut self, option: MenuOption) -> Result<()> {
        match option {
            MenuOption::CheckBalance => {
                let balance = self.account.check_balance();
                self.presenter.show(Tone::Success, &format!("Balance: ${}", balance))
            }
            MenuOption::Deposit => {
                let amount = self.prompt_amount("Deposit amount: $")?;
                match self.account.try_deposit(amount) {
                    Ok(_) => self.presenter.show(Tone::Success, "Deposit successful!"),
                    Err(e) => self.presenter.show(Tone::Error, failure_message(&e)),
                }
            }
            MenuOption::Withdraw => {
                let amount = self.prompt_amount("Withdrawal amount: $")?;
                match self.account.try_withdraw(amount) {
                    Ok(_) => self.presenter.show(Tone::Success, "Withdrawal successful!"),
                    Err(e) => self.presenter.show(Tone::Error, failure_message(&e)),
                }
            }
            MenuOption::Transfer => {
                let target = self.input.read_line("Enter target account: ")?;
                let amount = self.prompt_amount("Transfer amount: $")?;
                match self.account.try_transfer(amount, &target) {
                    Ok(_) => self.presenter.show(Tone::Success, "Transfer successful!"),
                    Err(e) => {
                        debug!("Transfer to {:?} refused: {}", target, e);
                        self.presenter.show(Tone::Error, "Transfer failed.")
                    }
                }
            }
            MenuOption::ChangePin => {
                let new_pin = self.input.read_line("Enter new 4-digit PIN: ")?;
                match self.account.try_change_pin(&new_pin) {
                    Ok(_) => self.presenter.show(Tone::Success, "PIN changed successfully!"),
                    Err(_) => self.presenter.show(Tone::Error, "Invalid PIN format."),
                }
            }
            MenuOption::MiniStatement => self.render_statement(),
            MenuOption::Exit => Ok(()),
        }
    }

    fn render_statement(&mut self) -> Result<()> {
        self.presenter.show(Tone::Accent, "--- Mini Statement ---")?;

        let recent = self.account.recent_transactions(self.statement_length);
        if recent.is_empty() {
            return self.presenter.show(Tone::Plain, "No transactions yet.");
        }
        for tx in recent {
            self.presenter.show(Tone::Success, &tx.statement_line())?;
        }
        Ok(())
    }

    /// Prompts until the user types something that parses as an amount.
    fn prompt_amount(&mut self, prompt: &str) -> Result<Money> {
        loop {
            let raw = self.input.read_line(prompt)?;
            match raw.parse::<Money>() {
                Ok(amount) => return Ok(amount),
                Err(e) => {
                    debug!("Rejected amount {:?}: {}", raw, e);
                    let message = match e {
                        AmountParseError::TooPrecise(_) => {
                            "Invalid input. Amounts have at most 2 decimal places."
                        }
                        AmountParseError::Invalid(_) => "Invalid input. Please enter a number.",
                    };
                    self.presenter.show(Tone::Error, message)?;
                }
            }
        }
    }
}

fn failure_message(error: &LedgerError) -> &'static str {
    match error {
        LedgerError::InsufficientFunds { .. } => "Insufficient funds.",
        LedgerError::BalanceOverflow => "Amount too large.",
        _ => "Invalid amount.",
    }
}
