//! Main menu options.

use crate::error::UnknownOption;
use std::str::FromStr;

/// One entry of the main menu, selected by its number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuOption {
    CheckBalance,
    Deposit,
    Withdraw,
    Transfer,
    ChangePin,
    MiniStatement,
    Exit,
}

impl MenuOption {
    /// All options in display order.
    pub const ALL: [MenuOption; 7] = [
        MenuOption::CheckBalance,
        MenuOption::Deposit,
        MenuOption::Withdraw,
        MenuOption::Transfer,
        MenuOption::ChangePin,
        MenuOption::MiniStatement,
        MenuOption::Exit,
    ];

    /// The number the user types to pick this option.
    pub fn number(self) -> u8 {
        match self {
            MenuOption::CheckBalance => 1,
            MenuOption::Deposit => 2,
            MenuOption::Withdraw => 3,
            MenuOption::Transfer => 4,
            MenuOption::ChangePin => 5,
            MenuOption::MiniStatement => 6,
            MenuOption::Exit => 7,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            MenuOption::CheckBalance => "Check Balance",
            MenuOption::Deposit => "Deposit",
            MenuOption::Withdraw => "Withdraw",
            MenuOption::Transfer => "Transfer",
            MenuOption::ChangePin => "Change PIN",
            MenuOption::MiniStatement => "Mini Statement",
            MenuOption::Exit => "Exit",
        }
    }
}

impl FromStr for MenuOption {
    type Err = UnknownOption;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let choice = s.trim();
        MenuOption::ALL
            .into_iter()
            .find(|option| choice == option.number().to_string())
            .ok_or_else(|| UnknownOption(choice.to_string()))
    }
}
