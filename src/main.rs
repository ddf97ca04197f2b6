//! ATM Simulator CLI
//!
//! Runs one interactive session against the built-in account.
//!
//! # Usage
//!
//! ```bash
//! cargo run
//! ```
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: Set to `debug` or `warn` to control logging verbosity

use atm_simulator::{AtmConfig, Result, Session, TerminalInput, TerminalPresenter};
use log::debug;
use std::process;

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let config = AtmConfig::default();
    let mut session = Session::new(&config, TerminalInput::stdin(), TerminalPresenter::stdout())?;

    let outcome = session.run()?;
    debug!("Session ended: {:?}", outcome);

    Ok(())
}
