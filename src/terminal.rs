//! Input and presentation collaborators used by the session.
//!
//! The session only sees the [`InputProvider`] and [`Presenter`] traits;
//! [`TerminalInput`] and [`TerminalPresenter`] are the stdin/stdout versions
//! used by the binary.

use crate::error::{AtmError, Result};
use crossterm::cursor::MoveTo;
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};
use crossterm::terminal::{Clear, ClearType};
use crossterm::{execute, queue};
use dialoguer::Password;
use std::io::{self, BufRead, IsTerminal, StdinLock, Stdout, Write};

/// Supplies lines typed by the user.
pub trait InputProvider {
    /// Reads a line without echoing it (PIN entry).
    fn read_secret(&mut self, prompt: &str) -> Result<String>;

    /// Reads a plain line with the trailing newline removed.
    fn read_line(&mut self, prompt: &str) -> Result<String>;
}

/// How a message should be presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Heading,
    Accent,
    Plain,
    Success,
    Error,
}

impl Tone {
    fn color(self) -> Color {
        match self {
            Tone::Heading => Color::Cyan,
            Tone::Accent => Color::Yellow,
            Tone::Plain => Color::White,
            Tone::Success => Color::Green,
            Tone::Error => Color::Red,
        }
    }
}

/// Receives everything the session wants to show.
pub trait Presenter {
    fn show(&mut self, tone: Tone, text: &str) -> Result<()>;

    /// Clears the screen before a new page.
    fn clear(&mut self) -> Result<()>;
}

/// Line input from any buffered reader, masked through `dialoguer` when
/// reading from an interactive terminal.
pub struct TerminalInput<R> {
    reader: R,
    masked: bool,
}

impl TerminalInput<StdinLock<'static>> {
    /// Reads from stdin, masking secrets only when stdin is a terminal.
    pub fn stdin() -> Self {
        let stdin = io::stdin();
        let masked = stdin.is_terminal();
        TerminalInput {
            reader: stdin.lock(),
            masked,
        }
    }
}

impl<R: BufRead> TerminalInput<R> {
    /// Wraps a reader. Secrets are read as plain lines.
    pub fn new(reader: R) -> Self {
        TerminalInput {
            reader,
            masked: false,
        }
    }

    fn next_line(&mut self, prompt: &str) -> Result<String> {
        let mut stdout = io::stdout().lock();
        write!(stdout, "{}", prompt)?;
        stdout.flush()?;
        drop(stdout);

        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Err(AtmError::InputClosed);
        }
        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);
        Ok(line)
    }
}

impl<R: BufRead> InputProvider for TerminalInput<R> {
    fn read_secret(&mut self, prompt: &str) -> Result<String> {
        if !self.masked {
            return self.next_line(prompt);
        }

        // dialoguer appends its own ": " separator
        let label = prompt.trim_end_matches([':', ' ']);
        let secret = Password::new()
            .with_prompt(label)
            .allow_empty_password(true)
            .interact()?;
        Ok(secret)
    }

    fn read_line(&mut self, prompt: &str) -> Result<String> {
        self.next_line(prompt)
    }
}

/// Writes messages to a terminal, coloring them and clearing the screen
/// only when `styled` is set.
pub struct TerminalPresenter<W: Write> {
    out: W,
    styled: bool,
}

impl TerminalPresenter<Stdout> {
    pub fn stdout() -> Self {
        let out = io::stdout();
        let styled = out.is_terminal();
        TerminalPresenter { out, styled }
    }
}

impl<W: Write> TerminalPresenter<W> {
    pub fn new(out: W, styled: bool) -> Self {
        TerminalPresenter { out, styled }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Presenter for TerminalPresenter<W> {
    fn show(&mut self, tone: Tone, text: &str) -> Result<()> {
        if self.styled {
            queue!(
                self.out,
                SetForegroundColor(tone.color()),
                Print(text),
                ResetColor,
                Print("\n")
            )?;
        } else {
            writeln!(self.out, "{}", text)?;
        }
        self.out.flush()?;
        Ok(())
    }

    fn clear(&mut self) -> Result<()> {
        if self.styled {
            execute!(self.out, Clear(ClearType::All), MoveTo(0, 0))?;
        }
        Ok(())
    }
}
