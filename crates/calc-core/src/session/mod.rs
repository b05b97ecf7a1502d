//! The interactive calculator loop.
//!
//! A [`Session`] owns the console and the history for one run. Each call to
//! [`Session::step`] performs a single transition of the menu state machine;
//! [`Session::run`] drives it until the user exits. Arithmetic failures are
//! reported on the console and never leave the loop. Only console I/O
//! errors are returned.

use std::io::{BufRead, Write};

use calc_common::Result;
use tracing::{debug, info};

use crate::history::{History, HistoryEntry};
use crate::input::{Console, NumberInput};
use crate::menu::{self, MenuChoice, DEFAULT_TITLE};
use crate::number::Number;
use crate::ops::Operation;

pub const CHOICE_PROMPT: &str = "Enter choice (0-5): ";
pub const FIRST_OPERAND_PROMPT: &str = "Enter first number (or 'q' to cancel): ";
pub const SECOND_OPERAND_PROMPT: &str = "Enter second number (or 'q' to cancel): ";
pub const FAREWELL: &str = "Exiting... Goodbye!";
pub const INVALID_OPTION: &str = "Invalid option. Try again.";

#[cfg(test)]
mod tests;

/// Where the loop is between two transitions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum State {
    Menu,
    CollectOperandA(Operation),
    CollectOperandB(Operation, Number),
    Compute(Operation, Number, Number),
    ShowHistory,
    Exit,
}

pub struct Session<R, W> {
    console: Console<R, W>,
    history: History,
    title: String,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(console: Console<R, W>) -> Self {
        Self {
            console,
            history: History::new(),
            title: DEFAULT_TITLE.to_string(),
        }
    }

    /// Replace the menu banner title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn into_console(self) -> Console<R, W> {
        self.console
    }

    /// Run until the user picks exit or input ends.
    pub fn run(&mut self) -> Result<()> {
        let mut state = State::Menu;
        while state != State::Exit {
            state = self.step(state)?;
        }
        info!(computations = self.history.len(), "session finished");
        Ok(())
    }

    /// Perform one transition.
    pub fn step(&mut self, state: State) -> Result<State> {
        let next = match state {
            State::Menu => self.menu()?,
            State::CollectOperandA(op) => {
                match self.console.read_number(FIRST_OPERAND_PROMPT)? {
                    NumberInput::Value(a) => State::CollectOperandB(op, a),
                    NumberInput::Cancelled => {
                        debug!(op = op.label(), "cancelled at first operand");
                        State::Menu
                    }
                }
            }
            State::CollectOperandB(op, a) => {
                match self.console.read_number(SECOND_OPERAND_PROMPT)? {
                    NumberInput::Value(b) => State::Compute(op, a, b),
                    NumberInput::Cancelled => {
                        debug!(op = op.label(), "cancelled at second operand");
                        State::Menu
                    }
                }
            }
            State::Compute(op, a, b) => {
                self.compute(op, a, b)?;
                State::Menu
            }
            State::ShowHistory => {
                self.history.render(self.console.output())?;
                State::Menu
            }
            State::Exit => State::Exit,
        };
        Ok(next)
    }

    fn menu(&mut self) -> Result<State> {
        menu::render_menu(self.console.output(), &self.title)?;

        let Some(text) = self.console.prompt_line(CHOICE_PROMPT)? else {
            debug!("input closed at menu prompt");
            return self.farewell();
        };

        match MenuChoice::parse(&text) {
            Some(MenuChoice::Exit) => self.farewell(),
            Some(MenuChoice::ShowHistory) => Ok(State::ShowHistory),
            Some(MenuChoice::Compute(op)) => {
                debug!(op = op.label(), "operation selected");
                Ok(State::CollectOperandA(op))
            }
            None => {
                debug!(choice = %text, "unknown menu choice");
                writeln!(self.console.output(), "{INVALID_OPTION}")?;
                Ok(State::Menu)
            }
        }
    }

    fn farewell(&mut self) -> Result<State> {
        writeln!(self.console.output(), "{FAREWELL}")?;
        Ok(State::Exit)
    }

    fn compute(&mut self, op: Operation, a: Number, b: Number) -> Result<()> {
        match op.apply(a, b) {
            Ok(result) => {
                let entry = HistoryEntry::new(a, op, b, result.normalized());
                writeln!(self.console.output(), "Result: {entry}")?;
                info!(expression = %entry, "computed");
                self.history.push(entry);
            }
            Err(e) => {
                debug!(op = op.label(), error = %e, "computation failed");
                writeln!(self.console.output(), "Error: {e}")?;
            }
        }
        Ok(())
    }
}
