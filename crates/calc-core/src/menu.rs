//! Menu selectors and rendering.

use std::io::{self, Write};

use crate::ops::Operation;

/// Title shown in the menu banner unless the config overrides it.
pub const DEFAULT_TITLE: &str = "Simple CLI Calculator";

/// An action the user can pick from the menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MenuChoice {
    Compute(Operation),
    ShowHistory,
    Exit,
}

impl MenuChoice {
    /// Map a typed selector to its action. Surrounding whitespace is ignored.
    pub fn parse(text: &str) -> Option<MenuChoice> {
        match text.trim() {
            "1" => Some(MenuChoice::Compute(Operation::Add)),
            "2" => Some(MenuChoice::Compute(Operation::Subtract)),
            "3" => Some(MenuChoice::Compute(Operation::Multiply)),
            "4" => Some(MenuChoice::Compute(Operation::Divide)),
            "5" => Some(MenuChoice::ShowHistory),
            "0" => Some(MenuChoice::Exit),
            _ => None,
        }
    }

    /// All choices in display order.
    pub fn all() -> [MenuChoice; 6] {
        [
            MenuChoice::Compute(Operation::Add),
            MenuChoice::Compute(Operation::Subtract),
            MenuChoice::Compute(Operation::Multiply),
            MenuChoice::Compute(Operation::Divide),
            MenuChoice::ShowHistory,
            MenuChoice::Exit,
        ]
    }

    pub fn selector(self) -> char {
        match self {
            MenuChoice::Compute(Operation::Add) => '1',
            MenuChoice::Compute(Operation::Subtract) => '2',
            MenuChoice::Compute(Operation::Multiply) => '3',
            MenuChoice::Compute(Operation::Divide) => '4',
            MenuChoice::ShowHistory => '5',
            MenuChoice::Exit => '0',
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            MenuChoice::Compute(Operation::Add) => "Add (+)",
            MenuChoice::Compute(Operation::Subtract) => "Subtract (-)",
            MenuChoice::Compute(Operation::Multiply) => "Multiply (*)",
            MenuChoice::Compute(Operation::Divide) => "Divide (/)",
            MenuChoice::ShowHistory => "View history",
            MenuChoice::Exit => "Exit",
        }
    }
}

/// Print the banner, one line per choice, and a closing rule as wide as the banner.
pub fn render_menu<W: Write>(out: &mut W, title: &str) -> io::Result<()> {
    let banner = format!("==== {title} ====");
    writeln!(out)?;
    writeln!(out, "{banner}")?;
    for choice in MenuChoice::all() {
        writeln!(out, "{}) {}", choice.selector(), choice.label())?;
    }
    writeln!(out, "{}", "=".repeat(banner.chars().count()))?;
    writeln!(out)
}
