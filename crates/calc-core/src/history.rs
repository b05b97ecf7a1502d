//! Session-scoped record of successful computations.

use std::fmt;
use std::io::{self, Write};

use crate::number::Number;
use crate::ops::Operation;

/// One successful computation, rendered as `"<a> <symbol> <b> = <result>"`.
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryEntry {
    pub lhs: Number,
    pub op: Operation,
    pub rhs: Number,
    pub result: Number,
}

impl HistoryEntry {
    pub fn new(lhs: Number, op: Operation, rhs: Number, result: Number) -> Self {
        Self {
            lhs,
            op,
            rhs,
            result,
        }
    }
}

impl fmt::Display for HistoryEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} = {}",
            self.lhs,
            self.op.symbol(),
            self.rhs,
            self.result
        )
    }
}

/// Append-only list of entries in the order they were computed.
#[derive(Debug, Default, Clone)]
pub struct History {
    entries: Vec<HistoryEntry>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, entry: HistoryEntry) {
        self.entries.push(entry);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter()
    }

    /// Entries paired with their 1-based display index.
    pub fn numbered(&self) -> impl Iterator<Item = (usize, &HistoryEntry)> {
        self.entries.iter().enumerate().map(|(i, e)| (i + 1, e))
    }

    /// Print the history listing, or `No history yet.` when empty.
    pub fn render<W: Write>(&self, out: &mut W) -> io::Result<()> {
        if self.is_empty() {
            return writeln!(out, "No history yet.");
        }
        writeln!(out)?;
        writeln!(out, "--- History ---")?;
        for (n, entry) in self.numbered() {
            writeln!(out, "{n}. {entry}")?;
        }
        Ok(())
    }
}
