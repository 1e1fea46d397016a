use super::balance::Money;
use rust_decimal::Decimal;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Deposit,
    Withdrawal,
}

/// A single statement line. Never modified once recorded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatementEntry {
    pub kind: EntryKind,
    pub amount: Decimal,
}

impl fmt::Display for StatementEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            EntryKind::Deposit => write!(f, "Deposit:\tR$ {}", Money(self.amount)),
            EntryKind::Withdrawal => write!(f, "Withdrawal:\t\tR$ {}", Money(self.amount)),
        }
    }
}

/// Append-only log of the movements made during a session, in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Statement {
    entries: Vec<StatementEntry>,
}

impl Statement {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, kind: EntryKind, amount: Decimal) {
        self.entries.push(StatementEntry { kind, amount });
    }

    pub fn entries(&self) -> &[StatementEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
