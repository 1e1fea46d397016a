use crate::domain::account::Account;
use crate::domain::balance::Balance;
use crate::domain::statement::Statement;
use crate::error::BankError;
use std::io::{self, Write};

pub const MENU: &str = "\n
================ MENU ================
[d]\tDeposit
[s]\tWithdraw
[e]\tStatement
[nu]\tNew customer
[nc]\tNew account
[lc]\tList accounts
[q]\tQuit
=> ";

const RULE: &str = "==========================================";
const SEPARATOR: &str = "-------------------------------------------------";

pub fn greeting<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "Welcome to DIO Bank!")
}

pub fn goodbye<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "\nThank you for using our system. Goodbye!")
}

pub fn success<W: Write>(out: &mut W, message: &str) -> io::Result<()> {
    writeln!(out, "\n=== {message} ===")
}

pub fn failure<W: Write>(out: &mut W, error: &BankError) -> io::Result<()> {
    writeln!(out, "\n@@@ {error} @@@")
}

/// Prints every movement in order, then the balance.
pub fn statement<W: Write>(out: &mut W, balance: Balance, statement: &Statement) -> io::Result<()> {
    writeln!(out, "\n================ STATEMENT ================")?;
    if statement.is_empty() {
        writeln!(out, "No movements were recorded.")?;
    } else {
        for entry in statement.entries() {
            writeln!(out, "{entry}")?;
        }
    }
    writeln!(out, "\nBalance:\t\tR$ {balance}")?;
    writeln!(out, "{RULE}")
}

pub fn accounts<W: Write>(out: &mut W, accounts: &[Account]) -> io::Result<()> {
    if accounts.is_empty() {
        return writeln!(out, "\n@@@ No accounts registered in the system. @@@");
    }

    writeln!(out, "\n================ ACCOUNTS ================")?;
    for account in accounts {
        writeln!(out, "Branch: \t{}", account.branch)?;
        writeln!(out, "Account: \t{}", account.number)?;
        writeln!(out, "Holder: \t{}", account.holder.name)?;
        writeln!(out, "{SEPARATOR}")?;
    }
    writeln!(out, "{RULE}")
}
