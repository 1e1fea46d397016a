use crate::application::ledger::Ledger;
use crate::application::registry;
use crate::config::SessionConfig;
use crate::domain::account::Account;
use crate::domain::customer::Customer;
use crate::domain::ports::{AccountStoreBox, CustomerStoreBox};
use crate::error::{BankError, Result};
use crate::infrastructure::in_memory::{InMemoryAccountStore, InMemoryCustomerStore};
use crate::interfaces::console::input::Console;
use crate::interfaces::console::render;
use std::io::{BufRead, Write};
use std::str::FromStr;

/// A menu entry typed by the operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Deposit,
    Withdraw,
    Statement,
    NewCustomer,
    NewAccount,
    ListAccounts,
    Quit,
}

impl FromStr for Command {
    type Err = BankError;

    /// Tokens are case-sensitive and must match exactly.
    fn from_str(token: &str) -> Result<Self> {
        match token {
            "d" => Ok(Command::Deposit),
            "s" => Ok(Command::Withdraw),
            "e" => Ok(Command::Statement),
            "nu" => Ok(Command::NewCustomer),
            "nc" => Ok(Command::NewAccount),
            "lc" => Ok(Command::ListAccounts),
            "q" => Ok(Command::Quit),
            _ => Err(BankError::UnknownCommand {
                token: token.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

/// The interactive session.
///
/// Owns all mutable state for one run: the ledger plus the customer and account
/// stores. `run` renders the menu, reads a command, dispatches it and repeats until
/// the operator quits or input ends.
pub struct Session<R: BufRead, W: Write> {
    console: Console<R, W>,
    config: SessionConfig,
    ledger: Ledger,
    customers: CustomerStoreBox,
    accounts: AccountStoreBox,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Creates a session backed by in-memory stores.
    pub fn new(input: R, output: W, config: SessionConfig) -> Self {
        Self::with_stores(
            input,
            output,
            config,
            Box::new(InMemoryCustomerStore::new()),
            Box::new(InMemoryAccountStore::new()),
        )
    }

    pub fn with_stores(
        input: R,
        output: W,
        config: SessionConfig,
        customers: CustomerStoreBox,
        accounts: AccountStoreBox,
    ) -> Self {
        Self {
            console: Console::new(input, output),
            config,
            ledger: Ledger::new(),
            customers,
            accounts,
        }
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    pub fn customers(&self) -> &[Customer] {
        self.customers.customers()
    }

    pub fn accounts(&self) -> &[Account] {
        self.accounts.accounts()
    }

    /// Consumes the session and hands back the output sink.
    pub fn into_output(self) -> W {
        self.console.into_output()
    }

    /// Runs the menu loop to completion.
    ///
    /// Rejected operations are reported and the loop continues. Only console I/O
    /// failures end the session with an error.
    pub fn run(&mut self) -> Result<()> {
        render::greeting(self.console.output())?;

        loop {
            let outcome = self
                .console
                .read_line(render::MENU)
                .and_then(|token| token.parse::<Command>())
                .and_then(|command| self.dispatch(command));

            match outcome {
                Ok(Flow::Continue) => {}
                Ok(Flow::Quit) => break,
                Err(BankError::InputClosed) => {
                    tracing::info!("input closed, ending session");
                    break;
                }
                Err(e) if e.is_recoverable() => {
                    render::failure(self.console.output(), &e)?;
                }
                Err(e) => {
                    tracing::error!(error = %e, "session aborted");
                    return Err(e);
                }
            }
        }

        render::goodbye(self.console.output())?;
        self.console.output().flush()?;
        Ok(())
    }

    fn dispatch(&mut self, command: Command) -> Result<Flow> {
        tracing::debug!(?command, "dispatching");
        match command {
            Command::Deposit => self.deposit()?,
            Command::Withdraw => self.withdraw()?,
            Command::Statement => render::statement(
                self.console.output(),
                self.ledger.balance(),
                self.ledger.statement(),
            )?,
            Command::NewCustomer => self.new_customer()?,
            Command::NewAccount => self.new_account()?,
            Command::ListAccounts => {
                render::accounts(self.console.output(), self.accounts.accounts())?
            }
            Command::Quit => return Ok(Flow::Quit),
        }
        Ok(Flow::Continue)
    }

    fn deposit(&mut self) -> Result<()> {
        let amount = self.console.read_amount("Enter the deposit amount: ")?;
        self.ledger.deposit(amount)?;
        render::success(self.console.output(), "Deposit completed successfully!")?;
        Ok(())
    }

    fn withdraw(&mut self) -> Result<()> {
        let amount = self.console.read_amount("Enter the withdrawal amount: ")?;
        self.ledger.withdraw(amount, &self.config.limits)?;
        render::success(self.console.output(), "Withdrawal completed successfully!")?;
        Ok(())
    }

    fn new_customer(&mut self) -> Result<()> {
        let national_id = self.console.read_line("Enter the national ID (digits only): ")?;
        registry::ensure_unregistered(&national_id, &*self.customers)?;

        let name = self.console.read_line("Enter the full name: ")?;
        let birth_date = self.console.read_line("Enter the birth date (dd-mm-yyyy): ")?;
        let address = self.console.read_line(
            "Enter the address (street, number - district - city/state): ",
        )?;

        let message = format!("Customer {name} created successfully!");
        registry::create_customer(
            &mut *self.customers,
            Customer {
                name,
                birth_date,
                national_id,
                address,
            },
        )?;
        render::success(self.console.output(), &message)?;
        Ok(())
    }

    fn new_account(&mut self) -> Result<()> {
        let national_id = self
            .console
            .read_line("Enter the customer's national ID to link the account: ")?;
        let account = registry::create_account(
            &self.config.branch,
            &national_id,
            &*self.customers,
            &mut *self.accounts,
        )?;

        let message = format!(
            "Account {} (Branch {}) created successfully for {}!",
            account.number, account.branch, account.holder.name
        );
        render::success(self.console.output(), &message)?;
        Ok(())
    }
}
