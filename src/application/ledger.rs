use crate::config::WithdrawalLimits;
use crate::domain::balance::{Balance, Money};
use crate::domain::statement::{EntryKind, Statement};
use crate::error::{BankError, Result};
use rust_decimal::Decimal;

/// Everything a withdrawal is judged against, passed by field name so each value is
/// tied to the rule it feeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WithdrawalCheck {
    pub balance: Balance,
    pub amount: Decimal,
    pub limit: Decimal,
    pub withdrawals_today: u32,
    pub max_daily_withdrawals: u32,
}

/// Evaluates the withdrawal guards in their fixed order. The first failing guard
/// decides the error.
pub fn check_withdrawal(check: &WithdrawalCheck) -> Result<()> {
    if check.amount > check.balance.value() {
        Err(BankError::InsufficientFunds)
    } else if check.amount > check.limit {
        Err(BankError::WithdrawalLimitExceeded {
            limit: Money(check.limit),
        })
    } else if check.withdrawals_today >= check.max_daily_withdrawals {
        Err(BankError::DailyWithdrawalLimitReached {
            max: check.max_daily_withdrawals,
        })
    } else if check.amount > Decimal::ZERO {
        Ok(())
    } else {
        Err(BankError::InvalidAmount)
    }
}

/// Balance, statement and withdrawal counter of one session.
///
/// Operations validate first and mutate afterwards, so a rejected operation leaves
/// the ledger exactly as it was.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Ledger {
    balance: Balance,
    statement: Statement,
    withdrawals_today: u32,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn balance(&self) -> Balance {
        self.balance
    }

    pub fn statement(&self) -> &Statement {
        &self.statement
    }

    pub fn withdrawals_today(&self) -> u32 {
        self.withdrawals_today
    }

    /// Credits a positive amount and records it. Returns the new balance.
    pub fn deposit(&mut self, amount: Decimal) -> Result<Balance> {
        if amount <= Decimal::ZERO {
            tracing::debug!(%amount, "deposit rejected");
            return Err(BankError::InvalidAmount);
        }

        let Some(balance) = self.balance.checked_add(amount) else {
            tracing::warn!(%amount, balance = %self.balance, "deposit overflows balance");
            return Err(BankError::AmountOutOfRange);
        };

        self.balance = balance;
        self.statement.record(EntryKind::Deposit, amount);
        tracing::info!(%amount, balance = %self.balance, "deposit accepted");
        Ok(self.balance)
    }

    /// Debits an amount once every withdrawal guard passes. Returns the new balance.
    pub fn withdraw(&mut self, amount: Decimal, limits: &WithdrawalLimits) -> Result<Balance> {
        let check = WithdrawalCheck {
            balance: self.balance,
            amount,
            limit: limits.per_withdrawal,
            withdrawals_today: self.withdrawals_today,
            max_daily_withdrawals: limits.max_daily,
        };
        if let Err(e) = check_withdrawal(&check) {
            tracing::debug!(%amount, reason = %e, "withdrawal rejected");
            return Err(e);
        }

        let Some(balance) = self.balance.checked_sub(amount) else {
            return Err(BankError::AmountOutOfRange);
        };

        self.balance = balance;
        self.statement.record(EntryKind::Withdrawal, amount);
        self.withdrawals_today += 1;
        tracing::info!(
            %amount,
            balance = %self.balance,
            withdrawals_today = self.withdrawals_today,
            "withdrawal accepted"
        );
        Ok(self.balance)
    }
}
