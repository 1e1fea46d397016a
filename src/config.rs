use crate::domain::account::DEFAULT_BRANCH;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Largest amount a single withdrawal may take.
pub const DEFAULT_WITHDRAWAL_LIMIT: Decimal = dec!(500);
/// Withdrawals allowed per session.
pub const DEFAULT_MAX_DAILY_WITHDRAWALS: u32 = 3;

/// Rules checked before a withdrawal is accepted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WithdrawalLimits {
    pub per_withdrawal: Decimal,
    pub max_daily: u32,
}

impl Default for WithdrawalLimits {
    fn default() -> Self {
        Self {
            per_withdrawal: DEFAULT_WITHDRAWAL_LIMIT,
            max_daily: DEFAULT_MAX_DAILY_WITHDRAWALS,
        }
    }
}

/// Fixed parameters of a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    /// Branch code stamped on every new account.
    pub branch: String,
    pub limits: WithdrawalLimits,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            branch: DEFAULT_BRANCH.to_string(),
            limits: WithdrawalLimits::default(),
        }
    }
}
