use crate::domain::balance::Money;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BankError {
    #[error("Operation failed! The amount entered is invalid.")]
    InvalidAmount,
    #[error("Operation failed! '{input}' is not a valid amount.")]
    MalformedAmount { input: String },
    #[error("Operation failed! The amount is out of the supported range.")]
    AmountOutOfRange,
    #[error("Operation failed! You do not have enough balance.")]
    InsufficientFunds,
    #[error("Operation failed! The withdrawal amount exceeds the limit of R$ {limit}.")]
    WithdrawalLimitExceeded { limit: Money },
    #[error("Operation failed! Maximum number of {max} daily withdrawals reached.")]
    DailyWithdrawalLimitReached { max: u32 },
    #[error("A customer with national ID {national_id} already exists!")]
    DuplicateCustomer { national_id: String },
    #[error(
        "Customer with national ID {national_id} not found! Create the customer before opening an account."
    )]
    CustomerNotFound { national_id: String },
    #[error("Invalid operation! Please select the desired operation again.")]
    UnknownCommand { token: String },
    #[error("Input stream closed")]
    InputClosed,
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl BankError {
    /// Rejections the operator can recover from by picking another menu entry.
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, BankError::InputClosed | BankError::IoError(_))
    }
}

pub type Result<T> = std::result::Result<T, BankError>;

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_limit_message_shows_two_decimals() {
        let err = BankError::WithdrawalLimitExceeded {
            limit: Money(dec!(500)),
        };
        assert_eq!(
            err.to_string(),
            "Operation failed! The withdrawal amount exceeds the limit of R$ 500.00."
        );

        let err = BankError::WithdrawalLimitExceeded {
            limit: Money(dec!(99.995)),
        };
        assert_eq!(
            err.to_string(),
            "Operation failed! The withdrawal amount exceeds the limit of R$ 100.00."
        );
    }

    #[test]
    fn test_recoverable_split() {
        assert!(BankError::InvalidAmount.is_recoverable());
        assert!(BankError::AmountOutOfRange.is_recoverable());
        assert!(
            BankError::UnknownCommand {
                token: "x".to_string()
            }
            .is_recoverable()
        );
        assert!(!BankError::InputClosed.is_recoverable());
        assert!(!BankError::from(std::io::Error::other("boom")).is_recoverable());
    }
}
