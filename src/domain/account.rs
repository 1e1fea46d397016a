use super::customer::Customer;

/// Branch code used when no other is configured.
pub const DEFAULT_BRANCH: &str = "0001";

/// A checking account owned by exactly one customer.
///
/// Customers are never updated after registration, so the account keeps its own copy
/// of the holder record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    pub branch: String,
    /// Sequential number, starting at 1.
    pub number: u32,
    pub holder: Customer,
}
