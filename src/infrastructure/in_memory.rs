use crate::domain::account::Account;
use crate::domain::customer::Customer;
use crate::domain::ports::{AccountStore, CustomerStore};

/// An in-memory store for registered customers.
///
/// Backed by a `Vec` so iteration follows registration order. A session is the only
/// owner, so no synchronization is involved.
#[derive(Debug, Default, Clone)]
pub struct InMemoryCustomerStore {
    customers: Vec<Customer>,
}

impl InMemoryCustomerStore {
    /// Creates a new, empty in-memory customer store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl CustomerStore for InMemoryCustomerStore {
    fn insert(&mut self, customer: Customer) {
        self.customers.push(customer);
    }

    fn customers(&self) -> &[Customer] {
        &self.customers
    }
}

/// An in-memory store for opened accounts, kept in opening order.
#[derive(Debug, Default, Clone)]
pub struct InMemoryAccountStore {
    accounts: Vec<Account>,
}

impl InMemoryAccountStore {
    /// Creates a new, empty in-memory account store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl AccountStore for InMemoryAccountStore {
    fn insert(&mut self, account: Account) {
        self.accounts.push(account);
    }

    fn accounts(&self) -> &[Account] {
        &self.accounts
    }
}
