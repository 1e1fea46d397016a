use super::account::Account;
use super::customer::Customer;

pub trait CustomerStore {
    fn insert(&mut self, customer: Customer);
    fn customers(&self) -> &[Customer];

    /// Linear scan in insertion order; the earliest match wins.
    fn find_by_national_id(&self, national_id: &str) -> Option<&Customer> {
        self.customers()
            .iter()
            .find(|customer| customer.national_id == national_id)
    }
}

pub trait AccountStore {
    fn insert(&mut self, account: Account);
    fn accounts(&self) -> &[Account];

    fn len(&self) -> usize {
        self.accounts().len()
    }

    fn is_empty(&self) -> bool {
        self.accounts().is_empty()
    }
}

pub type CustomerStoreBox = Box<dyn CustomerStore>;
pub type AccountStoreBox = Box<dyn AccountStore>;
