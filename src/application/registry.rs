use crate::domain::account::Account;
use crate::domain::customer::Customer;
use crate::domain::ports::{AccountStore, CustomerStore};
use crate::error::{BankError, Result};

/// Returns the first customer registered under `national_id`.
pub fn find_customer_by_id<'a>(
    national_id: &str,
    customers: &'a dyn CustomerStore,
) -> Option<&'a Customer> {
    customers.find_by_national_id(national_id)
}

/// Fails if `national_id` is already taken.
///
/// Checked before the remaining customer fields are collected.
pub fn ensure_unregistered(national_id: &str, customers: &dyn CustomerStore) -> Result<()> {
    match find_customer_by_id(national_id, customers) {
        Some(_) => Err(BankError::DuplicateCustomer {
            national_id: national_id.to_string(),
        }),
        None => Ok(()),
    }
}

/// Adds a customer to the store in place.
pub fn create_customer(customers: &mut dyn CustomerStore, customer: Customer) -> Result<()> {
    ensure_unregistered(&customer.national_id, customers)?;
    tracing::info!(national_id = %customer.national_id, "customer registered");
    customers.insert(customer);
    Ok(())
}

/// Opens the next sequential account for an existing customer.
///
/// The account number is the store length plus one, so rejected attempts never
/// consume a number.
pub fn create_account(
    branch: &str,
    national_id: &str,
    customers: &dyn CustomerStore,
    accounts: &mut dyn AccountStore,
) -> Result<Account> {
    let Some(holder) = find_customer_by_id(national_id, customers) else {
        tracing::debug!(national_id, "account rejected, unknown customer");
        return Err(BankError::CustomerNotFound {
            national_id: national_id.to_string(),
        });
    };

    let account = Account {
        branch: branch.to_string(),
        number: accounts.len() as u32 + 1,
        holder: holder.clone(),
    };
    tracing::info!(branch, number = account.number, "account opened");
    accounts.insert(account.clone());
    Ok(account)
}
