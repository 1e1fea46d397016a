/// A registered bank customer.
///
/// Every field is free text taken as typed; `national_id` is the lookup key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Customer {
    pub name: String,
    pub birth_date: String,
    pub national_id: String,
    pub address: String,
}
