//! Application layer containing the session logic.
//!
//! `ledger` holds the money rules, `registry` the customer and account bookkeeping,
//! and `session` the menu loop that ties both to the console.

pub mod ledger;
pub mod registry;
pub mod session;
