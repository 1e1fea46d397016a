//! Domain layer: the records a session owns and the ports used to store them.

pub mod account;
pub mod balance;
pub mod customer;
pub mod ports;
pub mod statement;
