//! Operator-facing adapters.

pub mod console;
