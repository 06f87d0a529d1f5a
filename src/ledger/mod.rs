//! Ledger module containing roster derivation, balance accumulation, and
//! the trip orchestrator

pub mod balance;
pub mod core;
pub mod expense;
pub mod roster;

pub use balance::*;
pub use self::core::*;
pub use expense::*;
pub use roster::*;
