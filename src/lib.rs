//! # Tripledger Core
//!
//! A library for tracking shared trip expenses and deriving each
//! participant's net balance.
//!
//! ## Features
//!
//! - **Heterogeneous splits**: equal, percentage, and share-unit policies
//!   per expense
//! - **Roster by usage**: participants are defined by the names expenses
//!   mention, not only by explicit registration
//! - **Lenient by contract**: malformed weights and degenerate splits
//!   degrade to defined fallbacks instead of failing
//! - **Strict validation, opt-in**: caller-side validators that reject what
//!   the core would absorb
//! - **Storage abstraction**: database-agnostic design with a trait-based
//!   store keyed by trip identifier
//!
//! ## Quick Start
//!
//! ```rust
//! use tripledger_core::{compute_balances, patterns, Member};
//! use bigdecimal::BigDecimal;
//!
//! let members = vec![Member::new("trip1".into(), "Asha".into())];
//! let dinner = patterns::equal_expense(
//!     "trip1".into(),
//!     "Dinner".into(),
//!     BigDecimal::from(90),
//!     "Asha".into(),
//!     vec!["Asha".into(), "Ben".into(), "Cara".into()],
//! )
//! .unwrap();
//!
//! let balances = compute_balances(&members, &[dinner]);
//! assert_eq!(balances["Asha"].balance, BigDecimal::from(60));
//! ```

pub mod ledger;
pub mod split;
pub mod traits;
pub mod types;
pub mod utils;

// Re-export commonly used types
pub use ledger::*;
pub use split::*;
pub use traits::*;
pub use types::*;

// Re-export expense patterns for convenience
pub use ledger::expense::patterns;
