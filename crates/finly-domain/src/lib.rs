//! finly-domain
//!
//! Pure domain models (Debt, SavingsGoal, Responsibility, ExtraExpense, FinanceSnapshot, Session).
//! No I/O, no CLI, no storage. Only data types, validation and the period projector.

pub mod common;
pub mod debt;
pub mod finance;
pub mod period;
pub mod savings;
pub mod session;
pub mod validation;

pub use common::*;
pub use debt::*;
pub use finance::*;
pub use period::*;
pub use savings::*;
pub use session::*;
pub use validation::*;
