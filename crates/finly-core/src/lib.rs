//! finly-core
//!
//! Aggregators and mutation services for debts, savings goals and monthly finances.
//! Depends on finly-domain. No CLI, no terminal I/O, no storage.

pub mod dashboard;
pub mod debt_service;
pub mod error;
pub mod finance_service;
pub mod math;
pub mod savings_service;

pub use dashboard::*;
pub use debt_service::*;
pub use error::CoreError;
pub use finance_service::*;
pub use math::*;
pub use savings_service::*;

#[cfg(test)]
mod tests;
