#![doc(test(attr(deny(warnings))))]

//! Finly tracks installment debts, savings goals and monthly cash flow for a
//! single in-memory session, and drives them from a small command shell.

pub mod cli;
pub mod errors;
pub mod utils;

pub use finly_config as config;
pub use finly_core as core;
pub use finly_domain as domain;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Finly tracing initialized.");
    });
}
