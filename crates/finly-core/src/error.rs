//! Failures surfaced by the core services.

use finly_domain::ValidationError;
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationError),
    #[error("Debt not found: {0}")]
    DebtNotFound(Uuid),
    #[error("Savings goal not found: {0}")]
    GoalNotFound(Uuid),
}
