//! Reputation error types

use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ReputationError {
    #[error("Reward pool exhausted: requested {requested}, available {available}")]
    BudgetExhausted { requested: f64, available: f64 },

    #[error("Invalid reward amount: {0}")]
    InvalidAmount(f64),
}

pub type Result<T> = std::result::Result<T, ReputationError>;
